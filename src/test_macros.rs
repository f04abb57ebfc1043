//! Declarative macros for generating CLI parsing tests.
//!
//! Option parsing has many small cases that differ only in their argv and
//! expected result. These macros let a test module list the cases and
//! generate the test functions. Callers need `rstest::rstest` in scope.

/// Generate a test that parses flags and checks a single `Args` field.
///
/// # Example
///
/// ```ignore
/// cli_option_test! {
///     test_name: test_rowcount,
///     args: ["-n", "10"],
///     field: rowcount,
///     expected: Some(10),
/// }
/// ```
#[macro_export]
macro_rules! cli_option_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),*],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = <$crate::cli::Args as clap::Parser>::try_parse_from([
                "mongostat",
                $($arg),*
            ]).unwrap();
            assert_eq!(args.$field, $expected,
                concat!("Field ", stringify!($field), " mismatch"));
        }
    };
}

/// Generate a test that verifies flag parsing fails for the given args.
#[macro_export]
macro_rules! cli_error_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = <$crate::cli::Args as clap::Parser>::try_parse_from([
                "mongostat",
                $($arg),+
            ]);
            assert!(result.is_err(),
                concat!("Args should be rejected: ", stringify!($($arg),+)));
        }
    };
}

/// Generate a test that fully resolves argv and checks the URI and interval.
///
/// # Example
///
/// ```ignore
/// positional_ok_test! {
///     test_name: test_interval_only,
///     args: ["2"],
///     connection_string: "mongodb://localhost/",
///     sleep_interval: 2,
/// }
/// ```
#[macro_export]
macro_rules! positional_ok_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),*],
        connection_string: $uri:expr,
        sleep_interval: $interval:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let options = $crate::options::Options::parse_from(["mongostat", $($arg),*])
                .unwrap();
            assert_eq!(options.connection_string, $uri);
            assert_eq!(options.sleep_interval, $interval);
        }
    };
}

/// Generate a test that fully resolves argv and expects an exact error message.
#[macro_export]
macro_rules! positional_error_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),*],
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let err = $crate::options::Options::parse_from(["mongostat", $($arg),*])
                .unwrap_err();
            assert_eq!(err.to_string(), $expected);
        }
    };
}
