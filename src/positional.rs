//! Positional argument resolution.
//!
//! mongostat accepts up to two bare arguments after flag extraction: a
//! connection string and a polling interval in seconds, in either order.
//! Neither carries a keyword, so each token is classified by shape alone:
//!
//! - `mongodb://...` or `mongodb+srv://...` is a connection string
//! - an unsigned integer is an interval
//! - anything else is rejected
//!
//! Resolution is two-phase. Tokens are classified and checked into a
//! [`Positional`] first, and [`Options`] is only written once every check has
//! passed, so a failed resolution leaves the caller's options untouched.

use thiserror::Error;
use tracing::debug;

use crate::options::Options;

/// Schemes that mark a token as a connection string.
pub const URI_SCHEMES: [&str; 2] = ["mongodb://", "mongodb+srv://"];

/// Upper bound on bare arguments: one URI and one interval.
pub const MAX_POSITIONAL: usize = 2;

const PARSE_FAILURE: &str = "error parsing positional arguments: \
    provide only one polling interval in seconds and only one MongoDB connection string. \
    Connection strings must begin with mongodb:// or mongodb+srv:// schemes";

/// Positional resolution errors.
///
/// The rendered messages are matched verbatim by callers and scripts, so
/// they must not change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionalError {
    /// More than [`MAX_POSITIONAL`] tokens. Reported with the generic parse
    /// message; the count is kept for logging and programmatic callers.
    #[error("{}", PARSE_FAILURE)]
    TooManyPositional { count: usize },

    #[error("too many URIs found in positional arguments: only one URI can be set as a positional argument")]
    TooManyUris,

    /// Catch-all for any shape that is not a valid URI/interval pair.
    #[error("{}", PARSE_FAILURE)]
    Ambiguous,

    #[error("illegal argument combination: cannot specify a URI in a positional argument and --uri")]
    UriConflict,
}

/// A single bare argument tagged by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    ConnectionString(&'a str),
    IntervalCandidate(u64),
    Unrecognized(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if URI_SCHEMES.iter().any(|scheme| raw.starts_with(scheme)) {
            return Self::ConnectionString(raw);
        }

        // `u64::from_str` accepts a leading '+', which is not an interval here.
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(seconds) = raw.parse::<u64>() {
                return Self::IntervalCandidate(seconds);
            }
        }

        Self::Unrecognized(raw)
    }

    /// Token shape without its text; raw tokens may carry credentials.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConnectionString(_) => "uri",
            Self::IntervalCandidate(_) => "interval",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Validated outcome of classification, not yet applied to any options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Positional<'a> {
    pub connection_string: Option<&'a str>,
    pub interval: Option<u64>,
}

impl<'a> Positional<'a> {
    /// Classify and check raw tokens.
    ///
    /// Errors are reported in a fixed order: token count, then duplicate
    /// URIs, then any other malformed shape. A list breaking several rules
    /// always reports the first one.
    pub fn from_tokens(raw_args: &'a [String]) -> Result<Self, PositionalError> {
        if raw_args.len() > MAX_POSITIONAL {
            return Err(PositionalError::TooManyPositional {
                count: raw_args.len(),
            });
        }

        let tokens: Vec<Token<'a>> = raw_args.iter().map(|raw| Token::classify(raw)).collect();
        let kinds: Vec<&str> = tokens.iter().map(Token::kind).collect();
        debug!(?kinds, "classified positional arguments");

        let uri_count = tokens
            .iter()
            .filter(|t| matches!(t, Token::ConnectionString(_)))
            .count();
        if uri_count > 1 {
            return Err(PositionalError::TooManyUris);
        }

        let mut resolved = Self::default();
        for token in tokens {
            match token {
                Token::ConnectionString(uri) => resolved.connection_string = Some(uri),
                Token::IntervalCandidate(seconds) if resolved.interval.is_none() => {
                    resolved.interval = Some(seconds);
                }
                Token::IntervalCandidate(_) | Token::Unrecognized(_) => {
                    return Err(PositionalError::Ambiguous);
                }
            }
        }

        Ok(resolved)
    }

    /// Write the resolved values into `options`.
    ///
    /// Fails without touching `options` when a positional URI would clash
    /// with one already supplied by flag, even if both are identical.
    pub fn apply(self, options: &mut Options) -> Result<(), PositionalError> {
        if self.connection_string.is_some() && !options.connection_string.is_empty() {
            return Err(PositionalError::UriConflict);
        }

        if let Some(uri) = self.connection_string {
            options.connection_string = uri.to_string();
        }
        if let Some(seconds) = self.interval {
            options.sleep_interval = seconds;
        }
        debug!(
            positional_uri = self.connection_string.is_some(),
            sleep_interval = options.sleep_interval,
            "applied positional arguments"
        );
        Ok(())
    }
}

/// Resolve leftover bare arguments into `options`.
///
/// `options` is expected to already carry any flag-supplied values. On error
/// it is left exactly as passed in.
pub fn resolve(raw_args: &[String], options: &mut Options) -> Result<(), PositionalError> {
    Positional::from_tokens(raw_args)?.apply(options)
}
