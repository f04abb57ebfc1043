//! Resolved mongostat options.
//!
//! [`Options`] is assembled in stages: clap flags (with env fallback), then
//! the optional config file for anything the command line left unset, then
//! the bare positional arguments, then validation and connection-target
//! defaulting.

use std::ffi::OsString;

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use crate::cli::Args;
use crate::config::{ConfigError, ConfigFile};
use crate::positional::{self, PositionalError};

/// Seconds between samples when no interval is given.
pub const DEFAULT_SLEEP_INTERVAL: u64 = 1;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 27017;

/// Connection target used when neither a URI nor host/port was supplied.
pub const LOCAL_CONNECTION_STRING: &str = "mongodb://localhost/";

/// Option assembly errors
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Positional(#[from] PositionalError),

    #[error("illegal argument combination: cannot specify {first} and {second}")]
    Conflict {
        first: &'static str,
        second: &'static str,
    },
}

/// Display and sampling options handed to the monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatOptions {
    /// Number of samples before exiting; 0 runs forever
    pub rowcount: u64,
    pub discover: bool,
    pub all: bool,
    pub json: bool,
    pub no_headers: bool,
    pub human_readable: bool,
    pub interactive: bool,
    /// Explicit output fields (`-o`)
    pub columns: Option<String>,
    /// Output fields appended to the defaults (`-O`)
    pub append_columns: Option<String>,
}

impl Default for StatOptions {
    fn default() -> Self {
        Self {
            rowcount: 0,
            discover: false,
            all: false,
            json: false,
            no_headers: false,
            human_readable: true,
            interactive: false,
            columns: None,
            append_columns: None,
        }
    }
}

/// Fully resolved options.
///
/// `connection_string` is empty until some source supplies it; after
/// [`Options::from_args`] it always names a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub connection_string: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Polling interval in seconds
    pub sleep_interval: u64,
    pub stat: StatOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            connection_string: String::new(),
            host: None,
            port: None,
            sleep_interval: DEFAULT_SLEEP_INTERVAL,
            stat: StatOptions::default(),
        }
    }
}

impl Options {
    /// Parse a full argv (program name first) into resolved options.
    pub fn parse_from<I, T>(argv: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(argv)?;
        Self::from_args(&args)
    }

    /// Resolve options from already-parsed flags.
    pub fn from_args(args: &Args) -> Result<Self, OptionsError> {
        let config = match &args.config {
            Some(path) => Some(ConfigFile::load(path)?),
            None => None,
        };

        let mut options = Self::from_flags(args, config.as_ref());
        options.resolve_positional(&args.positional)?;
        options.validate()?;
        options.apply_default_target();
        Ok(options)
    }

    /// Options populated from flags alone, with `config` filling the gaps.
    ///
    /// A URI from the config file counts as flag-supplied.
    pub fn from_flags(args: &Args, config: Option<&ConfigFile>) -> Self {
        let config = config.cloned().unwrap_or_default();

        Self {
            connection_string: args.uri.clone().or(config.uri).unwrap_or_default(),
            host: args.host.clone().or(config.host),
            port: args.port.or(config.port),
            sleep_interval: DEFAULT_SLEEP_INTERVAL,
            stat: StatOptions {
                rowcount: args.rowcount.or(config.rowcount).unwrap_or(0),
                discover: args.discover,
                all: args.all,
                json: args.json,
                no_headers: args.no_headers,
                human_readable: args.human_readable,
                interactive: args.interactive,
                columns: args.columns.clone(),
                append_columns: args.append_columns.clone(),
            },
        }
    }

    /// Merge bare command-line arguments into these options.
    ///
    /// See [`positional::resolve`]; on error `self` is unchanged.
    pub fn resolve_positional(&mut self, raw_args: &[String]) -> Result<(), PositionalError> {
        positional::resolve(raw_args, self)
    }

    /// Reject flag combinations the monitor cannot honour.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.stat.interactive && self.stat.json {
            return Err(OptionsError::Conflict {
                first: "--interactive",
                second: "--json",
            });
        }
        if self.stat.interactive && self.stat.no_headers {
            return Err(OptionsError::Conflict {
                first: "--interactive",
                second: "--noheaders",
            });
        }
        // Any host or port alongside a URI is rejected, even one naming the
        // same server the URI already points at.
        if !self.connection_string.is_empty() {
            if self.host.is_some() {
                return Err(OptionsError::Conflict {
                    first: "--host",
                    second: "--uri",
                });
            }
            if self.port.is_some() {
                return Err(OptionsError::Conflict {
                    first: "--port",
                    second: "--uri",
                });
            }
        }
        Ok(())
    }

    /// Fill an empty connection string from host/port or the local default.
    pub fn apply_default_target(&mut self) {
        if !self.connection_string.is_empty() {
            return;
        }

        self.connection_string = if self.host.is_none() && self.port.is_none() {
            LOCAL_CONNECTION_STRING.to_string()
        } else {
            format!(
                "mongodb://{}:{}/",
                self.host.as_deref().unwrap_or(DEFAULT_HOST),
                self.port.unwrap_or(DEFAULT_PORT)
            )
        };
        debug!(connection_string = %self.connection_string, "defaulted connection target");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_defaults() {
        let options = Options::default();
        assert!(options.connection_string.is_empty());
        assert_eq!(options.sleep_interval, 1);
        assert_eq!(options.stat.rowcount, 0);
        assert!(options.stat.human_readable);
    }

    #[rstest]
    #[case(None, None, "mongodb://localhost/")]
    #[case(Some("db.example.com"), None, "mongodb://db.example.com:27017/")]
    #[case(None, Some(27018), "mongodb://localhost:27018/")]
    #[case(Some("db.example.com"), Some(27018), "mongodb://db.example.com:27018/")]
    fn test_apply_default_target(
        #[case] host: Option<&str>,
        #[case] port: Option<u16>,
        #[case] expected: &str,
    ) {
        let mut options = Options {
            host: host.map(String::from),
            port,
            ..Options::default()
        };
        options.apply_default_target();
        assert_eq!(options.connection_string, expected);
    }

    #[rstest]
    fn test_apply_default_target_keeps_existing_uri() {
        let mut options = Options {
            connection_string: "mongodb://foo".to_string(),
            ..Options::default()
        };
        options.apply_default_target();
        assert_eq!(options.connection_string, "mongodb://foo");
    }

    #[rstest]
    fn test_validate_interactive_json() {
        let mut options = Options::default();
        options.stat.interactive = true;
        options.stat.json = true;
        let err = options.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "illegal argument combination: cannot specify --interactive and --json"
        );
    }

    #[rstest]
    fn test_validate_interactive_noheaders() {
        let mut options = Options::default();
        options.stat.interactive = true;
        options.stat.no_headers = true;
        let err = options.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "illegal argument combination: cannot specify --interactive and --noheaders"
        );
    }

    #[rstest]
    #[case(Some("db"), None, "--host")]
    #[case(Some("foo"), None, "--host")]
    #[case(None, Some(27018), "--port")]
    fn test_validate_host_port_with_uri(
        #[case] host: Option<&str>,
        #[case] port: Option<u16>,
        #[case] flag: &str,
    ) {
        let options = Options {
            connection_string: "mongodb://foo".to_string(),
            host: host.map(String::from),
            port,
            ..Options::default()
        };
        let err = options.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("illegal argument combination: cannot specify {flag} and --uri")
        );
    }

    #[rstest]
    fn test_from_flags_prefers_cli_over_config() {
        let args = Args::try_parse_from(["mongostat", "--uri", "mongodb://cli", "-n", "5"]).unwrap();
        let config = ConfigFile {
            uri: Some("mongodb://config".to_string()),
            host: None,
            port: Some(27019),
            rowcount: Some(99),
        };
        let options = Options::from_flags(&args, Some(&config));
        assert_eq!(options.connection_string, "mongodb://cli");
        assert_eq!(options.port, Some(27019));
        assert_eq!(options.stat.rowcount, 5);
    }

    #[rstest]
    fn test_resolve_positional_delegates() {
        let mut options = Options::default();
        options
            .resolve_positional(&["mongodb+srv://cluster".to_string(), "4".to_string()])
            .unwrap();
        assert_eq!(options.connection_string, "mongodb+srv://cluster");
        assert_eq!(options.sleep_interval, 4);
    }
}
