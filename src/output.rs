//! Output formatting for resolved options.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.
//! Passwords embedded in connection strings are never printed.

use clap::ValueEnum;
use serde::Serialize;

use crate::options::Options;

/// How `--format` renders the resolved options summary
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `Label: value` lines
    #[default]
    Table,
    /// Pretty-printed JSON object
    Json,
    /// toon encoding of the JSON object
    Toon,
}

/// A printable report whose serialized form already has credentials redacted.
pub trait Outputable: Serialize {
    /// Render the `Label: value` layout
    fn to_table(&self) -> String;

    /// Render in `format`; JSON and toon go through the serde view
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Replace the password in a connection string's userinfo with `***`.
///
/// Strings without a scheme or without a password are returned unchanged.
pub fn redact_password(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://").map(|i| i + 3) else {
        return uri.to_string();
    };
    let rest = &uri[scheme_end..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    let authority = &rest[..authority_end];

    let Some(at) = authority.rfind('@') else {
        return uri.to_string();
    };
    let Some(colon) = authority[..at].find(':') else {
        return uri.to_string();
    };

    format!(
        "{}{}:***{}",
        &uri[..scheme_end],
        &authority[..colon],
        &rest[at..]
    )
}

/// Printable view of [`Options`] with credentials redacted.
#[derive(Debug, Serialize)]
pub struct OptionsSummary {
    pub connection_string: String,
    pub sleep_interval: u64,
    pub rowcount: u64,
    pub discover: bool,
    pub all: bool,
    pub json: bool,
    pub no_headers: bool,
    pub human_readable: bool,
    pub interactive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_columns: Option<String>,
}

impl From<&Options> for OptionsSummary {
    fn from(options: &Options) -> Self {
        let stat = &options.stat;
        Self {
            connection_string: redact_password(&options.connection_string),
            sleep_interval: options.sleep_interval,
            rowcount: stat.rowcount,
            discover: stat.discover,
            all: stat.all,
            json: stat.json,
            no_headers: stat.no_headers,
            human_readable: stat.human_readable,
            interactive: stat.interactive,
            columns: stat.columns.clone(),
            append_columns: stat.append_columns.clone(),
        }
    }
}

impl Outputable for OptionsSummary {
    fn to_table(&self) -> String {
        let rows = if self.rowcount == 0 {
            "unlimited".to_string()
        } else {
            self.rowcount.to_string()
        };

        let flags: Vec<&str> = [
            (self.discover, "discover"),
            (self.all, "all"),
            (self.json, "json"),
            (self.no_headers, "noheaders"),
            (self.human_readable, "humanReadable"),
            (self.interactive, "interactive"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        let mut lines = vec![
            format!("Connection: {}", self.connection_string),
            format!("Interval:   {}s", self.sleep_interval),
            format!("Rows:       {}", rows),
        ];
        if !flags.is_empty() {
            lines.push(format!("Flags:      {}", flags.join(", ")));
        }
        if let Some(columns) = &self.columns {
            lines.push(format!("Fields:     {}", columns));
        }
        if let Some(extra) = &self.append_columns {
            lines.push(format!("Extra:      {}", extra));
        }

        lines.join("\n")
    }
}
