//! mongostat option parsing.
//!
//! Turns a mongostat command line into resolved [`options::Options`]: flag
//! parsing with env and config-file fallback, positional URI/interval
//! resolution, conflict checks, and rendering of the result.

#[macro_use]
pub mod test_macros;

pub mod cli;
pub mod config;
pub mod logging;
pub mod options;
pub mod output;
pub mod positional;
