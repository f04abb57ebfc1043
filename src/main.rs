use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use mongostat::cli::Args;
use mongostat::logging::init_tracing;
use mongostat::options::Options;
use mongostat::output::{redact_password, OptionsSummary, Outputable};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_directive());

    let options = match Options::from_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("try 'mongostat --help' for more information");
            return ExitCode::FAILURE;
        }
    };

    info!(
        target_uri = %redact_password(&options.connection_string),
        sleep_interval = options.sleep_interval,
        "resolved connection target"
    );
    println!("{}", OptionsSummary::from(&options).format(args.format));
    ExitCode::SUCCESS
}
