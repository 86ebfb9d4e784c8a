use clap::Parser;
use log::{error, LevelFilter};
use mapconv::{args::CLIArgs, config::ConverterConfig, convert_file, error::ConvertError};
use simple_logger::SimpleLogger;
use std::{path::PathBuf, process::ExitCode};

fn run(args: &CLIArgs) -> Result<PathBuf, ConvertError> {
    let config = ConverterConfig::from_args(args)?;
    convert_file(&args.map, &config)
}

fn main() -> ExitCode {
    let args = CLIArgs::parse();

    let level = match args.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };
    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to initialize logger: {}", err);
    }

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
