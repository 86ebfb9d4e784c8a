use clap::{crate_version, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tmx2json")]
#[command(version = crate_version!())]
#[command(about = "Convert a Tiled map into the Roshamboogie map format", long_about = None)]
pub struct CLIArgs {
    /// path to the tiled map (.tmx)
    pub map: PathBuf,

    /// debug to console
    #[arg(short, long)]
    pub verbose: bool,

    /// fail if the hitbox layer is missing
    #[arg(short, long)]
    pub strict: bool,

    /// path to converter config (json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// pretty print the output json
    #[arg(short, long)]
    pub pretty: bool,
}
