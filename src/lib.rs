pub mod args;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod map;
pub mod position;

use config::ConverterConfig;
use error::ConvertError;
use export::{output_path, Converter};
use log::{debug, info};
use map::MapDocument;
use std::path::{Path, PathBuf};

/// converts a single map and returns where the json was written
pub fn convert_file<P: AsRef<Path>>(
    input: P,
    config: &ConverterConfig,
) -> Result<PathBuf, ConvertError> {
    let input = input.as_ref();
    let out_path = output_path(input, &config.assets_dir)?;

    info!("converting {}", input.display());
    let document = MapDocument::load(input)?;

    let mut converter = Converter::new(&document, config.clone());
    let finalized = converter.finalize()?;

    let output = finalized.output();
    debug!("map is {}x{} tiles", output.width, output.height);

    finalized.save(&out_path)?;

    Ok(out_path)
}
