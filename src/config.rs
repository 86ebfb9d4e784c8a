use crate::{args::CLIArgs, error::ConvertError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// output directory relative to the directory of the input map, shared with the game repo
pub const DEFAULT_ASSETS_DIR: &str = "../../Roshamboogie/assets/maps";

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct ConverterConfig {
    /// object layer holding the collision polygons
    pub hitbox_layer_name: String,

    /// tile layer, not exported yet
    pub background_layer_name: String,

    /// object layer with decoration sprites, not exported yet
    pub decoration_layer_name: String,

    /// object layer with spawn markers, not exported yet
    pub spawner_layer_name: String,

    /// where the json ends up, relative to the input map's directory
    pub assets_dir: PathBuf,

    /// fail instead of exporting no boundaries if the hitbox layer is missing
    pub require_hitboxes: bool,

    /// pretty print the output json
    pub pretty: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            hitbox_layer_name: "Hitboxes".to_string(),
            background_layer_name: "Background".to_string(),
            decoration_layer_name: "Decorations".to_string(),
            spawner_layer_name: "Spawners".to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            require_hitboxes: false,
            pretty: false,
        }
    }
}

impl ConverterConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ConverterConfig, ConvertError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConvertError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConvertError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// config file given on the command line (or the defaults), with the flags applied on top
    pub fn from_args(args: &CLIArgs) -> Result<ConverterConfig, ConvertError> {
        let mut config = match &args.config {
            Some(path) => ConverterConfig::load(path)?,
            None => ConverterConfig::default(),
        };
        config.apply_args(args);

        Ok(config)
    }

    /// flags can only switch options on, never off
    pub fn apply_args(&mut self, args: &CLIArgs) {
        self.require_hitboxes |= args.strict;
        self.pretty |= args.pretty;
    }

    /// names of layers that are looked up but not exported
    pub fn reserved_layer_names(&self) -> [&str; 3] {
        [
            self.background_layer_name.as_str(),
            self.decoration_layer_name.as_str(),
            self.spawner_layer_name.as_str(),
        ]
    }
}
