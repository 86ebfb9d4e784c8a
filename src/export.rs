use crate::{
    config::ConverterConfig,
    error::ConvertError,
    extract::extract,
    map::MapDocument,
    position::Boundary,
};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

/// map format read by the game. Everything except the size and boundaries is
/// still a placeholder on the game side.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct OutputDocument {
    pub width: u32,
    pub height: u32,
    pub boundaries: Vec<Boundary>,
    pub tiles: Vec<Value>,
    pub swap_stations: Vec<Value>,
    pub decorations: Vec<Value>,
    pub egg_spawn_locations: Vec<Value>,
    pub orb_spawn_locations: Vec<Value>,
    pub player_spawn_locations: Vec<Value>,
}

pub fn assemble(width: u32, height: u32, boundaries: Vec<Boundary>) -> OutputDocument {
    OutputDocument {
        width,
        height,
        boundaries,
        ..Default::default()
    }
}

/// `<input dir>/<assets dir>/<input stem>.json`, with `.` and `..` collapsed
pub fn output_path(input: &Path, assets_dir: &Path) -> Result<PathBuf, ConvertError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| ConvertError::InvalidInput(input.to_path_buf()))?;

    let mut file_name = stem.to_os_string();
    file_name.push(".json");

    let input_dir = input.parent().unwrap_or_else(|| Path::new(""));

    Ok(normalize(&input_dir.join(assets_dir).join(file_name)))
}

/// lexical normalization, the filesystem is never consulted so the target may not exist yet
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // can't go above the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}

/// overwrites `path`, the parent directory has to exist already
pub fn write(output: &OutputDocument, path: &Path, pretty: bool) -> Result<(), ConvertError> {
    let serialized = match pretty {
        true => serde_json::to_string_pretty(output)?,
        false => serde_json::to_string(output)?,
    };

    fs::write(path, serialized).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub struct Converter<'a> {
    document: &'a MapDocument,
    config: ConverterConfig,
    output: OutputDocument,
}

impl<'a> Converter<'a> {
    pub fn new(document: &'a MapDocument, config: ConverterConfig) -> Converter<'a> {
        Converter {
            document,
            config,
            output: OutputDocument::default(),
        }
    }

    pub fn finalize(&mut self) -> Result<&mut Self, ConvertError> {
        let extracted = extract(self.document, &self.config)?;
        self.output = assemble(extracted.width, extracted.height, extracted.boundaries);

        Ok(self)
    }

    pub fn output(&self) -> &OutputDocument {
        &self.output
    }

    pub fn save<P: AsRef<Path>>(&self, out_path: P) -> Result<(), ConvertError> {
        let out_path = out_path.as_ref();
        write(&self.output, out_path, self.config.pretty)?;

        info!(
            "wrote {} ({} boundaries)",
            out_path.display(),
            self.output.boundaries.len()
        );

        Ok(())
    }
}
