use crate::{
    config::ConverterConfig,
    error::ConvertError,
    map::MapDocument,
    position::Boundary,
};
use log::{debug, warn};

/// the fields of a map that end up in the game's json
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted {
    pub width: u32,
    pub height: u32,
    pub boundaries: Vec<Boundary>,
}

pub fn extract(document: &MapDocument, config: &ConverterConfig) -> Result<Extracted, ConvertError> {
    let boundaries = extract_boundaries(document, config)?;

    for name in config.reserved_layer_names() {
        match document.layer(name) {
            Some(_) => debug!("found layer '{}', not exported yet", name),
            None => debug!("no layer '{}'", name),
        }
    }

    Ok(Extracted {
        width: document.width,
        height: document.height,
        boundaries,
    })
}

/// one boundary per object of the hitbox layer, in layer order
pub fn extract_boundaries(
    document: &MapDocument,
    config: &ConverterConfig,
) -> Result<Vec<Boundary>, ConvertError> {
    let name = &config.hitbox_layer_name;

    let layer = match document.layer(name) {
        Some(layer) => layer,
        None if config.require_hitboxes => return Err(ConvertError::Lookup(name.clone())),
        None => {
            warn!("no layer '{}', exporting without boundaries", name);
            return Ok(Vec::new());
        }
    };

    let objects = match layer.objects() {
        Some(objects) => objects,
        None if config.require_hitboxes => {
            return Err(ConvertError::NotObjectLayer(name.clone()))
        }
        None => {
            warn!("layer '{}' is not an object layer, exporting without boundaries", name);
            return Ok(Vec::new());
        }
    };

    debug!("layer '{}' has {} hitboxes", name, objects.len());

    Ok(objects
        .iter()
        .map(|object| {
            let points = object.as_points();
            debug!(
                "hitbox {} '{}' at ({}, {}): {} points",
                object.id,
                object.name,
                object.x,
                object.y,
                points.len()
            );
            points
        })
        .collect())
}
