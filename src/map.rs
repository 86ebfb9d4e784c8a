use crate::{error::ConvertError, position::Point};
use log::debug;
use std::path::Path;
use tiled::{LayerType, ObjectShape};

/// geometry of a map object, sizes in pixels
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { width: f32, height: f32 },
    Ellipse { width: f32, height: f32 },
    /// vertices relative to the object's position
    Polyline(Vec<(f32, f32)>),
    /// vertices relative to the object's position
    Polygon(Vec<(f32, f32)>),
    Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapObject {
    pub id: u32,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub shape: Shape,
}

impl MapObject {
    pub fn new(id: u32, x: f32, y: f32, shape: Shape) -> MapObject {
        MapObject {
            id,
            name: String::new(),
            x,
            y,
            shape,
        }
    }

    /// outline of the object in absolute map coordinates. Shapes without vertices
    /// are described by their bounding box, starting top left and going clockwise.
    pub fn as_points(&self) -> Vec<Point> {
        let origin = Point::new(self.x, self.y);

        match &self.shape {
            Shape::Polygon(points) | Shape::Polyline(points) => points
                .iter()
                .map(|&(x, y)| origin.shifted_by(x, y))
                .collect(),
            Shape::Rect { width, height } | Shape::Ellipse { width, height } => {
                bounding_box(origin, *width, *height)
            }
            Shape::Point => bounding_box(origin, 0.0, 0.0),
        }
    }
}

fn bounding_box(origin: Point, width: f32, height: f32) -> Vec<Point> {
    vec![
        origin,
        origin.shifted_by(width, 0.0),
        origin.shifted_by(width, height),
        origin.shifted_by(0.0, height),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    Tiles,
    Objects(Vec<MapObject>),
    Image,
    Group(Vec<MapLayer>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapLayer {
    pub name: String,
    pub kind: LayerKind,
}

impl MapLayer {
    pub fn new(name: &str, kind: LayerKind) -> MapLayer {
        MapLayer {
            name: name.to_string(),
            kind,
        }
    }

    /// objects of an object layer, None for every other layer kind
    pub fn objects(&self) -> Option<&[MapObject]> {
        match &self.kind {
            LayerKind::Objects(objects) => Some(objects),
            _ => None,
        }
    }
}

/// the parts of a tiled map the converter cares about
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    /// width in tiles
    pub width: u32,
    /// height in tiles
    pub height: u32,
    pub layers: Vec<MapLayer>,
}

impl MapDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<MapDocument, ConvertError> {
        let path = path.as_ref();
        let mut loader = tiled::Loader::new();
        let map = loader
            .load_tmx_map(path)
            .map_err(|source| ConvertError::Load {
                path: path.to_path_buf(),
                source,
            })?;

        let document = MapDocument::from(&map);
        debug!(
            "loaded {} ({}x{}, {} top level layers)",
            path.display(),
            document.width,
            document.height,
            document.layers.len()
        );

        Ok(document)
    }

    /// first layer with exactly this name, searching group layers depth first
    pub fn layer(&self, name: &str) -> Option<&MapLayer> {
        find_layer(&self.layers, name)
    }
}

fn find_layer<'a>(layers: &'a [MapLayer], name: &str) -> Option<&'a MapLayer> {
    for layer in layers {
        if layer.name == name {
            return Some(layer);
        }

        if let LayerKind::Group(children) = &layer.kind {
            if let Some(found) = find_layer(children, name) {
                return Some(found);
            }
        }
    }

    None
}

impl From<&tiled::Map> for MapDocument {
    fn from(map: &tiled::Map) -> Self {
        MapDocument {
            width: map.width,
            height: map.height,
            layers: map.layers().map(|layer| convert_layer(&layer)).collect(),
        }
    }
}

fn convert_layer(layer: &tiled::Layer) -> MapLayer {
    let kind = match layer.layer_type() {
        LayerType::Tiles(_) => LayerKind::Tiles,
        LayerType::Image(_) => LayerKind::Image,
        LayerType::Objects(objects) => LayerKind::Objects(
            objects
                .objects()
                .map(|object| convert_object(&object))
                .collect(),
        ),
        LayerType::Group(group) => {
            LayerKind::Group(group.layers().map(|child| convert_layer(&child)).collect())
        }
    };

    MapLayer {
        name: layer.name.clone(),
        kind,
    }
}

fn convert_object(object: &tiled::ObjectData) -> MapObject {
    let shape = match &object.shape {
        ObjectShape::Rect { width, height } => Shape::Rect {
            width: *width,
            height: *height,
        },
        ObjectShape::Ellipse { width, height } => Shape::Ellipse {
            width: *width,
            height: *height,
        },
        ObjectShape::Polyline { points } => Shape::Polyline(points.clone()),
        ObjectShape::Polygon { points } => Shape::Polygon(points.clone()),
        ObjectShape::Point(_, _) => Shape::Point,
        // text boxes only matter as their frame
        ObjectShape::Text { width, height, .. } => Shape::Rect {
            width: *width,
            height: *height,
        },
    };

    MapObject {
        id: object.id(),
        name: object.name.clone(),
        x: object.x,
        y: object.y,
        shape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(f32, f32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn polygon_vertices_are_offset_by_object_position() {
        let object = MapObject::new(
            1,
            100.0,
            50.0,
            Shape::Polygon(vec![(0.0, 0.0), (32.0, 0.0), (16.0, -8.5)]),
        );

        assert_eq!(
            object.as_points(),
            points(&[(100.0, 50.0), (132.0, 50.0), (116.0, 41.5)])
        );
    }

    #[test]
    fn polyline_keeps_order_and_duplicates() {
        let raw = vec![(0.0, 0.0), (5.0, 5.0), (5.0, 5.0), (0.0, 0.0)];
        let object = MapObject::new(3, 0.0, 0.0, Shape::Polyline(raw.clone()));

        assert_eq!(object.as_points(), points(&raw));
    }

    #[test]
    fn rect_becomes_clockwise_corners() {
        let object = MapObject::new(
            2,
            0.0,
            0.0,
            Shape::Rect {
                width: 32.0,
                height: 32.0,
            },
        );

        assert_eq!(
            object.as_points(),
            points(&[(0.0, 0.0), (32.0, 0.0), (32.0, 32.0), (0.0, 32.0)])
        );
    }

    #[test]
    fn ellipse_uses_bounding_box() {
        let object = MapObject::new(
            4,
            10.0,
            20.0,
            Shape::Ellipse {
                width: 4.0,
                height: 2.0,
            },
        );

        assert_eq!(
            object.as_points(),
            points(&[(10.0, 20.0), (14.0, 20.0), (14.0, 22.0), (10.0, 22.0)])
        );
    }

    #[test]
    fn point_is_degenerate_box() {
        let object = MapObject::new(5, 7.0, 9.0, Shape::Point);
        assert_eq!(object.as_points(), vec![Point::new(7.0, 9.0); 4]);
    }

    #[test]
    fn layer_lookup_is_exact() {
        let document = MapDocument {
            width: 1,
            height: 1,
            layers: vec![
                MapLayer::new("hitboxes", LayerKind::Objects(vec![])),
                MapLayer::new("Hitboxes ", LayerKind::Objects(vec![])),
            ],
        };

        assert!(document.layer("Hitboxes").is_none());
        assert!(document.layer("hitboxes").is_some());
    }

    #[test]
    fn layer_lookup_descends_into_groups() {
        let nested = MapLayer::new(
            "Hitboxes",
            LayerKind::Objects(vec![MapObject::new(9, 0.0, 0.0, Shape::Point)]),
        );
        let document = MapDocument {
            width: 1,
            height: 1,
            layers: vec![
                MapLayer::new("Background", LayerKind::Tiles),
                MapLayer::new("Collision", LayerKind::Group(vec![nested.clone()])),
            ],
        };

        assert_eq!(document.layer("Hitboxes"), Some(&nested));
    }

    #[test]
    fn first_match_wins() {
        let document = MapDocument {
            width: 1,
            height: 1,
            layers: vec![
                MapLayer::new("Hitboxes", LayerKind::Tiles),
                MapLayer::new("Hitboxes", LayerKind::Objects(vec![])),
            ],
        };

        assert_eq!(document.layer("Hitboxes").unwrap().kind, LayerKind::Tiles);
        assert!(document.layer("Hitboxes").unwrap().objects().is_none());
    }
}
