use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Java model missing: {}", .0.display())]
    Missing(PathBuf),
    #[error("Failed to read Java model {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse Java model: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A Java-edition model file. Only the parts the converter needs are kept;
/// malformed elements, faces and rotation origins are dropped individually
/// instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDocument {
    #[serde(default, deserialize_with = "lenient_list")]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Element {
    pub from: [f32; 3],
    pub to: [f32; 3],
    #[serde(default, deserialize_with = "lenient")]
    pub rotation: Option<ElementRotation>,
    #[serde(default, deserialize_with = "lenient_faces")]
    pub faces: Faces,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ElementRotation {
    #[serde(default, deserialize_with = "lenient")]
    pub angle: Option<f32>,
    #[serde(default, deserialize_with = "lenient")]
    pub axis: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub origin: Option<[f32; 3]>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Faces {
    #[serde(default, deserialize_with = "lenient")]
    pub north: Option<ModelFace>,
    #[serde(default, deserialize_with = "lenient")]
    pub south: Option<ModelFace>,
    #[serde(default, deserialize_with = "lenient")]
    pub east: Option<ModelFace>,
    #[serde(default, deserialize_with = "lenient")]
    pub west: Option<ModelFace>,
    #[serde(default, deserialize_with = "lenient")]
    pub up: Option<ModelFace>,
    #[serde(default, deserialize_with = "lenient")]
    pub down: Option<ModelFace>,
}

impl Faces {
    pub fn get(&self, name: FaceName) -> Option<&ModelFace> {
        match name {
            FaceName::North => self.north.as_ref(),
            FaceName::South => self.south.as_ref(),
            FaceName::East => self.east.as_ref(),
            FaceName::West => self.west.as_ref(),
            FaceName::Up => self.up.as_ref(),
            FaceName::Down => self.down.as_ref(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FaceName, &ModelFace)> {
        FaceName::ALL
            .into_iter()
            .filter_map(|name| self.get(name).map(|face| (name, face)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelFace {
    #[serde(default, deserialize_with = "lenient")]
    pub uv: Option<[f32; 4]>,
    #[serde(default, deserialize_with = "lenient")]
    pub texture: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rotation: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceName {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl FaceName {
    /// Emission order of the per-face UV map.
    pub const ALL: [FaceName; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl ModelDocument {
    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Reads and parses a model file. A missing or blank path is reported the same
/// way as a path that does not exist.
pub fn load_model(path: Option<&Path>) -> Result<ModelDocument, ModelError> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() && p.is_file() => p,
        other => {
            let shown = other.map(Path::to_path_buf).unwrap_or_default();
            return Err(ModelError::Missing(shown));
        }
    };
    let raw = fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ModelDocument::from_json(&raw)
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Accepts `90` and `"90"` alike.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_faces<'de, D>(deserializer: D) -> Result<Faces, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_elements_without_three_component_extents() {
        let doc = ModelDocument::from_json(
            r#"{
                "elements": [
                    { "from": [0, 0, 0], "to": [16, 16, 16] },
                    { "from": [0, 0], "to": [16, 16, 16] },
                    { "from": [0, 0, 0, 0], "to": [1, 1, 1] },
                    { "from": "nope", "to": [1, 1, 1] },
                    { "to": [1, 1, 1] },
                    { "from": [-4, 0, 2.5], "to": [20, 30, 3] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.elements.len(), 2);
        assert_eq!(doc.elements[1].from, [-4.0, 0.0, 2.5]);
    }

    #[test]
    fn bad_rotation_origin_keeps_the_rest() {
        let doc = ModelDocument::from_json(
            r##"{ "elements": [ {
                "from": [0, 0, 0], "to": [1, 1, 1],
                "rotation": { "angle": 22.5, "axis": "z", "origin": [8, 8] },
                "faces": { "up": { "uv": [0, 0, 1], "texture": "#0" }, "down": 7,
                           "north": { "uv": [0, 0, 4, 4], "rotation": 90 } }
            } ] }"##,
        )
        .unwrap();
        let el = &doc.elements[0];
        let rot = el.rotation.as_ref().unwrap();
        assert_eq!(rot.angle, Some(22.5));
        assert_eq!(rot.axis.as_deref(), Some("z"));
        assert_eq!(rot.origin, None);

        let up = el.faces.up.as_ref().unwrap();
        assert_eq!(up.uv, None);
        assert_eq!(up.texture.as_deref(), Some("#0"));
        assert!(el.faces.down.is_none());
        assert_eq!(el.faces.north.as_ref().unwrap().rotation, Some(90.0));
    }

    #[test]
    fn face_rotation_accepts_numeric_strings() {
        let doc = ModelDocument::from_json(
            r##"{ "textures": { "0": "decor:block/chair" },
                "elements": [ { "from": [0, 0, 0], "to": [1, 1, 1],
                "faces": { "north": { "rotation": "90" }, "south": { "rotation": " 180 " },
                           "east": { "rotation": "abc" }, "west": { "rotation": [90] } } } ] }"##,
        )
        .unwrap();
        let faces = &doc.elements[0].faces;
        assert_eq!(faces.north.as_ref().unwrap().rotation, Some(90.0));
        assert_eq!(faces.south.as_ref().unwrap().rotation, Some(180.0));
        assert_eq!(faces.east.as_ref().unwrap().rotation, None);
        assert_eq!(faces.west.as_ref().unwrap().rotation, None);
    }

    #[test]
    fn faces_iterate_in_emission_order() {
        let doc = ModelDocument::from_json(
            r#"{ "elements": [ { "from": [0,0,0], "to": [1,1,1],
                "faces": { "down": {}, "up": {}, "north": {}, "west": {} } } ] }"#,
        )
        .unwrap();
        let order: Vec<_> = doc.elements[0].faces.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["north", "west", "up", "down"]);
    }

    #[test]
    fn non_object_document_is_a_parse_error() {
        let err = ModelDocument::from_json("42").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse Java model"));
        assert!(ModelDocument::from_json("{ broken").is_err());
    }

    #[test]
    fn missing_path_is_reported() {
        let err = load_model(None).unwrap_err();
        assert!(matches!(err, ModelError::Missing(_)));

        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.json");
        let err = load_model(Some(&absent)).unwrap_err();
        assert_eq!(err.to_string(), format!("Java model missing: {}", absent.display()));
    }
}
