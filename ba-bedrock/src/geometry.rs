use ba_model::{Cuboid, ROOT_PIVOT_Y};
use serde::Serialize;

pub const GEOMETRY_FORMAT_VERSION: &str = "1.12.0";
pub const ROOT_BONE: &str = "root";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:geometry")]
    pub geometry: Vec<Geometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    pub description: GeometryDescription,
    pub bones: Vec<Bone>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryDescription {
    pub identifier: String,
    pub texture_width: u32,
    pub texture_height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bone {
    pub name: String,
    pub pivot: [f32; 3],
    pub cubes: Vec<Cuboid>,
}

impl GeometryDocument {
    /// One geometry, one `root` bone at (0, 24, 0) holding every cube.
    pub fn single_bone(
        identifier: impl Into<String>,
        cubes: Vec<Cuboid>,
        texture_width: u32,
        texture_height: u32,
    ) -> Self {
        Self {
            format_version: GEOMETRY_FORMAT_VERSION.to_string(),
            geometry: vec![Geometry {
                description: GeometryDescription {
                    identifier: identifier.into(),
                    texture_width,
                    texture_height,
                },
                bones: vec![Bone {
                    name: ROOT_BONE.to_string(),
                    pivot: [0.0, ROOT_PIVOT_Y, 0.0],
                    cubes,
                }],
            }],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_bone_layout() {
        let cube = Cuboid {
            origin: [-8.0, 8.0, -8.0],
            size: [16.0, 16.0, 16.0],
            pivot: None,
            rotation: None,
            uv: None,
        };
        let doc = GeometryDocument::single_bone("geometry.item.tools.hammer", vec![cube], 32, 16);
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "format_version": "1.12.0",
                "minecraft:geometry": [{
                    "description": {
                        "identifier": "geometry.item.tools.hammer",
                        "texture_width": 32,
                        "texture_height": 16
                    },
                    "bones": [{
                        "name": "root",
                        "pivot": [0.0, 24.0, 0.0],
                        "cubes": [{ "origin": [-8.0, 8.0, -8.0], "size": [16.0, 16.0, 16.0] }]
                    }]
                }]
            })
        );
    }
}
