use serde::Serialize;
use tracing::trace;

use crate::document::{Element, ElementRotation, ModelDocument};
use crate::uv::{FaceUvMap, UvMapper};

/// Java grids are centered on x/z = 8.
pub const GRID_CENTER: f32 = 8.0;
/// Height of the Bedrock root bone pivot.
pub const ROOT_PIVOT_Y: f32 = 24.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cuboid {
    pub origin: [f32; 3],
    pub size: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<FaceUvMap>,
}

/// Re-centers x/z and re-bases y onto the root pivot.
///
/// `size` is `to - from` with no rounding so the source extents survive.
pub fn convert_extents(from: [f32; 3], to: [f32; 3]) -> ([f32; 3], [f32; 3]) {
    let origin = [
        from[0] - GRID_CENTER,
        ROOT_PIVOT_Y - to[1],
        from[2] - GRID_CENTER,
    ];
    let size = [to[0] - from[0], to[1] - from[1], to[2] - from[2]];
    (origin, size)
}

/// Inverse of [`convert_extents`].
pub fn element_extents(origin: [f32; 3], size: [f32; 3]) -> ([f32; 3], [f32; 3]) {
    let to_y = ROOT_PIVOT_Y - origin[1];
    let from = [origin[0] + GRID_CENTER, to_y - size[1], origin[2] + GRID_CENTER];
    let to = [from[0] + size[0], to_y, from[2] + size[2]];
    (from, to)
}

fn convert_point(p: [f32; 3]) -> [f32; 3] {
    [p[0] - GRID_CENTER, ROOT_PIVOT_Y - p[1], p[2] - GRID_CENTER]
}

/// Single-axis rotation: the angle lands on the component named by `axis`.
pub fn convert_rotation(rotation: &ElementRotation) -> ([f32; 3], Option<[f32; 3]>) {
    let angle = rotation.angle.unwrap_or(0.0);
    let axis = rotation.axis.as_deref().unwrap_or("y");
    let vector = match axis.to_ascii_lowercase().as_str() {
        "x" => [angle, 0.0, 0.0],
        "y" => [0.0, angle, 0.0],
        "z" => [0.0, 0.0, angle],
        other => {
            trace!("ignoring rotation about unknown axis {other:?}");
            [0.0; 3]
        }
    };
    (vector, rotation.origin.map(convert_point))
}

pub fn convert_element(element: &Element, uvs: &mut UvMapper<'_>) -> Cuboid {
    let (origin, size) = convert_extents(element.from, element.to);
    let (rotation, pivot) = match &element.rotation {
        Some(r) => {
            let (vector, pivot) = convert_rotation(r);
            (Some(vector), pivot)
        }
        None => (None, None),
    };
    Cuboid {
        origin,
        size,
        pivot,
        rotation,
        uv: uvs.map_faces(&element.faces),
    }
}

pub fn convert_elements(document: &ModelDocument, uvs: &mut UvMapper<'_>) -> Vec<Cuboid> {
    document
        .elements
        .iter()
        .map(|element| convert_element(element, uvs))
        .collect()
}
