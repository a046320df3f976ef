//! Java model parsing and conversion into Bedrock cuboids.

pub mod convert;
pub mod document;
pub mod uv;

pub use convert::{
    Cuboid, GRID_CENTER, ROOT_PIVOT_Y, convert_element, convert_elements, convert_extents,
    convert_rotation, element_extents,
};
pub use document::{
    Element, ElementRotation, FaceName, Faces, ModelDocument, ModelError, ModelFace, load_model,
};
pub use uv::{FaceUv, FaceUvMap, JAVA_UV_SPACE, UvMapper, face_rotation, normalize_rect, slot_name};
