//! Texture atlas baking.
//!
//! Packs independent texture slot images into one PNG with a fixed,
//! deterministic shelf heuristic and reports where every slot ended up so UVs
//! can be remapped into atlas pixel space.

mod bake;
mod region;
mod shelf;

pub use bake::{AtlasBuildResult, AtlasError, build_atlas};
pub use region::AtlasRegion;
pub use shelf::{ShelfItem, ShelfLayout, pack_shelves};
