//! Bedrock output for converted Java models: geometry and attachable
//! documents, the texture copy plan and the icon.

pub mod attachable;
pub mod batch;
pub mod builder;
pub mod built;
pub mod geometry;
pub mod icon;
pub mod source;

pub use attachable::{ATTACHABLE_FORMAT_VERSION, AttachableDocument, TextureRefs};
pub use batch::convert_batch;
pub use builder::{ModelBuilder, atlas_file_name, icon_file_name};
pub use built::{BuiltObject, CopyInstruction};
pub use geometry::{GEOMETRY_FORMAT_VERSION, GeometryDocument};
pub use icon::IconRenderer;
pub use source::{
    CustomArmor, CustomBlock, CustomFurniture, CustomItem, SkipReason, SourceObject,
    ToSourceObject,
};
