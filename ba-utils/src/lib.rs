use std::path::{Path, PathBuf};

pub mod config;
pub mod kind;
pub mod naming;
pub mod image_size;
pub mod slots;

pub use config::{
    AtlasSettings, AttachableSettings, ConfigError, ConverterConfig, GeometrySettings,
};
pub use kind::{ObjectKind, ParseKindError};
pub use naming::{
    attachable_rel, bedrock_identifier, geometry_identifier, geometry_rel, icon_rel,
    model_texture_rel, sanitize,
};
pub use image_size::{DEFAULT_TEXTURE_SIZE, texture_size, texture_size_or};
pub use slots::TextureSlots;

pub const BEDROCKADDER_CONFIG_ENV: &str = "BEDROCKADDER_CONFIG";
pub const CONFIG_FILE_NAME: &str = "bedrockadder.toml";

/// Where the converter looks for its configuration when no path is given.
///
/// Order: `$BEDROCKADDER_CONFIG`, a `bedrockadder.toml` next to the executable,
/// then `bedrockadder.toml` in the working directory. Returns `None` when none
/// of them exist so callers fall back to defaults.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(BEDROCKADDER_CONFIG_ENV) {
        let path = PathBuf::from(explicit);
        if path.is_file() {
            return Some(path);
        }
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(exe_dir) = exe.parent()
    {
        let sibling = exe_dir.join(CONFIG_FILE_NAME);
        if sibling.is_file() {
            return Some(sibling);
        }
    }

    let local = Path::new(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local.to_path_buf());
    }

    None
}
