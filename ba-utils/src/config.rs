//! Converter configuration (`bedrockadder.toml`).
//!
//! Every field has a default, so an empty or missing file yields the stock
//! behaviour. Example:
//!
//! ```toml
//! [atlas]
//! padding = 2
//! max_row_width = 512
//!
//! [attachable]
//! material = "entity_alphatest"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::image_size::DEFAULT_TEXTURE_SIZE;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub atlas: AtlasSettings,
    pub geometry: GeometrySettings,
    pub attachable: AttachableSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasSettings {
    /// Bake multi-texture objects (furniture) into one atlas.
    pub enabled: bool,
    /// Gap in pixels between packed images.
    pub padding: u32,
    /// When set, rows wrap once they would grow past this width. When unset the
    /// legacy row rule applies unchanged.
    pub max_row_width: Option<u32>,
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            padding: 2,
            max_row_width: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    pub default_texture_width: u32,
    pub default_texture_height: u32,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            default_texture_width: DEFAULT_TEXTURE_SIZE.0,
            default_texture_height: DEFAULT_TEXTURE_SIZE.1,
        }
    }
}

impl GeometrySettings {
    pub fn default_texture_size(&self) -> (u32, u32) {
        (self.default_texture_width, self.default_texture_height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachableSettings {
    pub material: String,
    pub render_controller: String,
    /// Texture referenced when an object has no texture slots at all.
    pub fallback_texture: String,
}

impl Default for AttachableSettings {
    fn default() -> Self {
        Self {
            material: "entity_alphatest".to_string(),
            render_controller: "controller.render.item_default".to_string(),
            fallback_texture: "textures/items/unknown".to_string(),
        }
    }
}

impl ConverterConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Loads `path` (or the default location) and falls back to defaults on any
    /// problem, logging why.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let resolved = path.map(Path::to_path_buf).or_else(crate::default_config_path);
        let Some(resolved) = resolved else {
            debug!("no converter config found; using defaults");
            return Self::default();
        };
        match Self::load(&resolved) {
            Ok(config) => {
                debug!("loaded converter config from {:?}", resolved);
                config
            }
            Err(err) => {
                warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(
            ConverterConfig::from_toml_str("").unwrap(),
            ConverterConfig::default()
        );
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ConverterConfig::from_toml_str(
            r#"
            [atlas]
            max_row_width = 256

            [attachable]
            material = "entity_alphablend"
            "#,
        )
        .unwrap();
        assert_eq!(config.atlas.padding, 2);
        assert_eq!(config.atlas.max_row_width, Some(256));
        assert!(config.atlas.enabled);
        assert_eq!(config.attachable.material, "entity_alphablend");
        assert_eq!(
            config.attachable.render_controller,
            "controller.render.item_default"
        );
        assert_eq!(config.geometry.default_texture_size(), (64, 64));
    }

    #[test]
    fn bad_types_are_rejected() {
        assert!(ConverterConfig::from_toml_str("[atlas]\npadding = \"two\"").is_err());
    }

    #[test]
    fn unreadable_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("broken.toml");
        std::fs::write(&bad, "[atlas\n").unwrap();
        assert_eq!(
            ConverterConfig::load_or_default(Some(&bad)),
            ConverterConfig::default()
        );
    }
}
