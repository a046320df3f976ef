use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four source object families that carry a 3D Java model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Item,
    Block,
    Furniture,
    Helmet,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 4] = [Self::Item, Self::Block, Self::Furniture, Self::Helmet];

    /// Tag used inside geometry identifiers so the same `namespace:id` never
    /// collides across kinds.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Block => "block",
            Self::Furniture => "furniture",
            Self::Helmet => "helmet",
        }
    }

    /// Furniture models usually reference several independent textures and
    /// get them baked into a single atlas.
    pub const fn bakes_atlas(self) -> bool {
        matches!(self, Self::Furniture)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown object kind `{0}` (expected item, block, furniture or helmet)")]
pub struct ParseKindError(pub String);

impl FromStr for ObjectKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == lowered)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
