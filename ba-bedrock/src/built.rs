use std::path::PathBuf;

use ba_utils::{
    ObjectKind, attachable_rel, bedrock_identifier, geometry_identifier, geometry_rel, icon_rel,
};

/// Copy `source` into the pack at `destination` (pack-relative, forward slashes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyInstruction {
    pub source: PathBuf,
    pub destination: String,
}

/// Everything needed to place one converted object into a Bedrock pack.
///
/// Identifiers and output paths are always filled in, even when conversion
/// stopped early; `geometry_json` and `attachable_json` stay empty in that
/// case and `notes` says why.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltObject {
    pub kind: ObjectKind,
    pub namespace: String,
    pub id: String,
    pub bedrock_identifier: String,
    pub geometry_identifier: String,
    pub geometry_rel: String,
    pub attachable_rel: String,
    pub icon_rel: String,
    pub geometry_json: String,
    pub attachable_json: String,
    pub textures_to_copy: Vec<CopyInstruction>,
    pub notes: Vec<String>,
    pub icon_path: Option<PathBuf>,
}

impl BuiltObject {
    pub fn named(kind: ObjectKind, namespace: &str, id: &str) -> Self {
        Self {
            kind,
            namespace: namespace.to_string(),
            id: id.to_string(),
            bedrock_identifier: bedrock_identifier(namespace, id),
            geometry_identifier: geometry_identifier(kind, namespace, id),
            geometry_rel: geometry_rel(namespace, id),
            attachable_rel: attachable_rel(namespace, id),
            icon_rel: icon_rel(namespace, id),
            geometry_json: String::new(),
            attachable_json: String::new(),
            textures_to_copy: Vec::new(),
            notes: Vec::new(),
            icon_path: None,
        }
    }

    pub fn has_geometry(&self) -> bool {
        !self.geometry_json.is_empty()
    }

    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_is_filled_up_front() {
        let built = BuiltObject::named(ObjectKind::Helmet, "Knight Gear", "Visor");
        assert_eq!(built.bedrock_identifier, "Knight Gear:Visor");
        assert_eq!(built.geometry_identifier, "geometry.helmet.Knight Gear.Visor");
        assert_eq!(built.geometry_rel, "models/entity/knight_gear/visor.geo.json");
        assert_eq!(built.attachable_rel, "attachables/knight_gear/visor.json");
        assert_eq!(built.icon_rel, "textures/items/knight_gear/visor.png");
        assert!(!built.has_geometry());
    }
}
