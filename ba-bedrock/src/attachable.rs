use ba_utils::AttachableSettings;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const ATTACHABLE_FORMAT_VERSION: &str = "1.10.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachableDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:attachable")]
    pub attachable: Attachable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachable {
    pub description: AttachableDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachableDescription {
    pub identifier: String,
    pub materials: DefaultEntry,
    pub textures: TextureRefs,
    pub geometry: DefaultEntry,
    pub render_controllers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultEntry {
    pub default: String,
}

/// Slot name → pack-relative texture path, written in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureRefs(Vec<(String, String)>);

impl TextureRefs {
    /// Forward slashes only; a slot already present is overwritten in place.
    pub fn insert(&mut self, slot: impl Into<String>, rel_path: &str) {
        let slot = slot.into();
        let rel_path = rel_path.replace('\\', "/");
        match self.0.iter_mut().find(|(s, _)| s.eq_ignore_ascii_case(&slot)) {
            Some(entry) => entry.1 = rel_path,
            None => self.0.push((slot, rel_path)),
        }
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(slot))
            .map(|(_, p)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for TextureRefs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (slot, path) in &self.0 {
            map.serialize_entry(slot, path)?;
        }
        map.end()
    }
}

impl AttachableDocument {
    /// With no texture references the configured fallback texture is used as
    /// `default`, since Bedrock refuses attachables without one.
    pub fn new(
        identifier: impl Into<String>,
        geometry_identifier: impl Into<String>,
        mut textures: TextureRefs,
        settings: &AttachableSettings,
    ) -> Self {
        if textures.is_empty() {
            textures.insert("default", &settings.fallback_texture);
        }
        Self {
            format_version: ATTACHABLE_FORMAT_VERSION.to_string(),
            attachable: Attachable {
                description: AttachableDescription {
                    identifier: identifier.into(),
                    materials: DefaultEntry {
                        default: settings.material.clone(),
                    },
                    textures,
                    geometry: DefaultEntry {
                        default: geometry_identifier.into(),
                    },
                    render_controllers: vec![settings.render_controller.clone()],
                },
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textures_keep_order_and_use_forward_slashes() {
        let mut refs = TextureRefs::default();
        refs.insert("seat", r"textures\models\decor\seat.png");
        refs.insert("0", "textures/models/decor/wood.png");
        refs.insert("SEAT", "textures/models/decor/seat2.png");

        let doc = AttachableDocument::new(
            "decor:chair",
            "geometry.furniture.decor.chair",
            refs,
            &AttachableSettings::default(),
        );
        let json = doc.to_json().unwrap();
        let seat = json.find("\"seat\"").unwrap();
        let wood = json.find("\"0\"").unwrap();
        assert!(seat < wood);
        assert!(json.contains("textures/models/decor/seat2.png"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let desc = &value["minecraft:attachable"]["description"];
        assert_eq!(value["format_version"], "1.10.0");
        assert_eq!(desc["identifier"], "decor:chair");
        assert_eq!(desc["materials"]["default"], "entity_alphatest");
        assert_eq!(desc["geometry"]["default"], "geometry.furniture.decor.chair");
        assert_eq!(
            desc["render_controllers"],
            serde_json::json!(["controller.render.item_default"])
        );
    }

    #[test]
    fn empty_textures_fall_back() {
        let doc = AttachableDocument::new(
            "a:b",
            "geometry.item.a.b",
            TextureRefs::default(),
            &AttachableSettings::default(),
        );
        let textures = &doc.attachable.description.textures;
        assert_eq!(textures.len(), 1);
        assert_eq!(textures.get("default"), Some("textures/items/unknown"));
    }
}
