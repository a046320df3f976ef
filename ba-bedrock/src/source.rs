use std::path::PathBuf;

use ba_utils::{ObjectKind, TextureSlots};

use crate::built::BuiltObject;

/// The one shape every convertible object is reduced to before building.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceObject {
    pub kind: ObjectKind,
    pub namespace: String,
    pub id: String,
    pub model_path: Option<PathBuf>,
    pub texture_slots: TextureSlots,
    pub icon_path: Option<PathBuf>,
    pub bake_atlas: bool,
}

impl SourceObject {
    pub fn new(kind: ObjectKind, namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind,
            namespace: namespace.into(),
            id: id.into(),
            model_path: None,
            texture_slots: TextureSlots::new(),
            icon_path: None,
            bake_atlas: kind.bakes_atlas(),
        }
    }

    pub fn with_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    pub fn with_texture(mut self, slot: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.texture_slots.insert(slot, path);
        self
    }

    pub fn with_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon_path = Some(path.into());
        self
    }
}

/// An object that cannot produce 3D geometry at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipReason {
    pub kind: ObjectKind,
    pub namespace: String,
    pub id: String,
    pub note: String,
}

impl SkipReason {
    /// Notes-only result carrying the object's names and paths.
    pub fn into_built(self) -> BuiltObject {
        let mut built = BuiltObject::named(self.kind, &self.namespace, &self.id);
        built.note(self.note);
        built
    }
}

pub trait ToSourceObject {
    fn to_source_object(&self) -> Result<SourceObject, SkipReason>;
}

#[derive(Debug, Clone, Default)]
pub struct CustomItem {
    pub namespace: String,
    pub id: String,
    pub is_3d: bool,
    pub model_path: Option<PathBuf>,
    pub texture_path: Option<PathBuf>,
    pub icon_path: Option<PathBuf>,
    pub model_texture_paths: TextureSlots,
}

#[derive(Debug, Clone, Default)]
pub struct CustomBlock {
    pub namespace: String,
    pub id: String,
    pub model_path: Option<PathBuf>,
    pub texture_path: Option<PathBuf>,
    pub icon_path: Option<PathBuf>,
    pub model_texture_paths: TextureSlots,
}

#[derive(Debug, Clone, Default)]
pub struct CustomFurniture {
    pub namespace: String,
    pub id: String,
    pub model_path: Option<PathBuf>,
    pub icon_path: Option<PathBuf>,
    pub texture_paths: TextureSlots,
}

#[derive(Debug, Clone, Default)]
pub struct CustomArmor {
    pub namespace: String,
    pub id: String,
    /// `helmet`, `chestplate`, `leggings` or `boots`.
    pub slot: String,
    pub model_path: Option<PathBuf>,
    pub texture_path: Option<PathBuf>,
    pub icon_path: Option<PathBuf>,
    pub model_texture_paths: TextureSlots,
}

/// Model texture slots, or the single flat texture as `default` when the
/// model declared none.
fn slots_or_default(model_slots: &TextureSlots, texture: Option<&PathBuf>) -> TextureSlots {
    let mut slots = model_slots.clone();
    if slots.is_empty()
        && let Some(texture) = texture.filter(|p| !p.as_os_str().is_empty())
    {
        slots.insert("default", texture.clone());
    }
    slots
}

impl ToSourceObject for CustomItem {
    fn to_source_object(&self) -> Result<SourceObject, SkipReason> {
        Ok(SourceObject {
            kind: ObjectKind::Item,
            namespace: self.namespace.clone(),
            id: self.id.clone(),
            model_path: self.model_path.clone(),
            texture_slots: slots_or_default(&self.model_texture_paths, self.texture_path.as_ref()),
            // 3D items get a rendered snapshot instead of their flat icon.
            icon_path: if self.is_3d {
                None
            } else {
                self.icon_path.clone()
            },
            bake_atlas: false,
        })
    }
}

impl ToSourceObject for CustomBlock {
    fn to_source_object(&self) -> Result<SourceObject, SkipReason> {
        Ok(SourceObject {
            kind: ObjectKind::Block,
            namespace: self.namespace.clone(),
            id: self.id.clone(),
            model_path: self.model_path.clone(),
            texture_slots: slots_or_default(&self.model_texture_paths, self.texture_path.as_ref()),
            icon_path: self.icon_path.clone(),
            bake_atlas: false,
        })
    }
}

impl ToSourceObject for CustomFurniture {
    fn to_source_object(&self) -> Result<SourceObject, SkipReason> {
        Ok(SourceObject {
            kind: ObjectKind::Furniture,
            namespace: self.namespace.clone(),
            id: self.id.clone(),
            model_path: self.model_path.clone(),
            texture_slots: self.texture_paths.clone(),
            icon_path: self.icon_path.clone(),
            bake_atlas: true,
        })
    }
}

impl ToSourceObject for CustomArmor {
    fn to_source_object(&self) -> Result<SourceObject, SkipReason> {
        let is_helmet = self.slot.trim().eq_ignore_ascii_case("helmet");
        let Some(model_path) = self
            .model_path
            .as_ref()
            .filter(|p| is_helmet && !p.as_os_str().is_empty())
        else {
            return Err(SkipReason {
                kind: ObjectKind::Helmet,
                namespace: self.namespace.clone(),
                id: self.id.clone(),
                note: "Armor slot not helmet or missing model path – no 3D geometry built."
                    .to_string(),
            });
        };
        Ok(SourceObject {
            kind: ObjectKind::Helmet,
            namespace: self.namespace.clone(),
            id: self.id.clone(),
            model_path: Some(model_path.clone()),
            texture_slots: slots_or_default(&self.model_texture_paths, self.texture_path.as_ref()),
            icon_path: self.icon_path.clone(),
            bake_atlas: false,
        })
    }
}

impl ToSourceObject for SourceObject {
    fn to_source_object(&self) -> Result<SourceObject, SkipReason> {
        Ok(self.clone())
    }
}
