use std::path::{Path, PathBuf};

use ba_atlas::{AtlasBuildResult, build_atlas};
use ba_model::{UvMapper, convert_elements, load_model};
use ba_utils::{ConverterConfig, TextureSlots, model_texture_rel, texture_size_or};
use tracing::{debug, info, warn};

use crate::attachable::{AttachableDocument, TextureRefs};
use crate::built::{BuiltObject, CopyInstruction};
use crate::geometry::GeometryDocument;
use crate::icon::IconRenderer;
use crate::source::{SourceObject, ToSourceObject};

/// `<id>_atlas.png`, or `furniture_atlas.png` for objects without an id.
pub fn atlas_file_name(id: &str) -> String {
    if id.trim().is_empty() {
        "furniture_atlas.png".to_string()
    } else {
        format!("{id}_atlas.png")
    }
}

pub fn icon_file_name(id: &str) -> String {
    format!("{id}_icon.png")
}

/// Where `source`'s atlas would be written, or `None` when it is not baked.
pub(crate) fn atlas_path_for(source: &SourceObject) -> Option<PathBuf> {
    if !source.bake_atlas {
        return None;
    }
    let model_path = source
        .model_path
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())?;
    Some(sibling_of(model_path, &atlas_file_name(&source.id)))
}

fn sibling_of(model: &Path, file_name: &str) -> PathBuf {
    model
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(file_name)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Turns [`SourceObject`]s into [`BuiltObject`]s.
///
/// Never fails: every problem ends up in `BuiltObject::notes`, and problems
/// that leave nothing to emit also leave the JSON documents empty.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    config: ConverterConfig,
}

impl ModelBuilder {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn build_from(
        &self,
        object: &impl ToSourceObject,
        renderer: Option<&dyn IconRenderer>,
    ) -> BuiltObject {
        match object.to_source_object() {
            Ok(source) => self.build(&source, renderer),
            Err(skip) => {
                debug!("skipping {}:{}: {}", skip.namespace, skip.id, skip.note);
                skip.into_built()
            }
        }
    }

    pub fn build(&self, source: &SourceObject, renderer: Option<&dyn IconRenderer>) -> BuiltObject {
        let mut built = BuiltObject::named(source.kind, &source.namespace, &source.id);

        let atlas = self.bake_atlas(source);
        if let Some(atlas) = &atlas {
            for note in &atlas.notes {
                built.note(format!("Atlas: {note}"));
            }
        }

        let document = match load_model(source.model_path.as_deref()) {
            Ok(document) => document,
            Err(err) => {
                warn!("{} {}: {err}", source.kind, built.bedrock_identifier);
                built.note(err.to_string());
                return built;
            }
        };
        // load_model only succeeds for a real file.
        let model_path = source.model_path.as_deref().unwrap_or_else(|| Path::new(""));

        let mut mapper = match &atlas {
            Some(atlas) => UvMapper::atlas(atlas),
            None => UvMapper::pass_through(),
        };
        let cubes = convert_elements(&document, &mut mapper);
        built.notes.extend(mapper.into_notes());

        if cubes.is_empty() {
            built.note("No elements found in Java model.");
            return built;
        }
        let cube_count = cubes.len();

        let (texture_width, texture_height) = match &atlas {
            Some(atlas) => (atlas.width, atlas.height),
            None => self.raw_texture_size(&source.texture_slots),
        };
        let geometry = GeometryDocument::single_bone(
            built.geometry_identifier.clone(),
            cubes,
            texture_width,
            texture_height,
        );
        match geometry.to_json() {
            Ok(json) => built.geometry_json = json,
            Err(err) => {
                built.note(format!("Failed to write geometry JSON: {err}"));
                return built;
            }
        }

        let textures = match &atlas {
            Some(atlas) => plan_atlas_copy(&mut built, atlas),
            None => plan_raw_copies(&mut built, &source.texture_slots),
        };
        let attachable = AttachableDocument::new(
            built.bedrock_identifier.clone(),
            built.geometry_identifier.clone(),
            textures,
            &self.config.attachable,
        );
        match attachable.to_json() {
            Ok(json) => built.attachable_json = json,
            Err(err) => built.note(format!("Failed to write attachable JSON: {err}")),
        }

        self.resolve_icon(&mut built, source, model_path, atlas.as_ref(), renderer);

        info!(
            "converted {} {} ({cube_count} cubes, {}x{}{})",
            source.kind,
            built.bedrock_identifier,
            texture_width,
            texture_height,
            if atlas.is_some() { ", atlas" } else { "" }
        );
        built
    }

    /// A usable atlas, or `None` when the object should use its textures as-is.
    fn bake_atlas(&self, source: &SourceObject) -> Option<AtlasBuildResult> {
        if !self.config.atlas.enabled {
            return None;
        }
        let atlas_path = atlas_path_for(source)?;
        let debug_name = format!("{} {}:{}", source.kind, source.namespace, source.id);

        let result = build_atlas(
            &source.texture_slots,
            &atlas_path,
            &debug_name,
            &self.config.atlas,
        );
        if result.is_usable() {
            Some(result)
        } else {
            warn!("atlas for {debug_name} unusable, keeping separate textures");
            for note in &result.notes {
                debug!("{debug_name}: {note}");
            }
            None
        }
    }

    /// Size of the first texture on disk, else the configured default.
    fn raw_texture_size(&self, slots: &TextureSlots) -> (u32, u32) {
        let fallback = self.config.geometry.default_texture_size();
        slots
            .first_existing()
            .map(|(_, path)| texture_size_or(path, fallback))
            .unwrap_or(fallback)
    }

    fn resolve_icon(
        &self,
        built: &mut BuiltObject,
        source: &SourceObject,
        model_path: &Path,
        atlas: Option<&AtlasBuildResult>,
        renderer: Option<&dyn IconRenderer>,
    ) {
        if let Some(icon) = source.icon_path.as_ref().filter(|p| p.is_file()) {
            built.icon_path = Some(icon.clone());
            return;
        }

        let slots: TextureSlots = match atlas.and_then(|a| a.atlas_path.as_ref()) {
            Some(atlas_path) => [("default", atlas_path.clone())].into_iter().collect(),
            None => source.texture_slots.clone(),
        };
        let renderer = renderer.filter(|_| atlas.is_some() || !slots.is_empty());
        let Some(renderer) = renderer else {
            built.note("No icon provided and no renderer available.");
            return;
        };

        let out = sibling_of(model_path, &icon_file_name(&source.id));
        match renderer.render_icon(model_path, &slots, &out) {
            Some(icon) if icon.is_file() => built.icon_path = Some(icon),
            _ => {
                warn!("icon renderer produced nothing for {}", built.bedrock_identifier);
                built.note("Icon renderer failed or returned no file.");
            }
        }
    }
}

/// The atlas replaces every slot: one copy, one `default` texture.
fn plan_atlas_copy(built: &mut BuiltObject, atlas: &AtlasBuildResult) -> TextureRefs {
    let mut refs = TextureRefs::default();
    if let Some(atlas_path) = &atlas.atlas_path {
        let destination = model_texture_rel(&built.namespace, &file_name_of(atlas_path));
        refs.insert("default", &destination);
        built.textures_to_copy.push(CopyInstruction {
            source: atlas_path.clone(),
            destination,
        });
    }
    refs
}

/// One copy per slot file that exists. The attachable still names every slot
/// so a texture added to the pack later is picked up.
fn plan_raw_copies(built: &mut BuiltObject, slots: &TextureSlots) -> TextureRefs {
    let mut refs = TextureRefs::default();
    for (slot, path) in slots.iter() {
        if path.as_os_str().is_empty() {
            built.note(format!("Texture missing: {slot} -> "));
            continue;
        }
        let destination = model_texture_rel(&built.namespace, &file_name_of(path));
        refs.insert(slot, &destination);
        if path.is_file() {
            built.textures_to_copy.push(CopyInstruction {
                source: path.to_path_buf(),
                destination,
            });
        } else {
            built.note(format!("Texture missing: {slot} -> {}", path.display()));
        }
    }
    refs
}
