use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ba_utils::{AtlasSettings, TextureSlots};
use image::{ImageFormat, RgbaImage};
use tracing::{error, info};

use crate::region::AtlasRegion;
use crate::shelf::{ShelfItem, ShelfLayout, pack_shelves};

#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("computed invalid atlas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("failed to create atlas directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write atlas PNG {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("atlas PNG {0:?} missing after write")]
    NotWritten(PathBuf),
}

/// Outcome of one atlas bake. Regions exist only for slots that were placed.
#[derive(Debug, Clone, Default)]
pub struct AtlasBuildResult {
    pub success: bool,
    pub atlas_path: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    regions: HashMap<String, AtlasRegion>,
    skipped: Vec<String>,
    pub notes: Vec<String>,
}

impl AtlasBuildResult {
    /// Case-insensitive slot lookup.
    pub fn region(&self, slot: &str) -> Option<&AtlasRegion> {
        self.regions.get(&slot.to_ascii_lowercase())
    }

    pub fn regions(&self) -> impl Iterator<Item = &AtlasRegion> {
        self.regions.values()
    }

    /// Records where `region.slot` was placed, replacing any earlier placement.
    pub fn insert_region(&mut self, region: AtlasRegion) {
        self.regions.insert(region.slot.to_ascii_lowercase(), region);
    }

    /// Slots left out because their image was missing or undecodable. Each
    /// already has a note explaining why.
    pub fn skipped_slots(&self) -> impl Iterator<Item = &str> {
        self.skipped.iter().map(String::as_str)
    }

    pub fn mark_skipped(&mut self, slot: impl Into<String>) {
        self.skipped.push(slot.into());
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Successful and the atlas file is still on disk.
    pub fn is_usable(&self) -> bool {
        self.success
            && self.width > 0
            && self.height > 0
            && self.atlas_path.as_deref().is_some_and(Path::is_file)
    }

    fn failed(mut self, note: impl Into<String>) -> Self {
        self.success = false;
        self.width = 0;
        self.height = 0;
        self.notes.push(note.into());
        self
    }
}

struct LoadedTexture {
    slot: String,
    image: RgbaImage,
}

/// Bakes every loadable slot image into one PNG at `atlas_path`.
///
/// Missing or undecodable slots are noted and skipped. With nothing left to
/// pack no file is written.
pub fn build_atlas(
    slots: &TextureSlots,
    atlas_path: &Path,
    debug_name: &str,
    settings: &AtlasSettings,
) -> AtlasBuildResult {
    let result = AtlasBuildResult::default();
    if slots.is_empty() {
        return result.failed("No textures supplied to atlas builder.");
    }

    let (textures, mut result) = load_textures(slots, result);
    if textures.is_empty() {
        return result.failed("No valid PNGs loaded; aborting atlas build.");
    }

    let items: Vec<ShelfItem> = textures
        .iter()
        .map(|t| ShelfItem {
            slot: t.slot.clone(),
            width: t.image.width(),
            height: t.image.height(),
        })
        .collect();
    let layout = pack_shelves(&items, settings);

    result.width = layout.width;
    result.height = layout.height;

    if let Err(err) = render_atlas(&textures, &layout, atlas_path) {
        error!("failed building {debug_name} atlas: {err}");
        return result.failed(format!("Exception while writing atlas PNG: {err}"));
    }

    for region in &layout.regions {
        result.insert_region(region.clone());
    }
    result.atlas_path = Some(atlas_path.to_path_buf());
    result.success = true;
    result.notes.push(format!(
        "Built atlas \"{debug_name}\" {}x{} with {} textures → {}",
        layout.width,
        layout.height,
        layout.regions.len(),
        atlas_path.display()
    ));
    info!(
        "built {debug_name} atlas {}x{} ({} textures)",
        layout.width,
        layout.height,
        layout.regions.len()
    );
    result
}

fn load_textures(
    slots: &TextureSlots,
    mut result: AtlasBuildResult,
) -> (Vec<LoadedTexture>, AtlasBuildResult) {
    let mut textures = Vec::with_capacity(slots.len());
    for (slot, path) in slots.iter() {
        if !path.is_file() {
            result.notes.push(format!(
                "Missing PNG for slot \"{slot}\" at path \"{}\" - skipping.",
                path.display()
            ));
            result.mark_skipped(slot);
            continue;
        }
        match image::open(path) {
            Ok(decoded) => textures.push(LoadedTexture {
                slot: slot.to_string(),
                image: decoded.to_rgba8(),
            }),
            Err(err) => {
                result.notes.push(format!(
                    "Failed loading PNG for slot \"{slot}\" at \"{}\": {err}",
                    path.display()
                ));
                result.mark_skipped(slot);
            }
        }
    }
    (textures, result)
}

fn render_atlas(
    textures: &[LoadedTexture],
    layout: &ShelfLayout,
    atlas_path: &Path,
) -> Result<(), AtlasError> {
    if layout.width == 0 || layout.height == 0 {
        return Err(AtlasError::InvalidSize {
            width: layout.width,
            height: layout.height,
        });
    }

    if let Some(dir) = atlas_path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|source| AtlasError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let by_slot: HashMap<&str, &RgbaImage> = textures
        .iter()
        .map(|t| (t.slot.as_str(), &t.image))
        .collect();

    // Transparent canvas, images copied 1:1.
    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for region in &layout.regions {
        if let Some(image) = by_slot.get(region.slot.as_str()) {
            image::imageops::replace(&mut canvas, *image, region.x.into(), region.y.into());
        }
    }

    canvas
        .save_with_format(atlas_path, ImageFormat::Png)
        .map_err(|source| AtlasError::Write {
            path: atlas_path.to_path_buf(),
            source,
        })?;

    if !atlas_path.is_file() {
        return Err(AtlasError::NotWritten(atlas_path.to_path_buf()));
    }
    Ok(())
}
