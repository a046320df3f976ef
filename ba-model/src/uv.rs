use std::collections::HashSet;

use ba_atlas::AtlasBuildResult;
use serde::Serialize;
use tracing::debug;

use crate::document::{FaceName, Faces, ModelFace};

/// Java UVs are authored on a fixed 16×16 grid regardless of texture size.
pub const JAVA_UV_SPACE: f32 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceUv {
    pub uv: [f32; 2],
    pub uv_size: [f32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<u16>,
}

/// Per-face UVs of one cuboid, serialized in north/south/east/west/up/down order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FaceUvMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub north: Option<FaceUv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub south: Option<FaceUv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub east: Option<FaceUv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub west: Option<FaceUv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<FaceUv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<FaceUv>,
}

impl FaceUvMap {
    pub fn get(&self, name: FaceName) -> Option<&FaceUv> {
        match name {
            FaceName::North => self.north.as_ref(),
            FaceName::South => self.south.as_ref(),
            FaceName::East => self.east.as_ref(),
            FaceName::West => self.west.as_ref(),
            FaceName::Up => self.up.as_ref(),
            FaceName::Down => self.down.as_ref(),
        }
    }

    pub fn set(&mut self, name: FaceName, uv: FaceUv) {
        let slot = match name {
            FaceName::North => &mut self.north,
            FaceName::South => &mut self.south,
            FaceName::East => &mut self.east,
            FaceName::West => &mut self.west,
            FaceName::Up => &mut self.up,
            FaceName::Down => &mut self.down,
        };
        *slot = Some(uv);
    }

    pub fn is_empty(&self) -> bool {
        FaceName::ALL.into_iter().all(|name| self.get(name).is_none())
    }
}

/// `[u1, v1, u2, v2]` → top-left corner and absolute size.
pub fn normalize_rect([u1, v1, u2, v2]: [f32; 4]) -> ([f32; 2], [f32; 2]) {
    ([u1.min(u2), v1.min(v2)], [(u2 - u1).abs(), (v2 - v1).abs()])
}

/// Only quarter turns survive; anything else is dropped silently.
pub fn face_rotation(raw: Option<f64>) -> Option<u16> {
    match raw? {
        r if r == 0.0 => Some(0),
        r if r == 90.0 => Some(90),
        r if r == 180.0 => Some(180),
        r if r == 270.0 => Some(270),
        _ => None,
    }
}

/// `#0` → `0`. A lone `#` is returned unchanged.
pub fn slot_name(texture_ref: &str) -> &str {
    match texture_ref.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => rest,
        _ => texture_ref,
    }
}

enum UvMode<'a> {
    /// UV numbers are already in the bound texture's pixel space.
    PassThrough,
    /// UV numbers are 0..16 logical units, rescaled into the slot's atlas region.
    Atlas(&'a AtlasBuildResult),
}

/// Maps face UV rectangles for one object and collects advisory notes.
///
/// The two modes read the same numbers differently; see [`UvMapper::pass_through`]
/// and [`UvMapper::atlas`].
pub struct UvMapper<'a> {
    mode: UvMode<'a>,
    notes: Vec<String>,
    reported_slots: HashSet<String>,
}

impl<'a> UvMapper<'a> {
    /// Emits the normalized rectangle unchanged.
    pub fn pass_through() -> Self {
        Self {
            mode: UvMode::PassThrough,
            notes: Vec::new(),
            reported_slots: HashSet::new(),
        }
    }

    /// Treats UVs as 0..16 units and rescales them into the face slot's region,
    /// or into the whole atlas when the slot was not packed.
    ///
    /// Slots the atlas skipped already carry an atlas note and get no second one.
    pub fn atlas(atlas: &'a AtlasBuildResult) -> Self {
        Self {
            mode: UvMode::Atlas(atlas),
            notes: Vec::new(),
            reported_slots: atlas
                .skipped_slots()
                .map(str::to_ascii_lowercase)
                .collect(),
        }
    }

    pub fn map_face(&mut self, face: &ModelFace) -> Option<FaceUv> {
        let rect = face.uv?;
        let (uv, uv_size) = normalize_rect(rect);
        let (uv, uv_size) = match self.mode {
            UvMode::PassThrough => (uv, uv_size),
            UvMode::Atlas(atlas) => {
                let slot = face.texture.as_deref().map(slot_name).unwrap_or("");
                self.remap_into_atlas(atlas, slot, uv, uv_size)
            }
        };
        Some(FaceUv {
            uv,
            uv_size,
            rotation: face_rotation(face.rotation),
        })
    }

    /// `None` when no face produced a UV.
    pub fn map_faces(&mut self, faces: &Faces) -> Option<FaceUvMap> {
        let mut out = FaceUvMap::default();
        for (name, face) in faces.iter() {
            if let Some(uv) = self.map_face(face) {
                out.set(name, uv);
            }
        }
        (!out.is_empty()).then_some(out)
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<String> {
        self.notes
    }

    fn remap_into_atlas(
        &mut self,
        atlas: &AtlasBuildResult,
        slot: &str,
        uv: [f32; 2],
        uv_size: [f32; 2],
    ) -> ([f32; 2], [f32; 2]) {
        let region = if slot.trim().is_empty() {
            None
        } else {
            atlas.region(slot)
        };
        let (x, y, w, h) = match region {
            Some(r) => (r.x as f32, r.y as f32, r.width as f32, r.height as f32),
            None => {
                if !slot.trim().is_empty() && self.reported_slots.insert(slot.to_ascii_lowercase())
                {
                    debug!("atlas has no region for slot {slot}");
                    self.notes.push(format!(
                        "Atlas region missing for slot '{slot}'; used full-atlas fallback."
                    ));
                }
                (0.0, 0.0, atlas.width as f32, atlas.height as f32)
            }
        };
        (
            [
                x + (uv[0] / JAVA_UV_SPACE) * w,
                y + (uv[1] / JAVA_UV_SPACE) * h,
            ],
            [
                (uv_size[0] / JAVA_UV_SPACE) * w,
                (uv_size[1] / JAVA_UV_SPACE) * h,
            ],
        )
    }
}
