use std::path::{Path, PathBuf};

use ba_utils::TextureSlots;

/// Renders an inventory icon for a Java model.
///
/// `out` is where the builder would like the PNG. The returned path is only
/// trusted if the file exists afterwards.
pub trait IconRenderer {
    fn render_icon(&self, model: &Path, slots: &TextureSlots, out: &Path) -> Option<PathBuf>;
}

impl<F> IconRenderer for F
where
    F: Fn(&Path, &TextureSlots, &Path) -> Option<PathBuf>,
{
    fn render_icon(&self, model: &Path, slots: &TextureSlots, out: &Path) -> Option<PathBuf> {
        self(model, slots, out)
    }
}
