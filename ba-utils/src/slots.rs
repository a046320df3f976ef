use std::path::{Path, PathBuf};

/// Texture slot name → absolute image path.
///
/// Keeps insertion order (the first resolvable slot decides the nominal texture
/// size) and treats slot names case-insensitively, matching how model files and
/// content definitions spell them inconsistently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextureSlots {
    entries: Vec<(String, PathBuf)>,
}

impl TextureSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a slot. A replaced slot keeps its original position.
    pub fn insert(&mut self, slot: impl Into<String>, path: impl Into<PathBuf>) {
        let slot = slot.into();
        let path = path.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&slot))
        {
            entry.1 = path;
        } else {
            self.entries.push((slot, path));
        }
    }

    pub fn get(&self, slot: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(slot))
            .map(|(_, path)| path.as_path())
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.get(slot).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// First slot whose file exists on disk.
    pub fn first_existing(&self) -> Option<(&str, &Path)> {
        self.iter().find(|(_, path)| path.is_file())
    }
}

impl<K: Into<String>, V: Into<PathBuf>> FromIterator<(K, V)> for TextureSlots {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut slots = TextureSlots::new();
        for (slot, path) in iter {
            slots.insert(slot, path);
        }
        slots
    }
}

impl<K: Into<String>, V: Into<PathBuf>> Extend<(K, V)> for TextureSlots {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (slot, path) in iter {
            self.insert(slot, path);
        }
    }
}
