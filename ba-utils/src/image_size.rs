use std::path::Path;

use image::ImageReader;

/// Nominal texture size used when no texture size can be read.
pub const DEFAULT_TEXTURE_SIZE: (u32, u32) = (64, 64);

/// Reads only the image header. Never fails: anything unreadable, malformed or
/// zero-sized is `None`.
pub fn texture_size(path: &Path) -> Option<(u32, u32)> {
    ImageReader::open(path)
        .ok()?
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
        .filter(|&(w, h)| w > 0 && h > 0)
}

pub fn texture_size_or(path: &Path, fallback: (u32, u32)) -> (u32, u32) {
    texture_size(path).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, w: u32, h: u32) {
        image::RgbaImage::from_pixel(w, h, image::Rgba([255, 0, 0, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn reads_png_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        write_png(&path, 32, 16);
        assert_eq!(texture_size(&path), Some((32, 16)));
    }

    #[test]
    fn malformed_input_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cases: [(&str, &[u8]); 3] = [
            ("empty.png", b""),
            ("truncated.png", b"\x89PNG\r\n\x1a\n"),
            ("text.png", b"definitely not an image"),
        ];
        for (name, bytes) in cases {
            let path = dir.path().join(name);
            std::fs::write(&path, bytes).unwrap();
            assert_eq!(texture_size(&path), None, "{name}");
        }
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        assert_eq!(texture_size_or(&path, DEFAULT_TEXTURE_SIZE), (64, 64));

        write_png(&path, 8, 24);
        assert_eq!(texture_size_or(&path, DEFAULT_TEXTURE_SIZE), (8, 24));
    }
}
