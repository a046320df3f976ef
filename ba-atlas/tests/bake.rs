use std::path::Path;

use ba_atlas::build_atlas;
use ba_utils::{AtlasSettings, TextureSlots};
use image::{Rgba, RgbaImage};
use tempfile::tempdir;

fn write_png(path: &Path, w: u32, h: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(w, h, Rgba(color)).save(path).unwrap();
}

#[test]
fn bakes_every_loadable_slot() {
    let dir = tempdir().unwrap();
    let red = dir.path().join("red.png");
    let blue = dir.path().join("blue.png");
    write_png(&red, 16, 16, [255, 0, 0, 255]);
    write_png(&blue, 32, 32, [0, 0, 255, 255]);

    let slots: TextureSlots = [("0", red), ("1", blue)].into_iter().collect();
    let atlas_path = dir.path().join("out/chair_atlas.png");
    let result = build_atlas(&slots, &atlas_path, "furniture decor:chair", &AtlasSettings::default());

    assert!(result.success, "{:?}", result.notes);
    assert!(result.is_usable());
    assert_eq!((result.width, result.height), (52, 32));
    assert_eq!(result.region_count(), 2);

    let blue_region = result.region("1").unwrap();
    assert_eq!((blue_region.x, blue_region.y), (0, 0));
    let red_region = result.region("0").unwrap();
    assert_eq!((red_region.x, red_region.y, red_region.width), (34, 0, 16));

    let baked = image::open(&atlas_path).unwrap().to_rgba8();
    assert_eq!(baked.dimensions(), (52, 32));
    assert_eq!(baked.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
    assert_eq!(baked.get_pixel(34, 0), &Rgba([255, 0, 0, 255]));
    // Padding column and the area below the short image stay transparent.
    assert_eq!(baked.get_pixel(32, 0)[3], 0);
    assert_eq!(baked.get_pixel(40, 20)[3], 0);

    assert!(result.notes.iter().any(|n| n.starts_with("Built atlas")));
}

#[test]
fn unreadable_slots_are_noted_and_skipped() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.png");
    let junk = dir.path().join("junk.png");
    write_png(&good, 8, 8, [0, 255, 0, 255]);
    std::fs::write(&junk, b"not a png").unwrap();

    let slots: TextureSlots = [
        ("good", good),
        ("junk", junk),
        ("gone", dir.path().join("gone.png")),
    ]
    .into_iter()
    .collect();
    let result = build_atlas(&slots, &dir.path().join("atlas.png"), "test", &AtlasSettings::default());

    assert!(result.success);
    assert_eq!(result.region_count(), 1);
    assert!(result.region("GOOD").is_some());
    assert!(result.region("junk").is_none());
    assert!(result.notes.iter().any(|n| n.contains("\"junk\"")));
    assert!(result.notes.iter().any(|n| n.contains("Missing PNG for slot \"gone\"")));
    let skipped: Vec<_> = result.skipped_slots().collect();
    assert_eq!(skipped, vec!["junk", "gone"]);
}

#[test]
fn zero_valid_images_writes_nothing() {
    let dir = tempdir().unwrap();
    let atlas_path = dir.path().join("atlas.png");
    let slots: TextureSlots = [("0", dir.path().join("missing.png"))].into_iter().collect();

    let result = build_atlas(&slots, &atlas_path, "test", &AtlasSettings::default());
    assert!(!result.success);
    assert!(!result.is_usable());
    assert_eq!((result.width, result.height), (0, 0));
    assert!(!atlas_path.exists());

    let empty = build_atlas(&TextureSlots::new(), &atlas_path, "test", &AtlasSettings::default());
    assert!(!empty.success);
    assert!(!atlas_path.exists());
}

#[test]
fn regions_stay_inside_and_apart() {
    let dir = tempdir().unwrap();
    let mut slots = TextureSlots::new();
    for (i, (w, h)) in [(16, 16), (8, 32), (24, 4), (16, 16), (2, 2)].into_iter().enumerate() {
        let path = dir.path().join(format!("{i}.png"));
        write_png(&path, w, h, [10, 20, 30, 255]);
        slots.insert(i.to_string(), path);
    }
    let settings = AtlasSettings {
        max_row_width: Some(40),
        ..AtlasSettings::default()
    };
    let result = build_atlas(&slots, &dir.path().join("atlas.png"), "mixed", &settings);
    assert!(result.success);

    let regions: Vec<_> = result.regions().collect();
    assert_eq!(regions.len(), 5);
    for (i, a) in regions.iter().enumerate() {
        assert!(a.fits_within(result.width, result.height));
        for b in &regions[i + 1..] {
            assert!(!a.overlaps(b));
        }
    }
}
