use ba_utils::AtlasSettings;

use crate::region::AtlasRegion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfItem {
    pub slot: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfLayout {
    /// Placements in packing order (tallest first).
    pub regions: Vec<AtlasRegion>,
    pub width: u32,
    pub height: u32,
}

/// Lays images out left to right in rows, tallest first.
///
/// A row is closed when the next image is taller than the row so far. Because
/// the input is sorted tallest-first that never fires, so without
/// `max_row_width` everything lands in a single row. With `max_row_width` a row
/// is also closed once the next image would cross that width.
///
/// The reported width is the furthest x cursor reached, trailing padding
/// included; the height is the last row's baseline plus its height.
pub fn pack_shelves(items: &[ShelfItem], settings: &AtlasSettings) -> ShelfLayout {
    if items.is_empty() {
        return ShelfLayout::default();
    }

    let mut sorted: Vec<&ShelfItem> = items.iter().collect();
    // Stable: equal heights keep arrival order.
    sorted.sort_by(|a, b| b.height.cmp(&a.height));

    let padding = settings.padding;
    let mut cur_x = 0u32;
    let mut cur_y = 0u32;
    let mut row_height = 0u32;
    let mut max_width = 0u32;
    let mut regions = Vec::with_capacity(sorted.len());

    for item in sorted {
        let (w, h) = (item.width, item.height);

        if row_height == 0 {
            row_height = h;
        }

        let too_tall = h > row_height;
        let too_wide = settings
            .max_row_width
            .is_some_and(|limit| cur_x + w > limit);
        if cur_x > 0 && (too_tall || too_wide) {
            cur_x = 0;
            cur_y += row_height + padding;
            row_height = h;
        }

        regions.push(AtlasRegion {
            slot: item.slot.clone(),
            x: cur_x,
            y: cur_y,
            width: w,
            height: h,
        });

        cur_x += w + padding;
        max_width = max_width.max(cur_x);
        row_height = row_height.max(h);
    }

    let width = if max_width > 0 {
        max_width
    } else {
        items.iter().map(|i| i.width).max().unwrap_or(0)
    };

    ShelfLayout {
        regions,
        width,
        height: cur_y + row_height,
    }
}
