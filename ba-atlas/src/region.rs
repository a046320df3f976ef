use std::fmt;

/// Sub-rectangle of an atlas occupied by one slot's image, in atlas pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasRegion {
    pub slot: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasRegion {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }

    pub fn overlaps(&self, other: &AtlasRegion) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

impl fmt::Display for AtlasRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ ({},{}) {}x{}",
            self.slot, self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: u32, y: u32, w: u32, h: u32) -> AtlasRegion {
        AtlasRegion {
            slot: "s".into(),
            x,
            y,
            width: w,
            height: h,
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        assert!(!region(0, 0, 16, 16).overlaps(&region(16, 0, 16, 16)));
        assert!(!region(0, 0, 16, 16).overlaps(&region(0, 16, 16, 16)));
        assert!(region(0, 0, 16, 16).overlaps(&region(15, 15, 4, 4)));
    }

    #[test]
    fn display() {
        assert_eq!(region(18, 0, 16, 8).to_string(), "s @ (18,0) 16x8");
    }
}
