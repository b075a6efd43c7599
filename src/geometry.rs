//! Strip geometry: how a source width is divided into crop boxes.

/// Number of strips every image is cut into.
pub const STRIP_COUNT: u32 = 10;

/// A half-open pixel rectangle `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    /// First column (inclusive).
    pub left: u32,
    /// First row (inclusive).
    pub top: u32,
    /// Last column (exclusive).
    pub right: u32,
    /// Last row (exclusive).
    pub bottom: u32,
}

impl CropBox {
    /// Width of the box in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the box in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Width of each strip: `width / STRIP_COUNT`, rounded down.
#[must_use]
pub fn strip_width(width: u32) -> u32 {
    width / STRIP_COUNT
}

/// Number of rightmost columns that fall outside every strip.
#[must_use]
pub fn dropped_columns(width: u32) -> u32 {
    width % STRIP_COUNT
}

/// Crop boxes for all strips, left to right.
///
/// Every box spans the full height. The remainder columns
/// `[STRIP_COUNT * strip_width, width)` are not covered, and a width below
/// `STRIP_COUNT` yields zero-width boxes.
#[must_use]
pub fn strip_boxes(width: u32, height: u32) -> Vec<CropBox> {
    let sub_width = strip_width(width);
    (0..STRIP_COUNT)
        .map(|i| CropBox { left: i * sub_width, top: 0, right: (i + 1) * sub_width, bottom: height })
        .collect()
}
