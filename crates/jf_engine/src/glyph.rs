//! Glyph representation shared by the .jf codec and the BDF model.
//!
//! Bitmaps are stored as rows of cells (one `u8` per pixel, 0 or 1). Rows
//! produced by the decoder are padded to a multiple of 8 cells so they pack
//! into whole BDF bytes; only the first `bounding_box.width` cells carry data.

/// Factor between device width and the BDF scalable width.
pub const SCALABLE_WIDTH_FACTOR: i32 = 75;

/// Glyph box relative to the origin. `y` is the bottom edge measured from the
/// baseline, negative values lie below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl BoundingBox {
    pub const EMPTY: Self = Self { width: 0, height: 0, x: 0, y: 0 };

    pub const fn new(width: i32, height: i32, x: i32, y: i32) -> Self {
        Self { width, height, x, y }
    }

    /// Top edge of the box relative to the baseline.
    pub fn top(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub name: String,
    pub code: u32,
    pub ch: char,
    /// Device independent advance (x, y).
    pub scalable_width: (i32, i32),
    /// Advance in pixels (x, y).
    pub device_width: (i32, i32),
    pub bounding_box: BoundingBox,
    pub bitmap: Vec<Vec<u8>>,
}

impl Glyph {
    /// Create an empty glyph for `ch`.
    pub fn new(ch: char) -> Self {
        let code = ch as u32;
        Self {
            name: glyph_name(code),
            code,
            ch,
            scalable_width: (0, 0),
            device_width: (0, 0),
            bounding_box: BoundingBox::EMPTY,
            bitmap: Vec::new(),
        }
    }

    /// Create a glyph from row-major pixel data of `width * height` bytes.
    /// Any non-zero byte is a set pixel. Missing bytes count as unset.
    pub fn from_pixels(ch: char, width: usize, height: usize, pixels: &[u8]) -> Self {
        let row_len = padded_row_len(width);
        let mut bitmap = Vec::with_capacity(height);
        for y in 0..height {
            let mut row = vec![0u8; row_len];
            for (x, cell) in row.iter_mut().take(width).enumerate() {
                *cell = u8::from(pixels.get(y * width + x).is_some_and(|p| *p != 0));
            }
            bitmap.push(row);
        }

        let mut glyph = Self::new(ch);
        glyph.bounding_box.width = width as i32;
        glyph.bounding_box.height = height as i32;
        glyph.bitmap = bitmap;
        glyph
    }

    /// Get a pixel value, `false` outside the bitmap.
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        self.bitmap.get(y).and_then(|row| row.get(x)).is_some_and(|p| *p != 0)
    }

    /// Set a pixel, growing the bitmap as needed.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        if self.bitmap.len() <= y {
            self.bitmap.resize(y + 1, Vec::new());
        }
        let row = &mut self.bitmap[y];
        if row.len() <= x {
            row.resize(padded_row_len(x + 1), 0);
        }
        row[x] = u8::from(value);
    }

    /// True if no pixel of the bitmap is set.
    pub fn is_blank(&self) -> bool {
        self.bitmap.iter().all(|row| row.iter().all(|p| *p == 0))
    }

    /// Flatten the bitmap to exactly `width * height` bytes of 0/1, reading
    /// only inside the bounding box. Padding cells are dropped.
    pub fn pixels(&self) -> Vec<u8> {
        let width = self.bounding_box.width.max(0) as usize;
        let height = self.bounding_box.height.max(0) as usize;
        let mut result = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                result.push(u8::from(self.get_pixel(x, y)));
            }
        }
        result
    }

    /// Drop bitmap rows and metrics of a glyph without set pixels.
    pub fn clear(&mut self) {
        self.bitmap.clear();
        self.bounding_box = BoundingBox::EMPTY;
    }
}

/// Name used for glyphs in exported BDF files.
pub fn glyph_name(code: u32) -> String {
    format!("character_{code}")
}

/// Row length rounded up to whole bytes.
#[inline]
pub fn padded_row_len(width: usize) -> usize {
    (width + 7) / 8 * 8
}

/// BDF scalable width for a .jf advance. Only the left x offset is added.
#[inline]
pub fn scalable_width(device_width: i32, x_offset: i32) -> i32 {
    (device_width + x_offset + 1) * SCALABLE_WIDTH_FACTOR
}
