//! The fixed character set of .jf fonts and the byte → header slot table.
//!
//! A .jf font can only hold the 95 characters of [`CHARSET`]. The position of a
//! character inside that sequence is its glyph index, and its metrics live in
//! the 9 byte header slot at `glyph_index * 9`.

/// All characters a .jf font stores, in header order.
pub const CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!\"£$%^&*()-_=+[{]};:'@#~,<.>/?\\| ";

/// Number of glyphs in every .jf font.
pub const GLYPH_COUNT: usize = 95;

/// Size of one glyph header slot in bytes.
pub const SLOT_SIZE: usize = 9;

/// Size of the glyph header table; the bitmap heap starts right after it.
pub const HEADER_SIZE: usize = GLYPH_COUNT * SLOT_SIZE;

/// Glyph index every byte outside the charset is mapped to.
pub const SENTINEL_INDEX: usize = 74;

/// Maps every byte value to the header offset of its glyph slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable {
    slots: [usize; 256],
    sentinel: usize,
}

impl OffsetTable {
    /// Build the table for `charset`. Byte values not found in it resolve to
    /// the slot of `sentinel_index`.
    pub fn new(charset: &str, sentinel_index: usize) -> Self {
        let sentinel = sentinel_index * SLOT_SIZE;
        let mut slots = [sentinel; 256];

        // first occurrence wins
        let chars: Vec<char> = charset.chars().collect();
        for (index, ch) in chars.iter().enumerate().rev() {
            let code = *ch as usize;
            if code < slots.len() {
                slots[code] = index * SLOT_SIZE;
            }
        }

        Self { slots, sentinel }
    }

    /// Header offset for a raw character code.
    #[inline]
    pub fn slot(&self, code: u32) -> usize {
        self.slots.get(code as usize).copied().unwrap_or(self.sentinel)
    }

    /// Header offset for a character.
    #[inline]
    pub fn header_offset(&self, ch: char) -> usize {
        self.slot(ch as u32)
    }

    /// The offset shared by all characters outside the charset.
    pub fn sentinel(&self) -> usize {
        self.sentinel
    }
}

lazy_static::lazy_static! {
    pub static ref OFFSET_TABLE: OffsetTable = OffsetTable::new(CHARSET, SENTINEL_INDEX);
}

/// Header offset of `ch` in the default charset.
#[inline]
pub fn header_offset(ch: char) -> usize {
    OFFSET_TABLE.header_offset(ch)
}

/// Position of `ch` inside [`CHARSET`].
pub fn glyph_index(ch: char) -> Option<usize> {
    CHARSET.chars().position(|c| c == ch)
}

/// Iterate the charset in header order.
pub fn chars() -> impl Iterator<Item = char> {
    CHARSET.chars()
}
