use jf_engine::{BoundingBox, CHARSET, FontStyle, Glyph, GlyphTable, NativeFont};

mod bdf;
mod codec;

/// A glyph with a pattern derived from its position in the charset, so every
/// glyph of a test font differs.
pub fn patterned_glyph(index: usize, ch: char) -> Glyph {
    let mut glyph = Glyph::new(ch);
    if ch == ' ' {
        glyph.device_width = (4, 0);
        return glyph;
    }

    let width = 1 + index % 11;
    let height = 2 + index % 13;
    let pixels: Vec<u8> = (0..width * height).map(|i| u8::from((i + index) % 3 != 0)).collect();
    glyph = Glyph::from_pixels(ch, width, height, &pixels);
    glyph.bounding_box.x = (index % 3) as i32 - 1;
    glyph.bounding_box.y = -((index % 4) as i32);
    glyph.device_width = (width as i32 + 1, 0);
    glyph
}

pub fn patterned_table() -> GlyphTable {
    CHARSET.chars().enumerate().map(|(index, ch)| (ch as u32, patterned_glyph(index, ch))).collect()
}

pub fn patterned_font() -> NativeFont {
    NativeFont::from_glyphs("h12b", 12, FontStyle::Bold, &patterned_table()).unwrap()
}

#[test]
fn test_patterned_glyphs_are_not_blank() {
    for (code, glyph) in patterned_table() {
        if code != ' ' as u32 {
            assert!(!glyph.is_blank(), "glyph {code} is blank");
            assert_ne!(glyph.bounding_box, BoundingBox::EMPTY);
        }
    }
}
