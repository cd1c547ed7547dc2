use jf_engine::{BdfFont, BoundingBox, CHARSET, EngineError, GLYPH_COUNT, NativeFont};
use pretty_assertions::assert_eq;

use crate::patterned_font;

#[test]
fn native_to_bdf_text_and_back() {
    let font = patterned_font();
    let text = font.to_bdf().to_bdf_string().unwrap();

    let bdf: BdfFont = text.parse().unwrap();
    assert_eq!(bdf.glyphs.len(), GLYPH_COUNT);

    let reencoded = NativeFont::from_bdf(&bdf).unwrap();
    assert_eq!(reencoded.file_name().unwrap(), "h12b.jf");
    assert_eq!(reencoded.as_bytes(), font.as_bytes());
}

#[test]
fn exported_metadata() {
    let bdf = patterned_font().to_bdf();

    let max_width = bdf.glyphs.values().map(|g| g.bounding_box.width).max().unwrap();
    let max_height = bdf.glyphs.values().map(|g| g.bounding_box.height).max().unwrap();
    let min_y = bdf.glyphs.values().map(|g| g.bounding_box.y).min().unwrap();

    assert_eq!(bdf.meta.bounding_box, BoundingBox::new(max_width, max_height, 0, min_y));
    assert_eq!(bdf.meta.properties.font_descent, Some(-min_y));
    assert_eq!(bdf.meta.name, "h12b");
    assert_eq!(bdf.meta.size.points, 12);
}

#[test]
fn exported_text_layout() {
    let text = patterned_font().to_bdf().to_bdf_string().unwrap();

    assert!(text.starts_with("STARTFONT 2.1\n"));
    assert!(text.contains("FONT h12b\n"));
    assert!(text.contains("SIZE 12 75 75\n"));
    assert!(text.contains("WEIGHT_NAME \"Bold\"\n"));
    assert!(text.contains(&format!("CHARS {GLYPH_COUNT}\n")));
    assert!(text.contains("STARTCHAR character_163\n"));
    assert!(text.contains("ENCODING 163\n"));
    assert_eq!(text.matches("ENDCHAR").count(), GLYPH_COUNT);
    assert!(text.trim_end().ends_with("ENDFONT"));
}

#[test]
fn scalable_width_follows_device_width() {
    let bdf = patterned_font().to_bdf();
    for glyph in bdf.glyphs.values() {
        let x = if glyph.bitmap.is_empty() { 0 } else { glyph.bounding_box.x };
        assert_eq!(glyph.scalable_width.0, (glyph.device_width.0 + x + 1) * 75, "glyph {}", glyph.name);
    }
}

#[test]
fn incomplete_bdf_is_rejected() {
    let mut bdf = patterned_font().to_bdf();
    bdf.glyphs.remove(&('?' as u32));
    let text = bdf.to_bdf_string().unwrap();

    let parsed: BdfFont = text.parse().unwrap();
    let err = NativeFont::from_bdf(&parsed).unwrap_err();
    assert!(matches!(err, EngineError::MissingGlyph { ch: '?', code: 63 }));
}

#[test]
fn extra_glyphs_are_ignored() {
    let mut bdf = patterned_font().to_bdf();
    let mut extra = bdf.glyphs[&('A' as u32)].clone();
    extra.code = 0x263A;
    extra.ch = '\u{263A}';
    bdf.glyphs.insert(extra.code, extra);

    let font = NativeFont::from_bdf(&bdf).unwrap();
    assert_eq!(font.as_bytes(), patterned_font().as_bytes());
    assert_eq!(CHARSET.chars().count(), GLYPH_COUNT);
}

#[test]
fn xlfd_named_font_is_imported() {
    let mut bdf = patterned_font().to_bdf();
    bdf.meta.name = "-Adobe-Helvetica-Bold-R-Normal--12-120-75-75-P-70-ISO8859-1".to_string();
    let text = bdf.to_bdf_string().unwrap();

    let parsed: BdfFont = text.parse().unwrap();
    let font = NativeFont::from_bdf(&parsed).unwrap();
    assert_eq!(font.file_name().unwrap(), "h12b.jf");
    assert_eq!(font.as_bytes(), patterned_font().as_bytes());
}
