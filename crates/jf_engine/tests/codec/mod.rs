use jf_engine::{
    BoundingBox, CHARSET, EngineError, GLYPH_COUNT, Glyph, GlyphHeader, HEADER_SIZE, NativeFont,
    charset::{self, SLOT_SIZE},
    native::{self, FontStyle},
};
use pretty_assertions::assert_eq;

use crate::{patterned_font, patterned_table};

#[test]
fn decode_two_by_two_glyph() {
    let mut data = vec![0u8; HEADER_SIZE];
    data[0..5].copy_from_slice(&[0, 6, 87, 2, 2]);
    data.extend_from_slice(&[1, 1, 1, 1]);

    let font = NativeFont::from_bytes("h12p.jf", data).unwrap();
    let glyph = font.glyph('A');

    assert_eq!(glyph.bitmap, vec![vec![1, 1, 0, 0, 0, 0, 0, 0], vec![1, 1, 0, 0, 0, 0, 0, 0]]);
    assert_eq!(glyph.bounding_box, BoundingBox::new(2, 2, 0, -2));
    assert_eq!(glyph.code, 65);
    assert_eq!(glyph.name, "character_65");
    assert_eq!(glyph.scalable_width, (75, 0));
}

#[test]
fn encode_single_row_glyph() {
    let mut table = patterned_table();
    let mut a = Glyph::new('A');
    a.bounding_box = BoundingBox::new(3, 1, 1, 0);
    a.bitmap = vec![vec![1, 1, 1]];
    a.device_width = (5, 0);
    table.insert('A' as u32, a);

    let data = native::encode(&table, CHARSET).unwrap();
    assert_eq!(&data[0..8], &[0, 6, 87, 3, 1, 1, 1, 5]);
    assert_eq!(&data[HEADER_SIZE..HEADER_SIZE + 3], &[1, 1, 1]);
}

#[test]
fn blank_glyph_decodes_empty() {
    let mut data = vec![0u8; HEADER_SIZE];
    let slot = charset::header_offset('W');
    // 3x4 glyph at the heap start, x offset 2, top 3, advance 6
    data[slot..slot + 8].copy_from_slice(&[0, 6, 87, 3, 4, 2, 3, 6]);
    data.extend_from_slice(&[0; 12]);

    let font = NativeFont::from_bytes("h12p.jf", data).unwrap();
    let glyph = font.glyph('W');
    assert_eq!(glyph.bounding_box, BoundingBox::EMPTY);
    assert!(glyph.bitmap.is_empty());
    assert_eq!(glyph.device_width, (6, 0));
    assert_eq!(font.glyph_header('W').width, 3);
}

#[test]
fn roundtrip_all_glyphs() {
    let table = patterned_table();
    let font = patterned_font();

    for ch in CHARSET.chars() {
        let original = &table[&(ch as u32)];
        let decoded = font.glyph(ch);
        assert_eq!(decoded.bounding_box, original.bounding_box, "bounding box of {ch:?}");
        assert_eq!(decoded.device_width, original.device_width, "device width of {ch:?}");
        assert_eq!(decoded.bitmap, original.bitmap, "bitmap of {ch:?}");
    }
}

#[test]
fn heap_follows_header() {
    let table = patterned_table();
    let font = patterned_font();

    let mut position = HEADER_SIZE;
    for ch in CHARSET.chars() {
        let header = font.glyph_header(ch);
        assert_eq!(header.position, position, "position of {ch:?}");
        position += header.pixel_count();
    }
    assert_eq!(position, font.as_bytes().len());
    assert_eq!(font.heap().len(), table.values().map(|g| g.pixels().len()).sum::<usize>());
}

#[test]
fn header_size_is_fixed() {
    let table = patterned_table();
    let reversed: String = CHARSET.chars().rev().collect();

    let data = native::encode(&table, &reversed).unwrap();
    let first = GlyphHeader::read(&data[0..SLOT_SIZE]);
    assert_eq!(first.position, HEADER_SIZE);
    assert_eq!(GLYPH_COUNT * SLOT_SIZE, 855);
    assert_eq!(data.len(), patterned_font().as_bytes().len());
}

#[test]
fn missing_glyph_is_rejected() {
    for ch in CHARSET.chars() {
        let mut table = patterned_table();
        table.remove(&(ch as u32));
        match NativeFont::from_glyphs("h12b", 12, FontStyle::Bold, &table) {
            Err(EngineError::MissingGlyph { ch: missing, code }) => {
                assert_eq!(missing, ch);
                assert_eq!(code, ch as u32);
            }
            other => panic!("expected missing glyph error for {ch:?}, got {other:?}"),
        }
    }
}

#[test]
fn missing_glyph_error_names_character() {
    let mut table = patterned_table();
    table.remove(&('£' as u32));
    let err = native::encode(&table, CHARSET).unwrap_err();
    assert_eq!(err.to_string(), "Glyph for character '£' (code 163) is missing");
}

#[test]
fn unknown_character_uses_sentinel_slot() {
    let font = patterned_font();
    assert_eq!(font.glyph('é').bitmap, font.glyph('=').bitmap);
    assert_eq!(font.glyph('\u{263A}').bounding_box, font.glyph('=').bounding_box);
}

#[test]
fn empty_buffer_is_rejected() {
    let err = NativeFont::from_bytes("h12b.jf", Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, EngineError::MissingData));
}
