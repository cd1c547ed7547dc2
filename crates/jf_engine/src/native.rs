//! The .jf bitmap font format.
//!
//! Layout:
//! - 855 byte header, one 9 byte slot per charset glyph:
//!   - 3 bytes bitmap position in base 128 (absolute offset into the file)
//!   - width, height (unsigned)
//!   - x offset, y offset of the glyph top, device width (signed)
//!   - 1 unused byte
//! - Bitmap heap: one byte per pixel, row-major, glyphs in charset order

use std::collections::BTreeMap;
use std::fmt::Display;

use regex::Regex;

use crate::{
    EngineError, Result,
    charset::{self, HEADER_SIZE, OFFSET_TABLE, OffsetTable, SLOT_SIZE},
    glyph::{Glyph, scalable_width},
};

/// Glyphs keyed by character code.
pub type GlyphTable = BTreeMap<u32, Glyph>;

/// File extension of native fonts.
pub const EXTENSION: &str = "jf";

/// Largest heap offset that fits into the 3 byte base 128 position.
pub const MAX_POSITION: usize = 128 * 128 * 128 - 1;

lazy_static::lazy_static! {
    static ref FILE_NAME: Regex = Regex::new(r"(?i)^([a-z])(\d{2})([bp])$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Bold,
}

impl FontStyle {
    /// Map a BDF `WEIGHT_NAME` to a style. Anything but "bold" is normal.
    pub fn from_weight_name(weight_name: &str) -> Self {
        if weight_name.trim().eq_ignore_ascii_case("bold") {
            Self::Bold
        } else {
            Self::Normal
        }
    }

    pub fn weight_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Bold => "Bold",
        }
    }

    /// Style letter used in file names.
    pub fn file_flag(&self) -> char {
        match self {
            Self::Normal => 'p',
            Self::Bold => 'b',
        }
    }
}

impl Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.weight_name())
    }
}

/// Decoded contents of one header slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphHeader {
    pub position: usize,
    pub width: u8,
    pub height: u8,
    pub x_offset: i8,
    /// Top of the glyph box relative to the baseline.
    pub y_offset: i8,
    pub device_width: i8,
}

impl GlyphHeader {
    /// Read a slot. Bytes past the end of `slot` read as zero.
    pub fn read(slot: &[u8]) -> Self {
        let byte = |i: usize| slot.get(i).copied().unwrap_or(0);
        Self {
            position: decode_position([byte(0), byte(1), byte(2)]),
            width: byte(3),
            height: byte(4),
            x_offset: byte(5) as i8,
            y_offset: byte(6) as i8,
            device_width: byte(7) as i8,
        }
    }

    /// Header for `glyph` whose pixels start at `position`.
    pub fn for_glyph(glyph: &Glyph, position: usize) -> Result<Self> {
        let bbox = &glyph.bounding_box;
        Ok(Self {
            position,
            width: metric(glyph, "width", bbox.width)?,
            height: metric(glyph, "height", bbox.height)?,
            x_offset: metric(glyph, "x offset", bbox.x)?,
            y_offset: metric(glyph, "y offset", bbox.top())?,
            device_width: metric(glyph, "device width", glyph.device_width.0)?,
        })
    }

    pub fn write(&self, slot: &mut [u8; SLOT_SIZE]) -> Result<()> {
        slot[0..3].copy_from_slice(&encode_position(self.position)?);
        slot[3] = self.width;
        slot[4] = self.height;
        slot[5] = self.x_offset as u8;
        slot[6] = self.y_offset as u8;
        slot[7] = self.device_width as u8;
        slot[8] = 0;
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

fn metric<T: TryFrom<i32>>(glyph: &Glyph, field: &'static str, value: i32) -> Result<T> {
    T::try_from(value).map_err(|_| EngineError::MetricOutOfRange { ch: glyph.ch, field, value })
}

/// Encode a heap offset as three base 128 digits, most significant first.
pub fn encode_position(position: usize) -> Result<[u8; 3]> {
    if position > MAX_POSITION {
        return Err(EngineError::HeapOverflow { offset: position });
    }
    Ok([(position / (128 * 128)) as u8, (position / 128 % 128) as u8, (position % 128) as u8])
}

pub fn decode_position(bytes: [u8; 3]) -> usize {
    bytes[0] as usize * 128 * 128 + bytes[1] as usize * 128 + bytes[2] as usize
}

/// Decode the glyph for `ch` out of a complete font buffer.
///
/// Glyphs without a single set pixel come back empty, with a zero bounding
/// box and no bitmap rows, whatever size the header declares.
pub fn decode_glyph(data: &[u8], table: &OffsetTable, ch: char) -> Glyph {
    let slot = data.get(table.header_offset(ch)..).unwrap_or_default();
    let header = GlyphHeader::read(slot);

    let pixels = data.get(header.position..).unwrap_or_default();
    let pixels = &pixels[..header.pixel_count().min(pixels.len())];

    let mut glyph = Glyph::from_pixels(ch, header.width as usize, header.height as usize, pixels);
    if glyph.is_blank() {
        glyph.clear();
    } else {
        glyph.bounding_box.x = header.x_offset as i32;
        glyph.bounding_box.y = header.y_offset as i32 - header.height as i32;
    }

    let device_width = header.device_width as i32;
    glyph.device_width = (device_width, 0);
    glyph.scalable_width = (scalable_width(device_width, header.x_offset as i32), 0);
    glyph
}

/// Serialize `glyphs` into header + heap for `charset`. Every charset character
/// needs a glyph; nothing is returned if one is missing.
pub fn encode(glyphs: &GlyphTable, charset: &str) -> Result<Vec<u8>> {
    let mut slots = vec![[0u8; SLOT_SIZE]; charset.chars().count()];
    let header_size = slots.len() * SLOT_SIZE;
    let mut heap = Vec::new();

    for (slot, ch) in slots.iter_mut().zip(charset.chars()) {
        let code = ch as u32;
        let Some(glyph) = glyphs.get(&code) else {
            return Err(EngineError::MissingGlyph { ch, code });
        };
        let pixels = glyph.pixels();
        let entry = GlyphHeader::for_glyph(glyph, header_size + heap.len())?;
        entry.write(slot)?;
        heap.extend_from_slice(&pixels);
    }

    log::debug!("encoded {} glyphs, {} byte bitmap heap", slots.len(), heap.len());
    let mut data = slots.concat();
    data.extend_from_slice(&heap);
    Ok(data)
}

/// A font in the native .jf layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFont {
    name: String,
    size: Option<u32>,
    style: Option<FontStyle>,
    data: Vec<u8>,
}

impl NativeFont {
    /// Wrap the raw contents of `file_name`. Size and style are taken from the
    /// file name (`h12b.jf`); a name that doesn't follow that pattern leaves
    /// them unset.
    pub fn from_bytes(file_name: &str, data: impl Into<Vec<u8>>) -> Result<Self> {
        let data = data.into();
        if data.is_empty() {
            return Err(EngineError::MissingData);
        }
        if data.len() < HEADER_SIZE {
            log::warn!("{file_name}: {} bytes is shorter than the {HEADER_SIZE} byte header", data.len());
        }

        let name = file_name.split('.').next().unwrap_or_default().to_string();
        let (size, style) = match parse_file_name(&name) {
            Some((size, style)) => (Some(size), Some(style)),
            None => {
                log::warn!("{}", EngineError::MalformedFileName { name: file_name.to_string() });
                (None, None)
            }
        };

        Ok(Self { name, size, style, data })
    }

    /// Encode a glyph table for the default charset.
    pub fn from_glyphs(name: &str, size: u32, style: FontStyle, glyphs: &GlyphTable) -> Result<Self> {
        let data = encode(glyphs, charset::CHARSET)?;
        Ok(Self {
            name: name.to_string(),
            size: Some(size),
            style: Some(style),
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }

    pub fn style(&self) -> Option<FontStyle> {
        self.style
    }

    /// Storage name: first letter of the family, two digit point size and
    /// style flag.
    pub fn file_name(&self) -> Result<String> {
        let letter = self.name.chars().next().filter(|c| c.is_ascii_alphabetic());
        let size = self.size.filter(|size| *size <= 99);
        match (letter, size, self.style) {
            (Some(letter), Some(size), Some(style)) => Ok(format!("{}{:02}{}.{EXTENSION}", letter.to_ascii_lowercase(), size, style.file_flag())),
            _ => Err(EngineError::MalformedFileName { name: self.name.clone() }),
        }
    }

    pub fn glyph(&self, ch: char) -> Glyph {
        decode_glyph(&self.data, &OFFSET_TABLE, ch)
    }

    /// All glyphs in charset order.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        charset::chars().map(|ch| self.glyph(ch))
    }

    /// The header slot of `ch`.
    pub fn glyph_header(&self, ch: char) -> GlyphHeader {
        GlyphHeader::read(self.header().get(OFFSET_TABLE.header_offset(ch)..).unwrap_or_default())
    }

    /// Metric region of the buffer.
    pub fn header(&self) -> &[u8] {
        &self.data[..HEADER_SIZE.min(self.data.len())]
    }

    /// Pixel region of the buffer.
    pub fn heap(&self) -> &[u8] {
        self.data.get(HEADER_SIZE..).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Split a file stem like `h12b` into point size and style.
pub fn parse_file_name(stem: &str) -> Option<(u32, FontStyle)> {
    let caps = FILE_NAME.captures(stem)?;
    let size = caps[2].parse().ok()?;
    let style = if caps[3].eq_ignore_ascii_case("b") { FontStyle::Bold } else { FontStyle::Normal };
    Some((size, style))
}
