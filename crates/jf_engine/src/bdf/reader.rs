use std::str::FromStr;

use super::{BdfFont, BdfMeta, BdfProperties, BdfSize, PropertyValue, bdf_value};
use crate::{
    EngineError, Result,
    glyph::{BoundingBox, Glyph},
    native::GlyphTable,
};

impl FromStr for BdfFont {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl BdfFont {
    /// Take over a font read by the `bdf` crate.
    pub fn from_font(font: &bdf::Font) -> Result<Self> {
        let size = font.size();
        let mut meta = BdfMeta {
            version: font.format().to_string(),
            bounding_box: bounding_box(font.bounds()),
            name: font.name().to_string(),
            size: BdfSize {
                points: size.pt as u32,
                resolution_x: size.x as u32,
                resolution_y: size.y as u32,
            },
            properties: BdfProperties::default(),
        };

        let properties = &mut meta.properties;
        for (name, value) in font.properties() {
            let value = match value {
                bdf::Property::String(text) => PropertyValue::Text(text.clone()),
                bdf::Property::Integer(number) => PropertyValue::Integer(*number as i64),
            };
            match (name.as_str(), value) {
                ("FAMILY_NAME", PropertyValue::Text(text)) => properties.family_name = Some(text),
                ("WEIGHT_NAME", PropertyValue::Text(text)) => properties.weight_name = Some(text),
                ("FONT_DESCENT", PropertyValue::Integer(descent)) => properties.font_descent = Some(bdf_value("font descent", descent)?),
                (_, value) => properties.extra.push((name.clone(), value)),
            }
        }
        properties.extra.sort_by(|a, b| a.0.cmp(&b.0));

        let mut glyphs = GlyphTable::new();
        for (ch, glyph) in font.glyphs() {
            glyphs.insert(*ch as u32, read_glyph(*ch, glyph));
        }
        log::debug!("read BDF font '{}' with {} glyphs", meta.name, glyphs.len());

        Ok(Self { glyphs, meta })
    }
}

fn bounding_box(bounds: &bdf::BoundingBox) -> BoundingBox {
    BoundingBox::new(bounds.width as i32, bounds.height as i32, bounds.x as i32, bounds.y as i32)
}

fn read_glyph(ch: char, glyph: &bdf::Glyph) -> Glyph {
    let (width, height) = (glyph.width(), glyph.height());
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(u8::from(glyph.get(x, y)));
        }
    }

    let mut result = Glyph::from_pixels(ch, width as usize, height as usize, &pixels);
    result.name = glyph.name().to_string();
    result.bounding_box = bounding_box(glyph.bounds());
    result.scalable_width = glyph.scalable_width().map(|w| (w.0 as i32, w.1 as i32)).unwrap_or_default();
    result.device_width = glyph.device_width().map(|w| (w.0 as i32, w.1 as i32)).unwrap_or_default();
    result
}
