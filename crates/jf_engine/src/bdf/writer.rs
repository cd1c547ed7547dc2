use super::{BdfFont, PropertyValue, bdf_value};
use crate::{
    EngineError, Result,
    glyph::{BoundingBox, Glyph},
};

impl BdfFont {
    /// Build the `bdf` crate representation. Metrics the crate stores unsigned
    /// (sizes, advances) fail with `BdfValueOutOfRange` when negative.
    pub fn to_font(&self) -> Result<bdf::Font> {
        let meta = &self.meta;
        let size = bdf::Size {
            pt: bdf_value("point size", meta.size.points)?,
            x: bdf_value("x resolution", meta.size.resolution_x)?,
            y: bdf_value("y resolution", meta.size.resolution_y)?,
        };

        let mut font = bdf::Font::new(meta.name.as_str(), None);
        font.set_size(size);
        font.set_format(meta.version.as_str());
        font.set_bounds(bounds(&meta.bounding_box)?);

        let properties = font.properties_mut();
        if let Some(family_name) = &meta.properties.family_name {
            properties.insert("FAMILY_NAME".to_string(), bdf::Property::String(family_name.clone()));
        }
        if let Some(weight_name) = &meta.properties.weight_name {
            properties.insert("WEIGHT_NAME".to_string(), bdf::Property::String(weight_name.clone()));
        }
        if let Some(descent) = meta.properties.font_descent {
            properties.insert("FONT_DESCENT".to_string(), bdf::Property::Integer(bdf_value("font descent", descent)?));
        }
        for (name, value) in &meta.properties.extra {
            let value = match value {
                PropertyValue::Text(text) => bdf::Property::String(text.clone()),
                PropertyValue::Integer(number) => bdf::Property::Integer(bdf_value("property", *number)?),
            };
            properties.insert(name.clone(), value);
        }

        let glyphs = font.glyphs_mut();
        for glyph in self.glyphs.values() {
            glyphs.insert(glyph.ch, write_glyph(glyph)?);
        }
        Ok(font)
    }

    /// Serialize to BDF text.
    pub fn to_bdf_string(&self) -> Result<String> {
        let mut out = Vec::new();
        bdf::write(&mut out, &self.to_font()?)?;
        String::from_utf8(out).map_err(EngineError::generic)
    }
}

fn bounds(bbox: &BoundingBox) -> Result<bdf::BoundingBox> {
    Ok(bdf::BoundingBox {
        width: bdf_value("width", bbox.width)?,
        height: bdf_value("height", bbox.height)?,
        x: bdf_value("x offset", bbox.x)?,
        y: bdf_value("y offset", bbox.y)?,
    })
}

/// Only the cells inside the bounding box are carried over, row padding is
/// left to the writer.
fn write_glyph(glyph: &Glyph) -> Result<bdf::Glyph> {
    let width = bdf_value::<i32, u32>("width", glyph.bounding_box.width)?;
    let height = bdf_value::<i32, u32>("height", glyph.bounding_box.height)?;
    let mut map = bdf::Bitmap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if glyph.get_pixel(x as usize, y as usize) {
                map.set(x, y, true);
            }
        }
    }

    let mut result = bdf::Glyph::new(glyph.name.as_str(), glyph.ch);
    result.set_scalable_width(Some((bdf_value("scalable width", glyph.scalable_width.0)?, bdf_value("scalable width", glyph.scalable_width.1)?)));
    result.set_device_width(Some((bdf_value("device width", glyph.device_width.0)?, bdf_value("device width", glyph.device_width.1)?)));
    result.set_bounds(bounds(&glyph.bounding_box)?);
    result.set_map(map);
    Ok(result)
}
