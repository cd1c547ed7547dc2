use super::{BDF_RESOLUTION, BDF_VERSION, BdfFont, BdfMeta, BdfProperties, BdfSize};
use crate::{
    Result,
    glyph::BoundingBox,
    native::{FontStyle, NativeFont},
};

impl NativeFont {
    /// Decode every charset glyph into a BDF font.
    ///
    /// The font bounding box spans the widest and tallest glyph and reaches
    /// down to the lowest glyph bottom, which also gives the descent.
    pub fn to_bdf(&self) -> BdfFont {
        let mut bdf = BdfFont::new();

        let mut max_width = 0;
        let mut max_height = 0;
        let mut min_y = 0;

        for glyph in self.glyphs() {
            let bbox = glyph.bounding_box;
            max_width = max_width.max(bbox.width);
            max_height = max_height.max(bbox.height);
            min_y = min_y.min(bbox.y);
            bdf.glyphs.insert(glyph.code, glyph);
        }

        bdf.meta = BdfMeta {
            version: BDF_VERSION.to_string(),
            bounding_box: BoundingBox::new(max_width, max_height, 0, min_y),
            name: self.name().to_string(),
            size: BdfSize {
                points: self.size().unwrap_or_default(),
                resolution_x: BDF_RESOLUTION,
                resolution_y: BDF_RESOLUTION,
            },
            properties: BdfProperties {
                family_name: None,
                weight_name: self.style().map(|style| style.weight_name().to_string()),
                font_descent: Some(-min_y),
                extra: Vec::new(),
            },
        };
        log::debug!("{}: exported {} glyphs, bounding box {:?}", self.name(), bdf.glyphs.len(), bdf.meta.bounding_box);
        bdf
    }

    /// Encode a BDF font. The name is the font family, size comes from the
    /// font metadata, the style is bold when the weight name says so.
    pub fn from_bdf(bdf: &BdfFont) -> Result<Self> {
        let style = bdf.meta.properties.weight_name.as_deref().map(FontStyle::from_weight_name).unwrap_or(FontStyle::Normal);
        Self::from_glyphs(bdf.meta.family_name(), bdf.meta.size.points, style, &bdf.glyphs)
    }
}
