//! In-memory BDF font model.
//!
//! Only the parts of BDF 2.1 a .jf font can fill are modelled: the global
//! bounding box, name, size, family, weight name and descent. Other properties
//! read from a file are kept so they survive a rewrite. Text I/O goes through
//! the `bdf` crate.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{EngineError, Result, glyph::BoundingBox, native::GlyphTable};

mod convert;
mod reader;
mod writer;

/// File extension of BDF fonts.
pub const EXTENSION: &str = "bdf";

/// Resolution written to exported fonts.
pub const BDF_RESOLUTION: u32 = 75;

pub const BDF_VERSION: &str = "2.1";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BdfSize {
    pub points: u32,
    pub resolution_x: u32,
    pub resolution_y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BdfProperties {
    pub family_name: Option<String>,
    pub weight_name: Option<String>,
    pub font_descent: Option<i32>,
    /// Any other property, sorted by name.
    pub extra: Vec<(String, PropertyValue)>,
}

impl BdfProperties {
    pub fn len(&self) -> usize {
        self.extra.len() + usize::from(self.family_name.is_some()) + usize::from(self.weight_name.is_some()) + usize::from(self.font_descent.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BdfMeta {
    pub version: String,
    pub bounding_box: BoundingBox,
    pub name: String,
    pub size: BdfSize,
    pub properties: BdfProperties,
}

impl Default for BdfMeta {
    fn default() -> Self {
        Self {
            version: BDF_VERSION.to_string(),
            bounding_box: BoundingBox::EMPTY,
            name: String::new(),
            size: BdfSize {
                points: 0,
                resolution_x: BDF_RESOLUTION,
                resolution_y: BDF_RESOLUTION,
            },
            properties: BdfProperties::default(),
        }
    }
}

impl BdfMeta {
    /// Family the font belongs to: `FAMILY_NAME` if set, else the family field
    /// of an XLFD font name (`-Adobe-Helvetica-Bold-R-...`), else the name.
    pub fn family_name(&self) -> &str {
        if let Some(family) = self.properties.family_name.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
            return family;
        }
        if let Some(xlfd) = self.name.strip_prefix('-') {
            if let Some(family) = xlfd.split('-').nth(1).map(str::trim).filter(|f| !f.is_empty()) {
                return family;
            }
        }
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BdfFont {
    pub glyphs: GlyphTable,
    pub meta: BdfMeta,
}

impl BdfFont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_font(&bdf::read(bytes)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_font(&bdf::read(BufReader::new(File::open(path)?))?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let font = self.to_font()?;
        bdf::write(BufWriter::new(File::create(path)?), &font)?;
        Ok(())
    }
}

/// Convert between the model's signed metrics and the `bdf` crate's field types.
fn bdf_value<S, T>(field: &'static str, value: S) -> Result<T>
where
    S: Copy + Into<i64>,
    T: TryFrom<S>,
{
    T::try_from(value).map_err(|_| EngineError::BdfValueOutOfRange { field, value: value.into() })
}
