//! Conversion between the .jf bitmap fonts of the game client and BDF.
//!
//! ```no_run
//! use jf_engine::{FontSet, ZipFontArchive};
//!
//! # fn main() -> jf_engine::Result<()> {
//! let archive = ZipFontArchive::read_archive(&std::fs::read("fonts.zip")?)?;
//! for font in FontSet::load_defaults(&archive)?.iter() {
//!     font.to_bdf().save(format!("{}.bdf", font.name()))?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod bdf;
pub mod charset;
pub mod error;
pub mod font_set;
pub mod glyph;
pub mod native;

pub use archive::{FontArchive, MemoryArchive, ZipFontArchive};
pub use bdf::{BdfFont, BdfMeta, BdfProperties, BdfSize, PropertyValue};
pub use charset::{CHARSET, GLYPH_COUNT, HEADER_SIZE};
pub use error::{EngineError, Result};
pub use font_set::{DEFAULT_FONTS, FontSet};
pub use glyph::{BoundingBox, Glyph};
pub use native::{FontStyle, GlyphHeader, GlyphTable, NativeFont};
