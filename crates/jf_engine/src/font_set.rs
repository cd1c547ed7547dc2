//! Batch access to the fonts of a game archive.

use crate::{
    EngineError, Result,
    archive::FontArchive,
    native::NativeFont,
};

/// The fonts shipped with the game client.
pub const DEFAULT_FONTS: [&str; 8] = ["h11p.jf", "h12b.jf", "h12p.jf", "h13b.jf", "h14b.jf", "h16b.jf", "h20b.jf", "h24b.jf"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSet {
    fonts: Vec<NativeFont>,
}

impl FontSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every entry in `names` from `archive`.
    pub fn load<A: FontArchive + ?Sized>(archive: &A, names: &[&str]) -> Result<Self> {
        let mut fonts = Vec::with_capacity(names.len());
        for name in names {
            let Some(data) = archive.get_entry(name)? else {
                return Err(EngineError::EntryNotFound { name: name.to_string() });
            };
            fonts.push(NativeFont::from_bytes(name, data)?);
        }
        Ok(Self { fonts })
    }

    /// Decode the [`DEFAULT_FONTS`].
    pub fn load_defaults<A: FontArchive + ?Sized>(archive: &A) -> Result<Self> {
        Self::load(archive, &DEFAULT_FONTS)
    }

    /// Put every font into `archive` under its file name.
    pub fn store<A: FontArchive + ?Sized>(&self, archive: &mut A) -> Result<()> {
        for font in &self.fonts {
            archive.put_entry(&font.file_name()?, font.as_bytes().to_vec())?;
        }
        Ok(())
    }

    /// Look a font up by file name (`h12b.jf`) or stem (`h12b`).
    pub fn get(&self, name: &str) -> Option<&NativeFont> {
        let stem = name.split('.').next().unwrap_or_default();
        self.fonts.iter().find(|font| font.name() == stem || font.file_name().is_ok_and(|file_name| file_name == name))
    }

    /// Add a font, replacing one stored under the same file name.
    pub fn push(&mut self, font: NativeFont) {
        if let Ok(file_name) = font.file_name() {
            self.fonts.retain(|f| f.file_name().ok().as_deref() != Some(file_name.as_str()));
        }
        self.fonts.push(font);
    }

    pub fn iter(&self) -> impl Iterator<Item = &NativeFont> {
        self.fonts.iter()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl IntoIterator for FontSet {
    type Item = NativeFont;
    type IntoIter = std::vec::IntoIter<NativeFont>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.into_iter()
    }
}
