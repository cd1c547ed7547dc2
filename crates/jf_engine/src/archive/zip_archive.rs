use std::{
    collections::BTreeMap,
    io::{Cursor, Read, Write},
};

use zip::{CompressionMethod, ZipArchive, ZipWriter, write::SimpleFileOptions};

use super::FontArchive;
use crate::Result;

/// Fonts packed in a zip container.
///
/// The whole archive is read on construction; entries staged with
/// [`FontArchive::put_entry`] are written out by [`ZipFontArchive::to_archive`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipFontArchive {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ZipFontArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all file entries of a zip container. Directories are skipped.
    pub fn read_archive(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut entries = BTreeMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)?;
            entries.insert(file.name().to_string(), data);
        }
        log::debug!("read {} entries from zip archive", entries.len());

        Ok(Self { entries })
    }

    /// Write all entries into a new zip container, deflated if `compress` is
    /// set, stored otherwise.
    pub fn to_archive(&self, compress: bool) -> Result<Vec<u8>> {
        let method = if compress { CompressionMethod::Deflated } else { CompressionMethod::Stored };
        let options = SimpleFileOptions::default().compression_method(method);

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in &self.entries {
            writer.start_file(name.as_str(), options)?;
            writer.write_all(data)?;
        }
        Ok(writer.finish()?.into_inner())
    }
}

impl FontArchive for ZipFontArchive {
    fn get_entry(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(name).cloned())
    }

    fn put_entry(&mut self, name: &str, data: Vec<u8>) -> Result<()> {
        self.entries.insert(name.to_string(), data);
        Ok(())
    }

    fn entry_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
