//! Containers that hold font files by name.
//!
//! The codec never reads files itself, it receives buffers from a
//! [`FontArchive`] and hands encoded buffers back to one.

use std::collections::BTreeMap;

use crate::Result;

mod zip_archive;

pub use zip_archive::ZipFontArchive;

pub trait FontArchive {
    /// Contents of the entry called `name`, if present.
    fn get_entry(&self, name: &str) -> Result<Option<Vec<u8>>>;

    /// Stage `data` under `name`, replacing an existing entry.
    fn put_entry(&mut self, name: &str, data: Vec<u8>) -> Result<()>;

    /// Names of all entries.
    fn entry_names(&self) -> Vec<String>;
}

/// Archive kept entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryArchive {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(name, data)| (name.as_str(), data.as_slice()))
    }
}

impl FontArchive for MemoryArchive {
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
