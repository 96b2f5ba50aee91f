use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Initial value assigned to every key in the data file.
const INIT_VALUE: i64 = 0;

/// Insertion-ordered mapping of generated keys to their initial value.
///
/// Serializes as a single JSON object `{"<key>": 0, ...}` with members in
/// first-insertion order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct DataTable {
    entries: serde_json::Map<String, serde_json::Value>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key with the fixed initial value. Keys arrive pre-deduplicated
    /// from the generator, so a repeat insert is a caller bug; the map keeps
    /// the first entry either way.
    pub fn insert(&mut self, key: String) {
        self.entries.entry(key).or_insert_with(|| INIT_VALUE.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the table as JSON to `path`, creating or overwriting the file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create data file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)
            .with_context(|| format!("failed to write data file {}", path.display()))?;
        Ok(())
    }
}
