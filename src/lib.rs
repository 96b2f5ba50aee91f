//! Test-key generation for a transactional key-value testbed.
//!
//! Produces N unique random 64-character alphanumeric keys, printed as a
//! count header followed by one key per line, and optionally a JSON data
//! file mapping each key to an initial value of 0 for seeding server
//! state.
//!
//! ```text
//! kv-keygen
//! ├── keyspace/   # seeded RNG + duplicate-rejecting key draws
//! └── datafile/   # insertion-ordered key -> 0 JSON table
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use kv_keygen::{run, KeygenConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = KeygenConfig { key_count: 100, ..Default::default() };
//!     let summary = run(&config, &mut std::io::stdout().lock())?;
//!     eprintln!("emitted {} keys", summary.keys_emitted);
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub mod datafile;
pub mod keyspace;

pub use datafile::DataTable;
pub use keyspace::{KeyGenerator, KEY_LEN};

/// Default name of the emitted data file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "init-data.json";

/// Generation run configuration.
#[derive(Debug, Clone)]
pub struct KeygenConfig {
    /// Number of keys to generate.
    pub key_count: u64,
    /// PRNG seed; 0 means draw from OS entropy instead of seeding.
    pub seed: u64,
    /// Whether to also write the key -> 0 data file.
    pub emit_data: bool,
    /// Where to write the data file when `emit_data` is set.
    pub data_path: PathBuf,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            key_count: 0,
            seed: 1,
            emit_data: false,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Distinct keys printed.
    pub keys_emitted: u64,
    /// Candidates rejected as duplicates before acceptance.
    pub redraws: u64,
}

/// Run a full generation pass.
///
/// Writes `config.key_count` as the first line of `out` (downstream
/// consumers read it as a self-describing header), then one key per line
/// in generation order. If `config.emit_data` is set, the key -> 0 table
/// is written to `config.data_path` after the key stream completes, so an
/// I/O failure there never invalidates already-printed keys.
pub fn run<W: Write>(config: &KeygenConfig, out: &mut W) -> Result<RunSummary> {
    let mut generator = KeyGenerator::new(config.seed);
    let mut table = config.emit_data.then(DataTable::new);

    writeln!(out, "{}", config.key_count).context("failed to write key count header")?;

    for _ in 0..config.key_count {
        let key = generator.next_key();
        writeln!(out, "{key}").context("failed to write key")?;
        if let Some(table) = table.as_mut() {
            table.insert(key);
        }
    }
    out.flush().context("failed to flush key stream")?;

    if let Some(table) = table {
        table.write_to(&config.data_path)?;
        tracing::debug!(
            entries = table.len(),
            path = %config.data_path.display(),
            "wrote init data file"
        );
    }

    Ok(RunSummary {
        keys_emitted: config.key_count,
        redraws: generator.redraws(),
    })
}
