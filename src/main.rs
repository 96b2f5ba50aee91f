use anyhow::Result;
use clap::Parser;
use kv_keygen::{run, KeygenConfig, DEFAULT_DATA_PATH};
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "kv-keygen", about = "Generate unique random keys for a key-value testbed")]
struct Args {
    /// Total number of keys to generate
    #[arg(short = 'k', long = "key")]
    key: u64,
    /// Random seed; 0 for dynamic (OS entropy), default 1
    #[arg(short = 's', long = "seed", default_value_t = 1)]
    seed: u64,
    /// Also emit the key -> 0 data file
    #[arg(short = 'd', long = "data")]
    data: bool,
    /// Path of the emitted data file (only with --data)
    #[arg(short = 'o', long = "out", default_value = DEFAULT_DATA_PATH)]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = KeygenConfig {
        key_count: args.key,
        seed: args.seed,
        emit_data: args.data,
        data_path: args.out,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run(&config, &mut out)?;

    tracing::debug!(
        keys = summary.keys_emitted,
        redraws = summary.redraws,
        "generation complete"
    );

    Ok(())
}
