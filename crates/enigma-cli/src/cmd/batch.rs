// crates/enigma-cli/src/cmd/batch.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Args};
use enigma_core::batch::{self, DEFAULT_CHUNK_SIZE};
use enigma_core::EnigmaKey;
use tracing::info;

use crate::io::blocks;

#[derive(Args)]
#[command(group(ArgGroup::new("mode").required(true).args(["encrypt", "decrypt"])))]
pub struct BatchArgs {
    /// Input text (plaintext for --encrypt, block file for --decrypt)
    #[arg(long)]
    pub r#in: PathBuf,

    /// Output path
    #[arg(long)]
    pub out: PathBuf,

    /// Characters per transmission
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    #[arg(long)]
    pub encrypt: bool,

    #[arg(long)]
    pub decrypt: bool,
}

pub fn run(key: &EnigmaKey, args: BatchArgs) -> anyhow::Result<()> {
    let input = std::fs::read_to_string(&args.r#in)
        .with_context(|| format!("read {}", args.r#in.display()))?;

    let (out, chunks) = if args.encrypt {
        let chunks = batch::split_chunks(&input, args.chunk_size)?;
        let sent = batch::encrypt_chunks(key, &chunks)?;
        (blocks::format_blocks(&sent), sent.len())
    } else {
        let received = blocks::parse_blocks(&input)?;
        let plain = batch::decrypt_chunks(key, &received)?;
        (plain.concat(), plain.len())
    };

    std::fs::write(&args.out, &out).with_context(|| format!("write {}", args.out.display()))?;

    info!(
        "batch ok: mode={} in={} out={} chunks={} chunk_size={}",
        if args.encrypt { "encrypt" } else { "decrypt" },
        args.r#in.display(),
        args.out.display(),
        chunks,
        args.chunk_size
    );
    Ok(())
}
