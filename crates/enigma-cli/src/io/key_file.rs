// crates/enigma-cli/src/io/key_file.rs

use std::path::Path;

use anyhow::{Context, Result};
use enigma_core::key::format as key_format;
use enigma_core::EnigmaKey;
use tracing::info;

/// Load a .json/.yaml/.yml key file.
pub fn load_key(path: &Path) -> Result<EnigmaKey> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read key {}", path.display()))?;
    let key = key_format::decode_for_path(path, &text)
        .with_context(|| format!("decode key {}", path.display()))?;

    let key_id = key_format::key_id_hex(&key)?;
    info!(path = %path.display(), key_id = %key_id, "key loaded");
    Ok(key)
}
