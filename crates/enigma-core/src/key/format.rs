// crates/enigma-core/src/key/format.rs

use std::path::Path;

use crate::error::{EnigmaError, Result};
use crate::key::key::{EnigmaKey, KeyFile};
use crate::validate::validate_key;

pub fn decode_json(s: &str) -> Result<EnigmaKey> {
    let raw: KeyFile = serde_json::from_str(s)?;
    validate_key(raw)
}

pub fn decode_yaml(s: &str) -> Result<EnigmaKey> {
    let raw: KeyFile = serde_yaml::from_str(s)?;
    validate_key(raw)
}

/// Pick the decoder from the file extension: `.json`, `.yaml` or `.yml`.
pub fn decode_for_path(path: &Path, contents: &str) -> Result<EnigmaKey> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("json") => decode_json(contents),
        Some("yaml") | Some("yml") => decode_yaml(contents),
        _ => Err(EnigmaError::KeyFormat(format!(
            "unsupported key file extension: {}",
            path.display()
        ))),
    }
}

pub fn encode_json(k: &EnigmaKey) -> Result<String> {
    Ok(serde_json::to_string_pretty(&KeyFile::from(k))?)
}

pub fn encode_yaml(k: &EnigmaKey) -> Result<String> {
    Ok(serde_yaml::to_string(&KeyFile::from(k))?)
}

/// First 16 bytes of blake3 over the compact canonical JSON form.
pub fn key_id_16(k: &EnigmaKey) -> Result<[u8; 16]> {
    let canonical = serde_json::to_vec(k)?;
    let hash = blake3::hash(&canonical);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    Ok(out)
}

pub fn key_id_hex(k: &EnigmaKey) -> Result<String> {
    Ok(hex16(&key_id_16(k)?))
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
