// crates/enigma-core/src/batch/mod.rs
//
// Large texts are cut into chunks and each chunk is sent as its own
// transmission. Chunks run in parallel; every chunk builds its own machine
// because rotor state must never be shared between them.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{EnigmaError, Result};
use crate::key::key::EnigmaKey;
use crate::machine::state::NonLetters;
use crate::symbol::indicator::Indicator;
use crate::transmission::Transmission;

pub const DEFAULT_CHUNK_SIZE: usize = 250;

/// Consecutive runs of `chunk_size` characters, the last one possibly
/// shorter. Empty text is a single empty chunk.
pub fn split_chunks(text: &str, chunk_size: usize) -> Result<Vec<String>> {
    if chunk_size == 0 {
        return Err(EnigmaError::Validation("chunk_size must be non-zero".into()));
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Ok(vec![String::new()]);
    }
    Ok(chars
        .chunks(chunk_size)
        .map(|c| c.iter().collect())
        .collect())
}

/// Encrypt every chunk as a separate transmission with random indicators.
/// Output order matches input order.
pub fn encrypt_chunks(key: &EnigmaKey, chunks: &[String]) -> Result<Vec<Transmission>> {
    let out = chunks
        .par_iter()
        .map(|chunk| {
            let mut m = key.machine(Indicator::AAA)?;
            m.encrypt_transmission_with(
                chunk,
                None,
                None,
                NonLetters::Preserve,
                &mut rand::thread_rng(),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(chunks = out.len(), "batch encrypted");
    Ok(out)
}

pub fn decrypt_chunks(key: &EnigmaKey, transmissions: &[Transmission]) -> Result<Vec<String>> {
    let out = transmissions
        .par_iter()
        .map(|t| key.machine(Indicator::AAA)?.receive(t))
        .collect::<Result<Vec<_>>>()?;

    debug!(chunks = out.len(), "batch decrypted");
    Ok(out)
}
