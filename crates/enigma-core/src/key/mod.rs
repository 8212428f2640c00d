// crates/enigma-core/src/key/mod.rs

pub mod defaults;
pub mod format;
pub mod key;
