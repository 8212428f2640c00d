// crates/enigma-core/src/machine/mod.rs

pub mod enigma;
pub mod state;
pub mod stepping;
