// crates/enigma-core/src/symbol/mod.rs

pub mod indicator;
pub mod letter;
pub mod setting;
