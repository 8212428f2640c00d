// crates/enigma-cli/src/io/mod.rs

pub mod blocks;
pub mod key_file;
pub mod output;
