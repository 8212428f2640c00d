// crates/enigma-cli/src/cmd/mod.rs

pub mod batch;
pub mod key;
pub mod message;
pub mod transmission;

use std::path::PathBuf;

use clap::Args;
use enigma_core::key::defaults::default_key;
use enigma_core::key::key::KeyFile;
use enigma_core::validate::validate_key;
use enigma_core::{EnigmaKey, ReflectorModel, RotorModel, Setting};
use tracing::info;

use crate::io::key_file;

/// Machine settings, either from a key file or from individual flags.
#[derive(Args, Debug)]
pub struct MachineArgs {
    /// Key file (.json, .yaml or .yml)
    #[arg(short, long, conflicts_with_all = ["names", "settings", "reflector", "connections"])]
    pub key: Option<PathBuf>,

    /// Rotors left to right: I II III IV V VI VII VIII
    #[arg(short, long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"])]
    pub names: Option<Vec<RotorModel>>,

    /// Ring settings left to right, as 0-based numbers or letters
    #[arg(short, long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"])]
    pub settings: Option<Vec<Setting>>,

    /// Reflector: A, B, C or I (identity)
    #[arg(short, long)]
    pub reflector: Option<ReflectorModel>,

    /// Plugboard pairs, e.g. "AB CD" swaps A/B and C/D
    #[arg(short, long)]
    pub connections: Option<String>,
}

impl MachineArgs {
    /// Precedence:
    /// 1) --key file
    /// 2) individual flags, each falling back to the built-in default key
    pub fn resolve(&self) -> anyhow::Result<EnigmaKey> {
        if let Some(path) = self.key.as_deref() {
            return key_file::load_key(path);
        }

        let base = default_key();
        let raw = KeyFile {
            rotor_names: self
                .names
                .clone()
                .unwrap_or_else(|| base.rotor_names.to_vec()),
            ring_settings: self
                .settings
                .clone()
                .unwrap_or_else(|| base.ring_settings.to_vec()),
            reflector_type: self.reflector.unwrap_or(base.reflector_type),
            plugboard_connections: self
                .connections
                .clone()
                .unwrap_or(base.plugboard_connections),
        };

        if self.names.is_none() && self.settings.is_none() {
            info!("no key given, using built-in default rotors/rings");
        }
        Ok(validate_key(raw)?)
    }
}

/// Message words as given on the command line, joined by single spaces.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
