// crates/enigma-core/src/key/defaults.rs

use crate::key::key::EnigmaKey;
use crate::symbol::setting::Setting;
use crate::wiring::tables::{ReflectorModel, RotorModel};

/// Rotors I II III, rings AAA, reflector B, empty plugboard.
pub fn default_key() -> EnigmaKey {
    EnigmaKey {
        rotor_names: [RotorModel::I, RotorModel::II, RotorModel::III],
        ring_settings: [Setting::Index(0); 3],
        reflector_type: ReflectorModel::B,
        plugboard_connections: String::new(),
    }
}
