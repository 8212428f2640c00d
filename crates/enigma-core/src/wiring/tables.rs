// crates/enigma-core/src/wiring/tables.rs
//
// Historical wirings. These encodings are the machine's only wire format and
// must match the service tables letter for letter.

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;

pub const IDENTITY: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorModel {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl RotorModel {
    pub const ALL: [RotorModel; 8] = [
        RotorModel::I,
        RotorModel::II,
        RotorModel::III,
        RotorModel::IV,
        RotorModel::V,
        RotorModel::VI,
        RotorModel::VII,
        RotorModel::VIII,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RotorModel::I => "I",
            RotorModel::II => "II",
            RotorModel::III => "III",
            RotorModel::IV => "IV",
            RotorModel::V => "V",
            RotorModel::VI => "VI",
            RotorModel::VII => "VII",
            RotorModel::VIII => "VIII",
        }
    }

    pub fn encoding(self) -> &'static str {
        match self {
            RotorModel::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorModel::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorModel::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorModel::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorModel::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
            RotorModel::VI => "JPGVOUMFYQBENHZRDKASXLICTW",
            RotorModel::VII => "NZJHGRCXMYSWBOUFAIVLPEKQDT",
            RotorModel::VIII => "FKQHTLXOCBJSPDZRAMEWNIUYGV",
        }
    }

    /// Nominal notch letters. The naval rotors (VI-VIII) carry two.
    pub fn notches(self) -> &'static str {
        match self {
            RotorModel::I => "R",
            RotorModel::II => "F",
            RotorModel::III => "W",
            RotorModel::IV => "K",
            RotorModel::V => "A",
            RotorModel::VI | RotorModel::VII | RotorModel::VIII => "AN",
        }
    }
}

impl std::fmt::Display for RotorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RotorModel {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorModel::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EnigmaError::UnknownRotor(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectorModel {
    A,
    B,
    C,
    /// Straight-through wiring (every letter reflects to itself).
    #[default]
    #[serde(rename = "I")]
    Identity,
}

impl ReflectorModel {
    pub fn name(self) -> &'static str {
        match self {
            ReflectorModel::A => "A",
            ReflectorModel::B => "B",
            ReflectorModel::C => "C",
            ReflectorModel::Identity => "I",
        }
    }

    pub fn encoding(self) -> &'static str {
        match self {
            ReflectorModel::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            ReflectorModel::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorModel::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
            ReflectorModel::Identity => IDENTITY,
        }
    }
}

impl std::fmt::Display for ReflectorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ReflectorModel {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(ReflectorModel::A),
            "B" => Ok(ReflectorModel::B),
            "C" => Ok(ReflectorModel::C),
            "I" => Ok(ReflectorModel::Identity),
            _ => Err(EnigmaError::UnknownReflector(s.to_string())),
        }
    }
}
