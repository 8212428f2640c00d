// crates/enigma-core/src/symbol/setting.rs

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::symbol::letter::Symbol;

/// A ring setting or rotor position as supplied from outside: either a
/// 0-based index (reduced mod 26) or a letter. Resolved once, at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting {
    Index(u32),
    Letter(char),
}

impl Setting {
    pub fn resolve(self) -> Result<Symbol> {
        match self {
            Setting::Index(i) => Ok(Symbol::wrapping(i as usize)),
            Setting::Letter(c) => Symbol::from_char(c),
        }
    }

    /// Canonical form: always an index in [0, 25].
    pub fn canonical(self) -> Result<Setting> {
        self.resolve().map(|s| Setting::Index(s.index() as u32))
    }
}

impl From<Symbol> for Setting {
    fn from(s: Symbol) -> Self {
        Setting::Index(s.index() as u32)
    }
}

impl std::str::FromStr for Setting {
    type Err = std::num::ParseIntError;

    /// "7" is an index, a single letter is a letter.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Setting::Letter(c)),
            _ => s.parse::<u32>().map(Setting::Index),
        }
    }
}
