// crates/enigma-core/src/symbol/indicator.rs

use rand::Rng;

use crate::error::{EnigmaError, Result};
use crate::symbol::letter::{Symbol, N};

/// Three letters, one per rotor (left, middle, right): a start position,
/// a message key or an enciphered message key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Indicator(pub [Symbol; 3]);

impl Indicator {
    pub const AAA: Indicator = Indicator([Symbol::A; 3]);

    pub fn parse(s: &str) -> Result<Indicator> {
        let letters: Vec<char> = s.chars().collect();
        if letters.len() != 3 {
            return Err(EnigmaError::InvalidIndicator(s.to_string()));
        }
        let mut out = [Symbol::A; 3];
        for (slot, &c) in out.iter_mut().zip(letters.iter()) {
            *slot = Symbol::from_char(c)?;
        }
        Ok(Indicator(out))
    }

    /// Three independent uniform draws over the alphabet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Indicator {
        let mut out = [Symbol::A; 3];
        for slot in out.iter_mut() {
            *slot = Symbol::wrapping(rng.gen_range(0..N));
        }
        Indicator(out)
    }

    pub fn symbols(&self) -> [Symbol; 3] {
        self.0
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in self.0 {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Indicator {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self> {
        Indicator::parse(s)
    }
}
