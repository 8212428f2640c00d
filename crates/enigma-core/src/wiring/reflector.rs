// crates/enigma-core/src/wiring/reflector.rs

use crate::error::{EnigmaError, Result};
use crate::symbol::letter::{Symbol, N};
use crate::validate::{involution_violation, parse_wiring};
use crate::wiring::permutation::Permutation;
use crate::wiring::tables::ReflectorModel;
use crate::wiring::Component;

/// Fixed, self-inverse wiring at the end of the rotor stack. The signal
/// passes through it once; there is no return leg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reflector {
    perm: Permutation,
}

impl Reflector {
    pub fn new(encoding: &str) -> Result<Reflector> {
        let len = encoding.chars().count();
        if len != N {
            return Err(EnigmaError::InvalidReflectorEncoding { len });
        }
        let table = parse_wiring(encoding)?;
        if let Some(s) = involution_violation(&table) {
            return Err(EnigmaError::ReflectorNotInvolution { letter: s.to_char() });
        }
        Ok(Reflector {
            perm: Permutation::from_table(table),
        })
    }

    pub fn from_model(model: ReflectorModel) -> Result<Reflector> {
        Reflector::new(model.encoding())
    }

    #[inline]
    pub fn reflect(&self, s: Symbol) -> Symbol {
        self.perm.apply(s)
    }

    pub fn permutation(&self) -> &Permutation {
        &self.perm
    }
}

impl Component for Reflector {
    fn forward(&self, s: Symbol) -> Symbol {
        self.reflect(s)
    }

    fn backward(&self, _s: Symbol) -> Result<Symbol> {
        Err(EnigmaError::UnsupportedOperation(
            "reflector has no reverse direction",
        ))
    }
}
