// crates/enigma-core/src/wiring/permutation.rs

use crate::error::Result;
use crate::symbol::letter::{Symbol, N};
use crate::validate::{involution_violation, parse_wiring};

/// Bijection over the 26 letters, stored with its inverse so both
/// directions are a single table lookup.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Permutation {
    fwd: [Symbol; N],
    inv: [Symbol; N],
}

impl Permutation {
    pub fn identity() -> Permutation {
        let mut fwd = [Symbol::A; N];
        for (i, slot) in fwd.iter_mut().enumerate() {
            *slot = Symbol::wrapping(i);
        }
        Permutation { fwd, inv: fwd }
    }

    /// Build from a 26-letter encoding where letter `i` of the string is the
    /// image of the `i`-th letter of the alphabet.
    pub fn from_encoding(encoding: &str) -> Result<Permutation> {
        Ok(Permutation::from_table(parse_wiring(encoding)?))
    }

    /// `table` must already be a bijection.
    pub(crate) fn from_table(fwd: [Symbol; N]) -> Permutation {
        let mut inv = [Symbol::A; N];
        for (i, s) in fwd.iter().enumerate() {
            inv[s.index()] = Symbol::wrapping(i);
        }
        Permutation { fwd, inv }
    }

    #[inline]
    pub fn apply(&self, s: Symbol) -> Symbol {
        self.fwd[s.index()]
    }

    #[inline]
    pub fn apply_inverse(&self, s: Symbol) -> Symbol {
        self.inv[s.index()]
    }

    pub fn inverse(&self) -> Permutation {
        Permutation { fwd: self.inv, inv: self.fwd }
    }

    /// Rotate the wiring by `offset` contacts: shift the input up by `offset`,
    /// wire, then shift the result back down.
    pub fn conjugate(&self, offset: i32) -> Permutation {
        let mut fwd = [Symbol::A; N];
        for i in Symbol::all() {
            fwd[i.index()] = self.apply(i.shift(offset)).shift(-offset);
        }
        Permutation::from_table(fwd)
    }

    pub fn is_involution(&self) -> bool {
        involution_violation(&self.fwd).is_none()
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; N];
        for s in self.fwd {
            seen[s.index()] = true;
        }
        seen.iter().all(|&b| b) && Symbol::all().all(|s| self.apply_inverse(self.apply(s)) == s)
    }

    pub(crate) fn table(&self) -> &[Symbol; N] {
        &self.fwd
    }

    /// 26-letter encoding, the inverse of `from_encoding`.
    pub fn encoding(&self) -> String {
        self.fwd.iter().map(|s| s.to_char()).collect()
    }
}

impl std::fmt::Debug for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Permutation({})", self.encoding())
    }
}
