// crates/enigma-core/src/wiring/plugboard.rs

use crate::error::{EnigmaError, Result};
use crate::symbol::letter::{is_letter, Symbol, N};
use crate::wiring::permutation::Permutation;
use crate::wiring::Component;

/// Letter-pair swaps ahead of (and behind) the rotor stack. Always an
/// involution: every declared pair swaps both ways, the rest are fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugboard {
    perm: Permutation,
    pairs: Vec<(Symbol, Symbol)>,
}

impl Plugboard {
    /// Parse pairs separated by any non-letter, e.g. `"AB CD"` or `"AB,CD"`.
    /// An empty specification is the identity.
    pub fn new(connections: &str) -> Result<Plugboard> {
        let mut table = *Permutation::identity().table();
        let mut seen = [false; N];
        let mut pairs = Vec::new();

        for token in connections.split(|c: char| !is_letter(c)).filter(|t| !t.is_empty()) {
            let letters: Vec<char> = token.chars().collect();
            if letters.len() != 2 {
                return Err(EnigmaError::InvalidConnection(token.to_string()));
            }
            let a = Symbol::from_char(letters[0])?;
            let b = Symbol::from_char(letters[1])?;

            for s in [a, b] {
                if seen[s.index()] {
                    return Err(EnigmaError::DuplicateConnection { letter: s.to_char() });
                }
                seen[s.index()] = true;
            }

            table[a.index()] = b;
            table[b.index()] = a;
            pairs.push((a, b));
        }

        Ok(Plugboard {
            perm: Permutation::from_table(table),
            pairs,
        })
    }

    pub fn identity() -> Plugboard {
        Plugboard {
            perm: Permutation::identity(),
            pairs: Vec::new(),
        }
    }

    #[inline]
    pub fn swap(&self, s: Symbol) -> Symbol {
        self.perm.apply(s)
    }

    pub fn permutation(&self) -> &Permutation {
        &self.perm
    }

    pub fn pairs(&self) -> &[(Symbol, Symbol)] {
        &self.pairs
    }
}

impl Component for Plugboard {
    fn forward(&self, s: Symbol) -> Symbol {
        self.swap(s)
    }

    fn backward(&self, s: Symbol) -> Result<Symbol> {
        Ok(self.swap(s))
    }
}
