// crates/enigma-core/src/wiring/rotor.rs

use crate::error::Result;
use crate::symbol::letter::{Symbol, N};
use crate::symbol::setting::Setting;
use crate::wiring::permutation::Permutation;
use crate::wiring::tables::RotorModel;
use crate::wiring::Component;

/// A wired wheel. Wiring, ring setting and notches are fixed at construction;
/// only `position` moves.
///
/// The effective wiring at position `p` with ring setting `r` is the static
/// wiring rotated by `p - r`:
///
/// ```text
/// fwd(x) = W[x + p - r] - p + r   (mod 26)
/// ```
///
/// All 26 rotations are built up front and picked by position.
#[derive(Clone, Debug)]
pub struct Rotor {
    name: String,
    wiring: Permutation,
    ring_setting: Symbol,
    position: Symbol,
    /// Positions at which this rotor carries the next one along. Stored one
    /// step before the nominal notch letter.
    notches: Vec<Symbol>,
    rotations: Vec<Permutation>,
}

impl Rotor {
    pub fn new(
        name: impl Into<String>,
        encoding: &str,
        notch_letters: &str,
        ring_setting: Setting,
        position: Setting,
    ) -> Result<Rotor> {
        let wiring = Permutation::from_encoding(encoding)?;
        let ring_setting = ring_setting.resolve()?;
        let position = position.resolve()?;

        let mut notches = Vec::with_capacity(2);
        for c in notch_letters.chars() {
            let n = Symbol::from_char(c)?.shift(-1);
            if !notches.contains(&n) {
                notches.push(n);
            }
        }

        let r = ring_setting.index() as i32;
        let rotations = (0..N as i32).map(|p| wiring.conjugate(p - r)).collect();

        Ok(Rotor {
            name: name.into(),
            wiring,
            ring_setting,
            position,
            notches,
            rotations,
        })
    }

    pub fn from_model(model: RotorModel, ring_setting: Setting, position: Setting) -> Result<Rotor> {
        Rotor::new(
            model.name(),
            model.encoding(),
            model.notches(),
            ring_setting,
            position,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }

    pub fn ring_setting(&self) -> Symbol {
        self.ring_setting
    }

    pub fn position(&self) -> Symbol {
        self.position
    }

    pub fn set_position(&mut self, position: Symbol) {
        self.position = position;
    }

    pub fn notches(&self) -> &[Symbol] {
        &self.notches
    }

    pub fn at_notch(&self) -> bool {
        self.notches.contains(&self.position)
    }

    pub fn turnover(&mut self) {
        self.position = self.position.succ();
    }

    /// Effective wiring at the current position.
    #[inline]
    pub fn effective(&self) -> &Permutation {
        &self.rotations[self.position.index()]
    }

    pub fn effective_inverse(&self) -> Permutation {
        self.effective().inverse()
    }

    /// Right-to-left pass (towards the reflector).
    #[inline]
    pub fn encode_in(&self, s: Symbol) -> Symbol {
        self.effective().apply(s)
    }

    /// Left-to-right pass (back from the reflector).
    #[inline]
    pub fn encode_out(&self, s: Symbol) -> Symbol {
        self.effective().apply_inverse(s)
    }
}

impl Component for Rotor {
    fn forward(&self, s: Symbol) -> Symbol {
        self.encode_in(s)
    }

    fn backward(&self, s: Symbol) -> Result<Symbol> {
        Ok(self.encode_out(s))
    }
}
