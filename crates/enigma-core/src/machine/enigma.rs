// crates/enigma-core/src/machine/enigma.rs

use tracing::debug;

use crate::error::{EnigmaError, Result};
use crate::machine::state::{Counters, NonLetters};
use crate::machine::stepping::{self, Step};
use crate::symbol::indicator::Indicator;
use crate::symbol::letter::{is_letter, Symbol};
use crate::wiring::plugboard::Plugboard;
use crate::wiring::reflector::Reflector;
use crate::wiring::rotor::Rotor;

/// Plugboard, three rotors in fixed roles and a reflector.
///
/// A machine carries rotor state across characters; use one instance per
/// message stream and never share it between threads doing independent work.
#[derive(Clone, Debug)]
pub struct Machine {
    left: Rotor,
    middle: Rotor,
    right: Rotor,
    reflector: Reflector,
    plugboard: Plugboard,
    pub stats: Counters,
}

impl Machine {
    pub fn new(
        left: Rotor,
        middle: Rotor,
        right: Rotor,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Machine {
        let m = Machine {
            left,
            middle,
            right,
            reflector,
            plugboard,
            stats: Counters::default(),
        };
        debug!(
            rotors = %format!("{} {} {}", m.left.name(), m.middle.name(), m.right.name()),
            rings = %m.rings(),
            positions = %m.positions(),
            plugs = m.plugboard.pairs().len(),
            "machine assembled"
        );
        m
    }

    pub fn left(&self) -> &Rotor {
        &self.left
    }

    pub fn middle(&self) -> &Rotor {
        &self.middle
    }

    pub fn right(&self) -> &Rotor {
        &self.right
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Current window letters, left to right.
    pub fn positions(&self) -> Indicator {
        Indicator([
            self.left.position(),
            self.middle.position(),
            self.right.position(),
        ])
    }

    pub fn rings(&self) -> Indicator {
        Indicator([
            self.left.ring_setting(),
            self.middle.ring_setting(),
            self.right.ring_setting(),
        ])
    }

    /// Turn the rotors to the given window letters, left to right.
    pub fn set_positions(&mut self, positions: Indicator) {
        let [l, m, r] = positions.symbols();
        self.left.set_position(l);
        self.middle.set_position(m);
        self.right.set_position(r);
        self.stats.resets += 1;
        debug!(positions = %positions, "rotor positions set");
    }

    /// String form of `set_positions`, e.g. `"WZA"`.
    pub fn update_rotor_positions(&mut self, positions: &str) -> Result<()> {
        self.set_positions(Indicator::parse(positions)?);
        Ok(())
    }

    /// One keypress worth of rotor movement.
    pub fn step(&mut self) -> Step {
        stepping::step(&mut self.left, &mut self.middle, &mut self.right)
    }

    /// Route a symbol through the current wiring without stepping.
    pub fn signal_path(&self, s: Symbol) -> Symbol {
        let s = self.plugboard.swap(s);
        let s = self.right.encode_in(s);
        let s = self.middle.encode_in(s);
        let s = self.left.encode_in(s);
        let s = self.reflector.reflect(s);
        let s = self.left.encode_out(s);
        let s = self.middle.encode_out(s);
        let s = self.right.encode_out(s);
        self.plugboard.swap(s)
    }

    /// Press one key: step, then encipher.
    pub fn encipher_symbol(&mut self, s: Symbol) -> Symbol {
        self.step();
        self.stats.keypresses += 1;
        self.signal_path(s)
    }

    /// Encipher one letter (either case); the result is uppercase.
    /// Non-letters are rejected and leave the rotors untouched.
    pub fn encipher_char(&mut self, c: char) -> Result<char> {
        let s = Symbol::from_char(c)?;
        Ok(self.encipher_symbol(s).to_char())
    }

    pub fn encipher(&mut self, message: &str, non_letters: NonLetters) -> Result<String> {
        let mut out = String::with_capacity(message.len());
        for c in message.chars() {
            if is_letter(c) {
                out.push(self.encipher_char(c)?);
                continue;
            }
            match non_letters {
                NonLetters::Preserve => {
                    self.stats.skipped += 1;
                    out.push(c);
                }
                NonLetters::Strip => self.stats.skipped += 1,
                NonLetters::Reject => return Err(EnigmaError::InvalidSymbol(c)),
            }
        }
        Ok(out)
    }

    /// Encipher with non-letters preserved. Enciphering and deciphering are
    /// the same operation.
    pub fn encrypt(&mut self, message: &str) -> Result<String> {
        self.encipher(message, NonLetters::Preserve)
    }

    pub(crate) fn encipher_indicator(&mut self, key: Indicator) -> Indicator {
        let mut out = key.symbols();
        for s in out.iter_mut() {
            *s = self.encipher_symbol(*s);
        }
        Indicator(out)
    }
}
