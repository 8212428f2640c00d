// crates/enigma-core/src/wiring/mod.rs

pub mod permutation;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod tables;

use crate::error::Result;
use crate::symbol::letter::Symbol;

/// One pass of the signal through a wired component.
///
/// `forward` is the leg towards the reflector, `backward` the return leg.
/// Components without a return leg (the reflector) refuse `backward`.
///
/// `Machine` does not go through this trait: its signal path is fixed and
/// calls the infallible inherent methods (`swap`, `encode_in`, `reflect`,
/// `encode_out`). The trait is for callers wiring components together
/// themselves, e.g. a custom rotor stack.
pub trait Component {
    fn forward(&self, s: Symbol) -> Symbol;

    fn backward(&self, s: Symbol) -> Result<Symbol>;
}
