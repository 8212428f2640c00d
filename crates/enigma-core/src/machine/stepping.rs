// crates/enigma-core/src/machine/stepping.rs

use crate::wiring::rotor::Rotor;

/// Which rotors moved on one keypress. The right rotor always moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub middle: bool,
    pub left: bool,
}

/// Advance the rotors for one keypress.
///
/// Both notch conditions are read before anything turns. A middle rotor
/// sitting on its notch carries itself and the left rotor, so after being
/// pushed onto the notch by the right rotor it moves again on the very next
/// key (the double step).
pub fn step(left: &mut Rotor, middle: &mut Rotor, right: &mut Rotor) -> Step {
    let moved = if middle.at_notch() {
        middle.turnover();
        left.turnover();
        Step { middle: true, left: true }
    } else if right.at_notch() {
        middle.turnover();
        Step { middle: true, left: false }
    } else {
        Step { middle: false, left: false }
    };

    right.turnover();
    moved
}
