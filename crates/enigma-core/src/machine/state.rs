// crates/enigma-core/src/machine/state.rs

/// How a message treats characters outside A-Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NonLetters {
    /// Copy them to the output untouched. No rotor moves.
    #[default]
    Preserve,
    /// Drop them from the output. No rotor moves.
    Strip,
    /// Fail with `InvalidSymbol`.
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Letters enciphered (one stepping event each).
    pub keypresses: u64,
    /// Non-letters preserved or stripped.
    pub skipped: u64,
    /// Rotor-position resets.
    pub resets: u64,
}
