// crates/enigma-core/src/symbol/letter.rs

use crate::error::{EnigmaError, Result};

/// Alphabet size. Fixed: the machine only ever sees A-Z.
pub const N: usize = 26;

/// One letter of the alphabet as an index in [0, 25].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    pub const A: Symbol = Symbol(0);

    /// Reduce any index into the alphabet (mod 26).
    #[inline]
    pub const fn wrapping(i: usize) -> Symbol {
        Symbol((i % N) as u8)
    }

    /// Case-insensitive ASCII letter to symbol.
    pub fn from_char(c: char) -> Result<Symbol> {
        if c.is_ascii_alphabetic() {
            Ok(Symbol(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(EnigmaError::InvalidSymbol(c))
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// self + k (mod 26), k may be negative.
    #[inline]
    pub const fn shift(self, k: i32) -> Symbol {
        Symbol((self.0 as i32 + k).rem_euclid(N as i32) as u8)
    }

    #[inline]
    pub const fn succ(self) -> Symbol {
        self.shift(1)
    }

    /// All 26 symbols in alphabet order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..N as u8).map(Symbol)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = EnigmaError;

    fn try_from(c: char) -> Result<Self> {
        Symbol::from_char(c)
    }
}

/// The only characters the machine enciphers.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Parse a run of letters (no separators) into symbols.
pub fn parse_letters(s: &str) -> Result<Vec<Symbol>> {
    s.chars().map(Symbol::from_char).collect()
}

pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}
