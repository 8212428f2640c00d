//! Three-rotor Enigma simulator.
//!
//! ```text
//! key ─► plugboard ─► R ─► M ─► L ─► reflector
//!                                       │
//! out ◄─ plugboard ◄─ R ◄─ M ◄─ L ◄─────┘
//! ```
//!
//! The rotors step before every letter (with the middle-rotor double step),
//! and the indicator procedure in [`transmission`] wraps a message in a
//! start position and an enciphered message key.
//!
//! ```
//! use enigma_core::{key::defaults::default_key, Indicator};
//!
//! let key = default_key();
//! let mut tx = key.machine(Indicator::AAA).unwrap();
//! let mut rx = key.machine(Indicator::AAA).unwrap();
//!
//! let c = tx.encrypt("HELLO WORLD").unwrap();
//! assert_eq!(rx.encrypt(&c).unwrap(), "HELLO WORLD");
//! ```

pub mod error;
pub mod validate;

pub mod batch;
pub mod key;
pub mod machine;
pub mod symbol;
pub mod transmission;
pub mod wiring;

pub use crate::error::{EnigmaError, Result};
pub use crate::key::key::EnigmaKey;
pub use crate::machine::enigma::Machine;
pub use crate::machine::state::NonLetters;
pub use crate::symbol::indicator::Indicator;
pub use crate::symbol::letter::Symbol;
pub use crate::symbol::setting::Setting;
pub use crate::transmission::Transmission;
pub use crate::wiring::tables::{ReflectorModel, RotorModel};
