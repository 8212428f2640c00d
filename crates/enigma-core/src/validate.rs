use crate::error::{EnigmaError, Result};
use crate::key::key::{EnigmaKey, KeyFile};
use crate::symbol::letter::{Symbol, N};
use crate::symbol::setting::Setting;
use crate::wiring::plugboard::Plugboard;
use crate::wiring::tables::RotorModel;

/// Parse a 26-letter wiring string into its image table. Rejects wrong
/// lengths, non-letters and repeated letters.
pub fn parse_wiring(encoding: &str) -> Result<[Symbol; N]> {
    let len = encoding.chars().count();
    if len != N {
        return Err(EnigmaError::InvalidWiringLength { len });
    }

    let mut out = [Symbol::A; N];
    let mut seen = [false; N];
    for (slot, c) in out.iter_mut().zip(encoding.chars()) {
        let s = Symbol::from_char(c)?;
        if seen[s.index()] {
            return Err(EnigmaError::InvalidWiringNotBijective { letter: s.to_char() });
        }
        seen[s.index()] = true;
        *slot = s;
    }
    Ok(out)
}

/// First letter `i` with `map[map[i]] != i`, if any.
pub fn involution_violation(map: &[Symbol; N]) -> Option<Symbol> {
    Symbol::all().find(|&i| map[map[i.index()].index()] != i)
}

/// Turn a key file into a key: three rotors, three ring settings, letters
/// that resolve, a plugboard that parses.
pub fn validate_key(raw: KeyFile) -> Result<EnigmaKey> {
    let rotor_names: [RotorModel; 3] = raw.rotor_names.as_slice().try_into().map_err(|_| {
        EnigmaError::Validation(format!(
            "rotor_names must list 3 rotors, got {}",
            raw.rotor_names.len()
        ))
    })?;

    if raw.ring_settings.len() != 3 {
        return Err(EnigmaError::Validation(format!(
            "ring_settings must list 3 values, got {}",
            raw.ring_settings.len()
        )));
    }
    let mut ring_settings = [Setting::Index(0); 3];
    for (slot, s) in ring_settings.iter_mut().zip(raw.ring_settings.iter()) {
        *slot = s.canonical()?;
    }

    // Fail here rather than at machine assembly.
    Plugboard::new(&raw.plugboard_connections)?;

    Ok(EnigmaKey {
        rotor_names,
        ring_settings,
        reflector_type: raw.reflector_type,
        plugboard_connections: raw.plugboard_connections,
    })
}
