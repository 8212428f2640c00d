// crates/enigma-core/src/key/key.rs

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::machine::enigma::Machine;
use crate::symbol::indicator::Indicator;
use crate::symbol::setting::Setting;
use crate::wiring::plugboard::Plugboard;
use crate::wiring::reflector::Reflector;
use crate::wiring::rotor::Rotor;
use crate::wiring::tables::{ReflectorModel, RotorModel};

/// Daily key: everything about a machine except its rotor positions.
/// Built only through `validate::validate_key`, so ring settings are always
/// canonical indices and the plugboard string is known to parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnigmaKey {
    pub rotor_names: [RotorModel; 3],
    pub ring_settings: [Setting; 3],
    pub reflector_type: ReflectorModel,
    pub plugboard_connections: String,
}

/// Key as written in a JSON/YAML file, before validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFile {
    pub rotor_names: Vec<RotorModel>,
    pub ring_settings: Vec<Setting>,
    pub reflector_type: ReflectorModel,
    #[serde(default)]
    pub plugboard_connections: String,
}

impl EnigmaKey {
    /// Assemble a machine with the rotors turned to `positions`.
    pub fn machine(&self, positions: Indicator) -> Result<Machine> {
        let [pl, pm, pr] = positions.symbols();
        let [nl, nm, nr] = self.rotor_names;
        let [rl, rm, rr] = self.ring_settings;

        Ok(Machine::new(
            Rotor::from_model(nl, rl, pl.into())?,
            Rotor::from_model(nm, rm, pm.into())?,
            Rotor::from_model(nr, rr, pr.into())?,
            Reflector::from_model(self.reflector_type)?,
            Plugboard::new(&self.plugboard_connections)?,
        ))
    }

    /// Machine at positions AAA.
    pub fn default_machine(&self) -> Result<Machine> {
        self.machine(Indicator::AAA)
    }
}

impl From<&EnigmaKey> for KeyFile {
    fn from(k: &EnigmaKey) -> Self {
        KeyFile {
            rotor_names: k.rotor_names.to_vec(),
            ring_settings: k.ring_settings.to_vec(),
            reflector_type: k.reflector_type,
            plugboard_connections: k.plugboard_connections.clone(),
        }
    }
}
