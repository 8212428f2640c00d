// crates/enigma-core/src/transmission/mod.rs
//
// Indicator procedure. The sender picks a start position and a message key,
// enciphers the key at the start position, then enciphers the message with
// the rotors turned to the (plain) message key. The receiver repeats the two
// phases; reciprocity recovers the key and then the message.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::machine::enigma::Machine;
use crate::machine::state::NonLetters;
use crate::symbol::indicator::Indicator;

/// What goes on the wire: start position, enciphered key, ciphertext.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transmission {
    pub start_position: Indicator,
    pub encrypted_key: Indicator,
    pub ciphertext: String,
}

impl Transmission {
    /// `"WZA IGI"`.
    pub fn header(&self) -> String {
        format!("{} {}", self.start_position, self.encrypted_key)
    }
}

impl Machine {
    /// Encrypt with explicit randomness. Omitted indicators are drawn from `rng`.
    pub fn encrypt_transmission_with<R: Rng + ?Sized>(
        &mut self,
        message: &str,
        start_position: Option<Indicator>,
        message_key: Option<Indicator>,
        non_letters: NonLetters,
        rng: &mut R,
    ) -> Result<Transmission> {
        let start_position = start_position.unwrap_or_else(|| Indicator::random(rng));
        self.set_positions(start_position);

        let message_key = message_key.unwrap_or_else(|| Indicator::random(rng));
        let encrypted_key = self.encipher_indicator(message_key);
        debug!(start = %start_position, key = %encrypted_key, "message key enciphered");

        self.set_positions(message_key);
        let ciphertext = self.encipher(message, non_letters)?;
        debug!(len = ciphertext.len(), "message enciphered");

        Ok(Transmission {
            start_position,
            encrypted_key,
            ciphertext,
        })
    }

    /// Encrypt, drawing any omitted indicator from the thread-local RNG.
    pub fn encrypt_transmission(
        &mut self,
        message: &str,
        start_position: Option<Indicator>,
        message_key: Option<Indicator>,
    ) -> Result<Transmission> {
        self.encrypt_transmission_with(
            message,
            start_position,
            message_key,
            NonLetters::Preserve,
            &mut rand::thread_rng(),
        )
    }

    pub fn decrypt_transmission(
        &mut self,
        start_position: Indicator,
        encrypted_key: Indicator,
        ciphertext: &str,
    ) -> Result<String> {
        self.decrypt_transmission_with(start_position, encrypted_key, ciphertext, NonLetters::Preserve)
    }

    pub fn decrypt_transmission_with(
        &mut self,
        start_position: Indicator,
        encrypted_key: Indicator,
        ciphertext: &str,
        non_letters: NonLetters,
    ) -> Result<String> {
        self.set_positions(start_position);
        let message_key = self.encipher_indicator(encrypted_key);
        debug!(start = %start_position, "message key recovered");

        self.set_positions(message_key);
        self.encipher(ciphertext, non_letters)
    }

    /// Decrypt a received transmission.
    pub fn receive(&mut self, t: &Transmission) -> Result<String> {
        self.decrypt_transmission(t.start_position, t.encrypted_key, &t.ciphertext)
    }
}
