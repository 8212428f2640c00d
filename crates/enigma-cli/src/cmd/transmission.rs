// crates/enigma-cli/src/cmd/transmission.rs

use clap::{ArgGroup, Args};
use enigma_core::{EnigmaKey, Indicator};
use tracing::info;

use crate::cmd::join_words;
use crate::io::output;

#[derive(Args)]
#[command(group(ArgGroup::new("mode").required(true).args(["encrypt", "decrypt"])))]
pub struct TransmissionArgs {
    /// Message words (plaintext for --encrypt, ciphertext for --decrypt)
    pub message: Vec<String>,

    /// Encrypt: prints "START KEY" then the ciphertext
    #[arg(long)]
    pub encrypt: bool,

    /// Decrypt: needs -p and -m from the received header
    #[arg(long, requires_all = ["start_position", "message_key"])]
    pub decrypt: bool,

    /// Start position. Random when encrypting without it.
    #[arg(short = 'p', long)]
    pub start_position: Option<Indicator>,

    /// Message key: plain when encrypting (random if omitted), enciphered
    /// when decrypting.
    #[arg(short = 'm', long)]
    pub message_key: Option<Indicator>,
}

pub fn run(key: &EnigmaKey, args: TransmissionArgs) -> anyhow::Result<()> {
    let mut machine = key.default_machine()?;
    let text = join_words(&args.message);
    let mut stdout = std::io::stdout().lock();

    if args.encrypt {
        let t = machine.encrypt_transmission(&text, args.start_position, args.message_key)?;
        output::write_line(&mut stdout, Some(&t.header()))?;
        output::write_line(&mut stdout, Some(&t.ciphertext))?;
        info!(
            "transmission encrypt ok: letters={} resets={}",
            machine.stats.keypresses, machine.stats.resets
        );
        return Ok(());
    }

    // clap guarantees both with --decrypt
    let (Some(start), Some(encrypted_key)) = (args.start_position, args.message_key) else {
        anyhow::bail!("--decrypt needs --start-position and --message-key");
    };
    let plain = machine.decrypt_transmission(start, encrypted_key, &text)?;
    output::write_line(&mut stdout, Some(&plain))?;
    info!(
        "transmission decrypt ok: letters={} resets={}",
        machine.stats.keypresses, machine.stats.resets
    );
    Ok(())
}
