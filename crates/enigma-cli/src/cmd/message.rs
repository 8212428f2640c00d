// crates/enigma-cli/src/cmd/message.rs

use clap::Args;
use enigma_core::{EnigmaKey, Indicator, NonLetters};
use tracing::info;

use crate::cmd::join_words;
use crate::io::output;

#[derive(Args)]
pub struct MessageArgs {
    /// Start positions of the rotors, left to right (e.g. AAA)
    pub positions: Indicator,

    /// Message words. Non-letters are kept as-is unless --strip.
    pub message: Vec<String>,

    /// Drop non-letters from the output
    #[arg(long)]
    pub strip: bool,
}

pub fn run(key: &EnigmaKey, args: MessageArgs) -> anyhow::Result<()> {
    let mut machine = key.machine(args.positions)?;
    let text = join_words(&args.message);

    let mode = if args.strip {
        NonLetters::Strip
    } else {
        NonLetters::Preserve
    };
    let out = machine.encipher(&text, mode)?;

    output::write_line(&mut std::io::stdout().lock(), Some(&out))?;
    info!(
        "message ok: letters={} skipped={} resets={} start={} end={}",
        machine.stats.keypresses,
        machine.stats.skipped,
        machine.stats.resets,
        args.positions,
        machine.positions()
    );
    Ok(())
}
