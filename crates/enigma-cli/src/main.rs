// crates/enigma-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "enigma-cli")]
#[command(about = "Three-rotor Enigma simulator", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub machine: cmd::MachineArgs,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encipher (or decipher) a message from given rotor positions
    Message(cmd::message::MessageArgs),

    /// Encrypt or decrypt with the start-position / message-key procedure
    Transmission(cmd::transmission::TransmissionArgs),

    /// Chunk a text file and send every chunk as its own transmission
    Batch(cmd::batch::BatchArgs),

    /// Key tools (inspect, export)
    Key(cmd::key::KeyArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let key = cli.machine.resolve()?;

    match cli.cmd {
        Commands::Message(args) => cmd::message::run(&key, args),
        Commands::Transmission(args) => cmd::transmission::run(&key, args),
        Commands::Batch(args) => cmd::batch::run(&key, args),
        Commands::Key(args) => cmd::key::run(&key, args),
    }
}
