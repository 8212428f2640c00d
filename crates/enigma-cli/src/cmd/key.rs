// crates/enigma-cli/src/cmd/key.rs

use clap::{Args, Subcommand, ValueEnum};
use enigma_core::key::format as key_format;
use enigma_core::EnigmaKey;

use crate::io::output;

#[derive(Args)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub cmd: KeyCmd,
}

#[derive(Subcommand)]
pub enum KeyCmd {
    /// Print the resolved settings and the key id
    Inspect,

    /// Print the resolved key in key-file form
    Export(ExportArgs),
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum KeyFormat {
    Json,
    Yaml,
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value_t = KeyFormat::Json)]
    pub format: KeyFormat,
}

pub fn run(key: &EnigmaKey, args: KeyArgs) -> anyhow::Result<()> {
    match args.cmd {
        KeyCmd::Inspect => cmd_inspect(key),
        KeyCmd::Export(a) => cmd_export(key, a),
    }
}

fn cmd_inspect(k: &EnigmaKey) -> anyhow::Result<()> {
    let kid = key_format::key_id_hex(k)?;
    let m = k.default_machine()?;

    println!("key_id       = {}", kid);
    println!(
        "rotors       = {} {} {}",
        k.rotor_names[0], k.rotor_names[1], k.rotor_names[2]
    );
    println!("rings        = {}", m.rings());
    println!("reflector    = {}", k.reflector_type);
    println!("plugboard    = {:?}", k.plugboard_connections);
    println!("plug_pairs   = {}", m.plugboard().pairs().len());

    for (role, r) in [("left", m.left()), ("middle", m.middle()), ("right", m.right())] {
        let notches: String = r.notches().iter().map(|s| s.succ().to_char()).collect();
        println!("{:<6} wiring={} notch={}", role, r.wiring().encoding(), notches);
    }
    Ok(())
}

fn cmd_export(k: &EnigmaKey, a: ExportArgs) -> anyhow::Result<()> {
    let text = match a.format {
        KeyFormat::Json => key_format::encode_json(k)?,
        KeyFormat::Yaml => key_format::encode_yaml(k)?,
    };
    let mut stdout = std::io::stdout().lock();
    output::write(&mut stdout, text.trim_end())?;
    output::write_line(&mut stdout, None)?;
    Ok(())
}
