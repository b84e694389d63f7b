//! SKUStitch operator shell binary.

mod command;
mod logging;
mod render;
mod shell;

use anyhow::{Result, bail};
use camino::Utf8PathBuf;
use clap::Parser;
use shell::Shell;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "skustitch", version, about = "Interactive editor for promo SKU records")]
struct Cli {
    /// Load promo JSON from this file before the first prompt.
    #[arg(long, value_name = "FILE")]
    file: Option<Utf8PathBuf>,

    /// Operator passphrase required to start; unset disables the gate.
    #[arg(long, env = "SKUSTITCH_PASS", hide_env_values = true)]
    passphrase: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let mut shell = Shell::new()?;
    if let Some(expected) = cli.passphrase.as_deref() {
        if !shell.authenticate(expected)? {
            bail!("passphrase check failed");
        }
    }

    shell.run(cli.file.as_deref())
}
