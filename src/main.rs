//! plaisio - developer tooling for Plaisio web applications
//!
//! Usage: plaisio <COMMAND>
//!
//! Commands:
//!   type-script-automator  Watch the asset tree and recompile TypeScript on change
//!   mask                   Describe the filesystem event flags contained in a mask

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use plaisio_console::presentation::{Cli, Commands};

use commands::automate::AutomateArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::TypeScriptAutomator { path, force, once } => {
            commands::automate::cmd_type_script_automator(AutomateArgs {
                path,
                force,
                once,
                config: cli.config,
                json: cli.json,
                verbose: cli.verbose,
                color: cli.color,
            })
        }
        Commands::Mask { value } => commands::mask::cmd_mask(value, cli.json, cli.color),
    }
}
