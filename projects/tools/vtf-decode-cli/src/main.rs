#![allow(unexpected_cfgs)]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Inspection and export tool for VTF textures
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Info(commands::info::InfoCmd),
    Export(commands::export::ExportCmd),
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Info(cmd) => {
            commands::info::handle_info_command(cmd)?;
        }
        Commands::Export(cmd) => {
            commands::export::handle_export_command(cmd)?;
        }
    }

    Ok(())
}
