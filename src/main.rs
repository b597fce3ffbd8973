//! gitferry: keeps named local directories synchronized with remote git
//! repositories across machines.

use anyhow::Result;
use clap::{Arg, ArgMatches, Command as ClapCommand};
use std::path::PathBuf;

use gitferry::commands::{handle_download_command, handle_upload_command};
use gitferry::config::default_config_path;

fn main() -> Result<()> {
    let matches = ClapCommand::new("gitferry")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keeps named local directories synchronized with remote git repositories")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(sync_args(ClapCommand::new("upload").about(
            "Stage, commit and push local changes for every configured repository",
        )))
        .subcommand(sync_args(ClapCommand::new("download").about(
            "Pull upstream changes into every configured repository",
        )))
        .get_matches();

    match matches.subcommand() {
        Some(("upload", sub)) => {
            let (config, machine) = resolve_run_args(sub)?;
            handle_upload_command(&config, &machine)
        }
        Some(("download", sub)) => {
            let (config, machine) = resolve_run_args(sub)?;
            handle_download_command(&config, &machine)
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn sync_args(cmd: ClapCommand) -> ClapCommand {
    cmd.arg(
        Arg::new("config")
            .long("config")
            .value_name("PATH")
            .help("Path to the configuration file (defaults to the user config directory)"),
    )
    .arg(
        Arg::new("machine")
            .long("machine")
            .value_name("NAME")
            .help("Machine identity used to resolve local repository paths (defaults to COMPUTERNAME/HOSTNAME)"),
    )
}

fn resolve_run_args(matches: &ArgMatches) -> Result<(PathBuf, String)> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => PathBuf::from(path),
        None => default_config_path().ok_or_else(|| {
            anyhow::anyhow!("Could not determine the user config directory; pass --config")
        })?,
    };

    let machine = match matches.get_one::<String>("machine") {
        Some(name) => name.clone(),
        None => std::env::var("COMPUTERNAME")
            .or_else(|_| std::env::var("HOSTNAME"))
            .map_err(|_| anyhow::anyhow!("Could not determine the machine name; pass --machine"))?,
    };

    Ok((config, machine))
}
