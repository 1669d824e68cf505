//! Init command implementation

use crate::Config;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Write a configuration file with the built-in defaults")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value(".pints-scaffold.yaml"),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Missing output path"))?;

    if output_path.exists() && !matches.get_flag("force") {
        return Err(anyhow!(
            "Configuration file already exists: {:?} (use --force to overwrite)",
            output_path
        ));
    }

    info!("Initializing configuration file: {:?}", output_path);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        crate::utils::ensure_directory(parent)?;
    }
    Config::default().save_to_file(&output_path)?;

    println!("Configuration file created: {}", output_path.display());
    println!("Edit the defaults to change the plugin root, version or staging columns.");

    Ok(())
}
