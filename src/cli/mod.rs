//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("pints-scaffold")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Scaffold new PINTS SQL plugins")
            .arg(
                clap::Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Enable debug logging")
                    .global(true)
                    .action(clap::ArgAction::SetTrue),
            )
            .subcommand(commands::new::command())
            .subcommand(commands::init::command())
    }

    /// Run the CLI application
    pub fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("new", sub_matches)) => commands::new::run(sub_matches),
            Some(("init", sub_matches)) => commands::init::run(sub_matches),
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;

    /// Configuration files picked up from the working directory, in order
    pub const DEFAULT_CONFIG_PATHS: [&str; 4] = [
        ".pints-scaffold.yaml",
        ".pints-scaffold.yml",
        "pints-scaffold.yaml",
        "pints-scaffold.yml",
    ];

    /// Get configuration file path from arguments or look for a default one
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<Option<PathBuf>> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            let path = PathBuf::from(config_path);
            if !path.exists() {
                return Err(anyhow!("Configuration file not found: {:?}", path));
            }
            return Ok(Some(path));
        }

        Ok(DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists()))
    }

    /// Load configuration from file, or built-in defaults when there is none
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        match get_config_path(matches)? {
            Some(path) => {
                tracing::info!("Using configuration file: {:?}", path);
                crate::Config::from_file(&path)
            }
            None => Ok(crate::Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_command_parses_staging_columns() {
        let matches = CliApp::app()
            .try_get_matches_from([
                "pints-scaffold",
                "new",
                "--name",
                "dqs",
                "--staging-cols",
                "run_id:TEXT",
                "score:DOUBLE",
                "--version",
                "1.2.3",
            ])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "new");
        let cols: Vec<&String> = sub.get_many::<String>("staging-cols").unwrap().collect();
        assert_eq!(cols, vec!["run_id:TEXT", "score:DOUBLE"]);
        assert_eq!(sub.get_one::<String>("version").unwrap(), "1.2.3");
    }

    #[test]
    fn test_new_requires_name() {
        assert!(CliApp::app()
            .try_get_matches_from(["pints-scaffold", "new"])
            .is_err());
    }

    #[test]
    fn test_staging_cols_needs_a_value() {
        assert!(CliApp::app()
            .try_get_matches_from(["pints-scaffold", "new", "--name", "dqs", "--staging-cols"])
            .is_err());
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let matches = CliApp::app()
            .try_get_matches_from([
                "pints-scaffold",
                "new",
                "--name",
                "dqs",
                "--config",
                "/nonexistent/.pints-scaffold.yaml",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(utils::get_config_path(sub).is_err());
    }

    #[test]
    fn test_app_is_well_formed() {
        CliApp::app().debug_assert();
    }
}
