//! New command implementation

use crate::cli::utils;
use crate::{NewPluginOptions, PluginScaffold};
use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("new")
        .about("Create a new plugin skeleton")
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("name")
                .short('n')
                .long("name")
                .help("Plugin folder/name (snake_case, e.g. intra_run_components)")
                .value_name("NAME")
                .required(true),
        )
        .arg(
            clap::Arg::new("title")
                .short('t')
                .long("title")
                .help("Human title/description")
                .value_name("TITLE"),
        )
        .arg(
            clap::Arg::new("root")
                .short('r')
                .long("root")
                .help("Target root for plugins [default: sql]")
                .value_name("DIR"),
        )
        .arg(
            clap::Arg::new("version")
                .long("version")
                .help("Initial plugin version [default: 0.1.0]")
                .value_name("VERSION")
                .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        )
        .arg(
            clap::Arg::new("staging-cols")
                .long("staging-cols")
                .help("Staging columns like 'run_id:TEXT feature_id:TEXT foo:DOUBLE'")
                .value_name("NAME:TYPE")
                .num_args(1..),
        )
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Don't write files")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Collect the raw plugin options from parsed arguments
pub fn options_from_matches(matches: &ArgMatches) -> NewPluginOptions {
    NewPluginOptions {
        name: matches
            .get_one::<String>("name")
            .cloned()
            .unwrap_or_default(),
        title: matches.get_one::<String>("title").cloned(),
        root: matches.get_one::<String>("root").map(PathBuf::from),
        version: matches.get_one::<String>("version").cloned(),
        staging_columns: matches
            .get_many::<String>("staging-cols")
            .map(|values| values.cloned().collect()),
    }
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let config = utils::load_config(matches)?;
    let scaffold = PluginScaffold::new(config);
    let request = scaffold.build_request(options_from_matches(matches))?;

    if matches.get_flag("dry-run") {
        info!("Dry run mode - no files will be written");
        let result = scaffold.dry_run(&request)?;

        println!("Dry run - no files written.");
        println!(
            "Would create plugin skeleton at: {}",
            crate::utils::absolute_path(&result.plugin_dir)?.display()
        );
        for file in &result.files {
            println!(
                "  {} ({})",
                file.path.display(),
                crate::utils::format_bytes(file.bytes as u64)
            );
        }
        println!(
            "{} files, {} total",
            result.files.len(),
            crate::utils::format_bytes(result.total_bytes() as u64)
        );
        return Ok(());
    }

    let result = scaffold.create(&request)?;
    info!(
        "Wrote {} files in {}ms",
        result.files.len(),
        result.processing_time_ms
    );

    println!(
        "✅ Created plugin skeleton at: {}",
        crate::utils::absolute_path(&result.plugin_dir)?.display()
    );
    println!("   Edit plugin.sql/materialize.sql/export.sql as needed.");
    println!(
        "   Then install via: pints plugin install --db my.duckdb --name {}",
        request.name()
    );

    Ok(())
}
