//! pints-scaffold CLI binary

use anyhow::Result;

use pints_scaffold::cli::CliApp;

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    let default_filter = if matches.get_flag("verbose") {
        "pints_scaffold=debug,pints_plugin_generator=debug"
    } else {
        "pints_scaffold=info,pints_plugin_generator=info"
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the CLI application
    CliApp::run(&matches)
}
