// Binary entry point
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wisewords_advisor::cli::Cli;
use wisewords_advisor::config::Config;
use wisewords_advisor::utils::error::report_error;
use wisewords_advisor::utils::set_color_enabled;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so progress lines on stdout stay readable
    let default_filter = if cli.debug {
        "debug"
    } else {
        "warn,wisewords_advisor=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let mut config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if let Some(root) = cli.root {
        config.general.project_root = root;
    }
    set_color_enabled(config.general.color);

    // Execute command
    if let Err(err) = cli.command.execute(config).await {
        report_error(&err);
        return Err(err.into());
    }

    Ok(())
}
