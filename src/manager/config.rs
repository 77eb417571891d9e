// Configuration operations

use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::{Config, ANTHROPIC_API_KEY_ENV, OPENAI_API_BASE_ENV, OPENAI_API_KEY_ENV};
use crate::utils;
use crate::utils::error::AppResult;
use crate::utils::format::mask_secret;

pub fn handle_config_command(mut config: Config, command: Option<ConfigCommands>) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => handle_path_command(),
        Some(ConfigCommands::Reset) => handle_reset_command(&mut config),
        None => handle_config_help(),
    }
}

fn key_status(key: Option<String>, env_name: &str) -> String {
    match key {
        Some(key) => mask_secret(&key),
        None => format!("not set (config or {})", env_name),
    }
}

fn handle_show_command(config: &Config) -> AppResult<()> {
    println!("⚙️  WiseWords Advisor Configuration");
    println!("==================================");

    println!("General:");
    println!("  Project root: {}", config.general.project_root.display());
    println!("  Docs dir: {}", config.general.docs_dir.display());
    println!("  Color: {}", config.general.color);

    let anthropic = &config.anthropic;
    println!("Anthropic:");
    println!("  Model: {}", anthropic.model);
    println!("  Base URL: {}", anthropic.base_url);
    println!("  API version: {}", anthropic.api_version);
    println!(
        "  API key: {}",
        key_status(anthropic.resolved_api_key(), ANTHROPIC_API_KEY_ENV)
    );
    println!("  Max tokens: {}", anthropic.max_tokens);
    println!("  Temperature: {}", anthropic.temperature);
    println!("  Timeout: {}s", anthropic.timeout_secs);

    let openai = &config.openai;
    println!("OpenAI:");
    println!("  Model: {}", openai.model);
    if let Some(fallback) = &openai.fallback_model {
        println!("  Fallback model: {} ({})", fallback, openai.fallback_label);
    }
    println!("  Base URL: {}", openai.resolved_base_url());
    if openai.resolved_base_url() != openai.base_url {
        println!("    (from {})", OPENAI_API_BASE_ENV);
    }
    println!(
        "  API key: {}",
        key_status(openai.resolved_api_key(), OPENAI_API_KEY_ENV)
    );
    println!("  Max tokens: {}", openai.max_tokens);
    println!("  Temperature: {}", openai.temperature);
    println!("  Timeout: {}s", openai.timeout_secs);

    Ok(())
}

fn handle_path_command() -> AppResult<()> {
    println!("{}", Config::config_file_path().display());
    Ok(())
}

fn handle_config_help() -> AppResult<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  advisor config show    - Show current configuration");
    println!("  advisor config path    - Print the configuration file location");
    println!("  advisor config reset   - Reset configuration to defaults");
    println!();
    print_location(&Config::config_file_path());
    Ok(())
}

fn print_location(path: &Path) {
    println!("Configuration file location: {}", path.display());
}

fn handle_reset_command(config: &mut Config) -> AppResult<()> {
    if utils::prompt_yes_no(
        "Are you sure you want to reset configuration to defaults? This will overwrite your current settings.",
    )? {
        *config = Config::default();
        config.save()?;
        utils::print_success("Configuration reset to defaults!");
    } else {
        println!("Reset cancelled.");
    }
    Ok(())
}
