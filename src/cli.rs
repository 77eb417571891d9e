use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::consultation::Suite;
use crate::manager::{handle_config_command, handle_list_command, handle_run_command};
use crate::utils::error::AppResult;

#[derive(Parser)]
#[command(name = "advisor")]
#[command(about = "Consult hosted LLMs about the WiseWords-AI Hub front end")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(short, long, value_name = "DIR", help = "Project root (overrides config)")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config) -> AppResult<()> {
        match self {
            Commands::Claude(args) => {
                handle_run_command(&config, &[Suite::Claude], &args).await?;
            }
            Commands::Codex(args) => {
                handle_run_command(&config, &[Suite::Codex], &args).await?;
            }
            Commands::All(args) => {
                handle_run_command(&config, &Suite::all(), &args).await?;
            }
            Commands::List(args) => {
                handle_list_command(&config, &args)?;
            }
            Commands::Config(args) => {
                handle_config_command(config, args.command)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Consult Claude and write the claude-*.md reports
    Claude(RunArgs),

    /// Consult GPT-5 (falling back to GPT-4) and write the gpt5-*.md reports
    Codex(RunArgs),

    /// Run both suites, Claude first
    All(RunArgs),

    /// List consultations and where their reports go
    List(ListArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    #[arg(long, value_name = "SLUG", help = "Run a single consultation (liquid, architecture, palette)")]
    pub only: Option<String>,

    #[arg(long, help = "Print prompts without calling the provider or writing files")]
    pub dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[arg(short, long, value_enum)]
    pub suite: Option<Suite>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}
