// Command handlers
pub mod config;    // Configuration management
pub mod consult;   // Running and listing consultations

pub use config::handle_config_command;
pub use consult::{handle_list_command, handle_run_command};
