use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub enum FlowResult {
    DryRun(String),
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::Network(msg) => {
            eprintln!("🌐 {}", OutputStyle::error(&format!("Network: {}", msg)));
        }
        AppError::Provider(msg) => {
            eprintln!("🤖 {}", OutputStyle::error(&format!("Provider: {}", msg)));
        }
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::warning(&format!("Config: {}", msg)));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(e));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::DryRun(msg) => {
            println!("⏹️  {}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_message() {
        let err = AppError::Provider("401 Unauthorized - invalid x-api-key".to_string());
        assert_eq!(
            err.to_string(),
            "Provider error: 401 Unauthorized - invalid x-api-key"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(ref msg) if msg == "missing"));
    }
}
