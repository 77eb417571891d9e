use std::path::Path;
use tracing::info;

use crate::utils::error::{AppError, AppResult};

/// Render the markdown body of a report
pub fn render_markdown(heading: &str, text: &str) -> String {
    format!("# {}\n\n{}", heading, text)
}

/// Write a heading line followed by `text`, replacing any existing file
pub fn write_markdown(path: &Path, heading: &str, text: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    std::fs::write(path, render_markdown(heading, text))
        .map_err(|e| AppError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), bytes = text.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_markdown_heading_then_exact_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("report.md");

        write_markdown(&path, "Optimisations Architecture", "```jsx\nconst x = 1;\n```").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "# Optimisations Architecture\n\n```jsx\nconst x = 1;\n```"
        );
    }

    #[test]
    fn test_write_markdown_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        std::fs::write(&path, "old content that is much longer than the new one").unwrap();

        write_markdown(&path, "T", "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# T\n\nnew");
    }
}
