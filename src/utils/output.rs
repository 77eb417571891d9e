use colored::*;
use std::path::Path;

use crate::core::consultation::Consultation;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn path(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "=".repeat(60)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    /// Progress line printed before a consultation is sent
    pub fn print_step(index: usize, consultation: &Consultation) {
        println!(
            "\n{}. {} {}",
            index,
            consultation.icon,
            Self::header(&format!("{}...", consultation.label))
        );
    }

    pub fn print_saved(path: &Path) {
        println!(
            "✅ {} {}",
            Self::success("Conseils sauvegardés dans"),
            Self::path(&path.display().to_string())
        );
    }

    /// Print a rendered prompt for dry runs
    pub fn print_prompt(system: Option<&str>, user: &str) {
        if let Some(system) = system {
            println!("{}:", Self::label("system"));
            println!("{}", Self::muted(system));
            println!("{}", Self::separator());
        }
        println!("{}:", Self::label("user"));
        println!("{}", Self::content(user));
        println!("{}", Self::separator());
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Globally enable or disable ANSI colours
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
