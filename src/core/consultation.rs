//! The fixed catalog of consultations
//!
//! Each suite sends three prompts to one provider and writes one markdown
//! report per prompt. Slugs, headings and file names are stable.

use clap::ValueEnum;
use std::path::Path;

use crate::prompts::{claude, codex, RenderedPrompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Suite {
    /// Anthropic Claude, single model
    Claude,
    /// OpenAI GPT-5 with a GPT-4 fallback
    Codex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    LiquidAnimations,
    Architecture,
    CommandPalette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consultation {
    pub suite: Suite,
    pub topic: Topic,
    pub slug: &'static str,
    pub icon: &'static str,
    /// Progress line shown while the consultation runs
    pub label: &'static str,
    /// First line of the report
    pub heading: &'static str,
    pub file_name: &'static str,
}

pub const CLAUDE_CONSULTATIONS: [Consultation; 3] = [
    Consultation {
        suite: Suite::Claude,
        topic: Topic::LiquidAnimations,
        slug: "liquid",
        icon: "🌊",
        label: "Optimisation des animations liquides",
        heading: "Optimisations Animations Liquides - Claude Sonnet 3.5",
        file_name: "claude-liquid-optimization.md",
    },
    Consultation {
        suite: Suite::Claude,
        topic: Topic::Architecture,
        slug: "architecture",
        icon: "🏗️",
        label: "Optimisation de l'architecture",
        heading: "Optimisations Architecture - Claude Sonnet 3.5",
        file_name: "claude-architecture-optimization.md",
    },
    Consultation {
        suite: Suite::Claude,
        topic: Topic::CommandPalette,
        slug: "palette",
        icon: "🎯",
        label: "Command Palette IA révolutionnaire",
        heading: "Command Palette IA Révolutionnaire - Claude Sonnet 3.5",
        file_name: "claude-command-palette-ai.md",
    },
];

pub const CODEX_CONSULTATIONS: [Consultation; 3] = [
    Consultation {
        suite: Suite::Codex,
        topic: Topic::LiquidAnimations,
        slug: "liquid",
        icon: "🌊",
        label: "Optimisation animations liquides avec GPT-5",
        heading: "Optimisations Animations Liquides - GPT-5 Codex",
        file_name: "gpt5-liquid-optimization.md",
    },
    Consultation {
        suite: Suite::Codex,
        topic: Topic::CommandPalette,
        slug: "palette",
        icon: "🎯",
        label: "Command Palette révolutionnaire",
        heading: "Command Palette Révolutionnaire - GPT-5 Codex",
        file_name: "gpt5-command-palette-revolutionary.md",
    },
    Consultation {
        suite: Suite::Codex,
        topic: Topic::Architecture,
        slug: "architecture",
        icon: "🏗️",
        label: "Architecture optimisée",
        heading: "Architecture Optimisée - GPT-5 Codex",
        file_name: "gpt5-architecture-optimization.md",
    },
];

impl Suite {
    pub fn consultations(self) -> &'static [Consultation] {
        match self {
            Suite::Claude => &CLAUDE_CONSULTATIONS,
            Suite::Codex => &CODEX_CONSULTATIONS,
        }
    }

    pub fn find(self, slug: &str) -> Option<&'static Consultation> {
        self.consultations()
            .iter()
            .find(|c| c.slug.eq_ignore_ascii_case(slug))
    }

    pub fn banner(self) -> &'static str {
        match self {
            Suite::Claude => "🚀 Consultation de Claude Sonnet 3.5 pour WiseWords-AI Hub",
            Suite::Codex => "🚀 Consultation GPT-5 Codex pour WiseWords-AI Hub",
        }
    }

    pub fn closing(self) -> &'static str {
        match self {
            Suite::Claude => "🎉 Consultation Claude terminée ! Prêt pour l'implémentation.",
            Suite::Codex => {
                "🎉 Consultation GPT-5 Codex terminée ! Prêt pour l'implémentation révolutionnaire."
            }
        }
    }

    pub fn all() -> [Suite; 2] {
        [Suite::Claude, Suite::Codex]
    }
}

impl Consultation {
    /// Build the prompt, reading whatever sources the topic needs under `root`
    pub fn prompt(&self, root: &Path) -> RenderedPrompt {
        match (self.suite, self.topic) {
            (Suite::Claude, Topic::LiquidAnimations) => claude::liquid_animations(root),
            (Suite::Claude, Topic::Architecture) => claude::architecture(root),
            (Suite::Claude, Topic::CommandPalette) => claude::command_palette(),
            (Suite::Codex, Topic::LiquidAnimations) => codex::liquid_animations(root),
            (Suite::Codex, Topic::Architecture) => codex::architecture(root),
            (Suite::Codex, Topic::CommandPalette) => codex::command_palette(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_suite_has_three_distinct_files() {
        for suite in Suite::all() {
            let consultations = suite.consultations();
            assert_eq!(consultations.len(), 3);
            let mut files: Vec<_> = consultations.iter().map(|c| c.file_name).collect();
            files.sort();
            files.dedup();
            assert_eq!(files.len(), 3);
            assert!(consultations.iter().all(|c| c.suite == suite));
        }
    }

    #[test]
    fn test_find_by_slug() {
        let found = Suite::Codex.find("Palette").unwrap();
        assert_eq!(found.file_name, "gpt5-command-palette-revolutionary.md");
        assert!(Suite::Claude.find("unknown").is_none());
    }

    #[test]
    fn test_codex_prompts_carry_system_persona() {
        let dir = tempfile::tempdir().unwrap();
        for consultation in Suite::Codex.consultations() {
            assert!(consultation.prompt(dir.path()).system.is_some());
        }
        for consultation in Suite::Claude.consultations() {
            assert!(consultation.prompt(dir.path()).system.is_none());
        }
    }
}
