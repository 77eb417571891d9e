// Consultation operations - Run, List

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::{ListArgs, RunArgs};
use crate::config::{Config, ANTHROPIC_API_KEY_ENV, OPENAI_API_KEY_ENV};
use crate::core::advisor::Advisor;
use crate::core::consultation::{Consultation, Suite};
use crate::core::report::write_markdown;
use crate::provider::anthropic::AnthropicClient;
use crate::provider::openai::OpenAiClient;
use crate::utils::error::{handle_flow, AppError, AppResult, FlowResult};
use crate::utils::{print_warning, OutputStyle};

pub async fn handle_run_command(config: &Config, suites: &[Suite], args: &RunArgs) -> AppResult<()> {
    let root = config.general.project_root.as_path();
    let docs = config.docs_path();

    if let Some(slug) = &args.only {
        if !suites.iter().any(|suite| suite.find(slug).is_some()) {
            return Err(AppError::Config(format!(
                "Unknown consultation '{}' (expected liquid, architecture or palette)",
                slug
            )));
        }
    }

    let mut written = 0;
    for &suite in suites {
        let selected = select(suite, args.only.as_deref());
        if selected.is_empty() {
            continue;
        }

        if args.dry_run {
            preview_consultations(&selected, root, &docs);
            continue;
        }

        warn_if_key_missing(suite, config);
        let advisor = build_advisor(suite, config)?;
        OutputStyle::print_header(suite.banner());
        written += run_consultations(&selected, &advisor, root, &docs).await?.len();
        println!("\n{}", OutputStyle::success(suite.closing()));
    }

    if written > 0 {
        handle_flow(FlowResult::Success(format!(
            "{} report(s) written to {}",
            written,
            docs.display()
        )));
    }

    Ok(())
}

fn warn_if_key_missing(suite: Suite, config: &Config) {
    let (key, env_name) = match suite {
        Suite::Claude => (config.anthropic.resolved_api_key(), ANTHROPIC_API_KEY_ENV),
        Suite::Codex => (config.openai.resolved_api_key(), OPENAI_API_KEY_ENV),
    };
    if key.is_none() {
        print_warning(&format!(
            "{} is not set; reports will contain the provider error",
            env_name
        ));
    }
}

/// Consultations of `suite`, optionally narrowed to one slug
pub fn select(suite: Suite, only: Option<&str>) -> Vec<&'static Consultation> {
    match only {
        Some(slug) => suite.find(slug).into_iter().collect(),
        None => suite.consultations().iter().collect(),
    }
}

pub fn build_advisor(suite: Suite, config: &Config) -> AppResult<Advisor> {
    let advisor = match suite {
        Suite::Claude => Advisor::for_claude(
            Box::new(AnthropicClient::new(&config.anthropic)?),
            &config.anthropic,
        ),
        Suite::Codex => Advisor::for_codex(
            Box::new(OpenAiClient::new(&config.openai)?),
            &config.openai,
        ),
    };
    Ok(advisor)
}

/// Send each consultation in turn and write its report; returns the written paths
pub async fn run_consultations(
    consultations: &[&Consultation],
    advisor: &Advisor,
    root: &Path,
    docs: &Path,
) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(consultations.len());

    for (index, consultation) in consultations.iter().enumerate() {
        OutputStyle::print_step(index + 1, consultation);
        info!(
            provider = advisor.provider_name(),
            slug = consultation.slug,
            "starting consultation"
        );

        let prompt = consultation.prompt(root);
        let advice = advisor.fetch_advice(&prompt).await;

        let path = docs.join(consultation.file_name);
        write_markdown(&path, consultation.heading, &advice)?;
        OutputStyle::print_saved(&path);

        written.push(path);
    }

    Ok(written)
}

fn preview_consultations(consultations: &[&Consultation], root: &Path, docs: &Path) {
    for consultation in consultations {
        let prompt = consultation.prompt(root);
        OutputStyle::print_header(&format!(
            "{} {} ({:?})",
            consultation.icon, consultation.label, consultation.suite
        ));
        OutputStyle::print_prompt(prompt.system.as_deref(), &prompt.user);
        handle_flow(FlowResult::DryRun(format!(
            "Dry run: would write {}",
            docs.join(consultation.file_name).display()
        )));
    }
}

pub fn handle_list_command(config: &Config, args: &ListArgs) -> AppResult<()> {
    let suites: Vec<Suite> = match args.suite {
        Some(suite) => vec![suite],
        None => Suite::all().to_vec(),
    };
    let docs = config.docs_path();

    for suite in suites {
        println!("\n{}", OutputStyle::title(&format!("{:?}", suite)));
        println!("{}", OutputStyle::separator());
        for consultation in suite.consultations() {
            OutputStyle::print_field_colored("Slug", consultation.slug, OutputStyle::info);
            OutputStyle::print_field_colored("Heading", consultation.heading, OutputStyle::content);
            OutputStyle::print_field_colored(
                "Report",
                &docs.join(consultation.file_name).display().to_string(),
                OutputStyle::path,
            );
            println!();
        }
    }

    Ok(())
}
