//! Render command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Deserialize;

use crate::app::config::load_guard_config;
use crate::domain::{AccessControlPolicy, AppError, ConversationMessage, Prompt, UserId};
use crate::services::{
    Document, DocumentCollectionSource, HttpPromptGuard, MinijinjaTemplate, PromptRequest,
    ScanFilter, TextSource, build_prompt, build_prompt_from_messages,
};

const GUARD_FILTER_NAME: &str = "llm-guard";

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file with the conversation history (array of {role, content})
    #[arg(short = 'm', long, required_unless_present = "instruction")]
    messages: Option<PathBuf>,
    /// Instruction text (overrides the last user message when --messages is given)
    #[arg(short = 'i', long)]
    instruction: Option<String>,
    /// Example snippet to include (repeatable, kept in order)
    #[arg(short = 'e', long = "example")]
    examples: Vec<String>,
    /// JSON file listing sources in order
    #[arg(short = 's', long)]
    sources: Option<PathBuf>,
    /// Custom Minijinja template file
    #[arg(short = 't', long)]
    template: Option<PathBuf>,
    /// Identity of the requesting user
    #[arg(short = 'u', long)]
    user: Option<UserId>,
    /// What to do when a source withholds content from the user
    #[arg(short = 'p', long, default_value = "enforce-all")]
    policy: AccessControlPolicy,
    /// Scan the rendered prompt with the prompt guard service
    #[arg(long)]
    guard: bool,
    /// TOML file with prompt guard settings (environment overrides apply)
    #[arg(long, requires = "guard")]
    guard_config: Option<PathBuf>,
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Rendered prompt text
    Text,
    /// JSON array of {role, content} chat messages
    Messages,
    /// JSON document {page_content, metadata}
    Document,
}

/// One entry of the `--sources` file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceSpec {
    Text {
        text: String,
        #[serde(default)]
        owner: Option<UserId>,
    },
    Documents {
        documents: Vec<Document>,
        #[serde(default)]
        owner_key: Option<String>,
    },
}

pub fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let request = build_request(&args)?;
    tracing::debug!(?request, "rendering prompt");

    let prompt = match &args.messages {
        Some(path) => {
            let messages = read_messages(path)?;
            build_prompt_from_messages(messages, args.instruction.as_deref(), &request)?
        }
        None => build_prompt(required_instruction(args.instruction.as_deref())?, &request)?,
    };

    println!("{}", format_output(&prompt, args.format)?);
    Ok(())
}

fn required_instruction(instruction: Option<&str>) -> Result<&str, AppError> {
    instruction.filter(|text| !text.trim().is_empty()).ok_or_else(|| {
        AppError::invalid_input("An instruction is required when no --messages file is given")
    })
}

fn build_request(args: &RenderArgs) -> Result<PromptRequest, AppError> {
    let mut request = PromptRequest::new()
        .with_examples(args.examples.iter().cloned())
        .with_policy(args.policy);

    if let Some(user) = &args.user {
        request = request.for_user(user.clone());
    }

    if let Some(path) = &args.sources {
        for spec in read_source_specs(path)? {
            request = match spec {
                SourceSpec::Text { text, owner: Some(owner) } => {
                    request.with_source(TextSource::owned_by(text, owner))
                }
                SourceSpec::Text { text, owner: None } => {
                    request.with_source(TextSource::new(text))
                }
                SourceSpec::Documents { documents, owner_key } => {
                    let mut source = DocumentCollectionSource::new(documents);
                    if let Some(key) = owner_key {
                        source = source.with_owner_key(key);
                    }
                    request.with_source(source)
                }
            };
        }
    }

    if let Some(path) = &args.template {
        let source = read_file(path)?;
        request = request
            .with_template(MinijinjaTemplate::from_source(path.display().to_string(), source));
    }

    if args.guard {
        let config = load_guard_config(args.guard_config.as_deref())?;
        let scanner = HttpPromptGuard::new(&config)?;
        request = request.with_filter(ScanFilter::new(GUARD_FILTER_NAME, scanner));
    }

    Ok(request)
}

fn read_messages(path: &Path) -> Result<Vec<ConversationMessage>, AppError> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read_source_specs(path: &Path) -> Result<Vec<SourceSpec>, AppError> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read_file(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|err| {
        AppError::invalid_input(format!("Failed to read {}: {}", path.display(), err))
    })
}

fn format_output(prompt: &Prompt, format: OutputFormat) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => prompt.to_string(),
        OutputFormat::Messages => serde_json::to_string_pretty(&prompt.to_messages())?,
        OutputFormat::Document => serde_json::to_string_pretty(&prompt.to_document())?,
    })
}
