use tracing::{debug, warn};

use crate::domain::{AccessControlPolicy, AppError, ConversationMessage, Prompt, Role, UserId};
use crate::ports::SourceContent;

use super::request::PromptRequest;

/// Build a prompt from an explicit instruction. The result carries no history.
pub fn build_prompt(instruction: &str, request: &PromptRequest) -> Result<Prompt, AppError> {
    assemble(instruction, Vec::new(), request)
}

/// Build a prompt from conversation history.
///
/// Without an `instruction` override (or with an empty one), the last message
/// must be a user message; its content becomes the instruction and it is
/// removed from the history kept on the prompt.
pub fn build_prompt_from_messages(
    mut messages: Vec<ConversationMessage>,
    instruction: Option<&str>,
    request: &PromptRequest,
) -> Result<Prompt, AppError> {
    let instruction = match instruction.filter(|text| !text.is_empty()) {
        Some(text) => text.to_string(),
        None => take_trailing_user_message(&mut messages)?,
    };
    assemble(&instruction, messages, request)
}

fn take_trailing_user_message(messages: &mut Vec<ConversationMessage>) -> Result<String, AppError> {
    let last = messages.last().ok_or_else(|| {
        AppError::invalid_input("No messages provided and no instruction provided")
    })?;
    match &last.role {
        None => return Err(AppError::invalid_input("Last message does not have a role")),
        Some(Role::User) => {}
        Some(other) => {
            return Err(AppError::invalid_input(format!(
                "Last message is not from the user (role '{}')",
                other
            )));
        }
    }
    Ok(messages.pop().map(|message| message.content).unwrap_or_default())
}

fn assemble(
    instruction: &str,
    history: Vec<ConversationMessage>,
    request: &PromptRequest,
) -> Result<Prompt, AppError> {
    let source_content = collect_source_content(request)?;

    let mut text = request.template.render(instruction, &request.examples, &source_content)?;

    for filter in &request.filters {
        text = filter.filter(text).inspect_err(|err| {
            warn!(filter = filter.name(), error = %err, "prompt filter failed");
        })?;
    }

    debug!(
        chars = text.len(),
        sources = source_content.len(),
        history = history.len(),
        "prompt assembled"
    );
    Ok(Prompt::new(text, history))
}

/// Probe every source in skip mode and apply the policy centrally, so sources
/// only have to answer "what may this user see".
fn collect_source_content(request: &PromptRequest) -> Result<Vec<String>, AppError> {
    let user = request.requesting_user.as_ref();
    let mut content = Vec::with_capacity(request.sources.len());

    for (index, source) in request.sources.iter().enumerate() {
        match source.content(user, true) {
            Ok(SourceContent::Authorized(text)) => {
                debug!(index, chars = text.len(), "source authorized");
                push_non_empty(&mut content, text);
            }
            Ok(SourceContent::Withheld { visible, withheld, owner }) => match request.policy {
                AccessControlPolicy::EnforceAll => {
                    warn!(index, withheld, policy = %request.policy, "source withheld content");
                    return Err(unauthorized(owner, user));
                }
                AccessControlPolicy::SkipUnauthorized => {
                    warn!(index, withheld, policy = %request.policy, "skipping withheld content");
                    if let Some(text) = visible {
                        push_non_empty(&mut content, text);
                    }
                }
            },
            Err(AppError::Unauthorized { .. })
                if request.policy == AccessControlPolicy::SkipUnauthorized =>
            {
                warn!(index, policy = %request.policy, "skipping unauthorized source");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(content)
}

/// Empty content would only produce an empty "Sources" header.
fn push_non_empty(content: &mut Vec<String>, text: String) {
    if !text.is_empty() {
        content.push(text);
    }
}

fn unauthorized(owner: Option<String>, user: Option<&UserId>) -> AppError {
    AppError::Unauthorized {
        owner,
        requesting_user: user.map(UserId::to_string).unwrap_or_default(),
    }
}
