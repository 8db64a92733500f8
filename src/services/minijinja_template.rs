use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::ports::PromptTemplate;

const DEFAULT_TEMPLATE_NAME: &str = "default";

/// Instruction first, then the examples and sources sections. A section is
/// only emitted when it has entries.
const DEFAULT_TEMPLATE: &str = r#"{{ instruction }}
{%- if examples %}

==== Examples ====
{%- for example in examples %}
{{ example }}
{%- endfor %}
{%- endif %}
{%- if sources %}

==== Sources ====
{%- for source in sources %}
{{ source }}
{%- endfor %}
{%- endif %}"#;

/// Prompt template rendered with Minijinja.
///
/// Custom templates see three variables: `instruction` (string), `examples`
/// and `sources` (lists of strings).
#[derive(Debug, Clone)]
pub struct MinijinjaTemplate {
    name: String,
    source: String,
}

impl Default for MinijinjaTemplate {
    fn default() -> Self {
        Self { name: DEFAULT_TEMPLATE_NAME.to_string(), source: DEFAULT_TEMPLATE.to_string() }
    }
}

impl MinijinjaTemplate {
    /// Use a caller-supplied template. `name` only appears in error messages.
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: source.into() }
    }
}

impl PromptTemplate for MinijinjaTemplate {
    fn render(
        &self,
        instruction: &str,
        examples: &[String],
        source_content: &[String],
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        let ctx = context! {
            instruction => instruction,
            examples => examples,
            sources => source_content,
        };

        env.render_str(&self.source, ctx).map_err(|err| AppError::TemplateRender {
            template: self.name.clone(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();
