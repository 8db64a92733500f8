use crate::domain::{AccessControlPolicy, UserId};
use crate::ports::{PromptFilter, PromptTemplate, Source};
use crate::services::MinijinjaTemplate;

/// Everything an assembly call needs besides the instruction and history.
///
/// Each `PromptRequest::new()` starts from its own empty lists, the default
/// template, no requesting user and [`AccessControlPolicy::EnforceAll`].
pub struct PromptRequest {
    pub examples: Vec<String>,
    pub sources: Vec<Box<dyn Source>>,
    pub filters: Vec<Box<dyn PromptFilter>>,
    pub template: Box<dyn PromptTemplate>,
    pub requesting_user: Option<UserId>,
    pub policy: AccessControlPolicy,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self {
            examples: Vec::new(),
            sources: Vec::new(),
            filters: Vec::new(),
            template: Box::new(MinijinjaTemplate::default()),
            requesting_user: None,
            policy: AccessControlPolicy::default(),
        }
    }
}

impl std::fmt::Debug for PromptRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptRequest")
            .field("examples", &self.examples.len())
            .field("sources", &self.sources.len())
            .field("filters", &self.filters.iter().map(|filter| filter.name()).collect::<Vec<_>>())
            .field("requesting_user", &self.requesting_user)
            .field("policy", &self.policy)
            .finish()
    }
}

impl PromptRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }

    /// Append a source. Sources are queried in the order they are added.
    pub fn with_source(mut self, source: impl Source + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Append a filter. Filters run in the order they are added.
    pub fn with_filter(mut self, filter: impl PromptFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn with_template(mut self, template: impl PromptTemplate + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    pub fn for_user(mut self, user: UserId) -> Self {
        self.requesting_user = Some(user);
        self
    }

    pub fn with_policy(mut self, policy: AccessControlPolicy) -> Self {
        self.policy = policy;
        self
    }
}
