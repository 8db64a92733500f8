use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{AppError, UserId};
use crate::ports::{Source, SourceContent, is_visible_to};

/// Metadata key holding a document's owner when none is configured.
pub const DEFAULT_OWNER_KEY: &str = "user_id";

/// A retrieved document: text body plus free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub page_content: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Document {
    pub fn new(page_content: impl Into<String>) -> Self {
        Self { page_content: page_content.into(), metadata: Map::new() }
    }

    /// Attach an owner under [`DEFAULT_OWNER_KEY`].
    pub fn owned_by(mut self, owner: &UserId) -> Self {
        self.metadata.insert(DEFAULT_OWNER_KEY.to_string(), Value::String(owner.to_string()));
        self
    }

    fn owner(&self, key: &str) -> Option<String> {
        match self.metadata.get(key)? {
            Value::Null => None,
            Value::String(owner) => Some(owner.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Pre-fetched retrieval results, authorized document by document.
///
/// Visible documents are joined with a single space, in their original order.
#[derive(Debug, Clone)]
pub struct DocumentCollectionSource {
    documents: Vec<Document>,
    owner_key: String,
}

impl DocumentCollectionSource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents, owner_key: DEFAULT_OWNER_KEY.to_string() }
    }

    /// Read ownership from a different metadata key.
    pub fn with_owner_key(mut self, key: impl Into<String>) -> Self {
        self.owner_key = key.into();
        self
    }
}

impl Source for DocumentCollectionSource {
    /// In strict mode the first document owned by someone else fails the whole
    /// call, even if earlier documents were visible. In skip mode the visible
    /// subset is returned and the rest is counted as withheld.
    fn content(
        &self,
        requesting_user: Option<&UserId>,
        skip_unauthorized: bool,
    ) -> Result<SourceContent, AppError> {
        let mut visible = Vec::with_capacity(self.documents.len());
        let mut withheld = 0;
        let mut first_owner = None;

        for document in &self.documents {
            let owner = document.owner(&self.owner_key);
            if is_visible_to(owner.as_deref(), requesting_user) {
                visible.push(document.page_content.as_str());
                continue;
            }

            if !skip_unauthorized {
                return Err(AppError::Unauthorized {
                    owner,
                    requesting_user: requesting_user.map(UserId::to_string).unwrap_or_default(),
                });
            }

            withheld += 1;
            if first_owner.is_none() {
                first_owner = owner;
            }
        }

        let joined = visible.join(" ");
        if withheld == 0 {
            return Ok(SourceContent::Authorized(joined));
        }

        Ok(SourceContent::Withheld {
            visible: (!visible.is_empty()).then_some(joined),
            withheld,
            owner: first_owner,
        })
    }
}
