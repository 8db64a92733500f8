mod document_collection;
mod text_source;

pub use document_collection::{DEFAULT_OWNER_KEY, Document, DocumentCollectionSource};
pub use text_source::TextSource;
