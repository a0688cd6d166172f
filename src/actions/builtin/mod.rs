//! Built-in action handlers.

pub mod search_document;

pub use search_document::SearchDocumentAction;
