//! Documentation search action.

use std::sync::Arc;

use async_trait::async_trait;

use crate::actions::action::{ActionHandler, require_str};
use crate::docs::{DocumentTable, render_value};
use crate::error::ActionError;

/// Looks up documentation links for a topic.
pub struct SearchDocumentAction {
    docs: Arc<DocumentTable>,
}

impl SearchDocumentAction {
    pub const NAME: &'static str = "search_document";

    pub fn new(docs: Arc<DocumentTable>) -> Self {
        Self { docs }
    }
}

#[async_trait]
impl ActionHandler for SearchDocumentAction {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Find documentation links related to a topic"
    }

    async fn execute(&self, argument: &serde_json::Value) -> Result<String, ActionError> {
        let topic = require_str(Self::NAME, argument)?;
        let links = self
            .docs
            .lookup(topic)
            .map_err(|_| ActionError::TopicNotFound(topic.to_string()))?;
        tracing::debug!(topic, "Documentation topic resolved");
        Ok(render_value(links))
    }
}
