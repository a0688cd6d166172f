//! Action registry mapping dialog action names to handlers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::actions::action::ActionHandler;
use crate::actions::builtin::SearchDocumentAction;
use crate::docs::DocumentTable;

/// Registry of available action handlers.
///
/// Built once at startup and shared read-only with the dispatcher.
pub struct ActionRegistry {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl ActionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry with every built-in handler registered.
    pub fn with_builtins(docs: Arc<DocumentTable>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SearchDocumentAction::new(docs)));
        registry
    }

    /// Register a handler. A handler with the same name is replaced.
    pub fn register(&mut self, handler: Arc<dyn ActionHandler>) {
        let name = handler.name().to_string();
        if self.handlers.insert(name.clone(), handler).is_some() {
            tracing::warn!(action = %name, "Replaced existing action handler");
        } else {
            tracing::debug!("Registered action: {}", name);
        }
    }

    /// Get a handler by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ActionHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a handler exists.
    pub fn has(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// List all handler names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name and description of every handler, sorted by name.
    pub fn descriptions(&self) -> Vec<(String, String)> {
        self.list()
            .into_iter()
            .filter_map(|name| {
                let description = self.handlers.get(&name)?.description().to_string();
                Some((name, description))
            })
            .collect()
    }

    /// Get the number of registered handlers.
    pub fn count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
