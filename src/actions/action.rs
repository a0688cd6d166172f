//! The `ActionHandler` trait.

use async_trait::async_trait;

use crate::error::ActionError;

/// A locally registered handler the dialog can trigger by name.
///
/// The service sends `{"<name>": <argument>}` under `output.action`; the
/// dispatcher resolves `<name>` through the registry and calls
/// [`ActionHandler::execute`] with the argument.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Name the dialog uses to trigger this handler.
    fn name(&self) -> &str;

    /// One-line description for listings and logs.
    fn description(&self) -> &str;

    /// Run the handler and return the text to show the user.
    async fn execute(&self, argument: &serde_json::Value) -> Result<String, ActionError>;
}

/// Extract a string argument or fail with `InvalidArgument`.
pub fn require_str<'a>(
    name: &str,
    argument: &'a serde_json::Value,
) -> Result<&'a str, ActionError> {
    argument.as_str().ok_or_else(|| ActionError::InvalidArgument {
        name: name.to_string(),
        reason: format!("expected a string, got {}", argument),
    })
}
