//! Turn dispatcher: prints the reply and runs any requested actions.

use std::io::Write;
use std::sync::Arc;

use crate::actions::ActionRegistry;
use crate::docs::render_value;
use crate::error::DispatchError;
use crate::turn::TurnResult;

/// Label prefixed to every line the service "says".
pub const REPLY_PREFIX: &str = "Conversation> ";

/// Prints turn results and resolves their actions against a registry.
pub struct Dispatcher {
    registry: Arc<ActionRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ActionRegistry>) -> Self {
        Self { registry }
    }

    /// Print `turn`'s reply, then run each action in order and print its result.
    ///
    /// Stops at the first action that has no handler or whose handler fails;
    /// lines already written stay written.
    pub async fn dispatch<W: Write + Send>(
        &self,
        turn: &TurnResult,
        out: &mut W,
    ) -> Result<(), DispatchError> {
        writeln!(out, "{}{}", REPLY_PREFIX, turn.text)?;

        for (name, argument) in turn.action.iter().flatten() {
            let handler = self
                .registry
                .get(name)
                .ok_or_else(|| DispatchError::UnknownAction { name: name.clone() })?;

            tracing::info!(action = %name, argument = %argument, "Running action");
            let result = handler
                .execute(argument)
                .await
                .map_err(|source| DispatchError::Action {
                    name: name.clone(),
                    source,
                })?;

            writeln!(
                out,
                "{}I found the following results related to {}:\n{}",
                REPLY_PREFIX,
                render_value(argument),
                result
            )?;
        }

        out.flush()?;
        Ok(())
    }
}
