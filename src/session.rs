//! Conversation loop.
//!
//! ```text
//! Init ──probe──▶ AwaitingInput ──line──▶ Sending ──reply──▶ AwaitingInput
//!                      │
//!                      └── quit word / EOF ──▶ Terminated
//! ```
//!
//! Every turn is all-or-nothing: a transport, parse or dispatch failure
//! ends the session with that error.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::Instrument;
use uuid::Uuid;

use crate::dialog::{DialogService, MessageRequest};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::turn::{extract_context, parse_turn};

/// Inputs that end the session, compared case-insensitively.
pub const QUIT_WORDS: &[&str] = &["exit", "quit", "q", "n"];

/// Prompt shown before each read.
pub const PROMPT: &str = "You> ";

const CONNECTING_BANNER: &str = "*** Connecting to your workspace...";
const USAGE_HINT: &str = "(say anything... type quit to quit)";

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    AwaitingInput,
    Sending,
    Terminated,
}

/// Whether `line` asks to end the session.
pub fn is_quit(line: &str) -> bool {
    let line = line.to_lowercase();
    QUIT_WORDS.contains(&line.as_str())
}

/// One interactive dialog session.
pub struct Session {
    id: Uuid,
    service: Arc<dyn DialogService>,
    dispatcher: Dispatcher,
    state: SessionState,
    context: Option<serde_json::Value>,
    pending: Option<String>,
    turns: usize,
}

impl Session {
    pub fn new(service: Arc<dyn DialogService>, dispatcher: Dispatcher) -> Self {
        Self {
            id: Uuid::new_v4(),
            service,
            dispatcher,
            state: SessionState::Init,
            context: None,
            pending: None,
            turns: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Context token from the most recent turn.
    pub fn context(&self) -> Option<&serde_json::Value> {
        self.context.as_ref()
    }

    /// Number of completed turns, including the opening probe.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Drive the session until a quit word, end of input, or an error.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin + Send,
        W: Write + Send,
    {
        let span = tracing::info_span!("session", id = %self.id, service = self.service.name());
        self.drive(input, out).instrument(span).await
    }

    async fn drive<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin + Send,
        W: Write + Send,
    {
        let mut lines = input.lines();

        loop {
            match self.state {
                SessionState::Init => {
                    writeln!(out, "{}", CONNECTING_BANNER)?;
                    self.turn(MessageRequest::initial(), out).await?;
                    writeln!(out, "{}", USAGE_HINT)?;
                    self.state = SessionState::AwaitingInput;
                }
                SessionState::AwaitingInput => {
                    write!(out, "{}", PROMPT)?;
                    out.flush()?;

                    match lines.next_line().await? {
                        Some(line) if is_quit(&line) => {
                            tracing::debug!("Quit requested");
                            self.state = SessionState::Terminated;
                        }
                        Some(line) => {
                            self.pending = Some(line);
                            self.state = SessionState::Sending;
                        }
                        None => {
                            tracing::debug!("End of input");
                            writeln!(out)?;
                            self.state = SessionState::Terminated;
                        }
                    }
                }
                SessionState::Sending => {
                    let text = self.pending.take().unwrap_or_default();
                    // Init always leaves a context behind before input is read
                    let context = self.context.clone().unwrap_or_default();
                    let request = MessageRequest::user_turn(text, context);
                    self.turn(request, out).await?;
                    self.state = SessionState::AwaitingInput;
                }
                SessionState::Terminated => {
                    tracing::info!(turns = self.turns, "Session ended");
                    out.flush()?;
                    return Ok(());
                }
            }
        }
    }

    /// Send one request, dispatch the reply, then adopt the returned context.
    async fn turn<W: Write + Send>(&mut self, request: MessageRequest, out: &mut W) -> Result<()> {
        let response = self.service.message(request).await?;

        let result = parse_turn(&response)?;
        self.dispatcher.dispatch(&result, out).await?;

        self.context = Some(extract_context(&response)?);

        self.turns += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_words_case_insensitive() {
        for word in ["exit", "QUIT", "Q", "n", "N", "Exit"] {
            assert!(is_quit(word), "{word} should quit");
        }
    }

    #[test]
    fn test_other_input_does_not_quit() {
        for word in ["", "no", "quit now", " q", "exit ", "yes", "hello"] {
            assert!(!is_quit(word), "{word:?} should not quit");
        }
    }
}
