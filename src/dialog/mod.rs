//! Remote dialog service integration.
//!
//! The service is opaque: each turn posts optional user text plus the
//! context token from the previous turn, and gets back a JSON body with
//! `output.text`, an optional `output.action` and a fresh `context`.
//! Shape checks on that body live in [`crate::turn`].

pub mod client;
pub mod types;

pub use client::WatsonClient;
pub use types::{MessageInput, MessageRequest};

use async_trait::async_trait;

use crate::error::DialogError;

/// A conversational backend that answers one turn at a time.
#[async_trait]
pub trait DialogService: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Send one turn and return the raw response body.
    async fn message(&self, request: MessageRequest) -> Result<serde_json::Value, DialogError>;
}
