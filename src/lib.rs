//! Dialog Prompt: terminal client for a remote dialog service.

pub mod actions;
pub mod config;
pub mod dialog;
pub mod dispatch;
pub mod docs;
pub mod error;
pub mod session;
pub mod turn;
