//! Action abstraction for local side effects requested by the dialog.

pub mod action;
pub mod builtin;
pub mod registry;

pub use action::*;
pub use registry::ActionRegistry;
