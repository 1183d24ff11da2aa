//! User-facing text of the application.
//!
//! Every line printed to the terminal is a [`Message`] variant rendered through
//! its `Display` implementation, and printed through the `msg_*` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
