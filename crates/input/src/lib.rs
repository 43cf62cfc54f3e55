//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values for a
//! game session and recognises the quit chord. Quitting is not a session
//! command; the binary owns its own lifetime.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, should_quit};
