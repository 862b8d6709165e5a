//! Input Module
//!
//! Maps terminal key events onto password field actions.

pub mod keymap;

// Re-exports
pub use keymap::{field_action, key_hints, Action};
