//! UI Components
//!
//! TUI widgets for the password field screen.

pub mod password_field;
pub mod statusline;

// Re-exports
pub use password_field::PasswordFieldWidget;
pub use statusline::{HelpBar, MessageType, StatusLine};
