//! UI configuration
//!
//! Key bindings for the portfolio view.

pub mod keybindings;

pub use keybindings::{Action, KeyBindings};
