//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components that draw `AppState` and build the frame's element tree
//! - Reusable widgets
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod widgets;
