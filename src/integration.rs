//! Integration layer
//!
//! Wires the terminal, the update loop, rendering and command execution
//! together.

pub mod app_runner;
