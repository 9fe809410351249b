//! Infrastructure layer
//!
//! This module handles external integrations:
//! - TUI foundation (crossterm terminal and a test backend)
//! - CLI argument processing
//! - Layered configuration
//! - The environment that makes global markers visible

pub mod cli;
pub mod config;
pub mod environment;
pub mod tui;
