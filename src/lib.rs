//! # Folio - a portfolio page for the terminal
//!
//! A single-screen portfolio built from cards: a profile that flips, a live
//! clock, rotating quotes and titles, and modal overlays for the longer
//! sections. The crate implements an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, including the live
//!   timers and listeners each mounted widget owns
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): applies a message and returns commands
//! - **Command** (`core::cmd`): side effects such as opening links
//! - **View** (`presentation::components`): renders the state and produces
//!   the element tree that pointer input is resolved against
//!
//! Time is virtual: a [`core::ticker::Ticker`] is advanced explicitly, so
//! every animation can be driven step by step in tests.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use folio::core::{msg::{ui::UiMsg, Msg}, state::AppState, update::update, widget::WidgetId};
//! use folio::infrastructure::config::Config;
//!
//! let mut state = AppState::new(Config::default(), 120, 40);
//! let fired: Vec<Msg> = state.ticker.advance(Duration::from_secs(2)).collect();
//! for msg in fired {
//!     update(msg, &mut state);
//! }
//!
//! update(Msg::Ui(UiMsg::OpenOverlay(WidgetId::About)), &mut state);
//! assert_eq!(state.topmost_overlay(), Some(WidgetId::About));
//! ```

#![deny(warnings)]

pub mod content;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
