//! Core Elm Architecture implementation
//!
//! This module contains the widget-state and modal-overlay manager and the
//! Elm-like loop around it:
//! - Ticker, lifecycle scopes and the listener registry
//! - Reference-counted markers, pointer tracking and overlays
//! - Messages, application state, update logic and command execution
//! - Message translation layer

pub mod cmd;
pub mod cmd_executor;
pub mod markers;
pub mod msg;
pub mod overlay;
pub mod pointer;
pub mod raw_msg;
pub mod scope;
pub mod state;
pub mod ticker;
pub mod translator;
pub mod update;
pub mod widget;
