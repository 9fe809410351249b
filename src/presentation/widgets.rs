//! Reusable widgets
//!
//! Stateless ratatui widgets shared by the components.

pub mod card;
pub mod cursor;
pub mod shrink_text;
pub mod status_bar;
