//! Domain layer
//!
//! Pure value types shared by the core and the presentation layer:
//! - Viewport classification and breakpoint crossing detection
//! - Rotating selections and the flip card face
//! - The per-frame element tree used for hit-testing and click bubbling
//! - Text fitting for cards

pub mod element;
pub mod flip;
pub mod rotation;
pub mod text;
pub mod viewport;
