//! Domain layer: content tables, anchors, and interactive state.

pub mod anchors;
pub mod content;
pub mod error;
pub mod icons;
pub mod state;
