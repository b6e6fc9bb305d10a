//! Askama-backed rendering: primitives, section composers, and page templates.

pub mod primitives;
pub mod sections;
pub mod views;
