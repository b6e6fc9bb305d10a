//! Application services layer.

pub mod clock;
pub mod embed;
pub mod error;
pub mod page;
pub mod stream;
