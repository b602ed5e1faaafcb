//! CLI command implementations.

pub mod common;
pub mod compose;
pub mod equiv;
pub mod inspect;
pub mod version;
