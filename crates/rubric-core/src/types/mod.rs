//! Shared enumerations and collection aliases.

pub mod collections;
pub mod levels;

pub use collections::FxHashMap;
pub use levels::{Effort, Priority};
