//! Utility module - terminal styling helpers

pub mod styling;

pub use styling::*;
