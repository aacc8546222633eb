//! Shared helpers used across the classification and statistics modules.

pub mod math;
