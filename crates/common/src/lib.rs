//! Shared helpers for the workspace crates.

pub mod utils;
