//! Shared Utilities

pub mod path;
