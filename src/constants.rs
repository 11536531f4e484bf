//! Shared Constants
//!
//! Naming conventions baked into the legacy compiled output.

/// Suffix identifying the legacy-runtime variant of a switchable declaration.
pub const PRE_R3_MARKER: &str = "__PRE_R3__";

/// Suffix identifying the new-runtime variant of a switchable declaration.
pub const POST_R3_MARKER: &str = "__POST_R3__";
