#![deny(clippy::all)]

//! Compatibility Compiler — source rewrite core
//!
//! Migrates previously-compiled library modules from a legacy compiled
//! representation into the modern one, without access to the original
//! sources. The crate owns the rewrite engine: given a parsed module and
//! the classes/decorators/switch markers discovered by an upstream
//! analysis pass, it produces a precisely edited copy of the module text
//! by composing deferred, offset-anchored edits over one immutable
//! source string.
//!
//! Parsing, decoration analysis, definition code generation, bundling
//! and file I/O are external collaborators; this crate only consumes
//! their results through the read-only models in [`ast`] and
//! [`analysis`].

pub mod analysis;
pub mod ast;
pub mod constants;
pub mod rendering;
pub mod testing;
pub mod utils;

pub use rendering::error::RenderingError;
pub use rendering::formatter::RenderingFormatter;
pub use rendering::patch_buffer::PatchBuffer;
pub use rendering::renderer::{RenderJob, Renderer};
