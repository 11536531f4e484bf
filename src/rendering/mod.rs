//! Source Rendering
//!
//! Rewrites the text of one compiled module: strips legacy decorator
//! metadata, injects generated class definitions, maintains the
//! import/export/constant statement blocks and flips runtime-variant
//! switch markers. All edits go through a [`patch_buffer::PatchBuffer`]
//! and are applied in one materialization step per module.

pub mod error;
pub mod formatter;
pub mod patch_buffer;
pub mod renderer;

pub use error::RenderingError;
pub use formatter::RenderingFormatter;
pub use patch_buffer::PatchBuffer;
pub use renderer::{RenderJob, Renderer};
