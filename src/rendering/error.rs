//! Rendering Errors

use thiserror::Error;

/// A structural error raised while injecting generated definitions: the
/// compiled output did not have the shape the legacy emitter is known to
/// produce. Carries the class name and absolute module path for
/// user-facing diagnostics; aborts only the injection it was raised from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderingError {
    #[error("Compiled class declaration is not inside an IIFE: {name} in {path}")]
    ClassNotWrappedInIife { name: String, path: String },

    #[error("Compiled class wrapper IIFE does not have a return statement: {name} in {path}")]
    MissingReturnStatement { name: String, path: String },
}
