//! Bitmap-to-vector tracing backends
//!
//! Tracing itself is delegated to an external program; this module only
//! defines how the pipeline hands a mask to it.

pub mod potrace;

pub use potrace::PotraceTracer;

use std::path::Path;

use crate::error::ConvertError;

/// Converts a bi-level mask into SVG markup on disk
pub trait Tracer {
    /// Name of the backend (for logging)
    fn name(&self) -> &str;

    /// Check if the backend can run on this system
    fn is_available(&self) -> bool;

    /// Trace `mask` into a smoothed SVG written to `svg`
    fn trace(&self, mask: &Path, svg: &Path) -> Result<(), ConvertError>;
}
