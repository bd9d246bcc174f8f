//! The conditions that abort a render run.  There is deliberately no
//! per-pixel error: the escape test and the palettes are total over
//! their domains, so the only things that can go wrong are being
//! handed an impossible raster or being unable to write the result.

use std::io;

/// A fatal render condition.  None of these are retried; the run
/// reports the condition and terminates without producing a partial
/// artifact.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The requested raster has a zero-length axis.
    #[fail(display = "image dimensions {}x{} describe an empty raster", width, height)]
    EmptyGrid {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The requested raster has more slots than the address space can
    /// describe, so the buffer cannot be allocated.
    #[fail(display = "image dimensions {}x{} overflow the raster buffer", width, height)]
    BufferTooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The output destination could not be opened or written.
    #[fail(display = "could not write image to {}: {}", path, cause)]
    Sink {
        /// The destination that was refused.
        path: String,
        /// The underlying I/O failure.
        #[fail(cause)]
        cause: io::Error,
    },
}
