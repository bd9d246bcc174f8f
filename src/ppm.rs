//! Plain-text PPM ("P3") serialization.  The format is a two-character
//! tag, the dimensions, the maximum channel value, and then one line
//! of space-separated r g b triples per image row.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use errors::RenderError;
use render::RasterBuffer;

/// Writes the header and the row-major body of a completed buffer to
/// any sink.
pub fn encode<W: Write>(out: &mut W, buffer: &RasterBuffer) -> io::Result<()> {
    let grid = buffer.grid();
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", grid.width, grid.height)?;
    writeln!(out, "255")?;
    for row in buffer.rows() {
        writeln!(
            out,
            "{}",
            row.iter()
                .format_with(" ", |c, f| f(&format_args!("{} {} {}", c.0, c.1, c.2)))
        )?;
    }
    Ok(())
}

/// Writes a completed buffer to a file.  The file is not created until
/// the buffer is fully rendered, so a refused or failing sink leaves
/// no partial artifact behind from the computation's point of view.
pub fn write_file(path: &Path, buffer: &RasterBuffer) -> Result<(), RenderError> {
    let sink = |cause: io::Error| RenderError::Sink {
        path: path.display().to_string(),
        cause,
    };
    let file = File::create(path).map_err(&sink)?;
    let mut out = BufWriter::new(file);
    encode(&mut out, buffer).map_err(&sink)?;
    out.flush().map_err(&sink)?;
    Ok(())
}
