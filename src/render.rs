// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The rendering engine.  A RenderJob fixes everything that determines
//! the image -- the grid, the viewport, the iteration cap, and the
//! palette -- and can then be rendered on one thread or many.  The
//! image is a pure function of the job: per-pixel cost varies by three
//! orders of magnitude across the plane, but nothing about the output
//! depends on which worker computed which row, and the tests hold the
//! engine to that.
//!
//! Work is handed out a row at a time from a shared claim queue.  A
//! worker that lands on a cheap exterior row comes straight back for
//! another; a worker stuck grinding through the interior keeps its one
//! row and nobody waits on it.  Static equal splits would leave the
//! exterior workers idle while the interior workers grind, which is
//! why the queue is dynamic.  Each claim carries the mutable slice for
//! exactly that row, so workers never share a slot and the buffer
//! needs no locking on the hot path; the only lock guards the queue
//! itself, and the only barrier is the scope exit joining the workers.

extern crate crossbeam;

use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use errors::RenderError;
use escape::escape_time;
use palette::{Color, Palette};
use plane::{Grid, Pixel, Viewport};

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, Color>>>>;

/// A fully populated raster.  One slot per pixel, row-major, written
/// exactly once per slot during rendering and read-only afterward.
pub struct RasterBuffer {
    grid: Grid,
    pixels: Vec<Color>,
}

impl RasterBuffer {
    /// One up-front allocation, before any worker starts.  `Grid::new`
    /// has already rejected shapes this cannot hold.
    fn allocate(grid: Grid) -> RasterBuffer {
        RasterBuffer {
            grid,
            pixels: vec![Color(0, 0, 0); grid.len()],
        }
    }

    /// The dimensions this buffer was rendered at.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The rows of the image, top to bottom, each `width` slots long.
    pub fn rows(&self) -> ::std::slice::Chunks<Color> {
        self.pixels.chunks(self.grid.width)
    }

    /// Every slot in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

/// Everything that determines the output image.  Two jobs with equal
/// fields render bit-identical rasters regardless of thread count.
#[derive(Copy, Clone, Debug)]
pub struct RenderJob {
    /// Raster dimensions.
    pub grid: Grid,
    /// The pixel-to-complex-plane framing.
    pub viewport: Viewport,
    /// Escape-test iteration cap.  Must be positive.
    pub limit: usize,
    /// The coloring strategy.
    pub palette: Palette,
}

impl RenderJob {
    /// Bundles a configuration.  The grid has already been validated
    /// by its own constructor.
    pub fn new(grid: Grid, viewport: Viewport, limit: usize, palette: Palette) -> RenderJob {
        RenderJob {
            grid,
            viewport,
            limit,
            palette,
        }
    }

    /// Computes one row into its slice of the buffer.
    fn render_row(&self, y: usize, row: &mut [Color]) {
        for (x, slot) in row.iter_mut().enumerate() {
            let c = self.viewport.pixel_to_point(&Pixel(x, y));
            let n = escape_time(c, self.limit);
            *slot = self.palette.color(n, self.limit);
        }
    }

    /// The single-threaded renderer: every row in order, no queue.
    pub fn render_single(&self) -> Result<RasterBuffer, RenderError> {
        let mut buffer = RasterBuffer::allocate(self.grid);
        for (y, row) in buffer.pixels.chunks_mut(self.grid.width).enumerate() {
            self.render_row(y, row);
        }
        Ok(buffer)
    }

    /// The multi-threaded renderer.  Spawns `threads` workers over a
    /// shared queue of unclaimed rows; each worker claims the next row,
    /// computes it fully, and comes back for another until the queue
    /// runs dry.  Returns only after every worker has joined.
    pub fn render(&self, threads: usize) -> Result<RasterBuffer, RenderError> {
        let threads = threads.max(1);
        let mut buffer = RasterBuffer::allocate(self.grid);
        let width = self.grid.width;
        crossbeam::scope(|spawner| {
            let rows: RowQueue = Arc::new(Mutex::new(buffer.pixels.chunks_mut(width).enumerate()));
            for _ in 0..threads {
                let rows = rows.clone();
                spawner.spawn(move |_| loop {
                    let claim = { rows.lock().unwrap().next() };
                    match claim {
                        Some((y, row)) => self.render_row(y, row),
                        None => break,
                    }
                });
            }
        })
        .unwrap();
        Ok(buffer)
    }
}
