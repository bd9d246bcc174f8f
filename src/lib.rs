#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set takes a point on the complex plane and
//! repeatedly multiplies it by itself, measuring how quickly that
//! number goes to infinity.  This "velocity" -- the escape time -- is
//! the number used to render the image: each pixel of the output maps
//! to a point, each point to an escape count, each count to a color.
//!
//! Every pixel is independent of every other, which makes the problem
//! pleasantly parallel, but the cost per pixel is anything but
//! uniform: points far outside the set escape in a step or two, while
//! points inside grind through the full iteration cap.  The engine
//! here deals with that by handing out rows from a shared claim queue
//! instead of pre-splitting the image, so fast workers just take more
//! rows.  The finished raster is serialized as a plain-text PPM.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
extern crate num;

pub mod errors;
pub mod escape;
pub mod palette;
pub mod plane;
pub mod ppm;
pub mod render;

pub use errors::RenderError;
pub use palette::{Color, Palette};
pub use plane::{Grid, Pixel, Viewport};
pub use render::{RasterBuffer, RenderJob};
