//! Contains the Grid and Viewport types, which together describe the
//! relationship between a rectangle on the integral plane with an
//! origin at 0,0 and a region of the complex plane.  The Viewport is
//! the half of that pair you may want to swap out: it is nothing more
//! than an origin and a pair of per-axis step sizes, so any
//! rectangular framing of the complex plane can be expressed with it.

use num::Complex;

use errors::RenderError;

/// Describes the width and height of the integral plane.  The plane is
/// assumed to start at 0,0 and all pixel coordinates are non-negative,
/// so the two dimensions describe it completely.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of pixel columns.
    pub width: usize,
    /// Number of pixel rows.
    pub height: usize,
}

/// Describes the x, y of a point on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel(pub usize, pub usize);

impl Grid {
    /// Constructor.  Rejects rasters with a zero-length axis and
    /// rasters whose slot count cannot be addressed, since both make
    /// the buffer unallocatable.
    pub fn new(width: usize, height: usize) -> Result<Grid, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyGrid { width, height });
        }
        if width.checked_mul(height).is_none() {
            return Err(RenderError::BufferTooLarge { width, height });
        }
        Ok(Grid { width, height })
    }

    /// The total number of pixels in the grid.  Used to size the
    /// raster buffer.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// A Grid constructed through `new` is never empty; this exists
    /// for the usual is_empty/len pairing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps pixels on the integral plane to points on the complex plane.
/// The real part of a point is treated as the x-component and the
/// imaginary part as the y-component.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    /// The complex point pixel 0,0 maps to.
    origin: Complex<f64>,
    /// Per-axis distance between adjacent pixels, (re, im).
    scale: (f64, f64),
}

impl Viewport {
    /// An arbitrary framing: the point pixel 0,0 maps to, and the
    /// per-axis step between adjacent pixels.
    pub fn new(origin: Complex<f64>, scale: (f64, f64)) -> Viewport {
        Viewport { origin, scale }
    }

    /// The reference framing: a region 4.0 units wide centered on the
    /// origin, so pixel (w/2, h/2) lands on 0+0i.  Note that the
    /// vertical step reuses the horizontal extent -- both axes are
    /// scaled by `width` -- so the aspect ratio is only square when
    /// the grid is.  That is a property of this framing, inherited
    /// deliberately; use `square` for an aspect-corrected image.
    pub fn centered(grid: &Grid) -> Viewport {
        let step = 4.0 / grid.width as f64;
        Viewport {
            origin: Complex::new(
                -(grid.width as f64 / 2.0) * step,
                -(grid.height as f64 / 2.0) * step,
            ),
            scale: (step, step),
        }
    }

    /// A corrected framing that scales each axis by its own dimension,
    /// spanning -2..2 on both axes regardless of the grid's shape.
    pub fn square(grid: &Grid) -> Viewport {
        Viewport {
            origin: Complex::new(-2.0, -2.0),
            scale: (4.0 / grid.width as f64, 4.0 / grid.height as f64),
        }
    }

    /// Given a pixel on the integral plane, return the complex number
    /// at the equivalent location on the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.origin.re + (pixel.0 as f64) * self.scale.0,
            self.origin.im + (pixel.1 as f64) * self.scale.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_fails_on_empty_axes() {
        assert!(Grid::new(0, 4).is_err());
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn grid_fails_on_unaddressable_rasters() {
        assert!(Grid::new(usize::max_value(), 2).is_err());
    }

    #[test]
    fn grid_passes_on_good_shape() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.len(), 16);
        assert!(!grid.is_empty());
    }

    #[test]
    fn centered_viewport_puts_the_grid_center_on_the_origin() {
        let grid = Grid::new(4, 4).unwrap();
        let vp = Viewport::centered(&grid);
        assert_eq!(vp.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(vp.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(vp.pixel_to_point(&Pixel(3, 1)), Complex::new(1.0, -1.0));
    }

    #[test]
    fn centered_viewport_center_is_exact_for_inexact_steps() {
        // 4/1000 is not representable; the center must still map to
        // exactly 0+0i because the origin and the offset are the same
        // rounded product.
        let grid = Grid::new(1000, 1000).unwrap();
        let vp = Viewport::centered(&grid);
        assert_eq!(vp.pixel_to_point(&Pixel(500, 500)), Complex::new(0.0, 0.0));
    }

    #[test]
    fn centered_viewport_scales_both_axes_by_width() {
        let grid = Grid::new(8, 4).unwrap();
        let vp = Viewport::centered(&grid);
        // Vertical extent is height * 4/width = 2.0, not 4.0.
        assert_eq!(vp.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -1.0));
        assert_eq!(vp.pixel_to_point(&Pixel(8, 4)), Complex::new(2.0, 1.0));
    }

    #[test]
    fn square_viewport_scales_each_axis_by_its_own_dimension() {
        let grid = Grid::new(8, 4).unwrap();
        let vp = Viewport::square(&grid);
        assert_eq!(vp.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(vp.pixel_to_point(&Pixel(8, 4)), Complex::new(2.0, 2.0));
        assert_eq!(vp.pixel_to_point(&Pixel(4, 2)), Complex::new(0.0, 0.0));
    }
}
