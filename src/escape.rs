//! The escape-time test at the heart of the renderer.

use num::Complex;

/// This is our classic iterator function: the number of iterations of
/// z = z^2 + c it took for the orbit of `c` to leave the circle of
/// radius 2, or `limit` if it never did.  The magnitude is compared in
/// squared form to skip the square root.  The bound is checked before
/// the orbit advances, so a point already outside the circle after one
/// step reports 1, and the origin reports `limit`.
///
/// A pure function of its arguments, which is what makes it safe to
/// evaluate from as many threads as you like.
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let mut z = Complex { re: 0.0, im: 0.0 };
    for i in 0..limit {
        if z.norm_sqr() > 4.0 {
            return i;
        }
        z = z * z + c;
    }
    limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_origin_never_escapes() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 1000), 1000);
    }

    #[test]
    fn a_period_two_point_never_escapes() {
        // -1 cycles between -1 and 0 forever.
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 1000), 1000);
    }

    #[test]
    fn a_far_exterior_point_escapes_on_the_first_step() {
        assert_eq!(escape_time(Complex::new(3.0, 3.0), 1000), 1);
        assert_eq!(escape_time(Complex::new(0.0, 2.5), 1000), 1);
    }

    #[test]
    fn the_boundary_of_the_escape_circle_is_inside() {
        // |z|^2 == 4.0 exactly does not count as escaped; c = 2 takes
        // one more step.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 1000), 2);
    }
}
