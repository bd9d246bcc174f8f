//! Maps escape counts to colors.  Two formulas are available, both
//! inherited from earlier renderers; they differ most visibly in how
//! they treat the interior of the set, so the choice is exposed as
//! configuration rather than picking a winner.

use std::str::FromStr;

/// An 8-bit RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

/// A coloring strategy.  Both variants are total over iteration counts
/// in 0..=limit and produce channels in 0..=255 by construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Channels as fractions of the iteration cap: r = 255n/cap,
    /// g = 255((2n) mod cap)/cap, b = 255((3n) mod cap)/cap.  The
    /// interior (n == cap) gets no special case and comes out pure
    /// red.
    Fractional,
    /// Channels as residues: (n mod 256, 5n mod 256, 10n mod 256),
    /// with the interior collapsed to black.
    Modulo,
}

impl Palette {
    /// The color for an escape count of `n` under a cap of `limit`.
    pub fn color(&self, n: usize, limit: usize) -> Color {
        match *self {
            Palette::Fractional => Color(
                ((255 * n) / limit) as u8,
                ((255 * ((2 * n) % limit)) / limit) as u8,
                ((255 * ((3 * n) % limit)) / limit) as u8,
            ),
            Palette::Modulo => {
                if n == limit {
                    Color(0, 0, 0)
                } else {
                    Color((n % 256) as u8, ((5 * n) % 256) as u8, ((10 * n) % 256) as u8)
                }
            }
        }
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Palette, String> {
        match s {
            "fractional" => Ok(Palette::Fractional),
            "modulo" => Ok(Palette::Modulo),
            other => Err(format!("unknown palette {:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_maps_the_extremes() {
        assert_eq!(Palette::Fractional.color(0, 1000), Color(0, 0, 0));
        // No interior special case: the cap saturates red and wraps
        // the other channels to zero.
        assert_eq!(Palette::Fractional.color(1000, 1000), Color(255, 0, 0));
    }

    #[test]
    fn modulo_blacks_out_the_interior() {
        assert_eq!(Palette::Modulo.color(1000, 1000), Color(0, 0, 0));
        assert_eq!(Palette::Modulo.color(7, 1000), Color(7, 35, 70));
    }

    #[test]
    fn channels_stay_in_range_for_every_count() {
        // The u8 return type would mask an out-of-range intermediate,
        // so check the arithmetic before the narrowing cast.
        let limit = 97;
        for n in 0..=limit {
            assert!((255 * n) / limit <= 255);
            assert!((255 * ((2 * n) % limit)) / limit <= 255);
            assert!((255 * ((3 * n) % limit)) / limit <= 255);
            for palette in &[Palette::Fractional, Palette::Modulo] {
                // Exercise both formulas at every count; the cast
                // cannot panic, this is about the construction.
                let _ = palette.color(n, limit);
            }
        }
    }

    #[test]
    fn palettes_parse_by_name() {
        assert_eq!("fractional".parse::<Palette>(), Ok(Palette::Fractional));
        assert_eq!("modulo".parse::<Palette>(), Ok(Palette::Modulo));
        assert!("plasma".parse::<Palette>().is_err());
    }
}
