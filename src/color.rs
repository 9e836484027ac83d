use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// 8-bit sRGB triple, shared by the egui viewer and the plotters backend.
pub type Rgb8 = (u8, u8, u8);

// ---------------------------------------------------------------------------
// Curve palette generator
// ---------------------------------------------------------------------------

/// Generates one colour per temperature with evenly spaced hues, swept from
/// blue to red so ascending temperatures read cold → hot.
pub fn curve_palette(n: usize) -> Vec<Rgb8> {
    if n == 0 {
        return Vec::new();
    }
    let span = n.saturating_sub(1).max(1) as f32;
    (0..n)
        .map(|i| {
            let hue = 240.0 - (i as f32 / span) * 240.0;
            let hsl = Hsl::new(hue, 0.85, 0.45);
            let rgb: Srgb = hsl.into_color();
            (
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Convert to the egui colour type.
pub fn to_color32((r, g, b): Rgb8) -> Color32 {
    Color32::from_rgb(r, g, b)
}

// ---------------------------------------------------------------------------
// Visible-spectrum bands
// ---------------------------------------------------------------------------

/// Hand-picked shading of the visible spectrum, 380–780 nm, as
/// `(start_nm, end_nm, colour)`. Contiguous and ascending.
pub const VISIBLE_BANDS: [(f64, f64, Rgb8); 15] = [
    (380.0, 400.0, (118, 0, 67)),
    (400.0, 420.0, (255, 0, 200)),
    (420.0, 440.0, (210, 0, 233)),
    (440.0, 460.0, (111, 0, 246)),
    (460.0, 480.0, (81, 0, 255)),
    (480.0, 500.0, (0, 233, 255)),
    (500.0, 520.0, (0, 224, 133)),
    (520.0, 540.0, (0, 201, 64)),
    (540.0, 560.0, (0, 220, 39)),
    (560.0, 580.0, (179, 255, 24)),
    (580.0, 600.0, (248, 255, 11)),
    (600.0, 620.0, (255, 145, 0)),
    (620.0, 640.0, (255, 82, 0)),
    (640.0, 700.0, (255, 0, 0)),
    (700.0, 780.0, (132, 0, 0)),
];

#[cfg(test)]
mod tests {
    use super::{curve_palette, VISIBLE_BANDS};
    use crate::physics::constants::{VISIBLE_MAX_NM, VISIBLE_MIN_NM};

    #[test]
    fn palette_has_one_colour_per_curve() {
        assert!(curve_palette(0).is_empty());
        assert_eq!(curve_palette(1).len(), 1);
        assert_eq!(curve_palette(8).len(), 8);
    }

    #[test]
    fn palette_endpoints_run_cold_to_hot() {
        let colors = curve_palette(8);
        let (r0, _, b0) = colors[0];
        let (r7, _, b7) = colors[7];
        assert!(b0 > r0, "first colour should lean blue: {:?}", colors[0]);
        assert!(r7 > b7, "last colour should lean red: {:?}", colors[7]);
    }

    #[test]
    fn visible_bands_tile_the_visible_range() {
        assert_eq!(VISIBLE_BANDS.first().unwrap().0, VISIBLE_MIN_NM);
        assert_eq!(VISIBLE_BANDS.last().unwrap().1, VISIBLE_MAX_NM);
        for pair in VISIBLE_BANDS.windows(2) {
            assert_eq!(pair[0].1, pair[1].0, "gap between {pair:?}");
        }
    }
}
