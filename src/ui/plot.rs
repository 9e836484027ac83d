use eframe::egui::{Color32, RichText, Stroke, Ui, Vec2b};
use egui_plot::{
    Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
    VLine,
};

use crate::color::{to_color32, Rgb8, VISIBLE_BANDS};
use crate::physics::constants::{VISIBLE_MAX_NM, VISIBLE_MIN_NM};
use crate::physics::spectra::{EmittanceCurve, SpectraSet};
use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Emittance panels (central area)
// ---------------------------------------------------------------------------

/// Render the two linked panels: full spectrum on the left, zoom around the
/// extrema on the right. Both include y = 0 and y = max so they share scale.
pub fn emittance_panels(ui: &mut Ui, spectra: &SpectraSet, palette: &[Rgb8], view: &ViewState) {
    let y_max = spectra.max_intensity() * 1.05;
    let (zoom_lo, zoom_hi) = spectra.zoom_bounds_nm();

    ui.columns(2, |columns| {
        spectrum_plot(
            &mut columns[0],
            "full_spectrum",
            spectra,
            palette,
            view,
            y_max,
            0.0,
            2501.0,
            true,
        );
        spectrum_plot(
            &mut columns[1],
            "zoom_extrema",
            spectra,
            palette,
            view,
            y_max,
            zoom_lo,
            zoom_hi,
            false,
        );
    });
}

/// Full series for one curve, in (nm, intensity) plot coordinates. Panels
/// always receive every sample; the x-window only shapes the default view.
fn curve_points(spectra: &SpectraSet, curve: &EmittanceCurve) -> Vec<[f64; 2]> {
    spectra
        .wavelengths_m
        .iter()
        .zip(&curve.intensity)
        .map(|(&l, &i)| [l * 1e9, i])
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn spectrum_plot(
    ui: &mut Ui,
    id: &str,
    spectra: &SpectraSet,
    palette: &[Rgb8],
    view: &ViewState,
    y_max: f64,
    x_lo: f64,
    x_hi: f64,
    full_view: bool,
) {
    let mut plot = Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("Wavelength (nm)")
        .include_x(x_lo)
        .include_x(x_hi)
        .include_y(0.0)
        .include_y(y_max)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if full_view {
        plot = plot.y_axis_label("Spectral emittance (W/m³)");
    } else {
        // Start on the included window instead of fitting all data; the
        // user can still pan and zoom out to the rest of the curves.
        plot = plot.auto_bounds(Vec2b::FALSE);
    }

    plot.show(ui, |plot_ui| {
        if view.show_bands {
            for &(a, b, rgb) in &VISIBLE_BANDS {
                let corners: PlotPoints =
                    vec![[a, 0.0], [b, 0.0], [b, y_max], [a, y_max]].into();
                plot_ui.polygon(
                    Polygon::new(corners)
                        .fill_color(to_color32(rgb).gamma_multiply(0.35))
                        .stroke(Stroke::NONE),
                );
            }
        }

        for (curve, &rgb) in spectra.curves.iter().zip(palette) {
            let points: PlotPoints = curve_points(spectra, curve).into();
            plot_ui.line(
                Line::new(points)
                    .name(format!("{} K", curve.temperature_k))
                    .color(to_color32(rgb))
                    .width(1.5),
            );
        }

        if view.show_peaks {
            let peaks: PlotPoints = spectra
                .curves
                .iter()
                .map(|c| [c.peak.wavelength_nm, c.peak.intensity])
                .collect();
            plot_ui.points(
                Points::new(peaks)
                    .shape(MarkerShape::Circle)
                    .radius(4.0)
                    .color(Color32::from_black_alpha(128))
                    .name("λ max"),
            );
        }

        // Dashed lines at the visible-band edges.
        for x in [VISIBLE_MIN_NM, VISIBLE_MAX_NM] {
            plot_ui.vline(
                VLine::new(x)
                    .color(Color32::BLACK)
                    .style(LineStyle::Dashed { length: 8.0 }),
            );
        }

        if full_view {
            // Region labels near the top of the panel.
            let label_y = y_max * 0.93;
            plot_ui.text(Text::new(
                PlotPoint::new(120.0, label_y),
                RichText::new("Ultraviolet").strong(),
            ));
            plot_ui.text(Text::new(
                PlotPoint::new(580.0, label_y),
                RichText::new("Visible").strong(),
            ));
            plot_ui.text(Text::new(
                PlotPoint::new(1000.0, label_y),
                RichText::new("Infrared").strong(),
            ));
        } else {
            // Vertical reference line at every peak.
            for curve in &spectra.curves {
                plot_ui.vline(
                    VLine::new(curve.peak.wavelength_nm)
                        .color(Color32::from_black_alpha(80)),
                );
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::curve_points;
    use crate::physics::spectra::{compute_spectra, GridSpec};

    #[test]
    fn panels_receive_every_sample_of_every_curve() {
        let spectra = compute_spectra(&[3500.0, 7000.0], &GridSpec::default()).unwrap();
        let (zoom_lo, zoom_hi) = spectra.zoom_bounds_nm();

        for curve in &spectra.curves {
            let points = curve_points(&spectra, curve);
            assert_eq!(points.len(), spectra.wavelengths_m.len());

            // The series extends past the zoom window on both sides, so
            // panning the zoom panel reveals the rest of the curve.
            assert!(points.first().unwrap()[0] < zoom_lo);
            assert!(points.last().unwrap()[0] > zoom_hi);
        }
    }
}
