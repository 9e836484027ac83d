use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::color::{Rgb8, VISIBLE_BANDS};
use crate::physics::constants::{VISIBLE_MAX_NM, VISIBLE_MIN_NM};
use crate::physics::spectra::SpectraSet;

/// Output bitmap size in pixels.
pub const FIGURE_SIZE: (u32, u32) = (1600, 800);

type Panel<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Compose the two-panel figure (full spectrum + zoom around the extrema)
/// and write it to `path` as a PNG. Both panels share the same Y range.
pub fn save_figure(path: &Path, spectra: &SpectraSet, palette: &[Rgb8]) -> Result<()> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).context("filling figure background")?;
    let titled = root
        .titled("Black-body spectral emittance", ("sans-serif", 36))
        .context("drawing figure title")?;

    let panels = titled.split_evenly((1, 2));
    let y_max = spectra.max_intensity() * 1.05;

    draw_full_panel(&panels[0], spectra, palette, y_max).context("drawing full-spectrum panel")?;
    draw_zoom_panel(&panels[1], spectra, palette, y_max).context("drawing zoom panel")?;

    root.present().context("writing figure to disk")?;
    Ok(())
}

fn draw_full_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    spectra: &SpectraSet,
    palette: &[Rgb8],
    y_max: f64,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption("Full spectrum", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(0.0..2501.0, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Wavelength λ (nm)")
        .y_desc("Spectral emittance (W/m³)")
        .draw()?;

    shade_visible_bands(&mut chart, 0.0, 2501.0, y_max)?;
    draw_curves(&mut chart, spectra, palette, 0.0, 2501.0, true)?;
    draw_peak_markers(&mut chart, spectra)?;
    draw_visible_bounds(&mut chart, 0.0, 2501.0, y_max)?;

    // Region labels near the top of the panel.
    let label_y = y_max * 0.93;
    let style = ("sans-serif", 16).into_font();
    chart.draw_series(std::iter::once(Text::new(
        "Ultraviolet",
        (50.0, label_y),
        style.clone(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "Visible",
        (460.0, label_y),
        style.clone(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "Infrared",
        (850.0, label_y),
        style,
    )))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_zoom_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    spectra: &SpectraSet,
    palette: &[Rgb8],
    y_max: f64,
) -> Result<()> {
    let (lo, hi) = spectra.zoom_bounds_nm();

    let mut chart = ChartBuilder::on(area)
        .caption("Zoom around the extrema", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(lo..hi, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Wavelength λ (nm)")
        .draw()?;

    shade_visible_bands(&mut chart, lo, hi, y_max)?;
    draw_curves(&mut chart, spectra, palette, lo, hi, false)?;
    draw_peak_markers(&mut chart, spectra)?;
    draw_visible_bounds(&mut chart, lo, hi, y_max)?;
    draw_peak_lines(&mut chart, spectra, y_max)?;

    Ok(())
}

/// Overlay of the visible spectrum, clipped to the panel's X range.
fn shade_visible_bands(chart: &mut Panel<'_, '_>, lo: f64, hi: f64, y_max: f64) -> Result<()> {
    chart.draw_series(
        VISIBLE_BANDS
            .iter()
            .filter(|&&(a, b, _)| b > lo && a < hi)
            .map(|&(a, b, (r, g, bl))| {
                Rectangle::new(
                    [(a.max(lo), 0.0), (b.min(hi), y_max)],
                    RGBColor(r, g, bl).mix(0.35).filled(),
                )
            }),
    )?;
    Ok(())
}

fn draw_curves(
    chart: &mut Panel<'_, '_>,
    spectra: &SpectraSet,
    palette: &[Rgb8],
    lo: f64,
    hi: f64,
    with_legend: bool,
) -> Result<()> {
    for (curve, &(r, g, b)) in spectra.curves.iter().zip(palette) {
        let color = RGBColor(r, g, b);
        let series = chart.draw_series(LineSeries::new(
            spectra
                .wavelengths_m
                .iter()
                .zip(&curve.intensity)
                .map(|(&l, &i)| (l * 1e9, i))
                .filter(|&(nm, _)| nm >= lo && nm <= hi),
            color.stroke_width(2),
        ))?;
        if with_legend {
            series
                .label(format!("{} K", curve.temperature_k))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });
        }
    }
    Ok(())
}

/// Semi-transparent marker on each curve's maximum.
fn draw_peak_markers(chart: &mut Panel<'_, '_>, spectra: &SpectraSet) -> Result<()> {
    chart.draw_series(spectra.curves.iter().map(|c| {
        Circle::new(
            (c.peak.wavelength_nm, c.peak.intensity),
            4,
            BLACK.mix(0.5).filled(),
        )
    }))?;
    Ok(())
}

/// Dashed vertical lines at the 380/780 nm visible-band edges.
fn draw_visible_bounds(chart: &mut Panel<'_, '_>, lo: f64, hi: f64, y_max: f64) -> Result<()> {
    for x in [VISIBLE_MIN_NM, VISIBLE_MAX_NM] {
        if x < lo || x > hi {
            continue;
        }
        chart.draw_series(DashedLineSeries::new(
            vec![(x, 0.0), (x, y_max)],
            6,
            4,
            BLACK.stroke_width(1),
        ))?;
    }
    Ok(())
}

/// Solid vertical reference line at every peak (zoom panel).
fn draw_peak_lines(chart: &mut Panel<'_, '_>, spectra: &SpectraSet, y_max: f64) -> Result<()> {
    for curve in &spectra.curves {
        let x = curve.peak.wavelength_nm;
        chart.draw_series(LineSeries::new(
            vec![(x, 0.0), (x, y_max)],
            BLACK.mix(0.3),
        ))?;
    }
    Ok(())
}
