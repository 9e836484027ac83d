use std::path::Path;

use anyhow::Context;
use eframe::egui;

use planck_plot::app::EmittanceApp;
use planck_plot::color::curve_palette;
use planck_plot::physics::spectra::{compute_spectra, GridSpec};
use planck_plot::render::figure::save_figure;

/// Edit this list to plot other curves; keep it sorted ascending.
const TEMPERATURES_K: [f64; 8] = [
    3500.0, 4000.0, 4500.0, 5000.0, 5500.0, 6000.0, 6500.0, 7000.0,
];

/// Fixed output name, written to the working directory.
const OUTPUT_FILE: &str = "blackbody_emittance.png";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // compute grid → curves → peaks
    let spectra = compute_spectra(&TEMPERATURES_K, &GridSpec::default())
        .context("computing black-body spectra")?;
    for curve in &spectra.curves {
        log::info!(
            "{} K: peak at {:.1} nm ({:.3e} W/m³)",
            curve.temperature_k,
            curve.peak.wavelength_nm,
            curve.peak.intensity
        );
    }

    // render → save
    let palette = curve_palette(spectra.len());
    save_figure(Path::new(OUTPUT_FILE), &spectra, &palette)
        .with_context(|| format!("saving figure to {OUTPUT_FILE}"))?;
    log::info!("figure written to {OUTPUT_FILE}");

    // display (best-effort; headless environments have no window to open)
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    let status = Some(format!("saved {OUTPUT_FILE}"));
    if let Err(err) = eframe::run_native(
        "Black-body Emittance",
        options,
        Box::new(move |_cc| Ok(Box::new(EmittanceApp::new(spectra, palette, status)))),
    ) {
        log::warn!("interactive display unavailable: {err}");
    }

    Ok(())
}
