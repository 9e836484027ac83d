use eframe::egui::{self, RichText, Ui};

use crate::physics::spectra::SpectraSet;
use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: summary, display toggles, status.
pub fn top_bar(ui: &mut Ui, spectra: &SpectraSet, view: &mut ViewState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Black-body emittance").strong());

        ui.separator();

        ui.label(format!(
            "{} temperatures, {} wavelength samples",
            spectra.len(),
            spectra.wavelengths_m.len()
        ));

        ui.separator();

        if ui
            .selectable_label(view.show_bands, "Visible bands")
            .clicked()
        {
            view.show_bands = !view.show_bands;
        }
        if ui
            .selectable_label(view.show_peaks, "Peak markers")
            .clicked()
        {
            view.show_peaks = !view.show_peaks;
        }

        if let Some(msg) = &view.status_message {
            ui.separator();
            ui.label(msg);
        }
    });
}
