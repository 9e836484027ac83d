use eframe::egui;

use crate::color::Rgb8;
use crate::physics::spectra::SpectraSet;
use crate::state::ViewState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EmittanceApp {
    spectra: SpectraSet,
    palette: Vec<Rgb8>,
    view: ViewState,
}

impl EmittanceApp {
    pub fn new(spectra: SpectraSet, palette: Vec<Rgb8>, status_message: Option<String>) -> Self {
        Self {
            spectra,
            palette,
            view: ViewState {
                status_message,
                ..ViewState::default()
            },
        }
    }
}

impl eframe::App for EmittanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toggles and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.spectra, &mut self.view);
        });

        // ---- Central panel: the two emittance plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::emittance_panels(ui, &self.spectra, &self.palette, &self.view);
        });
    }
}
