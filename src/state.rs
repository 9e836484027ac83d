// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Display toggles for the interactive viewer, independent of rendering.
/// The spectra themselves are immutable; only presentation flags live here.
pub struct ViewState {
    /// Overlay the visible-spectrum colour bands.
    pub show_bands: bool,

    /// Mark each curve's maximum.
    pub show_peaks: bool,

    /// Status line shown in the top bar (e.g. where the PNG went).
    pub status_message: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            show_bands: true,
            show_peaks: true,
            status_message: None,
        }
    }
}
