/// Radiation model: constants, Planck's law, and derived spectra.
///
/// Architecture:
/// ```text
///   temperatures (K) + GridSpec
///        │
///        ▼
///   ┌──────────┐
///   │  planck   │  I(λ, T) pointwise over the wavelength grid
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ SpectraSet  │  one EmittanceCurve + Peak per temperature
///   └────────────┘
/// ```
///
/// Everything downstream (figure export, viewer) consumes [`spectra::SpectraSet`]
/// read-only; nothing mutates a spectrum after construction.
pub mod constants;
pub mod planck;
pub mod spectra;
