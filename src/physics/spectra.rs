use thiserror::Error;

use super::planck::spectral_emittance;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SpectrumError {
    #[error("temperature list is empty")]
    EmptyTemperatures,

    #[error("temperature {0} K is not strictly positive")]
    NonPositiveTemperature(f64),

    #[error("temperatures must be strictly ascending ({0} K is followed by {1} K)")]
    UnsortedTemperatures(f64, f64),

    #[error("invalid wavelength grid: {0}")]
    InvalidGrid(&'static str),
}

// ---------------------------------------------------------------------------
// Wavelength grid
// ---------------------------------------------------------------------------

/// Arithmetic wavelength sweep in metres.
///
/// The default sweep starts at 0.5 nm (strictly above zero so Planck's law
/// never divides by zero) and stops at 2.501 µm: the stop deliberately
/// overshoots 2.5 µm so the 2.5 µm sample itself lands on the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub start_m: f64,
    pub stop_m: f64,
    pub step_m: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            start_m: 0.5e-9,
            stop_m: 2.501e-6,
            step_m: 0.5e-9,
        }
    }
}

impl GridSpec {
    /// Materialise the sweep: `floor((stop − start) / step) + 1` samples,
    /// endpoint inclusive.
    pub fn build(&self) -> Result<Vec<f64>, SpectrumError> {
        if !(self.start_m > 0.0) {
            return Err(SpectrumError::InvalidGrid("start must be strictly positive"));
        }
        if !(self.step_m > 0.0) {
            return Err(SpectrumError::InvalidGrid("step must be strictly positive"));
        }
        if self.stop_m <= self.start_m {
            return Err(SpectrumError::InvalidGrid("stop must exceed start"));
        }

        let n = ((self.stop_m - self.start_m) / self.step_m).floor() as usize + 1;
        Ok((0..n).map(|i| self.start_m + i as f64 * self.step_m).collect())
    }
}

// ---------------------------------------------------------------------------
// Derived spectra
// ---------------------------------------------------------------------------

/// Location of a curve's maximum. Ties resolve to the first maximal index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub index: usize,
    pub wavelength_nm: f64,
    pub intensity: f64,
}

/// Spectral emittance of one temperature over the shared wavelength grid.
#[derive(Debug, Clone)]
pub struct EmittanceCurve {
    pub temperature_k: f64,
    /// Same length as the grid, aligned index-for-index.
    pub intensity: Vec<f64>,
    pub peak: Peak,
}

/// All curves over one grid. Read-only once built.
#[derive(Debug, Clone)]
pub struct SpectraSet {
    pub wavelengths_m: Vec<f64>,
    pub curves: Vec<EmittanceCurve>,
}

impl SpectraSet {
    /// Grid converted to nanometres (plot axis unit).
    pub fn wavelengths_nm(&self) -> Vec<f64> {
        self.wavelengths_m.iter().map(|&l| l * 1e9).collect()
    }

    /// Largest intensity over all curves.
    pub fn max_intensity(&self) -> f64 {
        self.curves
            .iter()
            .map(|c| c.peak.intensity)
            .fold(0.0, f64::max)
    }

    /// Zoom window around the extrema: [min(peaks) − 50 nm, max(peaks) + 50 nm].
    pub fn zoom_bounds_nm(&self) -> (f64, f64) {
        let lo = self
            .curves
            .iter()
            .map(|c| c.peak.wavelength_nm)
            .fold(f64::INFINITY, f64::min);
        let hi = self
            .curves
            .iter()
            .map(|c| c.peak.wavelength_nm)
            .fold(f64::NEG_INFINITY, f64::max);
        (lo - 50.0, hi + 50.0)
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the set holds no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// Evaluate Planck's law for every temperature over the grid and locate each
/// curve's peak.
///
/// The temperature list must be non-empty, strictly positive, and strictly
/// ascending; anything else is rejected up front rather than silently
/// producing a misleading figure.
pub fn compute_spectra(
    temperatures_k: &[f64],
    grid: &GridSpec,
) -> Result<SpectraSet, SpectrumError> {
    if temperatures_k.is_empty() {
        return Err(SpectrumError::EmptyTemperatures);
    }
    for &t in temperatures_k {
        if !(t > 0.0) {
            return Err(SpectrumError::NonPositiveTemperature(t));
        }
    }
    for pair in temperatures_k.windows(2) {
        if pair[1] <= pair[0] {
            return Err(SpectrumError::UnsortedTemperatures(pair[0], pair[1]));
        }
    }

    let wavelengths_m = grid.build()?;
    let curves = temperatures_k
        .iter()
        .map(|&t| {
            let intensity: Vec<f64> = wavelengths_m
                .iter()
                .map(|&lambda| spectral_emittance(lambda, t))
                .collect();
            let peak = find_peak(&wavelengths_m, &intensity);
            EmittanceCurve {
                temperature_k: t,
                intensity,
                peak,
            }
        })
        .collect();

    Ok(SpectraSet {
        wavelengths_m,
        curves,
    })
}

fn find_peak(wavelengths_m: &[f64], intensity: &[f64]) -> Peak {
    let mut index = 0;
    let mut best = f64::NEG_INFINITY;
    for (i, &v) in intensity.iter().enumerate() {
        if v > best {
            best = v;
            index = i;
        }
    }
    Peak {
        index,
        wavelength_nm: wavelengths_m[index] * 1e9,
        intensity: best,
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_spectra, find_peak, GridSpec, SpectrumError};

    #[test]
    fn default_grid_includes_its_endpoint() {
        let spec = GridSpec::default();
        let grid = spec.build().unwrap();

        let expected_len =
            ((spec.stop_m - spec.start_m) / spec.step_m).floor() as usize + 1;
        assert_eq!(grid.len(), expected_len);
        assert!(grid[0] > 0.0);
        assert!(*grid.last().unwrap() >= 2.5e-6);
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        let zero_start = GridSpec {
            start_m: 0.0,
            ..GridSpec::default()
        };
        assert!(matches!(
            zero_start.build(),
            Err(SpectrumError::InvalidGrid(_))
        ));

        let backwards = GridSpec {
            stop_m: 0.1e-9,
            ..GridSpec::default()
        };
        assert!(matches!(
            backwards.build(),
            Err(SpectrumError::InvalidGrid(_))
        ));
    }

    #[test]
    fn temperature_list_is_validated() {
        let grid = GridSpec::default();
        assert!(matches!(
            compute_spectra(&[], &grid),
            Err(SpectrumError::EmptyTemperatures)
        ));
        assert!(matches!(
            compute_spectra(&[3500.0, -1.0], &grid),
            Err(SpectrumError::NonPositiveTemperature(_))
        ));
        assert!(matches!(
            compute_spectra(&[5000.0, 4000.0], &grid),
            Err(SpectrumError::UnsortedTemperatures(_, _))
        ));
    }

    #[test]
    fn peaks_shift_blue_as_temperature_rises() {
        let temperatures = [3500.0, 4000.0, 4500.0, 5000.0, 5500.0, 6000.0, 6500.0, 7000.0];
        let spectra = compute_spectra(&temperatures, &GridSpec::default()).unwrap();

        let peaks: Vec<f64> = spectra.curves.iter().map(|c| c.peak.wavelength_nm).collect();
        assert!(
            peaks.windows(2).all(|p| p[1] < p[0]),
            "peaks not strictly decreasing: {peaks:?}"
        );
    }

    #[test]
    fn tie_break_picks_the_first_maximal_index() {
        let wavelengths = [1.0e-9, 2.0e-9, 3.0e-9, 4.0e-9];
        let intensity = [0.5, 2.0, 2.0, 1.0];
        let peak = find_peak(&wavelengths, &intensity);
        assert_eq!(peak.index, 1);
        assert!((peak.wavelength_nm - 2.0).abs() < 1e-12);
        assert!((peak.intensity - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_bounds_pad_the_extrema_by_50_nm() {
        let spectra =
            compute_spectra(&[3500.0, 7000.0], &GridSpec::default()).unwrap();
        let (lo, hi) = spectra.zoom_bounds_nm();
        let hot = spectra.curves[1].peak.wavelength_nm;
        let cold = spectra.curves[0].peak.wavelength_nm;
        assert!((lo - (hot - 50.0)).abs() < 1e-9);
        assert!((hi - (cold + 50.0)).abs() < 1e-9);
    }
}
