use super::constants::{BOLTZMANN, PLANCK, SPEED_OF_LIGHT};

/// Planck's radiation law: spectral emittance of a black body (W/m³).
///
///   I(λ, T) = 2hc² / (λ⁵ · (exp(hc / (λkT)) − 1))
///
/// Both arguments must be strictly positive; λ = 0 divides by zero. The
/// callers in [`super::spectra`] validate the wavelength grid and the
/// temperature list once, at the boundary, instead of guarding every call.
///
/// For extreme λ·T combinations (hc/(λkT) beyond ~709) the exponential
/// overflows f64 and the result underflows to 0.0; the true value there is
/// far below f64's minimum anyway.
pub fn spectral_emittance(wavelength_m: f64, temperature_k: f64) -> f64 {
    let hc = PLANCK * SPEED_OF_LIGHT;
    let exponent = hc / (wavelength_m * BOLTZMANN * temperature_k);
    (2.0 * hc * SPEED_OF_LIGHT) / (wavelength_m.powi(5) * (exponent.exp() - 1.0))
}

#[cfg(test)]
mod tests {
    use super::spectral_emittance;

    #[test]
    fn emittance_is_positive_over_the_representable_domain() {
        // hc/(λkT) stays below the exp() overflow threshold for all of these.
        for &lambda in &[50.0e-9, 100.0e-9, 500.0e-9, 2.5e-6] {
            for &t in &[3500.0, 5500.0, 7000.0] {
                let i = spectral_emittance(lambda, t);
                assert!(i > 0.0, "I({lambda}, {t}) = {i}");
            }
        }
    }

    #[test]
    fn extreme_short_wavelengths_underflow_to_zero() {
        // At the default grid start hc/(λkT) ≈ 4100 for 3500 K: exp()
        // overflows to infinity and the quotient collapses to exactly 0.0.
        let i = spectral_emittance(0.5e-9, 3500.0);
        assert_eq!(i, 0.0);
        assert!(spectral_emittance(0.5e-9, 7000.0) == 0.0);
    }

    #[test]
    fn emittance_increases_with_temperature_at_fixed_wavelength() {
        let lambda = 500.0e-9;
        let cold = spectral_emittance(lambda, 3500.0);
        let hot = spectral_emittance(lambda, 7000.0);
        assert!(cold < hot);
    }

    #[test]
    fn emittance_near_peak_matches_known_magnitude() {
        // 5800 K (solar surface) peaks near 500 nm at ~2.69e13 W/m³.
        let i = spectral_emittance(500.0e-9, 5800.0);
        assert!((i / 2.69e13 - 1.0).abs() < 0.05, "got {i}");
    }
}
