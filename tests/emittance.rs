use planck_plot::color::curve_palette;
use planck_plot::physics::constants::WIEN_B;
use planck_plot::physics::spectra::{compute_spectra, GridSpec};
use planck_plot::render::figure::save_figure;

#[test]
fn peak_for_5500_k_matches_wien_displacement() {
    let spectra = compute_spectra(&[5500.0], &GridSpec::default()).unwrap();
    let peak = spectra.curves[0].peak.wavelength_nm;

    // λ_max = b / T ≈ 526.9 nm; the 0.5 nm grid lands within a sample of it.
    let expected = WIEN_B / 5500.0 * 1e9;
    assert!(
        (peak - expected).abs() < 3.0,
        "peak {peak} nm, expected ≈ {expected} nm"
    );
}

#[test]
fn hotter_body_peaks_at_shorter_wavelength() {
    let spectra = compute_spectra(&[3500.0, 7000.0], &GridSpec::default()).unwrap();
    let cold = spectra.curves[0].peak.wavelength_nm;
    let hot = spectra.curves[1].peak.wavelength_nm;
    assert!(cold > hot, "peak(3500 K) = {cold} nm, peak(7000 K) = {hot} nm");
}

#[test]
fn batch_pipeline_produces_the_figure() {
    // compute grid → curves → peaks → render → save, as main() does.
    let temperatures = [3500.0, 4500.0, 5500.0, 6500.0];
    let spectra = compute_spectra(&temperatures, &GridSpec::default()).unwrap();
    assert_eq!(spectra.len(), temperatures.len());
    assert!(*spectra.wavelengths_nm().last().unwrap() >= 2500.0);
    for curve in &spectra.curves {
        assert_eq!(curve.intensity.len(), spectra.wavelengths_m.len());
    }

    let palette = curve_palette(spectra.len());
    let path = std::env::temp_dir().join("planck_plot_e2e.png");
    save_figure(&path, &spectra, &palette).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    std::fs::remove_file(&path).ok();
}
