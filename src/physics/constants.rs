// ---------------------------------------------------------------------------
// Physical constants (CODATA 2018)
// ---------------------------------------------------------------------------

/// Planck constant h (J·s).
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Speed of light in vacuum c (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Boltzmann constant k (J/K).
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Wien displacement constant b (m·K): λ_max = b / T.
pub const WIEN_B: f64 = 2.897_771_955e-3;

// ---------------------------------------------------------------------------
// Visible band
// ---------------------------------------------------------------------------

/// Lower edge of the visible spectrum (nm).
pub const VISIBLE_MIN_NM: f64 = 380.0;

/// Upper edge of the visible spectrum (nm).
pub const VISIBLE_MAX_NM: f64 = 780.0;
