/// Static figure export: composes the two-panel emittance figure and writes
/// it to disk as a PNG. The interactive counterpart lives in `crate::ui`.
pub mod figure;
