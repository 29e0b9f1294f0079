pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// [`is_target_reached_within`] at [`DEFAULT_TOLERANCE`].
pub fn is_target_reached(current: &[f64], target: &[f64]) -> bool {
    is_target_reached_within(current, target, DEFAULT_TOLERANCE)
}

/// Whether `current` and `target` give the same outcome probabilities.
///
/// Only squared amplitudes are compared, so vectors that differ by sign on
/// some components (relative phase) count as equal. Puzzle targets are built
/// against this rule.
pub fn is_target_reached_within(current: &[f64], target: &[f64], tolerance: f64) -> bool {
    if current.len() != target.len() {
        return false;
    }
    current
        .iter()
        .zip(target)
        .all(|(c, t)| (c * c - t * t).abs() <= tolerance)
}
