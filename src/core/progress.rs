/// Percentage of `target` reached by `current`, capped at 100.
///
/// A zero target reports 0 rather than dividing by zero.
pub fn calculate_progress(current: f64, target: f64) -> f64 {
    if target == 0.0 {
        return 0.0;
    }
    ((current / target) * 100.0).min(100.0)
}
