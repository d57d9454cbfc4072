//! Summary statistics over score and sample arrays.
//!
//! These are the pure helpers the analyzers are built from. All of them are
//! total functions: empty or short inputs produce `None` or a neutral value
//! rather than NaN.

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance. `None` for an empty slice.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some(sum_sq / values.len() as f64)
}

/// Population standard deviation. `None` for an empty slice.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

/// Clamp a value onto the unit interval `[0, 1]`.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Standard deviation of `values` normalized by `scale` and clamped to
/// `[0, 1]`. Fewer than two samples carry no spread information and yield 0.
pub fn normalized_volatility(values: &[f64], scale: f64) -> f64 {
    if values.len() < 2 || scale <= 0.0 {
        return 0.0;
    }
    match population_std_dev(values) {
        Some(std_dev) => (std_dev / scale).min(1.0),
        None => 0.0,
    }
}

/// Mean of the last `window` samples minus the mean of the (possibly
/// partial) window before it.
///
/// Returns `None` when fewer than `window` samples exist or when there is
/// nothing before the recent window to compare against.
pub fn windowed_delta(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let split = values.len() - window;
    let older_start = values.len().saturating_sub(window * 2);
    let older = &values[older_start..split];
    if older.is_empty() {
        return None;
    }
    Some(mean(&values[split..])? - mean(older)?)
}
