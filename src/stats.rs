//! Order statistics over sample lists.

/// Percentile `p` (in percent) of `values` using linear interpolation between
/// the neighbouring order statistics.
///
/// `p` is clamped to [0, 100] and NaN samples are skipped. Returns `None` when
/// no finite sample remains.
pub fn percentile(values: &[f32], p: f64) -> Option<f64> {
    let mut sorted: Vec<f32> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 100.0) };
    let pos = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    let a = sorted[lo] as f64;
    let b = sorted[hi] as f64;
    Some(a + (b - a) * frac)
}
