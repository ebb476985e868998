/// Evenly spaced sample grids shared by the projection and marginal-return
/// calculations.
///
/// - `count == 0` => empty.
/// - `count == 1` => just `start`.
/// - Otherwise `count` samples from `start` to `end` inclusive.
pub fn linear_samples(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count as f64 - 1.0);
            (0..count).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_samples_handles_degenerate_counts() {
        assert!(linear_samples(0.0, 10.0, 0).is_empty());
        assert_eq!(linear_samples(5.0, 10.0, 1), vec![5.0]);
    }

    #[test]
    fn linear_samples_includes_both_endpoints() {
        let samples = linear_samples(1000.0, 75000.0, 100);
        assert_eq!(samples.len(), 100);
        assert!((samples[0] - 1000.0).abs() < 1e-9);
        assert!((samples[99] - 75000.0).abs() < 1e-9);
    }

    #[test]
    fn linear_samples_are_evenly_spaced_and_increasing() {
        let samples = linear_samples(0.0, 3_000_000.0, 100);
        let step = samples[1] - samples[0];
        for window in samples.windows(2) {
            assert!(window[1] > window[0]);
            assert!((window[1] - window[0] - step).abs() < 1e-6);
        }
    }
}
