use crate::domain::marginal_return::{MarginalReturnPoint, Plateau};

/// Smoothed-delta threshold below which the series counts as stabilized.
pub const DEFAULT_PLATEAU_THRESHOLD: f64 = 0.001;

/// Window width of the centered moving average applied to the raw returns.
const SMOOTHING_WINDOW: usize = 3;

/// Computes the marginal-return series over ordered volume samples.
///
/// For sample `i`: `mcu[i] = round2(volume[i] * unit_mcu)`,
/// `cost[i] = volume[i] * cost_per_query`, `diff[i] = round2(mcu[i] -
/// cost[i-1])` (cost shifted one index), `raw_return[i] = round2(diff[i] /
/// diff[i-1])`. The raw returns are smoothed with a centered 3-point moving
/// average and `smoothed_delta` is the absolute difference of consecutive
/// smoothed values.
///
/// A ratio with a zero or undefined denominator is `None`, and a smoothing
/// window touching an undefined neighbour or a sequence boundary is `None`
/// as well. The first two samples only carry undefined values and are
/// dropped from the output.
pub fn compute_marginal_return_series(
    volumes: &[f64],
    unit_mcu: f64,
    cost_per_query: f64,
) -> Vec<MarginalReturnPoint> {
    let n = volumes.len();
    if n < 3 {
        return Vec::new();
    }

    let mcu: Vec<f64> = volumes.iter().map(|&v| round2(v * unit_mcu)).collect();
    let cost: Vec<f64> = volumes.iter().map(|&v| v * cost_per_query).collect();

    // diff[0] is undefined: there is no previous cost to shift in.
    let diff: Vec<Option<f64>> = (0..n)
        .map(|i| {
            if i == 0 {
                None
            } else {
                Some(round2(mcu[i] - cost[i - 1]))
            }
        })
        .collect();

    let raw_return: Vec<Option<f64>> = (0..n)
        .map(|i| {
            if i == 0 {
                return None;
            }
            match (diff[i], diff[i - 1]) {
                (Some(current), Some(previous)) if previous != 0.0 => {
                    Some(round2(current / previous))
                }
                _ => None,
            }
        })
        .collect();

    let smoothed: Vec<Option<f64>> = (0..n)
        .map(|i| {
            if i == 0 || i == n - 1 {
                return None;
            }
            let window = &raw_return[i - 1..=i + 1];
            let mut sum = 0.0;
            for value in window {
                sum += (*value)?;
            }
            Some(sum / SMOOTHING_WINDOW as f64)
        })
        .collect();

    let smoothed_delta: Vec<Option<f64>> = (0..n)
        .map(|i| {
            if i == 0 {
                return None;
            }
            match (smoothed[i], smoothed[i - 1]) {
                (Some(current), Some(previous)) => Some((current - previous).abs()),
                _ => None,
            }
        })
        .collect();

    // Samples 0 and 1 only hold undefined diff/return values by
    // construction; the emitted series starts at index 2, where diff is
    // always defined.
    (2..n)
        .map(|i| MarginalReturnPoint {
            query_count: volumes[i],
            diff: round2(mcu[i] - cost[i - 1]),
            raw_return: raw_return[i],
            smoothed_return: smoothed[i],
            smoothed_delta: smoothed_delta[i],
        })
        .collect()
}

/// First-crossing plateau scan.
///
/// Returns the first point whose smoothed delta is defined and below
/// `threshold`, together with the diff of the first point at or past that
/// volume. `None` when no point crosses the threshold. Note this triggers on
/// the earliest crossing even if the series keeps moving afterwards; it is
/// not a global-minimum detector.
pub fn detect_plateau(series: &[MarginalReturnPoint], threshold: f64) -> Option<Plateau> {
    let hit = series
        .iter()
        .find(|point| point.smoothed_delta.is_some_and(|delta| delta < threshold))?;

    let diff_at_plateau = series
        .iter()
        .find(|point| point.query_count >= hit.query_count)
        .map(|point| point.diff)?;

    Some(Plateau {
        volume: hit.query_count,
        diff_at_plateau,
    })
}

/// Rounds to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::marginal_return::PlateauKind;
    use crate::services::sample_range::linear_samples;

    fn flat_series() -> Vec<MarginalReturnPoint> {
        // unit_mcu == cost_per_query over an even grid makes diff constant,
        // so every defined raw return is exactly 1.0.
        let volumes = linear_samples(1000.0, 10000.0, 10);
        compute_marginal_return_series(&volumes, 0.25, 0.25)
    }

    #[test]
    fn series_drops_the_first_two_samples() {
        let volumes = linear_samples(1000.0, 75000.0, 100);
        let series = compute_marginal_return_series(&volumes, 8.6, 0.25);

        assert_eq!(series.len(), 98);
        assert_eq!(series[0].query_count, volumes[2]);
    }

    #[test]
    fn series_is_empty_for_too_few_samples() {
        assert!(compute_marginal_return_series(&[1000.0, 2000.0], 8.6, 0.25).is_empty());
    }

    #[test]
    fn constant_unit_economics_produce_constant_raw_return() {
        let series = flat_series();

        // diff = step * 0.25 = 250 at every emitted sample.
        for point in &series {
            assert!((point.diff - 250.0).abs() < 1e-9);
        }
        for point in &series {
            if let Some(raw) = point.raw_return {
                assert!((raw - 1.0).abs() < 1e-9);
            }
        }
        // Where the smoothing window is fully defined the delta is zero.
        let defined_deltas: Vec<f64> = series.iter().filter_map(|p| p.smoothed_delta).collect();
        assert!(!defined_deltas.is_empty());
        assert!(defined_deltas.iter().all(|delta| *delta == 0.0));
    }

    #[test]
    fn smoothing_is_undefined_at_the_boundaries() {
        let series = flat_series();

        // The first emitted point still touches the undefined raw return at
        // sample 1, and the last sample has no right-hand neighbour.
        assert!(series[0].smoothed_return.is_none());
        assert!(series[series.len() - 1].smoothed_return.is_none());
        assert!(series[1].smoothed_return.is_some());
    }

    #[test]
    fn zero_denominator_propagates_as_undefined() {
        // unit_mcu == 0 and zero cost make every diff 0.00, so every ratio
        // has a zero denominator.
        let volumes = linear_samples(1000.0, 5000.0, 5);
        let series = compute_marginal_return_series(&volumes, 0.0, 0.0);

        assert_eq!(series.len(), 3);
        for point in &series {
            assert_eq!(point.diff, 0.0);
            assert!(point.raw_return.is_none());
            assert!(point.smoothed_return.is_none());
            assert!(point.smoothed_delta.is_none());
        }
    }

    #[test]
    fn detect_plateau_finds_the_first_crossing() {
        let series = flat_series();
        let plateau = detect_plateau(&series, DEFAULT_PLATEAU_THRESHOLD).unwrap();

        // First sample with a defined delta: index 2 of the emitted series.
        assert_eq!(plateau.volume, series[2].query_count);
        assert!((plateau.diff_at_plateau - 250.0).abs() < 1e-9);
        assert_eq!(plateau.kind(), PlateauKind::Efficiency);
    }

    #[test]
    fn detect_plateau_with_zero_threshold_needs_an_exact_zero() {
        let series = flat_series();
        // All defined deltas are exactly 0.0, and 0.0 < 0.0 is false.
        assert!(detect_plateau(&series, 0.0).is_none());
    }

    #[test]
    fn detect_plateau_returns_none_when_nothing_crosses() {
        let point = MarginalReturnPoint {
            query_count: 1000.0,
            diff: 10.0,
            raw_return: Some(1.5),
            smoothed_return: Some(1.5),
            smoothed_delta: Some(0.4),
        };
        assert!(detect_plateau(&[point], 0.001).is_none());
    }

    #[test]
    fn detect_plateau_ignores_undefined_deltas() {
        let undefined = MarginalReturnPoint {
            query_count: 1000.0,
            diff: -10.0,
            raw_return: None,
            smoothed_return: None,
            smoothed_delta: None,
        };
        let crossing = MarginalReturnPoint {
            query_count: 2000.0,
            diff: -12.0,
            raw_return: Some(1.2),
            smoothed_return: Some(1.2),
            smoothed_delta: Some(0.0005),
        };
        let plateau = detect_plateau(&[undefined, crossing], 0.001).unwrap();

        assert_eq!(plateau.volume, 2000.0);
        assert_eq!(plateau.diff_at_plateau, -12.0);
        assert_eq!(plateau.kind(), PlateauKind::Inefficiency);
    }

    #[test]
    fn reference_defaults_stabilize_in_the_profitable_region() {
        let volumes = linear_samples(1000.0, 75000.0, 100);
        let series = compute_marginal_return_series(&volumes, 8.6, 0.25);
        let plateau = detect_plateau(&series, DEFAULT_PLATEAU_THRESHOLD).unwrap();

        assert!(plateau.volume >= 1000.0 && plateau.volume <= 75000.0);
        assert!(plateau.diff_at_plateau > 0.0);
        assert_eq!(plateau.kind(), PlateauKind::Efficiency);
    }
}
