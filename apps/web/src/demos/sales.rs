//! Synthetic daily sales series: seasonal sine + linear trend + gaussian noise,
//! with a trailing 14-day rolling mean.

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Serialize;

pub const DEFAULT_PERIODS: usize = 200;
pub const ROLLING_WINDOW: usize = 14;

const SEASON_AMPLITUDE: f64 = 100.0;
const SEASON_SPAN: f64 = 12.0;
const TREND_START: f64 = 200.0;
const TREND_END: f64 = 500.0;
const NOISE_STD_DEV: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub value: f64,
    /// Absent until a full window of prior values exists.
    pub rolling_mean_14: Option<f64>,
}

/// First day of the series.
pub fn series_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

/// Builds `periods` consecutive daily points. Noise is drawn from `rng`, so a
/// seeded generator reproduces the series and `thread_rng` does not.
pub fn generate_sales_series<R: Rng + ?Sized>(periods: usize, rng: &mut R) -> Vec<SalesPoint> {
    let epoch = series_epoch();
    let season = linspace(0.0, SEASON_SPAN, periods);
    let trend = linspace(TREND_START, TREND_END, periods);

    let values: Vec<f64> = season
        .iter()
        .zip(&trend)
        .map(|(t, base)| {
            let raw = t.sin() * SEASON_AMPLITUDE + base + standard_normal(rng) * NOISE_STD_DEV;
            raw.round_ties_even()
        })
        .collect();

    let means = rolling_mean(&values, ROLLING_WINDOW);

    values
        .into_iter()
        .zip(means)
        .enumerate()
        .map(|(i, (value, rolling_mean_14))| SalesPoint {
            date: epoch + Days::new(i as u64),
            value,
            rolling_mean_14,
        })
        .collect()
}

/// `n` evenly spaced samples over `[start, end]`, endpoints included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Trailing mean over `window` values; `None` for the first `window - 1` slots.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let slice = &values[i + 1 - window..=i];
                Some(slice.iter().sum::<f64>() / window as f64)
            }
        })
        .collect()
}

/// Box-Muller transform over two uniform draws.
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // gen::<f64>() is in [0, 1); shift away from zero for the log.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(periods: usize) -> Vec<SalesPoint> {
        let mut rng = StdRng::seed_from_u64(42);
        generate_sales_series(periods, &mut rng)
    }

    #[test]
    fn test_default_series_length() {
        assert_eq!(seeded(DEFAULT_PERIODS).len(), 200);
    }

    #[test]
    fn test_dates_are_consecutive_days_from_epoch() {
        let series = seeded(DEFAULT_PERIODS);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
        }
        assert_eq!(series[199].date, NaiveDate::from_ymd_opt(2023, 7, 19).unwrap());
    }

    #[test]
    fn test_first_13_rolling_means_absent() {
        let series = seeded(DEFAULT_PERIODS);
        assert!(series[..13].iter().all(|p| p.rolling_mean_14.is_none()));
        assert!(series[13..].iter().all(|p| p.rolling_mean_14.is_some()));
    }

    #[test]
    fn test_rolling_mean_matches_trailing_window() {
        let series = seeded(DEFAULT_PERIODS);
        for i in 13..series.len() {
            let expected: f64 =
                series[i - 13..=i].iter().map(|p| p.value).sum::<f64>() / 14.0;
            let got = series[i].rolling_mean_14.unwrap();
            assert!((got - expected).abs() < 1e-9, "index {i}: {got} vs {expected}");
        }
    }

    #[test]
    fn test_values_are_whole_numbers() {
        for p in seeded(DEFAULT_PERIODS) {
            assert_eq!(p.value, p.value.round());
        }
    }

    #[test]
    fn test_same_seed_reproduces_series() {
        assert_eq!(seeded(50), seeded(50));
    }

    #[test]
    fn test_trend_dominates_over_series() {
        let series = seeded(DEFAULT_PERIODS);
        let head: f64 = series[..20].iter().map(|p| p.value).sum::<f64>() / 20.0;
        let tail: f64 = series[180..].iter().map(|p| p.value).sum::<f64>() / 20.0;
        assert!(tail > head, "head {head}, tail {tail}");
    }

    #[test]
    fn test_zero_periods_is_empty() {
        assert!(seeded(0).is_empty());
    }

    #[test]
    fn test_short_series_has_no_rolling_mean() {
        let series = seeded(10);
        assert_eq!(series.len(), 10);
        assert!(series.iter().all(|p| p.rolling_mean_14.is_none()));
    }

    #[test]
    fn test_rolling_mean_small_window() {
        let means = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(means, vec![None, Some(1.5), Some(2.5), Some(3.5)]);
    }

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(200.0, 500.0, 200);
        assert_eq!(xs[0], 200.0);
        assert!((xs[199] - 500.0).abs() < 1e-9);
        assert_eq!(linspace(0.0, 12.0, 1), vec![0.0]);
    }
}
