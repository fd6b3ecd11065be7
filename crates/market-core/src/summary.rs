use serde::{Deserialize, Serialize};

use crate::{ModelError, PriceBar};

/// Headline numbers for a window of price bars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Close of the most recent bar.
    pub last_close: f64,
    /// Last close minus the window's first close.
    pub change: f64,
    /// `change` relative to the first close, in percent.
    pub percent_change: f64,
    /// Highest high in the window.
    pub high: f64,
    /// Lowest low in the window.
    pub low: f64,
}

/// Summarize a fetched price window: last close, change versus the first
/// close of the window, and the window's high/low extremes.
pub fn summarize(bars: &[PriceBar]) -> Result<PriceSummary, ModelError> {
    let (first, last) = match (bars.first(), bars.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(ModelError::MissingData(
                "no price bars in window".to_string(),
            ))
        }
    };

    if first.close == 0.0 {
        return Err(ModelError::Domain(
            "first close in window is zero; percent change is undefined".to_string(),
        ));
    }

    let change = last.close - first.close;
    let percent_change = change / first.close * 100.0;
    let high = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let low = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);

    Ok(PriceSummary {
        last_close: last.close,
        change,
        percent_change,
        high,
        low,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, Utc};

    fn bar(day: i64, open: f64, high: f64, low: f64, close: f64) -> PriceBar {
        PriceBar {
            timestamp: Utc::now() - Duration::days(10 - day),
            open,
            high,
            low,
            close,
            volume: 1_000_000.0,
        }
    }

    #[test]
    fn test_summary_over_window() {
        let bars = vec![
            bar(0, 100.0, 104.0, 98.0, 102.0),
            bar(1, 102.0, 108.0, 101.0, 106.0),
            bar(2, 106.0, 107.0, 96.0, 99.0),
            bar(3, 99.0, 111.0, 99.0, 110.0),
        ];

        let summary = summarize(&bars).unwrap();

        assert_relative_eq!(summary.last_close, 110.0);
        assert_relative_eq!(summary.change, 8.0);
        assert_relative_eq!(summary.percent_change, 8.0 / 102.0 * 100.0);
        assert_relative_eq!(summary.high, 111.0);
        assert_relative_eq!(summary.low, 96.0);
    }

    #[test]
    fn test_summary_single_bar_is_flat() {
        let bars = vec![bar(0, 50.0, 55.0, 49.0, 52.0)];

        let summary = summarize(&bars).unwrap();

        assert_relative_eq!(summary.last_close, 52.0);
        assert_relative_eq!(summary.change, 0.0);
        assert_relative_eq!(summary.percent_change, 0.0);
    }

    #[test]
    fn test_summary_empty_window_is_missing_data() {
        let err = summarize(&[]).unwrap_err();
        assert!(matches!(err, ModelError::MissingData(_)));
    }

    #[test]
    fn test_summary_zero_first_close_is_domain_error() {
        let bars = vec![bar(0, 0.0, 1.0, 0.0, 0.0), bar(1, 1.0, 2.0, 1.0, 2.0)];
        let err = summarize(&bars).unwrap_err();
        assert!(matches!(err, ModelError::Domain(_)));
    }
}
