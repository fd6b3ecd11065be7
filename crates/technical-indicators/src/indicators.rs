use market_core::ModelError;
use serde::{Deserialize, Serialize};

/// Overbought reference level conventionally drawn on RSI charts.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Oversold reference level conventionally drawn on RSI charts.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Exponentially weighted moving average with an explicit smoothing factor.
///
/// Seeded from the first value: `y[0] = x[0]`, then
/// `y[t] = alpha * x[t] + (1 - alpha) * y[t-1]`. Every output entry is
/// numerically defined; early entries lean toward the start of the series.
pub fn ewma(data: &[f64], alpha: f64) -> Result<Vec<f64>, ModelError> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(ModelError::InvalidInput(format!(
            "smoothing factor must be in (0, 1], got {}",
            alpha
        )));
    }

    let mut result = Vec::with_capacity(data.len());
    for &x in data {
        let smoothed = match result.last() {
            Some(&prev) => alpha * x + (1.0 - alpha) * prev,
            None => x,
        };
        result.push(smoothed);
    }
    Ok(result)
}

/// EWMA parameterized by span, with `alpha = 2 / (span + 1)`.
pub fn ewma_span(data: &[f64], span: usize) -> Result<Vec<f64>, ModelError> {
    if span == 0 {
        return Err(ModelError::InvalidInput(
            "EWMA span must be at least 1".to_string(),
        ));
    }
    ewma(data, 2.0 / (span as f64 + 1.0))
}

/// Parameters for the RSI computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiParams {
    /// Smoothing period for the gain and loss averages.
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// Relative Strength Index series, aligned index-for-index with its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiSeries {
    /// Period the gain and loss averages were smoothed over.
    pub period: usize,
    /// One value per input close, each in [0, 100].
    pub values: Vec<f64>,
    /// Count of leading entries still dominated by the seed,
    /// `min(period, input length)`.
    pub warmup_len: usize,
}

/// Relative Strength Index
///
/// Gains and losses are smoothed with `alpha = 1 / period`, seeded from
/// index 0. The first close has no predecessor and contributes zero gain
/// and zero loss. Whenever the smoothed loss is zero (flat and strictly
/// rising series included) the value is exactly 100.
pub fn rsi(closes: &[f64], params: RsiParams) -> Result<RsiSeries, ModelError> {
    if params.period == 0 {
        return Err(ModelError::InvalidInput(
            "RSI period must be at least 1".to_string(),
        ));
    }

    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    for (i, &close) in closes.iter().enumerate() {
        let delta = if i == 0 { 0.0 } else { close - closes[i - 1] };
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let alpha = 1.0 / params.period as f64;
    let avg_gain = ewma(&gains, alpha)?;
    let avg_loss = ewma(&losses, alpha)?;

    let values = avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&gain, &loss)| {
            if loss == 0.0 {
                100.0
            } else {
                100.0 - 100.0 / (1.0 + gain / loss)
            }
        })
        .collect();

    Ok(RsiSeries {
        period: params.period,
        values,
        warmup_len: params.period.min(closes.len()),
    })
}

/// Parameters for the MACD computation, all given as EWMA spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdParams {
    /// Span of the fast close-price EWMA.
    pub fast: usize,
    /// Span of the slow close-price EWMA. Must exceed `fast`.
    pub slow: usize,
    /// Span of the signal-line EWMA over the MACD line.
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

/// MACD line, signal line, and histogram, all aligned with the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// MACD (Moving Average Convergence Divergence)
///
/// All three series run from index 0. The fast and slow EWMAs share the
/// same seed, so the MACD line starts at exactly zero; early entries lean
/// toward the start of the window.
pub fn macd(closes: &[f64], params: MacdParams) -> Result<MacdSeries, ModelError> {
    if params.fast == 0 || params.slow == 0 || params.signal == 0 {
        return Err(ModelError::InvalidInput(
            "MACD spans must all be at least 1".to_string(),
        ));
    }
    if params.fast >= params.slow {
        return Err(ModelError::InvalidInput(format!(
            "fast span {} must be shorter than slow span {}",
            params.fast, params.slow
        )));
    }

    let ema_fast = ewma_span(closes, params.fast)?;
    let ema_slow = ewma_span(closes, params.slow)?;

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(&fast, &slow)| fast - slow)
        .collect();

    let signal_line = ewma_span(&macd_line, params.signal)?;

    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(&m, &s)| m - s)
        .collect();

    Ok(MacdSeries {
        macd: macd_line,
        signal: signal_line,
        histogram,
    })
}
