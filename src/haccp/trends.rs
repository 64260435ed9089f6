use super::model::HaccpLog;
use super::ranges::parse_reading;
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

/// Difference between half-series means, in °C, beyond which a series is trending.
pub const TREND_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

/// Summary statistics of one item's readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureTrend {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: Trend,
    /// Readings whose log was flagged out of range when it was written.
    pub out_of_range_count: usize,
    pub readings: usize,
}

impl Default for TemperatureTrend {
    fn default() -> Self {
        Self {
            average: 0.0,
            min: 0.0,
            max: 0.0,
            trend: Trend::Stable,
            out_of_range_count: 0,
            readings: 0,
        }
    }
}

/// Analyzes the readings logged for `item_id` in chronological order.
///
/// Logs without a numeric value are dropped. The trend compares the mean of the
/// earlier half of the series with the mean of the later half.
pub fn analyze_temperature_trends(logs: &[HaccpLog], item_id: &str) -> TemperatureTrend {
    let series: Vec<(f64, bool)> = logs
        .iter()
        .filter(|log| log.item_id == item_id)
        .filter_map(|log| {
            let reading = parse_reading(log.value.as_deref()?)?;
            Some((log.timestamp, reading, log.is_out_of_range))
        })
        .sorted_by_key(|(timestamp, _, _)| *timestamp)
        .map(|(_, reading, flagged)| (reading, flagged))
        .collect();

    if series.is_empty() {
        return TemperatureTrend::default();
    }

    let values: Vec<f64> = series.iter().map(|(reading, _)| *reading).collect();
    let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
        MinMaxResult::NoElements => (0.0, 0.0),
    };

    TemperatureTrend {
        average: mean(&values),
        min,
        max,
        trend: classify(&values),
        out_of_range_count: series.iter().filter(|(_, flagged)| *flagged).count(),
        readings: values.len(),
    }
}

fn classify(values: &[f64]) -> Trend {
    let (first, second) = values.split_at(values.len() / 2);
    if first.is_empty() || second.is_empty() {
        return Trend::Stable;
    }
    let delta = mean(second) - mean(first);
    if delta > TREND_THRESHOLD {
        Trend::Rising
    } else if delta < -TREND_THRESHOLD {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
