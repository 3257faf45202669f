use std::collections::HashMap;

use super::error::BarbError;
use super::sample::{AlignedSample, Sample};

/// Intersect the two feeds on timestamp, preserving the magnitude order.
///
/// The feeds may report at different cadences; instants seen by only one
/// of them are dropped rather than interpolated, so every output triple
/// is backed by two real measurements.
pub fn align(magnitude: &[Sample], direction: &[Sample]) -> Result<Vec<AlignedSample>, BarbError> {
    check_sorted(magnitude, "magnitude")?;
    check_sorted(direction, "direction")?;

    let directions: HashMap<i64, f64> = direction
        .iter()
        .map(|s| (s.timestamp.timestamp_millis(), s.value))
        .collect();

    Ok(magnitude
        .iter()
        .filter_map(|s| {
            directions
                .get(&s.timestamp.timestamp_millis())
                .map(|&deg| AlignedSample {
                    timestamp: s.timestamp,
                    speed: s.value,
                    direction_deg: deg,
                })
        })
        .collect())
}

fn check_sorted(series: &[Sample], name: &'static str) -> Result<(), BarbError> {
    if series.windows(2).all(|w| w[0].timestamp <= w[1].timestamp) {
        Ok(())
    } else {
        Err(BarbError::UnsortedSeries(name))
    }
}
