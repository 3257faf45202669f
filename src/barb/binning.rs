use chrono::{DateTime, Utc};

use super::circular::circular_mean;
use super::error::BarbError;
use super::sample::{AlignedSample, BarbPoint};
use crate::units::{Speed, SpeedUnit};

/// Reduce the aligned series to at most `bins` averaged barbs.
///
/// Bin width is fixed at (last - first) / bins. A bucket closes when the
/// next sample reaches its upper edge, so a sample exactly on a boundary
/// opens the following bin. The final bin absorbs all trailing samples,
/// last timestamp included. Buckets that receive no samples emit
/// nothing, and a zero-width range collapses into a single bin.
pub fn bin_barbs(
    aligned: &[AlignedSample],
    bins: usize,
    unit: SpeedUnit,
) -> Result<Vec<BarbPoint>, BarbError> {
    if bins == 0 {
        return Err(BarbError::InvalidBinCount);
    }
    if aligned.is_empty() {
        return Ok(Vec::new());
    }

    let start = aligned[0].timestamp.timestamp_millis() as f64;
    let end = aligned[aligned.len() - 1].timestamp.timestamp_millis() as f64;
    let width = (end - start) / bins as f64;

    let mut upper = start + width;
    let mut times: Vec<f64> = Vec::new();
    let mut speeds: Vec<f64> = Vec::new();
    let mut directions: Vec<f64> = Vec::new();
    let mut barbs = Vec::new();

    for (i, sample) in aligned.iter().enumerate() {
        times.push(sample.timestamp.timestamp_millis() as f64);
        speeds.push(sample.speed);
        directions.push(sample.direction_deg);

        let last_sample = i + 1 == aligned.len();
        let final_bin = barbs.len() + 1 == bins;
        let next_due = !final_bin
            && width > 0.0
            && aligned
                .get(i + 1)
                .is_some_and(|next| next.timestamp.timestamp_millis() as f64 >= upper);

        if last_sample || next_due {
            barbs.push(close_bucket(&times, &speeds, &directions, unit, sample.timestamp));
            upper += width;
            times.clear();
            speeds.clear();
            directions.clear();
        }
    }

    Ok(barbs)
}

fn close_bucket(
    times: &[f64],
    speeds: &[f64],
    directions: &[f64],
    unit: SpeedUnit,
    fallback: DateTime<Utc>,
) -> BarbPoint {
    let timestamp = DateTime::from_timestamp_millis(mean(times).round() as i64).unwrap_or(fallback);

    BarbPoint {
        timestamp,
        speed: Speed::from_kilometers_per_hour(mean(speeds)).get(unit),
        direction_deg: circular_mean(directions).rem_euclid(360.0),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
