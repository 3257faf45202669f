mod align;
mod binning;
mod circular;
mod error;
mod sample;

pub use align::align;
pub use binning::bin_barbs;
pub use circular::circular_mean;
pub use error::BarbError;
pub use sample::{AlignedSample, BarbPoint, Sample};

use crate::units::SpeedUnit;

/// Align the two feeds on timestamp and reduce them to at most `bins`
/// averaged barbs. Pure and stateless; safe to call concurrently.
pub fn generate_barbs(
    magnitude: &[Sample],
    direction: &[Sample],
    bins: usize,
    unit: SpeedUnit,
) -> Result<Vec<BarbPoint>, BarbError> {
    let aligned = align(magnitude, direction)?;
    bin_barbs(&aligned, bins, unit)
}
