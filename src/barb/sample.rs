use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A single raw measurement from one sensor feed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct Sample {
    pub timestamp: DateTime<chrono::Utc>,
    pub value: f64,
}

/// One instant where both the magnitude and the direction feed reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedSample {
    pub timestamp: DateTime<chrono::Utc>,
    pub speed: f64,
    pub direction_deg: f64,
}

/// An averaged wind barb over one time bin.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct BarbPoint {
    pub timestamp: DateTime<chrono::Utc>,
    pub speed: f64,
    pub direction_deg: f64,
}
