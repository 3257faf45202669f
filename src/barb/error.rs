use thiserror::Error;

#[derive(Debug, Error)]
pub enum BarbError {
    #[error("bin count must be positive")]
    InvalidBinCount,
    #[error("{0} series is not sorted by timestamp")]
    UnsortedSeries(&'static str),
}
