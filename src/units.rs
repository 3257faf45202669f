use serde::{Deserialize, Serialize};

/// A wind speed, stored canonically in meters per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    meters_per_second: f64,
}

impl Speed {
    #[allow(dead_code)]
    pub fn from_meters_per_second(value: f64) -> Self {
        Speed {
            meters_per_second: value,
        }
    }

    pub fn from_kilometers_per_hour(value: f64) -> Self {
        Speed {
            meters_per_second: value * 1000.0 / 3600.0,
        }
    }

    pub fn meters_per_second(&self) -> f64 {
        self.meters_per_second
    }

    pub fn kilometers_per_hour(&self) -> f64 {
        self.meters_per_second * 3.6
    }

    pub fn miles_per_hour(&self) -> f64 {
        self.meters_per_second * 2.2369363
    }

    pub fn knots(&self) -> f64 {
        self.meters_per_second * 1.9438445
    }

    pub fn feet_per_second(&self) -> f64 {
        self.meters_per_second * 3.2808399
    }

    pub fn get(&self, unit: SpeedUnit) -> f64 {
        match unit {
            SpeedUnit::MetersPerSecond => self.meters_per_second(),
            SpeedUnit::KilometersPerHour => self.kilometers_per_hour(),
            SpeedUnit::MilesPerHour => self.miles_per_hour(),
            SpeedUnit::Knots => self.knots(),
            SpeedUnit::FeetPerSecond => self.feet_per_second(),
        }
    }
}

/// Selectable output unit, spelled the way the feeds label them.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
    utoipa::ToSchema,
)]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "m/s")]
    #[value(name = "m/s")]
    #[strum(serialize = "m/s")]
    MetersPerSecond,
    #[serde(rename = "km/h")]
    #[value(name = "km/h")]
    #[strum(serialize = "km/h")]
    KilometersPerHour,
    #[serde(rename = "mph")]
    #[value(name = "mph")]
    #[strum(serialize = "mph")]
    MilesPerHour,
    #[serde(rename = "kts", alias = "knots")]
    #[value(name = "kts", alias = "knots")]
    #[strum(serialize = "kts")]
    Knots,
    #[serde(rename = "ft/s")]
    #[value(name = "ft/s")]
    #[strum(serialize = "ft/s")]
    FeetPerSecond,
}
