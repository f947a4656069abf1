use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Geographic point produced by the resolver, consumed by the fetcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Today's forecast, reduced to the fields the engine cares about.
/// Temperatures are rounded to whole degrees Celsius at ingest.
/// Downstream code assumes `min_temp <= max_temp`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub min_temp: i32,
    pub max_temp: i32,
    /// WMO weather interpretation code; -1 when the upstream omitted it.
    pub condition_code: i32,
    pub precipitation_probability: u8,
    /// Expected precipitation in mm.
    pub precipitation_amount: f64,
    /// Peak wind speed in m/s.
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

/// Reader preferences that bias the recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserPrefs {
    /// Positive values dress the reader one band warmer, negative values one
    /// band lighter. Magnitude beyond the sign is ignored.
    pub cold_sensitivity: i32,
    pub carry_preference: bool,
}

/// Condition flags derived from the forecast plus season. Rain and snow can
/// legitimately co-occur (a snow code together with a high precipitation
/// probability); that union is intentional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionFlags {
    pub rain: bool,
    pub snow: bool,
    pub cloudy: bool,
    pub clear: bool,
    pub windy: bool,
    pub humid: bool,
    pub dry: bool,
    pub uv_high: bool,
}

/// What to wear today, plus advisory tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitRecommendation {
    pub top: String,
    pub bottom: String,
    /// Rendered tips, at most three.
    pub tips: Vec<String>,
    /// Full tip list before truncation, kept for diagnostics.
    pub all_tips: Vec<String>,
    pub condition_label: String,
}
