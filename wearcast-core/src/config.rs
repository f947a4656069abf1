use std::env;

use crate::error::RunError;
use crate::model::{Coordinates, UserPrefs};

/// Address the briefing is written for when no override is set.
pub const DEFAULT_ADDRESS: &str = "Seoul Mapo-gu";
pub const DEFAULT_TIMEZONE: &str = "Asia/Seoul";

const WEBHOOK_VAR: &str = "SLACK_WEBHOOK_URL";
const ADDRESS_VAR: &str = "WEARCAST_ADDRESS";
const TIMEZONE_VAR: &str = "WEARCAST_TIMEZONE";
const LAT_VAR: &str = "WEARCAST_LAT";
const LON_VAR: &str = "WEARCAST_LON";
const COLD_SENSITIVITY_VAR: &str = "WEARCAST_COLD_SENSITIVITY";
const CARRY_PREFERENCE_VAR: &str = "WEARCAST_CARRY_PREFERENCE";

/// Run configuration, assembled once at the entry point and passed down.
/// Nothing below the entry point reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub address: String,
    pub timezone: String,
    /// When set, the geocoding step is skipped entirely.
    pub coordinates: Option<Coordinates>,
    pub prefs: UserPrefs,
}

impl Config {
    pub fn from_env() -> Result<Self, RunError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value lookup. Tests use this instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RunError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup(WEBHOOK_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| RunError::Configuration(format!("{WEBHOOK_VAR} is not set")))?;

        let address = lookup(ADDRESS_VAR).unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let timezone = lookup(TIMEZONE_VAR).unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

        let coordinates = match (lookup(LAT_VAR), lookup(LON_VAR)) {
            (Some(lat), Some(lon)) => Some(Coordinates {
                latitude: parse_coordinate(LAT_VAR, &lat)?,
                longitude: parse_coordinate(LON_VAR, &lon)?,
            }),
            (None, None) => None,
            _ => {
                return Err(RunError::Configuration(format!(
                    "{LAT_VAR} and {LON_VAR} must be set together"
                )));
            }
        };

        let cold_sensitivity = match lookup(COLD_SENSITIVITY_VAR) {
            Some(raw) => raw.trim().parse::<i32>().map_err(|_| {
                RunError::Configuration(format!(
                    "{COLD_SENSITIVITY_VAR} is not an integer: '{raw}'"
                ))
            })?,
            None => 0,
        };

        let carry_preference = match lookup(CARRY_PREFERENCE_VAR) {
            Some(raw) => parse_bool(CARRY_PREFERENCE_VAR, &raw)?,
            None => false,
        };

        Ok(Self {
            webhook_url,
            address,
            timezone,
            coordinates,
            prefs: UserPrefs { cold_sensitivity, carry_preference },
        })
    }
}

fn parse_coordinate(var: &str, raw: &str) -> Result<f64, RunError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RunError::Configuration(format!("{var} is not a number: '{raw}'")))
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, RunError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(RunError::Configuration(format!(
            "{var} is not a boolean: '{raw}' (expected 1/0, true/false or yes/no)"
        ))),
    }
}
