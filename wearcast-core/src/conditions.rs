//! Condition classification and flag derivation.
//!
//! The classifier is a total function over `i32`: every WMO weather
//! interpretation code (0-99, sparse) gets a label, an emoji and a coarse
//! tag, and anything unrecognized falls back to "variable" rather than
//! erroring.

use crate::model::{ConditionFlags, DailyForecast, Season};

/// Coarse grouping of WMO codes, used by the flag deriver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoarseTag {
    Clear,
    Partly,
    Cloudy,
    Rain,
    Snow,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionInfo {
    pub label: &'static str,
    pub emoji: &'static str,
    pub tag: CoarseTag,
}

/// Wind at or above this peak speed (m/s) sets the windy flag.
pub const WINDY_THRESHOLD_MPS: f64 = 8.0;

/// Precipitation probability (%) at or above this sets the rain flag even
/// without a rain code.
const RAIN_PROBABILITY_THRESHOLD: u8 = 60;

/// Map a WMO weather code to a label, emoji and coarse tag.
///
/// Borderline codes are pinned to exactly one tag: freezing drizzle (56, 57)
/// and freezing rain (66, 67) count as rain, never snow; fog (45, 48) counts
/// as cloudy; thunderstorms (95, 96, 99) count as rain.
pub fn classify(code: i32) -> ConditionInfo {
    let (label, emoji, tag) = match code {
        0 => ("Clear", "☀️", CoarseTag::Clear),
        1 => ("Mostly clear", "🌤️", CoarseTag::Clear),
        2 => ("Partly cloudy", "⛅", CoarseTag::Partly),
        3 => ("Overcast", "☁️", CoarseTag::Cloudy),
        45 => ("Fog", "🌫️", CoarseTag::Cloudy),
        48 => ("Rime fog", "🌫️", CoarseTag::Cloudy),
        51 => ("Light drizzle", "🌦️", CoarseTag::Rain),
        53 => ("Drizzle", "🌦️", CoarseTag::Rain),
        55 => ("Heavy drizzle", "🌦️", CoarseTag::Rain),
        56 | 57 => ("Freezing drizzle", "🌧️", CoarseTag::Rain),
        61 => ("Light rain", "🌧️", CoarseTag::Rain),
        63 => ("Rain", "🌧️", CoarseTag::Rain),
        65 => ("Heavy rain", "🌧️", CoarseTag::Rain),
        66 | 67 => ("Freezing rain", "🌧️", CoarseTag::Rain),
        71 => ("Light snow", "🌨️", CoarseTag::Snow),
        73 => ("Snow", "🌨️", CoarseTag::Snow),
        75 => ("Heavy snow", "❄️", CoarseTag::Snow),
        77 => ("Snow grains", "🌨️", CoarseTag::Snow),
        80 | 81 => ("Showers", "🌦️", CoarseTag::Rain),
        82 => ("Heavy showers", "🌦️", CoarseTag::Rain),
        85 => ("Snow showers", "🌨️", CoarseTag::Snow),
        86 => ("Heavy snow showers", "🌨️", CoarseTag::Snow),
        95 => ("Thunderstorm", "⛈️", CoarseTag::Rain),
        96 => ("Thunderstorm with hail", "⛈️", CoarseTag::Rain),
        99 => ("Severe thunderstorm with hail", "⛈️", CoarseTag::Rain),
        _ => ("Variable", "🌈", CoarseTag::Other),
    };

    ConditionInfo { label, emoji, tag }
}

/// Derive condition flags from the forecast and the season. Every rule is
/// evaluated; the results are unioned, so rain and snow can both be set when
/// a snow code arrives with a high precipitation probability.
pub fn derive_flags(forecast: &DailyForecast, season: Season) -> ConditionFlags {
    let tag = classify(forecast.condition_code).tag;

    let humid = season == Season::Summer && forecast.min_temp >= 20;

    ConditionFlags {
        rain: tag == CoarseTag::Rain
            || forecast.precipitation_amount > 0.0
            || forecast.precipitation_probability >= RAIN_PROBABILITY_THRESHOLD,
        snow: tag == CoarseTag::Snow,
        cloudy: tag == CoarseTag::Cloudy,
        clear: tag == CoarseTag::Clear,
        windy: forecast.wind_speed >= WINDY_THRESHOLD_MPS,
        humid,
        dry: season == Season::Winter && forecast.min_temp <= 5,
        uv_high: humid && forecast.max_temp >= 28,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(code: i32) -> DailyForecast {
        DailyForecast {
            min_temp: 10,
            max_temp: 15,
            condition_code: code,
            precipitation_probability: 0,
            precipitation_amount: 0.0,
            wind_speed: 0.0,
        }
    }

    #[test]
    fn classifier_is_total() {
        for code in [-1, 100, 9999, i32::MIN, i32::MAX] {
            let info = classify(code);
            assert_eq!(info.label, "Variable", "code {code}");
            assert_eq!(info.tag, CoarseTag::Other, "code {code}");
        }
    }

    #[test]
    fn freezing_precipitation_counts_as_rain() {
        for code in [56, 57, 66, 67] {
            assert_eq!(classify(code).tag, CoarseTag::Rain, "code {code}");
        }
    }

    #[test]
    fn fog_counts_as_cloudy() {
        assert_eq!(classify(45).tag, CoarseTag::Cloudy);
        assert_eq!(classify(48).tag, CoarseTag::Cloudy);
    }

    #[test]
    fn clear_and_mostly_clear_share_the_clear_tag() {
        assert_eq!(classify(0).tag, CoarseTag::Clear);
        assert_eq!(classify(1).tag, CoarseTag::Clear);
        assert_eq!(classify(2).tag, CoarseTag::Partly);
    }

    #[test]
    fn rain_flag_from_probability_threshold() {
        let mut f = forecast(0);
        f.precipitation_probability = 59;
        assert!(!derive_flags(&f, Season::Spring).rain);

        f.precipitation_probability = 60;
        assert!(derive_flags(&f, Season::Spring).rain);
    }

    #[test]
    fn rain_flag_from_any_precipitation_amount() {
        let mut f = forecast(0);
        f.precipitation_amount = 0.1;
        assert!(derive_flags(&f, Season::Spring).rain);
    }

    #[test]
    fn snow_and_rain_flags_can_co_occur() {
        let mut f = forecast(75);
        f.precipitation_probability = 80;

        let flags = derive_flags(&f, Season::Winter);
        assert!(flags.snow);
        assert!(flags.rain);
    }

    #[test]
    fn windy_flag_boundary() {
        let mut f = forecast(0);
        f.wind_speed = 7.9;
        assert!(!derive_flags(&f, Season::Spring).windy);

        f.wind_speed = 8.0;
        assert!(derive_flags(&f, Season::Spring).windy);
    }

    #[test]
    fn humid_and_uv_need_a_summer_morning() {
        let mut f = forecast(0);
        f.min_temp = 20;
        f.max_temp = 27;

        let flags = derive_flags(&f, Season::Summer);
        assert!(flags.humid);
        assert!(!flags.uv_high);

        f.max_temp = 28;
        let flags = derive_flags(&f, Season::Summer);
        assert!(flags.uv_high);

        // Same temperatures outside summer set neither.
        let flags = derive_flags(&f, Season::Autumn);
        assert!(!flags.humid);
        assert!(!flags.uv_high);
    }

    #[test]
    fn dry_flag_is_winter_only() {
        let mut f = forecast(0);
        f.min_temp = 5;
        assert!(derive_flags(&f, Season::Winter).dry);
        assert!(!derive_flags(&f, Season::Autumn).dry);

        f.min_temp = 6;
        assert!(!derive_flags(&f, Season::Winter).dry);
    }

    #[test]
    fn cloudy_and_clear_come_from_the_tag() {
        assert!(derive_flags(&forecast(3), Season::Spring).cloudy);
        assert!(derive_flags(&forecast(45), Season::Spring).cloudy);
        assert!(derive_flags(&forecast(0), Season::Spring).clear);
        assert!(!derive_flags(&forecast(2), Season::Spring).clear);
        assert!(!derive_flags(&forecast(2), Season::Spring).cloudy);
    }
}
