//! The outfit recommendation engine.
//!
//! Pure function from (forecast, flags, preferences) to garment text and
//! tips. Bucket arithmetic saturates at both ends; no input panics.

use crate::conditions;
use crate::model::{ConditionFlags, DailyForecast, OutfitRecommendation, UserPrefs};

struct Bucket {
    label: &'static str,
    top: &'static str,
    bottom: &'static str,
}

/// Temperature bands from coldest to hottest, selected by the morning low.
const BUCKETS: [Bucket; 10] = [
    Bucket {
        label: "frigid",
        top: "heavy padded parka + thick knit",
        bottom: "fleece-lined pants",
    },
    Bucket {
        label: "freezing",
        top: "padded coat + knit",
        bottom: "wool or fleece-lined pants",
    },
    Bucket {
        label: "cold",
        top: "wool coat + knit",
        bottom: "thick cotton pants",
    },
    Bucket {
        label: "chilly",
        top: "coat or padded jacket + sweatshirt",
        bottom: "cotton pants",
    },
    Bucket {
        label: "cool",
        top: "jacket or cardigan + long-sleeve tee",
        bottom: "jeans",
    },
    Bucket {
        label: "mild",
        top: "light jacket + light knit",
        bottom: "chinos",
    },
    Bucket {
        label: "pleasant",
        top: "long-sleeve shirt or light sweatshirt",
        bottom: "cotton pants or slacks",
    },
    Bucket {
        label: "warm",
        top: "shirt or thin long-sleeve tee",
        bottom: "light slacks",
    },
    Bucket {
        label: "hot",
        top: "short-sleeve tee + thin overshirt",
        bottom: "linen pants",
    },
    Bucket {
        label: "sweltering",
        top: "short-sleeve tee",
        bottom: "shorts or breathable pants",
    },
];

/// Inclusive upper bound of each band except the open-ended last one.
const BUCKET_CEILINGS: [i32; 9] = [-5, 0, 5, 9, 12, 16, 19, 22, 26];

const MAX_RENDERED_TIPS: usize = 3;

const CARRY_NOTE: &str = "since you don't mind a bag: ";

const LARGE_SWING_TIP: &str = "large swing between day and night, layer up";
const MILD_SWING_TIP: &str = "mild swing through the day, carry a light layer";

const RAIN_TIP: &str = "bring rain gear or an umbrella";
const SNOW_TIP: &str = "watch for ice, wear insulated waterproof footwear";
const WINDY_TIP: &str = "use a scarf or neck cover to raise perceived warmth";
const CLOUDY_TIP: &str = "perceived temperature runs lower without direct sun";
const HUMID_TIP: &str = "wear breathable fabric";
const DRY_TIP: &str = "bring moisturizer and lip balm";
const UV_TIP: &str = "wear a hat, sunglasses and sunscreen";

fn bucket_index(min_temp: i32) -> usize {
    BUCKET_CEILINGS
        .iter()
        .position(|&ceiling| min_temp <= ceiling)
        .unwrap_or(BUCKETS.len() - 1)
}

fn colder(index: usize) -> usize {
    index.saturating_sub(1)
}

fn warmer(index: usize) -> usize {
    (index + 1).min(BUCKETS.len() - 1)
}

/// Summed apparent-temperature correction from the active flags.
fn apparent_delta(min_temp: i32, flags: &ConditionFlags) -> i32 {
    let mut delta = 0;
    if flags.windy {
        delta -= 2;
    }
    if flags.rain {
        delta -= 1;
    }
    if flags.snow {
        delta -= 2;
    }
    if flags.cloudy {
        delta -= 1;
    }
    if flags.dry && min_temp <= 5 {
        delta -= 1;
    }
    if flags.humid && min_temp >= 20 {
        delta += 2;
    }
    if flags.uv_high && min_temp >= 20 {
        delta += 1;
    }
    delta
}

fn spread_tip(spread: i32) -> Option<&'static str> {
    if spread >= 10 {
        Some(LARGE_SWING_TIP)
    } else if spread >= 6 {
        Some(MILD_SWING_TIP)
    } else {
        None
    }
}

/// Tips in their fixed order: the spread tip first, then one sentence per
/// active flag. The order decides which tips survive truncation.
fn compose_tips(
    forecast: &DailyForecast,
    flags: &ConditionFlags,
    prefs: &UserPrefs,
) -> Vec<String> {
    let mut tips = Vec::new();

    let spread = forecast.max_temp - forecast.min_temp;
    if let Some(tip) = spread_tip(spread) {
        if prefs.carry_preference {
            tips.push(format!("{CARRY_NOTE}{tip}"));
        } else {
            tips.push(tip.to_string());
        }
    }

    let flag_tips: [(bool, &str); 7] = [
        (flags.rain, RAIN_TIP),
        (flags.snow, SNOW_TIP),
        (flags.windy, WINDY_TIP),
        (flags.cloudy, CLOUDY_TIP),
        (flags.humid, HUMID_TIP),
        (flags.dry, DRY_TIP),
        (flags.uv_high, UV_TIP),
    ];
    tips.extend(
        flag_tips
            .iter()
            .filter(|(active, _)| *active)
            .map(|(_, tip)| (*tip).to_string()),
    );

    tips
}

/// Derive the outfit for today.
///
/// 1. Pick a band by the morning low.
/// 2. Shift at most one band toward colder or warmer when the flag-adjusted
///    apparent temperature lands more than one degree off the low.
/// 3. Shift one band for the reader's cold sensitivity (sign only).
/// 4. Compose tips and truncate the rendered list to three.
pub fn recommend(
    forecast: &DailyForecast,
    flags: &ConditionFlags,
    prefs: &UserPrefs,
) -> OutfitRecommendation {
    let mut index = bucket_index(forecast.min_temp);

    let apparent = forecast.min_temp + apparent_delta(forecast.min_temp, flags);
    if apparent < forecast.min_temp - 1 {
        index = colder(index);
    } else if apparent > forecast.min_temp + 1 {
        index = warmer(index);
    }

    match prefs.cold_sensitivity.signum() {
        1 => index = colder(index),
        -1 => index = warmer(index),
        _ => {}
    }

    let all_tips = compose_tips(forecast, flags, prefs);
    let tips = all_tips.iter().take(MAX_RENDERED_TIPS).cloned().collect();

    let bucket = &BUCKETS[index];
    OutfitRecommendation {
        top: bucket.top.to_string(),
        bottom: bucket.bottom.to_string(),
        tips,
        all_tips,
        condition_label: conditions::classify(forecast.condition_code).label.to_string(),
    }
}
