//! Slack Block Kit message composition. Pure formatting; field order is
//! fixed and nothing is dropped on zero values, except the precipitation
//! amount which only appears when it rounds above 0.0 mm at one decimal.

use serde::Serialize;

use crate::conditions::ConditionInfo;
use crate::model::{DailyForecast, OutfitRecommendation};

/// Glyph in front of each rendered tip line.
pub const TIP_MARKER: &str = "• ";

const OUTFIT_HEADER: &str = "*Today's outfit* 👕";
const FOOTER: &str = "Sent automatically on weekday mornings · data from Open-Meteo";

#[derive(Debug, Serialize)]
pub struct SlackMessage {
    /// Fallback line for notifications and clients without block support.
    pub text: String,
    pub mrkdwn: bool,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<MrkdwnText>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<MrkdwnText>>,
    },
    Divider,
    Context {
        elements: Vec<MrkdwnText>,
    },
}

#[derive(Debug, Serialize)]
pub struct MrkdwnText {
    #[serde(rename = "type")]
    kind: &'static str,
    pub text: String,
}

impl MrkdwnText {
    fn new(text: impl Into<String>) -> Self {
        Self { kind: "mrkdwn", text: text.into() }
    }
}

/// Assemble the briefing: greeting, field block, divider, outfit block and
/// the schedule footer.
pub fn compose(
    address: &str,
    forecast: &DailyForecast,
    condition: ConditionInfo,
    outfit: &OutfitRecommendation,
) -> SlackMessage {
    let greeting = format!(
        "Good morning! {}\nHere's today's weather for {}.",
        condition.emoji, address
    );

    let mut fields = vec![
        MrkdwnText::new(format!("*Low*\n{}°C", forecast.min_temp)),
        MrkdwnText::new(format!("*High*\n{}°C", forecast.max_temp)),
        MrkdwnText::new(format!("*Weather*\n{}", outfit.condition_label)),
        MrkdwnText::new(format!("*Chance of rain*\n{}%", forecast.precipitation_probability)),
    ];

    let rounded_amount = (forecast.precipitation_amount * 10.0).round() / 10.0;
    if rounded_amount > 0.0 {
        fields.push(MrkdwnText::new(format!("*Precipitation*\n{rounded_amount:.1} mm")));
    }

    let mut outfit_lines = vec![
        OUTFIT_HEADER.to_string(),
        format!("Top - {}", outfit.top),
        format!("Bottom - {}", outfit.bottom),
    ];
    for tip in &outfit.tips {
        outfit_lines.push(format!("{TIP_MARKER}{tip}"));
    }

    let fallback = format!(
        "{} Low {}° / High {}° · {}",
        condition.emoji, forecast.min_temp, forecast.max_temp, outfit.condition_label
    );

    SlackMessage {
        text: fallback,
        mrkdwn: true,
        blocks: vec![
            Block::Section { text: Some(MrkdwnText::new(greeting)), fields: None },
            Block::Section { text: None, fields: Some(fields) },
            Block::Divider,
            Block::Section {
                text: Some(MrkdwnText::new(outfit_lines.join("\n"))),
                fields: None,
            },
            Block::Context { elements: vec![MrkdwnText::new(FOOTER)] },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::classify;
    use serde_json::{Value, json};

    fn forecast() -> DailyForecast {
        DailyForecast {
            min_temp: -6,
            max_temp: 2,
            condition_code: 75,
            precipitation_probability: 80,
            precipitation_amount: 3.25,
            wind_speed: 9.0,
        }
    }

    fn outfit() -> OutfitRecommendation {
        OutfitRecommendation {
            top: "heavy padded parka + thick knit".to_string(),
            bottom: "fleece-lined pants".to_string(),
            tips: vec!["bring rain gear or an umbrella".to_string()],
            all_tips: vec!["bring rain gear or an umbrella".to_string()],
            condition_label: "Heavy snow".to_string(),
        }
    }

    fn as_json(message: &SlackMessage) -> Value {
        serde_json::to_value(message).expect("message must serialize")
    }

    #[test]
    fn block_order_is_fixed() {
        let message = compose("Seoul Mapo-gu", &forecast(), classify(75), &outfit());
        let value = as_json(&message);

        let types: Vec<&str> = value["blocks"]
            .as_array()
            .expect("blocks array")
            .iter()
            .map(|b| b["type"].as_str().expect("block type"))
            .collect();
        assert_eq!(types, vec!["section", "section", "divider", "section", "context"]);
    }

    #[test]
    fn field_block_keeps_order_and_formats_values() {
        let message = compose("Seoul Mapo-gu", &forecast(), classify(75), &outfit());
        let value = as_json(&message);

        let fields = value["blocks"][1]["fields"].as_array().expect("fields array");
        let texts: Vec<&str> =
            fields.iter().map(|f| f["text"].as_str().expect("field text")).collect();

        assert_eq!(
            texts,
            vec![
                "*Low*\n-6°C",
                "*High*\n2°C",
                "*Weather*\nHeavy snow",
                "*Chance of rain*\n80%",
                "*Precipitation*\n3.3 mm",
            ]
        );
        assert_eq!(fields[0]["type"], json!("mrkdwn"));
    }

    #[test]
    fn trace_precipitation_is_omitted() {
        let mut f = forecast();
        f.precipitation_amount = 0.04;

        let message = compose("Seoul Mapo-gu", &f, classify(75), &outfit());
        let value = as_json(&message);

        let fields = value["blocks"][1]["fields"].as_array().expect("fields array");
        assert_eq!(fields.len(), 4);

        // Zero probability still renders; only the amount has a drop rule.
        f.precipitation_probability = 0;
        let value = as_json(&compose("Seoul Mapo-gu", &f, classify(75), &outfit()));
        let fields = value["blocks"][1]["fields"].as_array().expect("fields array");
        assert_eq!(fields[3]["text"], json!("*Chance of rain*\n0%"));
    }

    #[test]
    fn greeting_carries_the_condition_emoji_and_address() {
        let message = compose("Seoul Mapo-gu", &forecast(), classify(75), &outfit());
        let value = as_json(&message);

        let greeting = value["blocks"][0]["text"]["text"].as_str().expect("greeting");
        assert!(greeting.starts_with("Good morning! ❄️"));
        assert!(greeting.contains("Seoul Mapo-gu"));
        assert_eq!(greeting.lines().count(), 2);
    }

    #[test]
    fn tips_render_with_the_marker_glyph() {
        let message = compose("Seoul Mapo-gu", &forecast(), classify(75), &outfit());
        let value = as_json(&message);

        let body = value["blocks"][3]["text"]["text"].as_str().expect("outfit text");
        assert!(body.contains("Top - heavy padded parka + thick knit"));
        assert!(body.contains("Bottom - fleece-lined pants"));
        assert!(body.contains("• bring rain gear or an umbrella"));
    }

    #[test]
    fn empty_tips_leave_no_marker_lines() {
        let mut rec = outfit();
        rec.tips.clear();

        let message = compose("Seoul Mapo-gu", &forecast(), classify(75), &rec);
        let value = as_json(&message);

        let body = value["blocks"][3]["text"]["text"].as_str().expect("outfit text");
        assert!(!body.contains('•'));
        assert_eq!(body.lines().count(), 3);
    }

    #[test]
    fn fallback_line_summarizes_the_day() {
        let message = compose("Seoul Mapo-gu", &forecast(), classify(75), &outfit());
        assert_eq!(
            message.text,
            "❄️ Low -6° / High 2° · Heavy snow"
        );
    }

    #[test]
    fn divider_serializes_without_extra_keys() {
        let message = compose("Seoul Mapo-gu", &forecast(), classify(75), &outfit());
        let value = as_json(&message);
        assert_eq!(value["blocks"][2], json!({ "type": "divider" }));
    }
}
