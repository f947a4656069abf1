use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use clap::{Parser, Subcommand};
use wearcast_core::{
    Config, ForecastClient, GeocodeClient, RunError, Season, SlackMessage, WebhookPublisher,
    classify, compose, derive_flags, recommend,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wearcast", version, about = "Weekday-morning weather & outfit briefing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch today's forecast and post the briefing to the chat webhook.
    Send {
        /// Post even on a weekend.
        #[arg(long)]
        force: bool,
    },

    /// Build the briefing and print it to stdout without posting.
    Preview,
}

impl Cli {
    pub async fn run(self) -> Result<(), RunError> {
        let today = Local::now().date_naive();

        match self.command {
            Command::Send { force } => {
                if !force && is_weekend(today.weekday()) {
                    tracing::info!(%today, "weekend, skipping the briefing");
                    return Ok(());
                }

                let config = Config::from_env()?;
                let message = build_briefing(&config, today).await?;

                let publisher = WebhookPublisher::new(&config.webhook_url)?;
                publisher.post(&message).await?;
                tracing::info!("briefing sent");
            }
            Command::Preview => {
                let config = Config::from_env()?;
                let message = build_briefing(&config, today).await?;

                let rendered = serde_json::to_string_pretty(&message)
                    .context("Failed to render the briefing as JSON")?;
                println!("{rendered}");
            }
        }

        Ok(())
    }
}

/// Run the pipeline up to (but not including) the publish step:
/// resolve coordinates, fetch today's forecast, derive the recommendation,
/// compose the message.
async fn build_briefing(config: &Config, today: NaiveDate) -> Result<SlackMessage, RunError> {
    let coords = match config.coordinates {
        Some(coords) => coords,
        None => {
            let geocoder = GeocodeClient::new()?;
            let coords = geocoder.resolve(&config.address).await?;
            tracing::info!(
                lat = coords.latitude,
                lon = coords.longitude,
                address = %config.address,
                "resolved address"
            );
            coords
        }
    };

    let forecast = ForecastClient::new()?.fetch_today(coords, &config.timezone).await?;
    tracing::info!(
        min = forecast.min_temp,
        max = forecast.max_temp,
        code = forecast.condition_code,
        "fetched today's forecast"
    );

    let flags = derive_flags(&forecast, Season::from_date(today));
    let outfit = recommend(&forecast, &flags, &config.prefs);
    let condition = classify(forecast.condition_code);

    Ok(compose(&config.address, &forecast, condition, &outfit))
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturday_and_sunday_are_skipped() {
        // 2025-01-04 is a Saturday.
        let sat = NaiveDate::from_ymd_opt(2025, 1, 4).expect("valid date");
        let sun = sat.succ_opt().expect("valid date");
        let mon = sun.succ_opt().expect("valid date");

        assert!(is_weekend(sat.weekday()));
        assert!(is_weekend(sun.weekday()));
        assert!(!is_weekend(mon.weekday()));
    }
}
