//! Core library for `wearcast`, the weekday-morning outfit briefing bot.
//!
//! This crate defines:
//! - Environment-driven configuration
//! - Clients for the geocoding, forecast and webhook services
//! - The condition classifier, flag deriver and outfit recommendation engine
//! - Slack Block Kit message composition
//!
//! It is used by `wearcast-cli`, but can also be reused by other binaries or services.

pub mod conditions;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod message;
pub mod model;
pub mod outfit;
pub mod publish;

pub use conditions::{CoarseTag, ConditionInfo, classify, derive_flags};
pub use config::Config;
pub use error::RunError;
pub use forecast::ForecastClient;
pub use geocode::GeocodeClient;
pub use message::{SlackMessage, compose};
pub use model::{ConditionFlags, Coordinates, DailyForecast, OutfitRecommendation, Season, UserPrefs};
pub use outfit::recommend;
pub use publish::WebhookPublisher;
