//! Weather service for Stratus
//!
//! Provides current conditions and multi-day forecasts keyed by city
//! name, plus the description-to-scene mapping used for the decorative
//! background.

pub mod client;
pub mod scene;
pub mod types;

pub use client::WeatherClient;
pub use scene::SceneAsset;
pub use types::*;
