//! Scene asset selection by weather description.
//!
//! The forecast screen plays a background video chosen by exact
//! (lowercased) match on the condition description; anything
//! unrecognized falls back to the default scene.

use serde::{Deserialize, Serialize};

/// Decorative background scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SceneAsset {
    ClearSky,
    FewClouds,
    ScatteredClouds,
    BrokenClouds,
    OvercastClouds,
    ShowerRain,
    Rain,
    Thunderstorm,
    Drizzle,
    LightRain,
    Snow,
    Haze,
    #[default]
    Fallback,
}

impl SceneAsset {
    /// Select a scene from a condition description.
    pub fn from_description(description: &str) -> Self {
        match description.to_lowercase().as_str() {
            "clear sky" => Self::ClearSky,
            "few clouds" => Self::FewClouds,
            "scattered clouds" => Self::ScatteredClouds,
            "broken clouds" => Self::BrokenClouds,
            "overcast clouds" => Self::OvercastClouds,
            "shower rain" => Self::ShowerRain,
            "rain" => Self::Rain,
            "thunderstorm" => Self::Thunderstorm,
            "drizzle" => Self::Drizzle,
            "light rain" => Self::LightRain,
            "snow" => Self::Snow,
            "haze" => Self::Haze,
            _ => Self::Fallback,
        }
    }

    /// Relative path of the video asset for this scene.
    pub fn asset_path(&self) -> &'static str {
        match self {
            Self::ClearSky => "videos/clear.mp4",
            Self::FewClouds => "videos/few_clouds.mp4",
            Self::ScatteredClouds => "videos/scattered_clouds.mp4",
            Self::BrokenClouds => "videos/broken_clouds.mp4",
            Self::OvercastClouds => "videos/overcast_clouds.mp4",
            Self::ShowerRain => "videos/shower_rain.mp4",
            Self::Rain => "videos/rain.mp4",
            Self::Thunderstorm => "videos/thunderstorm.mp4",
            Self::Drizzle => "videos/drizzle.mp4",
            Self::LightRain => "videos/light_rain.mp4",
            Self::Snow => "videos/snow.mp4",
            Self::Haze => "videos/haze.mp4",
            Self::Fallback => "videos/default.mp4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_descriptions_map() {
        assert_eq!(SceneAsset::from_description("clear sky"), SceneAsset::ClearSky);
        assert_eq!(SceneAsset::from_description("light rain"), SceneAsset::LightRain);
        assert_eq!(SceneAsset::from_description("thunderstorm"), SceneAsset::Thunderstorm);
        assert_eq!(SceneAsset::from_description("haze"), SceneAsset::Haze);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(SceneAsset::from_description("Broken Clouds"), SceneAsset::BrokenClouds);
        assert_eq!(SceneAsset::from_description("SNOW"), SceneAsset::Snow);
    }

    #[test]
    fn test_unknown_description_falls_back() {
        assert_eq!(SceneAsset::from_description("volcanic ash"), SceneAsset::Fallback);
        assert_eq!(SceneAsset::from_description(""), SceneAsset::Fallback);
    }

    #[test]
    fn test_heavy_rain_is_not_rain() {
        // Substrings do not match: the mapping is exact per description.
        assert_eq!(SceneAsset::from_description("heavy intensity rain"), SceneAsset::Fallback);
    }

    #[test]
    fn test_every_scene_has_an_asset() {
        let scenes = [
            SceneAsset::ClearSky,
            SceneAsset::FewClouds,
            SceneAsset::ScatteredClouds,
            SceneAsset::BrokenClouds,
            SceneAsset::OvercastClouds,
            SceneAsset::ShowerRain,
            SceneAsset::Rain,
            SceneAsset::Thunderstorm,
            SceneAsset::Drizzle,
            SceneAsset::LightRain,
            SceneAsset::Snow,
            SceneAsset::Haze,
            SceneAsset::Fallback,
        ];
        for scene in scenes {
            assert!(scene.asset_path().ends_with(".mp4"));
        }
    }
}
