// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// The city the weather data belongs to.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CityData {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    pub city_name: String,
}

/// The weather condition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum WeatherCondition {
    #[default]
    Unknown,
    Sunny,
    PartiallyCloudy,
    MostlyCloudy,
    Cloudy,
    SunnyRainy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
}

impl WeatherCondition {
    /// Short label shown next to the description.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Sunny => "Sunny",
            Self::PartiallyCloudy => "Partially cloudy",
            Self::MostlyCloudy => "Mostly cloudy",
            Self::Cloudy => "Cloudy",
            Self::SunnyRainy => "Sun and rain",
            Self::Rainy => "Rainy",
            Self::Stormy => "Stormy",
            Self::Snowy => "Snowy",
            Self::Foggy => "Foggy",
        }
    }
}

/// Daily temperature range in °C.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TemperatureData {
    pub min: f64,
    pub max: f64,
}

/// The precipitation data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PrecipitationData {
    /// The probability of precipitation, from 0 to 1.
    pub probability: f64,

    /// The volume of rain in mm.
    pub rain_volume: f64,

    /// The volume of snow in mm.
    pub snow_volume: f64,
}

/// The current weather data.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct WeatherData {
    pub condition: WeatherCondition,
    pub description: String,

    pub current_temperature: f64,
    pub current_humidity: f64,
    pub detailed_temperature: TemperatureData,

    pub precipitation: PrecipitationData,
    pub uv_index: f64,

    /// Atmospheric pressure at sea level in hPa.
    pub pressure_hpa: f64,

    /// Sunrise as a Unix timestamp in seconds.
    pub sunrise: i64,

    /// Sunset as a Unix timestamp in seconds.
    pub sunset: i64,
}

pub type WeatherControllerPointer = Box<dyn WeatherController + Send>;

/// The weather controller trait that provides the weather data.
pub trait WeatherController {
    /// Fetches the city data.
    fn city_data(&self) -> Result<CityData, Box<dyn std::error::Error>>;

    /// Fetches the current weather data.
    fn current_data(&self) -> Result<WeatherData, Box<dyn std::error::Error>>;
}

