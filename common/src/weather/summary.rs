// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::weather::utils::{capitalize_first_letter, pressure_mm, time_string};
use crate::weather::weathercontroller::{
    CityData, PrecipitationData, TemperatureData, WeatherCondition, WeatherController,
    WeatherData,
};

/// Display-ready view of the current weather for one city.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSummary {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub condition: WeatherCondition,
    pub description: String,
    pub temperature_celsius: f64,
    pub temperature_range: TemperatureData,
    pub humidity_percent: f64,
    pub precipitation: PrecipitationData,
    pub uv_index: f64,
    /// Pressure in mmHg, rounded to a whole number.
    pub pressure_mm: f64,
    pub sunrise: String,
    pub sunset: String,
}

impl WeatherSummary {
    pub fn new(city_data: &CityData, weather_data: &WeatherData) -> Self {
        Self {
            city: city_data.city_name.clone(),
            lat: city_data.lat,
            lon: city_data.lon,
            condition: weather_data.condition.clone(),
            description: capitalize_first_letter(Some(&weather_data.description)),
            temperature_celsius: weather_data.current_temperature,
            temperature_range: weather_data.detailed_temperature.clone(),
            humidity_percent: weather_data.current_humidity,
            precipitation: weather_data.precipitation.clone(),
            uv_index: weather_data.uv_index,
            pressure_mm: pressure_mm(weather_data.pressure_hpa),
            sunrise: time_string(weather_data.sunrise as f64),
            sunset: time_string(weather_data.sunset as f64),
        }
    }

    /// Fetches city and current weather from `controller` and summarizes them.
    pub fn from_controller(
        controller: &dyn WeatherController,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let city_data = controller.city_data()?;
        let weather_data = controller.current_data()?;
        log::debug!("Summarizing weather data: {weather_data:?}");

        Ok(Self::new(&city_data, &weather_data))
    }
}

impl fmt::Display for WeatherSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({:.2}, {:.2})", self.city, self.lat, self.lon)?;
        writeln!(f, "{}: {}", self.condition.label(), self.description)?;
        writeln!(
            f,
            "Temperature: {:.1}°C ({:.1} to {:.1}°C)",
            self.temperature_celsius, self.temperature_range.min, self.temperature_range.max
        )?;
        writeln!(f, "Humidity: {:.0}%", self.humidity_percent)?;
        writeln!(
            f,
            "Precipitation: {:.0}%, rain {:.1} mm, snow {:.1} mm",
            self.precipitation.probability * 100.0,
            self.precipitation.rain_volume,
            self.precipitation.snow_volume
        )?;
        writeln!(f, "UV index: {:.1}", self.uv_index)?;
        writeln!(f, "Pressure: {} mmHg", self.pressure_mm)?;
        writeln!(f, "Sunrise: {}", self.sunrise)?;
        write!(f, "Sunset: {}", self.sunset)
    }
}

#[test]
fn test_weather_summary() {
    let controller = crate::weather::DummyWeatherController::new().unwrap();
    let summary = WeatherSummary::from_controller(&controller).unwrap();

    assert_eq!(summary.city, "Reykjavik");
    assert_eq!(summary.lat, 64.1355);
    assert_eq!(summary.condition, WeatherCondition::MostlyCloudy);
    assert_eq!(summary.description, "Broken clouds");
    assert_eq!(summary.temperature_range.min, 4.9);
    assert_eq!(summary.precipitation.rain_volume, 0.4);
    assert_eq!(summary.uv_index, 0.6);
    assert_eq!(summary.pressure_mm, 752.0);
    assert_eq!(summary.sunrise, "08:35:00");
    assert_eq!(summary.sunset, "17:50:00");
}

#[test]
fn test_weather_summary_display() {
    let summary = WeatherSummary::new(
        &CityData {
            city_name: "Reykjavik".into(),
            lat: 64.14,
            lon: -21.9,
        },
        &WeatherData {
            condition: WeatherCondition::Snowy,
            description: "light snow".into(),
            current_temperature: -2.3,
            current_humidity: 64.0,
            detailed_temperature: TemperatureData { min: -5.0, max: 1.5 },
            precipitation: PrecipitationData {
                probability: 0.5,
                rain_volume: 0.0,
                snow_volume: 2.0,
            },
            uv_index: 1.0,
            pressure_hpa: 1000.0,
            sunrise: 0,
            sunset: 3_661,
        },
    );

    assert_eq!(
        summary.to_string(),
        "Reykjavik (64.14, -21.90)\n\
         Snowy: Light snow\n\
         Temperature: -2.3°C (-5.0 to 1.5°C)\n\
         Humidity: 64%\n\
         Precipitation: 50%, rain 0.0 mm, snow 2.0 mm\n\
         UV index: 1.0\n\
         Pressure: 750 mmHg\n\
         Sunrise: 00:00:00\n\
         Sunset: 01:01:01"
    );
}

#[test]
fn test_weather_summary_of_empty_data() {
    let summary = WeatherSummary::new(&CityData::default(), &WeatherData::default());

    assert_eq!(summary.condition.label(), "Unknown");
    assert_eq!(summary.description, "");
    assert_eq!(summary.pressure_mm, 0.0);
    assert_eq!(summary.sunrise, "00:00:00");
}
