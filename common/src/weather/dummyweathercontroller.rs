// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::weather::weathercontroller::{CityData, WeatherController, WeatherData};

/// Serves a fixed weather snapshot loaded from JSON.
#[derive(Deserialize, Default)]
pub struct DummyWeatherController {
    city_data: CityData,
    weather_data: WeatherData,
}

impl DummyWeatherController {
    /// Loads the sample snapshot bundled with the crate.
    pub fn new() -> Result<Self, serde_json::Error> {
        let json_data = std::include_str!("./dummyweather.json");

        Self::from_json(json_data)
    }

    /// Loads a snapshot with `city_data` and `weather_data` objects.
    pub fn from_json(json_data: &str) -> Result<Self, serde_json::Error> {
        let controller = serde_json::from_str::<Self>(json_data)?;
        log::debug!("Loaded weather snapshot for {}", controller.city_data.city_name);

        Ok(controller)
    }
}

impl WeatherController for DummyWeatherController {
    fn current_data(&self) -> Result<WeatherData, Box<dyn std::error::Error>> {
        Ok(self.weather_data.clone())
    }

    fn city_data(&self) -> Result<CityData, Box<dyn std::error::Error>> {
        Ok(self.city_data.clone())
    }
}

#[test]
fn test_dummy_weather_controller() {
    let controller = DummyWeatherController::new().unwrap();
    let city_data = controller.city_data().unwrap();
    let weather_data = controller.current_data().unwrap();

    assert_eq!(city_data.city_name, "Reykjavik");
    assert_eq!(weather_data.current_temperature, 7.4);
    assert_eq!(weather_data.pressure_hpa, 1003.0);
}

#[test]
fn test_dummy_weather_controller_from_json() {
    let controller = DummyWeatherController::from_json(
        r#"{
            "city_data": { "lat": 59.94, "lon": 30.31, "city_name": "Saint Petersburg" },
            "weather_data": { "description": "light rain", "pressure_hpa": 995.5 }
        }"#,
    )
    .unwrap();

    let weather_data = controller.current_data().unwrap();
    assert_eq!(controller.city_data().unwrap().city_name, "Saint Petersburg");
    assert_eq!(weather_data.description, "light rain");
    assert_eq!(weather_data.sunrise, 0);
}

#[test]
fn test_dummy_weather_controller_rejects_malformed_json() {
    assert!(DummyWeatherController::from_json("{ \"city_data\": 42 }").is_err());
}
