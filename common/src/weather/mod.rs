// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod dummyweathercontroller;
mod summary;
mod weathercontroller;

pub use weathercontroller::{
    CityData, PrecipitationData, TemperatureData, WeatherCondition, WeatherController,
    WeatherControllerPointer, WeatherData,
};

pub use dummyweathercontroller::DummyWeatherController;
pub use summary::WeatherSummary;

pub mod utils;
