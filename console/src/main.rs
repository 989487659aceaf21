use std::path::PathBuf;

use anyhow::Context;
use weather_display_common::weather::utils::time_string;
use weather_display_common::weather::{
    DummyWeatherController, WeatherControllerPointer, WeatherSummary,
};

/// Holds the weather controller and prints its current data as a summary.
///
/// Without a path the bundled Reykjavik sample is shown, otherwise the JSON file at
/// the path is loaded. It must contain a `city_data` and a `weather_data` object.
struct App {
    weather_controller: WeatherControllerPointer,
}

impl App {
    fn new(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let weather_controller: WeatherControllerPointer = match path {
            Some(path) => {
                log::info!("Reading weather data from {}", path.display());
                let json_data = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;

                Box::new(
                    DummyWeatherController::from_json(&json_data)
                        .with_context(|| format!("invalid weather data in {}", path.display()))?,
                )
            }
            None => Box::new(DummyWeatherController::new()?),
        };

        Ok(Self { weather_controller })
    }

    fn summary(&self) -> anyhow::Result<WeatherSummary> {
        WeatherSummary::from_controller(&*self.weather_controller)
            .map_err(|e| anyhow::anyhow!("failed to fetch weather data: {e}"))
    }

    fn run(&self) -> anyhow::Result<()> {
        let summary = self.summary()?;

        println!("{summary}");
        println!("Updated: {}", time_string(chrono::Utc::now().timestamp() as f64));

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = App::new(std::env::args_os().nth(1).map(PathBuf::from))?;

    app.run()
}

#[test]
fn test_app_summarizes_bundled_sample() {
    let app = App::new(None).unwrap();
    let summary = app.summary().unwrap();

    assert_eq!(summary.city, "Reykjavik");
    assert_eq!(summary.pressure_mm, 752.0);
}

#[test]
fn test_app_reports_missing_file() {
    let error = App::new(Some(PathBuf::from("does/not/exist.json"))).err().unwrap();

    assert!(error.to_string().starts_with("failed to read"));
}
