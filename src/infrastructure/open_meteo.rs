// Open-Meteo repository implementation
use crate::application::weather_repository::{FetchError, WeatherRepository};
use crate::domain::conditions::ConditionRecord;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const LATITUDE: &str = "1.3521";
const LONGITUDE: &str = "103.8198";
const TIMEZONE: &str = "Asia/Singapore";
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,cloud_cover,wind_speed_10m,wind_direction_10m";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenMeteoRepository {
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

/// The `current` member of the forecast response. Every field is required;
/// serde rejects a body missing any of them, so no partial record can leak
/// out of this module.
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: u8,
    apparent_temperature: f64,
    precipitation: f64,
    weather_code: u16,
    cloud_cover: u8,
    wind_speed_10m: f64,
    wind_direction_10m: u16,
}

impl From<CurrentConditions> for ConditionRecord {
    fn from(current: CurrentConditions) -> Self {
        ConditionRecord {
            temperature_c: current.temperature_2m,
            apparent_temperature_c: current.apparent_temperature,
            relative_humidity_pct: current.relative_humidity_2m,
            precipitation_mm: current.precipitation,
            cloud_cover_pct: current.cloud_cover,
            wind_speed_kmh: current.wind_speed_10m,
            wind_direction_deg: current.wind_direction_10m,
            weather_code: current.weather_code,
        }
    }
}

impl OpenMeteoRepository {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WeatherRepository for OpenMeteoRepository {
    async fn fetch_current(&self) -> Result<ConditionRecord, FetchError> {
        let response = self
            .client
            .get(FORECAST_URL)
            .query(&[
                ("latitude", LATITUDE),
                ("longitude", LONGITUDE),
                ("current", CURRENT_FIELDS),
                ("timezone", TIMEZONE),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let forecast = response
            .json::<ForecastResponse>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(forecast.current.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_conditions_map_field_by_field() {
        let body = r#"{
            "current": {
                "temperature_2m": 31.2,
                "relative_humidity_2m": 70,
                "apparent_temperature": 35.0,
                "precipitation": 0.4,
                "weather_code": 2,
                "cloud_cover": 40,
                "wind_speed_10m": 12.5,
                "wind_direction_10m": 90
            }
        }"#;

        let forecast: ForecastResponse = serde_json::from_str(body).unwrap();
        let record = ConditionRecord::from(forecast.current);

        assert_eq!(record.temperature_c, 31.2);
        assert_eq!(record.apparent_temperature_c, 35.0);
        assert_eq!(record.relative_humidity_pct, 70);
        assert_eq!(record.precipitation_mm, 0.4);
        assert_eq!(record.weather_code, 2);
        assert_eq!(record.cloud_cover_pct, 40);
        assert_eq!(record.wind_speed_kmh, 12.5);
        assert_eq!(record.wind_direction_deg, 90);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // No wind_direction_10m: the whole body must fail to parse.
        let body = r#"{
            "current": {
                "temperature_2m": 31.2,
                "relative_humidity_2m": 70,
                "apparent_temperature": 35.0,
                "precipitation": 0.0,
                "weather_code": 2,
                "cloud_cover": 40,
                "wind_speed_10m": 12.5
            }
        }"#;

        assert!(serde_json::from_str::<ForecastResponse>(body).is_err());
    }

    #[test]
    fn test_missing_current_object_is_rejected() {
        assert!(serde_json::from_str::<ForecastResponse>(r#"{"elevation": 7.0}"#).is_err());
    }
}
