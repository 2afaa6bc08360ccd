pub mod config;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::BotResult;
use crate::weather::config::{CurrentWeatherResponse, WeatherSnapshot};

const UNITS: &str = "metric";
const LANG: &str = "ru";

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// `Ok(None)` при любом ответе кроме 200: город не найден, лимит,
    /// ошибка сервера — для пользователя это одно и то же.
    async fn current_weather(&self, city: &str) -> BotResult<Option<WeatherSnapshot>>;
}

pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> BotResult<Option<WeatherSnapshot>> {
        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("q", city),
                ("units", UNITS),
                ("appid", self.api_key.as_str()),
                ("lang", LANG),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            log::warn!("⛅ Weather API returned {} for {:?}", response.status(), city);
            return Ok(None);
        }

        let body = response.json::<CurrentWeatherResponse>().await?;
        let snapshot = body
            .weather
            .into_iter()
            .next()
            .map(|condition| WeatherSnapshot {
                description: condition.description,
                temperature_c: body.main.temp,
            });

        Ok(snapshot)
    }
}
