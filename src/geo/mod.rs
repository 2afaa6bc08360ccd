pub mod config;

use async_trait::async_trait;
use chrono_tz::Tz;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use tzf_rs::DefaultFinder;

use crate::error::{BotError, BotResult};
use crate::geo::config::{Coordinates, NominatimPlace};

/// Название места -> координаты
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` — сервис не нашёл совпадений.
    async fn geocode(&self, query: &str) -> BotResult<Option<Coordinates>>;
}

/// Координаты -> часовой пояс IANA
pub trait TimezoneResolver: Send + Sync {
    fn timezone_at(&self, coordinates: Coordinates) -> Option<Tz>;
}

pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> BotResult<Option<Coordinates>> {
        let places = self
            .client
            .get(format!("{}/search", self.base_url))
            .header(USER_AGENT, &self.user_agent)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<NominatimPlace>>()
            .await?;

        let Some(place) = places.into_iter().next() else {
            log::debug!("🔍 Geocoder has no match for {:?}", query);
            return Ok(None);
        };

        log::debug!("📍 Geocoded {:?} -> {:?}", query, place.display_name);

        Ok(Some(Coordinates {
            latitude: parse_coordinate(&place.lat)?,
            longitude: parse_coordinate(&place.lon)?,
        }))
    }
}

fn parse_coordinate(raw: &str) -> BotResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| BotError::InvalidCoordinate(raw.to_string()))
}

/// Локальный поиск часового пояса по полигонам tzf
pub struct TzfResolver {
    finder: DefaultFinder,
}

impl TzfResolver {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneResolver for TzfResolver {
    fn timezone_at(&self, coordinates: Coordinates) -> Option<Tz> {
        let name = self
            .finder
            .get_tz_name(coordinates.longitude, coordinates.latitude);
        match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                log::warn!("🌊 No usable timezone for {:?} (got {:?})", coordinates, name);
                None
            }
        }
    }
}
