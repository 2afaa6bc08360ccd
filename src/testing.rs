//! Подставные геокодер, часовые пояса и погода для тестов обработчиков.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono_tz::Tz;

use crate::bot_state::BotState;
use crate::error::{BotError, BotResult};
use crate::geo::config::Coordinates;
use crate::geo::{Geocoder, TimezoneResolver};
use crate::weather::config::WeatherSnapshot;
use crate::weather::WeatherProvider;

pub const PARIS: Coordinates = Coordinates { latitude: 48.8566, longitude: 2.3522 };
pub const TOKYO: Coordinates = Coordinates { latitude: 35.6762, longitude: 139.6503 };
pub const POINT_NEMO: Coordinates = Coordinates { latitude: -48.8767, longitude: -123.3933 };

/// Геокодер по таблице; `"boom"` имитирует битый ответ сервиса
#[derive(Default)]
pub struct FakeGeocoder {
    places: HashMap<String, Coordinates>,
}

impl FakeGeocoder {
    pub fn with(mut self, name: &str, coordinates: Coordinates) -> Self {
        self.places.insert(name.to_string(), coordinates);
        self
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, query: &str) -> BotResult<Option<Coordinates>> {
        if query == "boom" {
            return Err(BotError::InvalidCoordinate("boom".to_string()));
        }
        Ok(self.places.get(query).copied())
    }
}

pub struct FakeTimezones;

impl TimezoneResolver for FakeTimezones {
    fn timezone_at(&self, coordinates: Coordinates) -> Option<Tz> {
        if coordinates == PARIS {
            Some(chrono_tz::Europe::Paris)
        } else if coordinates == TOKYO {
            Some(chrono_tz::Asia::Tokyo)
        } else {
            None
        }
    }
}

/// Возвращает заданную погоду и считает вызовы
#[derive(Default)]
pub struct FakeWeather {
    pub snapshot: Option<WeatherSnapshot>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current_weather(&self, _city: &str) -> BotResult<Option<WeatherSnapshot>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot.clone())
    }
}

pub fn test_state() -> BotState {
    test_state_with_weather(Arc::new(FakeWeather::default()))
}

pub fn test_state_with_weather(weather: Arc<dyn WeatherProvider>) -> BotState {
    let geocoder = FakeGeocoder::default()
        .with("Paris", PARIS)
        .with("Tokyo", TOKYO)
        .with("Point Nemo", POINT_NEMO);
    BotState::new(Arc::new(geocoder), Arc::new(FakeTimezones), weather)
}
