use serde::{Deserialize, Serialize};

/// Ответ OpenWeatherMap `/data/2.5/weather`, только нужные поля
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: MainReadings,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

/// Погода на момент запроса, не кэшируется
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub description: String,
    pub temperature_c: f64,
}

impl WeatherSnapshot {
    pub fn summary(&self) -> String {
        format!(
            "{}, температура: {}°C",
            capitalize(&self.description),
            self.temperature_c
        )
    }
}

/// Первая буква заглавная, остальные строчные
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
