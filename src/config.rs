use std::env;
use thiserror::Error;

const BOT_TOKEN_ENV: &str = "TELOXIDE_TOKEN";
const WEATHER_API_KEY_ENV: &str = "WEATHER_API_KEY";
const WEATHER_API_URL_ENV: &str = "WEATHER_API_URL";
const GEOCODER_URL_ENV: &str = "GEOCODER_URL";
const GEOCODER_USER_AGENT_ENV: &str = "GEOCODER_USER_AGENT";

const DEFAULT_WEATHER_API_URL: &str = "http://api.openweathermap.org";
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_GEOCODER_USER_AGENT: &str = "city_time_weather_bot";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
}

/// Настройки процесса, читаются один раз при старте
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub weather_api_key: String,
    pub weather_api_url: String,
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let optional = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            bot_token: required(BOT_TOKEN_ENV)?,
            weather_api_key: required(WEATHER_API_KEY_ENV)?,
            weather_api_url: optional(WEATHER_API_URL_ENV, DEFAULT_WEATHER_API_URL),
            geocoder_url: optional(GEOCODER_URL_ENV, DEFAULT_GEOCODER_URL),
            geocoder_user_agent: optional(GEOCODER_USER_AGENT_ENV, DEFAULT_GEOCODER_USER_AGENT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn fills_defaults_for_optional_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("TELOXIDE_TOKEN", "123:abc"),
            ("WEATHER_API_KEY", "key"),
        ]))
        .unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.weather_api_key, "key");
        assert_eq!(config.weather_api_url, DEFAULT_WEATHER_API_URL);
        assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
        assert_eq!(config.geocoder_user_agent, DEFAULT_GEOCODER_USER_AGENT);
    }

    #[test]
    fn overrides_service_urls() {
        let config = Config::from_lookup(lookup_from(&[
            ("TELOXIDE_TOKEN", "123:abc"),
            ("WEATHER_API_KEY", "key"),
            ("WEATHER_API_URL", "http://localhost:9000"),
            ("GEOCODER_URL", "http://localhost:9001"),
        ]))
        .unwrap();

        assert_eq!(config.weather_api_url, "http://localhost:9000");
        assert_eq!(config.geocoder_url, "http://localhost:9001");
    }

    #[test]
    fn rejects_missing_secrets() {
        let err = Config::from_lookup(lookup_from(&[("WEATHER_API_KEY", "key")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("TELOXIDE_TOKEN"));

        let err = Config::from_lookup(lookup_from(&[
            ("TELOXIDE_TOKEN", "123:abc"),
            ("WEATHER_API_KEY", "  "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("WEATHER_API_KEY"));
    }
}
