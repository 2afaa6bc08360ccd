use serde::{Deserialize, Serialize};

/// Одна запись ответа Nominatim `/search?format=json`.
/// Координаты приходят строками.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
