use thiserror::Error;

/// Ошибки обработки одного сообщения.
///
/// Ни одна из них не останавливает бота: граница отказа всегда
/// одно входящее сообщение.
#[derive(Error, Debug)]
pub enum BotError {
    /// Сетевые ошибки и ошибки декодирования ответов внешних API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ошибки Telegram Bot API при отправке ответа
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Геокодер вернул координату, которую нельзя разобрать как число
    #[error("invalid coordinate in geocoder response: {0}")]
    InvalidCoordinate(String),
}

pub type BotResult<T> = Result<T, BotError>;
