use chrono_tz::Tz;
use teloxide::prelude::*;
use teloxide::types::UserId;

use crate::bot_state::BotState;
use crate::error::BotResult;
use crate::handlers::utils::{send_reply, Reply, CHANGE_CITY_BUTTON};
use crate::models::UserSession;

/// Куда уходит текст, который не распознан как команда
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Нажата кнопка «Сменить город»
    ChangeCity,
    /// Пустой текст или неизвестная `/команда`: ответа нет
    Ignore,
    /// Всё остальное считается названием города
    City(String),
}

impl Route {
    pub fn from_text(text: &str) -> Self {
        if text == CHANGE_CITY_BUTTON {
            return Route::ChangeCity;
        }

        let city = text.trim();
        if city.is_empty() || city.starts_with('/') {
            return Route::Ignore;
        }

        Route::City(city.to_string())
    }
}

pub async fn message_handler(bot: Bot, msg: Message, state: BotState) -> BotResult<()> {
    let (Some(text), Some(user)) = (msg.text(), msg.from.as_ref()) else {
        log::debug!("Skipping non-text message in chat {}", msg.chat.id);
        return Ok(());
    };

    match text_reply(&state, user.id, text).await {
        Some(reply) => send_reply(&bot, msg.chat.id, reply).await,
        None => Ok(()),
    }
}

pub async fn text_reply(state: &BotState, user_id: UserId, text: &str) -> Option<Reply> {
    match Route::from_text(text) {
        Route::ChangeCity => Some(Reply::new("Пожалуйста, введи название нового города.")),
        Route::Ignore => {
            log::debug!("Ignoring {:?} from user {}", text, user_id);
            None
        }
        Route::City(city) => Some(set_city(state, user_id, &city).await),
    }
}

async fn set_city(state: &BotState, user_id: UserId, city: &str) -> Reply {
    match resolve_city(state, city).await {
        Ok(Some(timezone)) => {
            state
                .save_session(user_id, UserSession::new(city, timezone))
                .await;
            log::info!(
                "🏙️ City for user {} set to {} ({}), {} sessions in memory",
                user_id,
                city,
                timezone,
                state.session_count().await
            );
            Reply::new(format!(
                "Город установлен на {}. Введи /time или /weather, чтобы узнать текущее время или погоду.",
                city
            ))
        }
        Ok(None) => {
            log::warn!("🔍 City {:?} not resolved for user {}", city, user_id);
            Reply::new("Не удалось найти этот город. Пожалуйста, попробуй еще раз.")
        }
        Err(e) => {
            log::error!("❌ City lookup for {:?} failed: {}", city, e);
            Reply::new(format!("Произошла ошибка: {}", e))
        }
    }
}

/// Геокодирование и часовой пояс. `Ok(None)` если город не найден
/// или по координатам нет часового пояса.
async fn resolve_city(state: &BotState, city: &str) -> BotResult<Option<Tz>> {
    let Some(coordinates) = state.geocoder.geocode(city).await? else {
        return Ok(None);
    };
    Ok(state.timezones.timezone_at(coordinates))
}
