use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup};

use crate::error::BotResult;

pub const CHANGE_CITY_BUTTON: &str = "Сменить город";

/// Главная клавиатура, прикладывается к каждому ответу
pub fn main_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new("/time"), KeyboardButton::new("/weather")],
        vec![KeyboardButton::new("/random")],
        vec![KeyboardButton::new("/info"), KeyboardButton::new("/about")],
        vec![KeyboardButton::new(CHANGE_CITY_BUTTON)],
    ])
    .resize_keyboard()
}

/// Текст ответа вместе с клавиатурой.
/// Собрать ответ без главной клавиатуры нельзя.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub keyboard: KeyboardMarkup,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: main_keyboard(),
        }
    }
}

pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> BotResult<()> {
    bot.send_message(chat_id, reply.text)
        .reply_markup(reply.keyboard)
        .await?;
    Ok(())
}

#[cfg(test)]
pub fn button_labels(keyboard: &KeyboardMarkup) -> Vec<Vec<String>> {
    keyboard
        .keyboard
        .iter()
        .map(|row| row.iter().map(|button| button.text.clone()).collect())
        .collect()
}
