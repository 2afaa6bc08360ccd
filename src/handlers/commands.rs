use chrono::{DateTime, Utc};
use rand::Rng;
use teloxide::prelude::*;
use teloxide::types::UserId;
use teloxide::utils::command::BotCommands;

use crate::bot_state::BotState;
use crate::error::BotResult;
use crate::handlers::utils::{send_reply, Reply};
use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: BotState,
) -> BotResult<()> {
    let Some(user) = msg.from.as_ref() else {
        log::debug!("Command without sender in chat {}, skipping", msg.chat.id);
        return Ok(());
    };

    log::info!("📨 {:?} from user {}", cmd, user.id);
    let reply = command_reply(&state, user.id, cmd).await;
    send_reply(&bot, msg.chat.id, reply).await
}

pub async fn command_reply(state: &BotState, user_id: UserId, cmd: Command) -> Reply {
    match cmd {
        Command::Start => Reply::new(
            "Привет! Я бот с простыми функциями. В каком городе ты находишься? \
            Пожалуйста, введи название города.",
        ),
        Command::Help => Reply::new(Command::descriptions().to_string()),
        Command::Info => Reply::new(
            "Это информация о боте. Он предназначен для демонстрации простейших функций.",
        ),
        Command::About => {
            Reply::new("Этот бот написан на Rust с использованием библиотеки teloxide.")
        }
        Command::Time => handle_time(state, user_id, Utc::now()).await,
        Command::Weather => handle_weather(state, user_id).await,
        Command::Random => Reply::new(format!("Ваше случайное число: {}", roll())),
    }
}

async fn handle_time(state: &BotState, user_id: UserId, now: DateTime<Utc>) -> Reply {
    match state.get_session(user_id).await {
        Some(session) => Reply::new(format!(
            "Текущее время в твоем городе ({}): {}",
            session.city,
            session.local_time(now)
        )),
        None => Reply::new(
            "Пожалуйста, сначала укажи свой город, чтобы я мог показать правильное время. \
            Введи свой город:",
        ),
    }
}

async fn handle_weather(state: &BotState, user_id: UserId) -> Reply {
    let Some(session) = state.get_session(user_id).await else {
        return Reply::new(
            "Пожалуйста, сначала укажи свой город, чтобы я мог показать правильную погоду. \
            Введи свой город:",
        );
    };

    match state.weather.current_weather(&session.city).await {
        Ok(Some(snapshot)) => {
            log::info!("⛅ Weather fetched for {}", session.city);
            Reply::new(format!(
                "Погода в городе {}:\n{}",
                session.city,
                snapshot.summary()
            ))
        }
        Ok(None) => weather_unavailable(&session.city),
        Err(e) => {
            log::warn!("⚠️ Weather request for {} failed: {}", session.city, e);
            weather_unavailable(&session.city)
        }
    }
}

fn weather_unavailable(city: &str) -> Reply {
    Reply::new(format!(
        "Не удалось получить информацию о погоде для города {}.",
        city
    ))
}

fn roll() -> u32 {
    random_number(&mut rand::thread_rng())
}

/// Равномерно из [1, 100]
fn random_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=100)
}
