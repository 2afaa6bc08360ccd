use std::sync::Arc;
use teloxide::{prelude::*, utils::command::BotCommands};

mod bot_state;
mod config;
mod error;
mod geo;
mod handlers;
mod models;
#[cfg(test)]
mod testing;
mod weather;

use crate::bot_state::BotState;
use crate::config::Config;
use crate::geo::{NominatimGeocoder, TzfResolver};
use crate::handlers::{command_handler, message_handler};
use crate::weather::OpenWeatherClient;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Запустить бота")]
    Start,
    #[command(description = "Список доступных команд")]
    Help,
    #[command(description = "Информация о боте")]
    Info,
    #[command(description = "О боте")]
    About,
    #[command(description = "Узнать текущее время")]
    Time,
    #[command(description = "Узнать погоду")]
    Weather,
    #[command(description = "Получить случайное число")]
    Random,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Загружаем .env и инициализируем логирование
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting city time & weather bot...");

    let config = Config::from_env()?;

    // Полигоны часовых поясов грузятся один раз
    let timezones = TzfResolver::new();
    log::info!("✅ Timezone finder loaded");

    let state = BotState::new(
        Arc::new(NominatimGeocoder::new(
            &config.geocoder_url,
            &config.geocoder_user_agent,
        )),
        Arc::new(timezones),
        Arc::new(OpenWeatherClient::new(
            &config.weather_api_url,
            &config.weather_api_key,
        )),
    );

    let bot = Bot::new(&config.bot_token);
    bot.set_my_commands(Command::bot_commands()).await?;
    log::info!("✅ Command menu registered");

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
