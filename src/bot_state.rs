use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::UserId;
use tokio::sync::RwLock;

use crate::geo::{Geocoder, TimezoneResolver};
use crate::models::UserSession;
use crate::weather::WeatherProvider;

type SessionMap = Arc<RwLock<HashMap<UserId, UserSession>>>;

/// Общее состояние бота, передаётся в обработчики через `dptree::deps!`.
///
/// Сессии живут только в памяти процесса. Dispatcher обрабатывает
/// апдейты одного чата последовательно, разные чаты — параллельно;
/// запись сессии всегда целиком, поэтому при гонке выигрывает последняя.
#[derive(Clone)]
pub struct BotState {
    sessions: SessionMap,
    pub geocoder: Arc<dyn Geocoder>,
    pub timezones: Arc<dyn TimezoneResolver>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl BotState {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        timezones: Arc<dyn TimezoneResolver>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            geocoder,
            timezones,
            weather,
        }
    }

    pub async fn get_session(&self, user_id: UserId) -> Option<UserSession> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    /// Перезаписывает сессию целиком
    pub async fn save_session(&self, user_id: UserId, session: UserSession) {
        let previous = self.sessions.write().await.insert(user_id, session);
        if let Some(previous) = previous {
            log::debug!("🔁 Session for user {} replaced (was {})", user_id, previous.city);
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
