use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Город пользователя и его часовой пояс.
/// Живёт до следующей смены города или до перезапуска процесса.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub city: String,
    pub timezone: Tz,
}

impl UserSession {
    pub fn new(city: impl Into<String>, timezone: Tz) -> Self {
        Self {
            city: city.into(),
            timezone,
        }
    }

    /// Время в часовом поясе пользователя, `YYYY-MM-DD HH:MM:SS`
    pub fn local_time(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.timezone)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_time_in_session_timezone() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 5).unwrap();

        let paris = UserSession::new("Paris", chrono_tz::Europe::Paris);
        assert_eq!(paris.local_time(now), "2024-07-01 12:00:05");

        let vladivostok = UserSession::new("Владивосток", chrono_tz::Asia::Vladivostok);
        assert_eq!(vladivostok.local_time(now), "2024-07-01 20:00:05");
    }

    #[test]
    fn previous_day_in_western_timezone() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 2, 30, 0).unwrap();
        let session = UserSession::new("New York", chrono_tz::America::New_York);
        assert_eq!(session.local_time(now), "2023-12-31 21:30:00");
    }
}
