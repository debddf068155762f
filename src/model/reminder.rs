use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Whether the user has allowed local notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    #[default]
    NotDetermined,
    Denied,
    Authorized,
    Provisional,
}

impl AuthorizationStatus {
    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "NotDetermined" => Some(AuthorizationStatus::NotDetermined),
            "Denied" => Some(AuthorizationStatus::Denied),
            "Authorized" => Some(AuthorizationStatus::Authorized),
            "Provisional" => Some(AuthorizationStatus::Provisional),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AuthorizationStatus::NotDetermined => "NotDetermined",
            AuthorizationStatus::Denied => "Denied",
            AuthorizationStatus::Authorized => "Authorized",
            AuthorizationStatus::Provisional => "Provisional",
        }
    }
}

/// A capability asked for when requesting notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationOption {
    Alert,
    Badge,
    Sound,
}

impl AuthorizationOption {
    pub const ALERT_BADGE_SOUND: &'static [AuthorizationOption] = &[
        AuthorizationOption::Alert,
        AuthorizationOption::Badge,
        AuthorizationOption::Sound,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationSound {
    #[default]
    Default,
}

impl NotificationSound {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Default" => Some(NotificationSound::Default),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            NotificationSound::Default => "Default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub subtitle: String,
    pub sound: NotificationSound,
}

/// Fires when the local clock matches the given components. Unset components
/// match anything; the minute defaults to the top of the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTrigger {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub repeats: bool,
}

impl CalendarTrigger {
    pub fn at_hour(hour: u32, repeats: bool) -> Self {
        Self {
            hour: Some(hour),
            minute: None,
            repeats,
        }
    }

    /// The first matching local time strictly after `now`.
    /// Returns None if the components can never match (e.g. hour 25).
    pub fn next_fire_after(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let minute = self.minute.unwrap_or(0);
        let hours: Vec<u32> = match self.hour {
            Some(h) => vec![h],
            None => (0..24).collect(),
        };

        for day_offset in 0..=1 {
            let day = now.date() + Duration::days(day_offset);
            for &hour in &hours {
                let candidate = day.and_hms_opt(hour, minute, 0)?;
                if candidate > now {
                    return Some(candidate);
                }
            }
        }
        None
    }

    pub fn describe(&self) -> String {
        let when = match (self.hour, self.minute) {
            (Some(h), m) => format!("at {:02}:{:02}", h, m.unwrap_or(0)),
            (None, Some(m)) => format!("at minute {:02} of every hour", m),
            (None, None) => "every hour".to_string(),
        };
        if self.repeats {
            format!("{} (repeating)", when)
        } else {
            when
        }
    }
}

/// A one-shot local notification handed to the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub id: Id<NotificationRequest>,
    pub content: NotificationContent,
    pub trigger: CalendarTrigger,
}

impl NotificationRequest {
    pub fn create(content: NotificationContent, trigger: CalendarTrigger) -> Self {
        Self {
            id: Id::generate(),
            content,
            trigger,
        }
    }
}
