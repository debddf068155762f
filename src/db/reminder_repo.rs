use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::error::{ProspectError, ProspectResult};
use crate::model::{
    AuthorizationStatus, CalendarTrigger, Id, NotificationContent, NotificationRequest,
    NotificationSound,
};

const AUTHORIZATION_KEY: &str = "authorization_status";
const FIRE_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A request that has been handed to the local notification center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    pub request: NotificationRequest,
    pub fire_at: NaiveDateTime,
    pub delivered: bool,
}

pub fn authorization_status(conn: &Connection) -> ProspectResult<AuthorizationStatus> {
    let result = conn.query_row(
        "SELECT value FROM notification_settings WHERE key = ?1",
        params![AUTHORIZATION_KEY],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(s) => AuthorizationStatus::from_db_str(&s).ok_or(ProspectError::InvalidValue {
            field: AUTHORIZATION_KEY.into(),
            value: s,
        }),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(AuthorizationStatus::NotDetermined),
        Err(e) => Err(e.into()),
    }
}

pub fn set_authorization_status(conn: &Connection, status: AuthorizationStatus) -> ProspectResult<()> {
    conn.execute(
        "INSERT INTO notification_settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![AUTHORIZATION_KEY, status.to_db_str()],
    )?;
    Ok(())
}

pub fn insert(conn: &Connection, request: &NotificationRequest, fire_at: NaiveDateTime) -> ProspectResult<()> {
    conn.execute(
        "INSERT INTO scheduled_reminders
         (id, title, subtitle, sound, trigger_hour, trigger_minute, repeats, fire_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            request.id.value.to_string(),
            request.content.title,
            request.content.subtitle,
            request.content.sound.to_db_str(),
            request.trigger.hour,
            request.trigger.minute,
            request.trigger.repeats as i32,
            fire_at.format(FIRE_AT_FORMAT).to_string(),
        ],
    )?;
    Ok(())
}

/// Undelivered reminders, soonest first.
pub fn find_pending(conn: &Connection) -> ProspectResult<Vec<ScheduledReminder>> {
    query_reminders(
        conn,
        "SELECT id, title, subtitle, sound, trigger_hour, trigger_minute, repeats, fire_at, delivered
         FROM scheduled_reminders WHERE delivered = 0 ORDER BY fire_at, rowid",
        &[],
    )
}

/// Undelivered reminders whose fire time is at or before `now`.
pub fn find_due(conn: &Connection, now: NaiveDateTime) -> ProspectResult<Vec<ScheduledReminder>> {
    let now_str = now.format(FIRE_AT_FORMAT).to_string();
    query_reminders(
        conn,
        "SELECT id, title, subtitle, sound, trigger_hour, trigger_minute, repeats, fire_at, delivered
         FROM scheduled_reminders WHERE delivered = 0 AND fire_at <= ?1 ORDER BY fire_at, rowid",
        &[&now_str as &dyn rusqlite::ToSql],
    )
}

pub fn mark_delivered(conn: &Connection, id: Id<NotificationRequest>) -> ProspectResult<()> {
    conn.execute(
        "UPDATE scheduled_reminders SET delivered = 1 WHERE id = ?1",
        params![id.value.to_string()],
    )?;
    Ok(())
}

fn query_reminders(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> ProspectResult<Vec<ScheduledReminder>> {
    let mut stmt = conn.prepare(sql)?;
    let reminders = stmt
        .query_map(args, |row| Ok(row_to_reminder(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(reminders)
}

fn row_to_reminder(row: &rusqlite::Row) -> ProspectResult<ScheduledReminder> {
    let id_str: String = row.get(0)?;
    let sound_str: String = row.get(3)?;
    let fire_at_str: String = row.get(7)?;

    let sound = NotificationSound::from_db_str(&sound_str).ok_or_else(|| ProspectError::InvalidValue {
        field: "sound".into(),
        value: sound_str.clone(),
    })?;
    let fire_at = NaiveDateTime::parse_from_str(&fire_at_str, FIRE_AT_FORMAT).map_err(|_| {
        ProspectError::InvalidValue {
            field: "fire_at".into(),
            value: fire_at_str.clone(),
        }
    })?;

    Ok(ScheduledReminder {
        request: NotificationRequest {
            id: Id::parse(&id_str).map_err(|e| ProspectError::Other(format!("Invalid UUID: {}", e)))?,
            content: NotificationContent {
                title: row.get(1)?,
                subtitle: row.get(2)?,
                sound,
            },
            trigger: CalendarTrigger {
                hour: row.get(4)?,
                minute: row.get(5)?,
                repeats: row.get::<_, i32>(6)? != 0,
            },
        },
        fire_at,
        delivered: row.get::<_, i32>(8)? != 0,
    })
}
