use chrono::NaiveDateTime;
use rusqlite::Connection;

use crate::db::reminder_repo::{self, ScheduledReminder};
use crate::error::ProspectResult;

pub fn upcoming_reminders(conn: &Connection) -> ProspectResult<Vec<ScheduledReminder>> {
    reminder_repo::find_pending(conn)
}

pub fn due_reminders(conn: &Connection, now: NaiveDateTime) -> ProspectResult<Vec<ScheduledReminder>> {
    reminder_repo::find_due(conn, now)
}
