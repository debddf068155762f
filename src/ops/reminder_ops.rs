use std::rc::Rc;

use chrono::NaiveDateTime;
use rusqlite::Connection;

use crate::db::reminder_repo::{self, ScheduledReminder};
use crate::error::ProspectResult;
use crate::model::{
    AuthorizationOption, AuthorizationStatus, CalendarTrigger, NotificationContent,
    NotificationRequest, NotificationSound, Prospect,
};
use crate::platform::NotificationCenter;
use crate::queries::reminder_queries;

/// Local hour at which "Remind Me" notifications fire.
pub const REMINDER_HOUR: u32 = 9;

/// A one-shot 09:00 reminder to get in touch with `prospect`.
/// Every call produces a new identifier.
pub fn contact_reminder(prospect: &Prospect) -> NotificationRequest {
    NotificationRequest::create(
        NotificationContent {
            title: format!("Contact {}", prospect.name),
            subtitle: prospect.email_address.clone(),
            sound: NotificationSound::Default,
        },
        CalendarTrigger::at_hour(REMINDER_HOUR, false),
    )
}

/// Schedule a reminder for `prospect`, asking for permission first when the
/// center is not yet authorized. Denials and errors are logged, never returned.
pub fn add_notification(center: &Rc<dyn NotificationCenter>, prospect: &Prospect) {
    let prospect = prospect.clone();
    let requester = Rc::clone(center);

    center.authorization_status(Box::new(move |status| {
        if status == AuthorizationStatus::Authorized {
            schedule(requester.as_ref(), &prospect);
            return;
        }

        tracing::debug!(?status, "requesting notification authorization");
        let scheduler = Rc::clone(&requester);
        requester.request_authorization(
            AuthorizationOption::ALERT_BADGE_SOUND,
            Box::new(move |result| match result {
                Ok(true) => schedule(scheduler.as_ref(), &prospect),
                Ok(false) => {
                    tracing::warn!(name = %prospect.name, "notification permission not granted, reminder skipped")
                }
                Err(e) => {
                    tracing::warn!(name = %prospect.name, "notification authorization failed: {}", e)
                }
            }),
        );
    }));
}

fn schedule(center: &dyn NotificationCenter, prospect: &Prospect) {
    let request = contact_reminder(prospect);
    tracing::info!(id = %request.id, title = %request.content.title, "scheduling reminder");
    center.add(request);
}

/// Mark every reminder due at `now` as delivered and return them.
pub fn deliver_due(conn: &Connection, now: NaiveDateTime) -> ProspectResult<Vec<ScheduledReminder>> {
    let due = reminder_queries::due_reminders(conn, now)?;
    for reminder in &due {
        reminder_repo::mark_delivered(conn, reminder.request.id)?;
    }
    Ok(due)
}
