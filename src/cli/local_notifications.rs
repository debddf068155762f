use std::rc::Rc;

use chrono::Local;
use rusqlite::Connection;

use crate::cli::context::read_line;
use crate::db::reminder_repo;
use crate::model::{AuthorizationOption, AuthorizationStatus, NotificationRequest};
use crate::platform::{AuthorizationCompletion, NotificationCenter, NotificationError, StatusCompletion};

/// Keeps the permission answer and scheduled reminders in the prospects
/// database; asks for permission at the terminal the first time.
pub struct LocalNotificationCenter {
    conn: Rc<Connection>,
}

impl LocalNotificationCenter {
    pub fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }
}

impl NotificationCenter for LocalNotificationCenter {
    fn authorization_status(&self, completion: StatusCompletion) {
        let status = reminder_repo::authorization_status(&self.conn).unwrap_or_else(|e| {
            tracing::error!("could not read notification settings: {}", e);
            AuthorizationStatus::NotDetermined
        });
        completion(status);
    }

    fn request_authorization(&self, options: &[AuthorizationOption], completion: AuthorizationCompletion) {
        let current = match reminder_repo::authorization_status(&self.conn) {
            Ok(s) => s,
            Err(e) => return completion(Err(NotificationError::Unavailable(e.to_string()))),
        };

        // Like the platform dialog, the question is only ever asked once.
        let granted = match current {
            AuthorizationStatus::Authorized | AuthorizationStatus::Provisional => true,
            AuthorizationStatus::Denied => false,
            AuthorizationStatus::NotDetermined => {
                let wanted: Vec<String> = options.iter().map(|o| format!("{:?}", o).to_lowercase()).collect();
                let answer = read_line(&format!(
                    "Allow prospects to send reminders ({})? [y/N]: ",
                    wanted.join(", ")
                ))
                .unwrap_or_default();
                let granted = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
                let status = if granted {
                    AuthorizationStatus::Authorized
                } else {
                    AuthorizationStatus::Denied
                };
                if let Err(e) = reminder_repo::set_authorization_status(&self.conn, status) {
                    return completion(Err(NotificationError::Other(e.to_string())));
                }
                granted
            }
        };
        completion(Ok(granted));
    }

    fn add(&self, request: NotificationRequest) {
        let now = Local::now().naive_local();
        let Some(fire_at) = request.trigger.next_fire_after(now) else {
            tracing::warn!(id = %request.id, "trigger never fires, reminder dropped");
            return;
        };
        match reminder_repo::insert(&self.conn, &request, fire_at) {
            Ok(()) => tracing::info!(id = %request.id, %fire_at, "reminder scheduled"),
            Err(e) => tracing::error!(id = %request.id, "failed to schedule reminder: {}", e),
        }
    }
}
