use thiserror::Error;

use crate::model::{AuthorizationOption, AuthorizationStatus, NotificationRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("notification center unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}

pub type StatusCompletion = Box<dyn FnOnce(AuthorizationStatus)>;

/// `Ok(true)` when permission was granted, `Ok(false)` when the user declined.
pub type AuthorizationCompletion = Box<dyn FnOnce(Result<bool, NotificationError>)>;

/// Local notification scheduling, gated on user permission.
pub trait NotificationCenter {
    fn authorization_status(&self, completion: StatusCompletion);

    fn request_authorization(
        &self,
        options: &[AuthorizationOption],
        completion: AuthorizationCompletion,
    );

    /// Enqueue a request. Fire-and-forget: failures stay inside the center.
    fn add(&self, request: NotificationRequest);
}
