pub mod ids;
pub mod prospect;
pub mod list_options;
pub mod reminder;

// Re-exports for convenience
pub use ids::Id;
pub use prospect::Prospect;
pub use list_options::{FilterType, SortType};
pub use reminder::{
    AuthorizationOption, AuthorizationStatus, CalendarTrigger, NotificationContent,
    NotificationRequest, NotificationSound,
};
