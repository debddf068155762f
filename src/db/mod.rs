pub mod schema;
pub mod prospect_repo;
pub mod reminder_repo;
