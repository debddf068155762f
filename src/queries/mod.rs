pub mod prospect_queries;
pub mod reminder_queries;
