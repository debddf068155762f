pub mod scan_ops;
pub mod reminder_ops;
pub mod persistence_ops;
