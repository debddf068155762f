pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod platform;
pub mod db;
pub mod queries;
pub mod ops;
pub mod view;
pub mod migrate;
pub mod cli;
