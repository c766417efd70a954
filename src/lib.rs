pub mod assessment;
pub mod config;
pub mod error;
pub mod model;
pub mod record;
