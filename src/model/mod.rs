pub mod error;
pub mod rule_based;
pub mod traits;
