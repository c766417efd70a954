mod assessment_config;
mod config_loader;

pub use assessment_config::AssessmentConfig;
pub use config_loader::ConfigLoader;
