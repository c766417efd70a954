use anyhow::{Context, Result, bail};
use pulmorisk::assessment::Assessor;
use pulmorisk::config::{AssessmentConfig, ConfigLoader};
use pulmorisk::model::rule_based::RuleBasedModel;
use pulmorisk::record::PatientRecord;
use serde_json::json;
use std::path::Path;
use std::process::ExitCode;
use validator::Validate;

/// Bridge for the node/CLI caller: one JSON patient record as the sole
/// argument, optionally followed by a threshold-config file. Prints a
/// JSON envelope on stdout either way; failures exit non-zero.
fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(report) => {
            println!(
                "{}",
                json!({ "success": true, "model_type": "rule_based", "result": report })
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", json!({ "success": false, "error": format!("{err:#}") }));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<serde_json::Value> {
    let (record_json, config_path) = match args {
        [record] => (record.as_str(), None),
        [record, config] => (record.as_str(), Some(Path::new(config))),
        _ => bail!("usage: pulmorisk <patient-record-json> [assessment-config-file]"),
    };

    let config = match config_path {
        Some(path) => ConfigLoader::load::<AssessmentConfig>(path)
            .with_context(|| format!("could not load assessment config from {path:?}"))?,
        None => AssessmentConfig::default(),
    };
    config.validate().context("invalid assessment config")?;

    let record = PatientRecord::from_json(record_json)?;
    let report = Assessor::new(config).assess_with_model(&RuleBasedModel, &record)?;
    Ok(serde_json::to_value(report)?)
}
