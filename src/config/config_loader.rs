use config::{Config, ConfigError, File, FileFormat};
use serde::de::DeserializeOwned;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a config struct from a file, dispatching the format on the
    /// file extension. Supports yaml, yml, json, toml and ron.
    pub fn load<T: DeserializeOwned>(file_path: &Path) -> Result<T, ConfigError> {
        let extension = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::NotFound(format!(
                    "Could not find file extension on path {file_path:?}"
                ))
            })?;

        let file_format = match extension {
            "yaml" | "yml" => FileFormat::Yaml,
            "json" => FileFormat::Json,
            "toml" => FileFormat::Toml,
            "ron" => FileFormat::Ron,
            other => {
                return Err(ConfigError::NotFound(format!(
                    "File format `{other}` not supported. File needs to end with .yaml, .json, .toml or .ron."
                )));
            }
        };

        let raw = Config::builder()
            .add_source(File::new(file_path.to_string_lossy().as_ref(), file_format))
            .build()?;
        raw.try_deserialize()
    }
}
