use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneratorConfig {
    /// Number of records produced by `generate_default`.
    #[serde(default = "default_record_count")]
    pub record_count: usize,
    /// Whether the default dataset is shuffled after generation.
    #[serde(default)]
    pub shuffle: bool,
}

fn default_record_count() -> usize {
    1_000_000
}

#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    /// Partitions used by the partitioned aggregation path.
    #[serde(default = "default_partition_count")]
    pub partition_count: usize,
}

fn default_partition_count() -> usize {
    4
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("SALESAGG_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
