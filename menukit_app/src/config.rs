use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub discord: DiscordConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct DiscordConfig {
    pub token: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct LogConfig {
    pub default: Option<LogLevel>,
    #[serde(flatten)]
    pub modules: HashMap<String, LogLevel>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(value: LogLevel) -> log::LevelFilter {
        use log::LevelFilter;
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Loads `config.toml`, with `MENUKIT__`-prefixed env vars taking priority.
pub fn load() -> anyhow::Result<AppConfig> {
    let config = config_rs::Config::builder()
        .add_source(config_rs::File::new("config", config_rs::FileFormat::Toml).required(false))
        .add_source(config_rs::Environment::with_prefix("MENUKIT").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}

pub fn init_logging(config: &LogConfig) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.default.map_or(log::LevelFilter::Info, Into::into));

    for (module, level) in &config.modules {
        builder.filter_module(module, (*level).into());
    }

    builder.init();
}
