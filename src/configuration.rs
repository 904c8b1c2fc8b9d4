use std::{fmt, path::PathBuf, str::FromStr};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::views::ViewResolver;

#[derive(Deserialize)]
pub struct Settings {
    pub app_settings: AppSettings,
    pub views: ViewSettings,
}

#[derive(Deserialize)]
pub struct AppSettings {
    pub host: [u8; 4], // IPv4 address
    pub port: u16,
}

/// Where view templates live: `{prefix}/{view name}{suffix}`.
#[derive(Deserialize)]
pub struct ViewSettings {
    pub prefix: PathBuf,
    pub suffix: String,
}

impl ViewSettings {
    pub fn resolver(&self) -> ViewResolver {
        ViewResolver::new(self.prefix.clone(), self.suffix.clone())
    }
}

enum RunningEnv {
    Local,
    Production,
}

impl RunningEnv {
    pub fn as_str(&self) -> &str {
        match self {
            RunningEnv::Local => "local",
            RunningEnv::Production => "production",
        }
    }
}

impl fmt::Display for RunningEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunningEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(RunningEnv::Local),
            "production" => Ok(RunningEnv::Production),
            other => Err(format!(
                "{other} is not a supported environment, use `local` or `production`"
            )),
        }
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let current_dir = std::env::current_dir().map_err(|e| {
        ConfigError::Message(format!("Failed to get current directory: {e}"))
    })?;
    let config_path = current_dir.join("configurations");

    let running_env: RunningEnv = std::env::var("RUNNING_ENV")
        .unwrap_or_else(|_| "local".to_string())
        .parse()
        .map_err(|e| {
            ConfigError::Message(format!("Failed to parse RUNNING_ENV: {e}"))
        })?;

    let app_config_file = format!("{running_env}.yaml");
    let config = Config::builder()
        .add_source(File::from(config_path.join("base.yaml")))
        .add_source(File::from(config_path.join(app_config_file)))
        .add_source(Environment::with_prefix("PAGES").separator("__"))
        .build()?;

    config.try_deserialize::<Settings>()
}
