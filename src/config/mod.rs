mod basic;

pub use basic::BasicConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::LazyLock};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Port-selection variable honoured on top of `config.toml`.
const PORT_ENV: &str = "PORT";

impl Config {
    /// Builds a Figment that merges defaults, a config TOML file and `PORT`.
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(
            Env::raw()
                .only(&[PORT_ENV])
                .map(|_| "basic.listen_port".into()),
        )
    }

    /// Loads configuration by merging defaults, `config.toml` if present and `PORT`.
    pub fn load() -> Self {
        Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration (defaults + optional config.toml + PORT): {err}")
        })
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);
