use std::env;
use std::net::SocketAddr;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the GraphQL endpoint listens on.
    pub address: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub filter: String,
}

const CONFIG_PATH_ENV: &str = "LIBRARY_CONFIG_PATH";
const ENV_PREFIX: &str = "LIBRARY";

const SERVER_ADDRESS_KEY: &str = "server.address";
const LOG_FILTER_KEY: &str = "log.filter";

impl AppConfig {
    /// Loads defaults, then the file named by `LIBRARY_CONFIG_PATH` if set,
    /// then `LIBRARY__*` environment variables.
    pub fn load() -> AppResult<Self> {
        let mut config_builder = Config::builder()
            .set_default(SERVER_ADDRESS_KEY, "0.0.0.0:4000")?
            .set_default(LOG_FILTER_KEY, "info")?;

        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            config_builder = config_builder.add_source(File::with_name(&path).required(false));
        }

        config_builder =
            config_builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Ok(config_builder.build()?.try_deserialize()?)
    }
}
