use std::env;

use log::debug;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_DATABASE_PATH: &str = "./config/registration.db";
pub const DEFAULT_TEMPLATE_GLOB: &str = "templates/**/*.html";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub database_path: String,
    pub template_glob: String,
}

impl Config {
    /// Reads `REGISTER_*` variables, after loading `.env` if one is present.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        Config {
            bind_address: get("REGISTER_BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            database_path: get("REGISTER_DATABASE_PATH", DEFAULT_DATABASE_PATH),
            template_glob: get("REGISTER_TEMPLATES", DEFAULT_TEMPLATE_GLOB),
        }
    }
}
