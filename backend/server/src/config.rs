use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub sheets_url: String,
    pub sheet_id: String,
    pub sheet_range: String,
    pub sheets_token: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "1111"),
            sheets_url: try_load("SHEETS_URL", "https://sheets.googleapis.com"),
            sheet_id: require("SHEET_ID"),
            sheet_range: try_load("SHEET_RANGE", "Orders!A:G"),
            sheets_token: read_secret("SHEETS_API_TOKEN"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn require(key: &str) -> String {
    env::var(key)
        .map_err(|_| {
            warn!("Required environment variable {key} not found");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(secret_name: &str) -> String {
    // Env var wins for local runs, the secrets mount is the deployed path.
    if let Ok(value) = env::var(secret_name) {
        return value.trim().to_string();
    }

    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .expect("Secrets misconfigured!")
}
