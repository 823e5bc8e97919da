use crate::storage::resolve_data_path;
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TICK_INTERVAL_MS: u64 = 5_000;
const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub tick_interval: Duration,
    pub toast_duration: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, std::io::Error> {
        Ok(Self {
            port: env_parse("PORT").unwrap_or(DEFAULT_PORT),
            data_path: resolve_data_path()?,
            tick_interval: Duration::from_millis(
                env_parse::<u64>("TICK_INTERVAL_MS")
                    .filter(|ms| *ms > 0)
                    .unwrap_or(DEFAULT_TICK_INTERVAL_MS),
            ),
            toast_duration: Duration::from_millis(
                env_parse("TOAST_DURATION_MS").unwrap_or(DEFAULT_TOAST_DURATION_MS),
            ),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.trim().parse::<T>().ok())
}
