use core::time::Duration;
use std::env;
use std::fmt;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_SALESLOFT_API_ENDPOINT: &str =
    "https://api.salesloft.com/v2/cadence_imports.json";
pub const DEFAULT_SALESLOFT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct SalesloftContext {
    pub api_endpoint: String,
    pub timeout: Duration,
    pub http_client: reqwest::Client,
}

#[derive(Clone, Debug)]
pub struct Context {
    pub app: AppContext,
    pub salesloft: SalesloftContext,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct SalesloftConfig {
    pub api_endpoint: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub salesloft: SalesloftConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidTimeout(String),
    HttpClient(reqwest::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(raw) => write!(f, "Invalid PORT number: {}", raw),
            Self::InvalidTimeout(raw) => write!(f, "Invalid SALESLOFT_TIMEOUT_SECS value: {}", raw),
            Self::HttpClient(err) => write!(f, "Failed to build Salesloft http client: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            salesloft: SalesloftConfig {
                api_endpoint: DEFAULT_SALESLOFT_API_ENDPOINT.to_string(),
                timeout: DEFAULT_SALESLOFT_TIMEOUT,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.app.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.app.port,
        };
        let api_endpoint =
            lookup("SALESLOFT_API_ENDPOINT").unwrap_or(defaults.salesloft.api_endpoint);
        let timeout = match lookup("SALESLOFT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => defaults.salesloft.timeout,
        };

        Ok(Self {
            app: AppConfig { host, port },
            salesloft: SalesloftConfig {
                api_endpoint,
                timeout,
            },
        })
    }
}

pub trait ToContext {
    fn to_context(self) -> Result<Context, ConfigError>;
}

impl ToContext for Config {
    fn to_context(self) -> Result<Context, ConfigError> {
        let http_client = reqwest::Client::builder()
            .timeout(self.salesloft.timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            salesloft: SalesloftContext {
                api_endpoint: self.salesloft.api_endpoint,
                timeout: self.salesloft.timeout,
                http_client,
            },
        })
    }
}
