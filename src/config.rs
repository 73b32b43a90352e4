use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub argon2: Argon2Config,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let defaults = Argon2Config::default();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port: parse(&lookup, "PORT", None)?,
            db_max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", Some(50))?,
            db_min_connections: parse(&lookup, "DB_MIN_CONNECTIONS", Some(10))?,
            argon2: Argon2Config {
                memory_kib: parse(&lookup, "ARGON2_MEMORY_KIB", Some(defaults.memory_kib))?,
                iterations: parse(&lookup, "ARGON2_ITERATIONS", Some(defaults.iterations))?,
                parallelism: parse(&lookup, "ARGON2_PARALLELISM", Some(defaults.parallelism))?,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T, F>(lookup: &F, name: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match (lookup(name), default) {
        (Some(value), _) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(ConfigError::Missing(name)),
    }
}
