use std::env::{self, VarError};
use std::str::FromStr;

/// Loads variables from a `.env` file in the current directory or its parents into the process
/// environment. Variables that are already set are not overridden.
pub fn load_dotenv_into_env() {
  match dotenvy::dotenv() {
    Ok(_path) => {
      #[cfg(feature = "tracing")] { tracing::trace!(path = %_path.display(), "loaded .env file"); }
    }
    Err(e) if e.not_found() => {} // Ignore: a .env file is not required.
    Err(_e) => {
      #[cfg(feature = "tracing")] { tracing::warn!(cause = %_e, "failed to load .env file"); }
    }
  }
}

/// Error reading a configuration value from the environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
  #[error("Environment variable '{0}' is not valid unicode")]
  NotUnicode(String),
  #[error("Environment variable '{key}' with value '{value}' could not be parsed")]
  Parse { key: String, value: String },
}

/// Gets and parses environment variable `key`, or returns `default` when it is not set.
pub fn env_or_default<T: FromStr>(key: &str, default: T) -> Result<T, EnvError> {
  match env::var(key) {
    Ok(value) => value.parse().map_err(|_| EnvError::Parse { key: key.to_string(), value }),
    Err(VarError::NotPresent) => Ok(default),
    Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode(key.to_string())),
  }
}
