use std::{
  env::{self, VarError},
  fmt::Display,
  str::FromStr,
};

use crate::api::errors::AppError;

pub const MAX_MATCH_LIMIT: usize = 50;

#[derive(Clone, Debug)]
pub struct Config {
  pub env: Env,
  pub listen_addr: String,

  // Dataset
  pub dishes_path: Option<String>,

  // Match settings
  pub match_limit: usize,

  // Debugging
  pub enable_tracing: bool,
  pub enable_prometheus: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      env: Env::Dev,
      listen_addr: "0.0.0.0:8000".into(),
      dishes_path: None,
      match_limit: 3,
      enable_tracing: false,
      enable_prometheus: false,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    let config = Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      listen_addr: env::var("LISTEN_ADDR").unwrap_or("0.0.0.0:8000".into()),
      dishes_path: env::var("DISHES_PATH").ok().filter(|path| !path.is_empty()),
      match_limit: parse_env("MATCH_LIMIT", 3)?,
      enable_tracing: env::var("ENABLE_TRACING").unwrap_or_default() == "1",
      enable_prometheus: env::var("ENABLE_PROMETHEUS").unwrap_or_default() == "1",
    };

    if !(1..=MAX_MATCH_LIMIT).contains(&config.match_limit) {
      return Err(AppError::ConfigError(format!("MATCH_LIMIT must be between 1 and {MAX_MATCH_LIMIT}")));
    }

    Ok(config)
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}

pub fn parse_env<T>(name: &str, default: T) -> Result<T, AppError>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(value) if value.is_empty() => Ok(default),
    Ok(value) => value.parse::<T>().map_err(|err| AppError::ConfigError(format!("could not read {name}: {err}"))),
    Err(err) => match err {
      VarError::NotPresent => Ok(default),
      _ => Err(AppError::ConfigError(format!("could not read {name}: {err}"))),
    },
  }
}
