use thiserror::Error;

/// Top-level error type for Campus setup.
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),
}

pub type Result<T> = std::result::Result<T, CampusError>;
