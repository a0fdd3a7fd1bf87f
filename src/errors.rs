use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;
use crate::manager_model::errors::ModelError;
use crate::models::observation::Control;

/// Error depicting errors that occur during start-up, all of them are fatal
///
pub struct SkyCastInitError(pub String);

impl fmt::Display for SkyCastInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SkyCastInitError: {}", self.0)
    }
}
impl fmt::Debug for SkyCastInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SkyCastInitError({:?})", self.0)
    }
}
impl std::error::Error for SkyCastInitError {}
impl From<ConfigError> for SkyCastInitError {
    fn from(e: ConfigError) -> Self {
        SkyCastInitError(e.to_string())
    }
}
impl From<LoggingError> for SkyCastInitError {
    fn from(e: LoggingError) -> Self {
        SkyCastInitError(e.to_string())
    }
}
impl From<ModelError> for SkyCastInitError {
    fn from(e: ModelError) -> Self { SkyCastInitError(e.to_string()) }
}

/// Error depicting errors that occur while loading the configuration
///
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError({:?})", self.0)
    }
}
impl std::error::Error for ConfigError {}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}

/// Error depicting a user supplied value that can't be used for a control
///
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObservationError {
    #[error("{control} must be within {min}..={max}, got {value}")]
    OutOfRange { control: Control, value: f64, min: f64, max: f64 },
    #[error("{control} must be a number, got '{value}'")]
    NotANumber { control: Control, value: String },
    #[error("{control} must be a whole number, got '{value}'")]
    NotAnInteger { control: Control, value: String },
}

/// Error depicting errors that occur while setting up logging
///
#[derive(Error, Debug)]
#[error("error setting up logging: {0}")]
pub struct LoggingError(pub String);
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self {
        LoggingError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        LoggingError(e.to_string())
    }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self {
        LoggingError(e.to_string())
    }
}

/// Error depicting errors in the interactive session
///
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("SessionError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("SessionError::Model: {0}")]
    Model(#[from] ModelError),
}
