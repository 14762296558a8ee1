// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the preference layer.
///
/// The screen logic itself is total and never fails; only reading and
/// writing `settings.toml` can go wrong.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(message) => write!(f, "I/O Error: {message}"),
            Error::Config(message) => write!(f, "Config Error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
