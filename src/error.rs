// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Store operations themselves never fail: unknown ids are tolerated and
//! hook failures are absorbed. Errors only surface while constructing a store
//! or while reading and writing settings files.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The store was created outside a tokio runtime, so its timers could
    /// never be driven.
    #[error("Runtime Error: no tokio runtime available to drive toast timers")]
    NoRuntime,
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_maps_to_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn no_runtime_mentions_tokio() {
        assert!(Error::NoRuntime.to_string().contains("tokio"));
    }
}
