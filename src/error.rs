use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the runner side of the crate.
///
/// The examples themselves only fail when the output writer fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write example output")]
    Io(#[from] io::Error),

    #[error("unknown example `{0}` (try `patterns list`)")]
    UnknownExample(String),

    #[error("failed to read config file {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid runner config")]
    ParseConfig(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_example_message() {
        let err = Error::UnknownExample("visitorr".to_string());
        assert_eq!(
            err.to_string(),
            "unknown example `visitorr` (try `patterns list`)"
        );
    }

    #[test]
    fn test_read_config_keeps_source() {
        use std::error::Error as _;

        let err = Error::ReadConfig {
            path: PathBuf::from("missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.toml"));
        assert!(err.source().is_some());
    }
}
