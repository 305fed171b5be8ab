// SPDX-License-Identifier: MPL-2.0
use crate::domain::icon::IconSetError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Filesystem failure while reading or writing.
    #[error("I/O Error: {0}")]
    Io(String),

    /// A required source image does not exist.
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The source exists but could not be decoded as an image.
    #[error("Cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    /// PNG encoding or saving failed.
    #[error("Encode Error: {0}")]
    Encode(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Render Error: {0}")]
    Render(String),

    #[error("Manifest Error: {0}")]
    Manifest(String),
}

impl Error {
    /// Whether the error comes from user input rather than the environment.
    ///
    /// Used by the CLI to decide between a short diagnostic and a full report.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::SourceNotFound(_) | Error::Decode { .. } | Error::Config(_)
        )
    }
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

impl From<IconSetError> for Error {
    fn from(err: IconSetError) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Manifest(err.to_string())
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
    fn source_not_found_mentions_path() {
        let err = Error::SourceNotFound(PathBuf::from("missing/icon_source.png"));
        assert_eq!(
            format!("{}", err),
            "Source image not found: missing/icon_source.png"
        );
    }

    #[test]
    fn decode_error_includes_reason() {
        let err = Error::Decode {
            path: PathBuf::from("notes.txt"),
            reason: "format could not be determined".into(),
        };
        let text = format!("{}", err);
        assert!(text.contains("notes.txt"));
        assert!(text.contains("format could not be determined"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn input_errors_are_classified() {
        assert!(Error::SourceNotFound(PathBuf::from("x.png")).is_input_error());
        assert!(Error::Config("x".into()).is_input_error());
        assert!(!Error::Io("x".into()).is_input_error());
        assert!(!Error::Encode("x".into()).is_input_error());
    }
}
