// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Svg(String),
    Fetch(FetchError),
    Asset(String),
    Config(String),
}

/// Failures while retrieving diagram markup over HTTP.
/// Kept separate so the placeholder can tell network trouble from a bad file.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Status(u16),

    /// The request never completed (DNS, connection refused, TLS...).
    Transport(String),

    /// The body could not be read or was not valid UTF-8.
    Body(String),
}

impl Error {
    /// Returns the i18n message key shown in the diagram placeholder.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::Asset(_) => "error-diagram-missing",
            Error::Svg(_) => "error-diagram-invalid",
            Error::Fetch(FetchError::Status(_)) => "error-diagram-http-status",
            Error::Fetch(_) => "error-diagram-network",
            Error::Config(_) => "error-config",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "server responded with status {}", code),
            FetchError::Transport(msg) => write!(f, "request failed: {}", msg),
            FetchError::Body(msg) => write!(f, "unreadable body: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<resvg::usvg::Error> for Error {
    fn from(err: resvg::usvg::Error) -> Self {
        Error::Svg(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Svg(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Fetch(FetchError::Status(status.as_u16())),
            None if err.is_body() || err.is_decode() => {
                Error::Fetch(FetchError::Body(err.to_string()))
            }
            None => Error::Fetch(FetchError::Transport(err.to_string())),
        }
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
    fn fetch_status_display_includes_code() {
        let err: Error = FetchError::Status(404).into();
        assert!(format!("{}", err).contains("404"));
    }

    #[test]
    fn i18n_keys_distinguish_failure_kinds() {
        assert_eq!(
            Error::Asset("pain-map/x.svg".into()).i18n_key(),
            "error-diagram-missing"
        );
        assert_eq!(Error::Svg("bad".into()).i18n_key(), "error-diagram-invalid");
        assert_eq!(
            Error::Fetch(FetchError::Status(500)).i18n_key(),
            "error-diagram-http-status"
        );
        assert_eq!(
            Error::Fetch(FetchError::Transport("refused".into())).i18n_key(),
            "error-diagram-network"
        );
    }
}
