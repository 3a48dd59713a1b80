//! defines error types

use failure::Fail;

/// SettingsError covers the transport and CLI failure paths. Store
/// operations themselves report their outcome as message strings and
/// never fail.
#[derive(Debug, Fail)]
pub enum SettingsError {
    #[fail(display = "io error: {}", _0)]
    Io(#[fail(cause)] std::io::Error),
    #[fail(display = "serialization error: {}", _0)]
    Serde(#[fail(cause)] serde_json::Error),
    #[fail(display = "parameter not found: {}, required by: {}", parameter, required_by)]
    CliError {
        parameter: String,
        required_by: String,
    },
    #[fail(display = "unknown command")]
    CliUnknownCommand {},
    #[fail(display = "request failed: {}", reason)]
    RequestError { reason: String },
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Serde(err)
    }
}
