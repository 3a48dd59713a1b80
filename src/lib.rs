//! defines SettingsStore struct which implements a simple in-memory user settings storage

pub mod error;
pub mod server;
mod command;
mod engine;
mod store;

pub use command::{CommandRequest, CommandResponse};
pub use engine::SettingsEngine;
pub use store::SettingsStore;

use error::SettingsError;

pub type Result<T> = std::result::Result<T, SettingsError>;
