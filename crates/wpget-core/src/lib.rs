pub mod config;
pub mod error;
pub mod fetch;
mod http;
pub mod locale;
pub mod logging;
pub mod run;
pub mod target;
pub mod version;

pub use error::{Error, Result, VersionCheckError};
