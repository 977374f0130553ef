use std::fmt;
use std::io;

use marching_front::FrontError;

/// Errors surfaced by the demo driver.
#[derive(Debug)]
pub enum DemoError {
    /// Reading the configuration or writing output failed.
    Io(io::Error),
    /// The configuration file is not valid JSON for [`DemoConfig`](crate::DemoConfig).
    Config(serde_json::Error),
    /// Propagation rejected the configuration.
    Front(FrontError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Front(e) => write!(f, "propagation failed: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Front(e) => Some(e),
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

impl From<FrontError> for DemoError {
    fn from(e: FrontError) -> Self {
        Self::Front(e)
    }
}
