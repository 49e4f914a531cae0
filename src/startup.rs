//! Startup errors and the process exit code

use std::fmt;

use orrery_core::{AssetLoadError, CatalogError, PresentationInitError};

/// Exit code for any failure before the first frame
pub const EXIT_FAILURE: i32 = -1;

/// Anything that can stop the app from reaching its first frame
#[derive(Debug)]
pub enum StartupError {
    Presentation(PresentationInitError),
    Asset(AssetLoadError),
    Catalog(CatalogError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Presentation(err) => write!(f, "{}", err),
            StartupError::Asset(err) => write!(f, "{}", err),
            StartupError::Catalog(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Presentation(err) => Some(err),
            StartupError::Asset(err) => Some(err),
            StartupError::Catalog(err) => Some(err),
        }
    }
}

impl From<PresentationInitError> for StartupError {
    fn from(err: PresentationInitError) -> Self {
        StartupError::Presentation(err)
    }
}

impl From<AssetLoadError> for StartupError {
    fn from(err: AssetLoadError) -> Self {
        StartupError::Asset(err)
    }
}

impl From<CatalogError> for StartupError {
    fn from(err: CatalogError) -> Self {
        StartupError::Catalog(err)
    }
}

/// Map the outcome of startup to the process exit code
pub fn startup_exit_code<T>(result: &Result<T, StartupError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => EXIT_FAILURE,
    }
}
