//! Errors reported by the ADLX runtime and by the loader.

use crate::ADLX_RESULT;

/// The error type of the ADLX bindings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An ADLX call returned a failure code.
    #[error("ADLX call failed with {}", .0.name())]
    Adlx(ADLX_RESULT),
    /// An ADLX call succeeded but handed back a null interface.
    #[error("ADLX returned a null {0} interface")]
    NullInterface(&'static str),
    /// A vtable slot was empty.
    #[error("the {0} method is missing from the ADLX vtable")]
    MissingMethod(&'static str),
    /// The runtime library or one of its entry points couldn't be loaded.
    #[error("couldn't load the ADLX runtime: {0}")]
    Library(#[from] libloading::Error),
    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Other(value.to_owned())
    }
}

/// The result type used throughout the ADLX bindings.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

impl From<ADLX_RESULT> for Result {
    fn from(value: ADLX_RESULT) -> Self {
        if value.succeeded() {
            Ok(())
        } else {
            Err(Error::Adlx(value))
        }
    }
}

impl ADLX_RESULT {
    /// Mirrors `ADLX_SUCCEEDED`: the call went through, possibly as a
    /// no-op because the state was already in place.
    pub fn succeeded(self) -> bool {
        matches!(
            self,
            Self::ADLX_OK | Self::ADLX_ALREADY_ENABLED | Self::ADLX_ALREADY_INITIALIZED
        )
    }

    /// Mirrors `ADLX_FAILED`.
    pub fn failed(self) -> bool {
        !self.succeeded()
    }

    /// Returns the symbolic name of the code.
    pub fn name(self) -> &'static str {
        match self {
            Self::ADLX_OK => "ADLX_OK",
            Self::ADLX_ALREADY_ENABLED => "ADLX_ALREADY_ENABLED",
            Self::ADLX_ALREADY_INITIALIZED => "ADLX_ALREADY_INITIALIZED",
            Self::ADLX_FAIL => "ADLX_FAIL",
            Self::ADLX_INVALID_ARGS => "ADLX_INVALID_ARGS",
            Self::ADLX_BAD_VER => "ADLX_BAD_VER",
            Self::ADLX_UNKNOWN_INTERFACE => "ADLX_UNKNOWN_INTERFACE",
            Self::ADLX_TERMINATED => "ADLX_TERMINATED",
            Self::ADLX_ADL_INIT_ERROR => "ADLX_ADL_INIT_ERROR",
            Self::ADLX_NOT_FOUND => "ADLX_NOT_FOUND",
            Self::ADLX_INVALID_OBJECT => "ADLX_INVALID_OBJECT",
            Self::ADLX_ORPHAN_OBJECTS => "ADLX_ORPHAN_OBJECTS",
            Self::ADLX_NOT_SUPPORTED => "ADLX_NOT_SUPPORTED",
            Self::ADLX_PENDING_OPERATION => "ADLX_PENDING_OPERATION",
            Self::ADLX_GPU_INACTIVE => "ADLX_GPU_INACTIVE",
            Self::ADLX_TIMEOUT_OPERATION => "ADLX_TIMEOUT_OPERATION",
            Self::ADLX_NOT_ALLOWED => "ADLX_NOT_ALLOWED",
            _ => "ADLX_UNKNOWN_RESULT",
        }
    }
}

impl std::fmt::Display for ADLX_RESULT {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}
