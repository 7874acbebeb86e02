//! Failures of a single gateway call.
//!
//! The C exports collapse all of these into `false` / `-1`; the variants
//! exist so the Rust API and the tests can tell them apart.

use crate::backend::FeatureKind;

/// Why a gateway call didn't produce its value.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// The vendor runtime couldn't be brought up: driver or runtime absent
    /// or incompatible.
    #[error("couldn't initialize ADLX: {0}")]
    Initialization(#[source] adlx_sys::Error),
    /// The GPU list couldn't be retrieved or had no first GPU.
    #[error("couldn't find a GPU: {0}")]
    Enumeration(#[source] adlx_sys::Error),
    /// The 3D settings services couldn't be obtained.
    #[error("couldn't get the 3D settings services: {0}")]
    SettingsServices(#[source] adlx_sys::Error),
    /// The feature interface couldn't be obtained from otherwise healthy
    /// settings services.
    #[error("{kind} isn't available: {source}")]
    CapabilityAbsent {
        /// The requested feature.
        kind: FeatureKind,
        /// The vendor error.
        source: adlx_sys::Error,
    },
    /// Reading a property failed.
    #[error("couldn't read the {kind} state: {source}")]
    Query {
        /// The queried feature.
        kind: FeatureKind,
        /// The vendor error.
        source: adlx_sys::Error,
    },
    /// The requested sharpness is outside of [`crate::gateway::SHARPNESS_RANGE`].
    /// Nothing was sent to the driver.
    #[error("sharpness {0} is outside of 0..=100")]
    SharpnessOutOfRange(i32),
    /// The driver refused a write. The state is unchanged.
    #[error("couldn't change the {kind} state: {source}")]
    WriteRejected {
        /// The written feature.
        kind: FeatureKind,
        /// The vendor error.
        source: adlx_sys::Error,
    },
}

impl FeatureError {
    /// Returns [`true`] if a write was refused, either up front or by the
    /// driver.
    pub fn is_write_rejected(&self) -> bool {
        matches!(
            self,
            FeatureError::SharpnessOutOfRange(_) | FeatureError::WriteRejected { .. }
        )
    }
}
