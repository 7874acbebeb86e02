//! The feature gateway: resolves a feature through the vendor object graph,
//! reads or writes one property and releases everything it acquired.

use std::{ops::RangeInclusive, sync::Arc};

use parking_lot::Mutex;

use crate::{
    backend::{Backend, FeatureControl, FeatureKind},
    error::FeatureError,
};

/// The sharpness values Radeon Super Resolution accepts.
pub const SHARPNESS_RANGE: RangeInclusive<i32> = 0..=100;

/// Resolves features through a [`Backend`].
///
/// The backend root is created by the first successful call and shared by
/// every later one until [`Gateway::shutdown`]. GPU, settings and feature
/// handles are resolved again on every call and released before it
/// returns.
pub struct Gateway<B: Backend> {
    backend: B,
    system: Mutex<Option<Arc<B::System>>>,
}

impl<B: Backend> Gateway<B> {
    /// Creates a gateway. Nothing is initialized until the first call.
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            system: parking_lot::const_mutex(None),
        }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns [`true`] once the root has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.system.lock().is_some()
    }

    /// Returns the root, initializing it on first use.
    ///
    /// Concurrent first callers wait for the one doing the initialization.
    /// A failed initialization isn't remembered; the next call tries again.
    pub fn ensure_initialized(&self) -> Result<Arc<B::System>, FeatureError> {
        let mut system = self.system.lock();
        if let Some(system) = system.as_ref() {
            return Ok(Arc::clone(system));
        }

        let initialized = Arc::new(
            self.backend
                .initialize()
                .map_err(FeatureError::Initialization)?,
        );
        log::debug!("Initialized the vendor system services");
        *system = Some(Arc::clone(&initialized));
        Ok(initialized)
    }

    /// Releases the root. It is torn down as soon as no call is using it.
    /// Returns [`true`] if a root was held.
    pub fn shutdown(&self) -> bool {
        let system = self.system.lock().take();
        system.is_some()
    }

    /// Like [`Gateway::shutdown`], but returns [`None`] instead of waiting
    /// when the root is locked.
    pub fn try_shutdown(&self) -> Option<bool> {
        let system = self.system.try_lock()?.take();
        Some(system.is_some())
    }

    fn settings_services(&self, system: &B::System) -> Result<B::Settings, FeatureError> {
        let gpus = self
            .backend
            .gpus(system)
            .map_err(FeatureError::Enumeration)?;
        let gpu = self
            .backend
            .first_gpu(&gpus)
            .map_err(FeatureError::Enumeration)?;
        let settings = self
            .backend
            .settings_services(system, &gpu)
            .map_err(FeatureError::SettingsServices);

        // Not needed past this point.
        drop(gpu);
        drop(gpus);
        settings
    }

    fn with_feature<T>(
        &self,
        kind: FeatureKind,
        act: impl FnOnce(&B::Feature) -> Result<T, FeatureError>,
    ) -> Result<T, FeatureError> {
        let system = self.ensure_initialized()?;
        let settings = self.settings_services(&system)?;
        let feature = self
            .backend
            .feature(&settings, kind)
            .map_err(|source| FeatureError::CapabilityAbsent { kind, source })?;

        let result = act(&feature);

        drop(feature);
        drop(settings);
        result
    }

    /// Succeeds if the feature interface can be obtained.
    pub fn has_support(&self, kind: FeatureKind) -> Result<(), FeatureError> {
        self.with_feature(kind, |_| Ok(()))
    }

    /// Returns whether the feature is enabled.
    pub fn is_enabled(&self, kind: FeatureKind) -> Result<bool, FeatureError> {
        self.with_feature(kind, |feature| {
            feature
                .is_enabled()
                .map_err(|source| FeatureError::Query { kind, source })
        })
    }

    /// Enables or disables the feature.
    pub fn set_enabled(&self, kind: FeatureKind, enabled: bool) -> Result<(), FeatureError> {
        self.with_feature(kind, |feature| {
            feature
                .set_enabled(enabled)
                .map_err(|source| FeatureError::WriteRejected { kind, source })
        })
    }

    /// Returns the Radeon Super Resolution sharpness.
    pub fn sharpness(&self) -> Result<i32, FeatureError> {
        let kind = FeatureKind::RadeonSuperResolution;
        self.with_feature(kind, |feature| {
            feature
                .sharpness()
                .map_err(|source| FeatureError::Query { kind, source })
        })
    }

    /// Sets the Radeon Super Resolution sharpness. Values outside of
    /// [`SHARPNESS_RANGE`] are rejected without touching the backend.
    pub fn set_sharpness(&self, sharpness: i32) -> Result<(), FeatureError> {
        if !SHARPNESS_RANGE.contains(&sharpness) {
            return Err(FeatureError::SharpnessOutOfRange(sharpness));
        }

        let kind = FeatureKind::RadeonSuperResolution;
        self.with_feature(kind, |feature| {
            feature
                .set_sharpness(sharpness)
                .map_err(|source| FeatureError::WriteRejected { kind, source })
        })
    }
}
