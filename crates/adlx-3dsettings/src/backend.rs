//! The seam between the feature gateway and the vendor object graph.

use adlx_sys::{Error, Result, ADLX_RESULT};

/// A display feature the gateway can query and toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// Radeon Super Resolution, a driver-side upscaler with a sharpness
    /// setting.
    RadeonSuperResolution,
    /// AMD Fluid Motion Frames, driver-side frame interpolation.
    FluidMotionFrames,
    /// Radeon Anti-Lag, input latency reduction.
    AntiLag,
}

impl FeatureKind {
    /// All the features, in export order.
    pub const ALL: [FeatureKind; 3] = [
        FeatureKind::RadeonSuperResolution,
        FeatureKind::FluidMotionFrames,
        FeatureKind::AntiLag,
    ];
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FeatureKind::RadeonSuperResolution => "Radeon Super Resolution",
            FeatureKind::FluidMotionFrames => "AMD Fluid Motion Frames",
            FeatureKind::AntiLag => "Anti-Lag",
        })
    }
}

/// The properties of an acquired feature interface.
pub trait FeatureControl {
    /// Returns whether the feature is enabled.
    fn is_enabled(&self) -> Result<bool>;

    /// Enables or disables the feature.
    fn set_enabled(&self, enabled: bool) -> Result;

    /// Returns the sharpness. Only Radeon Super Resolution has one.
    fn sharpness(&self) -> Result<i32> {
        Err(Error::Adlx(ADLX_RESULT::ADLX_NOT_SUPPORTED))
    }

    /// Sets the sharpness. Only Radeon Super Resolution has one.
    fn set_sharpness(&self, _sharpness: i32) -> Result {
        Err(Error::Adlx(ADLX_RESULT::ADLX_NOT_SUPPORTED))
    }
}

/// Walks the vendor object graph:
/// `system -> GPU list -> first GPU -> 3D settings services -> feature`.
///
/// Every associated type owns one vendor reference and releases it when
/// dropped.
pub trait Backend {
    /// The process-wide root.
    type System;
    /// The enumerated GPUs.
    type GpuList;
    /// A single GPU.
    type Gpu;
    /// The 3D settings services.
    type Settings;
    /// A feature interface.
    type Feature: FeatureControl;

    /// Brings up the vendor runtime and returns its root.
    fn initialize(&self) -> Result<Self::System>;

    /// Enumerates the GPUs.
    fn gpus(&self, system: &Self::System) -> Result<Self::GpuList>;

    /// Returns the first enumerated GPU.
    fn first_gpu(&self, gpus: &Self::GpuList) -> Result<Self::Gpu>;

    /// Returns the 3D settings services for `gpu`.
    fn settings_services(&self, system: &Self::System, gpu: &Self::Gpu)
        -> Result<Self::Settings>;

    /// Returns the interface of one feature.
    fn feature(&self, settings: &Self::Settings, kind: FeatureKind) -> Result<Self::Feature>;
}
