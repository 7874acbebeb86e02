//! [`Backend`] implementation on top of the ADLX runtime.

use adlx_sys::Result;

use crate::{
    backend::{Backend, FeatureControl, FeatureKind},
    gpu::{Gpu, GpuList},
    settings::{AntiLag, FluidMotionFrames, RadeonSuperResolution, Settings3D},
    system::System,
};

/// The ADLX runtime installed with the AMD driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Adlx;

/// A feature interface obtained from ADLX.
#[derive(Debug)]
pub enum AdlxFeature {
    /// Radeon Super Resolution.
    RadeonSuperResolution(RadeonSuperResolution),
    /// AMD Fluid Motion Frames.
    FluidMotionFrames(FluidMotionFrames),
    /// Anti-Lag.
    AntiLag(AntiLag),
}

impl FeatureControl for AdlxFeature {
    fn is_enabled(&self) -> Result<bool> {
        match self {
            Self::RadeonSuperResolution(rsr) => rsr.is_enabled(),
            Self::FluidMotionFrames(afmf) => afmf.is_enabled(),
            Self::AntiLag(anti_lag) => anti_lag.is_enabled(),
        }
    }

    fn set_enabled(&self, enabled: bool) -> Result {
        match self {
            Self::RadeonSuperResolution(rsr) => rsr.set_enabled(enabled),
            Self::FluidMotionFrames(afmf) => afmf.set_enabled(enabled),
            Self::AntiLag(anti_lag) => anti_lag.set_enabled(enabled),
        }
    }

    fn sharpness(&self) -> Result<i32> {
        match self {
            Self::RadeonSuperResolution(rsr) => rsr.sharpness(),
            _ => Err(adlx_sys::Error::Adlx(adlx_sys::ADLX_RESULT::ADLX_NOT_SUPPORTED)),
        }
    }

    fn set_sharpness(&self, sharpness: i32) -> Result {
        match self {
            Self::RadeonSuperResolution(rsr) => rsr.set_sharpness(sharpness),
            _ => Err(adlx_sys::Error::Adlx(adlx_sys::ADLX_RESULT::ADLX_NOT_SUPPORTED)),
        }
    }
}

impl Backend for Adlx {
    type System = System;
    type GpuList = GpuList;
    type Gpu = Gpu;
    type Settings = Settings3D;
    type Feature = AdlxFeature;

    fn initialize(&self) -> Result<System> {
        System::new()
    }

    fn gpus(&self, system: &System) -> Result<GpuList> {
        system.gpus()
    }

    fn first_gpu(&self, gpus: &GpuList) -> Result<Gpu> {
        gpus.first()
    }

    fn settings_services(&self, system: &System, gpu: &Gpu) -> Result<Settings3D> {
        Settings3D::new(system.settings_3d_services()?, gpu)
    }

    fn feature(&self, settings: &Settings3D, kind: FeatureKind) -> Result<AdlxFeature> {
        Ok(match kind {
            FeatureKind::RadeonSuperResolution => {
                AdlxFeature::RadeonSuperResolution(settings.radeon_super_resolution()?)
            }
            FeatureKind::FluidMotionFrames => {
                AdlxFeature::FluidMotionFrames(settings.fluid_motion_frames()?)
            }
            FeatureKind::AntiLag => AdlxFeature::AntiLag(settings.anti_lag()?),
        })
    }
}
