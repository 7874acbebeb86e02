//! 3D graphics settings and the feature interfaces reached through them.

use adlx_sys::{
    IADLX3DAMDFluidMotionFrames, IADLX3DAntiLag, IADLX3DRadeonSuperResolution,
    IADLX3DSettingsServices, IADLX3DSettingsServices1, Result, IID_IADLX3DSettingsServices1,
};

use crate::{
    gpu::Gpu,
    handle::{method, Handle},
};

/// Radeon Super Resolution.
pub type RadeonSuperResolution = Handle<IADLX3DRadeonSuperResolution>;
/// AMD Fluid Motion Frames.
pub type FluidMotionFrames = Handle<IADLX3DAMDFluidMotionFrames>;
/// Radeon Anti-Lag.
pub type AntiLag = Handle<IADLX3DAntiLag>;

/// The 3D settings services bound to one GPU.
///
/// Some feature getters are per GPU, so this keeps its own reference to the
/// GPU it was created for.
#[derive(Debug)]
pub struct Settings3D {
    services: Handle<IADLX3DSettingsServices>,
    gpu: Gpu,
}

impl Settings3D {
    /// Binds `services` to `gpu`, taking an extra reference on the GPU.
    pub fn new(services: Handle<IADLX3DSettingsServices>, gpu: &Gpu) -> Result<Self> {
        Ok(Self {
            services,
            gpu: gpu.acquire()?,
        })
    }

    /// Returns the Radeon Super Resolution interface. The setting is global
    /// rather than per GPU.
    pub fn radeon_super_resolution(&self) -> Result<RadeonSuperResolution> {
        let get = method!(self.services, GetRadeonSuperResolution)?;
        let mut rsr = std::ptr::null_mut();
        Result::from(unsafe { get(self.services.as_ptr(), &mut rsr as *mut _) })?;
        unsafe { Handle::from_raw(rsr) }
    }

    /// Returns the AMD Fluid Motion Frames interface.
    ///
    /// It lives on the `IADLX3DSettingsServices1` extension, which older
    /// drivers don't implement.
    pub fn fluid_motion_frames(&self) -> Result<FluidMotionFrames> {
        let services: Handle<IADLX3DSettingsServices1> =
            self.services.query_interface(IID_IADLX3DSettingsServices1)?;
        let get = method!(services, GetAMDFluidMotionFrames)?;
        let mut afmf = std::ptr::null_mut();
        Result::from(unsafe { get(services.as_ptr(), &mut afmf as *mut _) })?;
        unsafe { Handle::from_raw(afmf) }
    }

    /// Returns the Anti-Lag interface of the bound GPU.
    pub fn anti_lag(&self) -> Result<AntiLag> {
        let get = method!(self.services, GetAntiLag)?;
        let mut anti_lag = std::ptr::null_mut();
        Result::from(unsafe {
            get(
                self.services.as_ptr(),
                self.gpu.as_ptr(),
                &mut anti_lag as *mut _,
            )
        })?;
        unsafe { Handle::from_raw(anti_lag) }
    }
}

/// Implements the enabled-state accessors every feature interface shares.
macro_rules! impl_enabled_state {
    ($($interface:ty),+ $(,)?) => {
        $(
            impl Handle<$interface> {
                /// Returns whether the feature is enabled.
                pub fn is_enabled(&self) -> Result<bool> {
                    let is_enabled = method!(self, IsEnabled)?;
                    let mut enabled = false;
                    Result::from(unsafe { is_enabled(self.as_ptr(), &mut enabled as *mut _) })
                        .map(|_| enabled)
                }

                /// Enables or disables the feature.
                pub fn set_enabled(&self, enabled: bool) -> Result {
                    let set_enabled = method!(self, SetEnabled)?;
                    unsafe { set_enabled(self.as_ptr(), enabled) }.into()
                }
            }
        )+
    };
}

impl_enabled_state!(
    IADLX3DRadeonSuperResolution,
    IADLX3DAMDFluidMotionFrames,
    IADLX3DAntiLag,
);

impl Handle<IADLX3DRadeonSuperResolution> {
    /// Returns the current sharpness.
    pub fn sharpness(&self) -> Result<i32> {
        let get_sharpness = method!(self, GetSharpness)?;
        let mut sharpness = 0;
        Result::from(unsafe { get_sharpness(self.as_ptr(), &mut sharpness as *mut _) })
            .map(|_| sharpness)
    }

    /// Sets the sharpness.
    pub fn set_sharpness(&self, sharpness: i32) -> Result {
        let set_sharpness = method!(self, SetSharpness)?;
        unsafe { set_sharpness(self.as_ptr(), sharpness) }.into()
    }
}
