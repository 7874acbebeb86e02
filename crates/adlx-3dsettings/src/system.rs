//! The ADLX system services root.

use std::ptr::NonNull;

use adlx_sys::{
    Error, IADLX3DSettingsServices, IADLXSystem, IADLXSystemVtbl, Result, Runtime,
};

use crate::{gpu::GpuList, handle::method, handle::Handle};

/// Formats a packed ADLX version as `major.minor.release.build`.
pub fn version_string(version: u64) -> String {
    format!(
        "{}.{}.{}.{}",
        version >> 48,
        (version >> 32) & 0xffff,
        (version >> 16) & 0xffff,
        version & 0xffff
    )
}

/// ADLX system services: the root every other ADLX interface is obtained
/// from. Dropping it terminates ADLX and unloads the runtime.
#[derive(Debug)]
pub struct System {
    system: NonNull<IADLXSystem>,
    runtime: Runtime,
}

// ADLX system services are documented as usable from any thread; the
// pointer is never freed while `System` lives.
unsafe impl Send for System {}
unsafe impl Sync for System {}

impl System {
    /// Loads the ADLX runtime shipped with the driver and initializes it.
    pub fn new() -> Result<Self> {
        Self::with_runtime(Runtime::load()?)
    }

    /// Initializes ADLX using an already loaded runtime.
    pub fn with_runtime(runtime: Runtime) -> Result<Self> {
        match runtime.full_version() {
            Ok(version) => log::debug!("ADLX runtime version {}", version_string(version)),
            Err(e) => log::debug!("Couldn't query the ADLX runtime version: {e}"),
        }

        let system = runtime.initialize()?;
        match NonNull::new(system) {
            Some(system) => Ok(Self { system, runtime }),
            None => {
                if let Err(e) = runtime.terminate() {
                    log::error!("Couldn't terminate ADLX after a failed initialization: {e}");
                }
                Err(Error::NullInterface("IADLXSystem"))
            }
        }
    }

    fn vtbl(&self) -> &IADLXSystemVtbl {
        unsafe { &*self.system.as_ref().pVtbl }
    }

    /// Returns the version of the loaded runtime.
    pub fn full_version(&self) -> Result<u64> {
        self.runtime.full_version()
    }

    /// Returns the list of AMD GPUs in the system.
    pub fn gpus(&self) -> Result<GpuList> {
        let get_gpus = method!(self, GetGPUs)?;
        let mut gpus = std::ptr::null_mut();
        Result::from(unsafe { get_gpus(self.system.as_ptr(), &mut gpus as *mut _) })?;
        unsafe { Handle::from_raw(gpus) }
    }

    /// Returns the 3D graphics settings services.
    pub fn settings_3d_services(&self) -> Result<Handle<IADLX3DSettingsServices>> {
        let get_services = method!(self, Get3DSettingsServices)?;
        let mut services = std::ptr::null_mut();
        Result::from(unsafe { get_services(self.system.as_ptr(), &mut services as *mut _) })?;
        unsafe { Handle::from_raw(services) }
    }

    fn terminate(&self) -> Result {
        self.runtime.terminate()
    }
}

impl Drop for System {
    fn drop(&mut self) {
        if let Err(e) = self.terminate() {
            log::error!("Couldn't terminate the ADLX system {self:?}: {e}");
        }
    }
}
