//! Loads the ADLX runtime library shipped with the AMD driver.

use libloading::Library;

use crate::{
    adlx_uint64, Error, IADLXSystem, Result, ADLXInitialize_Fn, ADLXQueryFullVersion_Fn,
    ADLXTerminate_Fn, ADLX_FULL_VERSION,
};

/// The file name of the ADLX runtime for the current target.
#[cfg(target_pointer_width = "64")]
pub const ADLX_DLL_NAME: &str = "amdadlx64.dll";
/// The file name of the ADLX runtime for the current target.
#[cfg(not(target_pointer_width = "64"))]
pub const ADLX_DLL_NAME: &str = "amdadlx32.dll";

const ADLX_QUERY_FULL_VERSION_FUNCTION_NAME: &[u8] = b"ADLXQueryFullVersion\0";
const ADLX_INIT_FUNCTION_NAME: &[u8] = b"ADLXInitialize\0";
const ADLX_TERMINATE_FUNCTION_NAME: &[u8] = b"ADLXTerminate\0";

/// The loaded ADLX runtime and its exported entry points.
///
/// The function pointers stay valid for as long as the library is loaded,
/// which is as long as this object lives.
pub struct Runtime {
    query_full_version: ADLXQueryFullVersion_Fn,
    initialize: ADLXInitialize_Fn,
    terminate: ADLXTerminate_Fn,
    // Declared last so that it's unloaded after everything above.
    _library: Library,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("library", &ADLX_DLL_NAME)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    /// Loads [`ADLX_DLL_NAME`] and resolves its entry points.
    pub fn load() -> Result<Self> {
        Self::load_from(ADLX_DLL_NAME)
    }

    /// Loads the runtime from an explicit path or library name.
    pub fn load_from(name: &str) -> Result<Self> {
        let library = unsafe { Library::new(name) }?;
        log::debug!("Loaded the ADLX runtime from {name}");

        let query_full_version = unsafe {
            *library.get::<ADLXQueryFullVersion_Fn>(ADLX_QUERY_FULL_VERSION_FUNCTION_NAME)?
        };
        let initialize = unsafe { *library.get::<ADLXInitialize_Fn>(ADLX_INIT_FUNCTION_NAME)? };
        let terminate =
            unsafe { *library.get::<ADLXTerminate_Fn>(ADLX_TERMINATE_FUNCTION_NAME)? };

        Ok(Self {
            query_full_version,
            initialize,
            terminate,
            _library: library,
        })
    }

    /// Returns the full version of the loaded runtime, packed the same way
    /// as [`ADLX_FULL_VERSION`].
    pub fn full_version(&self) -> Result<adlx_uint64> {
        let query = self
            .query_full_version
            .ok_or(Error::MissingMethod("ADLXQueryFullVersion"))?;
        let mut version = 0u64;
        Result::from(unsafe { query(&mut version as *mut _) }).map(|_| version)
    }

    /// Initializes ADLX with the version these bindings were written
    /// against and returns the system services root.
    ///
    /// The returned pointer is not reference counted; it stays valid until
    /// [`Runtime::terminate`] is called.
    pub fn initialize(&self) -> Result<*mut IADLXSystem> {
        let initialize = self
            .initialize
            .ok_or(Error::MissingMethod("ADLXInitialize"))?;
        let mut system: *mut IADLXSystem = std::ptr::null_mut();
        Result::from(unsafe { initialize(ADLX_FULL_VERSION, &mut system as *mut _) })
            .map(|_| system)
    }

    /// Terminates ADLX. Every interface obtained from the system must have
    /// been released before this call.
    pub fn terminate(&self) -> Result {
        let terminate = self
            .terminate
            .ok_or(Error::MissingMethod("ADLXTerminate"))?;
        unsafe { terminate() }.into()
    }
}
