//! GPU enumeration.

use adlx_sys::{Error, IADLXGPU, IADLXGPUList, Result};

use crate::handle::{method, Handle};

/// A single AMD GPU.
pub type Gpu = Handle<IADLXGPU>;
/// An ordered list of the AMD GPUs in the system.
pub type GpuList = Handle<IADLXGPUList>;

impl Handle<IADLXGPUList> {
    /// Returns the number of GPUs in the list.
    pub fn len(&self) -> u32 {
        self.vtbl()
            .Size
            .map(|size| unsafe { size(self.as_ptr()) })
            .unwrap_or(0)
    }

    /// Returns [`true`] if the list has no GPUs.
    pub fn is_empty(&self) -> bool {
        self.vtbl()
            .Empty
            .map(|empty| unsafe { empty(self.as_ptr()) })
            .unwrap_or(true)
    }

    /// Returns the GPU at `index`.
    pub fn at(&self, index: u32) -> Result<Gpu> {
        let at = method!(self, At_GPUList)?;
        let mut gpu = std::ptr::null_mut();
        Result::from(unsafe { at(self.as_ptr(), index, &mut gpu as *mut _) })?;
        unsafe { Handle::from_raw(gpu) }
    }

    /// Returns the first enumerated GPU.
    pub fn first(&self) -> Result<Gpu> {
        if self.is_empty() {
            return Err(Error::Other("No AMD GPUs were found.".to_owned()));
        }
        self.at(0)
    }
}
