//! Owned references to ADLX interfaces.

use std::ptr::NonNull;

use adlx_sys::{Error, IADLXInterface, IADLXInterfaceVtbl, Interface, Result};

/// Looks up a vtable slot, failing with [`Error::MissingMethod`] when the
/// runtime left it empty.
macro_rules! method {
    ($object:expr, $name:ident) => {
        $object
            .vtbl()
            .$name
            .ok_or(adlx_sys::Error::MissingMethod(stringify!($name)))
    };
}
pub(crate) use method;

/// An owned reference to a reference-counted ADLX interface. The reference
/// is released when the handle is dropped.
#[repr(transparent)]
pub struct Handle<T: Interface>(NonNull<T>);

impl<T: Interface> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Handle")
            .field(&T::NAME)
            .field(&self.0)
            .finish()
    }
}

impl<T: Interface> Handle<T> {
    /// Takes ownership of a reference handed out by an ADLX call.
    ///
    /// # Safety
    ///
    /// `ptr` must either be null or point to a live interface whose
    /// reference is owned by the caller.
    pub unsafe fn from_raw(ptr: *mut T) -> Result<Self> {
        NonNull::new(ptr)
            .map(Self)
            .ok_or(Error::NullInterface(T::NAME))
    }

    /// Returns the raw interface pointer. The handle keeps ownership.
    pub fn as_ptr(&self) -> *mut T {
        self.0.as_ptr()
    }

    pub(crate) fn vtbl(&self) -> &T::Vtbl {
        // The handle owns a reference, so the interface and its vtable are
        // alive for at least as long as `self`.
        unsafe { &*T::vtbl(self.as_ptr()) }
    }

    fn base(&self) -> *mut IADLXInterface {
        self.as_ptr().cast()
    }

    fn base_vtbl(&self) -> &IADLXInterfaceVtbl {
        unsafe { &*IADLXInterface::vtbl(self.base()) }
    }

    /// Adds a reference to the interface and returns it as a new handle.
    pub fn acquire(&self) -> Result<Self> {
        let acquire = self
            .base_vtbl()
            .Acquire
            .ok_or(Error::MissingMethod("Acquire"))?;
        unsafe { acquire(self.base()) };
        Ok(Self(self.0))
    }

    /// Queries the object for another interface, identified by its ADLX
    /// interface id (for example [`adlx_sys::IID_IADLX3DSettingsServices1`]).
    pub fn query_interface<U: Interface>(&self, interface_id: &str) -> Result<Handle<U>> {
        let query = self
            .base_vtbl()
            .QueryInterface
            .ok_or(Error::MissingMethod("QueryInterface"))?;
        let id = widestring::WideCString::from_str(interface_id)
            .map_err(|_| Error::Other(format!("Invalid interface id {interface_id:?}.")))?;
        let mut ptr: *mut std::ffi::c_void = std::ptr::null_mut();
        Result::from(unsafe { query(self.base(), id.as_ptr().cast(), &mut ptr as *mut _) })?;
        unsafe { Handle::<U>::from_raw(ptr.cast()) }
    }
}

impl<T: Interface> Drop for Handle<T> {
    fn drop(&mut self) {
        match self.base_vtbl().Release {
            Some(release) => {
                let remaining = unsafe { release(self.base()) };
                log::trace!("Released {} ({remaining} references left)", T::NAME);
            }
            None => log::error!("Couldn't release {self:?}: the Release method is missing"),
        }
    }
}
