//! `adlx-sys` provides low-level "sys" bindings to the AMD Device Library
//! eXtra (ADLX) runtime.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::all)]

use libc::wchar_t;

include!("bindings.rs");

pub mod error;
pub use error::*;
pub mod loader;
pub use loader::Runtime;

/// Interface id of [`IADLX3DSettingsServices1`], passed to `QueryInterface`.
pub const IID_IADLX3DSettingsServices1: &str = "IADLX3DSettingsServices1";

/// A reference-counted ADLX interface.
///
/// Every implementor is a `{ pVtbl }` struct whose vtable begins with the
/// [`IADLXInterfaceVtbl`] slots (`Acquire`, `Release`, `QueryInterface`), so a
/// pointer to it may be reinterpreted as a pointer to [`IADLXInterface`].
///
/// # Safety
///
/// Implementors must uphold the layout described above.
pub unsafe trait Interface {
    /// The vtable type.
    type Vtbl;
    /// The interface name, used in logs and errors.
    const NAME: &'static str;

    /// Returns the vtable of the interface behind `this`.
    ///
    /// # Safety
    ///
    /// `this` must point to a live interface.
    unsafe fn vtbl(this: *const Self) -> *const Self::Vtbl;
}

macro_rules! impl_interface {
    ($($interface:ident => $vtbl:ident),+ $(,)?) => {
        $(
            unsafe impl Interface for $interface {
                type Vtbl = $vtbl;
                const NAME: &'static str = stringify!($interface);

                unsafe fn vtbl(this: *const Self) -> *const Self::Vtbl {
                    (*this).pVtbl
                }
            }
        )+
    };
}

impl_interface!(
    IADLXInterface => IADLXInterfaceVtbl,
    IADLXGPU => IADLXGPUVtbl,
    IADLXGPUList => IADLXGPUListVtbl,
    IADLX3DSettingsServices => IADLX3DSettingsServicesVtbl,
    IADLX3DSettingsServices1 => IADLX3DSettingsServices1Vtbl,
    IADLX3DRadeonSuperResolution => IADLX3DRadeonSuperResolutionVtbl,
    IADLX3DAMDFluidMotionFrames => IADLX3DAMDFluidMotionFramesVtbl,
    IADLX3DAntiLag => IADLX3DAntiLagVtbl,
);
