//! The flat C exports.
//!
//! Every export goes through the process-wide [`Gateway`] and collapses any
//! [`FeatureError`] into `false` (or `-1` for the sharpness getter). A panic
//! is reported the same way instead of unwinding into the caller.
#![allow(non_snake_case)]

use std::{
    ffi::c_int,
    panic::{catch_unwind, AssertUnwindSafe},
};

use crate::{
    adlx::Adlx,
    backend::{Backend, FeatureKind},
    error::FeatureError,
    gateway::Gateway,
};

/// The sharpness getter's failure value.
pub const SHARPNESS_UNAVAILABLE: c_int = -1;

static GATEWAY: Gateway<Adlx> = Gateway::new(Adlx);

fn guarded<T>(export: &str, fallback: T, call: impl FnOnce() -> Result<T, FeatureError>) -> T {
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            log::debug!("{export}: {e}");
            fallback
        }
        Err(_) => {
            log::error!("{export} panicked");
            fallback
        }
    }
}

fn has_support<B: Backend>(export: &str, gateway: &Gateway<B>, kind: FeatureKind) -> bool {
    guarded(export, false, || gateway.has_support(kind).map(|_| true))
}

fn is_enabled<B: Backend>(export: &str, gateway: &Gateway<B>, kind: FeatureKind) -> bool {
    guarded(export, false, || gateway.is_enabled(kind))
}

fn set_enabled<B: Backend>(
    export: &str,
    gateway: &Gateway<B>,
    kind: FeatureKind,
    enabled: bool,
) -> bool {
    guarded(export, false, || {
        gateway.set_enabled(kind, enabled).map(|_| true)
    })
}

fn sharpness<B: Backend>(export: &str, gateway: &Gateway<B>) -> c_int {
    guarded(export, SHARPNESS_UNAVAILABLE, || gateway.sharpness())
}

fn set_sharpness<B: Backend>(export: &str, gateway: &Gateway<B>, sharpness: c_int) -> bool {
    guarded(export, false, || gateway.set_sharpness(sharpness).map(|_| true))
}

/// Releases the root when the library is unloaded. At process exit other
/// threads are already gone and may have died holding the lock, so the root
/// is only released if the lock is free.
#[cfg_attr(not(windows), allow(dead_code))]
fn detach<B: Backend>(gateway: &Gateway<B>, process_exit: bool) -> bool {
    if !process_exit {
        return gateway.shutdown();
    }
    gateway.try_shutdown().unwrap_or_else(|| {
        log::debug!("The gateway is busy at process exit, leaving ADLX running");
        false
    })
}

/// Returns `true` if Radeon Super Resolution can be controlled.
#[no_mangle]
pub extern "C" fn HasRSRSupport() -> bool {
    has_support("HasRSRSupport", &GATEWAY, FeatureKind::RadeonSuperResolution)
}

/// Returns `true` if Radeon Super Resolution is enabled.
#[no_mangle]
pub extern "C" fn GetRSRState() -> bool {
    is_enabled("GetRSRState", &GATEWAY, FeatureKind::RadeonSuperResolution)
}

/// Enables or disables Radeon Super Resolution.
#[no_mangle]
pub extern "C" fn SetRSR(is_enabled: bool) -> bool {
    set_enabled(
        "SetRSR",
        &GATEWAY,
        FeatureKind::RadeonSuperResolution,
        is_enabled,
    )
}

/// Returns the Radeon Super Resolution sharpness, or `-1`.
#[no_mangle]
pub extern "C" fn GetRSRSharpness() -> c_int {
    sharpness("GetRSRSharpness", &GATEWAY)
}

/// Sets the Radeon Super Resolution sharpness. Only `0..=100` is accepted.
#[no_mangle]
pub extern "C" fn SetRSRSharpness(sharpness: c_int) -> bool {
    set_sharpness("SetRSRSharpness", &GATEWAY, sharpness)
}

/// Returns `true` if AMD Fluid Motion Frames can be controlled.
#[no_mangle]
pub extern "C" fn HasAFMFSupport() -> bool {
    has_support("HasAFMFSupport", &GATEWAY, FeatureKind::FluidMotionFrames)
}

/// Returns `true` if AMD Fluid Motion Frames is enabled.
#[no_mangle]
pub extern "C" fn GetAFMFState() -> bool {
    is_enabled("GetAFMFState", &GATEWAY, FeatureKind::FluidMotionFrames)
}

/// Enables or disables AMD Fluid Motion Frames.
#[no_mangle]
pub extern "C" fn SetAFMFState(is_enabled: bool) -> bool {
    set_enabled(
        "SetAFMFState",
        &GATEWAY,
        FeatureKind::FluidMotionFrames,
        is_enabled,
    )
}

/// Returns `true` if Anti-Lag can be controlled.
#[no_mangle]
pub extern "C" fn HasAntiLagSupport() -> bool {
    has_support("HasAntiLagSupport", &GATEWAY, FeatureKind::AntiLag)
}

/// Returns `true` if Anti-Lag is enabled.
#[no_mangle]
pub extern "C" fn GetAntiLagState() -> bool {
    is_enabled("GetAntiLagState", &GATEWAY, FeatureKind::AntiLag)
}

/// Enables or disables Anti-Lag.
#[no_mangle]
pub extern "C" fn SetAntiLagState(is_enabled: bool) -> bool {
    set_enabled("SetAntiLagState", &GATEWAY, FeatureKind::AntiLag, is_enabled)
}

/// Terminates ADLX when the library is unloaded.
#[cfg(windows)]
#[no_mangle]
extern "system" fn DllMain(
    _module: windows::Win32::Foundation::HINSTANCE,
    reason: u32,
    reserved: *mut std::ffi::c_void,
) -> windows::Win32::Foundation::BOOL {
    if reason == windows::Win32::System::SystemServices::DLL_PROCESS_DETACH {
        // A non-null `reserved` means the whole process is terminating.
        detach(&GATEWAY, !reserved.is_null());
    }
    windows::Win32::Foundation::TRUE
}
