// Subset of the ADLX C ABI used by this workspace, kept in the shape
// `bindgen` produces for the C flavour of the SDK headers. Enable the
// `generate-bindings` feature to regenerate it from `ADLX_SDK_PATH`.

pub type adlx_int = ::std::os::raw::c_int;
pub type adlx_uint = ::std::os::raw::c_uint;
pub type adlx_uint64 = u64;
pub type adlx_long = ::std::os::raw::c_long;
pub type adlx_bool = bool;

pub const ADLX_VER_MAJOR: adlx_uint64 = 1;
pub const ADLX_VER_MINOR: adlx_uint64 = 2;
pub const ADLX_VER_RELEASE: adlx_uint64 = 0;
pub const ADLX_VER_BUILD_NUM: adlx_uint64 = 0;
/// `ADLX_MAKE_FULL_VER(major, minor, release, build)`.
pub const ADLX_FULL_VERSION: adlx_uint64 = (ADLX_VER_MAJOR << 48)
    | (ADLX_VER_MINOR << 32)
    | (ADLX_VER_RELEASE << 16)
    | ADLX_VER_BUILD_NUM;

impl ADLX_RESULT {
    pub const ADLX_OK: ADLX_RESULT = ADLX_RESULT(0);
    pub const ADLX_ALREADY_ENABLED: ADLX_RESULT = ADLX_RESULT(1);
    pub const ADLX_ALREADY_INITIALIZED: ADLX_RESULT = ADLX_RESULT(2);
    pub const ADLX_FAIL: ADLX_RESULT = ADLX_RESULT(3);
    pub const ADLX_INVALID_ARGS: ADLX_RESULT = ADLX_RESULT(4);
    pub const ADLX_BAD_VER: ADLX_RESULT = ADLX_RESULT(5);
    pub const ADLX_UNKNOWN_INTERFACE: ADLX_RESULT = ADLX_RESULT(6);
    pub const ADLX_TERMINATED: ADLX_RESULT = ADLX_RESULT(7);
    pub const ADLX_ADL_INIT_ERROR: ADLX_RESULT = ADLX_RESULT(8);
    pub const ADLX_NOT_FOUND: ADLX_RESULT = ADLX_RESULT(9);
    pub const ADLX_INVALID_OBJECT: ADLX_RESULT = ADLX_RESULT(10);
    pub const ADLX_ORPHAN_OBJECTS: ADLX_RESULT = ADLX_RESULT(11);
    pub const ADLX_NOT_SUPPORTED: ADLX_RESULT = ADLX_RESULT(12);
    pub const ADLX_PENDING_OPERATION: ADLX_RESULT = ADLX_RESULT(13);
    pub const ADLX_GPU_INACTIVE: ADLX_RESULT = ADLX_RESULT(14);
    pub const ADLX_TIMEOUT_OPERATION: ADLX_RESULT = ADLX_RESULT(15);
    pub const ADLX_NOT_ALLOWED: ADLX_RESULT = ADLX_RESULT(16);
}
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct ADLX_RESULT(pub ::std::os::raw::c_int);

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ADLX_IntRange {
    pub minValue: adlx_int,
    pub maxValue: adlx_int,
    pub step: adlx_int,
}

pub type ADLXQueryFullVersion_Fn =
    ::std::option::Option<unsafe extern "C" fn(fullVersion: *mut adlx_uint64) -> ADLX_RESULT>;
pub type ADLXInitialize_Fn = ::std::option::Option<
    unsafe extern "C" fn(version: adlx_uint64, ppSystem: *mut *mut IADLXSystem) -> ADLX_RESULT,
>;
pub type ADLXTerminate_Fn = ::std::option::Option<unsafe extern "C" fn() -> ADLX_RESULT>;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLXInterface {
    pub pVtbl: *const IADLXInterfaceVtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLXInterfaceVtbl {
    pub Acquire: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXInterface) -> adlx_long>,
    pub Release: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXInterface) -> adlx_long>,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXInterface,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLXSystem {
    pub pVtbl: *const IADLXSystemVtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLXSystemVtbl {
    pub GetHybridGraphicsType: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXSystem,
            hgType: *mut ::std::os::raw::c_int,
        ) -> ADLX_RESULT,
    >,
    pub GetGPUs: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLXSystem, ppGPUs: *mut *mut IADLXGPUList) -> ADLX_RESULT,
    >,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXSystem,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub GetDisplaysServices: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXSystem,
            ppDispServices: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub GetDesktopsServices: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXSystem,
            ppDeskServices: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub GetGPUsChangedHandling: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXSystem,
            ppGPUsChangedHandling: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub EnableLog: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXSystem,
            mode: ::std::os::raw::c_int,
            severity: ::std::os::raw::c_int,
            pLogger: *mut ::std::os::raw::c_void,
            fileName: *const wchar_t,
        ) -> ADLX_RESULT,
    >,
    pub Get3DSettingsServices: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXSystem,
            pp3DSettingsServices: *mut *mut IADLX3DSettingsServices,
        ) -> ADLX_RESULT,
    >,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLXGPU {
    pub pVtbl: *const IADLXGPUVtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLXGPUVtbl {
    pub Acquire: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPU) -> adlx_long>,
    pub Release: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPU) -> adlx_long>,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXGPU,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLXGPUList {
    pub pVtbl: *const IADLXGPUListVtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLXGPUListVtbl {
    pub Acquire: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPUList) -> adlx_long>,
    pub Release: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPUList) -> adlx_long>,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXGPUList,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub Size: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPUList) -> adlx_uint>,
    pub Empty: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPUList) -> adlx_bool>,
    pub Begin: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPUList) -> adlx_uint>,
    pub End: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPUList) -> adlx_uint>,
    pub At: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXGPUList,
            location: adlx_uint,
            ppItem: *mut *mut IADLXInterface,
        ) -> ADLX_RESULT,
    >,
    pub Clear: ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPUList) -> ADLX_RESULT>,
    pub Remove_Back:
        ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLXGPUList) -> ADLX_RESULT>,
    pub Add_Back: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLXGPUList, pItem: *mut IADLXInterface) -> ADLX_RESULT,
    >,
    pub At_GPUList: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLXGPUList,
            location: adlx_uint,
            ppItem: *mut *mut IADLXGPU,
        ) -> ADLX_RESULT,
    >,
    pub Add_Back_GPUList: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLXGPUList, pItem: *mut IADLXGPU) -> ADLX_RESULT,
    >,
}

/// Per-GPU getter slot of `IADLX3DSettingsServices` whose output interface
/// isn't bound here.
pub type ADLX_GetPerGPUInterface_Fn<This> = ::std::option::Option<
    unsafe extern "system" fn(
        pThis: *mut This,
        pGPU: *mut IADLXGPU,
        ppInterface: *mut *mut ::std::os::raw::c_void,
    ) -> ADLX_RESULT,
>;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLX3DSettingsServices {
    pub pVtbl: *const IADLX3DSettingsServicesVtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLX3DSettingsServicesVtbl {
    pub Acquire: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DSettingsServices) -> adlx_long,
    >,
    pub Release: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DSettingsServices) -> adlx_long,
    >,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub GetAntiLag: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices,
            pGPU: *mut IADLXGPU,
            pp3DAntiLag: *mut *mut IADLX3DAntiLag,
        ) -> ADLX_RESULT,
    >,
    pub GetChill: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetBoost: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetImageSharpening: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetEnhancedSync: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetWaitForVerticalRefresh: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetFrameRateTargetControl: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetAntiAliasing: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetMorphologicalAntiAliasing: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetAnisotropicFiltering: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetTessellation: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub GetRadeonSuperResolution: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices,
            pp3DRadeonSuperResolution: *mut *mut IADLX3DRadeonSuperResolution,
        ) -> ADLX_RESULT,
    >,
    pub GetResetShaderCache: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices>,
    pub Get3DSettingsChangedHandling: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices,
            pp3DSettingsChangedHandling: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLX3DSettingsServices1 {
    pub pVtbl: *const IADLX3DSettingsServices1Vtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLX3DSettingsServices1Vtbl {
    pub Acquire: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DSettingsServices1) -> adlx_long,
    >,
    pub Release: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DSettingsServices1) -> adlx_long,
    >,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices1,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub GetAntiLag: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices1,
            pGPU: *mut IADLXGPU,
            pp3DAntiLag: *mut *mut IADLX3DAntiLag,
        ) -> ADLX_RESULT,
    >,
    pub GetChill: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetBoost: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetImageSharpening: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetEnhancedSync: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetWaitForVerticalRefresh: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetFrameRateTargetControl: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetAntiAliasing: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetMorphologicalAntiAliasing: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetAnisotropicFiltering: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetTessellation: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub GetRadeonSuperResolution: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices1,
            pp3DRadeonSuperResolution: *mut *mut IADLX3DRadeonSuperResolution,
        ) -> ADLX_RESULT,
    >,
    pub GetResetShaderCache: ADLX_GetPerGPUInterface_Fn<IADLX3DSettingsServices1>,
    pub Get3DSettingsChangedHandling: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices1,
            pp3DSettingsChangedHandling: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub GetAMDFluidMotionFrames: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DSettingsServices1,
            pp3DAMDFluidMotionFrames: *mut *mut IADLX3DAMDFluidMotionFrames,
        ) -> ADLX_RESULT,
    >,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLX3DRadeonSuperResolution {
    pub pVtbl: *const IADLX3DRadeonSuperResolutionVtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLX3DRadeonSuperResolutionVtbl {
    pub Acquire: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DRadeonSuperResolution) -> adlx_long,
    >,
    pub Release: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DRadeonSuperResolution) -> adlx_long,
    >,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DRadeonSuperResolution,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub IsSupported: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DRadeonSuperResolution,
            supported: *mut adlx_bool,
        ) -> ADLX_RESULT,
    >,
    pub IsEnabled: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DRadeonSuperResolution,
            isEnabled: *mut adlx_bool,
        ) -> ADLX_RESULT,
    >,
    pub GetSharpnessRange: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DRadeonSuperResolution,
            range: *mut ADLX_IntRange,
        ) -> ADLX_RESULT,
    >,
    pub GetSharpness: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DRadeonSuperResolution,
            currentSharpness: *mut adlx_int,
        ) -> ADLX_RESULT,
    >,
    pub SetEnabled: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DRadeonSuperResolution,
            enable: adlx_bool,
        ) -> ADLX_RESULT,
    >,
    pub SetSharpness: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DRadeonSuperResolution,
            sharpness: adlx_int,
        ) -> ADLX_RESULT,
    >,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLX3DAMDFluidMotionFrames {
    pub pVtbl: *const IADLX3DAMDFluidMotionFramesVtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLX3DAMDFluidMotionFramesVtbl {
    pub Acquire: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DAMDFluidMotionFrames) -> adlx_long,
    >,
    pub Release: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DAMDFluidMotionFrames) -> adlx_long,
    >,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DAMDFluidMotionFrames,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub IsSupported: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DAMDFluidMotionFrames,
            supported: *mut adlx_bool,
        ) -> ADLX_RESULT,
    >,
    pub IsEnabled: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DAMDFluidMotionFrames,
            isEnabled: *mut adlx_bool,
        ) -> ADLX_RESULT,
    >,
    pub SetEnabled: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DAMDFluidMotionFrames,
            enable: adlx_bool,
        ) -> ADLX_RESULT,
    >,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IADLX3DAntiLag {
    pub pVtbl: *const IADLX3DAntiLagVtbl,
}
#[repr(C)]
#[derive(Copy, Clone)]
pub struct IADLX3DAntiLagVtbl {
    pub Acquire:
        ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLX3DAntiLag) -> adlx_long>,
    pub Release:
        ::std::option::Option<unsafe extern "system" fn(pThis: *mut IADLX3DAntiLag) -> adlx_long>,
    pub QueryInterface: ::std::option::Option<
        unsafe extern "system" fn(
            pThis: *mut IADLX3DAntiLag,
            interfaceId: *const wchar_t,
            ppInterface: *mut *mut ::std::os::raw::c_void,
        ) -> ADLX_RESULT,
    >,
    pub IsSupported: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DAntiLag, supported: *mut adlx_bool) -> ADLX_RESULT,
    >,
    pub IsEnabled: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DAntiLag, isEnabled: *mut adlx_bool) -> ADLX_RESULT,
    >,
    pub SetEnabled: ::std::option::Option<
        unsafe extern "system" fn(pThis: *mut IADLX3DAntiLag, enable: adlx_bool) -> ADLX_RESULT,
    >,
}
