//! Hand-built ADLX objects for driving the handle layer without a driver.
//!
//! Every object counts its outstanding references. A getter hands out one
//! reference, `Acquire` adds one and `Release` drops one, so a balanced test
//! ends with every count back at zero.

use std::{
    ffi::c_void,
    ptr,
    sync::atomic::{AtomicBool, AtomicI32, Ordering},
};

use adlx_sys::{
    adlx_bool, adlx_int, adlx_long, adlx_uint, IADLX3DAMDFluidMotionFrames,
    IADLX3DAMDFluidMotionFramesVtbl, IADLX3DAntiLag, IADLX3DAntiLagVtbl,
    IADLX3DRadeonSuperResolution, IADLX3DRadeonSuperResolutionVtbl, IADLX3DSettingsServices,
    IADLX3DSettingsServices1, IADLX3DSettingsServices1Vtbl, IADLX3DSettingsServicesVtbl,
    IADLXGPU, IADLXGPUList, IADLXGPUListVtbl, IADLXGPUVtbl, ADLX_RESULT,
    IID_IADLX3DSettingsServices1,
};
use libc::wchar_t;

use crate::{
    gpu::{Gpu, GpuList},
    handle::Handle,
};

/// An ADLX object: the vtable pointer every interface starts with, followed
/// by the reference count and whatever the object needs to answer calls.
#[repr(C)]
pub struct Object<E = ()> {
    vtbl: *const c_void,
    refs: AtomicI32,
    pub extra: E,
}

impl<E> Object<E> {
    fn new<V>(vtbl: &'static V, extra: E) -> Box<Self> {
        Box::new(Self {
            vtbl: (vtbl as *const V).cast(),
            refs: AtomicI32::new(0),
            extra,
        })
    }

    /// The references currently held by the code under test.
    pub fn refs(&self) -> i32 {
        self.refs.load(Ordering::SeqCst)
    }

    /// Hands out a new reference, as an ADLX getter does.
    pub fn hand_out<T>(&self) -> *mut T {
        self.refs.fetch_add(1, Ordering::SeqCst);
        (self as *const Self).cast_mut().cast()
    }
}

/// The state behind a feature interface.
#[derive(Debug, Default)]
pub struct Toggle {
    pub enabled: AtomicBool,
    pub sharpness: AtomicI32,
}

#[derive(Clone, Copy)]
pub struct GpuSlots {
    gpu: *const Object,
    len: adlx_uint,
}

#[derive(Clone, Copy)]
pub struct Links {
    gpu: *const Object,
    rsr: *const Object<Toggle>,
    afmf: *const Object<Toggle>,
    anti_lag: *const Object<Toggle>,
    extension: *const Object<Links>,
}

unsafe fn object<'a, E, T>(this: *mut T) -> &'a Object<E> {
    &*this.cast::<Object<E>>()
}

unsafe extern "system" fn acquire<T>(this: *mut T) -> adlx_long {
    (object::<(), T>(this).refs.fetch_add(1, Ordering::SeqCst) + 1) as adlx_long
}

unsafe extern "system" fn release<T>(this: *mut T) -> adlx_long {
    (object::<(), T>(this).refs.fetch_sub(1, Ordering::SeqCst) - 1) as adlx_long
}

unsafe extern "system" fn is_enabled<T>(this: *mut T, enabled: *mut adlx_bool) -> ADLX_RESULT {
    *enabled = object::<Toggle, T>(this).extra.enabled.load(Ordering::SeqCst);
    ADLX_RESULT::ADLX_OK
}

unsafe extern "system" fn set_enabled<T>(this: *mut T, enabled: adlx_bool) -> ADLX_RESULT {
    object::<Toggle, T>(this)
        .extra
        .enabled
        .store(enabled, Ordering::SeqCst);
    ADLX_RESULT::ADLX_OK
}

unsafe extern "system" fn sharpness(
    this: *mut IADLX3DRadeonSuperResolution,
    sharpness: *mut adlx_int,
) -> ADLX_RESULT {
    *sharpness = object::<Toggle, _>(this).extra.sharpness.load(Ordering::SeqCst);
    ADLX_RESULT::ADLX_OK
}

unsafe extern "system" fn set_sharpness(
    this: *mut IADLX3DRadeonSuperResolution,
    sharpness: adlx_int,
) -> ADLX_RESULT {
    object::<Toggle, _>(this)
        .extra
        .sharpness
        .store(sharpness, Ordering::SeqCst);
    ADLX_RESULT::ADLX_OK
}

unsafe extern "system" fn gpu_list_size(this: *mut IADLXGPUList) -> adlx_uint {
    object::<GpuSlots, _>(this).extra.len
}

unsafe extern "system" fn gpu_list_empty(this: *mut IADLXGPUList) -> adlx_bool {
    object::<GpuSlots, _>(this).extra.len == 0
}

unsafe extern "system" fn gpu_list_at(
    this: *mut IADLXGPUList,
    location: adlx_uint,
    gpu: *mut *mut IADLXGPU,
) -> ADLX_RESULT {
    let slots = object::<GpuSlots, _>(this).extra;
    if location >= slots.len {
        *gpu = ptr::null_mut();
        return ADLX_RESULT::ADLX_INVALID_ARGS;
    }
    *gpu = (*slots.gpu).hand_out();
    ADLX_RESULT::ADLX_OK
}

unsafe extern "system" fn services_anti_lag<T>(
    this: *mut T,
    gpu: *mut IADLXGPU,
    anti_lag: *mut *mut IADLX3DAntiLag,
) -> ADLX_RESULT {
    let links = object::<Links, T>(this).extra;
    if gpu.cast_const().cast::<Object>() != links.gpu {
        *anti_lag = ptr::null_mut();
        return ADLX_RESULT::ADLX_INVALID_ARGS;
    }
    *anti_lag = (*links.anti_lag).hand_out();
    ADLX_RESULT::ADLX_OK
}

unsafe extern "system" fn services_rsr<T>(
    this: *mut T,
    rsr: *mut *mut IADLX3DRadeonSuperResolution,
) -> ADLX_RESULT {
    *rsr = (*object::<Links, T>(this).extra.rsr).hand_out();
    ADLX_RESULT::ADLX_OK
}

unsafe extern "system" fn services_afmf(
    this: *mut IADLX3DSettingsServices1,
    afmf: *mut *mut IADLX3DAMDFluidMotionFrames,
) -> ADLX_RESULT {
    *afmf = (*object::<Links, _>(this).extra.afmf).hand_out();
    ADLX_RESULT::ADLX_OK
}

/// Hands out the extension interface when one is linked, and a null pointer
/// with `ADLX_OK` otherwise, the way older drivers answer.
unsafe extern "system" fn services_query_interface(
    this: *mut IADLX3DSettingsServices,
    interface_id: *const wchar_t,
    interface: *mut *mut c_void,
) -> ADLX_RESULT {
    let id = widestring::WideCStr::from_ptr_str(interface_id.cast()).to_string_lossy();
    if id != IID_IADLX3DSettingsServices1 {
        *interface = ptr::null_mut();
        return ADLX_RESULT::ADLX_UNKNOWN_INTERFACE;
    }
    *interface = match object::<Links, _>(this).extra.extension.as_ref() {
        Some(extension) => extension.hand_out(),
        None => ptr::null_mut(),
    };
    ADLX_RESULT::ADLX_OK
}

static GPU_VTBL: IADLXGPUVtbl = IADLXGPUVtbl {
    Acquire: Some(acquire::<IADLXGPU>),
    Release: Some(release::<IADLXGPU>),
    QueryInterface: None,
};

static GPU_LIST_VTBL: IADLXGPUListVtbl = IADLXGPUListVtbl {
    Acquire: Some(acquire::<IADLXGPUList>),
    Release: Some(release::<IADLXGPUList>),
    Size: Some(gpu_list_size),
    Empty: Some(gpu_list_empty),
    At_GPUList: Some(gpu_list_at),
    ..unsafe { std::mem::zeroed() }
};

static SERVICES_VTBL: IADLX3DSettingsServicesVtbl = IADLX3DSettingsServicesVtbl {
    Acquire: Some(acquire::<IADLX3DSettingsServices>),
    Release: Some(release::<IADLX3DSettingsServices>),
    QueryInterface: Some(services_query_interface),
    GetAntiLag: Some(services_anti_lag::<IADLX3DSettingsServices>),
    GetRadeonSuperResolution: Some(services_rsr::<IADLX3DSettingsServices>),
    ..unsafe { std::mem::zeroed() }
};

static SERVICES1_VTBL: IADLX3DSettingsServices1Vtbl = IADLX3DSettingsServices1Vtbl {
    Acquire: Some(acquire::<IADLX3DSettingsServices1>),
    Release: Some(release::<IADLX3DSettingsServices1>),
    GetAntiLag: Some(services_anti_lag::<IADLX3DSettingsServices1>),
    GetRadeonSuperResolution: Some(services_rsr::<IADLX3DSettingsServices1>),
    GetAMDFluidMotionFrames: Some(services_afmf),
    ..unsafe { std::mem::zeroed() }
};

static RSR_VTBL: IADLX3DRadeonSuperResolutionVtbl = IADLX3DRadeonSuperResolutionVtbl {
    Acquire: Some(acquire::<IADLX3DRadeonSuperResolution>),
    Release: Some(release::<IADLX3DRadeonSuperResolution>),
    IsEnabled: Some(is_enabled::<IADLX3DRadeonSuperResolution>),
    SetEnabled: Some(set_enabled::<IADLX3DRadeonSuperResolution>),
    GetSharpness: Some(sharpness),
    SetSharpness: Some(set_sharpness),
    ..unsafe { std::mem::zeroed() }
};

static AFMF_VTBL: IADLX3DAMDFluidMotionFramesVtbl = IADLX3DAMDFluidMotionFramesVtbl {
    Acquire: Some(acquire::<IADLX3DAMDFluidMotionFrames>),
    Release: Some(release::<IADLX3DAMDFluidMotionFrames>),
    IsEnabled: Some(is_enabled::<IADLX3DAMDFluidMotionFrames>),
    SetEnabled: Some(set_enabled::<IADLX3DAMDFluidMotionFrames>),
    ..unsafe { std::mem::zeroed() }
};

static ANTI_LAG_VTBL: IADLX3DAntiLagVtbl = IADLX3DAntiLagVtbl {
    Acquire: Some(acquire::<IADLX3DAntiLag>),
    Release: Some(release::<IADLX3DAntiLag>),
    IsEnabled: Some(is_enabled::<IADLX3DAntiLag>),
    SetEnabled: Some(set_enabled::<IADLX3DAntiLag>),
    ..unsafe { std::mem::zeroed() }
};

/// One adapter's worth of ADLX objects.
pub struct FakeAdlx {
    pub gpu: Box<Object>,
    pub gpus: Box<Object<GpuSlots>>,
    pub services: Box<Object<Links>>,
    pub extension: Box<Object<Links>>,
    pub rsr: Box<Object<Toggle>>,
    pub afmf: Box<Object<Toggle>>,
    pub anti_lag: Box<Object<Toggle>>,
}

impl FakeAdlx {
    /// A GPU list reporting `gpu_count` entries, all backed by the same GPU,
    /// and settings services that implement the extension interface.
    pub fn new(gpu_count: adlx_uint) -> Self {
        let gpu = Object::new(&GPU_VTBL, ());
        let rsr = Object::new(&RSR_VTBL, Toggle::default());
        let afmf = Object::new(&AFMF_VTBL, Toggle::default());
        let anti_lag = Object::new(&ANTI_LAG_VTBL, Toggle::default());

        let links = Links {
            gpu: &*gpu,
            rsr: &*rsr,
            afmf: &*afmf,
            anti_lag: &*anti_lag,
            extension: ptr::null(),
        };
        let extension = Object::new(&SERVICES1_VTBL, links);
        let services = Object::new(
            &SERVICES_VTBL,
            Links {
                extension: &*extension,
                ..links
            },
        );
        let gpus = Object::new(
            &GPU_LIST_VTBL,
            GpuSlots {
                gpu: &*gpu,
                len: gpu_count,
            },
        );

        Self {
            gpu,
            gpus,
            services,
            extension,
            rsr,
            afmf,
            anti_lag,
        }
    }

    /// Settings services of a driver that predates the extension interface.
    pub fn without_extension(mut self) -> Self {
        self.services.extra.extension = ptr::null();
        self
    }

    pub fn gpu(&self) -> Gpu {
        unsafe { Handle::from_raw(self.gpu.hand_out()) }.expect("the fake GPU is never null")
    }

    pub fn gpu_list(&self) -> GpuList {
        unsafe { Handle::from_raw(self.gpus.hand_out()) }.expect("the fake list is never null")
    }

    pub fn services(&self) -> Handle<IADLX3DSettingsServices> {
        unsafe { Handle::from_raw(self.services.hand_out()) }
            .expect("the fake services are never null")
    }

    pub fn refs(&self) -> [(&'static str, i32); 7] {
        [
            ("GPU", self.gpu.refs()),
            ("GPU list", self.gpus.refs()),
            ("settings services", self.services.refs()),
            ("settings services extension", self.extension.refs()),
            ("Radeon Super Resolution", self.rsr.refs()),
            ("AMD Fluid Motion Frames", self.afmf.refs()),
            ("Anti-Lag", self.anti_lag.refs()),
        ]
    }

    /// Asserts that every reference handed out so far was released.
    pub fn assert_released(&self) {
        for (name, refs) in self.refs() {
            assert_eq!(refs, 0, "{name} references leaked");
        }
    }
}
