fn main() {
    // The ADLX runtime is loaded at run time (see `loader.rs`), so there is
    // nothing to link against.
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "generate-bindings")]
    generate_bindings();
}

#[cfg(feature = "generate-bindings")]
fn generate_bindings() {
    use std::{env, path::PathBuf};

    const HEADER_FILE_PATH: &str = "src/bindings.h";
    const DEFAULT_SDK_PATH: &str = "ADLX/SDK";

    println!("cargo:rerun-if-changed={HEADER_FILE_PATH}");
    println!("cargo:rerun-if-env-changed=ADLX_SDK_PATH");

    let sdk_path = env::var("ADLX_SDK_PATH").unwrap_or_else(|_| DEFAULT_SDK_PATH.to_owned());
    let include_path = PathBuf::from(sdk_path)
        .join("Include")
        .canonicalize()
        .expect("cannot canonicalize the ADLX include path");

    let msrv = bindgen::RustTarget::stable(70, 0).unwrap();

    let bindings = bindgen::Builder::default()
        .rust_target(msrv)
        .header(HEADER_FILE_PATH)
        .clang_arg(format!("-I{}", include_path.display()))
        // The C flavour of the headers exposes `{ pVtbl }` structs.
        .clang_arg("-xc")
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .allowlist_type("IADLXInterface")
        .allowlist_type("IADLXSystem")
        .allowlist_type("IADLXGPU")
        .allowlist_type("IADLXGPUList")
        .allowlist_type("IADLX3DSettingsServices1?")
        .allowlist_type("IADLX3DRadeonSuperResolution")
        .allowlist_type("IADLX3DAMDFluidMotionFrames")
        .allowlist_type("IADLX3DAntiLag")
        .allowlist_type("ADLX_\\w+_Fn")
        .allowlist_var("ADLX_(VER|FULL)_\\w+")
        // Platform-specific type provided by libc
        .blocklist_type("wchar_t")
        .newtype_enum("ADLX_RESULT")
        .impl_debug(true)
        .derive_default(true)
        .prepend_enum_name(false)
        .disable_name_namespacing()
        .generate()
        .expect("Unable to generate bindings");

    let out_path = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap()).join("src");
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");
}
