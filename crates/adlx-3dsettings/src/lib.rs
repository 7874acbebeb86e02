//! Toggles Radeon Super Resolution, AMD Fluid Motion Frames and Anti-Lag
//! through AMD's ADLX runtime.
//!
//! The crate builds as a `cdylib` exporting eleven flat C functions (see
//! [`ffi`]) and as an `rlib` exposing the [`Gateway`] they are built on.
//! ADLX is loaded at runtime from the AMD driver installation, so nothing
//! needs to be linked at build time.

pub use adlx_sys;

pub mod adlx;
pub mod backend;
pub mod error;
pub mod ffi;
pub mod gateway;
pub mod gpu;
pub mod handle;
pub mod settings;
pub mod system;

#[cfg(test)]
mod fake_adlx;

pub use adlx::Adlx;
pub use backend::{Backend, FeatureControl, FeatureKind};
pub use error::FeatureError;
pub use gateway::{Gateway, SHARPNESS_RANGE};
pub use system::System;
