//! Lua bindings for the raylib graphics library.
//!
//! The crate is a thin forwarding layer: every exported Lua function maps
//! 1:1 to a native raylib entry point resolved by symbol name when the
//! shared library is opened.  Struct values (`Vector2`, `Color`,
//! `Rectangle`, ...) are copied field-by-field across the boundary; opaque
//! handles (images, textures, fonts) cross unmodified and stay owned by the
//! native library.  Nothing here validates call ordering or manages
//! resources; that is raylib's job.

pub mod bindings;
pub mod enums;
pub mod error;
pub mod ffi;
pub mod host;
pub mod marshal;

pub use error::BindError;
pub use ffi::api::RaylibApi;
pub use host::{HostConfig, ScriptHost};
