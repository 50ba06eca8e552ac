//! Built-in camera controller.
//!
//! `UpdateCamera` mutates through a pointer on the native side; the export
//! takes the camera by value and returns the updated copy, since Lua
//! tables crossing the boundary are copies anyway.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::ffi::Camera3D;

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("setCameraMode", "SetCameraMode"),
    ("updateCamera", "UpdateCamera"),
    ("setCameraPanControl", "SetCameraPanControl"),
    ("setCameraAltControl", "SetCameraAltControl"),
    ("setCameraSmoothZoomControl", "SetCameraSmoothZoomControl"),
    ("setCameraMoveControls", "SetCameraMoveControls"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "setCameraMode",
        lua.create_function(move |_, (camera, mode): (Camera3D, i32)| {
            unsafe { (a.set_camera_mode)(camera, mode) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "updateCamera",
        lua.create_function(move |_, camera: Camera3D| {
            let mut camera = camera;
            unsafe { (a.update_camera)(&mut camera) };
            Ok(camera)
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setCameraPanControl",
        lua.create_function(move |_, key: i32| {
            unsafe { (a.set_camera_pan_control)(key) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setCameraAltControl",
        lua.create_function(move |_, key: i32| {
            unsafe { (a.set_camera_alt_control)(key) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setCameraSmoothZoomControl",
        lua.create_function(move |_, key: i32| {
            unsafe { (a.set_camera_smooth_zoom_control)(key) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setCameraMoveControls",
        lua.create_function(
            move |_, (front, back, right, left, up, down): (i32, i32, i32, i32, i32, i32)| {
                unsafe { (a.set_camera_move_controls)(front, back, right, left, up, down) };
                Ok(())
            },
        )?,
    )?;

    Ok(())
}
