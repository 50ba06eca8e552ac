//! Screen-space conversions against a 3D camera.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::ffi::{Camera3D, Vector2, Vector3};

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("getMouseRay", "GetMouseRay"),
    ("getWorldToScreen", "GetWorldToScreen"),
    ("getCameraMatrix", "GetCameraMatrix"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "getMouseRay",
        lua.create_function(move |_, (mouse, camera): (Vector2, Camera3D)| {
            Ok(unsafe { (a.get_mouse_ray)(mouse, camera) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getWorldToScreen",
        lua.create_function(move |_, (position, camera): (Vector3, Camera3D)| {
            Ok(unsafe { (a.get_world_to_screen)(position, camera) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getCameraMatrix",
        lua.create_function(move |_, camera: Camera3D| {
            Ok(unsafe { (a.get_camera_matrix)(camera) })
        })?,
    )?;

    Ok(())
}
