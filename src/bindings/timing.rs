//! Frame timing.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("setTargetFps", "SetTargetFPS"),
    ("getFps", "GetFPS"),
    ("getFrameTime", "GetFrameTime"),
    ("getTime", "GetTime"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "setTargetFps",
        lua.create_function(move |_, fps: i32| {
            unsafe { (a.set_target_fps)(fps) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getFps",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_fps)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getFrameTime",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_frame_time)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getTime",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_time)() }))?,
    )?;

    Ok(())
}
