//! Odds and ends: config flags, trace log control, screenshots, RNG.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::marshal::cstring;

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("setConfigFlags", "SetConfigFlags"),
    ("setTraceLogLevel", "SetTraceLogLevel"),
    ("setTraceLogExit", "SetTraceLogExit"),
    ("takeScreenshot", "TakeScreenshot"),
    ("getRandomValue", "GetRandomValue"),
    ("openURL", "OpenURL"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "setConfigFlags",
        lua.create_function(move |_, flags: u8| {
            unsafe { (a.set_config_flags)(flags) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setTraceLogLevel",
        lua.create_function(move |_, level: i32| {
            unsafe { (a.set_trace_log_level)(level) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setTraceLogExit",
        lua.create_function(move |_, level: i32| {
            unsafe { (a.set_trace_log_exit)(level) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "takeScreenshot",
        lua.create_function(move |_, file_name: String| {
            let file_name = cstring(&file_name)?;
            unsafe { (a.take_screenshot)(file_name.as_ptr()) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getRandomValue",
        lua.create_function(move |_, (min, max): (i32, i32)| {
            Ok(unsafe { (a.get_random_value)(min, max) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "openURL",
        lua.create_function(move |_, url: String| {
            let url = cstring(&url)?;
            unsafe { (a.open_url)(url.as_ptr()) };
            Ok(())
        })?,
    )?;

    Ok(())
}
