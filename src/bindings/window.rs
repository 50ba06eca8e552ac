//! Window management: lifecycle, geometry, monitors, clipboard.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::marshal::{cstring, string_from_native, LuaImage};

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("initWindow", "InitWindow"),
    ("windowShouldClose", "WindowShouldClose"),
    ("closeWindow", "CloseWindow"),
    ("isWindowReady", "IsWindowReady"),
    ("isWindowMinimized", "IsWindowMinimized"),
    ("isWindowResized", "IsWindowResized"),
    ("isWindowHidden", "IsWindowHidden"),
    ("toggleFullscreen", "ToggleFullscreen"),
    ("unhideWindow", "UnhideWindow"),
    ("hideWindow", "HideWindow"),
    ("setWindowIcon", "SetWindowIcon"),
    ("setWindowTitle", "SetWindowTitle"),
    ("setWindowPosition", "SetWindowPosition"),
    ("setWindowMonitor", "SetWindowMonitor"),
    ("setWindowMinSize", "SetWindowMinSize"),
    ("setWindowSize", "SetWindowSize"),
    ("getScreenWidth", "GetScreenWidth"),
    ("getScreenHeight", "GetScreenHeight"),
    ("getMonitorCount", "GetMonitorCount"),
    ("getMonitorWidth", "GetMonitorWidth"),
    ("getMonitorHeight", "GetMonitorHeight"),
    ("getMonitorPhysicalWidth", "GetMonitorPhysicalWidth"),
    ("getMonitorPhysicalHeight", "GetMonitorPhysicalHeight"),
    ("getMonitorName", "GetMonitorName"),
    ("getClipboardText", "GetClipboardText"),
    ("setClipboardText", "SetClipboardText"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "initWindow",
        lua.create_function(move |_, (width, height, title): (i32, i32, String)| {
            let title = cstring(&title)?;
            unsafe { (a.init_window)(width, height, title.as_ptr()) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "windowShouldClose",
        lua.create_function(move |_, ()| Ok(unsafe { (a.window_should_close)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "closeWindow",
        lua.create_function(move |_, ()| {
            unsafe { (a.close_window)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isWindowReady",
        lua.create_function(move |_, ()| Ok(unsafe { (a.is_window_ready)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isWindowMinimized",
        lua.create_function(move |_, ()| Ok(unsafe { (a.is_window_minimized)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isWindowResized",
        lua.create_function(move |_, ()| Ok(unsafe { (a.is_window_resized)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isWindowHidden",
        lua.create_function(move |_, ()| Ok(unsafe { (a.is_window_hidden)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "toggleFullscreen",
        lua.create_function(move |_, ()| {
            unsafe { (a.toggle_fullscreen)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "unhideWindow",
        lua.create_function(move |_, ()| {
            unsafe { (a.unhide_window)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "hideWindow",
        lua.create_function(move |_, ()| {
            unsafe { (a.hide_window)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setWindowIcon",
        lua.create_function(move |_, image: LuaImage| {
            unsafe { (a.set_window_icon)(image.0) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setWindowTitle",
        lua.create_function(move |_, title: String| {
            let title = cstring(&title)?;
            unsafe { (a.set_window_title)(title.as_ptr()) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setWindowPosition",
        lua.create_function(move |_, (x, y): (i32, i32)| {
            unsafe { (a.set_window_position)(x, y) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setWindowMonitor",
        lua.create_function(move |_, monitor: i32| {
            unsafe { (a.set_window_monitor)(monitor) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setWindowMinSize",
        lua.create_function(move |_, (width, height): (i32, i32)| {
            unsafe { (a.set_window_min_size)(width, height) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setWindowSize",
        lua.create_function(move |_, (width, height): (i32, i32)| {
            unsafe { (a.set_window_size)(width, height) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getScreenWidth",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_screen_width)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getScreenHeight",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_screen_height)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMonitorCount",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_monitor_count)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMonitorWidth",
        lua.create_function(move |_, monitor: i32| Ok(unsafe { (a.get_monitor_width)(monitor) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMonitorHeight",
        lua.create_function(move |_, monitor: i32| {
            Ok(unsafe { (a.get_monitor_height)(monitor) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMonitorPhysicalWidth",
        lua.create_function(move |_, monitor: i32| {
            Ok(unsafe { (a.get_monitor_physical_width)(monitor) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMonitorPhysicalHeight",
        lua.create_function(move |_, monitor: i32| {
            Ok(unsafe { (a.get_monitor_physical_height)(monitor) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMonitorName",
        lua.create_function(move |_, monitor: i32| {
            Ok(unsafe { string_from_native((a.get_monitor_name)(monitor)) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getClipboardText",
        lua.create_function(move |_, ()| {
            Ok(unsafe { string_from_native((a.get_clipboard_text)()) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setClipboardText",
        lua.create_function(move |_, text: String| {
            let text = cstring(&text)?;
            unsafe { (a.set_clipboard_text)(text.as_ptr()) };
            Ok(())
        })?,
    )?;

    Ok(())
}
