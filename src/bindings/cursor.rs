//! Cursor visibility and capture.
//!
//! `enableHidden`/`disableHidden` are the published export names for
//! `EnableCursor`/`DisableCursor`; existing scripts call them, so the
//! names stay.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("showCursor", "ShowCursor"),
    ("hideCursor", "HideCursor"),
    ("isCursorHidden", "IsCursorHidden"),
    ("enableHidden", "EnableCursor"),
    ("disableHidden", "DisableCursor"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "showCursor",
        lua.create_function(move |_, ()| {
            unsafe { (a.show_cursor)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "hideCursor",
        lua.create_function(move |_, ()| {
            unsafe { (a.hide_cursor)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isCursorHidden",
        lua.create_function(move |_, ()| Ok(unsafe { (a.is_cursor_hidden)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "enableHidden",
        lua.create_function(move |_, ()| {
            unsafe { (a.enable_cursor)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "disableHidden",
        lua.create_function(move |_, ()| {
            unsafe { (a.disable_cursor)() };
            Ok(())
        })?,
    )?;

    Ok(())
}
