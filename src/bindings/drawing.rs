//! Frame and mode scoping calls.

use std::sync::Arc;

use mlua::{FromLua, Lua, Result as LuaResult, Table, Value};

use crate::ffi::api::RaylibApi;
use crate::ffi::{Camera2D, Camera3D, Color};
use crate::marshal::{LuaRenderTexture, PackedColor};

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("clearBackground", "ClearBackground"),
    ("beginDrawing", "BeginDrawing"),
    ("endDrawing", "EndDrawing"),
    ("beginMode2D", "BeginMode2D"),
    ("endMode2D", "EndMode2D"),
    ("beginMode3D", "BeginMode3D"),
    ("endMode3D", "EndMode3D"),
    ("beginTextureMode", "BeginTextureMode"),
    ("endTextureMode", "EndTextureMode"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    // Accepts either a 0xRRGGBBAA integer or a color table.
    let a = Arc::clone(api);
    rl.set(
        "clearBackground",
        lua.create_function(move |lua, value: Value| {
            let color = if matches!(value, Value::Integer(_) | Value::Number(_)) {
                let hex = PackedColor::from_lua(value, lua)?;
                unsafe { (a.get_color)(hex.0) }
            } else {
                Color::from_lua(value, lua)?
            };
            unsafe { (a.clear_background)(color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "beginDrawing",
        lua.create_function(move |_, ()| {
            unsafe { (a.begin_drawing)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "endDrawing",
        lua.create_function(move |_, ()| {
            unsafe { (a.end_drawing)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "beginMode2D",
        lua.create_function(move |_, camera: Camera2D| {
            unsafe { (a.begin_mode_2d)(camera) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "endMode2D",
        lua.create_function(move |_, ()| {
            unsafe { (a.end_mode_2d)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "beginMode3D",
        lua.create_function(move |_, camera: Camera3D| {
            unsafe { (a.begin_mode_3d)(camera) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "endMode3D",
        lua.create_function(move |_, ()| {
            unsafe { (a.end_mode_3d)() };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "beginTextureMode",
        lua.create_function(move |_, target: LuaRenderTexture| {
            unsafe { (a.begin_texture_mode)(target.0) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "endTextureMode",
        lua.create_function(move |_, ()| {
            unsafe { (a.end_texture_mode)() };
            Ok(())
        })?,
    )?;

    Ok(())
}
