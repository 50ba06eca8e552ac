//! Color conversions.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::ffi::{Color, Vector3};
use crate::marshal::PackedColor;

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("colorToInt", "ColorToInt"),
    ("colorNormalize", "ColorNormalize"),
    ("colorToHSV", "ColorToHSV"),
    ("colorFromHSV", "ColorFromHSV"),
    ("getColor", "GetColor"),
    ("fade", "Fade"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "colorToInt",
        lua.create_function(move |_, color: Color| Ok(unsafe { (a.color_to_int)(color) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "colorNormalize",
        lua.create_function(move |_, color: Color| Ok(unsafe { (a.color_normalize)(color) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "colorToHSV",
        lua.create_function(move |_, color: Color| Ok(unsafe { (a.color_to_hsv)(color) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "colorFromHSV",
        lua.create_function(move |_, hsv: Vector3| Ok(unsafe { (a.color_from_hsv)(hsv) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getColor",
        lua.create_function(move |_, hex: PackedColor| Ok(unsafe { (a.get_color)(hex.0) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "fade",
        lua.create_function(move |_, (color, alpha): (Color, f32)| {
            Ok(unsafe { (a.fade)(color, alpha) })
        })?,
    )?;

    Ok(())
}
