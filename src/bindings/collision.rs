//! 2D collision queries.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::ffi::{Rectangle, Vector2};

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("checkCollisionRecs", "CheckCollisionRecs"),
    ("checkCollisionCircles", "CheckCollisionCircles"),
    ("checkCollisionCircleRec", "CheckCollisionCircleRec"),
    ("getCollisionRec", "GetCollisionRec"),
    ("checkCollisionPointRec", "CheckCollisionPointRec"),
    ("checkCollisionPointCircle", "CheckCollisionPointCircle"),
    ("checkCollisionPointTriangle", "CheckCollisionPointTriangle"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "checkCollisionRecs",
        lua.create_function(move |_, (rec1, rec2): (Rectangle, Rectangle)| {
            Ok(unsafe { (a.check_collision_recs)(rec1, rec2) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "checkCollisionCircles",
        lua.create_function(
            move |_, (center1, radius1, center2, radius2): (Vector2, f32, Vector2, f32)| {
                Ok(unsafe { (a.check_collision_circles)(center1, radius1, center2, radius2) })
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "checkCollisionCircleRec",
        lua.create_function(move |_, (center, radius, rec): (Vector2, f32, Rectangle)| {
            Ok(unsafe { (a.check_collision_circle_rec)(center, radius, rec) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getCollisionRec",
        lua.create_function(move |_, (rec1, rec2): (Rectangle, Rectangle)| {
            Ok(unsafe { (a.get_collision_rec)(rec1, rec2) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "checkCollisionPointRec",
        lua.create_function(move |_, (point, rec): (Vector2, Rectangle)| {
            Ok(unsafe { (a.check_collision_point_rec)(point, rec) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "checkCollisionPointCircle",
        lua.create_function(move |_, (point, center, radius): (Vector2, Vector2, f32)| {
            Ok(unsafe { (a.check_collision_point_circle)(point, center, radius) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "checkCollisionPointTriangle",
        lua.create_function(
            move |_, (point, p1, p2, p3): (Vector2, Vector2, Vector2, Vector2)| {
                Ok(unsafe { (a.check_collision_point_triangle)(point, p1, p2, p3) })
            },
        )?,
    )?;

    Ok(())
}
