//! 3D geometry drawing.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::ffi::{Color, Ray, Vector2, Vector3};
use crate::marshal::LuaTexture;

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("drawLine3d", "DrawLine3D"),
    ("drawPoint3d", "DrawPoint3D"),
    ("drawCircle3d", "DrawCircle3D"),
    ("drawCube", "DrawCube"),
    ("drawCubeV", "DrawCubeV"),
    ("drawCubeWires", "DrawCubeWires"),
    ("drawCubeWiresV", "DrawCubeWiresV"),
    ("drawCubeTexture", "DrawCubeTexture"),
    ("drawSphere", "DrawSphere"),
    ("drawSphereEx", "DrawSphereEx"),
    ("drawSphereWires", "DrawSphereWires"),
    ("drawCylinder", "DrawCylinder"),
    ("drawCylinderWires", "DrawCylinderWires"),
    ("drawPlane", "DrawPlane"),
    ("drawRay", "DrawRay"),
    ("drawGrid", "DrawGrid"),
    ("drawGizmo", "DrawGizmo"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "drawLine3d",
        lua.create_function(move |_, (start, end, color): (Vector3, Vector3, Color)| {
            unsafe { (a.draw_line_3d)(start, end, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawPoint3d",
        lua.create_function(move |_, (position, color): (Vector3, Color)| {
            unsafe { (a.draw_point_3d)(position, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCircle3d",
        lua.create_function(
            move |_,
                  (center, radius, rotation_axis, rotation_angle, color): (
                Vector3,
                f32,
                Vector3,
                f32,
                Color,
            )| {
                unsafe { (a.draw_circle_3d)(center, radius, rotation_axis, rotation_angle, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCube",
        lua.create_function(
            move |_, (position, width, height, length, color): (Vector3, f32, f32, f32, Color)| {
                unsafe { (a.draw_cube)(position, width, height, length, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCubeV",
        lua.create_function(move |_, (position, size, color): (Vector3, Vector3, Color)| {
            unsafe { (a.draw_cube_v)(position, size, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCubeWires",
        lua.create_function(
            move |_, (position, width, height, length, color): (Vector3, f32, f32, f32, Color)| {
                unsafe { (a.draw_cube_wires)(position, width, height, length, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCubeWiresV",
        lua.create_function(move |_, (position, size, color): (Vector3, Vector3, Color)| {
            unsafe { (a.draw_cube_wires_v)(position, size, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCubeTexture",
        lua.create_function(
            move |_,
                  (texture, position, width, height, length, color): (
                LuaTexture,
                Vector3,
                f32,
                f32,
                f32,
                Color,
            )| {
                unsafe { (a.draw_cube_texture)(texture.0, position, width, height, length, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawSphere",
        lua.create_function(move |_, (center, radius, color): (Vector3, f32, Color)| {
            unsafe { (a.draw_sphere)(center, radius, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawSphereEx",
        lua.create_function(
            move |_, (center, radius, rings, slices, color): (Vector3, f32, i32, i32, Color)| {
                unsafe { (a.draw_sphere_ex)(center, radius, rings, slices, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawSphereWires",
        lua.create_function(
            move |_, (center, radius, rings, slices, color): (Vector3, f32, i32, i32, Color)| {
                unsafe { (a.draw_sphere_wires)(center, radius, rings, slices, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCylinder",
        lua.create_function(
            move |_,
                  (position, radius_top, radius_bottom, height, slices, color): (
                Vector3,
                f32,
                f32,
                f32,
                i32,
                Color,
            )| {
                unsafe {
                    (a.draw_cylinder)(position, radius_top, radius_bottom, height, slices, color)
                };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCylinderWires",
        lua.create_function(
            move |_,
                  (position, radius_top, radius_bottom, height, slices, color): (
                Vector3,
                f32,
                f32,
                f32,
                i32,
                Color,
            )| {
                unsafe {
                    (a.draw_cylinder_wires)(
                        position,
                        radius_top,
                        radius_bottom,
                        height,
                        slices,
                        color,
                    )
                };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawPlane",
        lua.create_function(move |_, (center, size, color): (Vector3, Vector2, Color)| {
            unsafe { (a.draw_plane)(center, size, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRay",
        lua.create_function(move |_, (ray, color): (Ray, Color)| {
            unsafe { (a.draw_ray)(ray, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawGrid",
        lua.create_function(move |_, (slices, spacing): (i32, f32)| {
            unsafe { (a.draw_grid)(slices, spacing) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawGizmo",
        lua.create_function(move |_, position: Vector3| {
            unsafe { (a.draw_gizmo)(position) };
            Ok(())
        })?,
    )?;

    Ok(())
}
