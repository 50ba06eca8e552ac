//! 2D shape drawing.
//!
//! `drawLineStrip` and `drawTriangleFan` take a Lua sequence of points and
//! marshal it into a contiguous `Vector2` buffer for the call.

use std::os::raw::c_int;
use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::ffi::{Color, Rectangle, Vector2};
use crate::marshal::LuaTexture;

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("drawPixel", "DrawPixel"),
    ("drawPixelV", "DrawPixelV"),
    ("drawLine", "DrawLine"),
    ("drawLineV", "DrawLineV"),
    ("drawLineEx", "DrawLineEx"),
    ("drawLineBezier", "DrawLineBezier"),
    ("drawLineStrip", "DrawLineStrip"),
    ("drawCircle", "DrawCircle"),
    ("drawCircleSector", "DrawCircleSector"),
    ("drawCircleSectorLines", "DrawCircleSectorLines"),
    ("drawCircleGradient", "DrawCircleGradient"),
    ("drawCircleV", "DrawCircleV"),
    ("drawCircleLines", "DrawCircleLines"),
    ("drawRing", "DrawRing"),
    ("drawRingLines", "DrawRingLines"),
    ("drawRectangle", "DrawRectangle"),
    ("drawRectangleV", "DrawRectangleV"),
    ("drawRectangleRec", "DrawRectangleRec"),
    ("drawRectanglePro", "DrawRectanglePro"),
    ("drawRectangleGradientV", "DrawRectangleGradientV"),
    ("drawRectangleGradientH", "DrawRectangleGradientH"),
    ("drawRectangleGradientEx", "DrawRectangleGradientEx"),
    ("drawRectangleLines", "DrawRectangleLines"),
    ("drawRectangleLinesEx", "DrawRectangleLinesEx"),
    ("drawRectangleRounded", "DrawRectangleRounded"),
    ("drawRectangleRoundedLines", "DrawRectangleRoundedLines"),
    ("drawTriangle", "DrawTriangle"),
    ("drawTriangleLines", "DrawTriangleLines"),
    ("drawTriangleFan", "DrawTriangleFan"),
    ("drawPoly", "DrawPoly"),
    ("setShapesTexture", "SetShapesTexture"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "drawPixel",
        lua.create_function(move |_, (x, y, color): (i32, i32, Color)| {
            unsafe { (a.draw_pixel)(x, y, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawPixelV",
        lua.create_function(move |_, (position, color): (Vector2, Color)| {
            unsafe { (a.draw_pixel_v)(position, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawLine",
        lua.create_function(
            move |_, (x1, y1, x2, y2, color): (i32, i32, i32, i32, Color)| {
                unsafe { (a.draw_line)(x1, y1, x2, y2, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawLineV",
        lua.create_function(move |_, (start, end, color): (Vector2, Vector2, Color)| {
            unsafe { (a.draw_line_v)(start, end, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawLineEx",
        lua.create_function(
            move |_, (start, end, thick, color): (Vector2, Vector2, f32, Color)| {
                unsafe { (a.draw_line_ex)(start, end, thick, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawLineBezier",
        lua.create_function(
            move |_, (start, end, thick, color): (Vector2, Vector2, f32, Color)| {
                unsafe { (a.draw_line_bezier)(start, end, thick, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawLineStrip",
        lua.create_function(move |_, (points, color): (Vec<Vector2>, Color)| {
            let mut points = points;
            unsafe { (a.draw_line_strip)(points.as_mut_ptr(), points.len() as c_int, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCircle",
        lua.create_function(move |_, (x, y, radius, color): (i32, i32, f32, Color)| {
            unsafe { (a.draw_circle)(x, y, radius, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCircleSector",
        lua.create_function(
            move |_,
                  (center, radius, start_angle, end_angle, segments, color): (
                Vector2,
                f32,
                i32,
                i32,
                i32,
                Color,
            )| {
                unsafe {
                    (a.draw_circle_sector)(center, radius, start_angle, end_angle, segments, color)
                };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCircleSectorLines",
        lua.create_function(
            move |_,
                  (center, radius, start_angle, end_angle, segments, color): (
                Vector2,
                f32,
                i32,
                i32,
                i32,
                Color,
            )| {
                unsafe {
                    (a.draw_circle_sector_lines)(
                        center,
                        radius,
                        start_angle,
                        end_angle,
                        segments,
                        color,
                    )
                };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCircleGradient",
        lua.create_function(
            move |_, (x, y, radius, inner, outer): (i32, i32, f32, Color, Color)| {
                unsafe { (a.draw_circle_gradient)(x, y, radius, inner, outer) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCircleV",
        lua.create_function(move |_, (center, radius, color): (Vector2, f32, Color)| {
            unsafe { (a.draw_circle_v)(center, radius, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawCircleLines",
        lua.create_function(move |_, (x, y, radius, color): (i32, i32, f32, Color)| {
            unsafe { (a.draw_circle_lines)(x, y, radius, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRing",
        lua.create_function(
            move |_,
                  (center, inner_radius, outer_radius, start_angle, end_angle, segments, color): (
                Vector2,
                f32,
                f32,
                i32,
                i32,
                i32,
                Color,
            )| {
                unsafe {
                    (a.draw_ring)(
                        center,
                        inner_radius,
                        outer_radius,
                        start_angle,
                        end_angle,
                        segments,
                        color,
                    )
                };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRingLines",
        lua.create_function(
            move |_,
                  (center, inner_radius, outer_radius, start_angle, end_angle, segments, color): (
                Vector2,
                f32,
                f32,
                i32,
                i32,
                i32,
                Color,
            )| {
                unsafe {
                    (a.draw_ring_lines)(
                        center,
                        inner_radius,
                        outer_radius,
                        start_angle,
                        end_angle,
                        segments,
                        color,
                    )
                };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangle",
        lua.create_function(
            move |_, (x, y, width, height, color): (i32, i32, i32, i32, Color)| {
                unsafe { (a.draw_rectangle)(x, y, width, height, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleV",
        lua.create_function(move |_, (position, size, color): (Vector2, Vector2, Color)| {
            unsafe { (a.draw_rectangle_v)(position, size, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleRec",
        lua.create_function(move |_, (rec, color): (Rectangle, Color)| {
            unsafe { (a.draw_rectangle_rec)(rec, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectanglePro",
        lua.create_function(
            move |_, (rec, origin, rotation, color): (Rectangle, Vector2, f32, Color)| {
                unsafe { (a.draw_rectangle_pro)(rec, origin, rotation, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleGradientV",
        lua.create_function(
            move |_, (x, y, width, height, top, bottom): (i32, i32, i32, i32, Color, Color)| {
                unsafe { (a.draw_rectangle_gradient_v)(x, y, width, height, top, bottom) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleGradientH",
        lua.create_function(
            move |_, (x, y, width, height, left, right): (i32, i32, i32, i32, Color, Color)| {
                unsafe { (a.draw_rectangle_gradient_h)(x, y, width, height, left, right) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleGradientEx",
        lua.create_function(
            move |_,
                  (rec, col1, col2, col3, col4): (Rectangle, Color, Color, Color, Color)| {
                unsafe { (a.draw_rectangle_gradient_ex)(rec, col1, col2, col3, col4) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleLines",
        lua.create_function(
            move |_, (x, y, width, height, color): (i32, i32, i32, i32, Color)| {
                unsafe { (a.draw_rectangle_lines)(x, y, width, height, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleLinesEx",
        lua.create_function(move |_, (rec, thick, color): (Rectangle, i32, Color)| {
            unsafe { (a.draw_rectangle_lines_ex)(rec, thick, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleRounded",
        lua.create_function(
            move |_, (rec, roundness, segments, color): (Rectangle, f32, i32, Color)| {
                unsafe { (a.draw_rectangle_rounded)(rec, roundness, segments, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawRectangleRoundedLines",
        lua.create_function(
            move |_,
                  (rec, roundness, segments, thick, color): (Rectangle, f32, i32, i32, Color)| {
                unsafe { (a.draw_rectangle_rounded_lines)(rec, roundness, segments, thick, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawTriangle",
        lua.create_function(
            move |_, (v1, v2, v3, color): (Vector2, Vector2, Vector2, Color)| {
                unsafe { (a.draw_triangle)(v1, v2, v3, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawTriangleLines",
        lua.create_function(
            move |_, (v1, v2, v3, color): (Vector2, Vector2, Vector2, Color)| {
                unsafe { (a.draw_triangle_lines)(v1, v2, v3, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawTriangleFan",
        lua.create_function(move |_, (points, color): (Vec<Vector2>, Color)| {
            let mut points = points;
            unsafe { (a.draw_triangle_fan)(points.as_mut_ptr(), points.len() as c_int, color) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawPoly",
        lua.create_function(
            move |_, (center, sides, radius, rotation, color): (Vector2, i32, f32, f32, Color)| {
                unsafe { (a.draw_poly)(center, sides, radius, rotation, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setShapesTexture",
        lua.create_function(move |_, (texture, source): (LuaTexture, Rectangle)| {
            unsafe { (a.set_shapes_texture)(texture.0, source) };
            Ok(())
        })?,
    )?;

    Ok(())
}
