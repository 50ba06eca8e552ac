//! Font loading and text drawing.

use std::os::raw::c_int;
use std::ptr;
use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::ffi::{Color, Rectangle, Vector2};
use crate::marshal::{cstring, LuaFont, LuaImage};

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("getFontDefault", "GetFontDefault"),
    ("loadFont", "LoadFont"),
    ("loadFontEx", "LoadFontEx"),
    ("loadFontFromImage", "LoadFontFromImage"),
    ("unloadFont", "UnloadFont"),
    ("drawFps", "DrawFPS"),
    ("drawText", "DrawText"),
    ("drawTextEx", "DrawTextEx"),
    ("drawTextRec", "DrawTextRec"),
    ("measureText", "MeasureText"),
    ("measureTextEx", "MeasureTextEx"),
    ("getGlyphIndex", "GetGlyphIndex"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "getFontDefault",
        lua.create_function(move |_, ()| Ok(LuaFont(unsafe { (a.get_font_default)() })))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "loadFont",
        lua.create_function(move |_, file_name: String| {
            let file_name = cstring(&file_name)?;
            Ok(LuaFont(unsafe { (a.load_font)(file_name.as_ptr()) }))
        })?,
    )?;

    // An absent or empty glyph list loads the default character set.
    let a = Arc::clone(api);
    rl.set(
        "loadFontEx",
        lua.create_function(
            move |_, (file_name, font_size, chars): (String, i32, Option<Vec<i32>>)| {
                let file_name = cstring(&file_name)?;
                let font = match chars {
                    Some(mut glyphs) if !glyphs.is_empty() => unsafe {
                        (a.load_font_ex)(
                            file_name.as_ptr(),
                            font_size,
                            glyphs.as_mut_ptr(),
                            glyphs.len() as c_int,
                        )
                    },
                    _ => unsafe {
                        (a.load_font_ex)(file_name.as_ptr(), font_size, ptr::null_mut(), 0)
                    },
                };
                Ok(LuaFont(font))
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "loadFontFromImage",
        lua.create_function(move |_, (image, key, first_char): (LuaImage, Color, i32)| {
            Ok(LuaFont(unsafe {
                (a.load_font_from_image)(image.0, key, first_char)
            }))
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "unloadFont",
        lua.create_function(move |_, font: LuaFont| {
            unsafe { (a.unload_font)(font.0) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawFps",
        lua.create_function(move |_, (x, y): (i32, i32)| {
            unsafe { (a.draw_fps)(x, y) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawText",
        lua.create_function(
            move |_, (text, x, y, font_size, color): (String, i32, i32, i32, Color)| {
                let text = cstring(&text)?;
                unsafe { (a.draw_text)(text.as_ptr(), x, y, font_size, color) };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawTextEx",
        lua.create_function(
            move |_,
                  (font, text, position, font_size, spacing, color): (
                LuaFont,
                String,
                Vector2,
                f32,
                f32,
                Color,
            )| {
                let text = cstring(&text)?;
                unsafe {
                    (a.draw_text_ex)(font.0, text.as_ptr(), position, font_size, spacing, color)
                };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "drawTextRec",
        lua.create_function(
            move |_,
                  (font, text, rec, font_size, spacing, word_wrap, color): (
                LuaFont,
                String,
                Rectangle,
                f32,
                f32,
                bool,
                Color,
            )| {
                let text = cstring(&text)?;
                unsafe {
                    (a.draw_text_rec)(
                        font.0,
                        text.as_ptr(),
                        rec,
                        font_size,
                        spacing,
                        word_wrap,
                        color,
                    )
                };
                Ok(())
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "measureText",
        lua.create_function(move |_, (text, font_size): (String, i32)| {
            let text = cstring(&text)?;
            Ok(unsafe { (a.measure_text)(text.as_ptr(), font_size) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "measureTextEx",
        lua.create_function(
            move |_, (font, text, font_size, spacing): (LuaFont, String, f32, f32)| {
                let text = cstring(&text)?;
                Ok(unsafe { (a.measure_text_ex)(font.0, text.as_ptr(), font_size, spacing) })
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGlyphIndex",
        lua.create_function(move |_, (font, character): (LuaFont, i32)| {
            Ok(unsafe { (a.get_glyph_index)(font.0, character) })
        })?,
    )?;

    Ok(())
}
