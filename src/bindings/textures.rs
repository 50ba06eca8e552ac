//! Image and texture loading.
//!
//! Loaders hand back userdata handles; the native data they point at is
//! released only by the matching `unload*` call, never by Lua collection.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::marshal::{cstring, LuaImage, LuaRenderTexture, LuaTexture};

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("loadImage", "LoadImage"),
    ("loadImageRaw", "LoadImageRaw"),
    ("exportImage", "ExportImage"),
    ("exportImageAsCode", "ExportImageAsCode"),
    ("loadTexture", "LoadTexture"),
    ("loadTextureFromImage", "LoadTextureFromImage"),
    ("loadTextureCubemap", "LoadTextureCubemap"),
    ("loadRenderTexture", "LoadRenderTexture"),
    ("unloadImage", "UnloadImage"),
    ("unloadTexture", "UnloadTexture"),
    ("unloadRenderTexture", "UnloadRenderTexture"),
    ("getPixelDataSize", "GetPixelDataSize"),
    ("getTextureData", "GetTextureData"),
    ("getScreenData", "GetScreenData"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "loadImage",
        lua.create_function(move |_, file_name: String| {
            let file_name = cstring(&file_name)?;
            Ok(LuaImage(unsafe { (a.load_image)(file_name.as_ptr()) }))
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "loadImageRaw",
        lua.create_function(
            move |_,
                  (file_name, width, height, format, header_size): (
                String,
                i32,
                i32,
                i32,
                i32,
            )| {
                let file_name = cstring(&file_name)?;
                Ok(LuaImage(unsafe {
                    (a.load_image_raw)(file_name.as_ptr(), width, height, format, header_size)
                }))
            },
        )?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "exportImage",
        lua.create_function(move |_, (image, file_name): (LuaImage, String)| {
            let file_name = cstring(&file_name)?;
            unsafe { (a.export_image)(image.0, file_name.as_ptr()) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "exportImageAsCode",
        lua.create_function(move |_, (image, file_name): (LuaImage, String)| {
            let file_name = cstring(&file_name)?;
            unsafe { (a.export_image_as_code)(image.0, file_name.as_ptr()) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "loadTexture",
        lua.create_function(move |_, file_name: String| {
            let file_name = cstring(&file_name)?;
            Ok(LuaTexture(unsafe { (a.load_texture)(file_name.as_ptr()) }))
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "loadTextureFromImage",
        lua.create_function(move |_, image: LuaImage| {
            Ok(LuaTexture(unsafe { (a.load_texture_from_image)(image.0) }))
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "loadTextureCubemap",
        lua.create_function(move |_, (image, layout): (LuaImage, i32)| {
            Ok(LuaTexture(unsafe {
                (a.load_texture_cubemap)(image.0, layout)
            }))
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "loadRenderTexture",
        lua.create_function(move |_, (width, height): (i32, i32)| {
            Ok(LuaRenderTexture(unsafe {
                (a.load_render_texture)(width, height)
            }))
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "unloadImage",
        lua.create_function(move |_, image: LuaImage| {
            unsafe { (a.unload_image)(image.0) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "unloadTexture",
        lua.create_function(move |_, texture: LuaTexture| {
            unsafe { (a.unload_texture)(texture.0) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "unloadRenderTexture",
        lua.create_function(move |_, target: LuaRenderTexture| {
            unsafe { (a.unload_render_texture)(target.0) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getPixelDataSize",
        lua.create_function(move |_, (width, height, format): (i32, i32, i32)| {
            Ok(unsafe { (a.get_pixel_data_size)(width, height, format) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getTextureData",
        lua.create_function(move |_, texture: LuaTexture| {
            Ok(LuaImage(unsafe { (a.get_texture_data)(texture.0) }))
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getScreenData",
        lua.create_function(move |_, ()| Ok(LuaImage(unsafe { (a.get_screen_data)() })))?,
    )?;

    // The image handle exposes width/height as fields too; these keep the
    // call-style access working for scripts that use it.
    rl.set(
        "getImageWidth",
        lua.create_function(|_, image: LuaImage| Ok(image.0.width))?,
    )?;
    rl.set(
        "getImageHeight",
        lua.create_function(|_, image: LuaImage| Ok(image.0.height))?,
    )?;

    Ok(())
}
