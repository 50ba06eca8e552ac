//! The scripting-visible surface: one Lua export per native entry point,
//! grouped by domain.
//!
//! Every closure forwards synchronously to a resolved symbol and returns
//! whatever the native call returns.  No pairing of begin/end calls is
//! validated here; that discipline (or lack of it) belongs to the native
//! library.

mod camera;
mod collision;
mod color;
mod cursor;
mod drawing;
mod files;
mod input;
mod misc;
mod models;
mod screen;
mod shapes;
mod text;
mod textures;
mod timing;
mod window;

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::enums;
use crate::ffi::api::RaylibApi;
use crate::ffi::{Camera2D, Camera3D, Color, Rectangle, Vector2, Vector3};

/// Native symbols the marshaler calls on the scripts' behalf rather than
/// exporting directly: raylib hands out string lists it expects the caller
/// to release with the matching `Clear*` call.
pub const INTERNAL_SYMBOLS: &[&str] = &["ClearDirectoryFiles", "ClearDroppedFiles"];

/// Exports that read a struct field instead of forwarding to a native
/// function.
pub const FIELD_ACCESSORS: &[&str] = &["getImageWidth", "getImageHeight"];

/// The declarative (Lua name → native symbol) mapping, all domains.
pub fn exports() -> impl Iterator<Item = (&'static str, &'static str)> {
    window::EXPORTS
        .iter()
        .chain(cursor::EXPORTS)
        .chain(drawing::EXPORTS)
        .chain(screen::EXPORTS)
        .chain(timing::EXPORTS)
        .chain(color::EXPORTS)
        .chain(misc::EXPORTS)
        .chain(files::EXPORTS)
        .chain(input::EXPORTS)
        .chain(camera::EXPORTS)
        .chain(shapes::EXPORTS)
        .chain(collision::EXPORTS)
        .chain(textures::EXPORTS)
        .chain(text::EXPORTS)
        .chain(models::EXPORTS)
        .copied()
}

/// Builds the `rl` module table, installs it as a global, and returns it.
pub fn register(lua: &Lua, api: Arc<RaylibApi>) -> LuaResult<Table> {
    let rl = lua.create_table()?;

    register_constructors(lua, &rl)?;
    enums::register(lua, &rl)?;

    window::register(lua, &rl, &api)?;
    cursor::register(lua, &rl, &api)?;
    drawing::register(lua, &rl, &api)?;
    screen::register(lua, &rl, &api)?;
    timing::register(lua, &rl, &api)?;
    color::register(lua, &rl, &api)?;
    misc::register(lua, &rl, &api)?;
    files::register(lua, &rl, &api)?;
    input::register(lua, &rl, &api)?;
    camera::register(lua, &rl, &api)?;
    shapes::register(lua, &rl, &api)?;
    collision::register(lua, &rl, &api)?;
    textures::register(lua, &rl, &api)?;
    text::register(lua, &rl, &api)?;
    models::register(lua, &rl, &api)?;

    lua.globals().set("rl", rl.clone())?;
    Ok(rl)
}

/// Struct constructors, so scripts can write `rl.Vector2(3, 4)` instead of
/// spelling out the field table.
fn register_constructors(lua: &Lua, rl: &Table) -> LuaResult<()> {
    rl.set(
        "Vector2",
        lua.create_function(|_, (x, y): (f32, f32)| Ok(Vector2 { x, y }))?,
    )?;
    rl.set(
        "Vector3",
        lua.create_function(|_, (x, y, z): (f32, f32, f32)| Ok(Vector3 { x, y, z }))?,
    )?;
    rl.set(
        "Color",
        lua.create_function(|_, (r, g, b, a): (u8, u8, u8, Option<u8>)| {
            Ok(Color { r, g, b, a: a.unwrap_or(255) })
        })?,
    )?;
    rl.set(
        "Rectangle",
        lua.create_function(|_, (x, y, width, height): (f32, f32, f32, f32)| {
            Ok(Rectangle { x, y, width, height })
        })?,
    )?;
    rl.set(
        "Camera2D",
        lua.create_function(
            |_,
             (offset, target, rotation, zoom): (
                Option<Vector2>,
                Option<Vector2>,
                Option<f32>,
                Option<f32>,
            )| {
                let zero = Vector2 { x: 0.0, y: 0.0 };
                Ok(Camera2D {
                    offset: offset.unwrap_or(zero),
                    target: target.unwrap_or(zero),
                    rotation: rotation.unwrap_or(0.0),
                    zoom: zoom.unwrap_or(1.0),
                })
            },
        )?,
    )?;
    rl.set(
        "Camera3D",
        lua.create_function(
            |_,
             (position, target, up, fovy, camera_type): (
                Option<Vector3>,
                Option<Vector3>,
                Option<Vector3>,
                Option<f32>,
                Option<i32>,
            )| {
                let zero = Vector3 { x: 0.0, y: 0.0, z: 0.0 };
                Ok(Camera3D {
                    position: position.unwrap_or(zero),
                    target: target.unwrap_or(zero),
                    up: up.unwrap_or(Vector3 { x: 0.0, y: 1.0, z: 0.0 }),
                    fovy: fovy.unwrap_or(45.0),
                    camera_type: camera_type.unwrap_or(0),
                })
            },
        )?,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn every_export_resolves_to_a_declared_symbol() {
        let symbols: HashSet<&str> = RaylibApi::SYMBOLS.iter().copied().collect();
        for (lua_name, symbol) in exports() {
            assert!(
                symbols.contains(symbol),
                "export {lua_name} references undeclared symbol {symbol}"
            );
        }
    }

    #[test]
    fn every_symbol_is_reachable() {
        let mut used: HashSet<&str> = exports().map(|(_, symbol)| symbol).collect();
        used.extend(INTERNAL_SYMBOLS);
        for symbol in RaylibApi::SYMBOLS {
            assert!(used.contains(symbol), "symbol {symbol} resolved but never exported");
        }
    }

    #[test]
    fn no_accidental_aliasing() {
        // Two exports naming the same native function would be silent
        // aliasing; the surface is 1:1 apart from struct-field accessors.
        let mut by_symbol: HashMap<&str, &str> = HashMap::new();
        for (lua_name, symbol) in exports() {
            if let Some(existing) = by_symbol.insert(symbol, lua_name) {
                panic!("{existing} and {lua_name} both forward to {symbol}");
            }
        }
    }

    #[test]
    fn lua_names_are_unique() {
        let mut names: HashSet<&str> = HashSet::new();
        for (lua_name, _) in exports() {
            assert!(names.insert(lua_name), "duplicate export {lua_name}");
        }
        for accessor in FIELD_ACCESSORS {
            assert!(names.insert(accessor), "duplicate export {accessor}");
        }
    }

    #[test]
    fn surface_matches_symbol_table_size() {
        assert_eq!(
            exports().count() + INTERNAL_SYMBOLS.len(),
            RaylibApi::SYMBOLS.len()
        );
    }
}
