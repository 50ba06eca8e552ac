//! Conversions between Lua values and the `#[repr(C)]` raylib types.
//!
//! Value types travel as plain Lua tables with named fields (numeric index
//! fallback, so `{10, 20}` works where `{x = 10, y = 20}` does).  Returned
//! structs become fresh tables, copied field-by-field with no precision
//! loss.  Handles travel as userdata wrapping the native struct by value;
//! they have no finalizer, and unloading is an explicit native call.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use mlua::{
    FromLua, IntoLua, Lua, Result as LuaResult, Table, UserData, UserDataFields, Value,
};

use crate::ffi::{
    Camera2D, Camera3D, Color, Font, Image, Matrix, Ray, Rectangle, RenderTexture2D, Texture2D,
    Vector2, Vector3, Vector4,
};

impl<'lua> FromLua<'lua> for Vector2 {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        let table = expect_table(&value, "Vector2")?;
        Ok(Self {
            x: table_component(table, "x", 1)?,
            y: table_component(table, "y", 2)?,
        })
    }
}

impl<'lua> IntoLua<'lua> for Vector2 {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let table = lua.create_table()?;
        table.set("x", self.x)?;
        table.set("y", self.y)?;
        Ok(Value::Table(table))
    }
}

impl<'lua> FromLua<'lua> for Vector3 {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        let table = expect_table(&value, "Vector3")?;
        Ok(Self {
            x: table_component(table, "x", 1)?,
            y: table_component(table, "y", 2)?,
            z: table_component(table, "z", 3)?,
        })
    }
}

impl<'lua> IntoLua<'lua> for Vector3 {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let table = lua.create_table()?;
        table.set("x", self.x)?;
        table.set("y", self.y)?;
        table.set("z", self.z)?;
        Ok(Value::Table(table))
    }
}

impl<'lua> IntoLua<'lua> for Vector4 {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let table = lua.create_table()?;
        table.set("x", self.x)?;
        table.set("y", self.y)?;
        table.set("z", self.z)?;
        table.set("w", self.w)?;
        Ok(Value::Table(table))
    }
}

impl<'lua> FromLua<'lua> for Color {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        let table = expect_table(&value, "Color")?;
        Ok(Self {
            r: table_byte(table, "r", 1)?,
            g: table_byte(table, "g", 2)?,
            b: table_byte(table, "b", 3)?,
            // Alpha defaults to opaque, matching how scripts usually build
            // colors from three channels.
            a: match table_byte(table, "a", 4) {
                Ok(a) => a,
                Err(_) => 255,
            },
        })
    }
}

impl<'lua> IntoLua<'lua> for Color {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let table = lua.create_table()?;
        table.set("r", self.r)?;
        table.set("g", self.g)?;
        table.set("b", self.b)?;
        table.set("a", self.a)?;
        Ok(Value::Table(table))
    }
}

impl<'lua> FromLua<'lua> for Rectangle {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        let table = expect_table(&value, "Rectangle")?;
        Ok(Self {
            x: table_component(table, "x", 1)?,
            y: table_component(table, "y", 2)?,
            width: table_component(table, "width", 3)?,
            height: table_component(table, "height", 4)?,
        })
    }
}

impl<'lua> IntoLua<'lua> for Rectangle {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let table = lua.create_table()?;
        table.set("x", self.x)?;
        table.set("y", self.y)?;
        table.set("width", self.width)?;
        table.set("height", self.height)?;
        Ok(Value::Table(table))
    }
}

impl<'lua> FromLua<'lua> for Camera2D {
    fn from_lua(value: Value<'lua>, lua: &'lua Lua) -> LuaResult<Self> {
        let table = expect_table(&value, "Camera2D")?;
        Ok(Self {
            offset: optional_struct(lua, table, "offset")?.unwrap_or(Vector2 { x: 0.0, y: 0.0 }),
            target: optional_struct(lua, table, "target")?.unwrap_or(Vector2 { x: 0.0, y: 0.0 }),
            rotation: table.get::<_, Option<f32>>("rotation")?.unwrap_or(0.0),
            zoom: table.get::<_, Option<f32>>("zoom")?.unwrap_or(1.0),
        })
    }
}

impl<'lua> IntoLua<'lua> for Camera2D {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let table = lua.create_table()?;
        table.set("offset", self.offset)?;
        table.set("target", self.target)?;
        table.set("rotation", self.rotation)?;
        table.set("zoom", self.zoom)?;
        Ok(Value::Table(table))
    }
}

impl<'lua> FromLua<'lua> for Camera3D {
    fn from_lua(value: Value<'lua>, lua: &'lua Lua) -> LuaResult<Self> {
        let table = expect_table(&value, "Camera3D")?;
        let zero = Vector3 { x: 0.0, y: 0.0, z: 0.0 };
        Ok(Self {
            position: optional_struct(lua, table, "position")?.unwrap_or(zero),
            target: optional_struct(lua, table, "target")?.unwrap_or(zero),
            up: optional_struct(lua, table, "up")?
                .unwrap_or(Vector3 { x: 0.0, y: 1.0, z: 0.0 }),
            fovy: table.get::<_, Option<f32>>("fovy")?.unwrap_or(45.0),
            camera_type: table.get::<_, Option<i32>>("type")?.unwrap_or(0),
        })
    }
}

impl<'lua> IntoLua<'lua> for Camera3D {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let table = lua.create_table()?;
        table.set("position", self.position)?;
        table.set("target", self.target)?;
        table.set("up", self.up)?;
        table.set("fovy", self.fovy)?;
        table.set("type", self.camera_type)?;
        Ok(Value::Table(table))
    }
}

impl<'lua> FromLua<'lua> for Ray {
    fn from_lua(value: Value<'lua>, lua: &'lua Lua) -> LuaResult<Self> {
        let table = expect_table(&value, "Ray")?;
        let zero = Vector3 { x: 0.0, y: 0.0, z: 0.0 };
        Ok(Self {
            position: optional_struct(lua, table, "position")?.unwrap_or(zero),
            direction: optional_struct(lua, table, "direction")?.unwrap_or(zero),
        })
    }
}

impl<'lua> IntoLua<'lua> for Ray {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let table = lua.create_table()?;
        table.set("position", self.position)?;
        table.set("direction", self.direction)?;
        Ok(Value::Table(table))
    }
}

impl<'lua> IntoLua<'lua> for Matrix {
    fn into_lua(self, lua: &'lua Lua) -> LuaResult<Value<'lua>> {
        let flat = self.to_array();
        let table = lua.create_table_with_capacity(flat.len(), 0)?;
        for (index, component) in flat.into_iter().enumerate() {
            table.set(index + 1, component)?;
        }
        Ok(Value::Table(table))
    }
}

/// CPU-side image handle.  The pixel data stays owned by raylib.
#[derive(Debug, Clone, Copy)]
pub struct LuaImage(pub Image);

impl UserData for LuaImage {
    fn add_fields<'lua, F: UserDataFields<'lua, Self>>(fields: &mut F) {
        fields.add_field_method_get("width", |_, this| Ok(this.0.width));
        fields.add_field_method_get("height", |_, this| Ok(this.0.height));
        fields.add_field_method_get("mipmaps", |_, this| Ok(this.0.mipmaps));
        fields.add_field_method_get("format", |_, this| Ok(this.0.format));
    }
}

impl<'lua> FromLua<'lua> for LuaImage {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        match value {
            Value::UserData(ud) => ud.borrow::<LuaImage>().map(|image| *image),
            _ => Err(conversion_error(&value, "Image")),
        }
    }
}

/// GPU texture handle.
#[derive(Debug, Clone, Copy)]
pub struct LuaTexture(pub Texture2D);

impl UserData for LuaTexture {
    fn add_fields<'lua, F: UserDataFields<'lua, Self>>(fields: &mut F) {
        fields.add_field_method_get("id", |_, this| Ok(this.0.id));
        fields.add_field_method_get("width", |_, this| Ok(this.0.width));
        fields.add_field_method_get("height", |_, this| Ok(this.0.height));
        fields.add_field_method_get("mipmaps", |_, this| Ok(this.0.mipmaps));
        fields.add_field_method_get("format", |_, this| Ok(this.0.format));
    }
}

impl<'lua> FromLua<'lua> for LuaTexture {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        match value {
            Value::UserData(ud) => ud.borrow::<LuaTexture>().map(|texture| *texture),
            _ => Err(conversion_error(&value, "Texture2D")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LuaRenderTexture(pub RenderTexture2D);

impl UserData for LuaRenderTexture {
    fn add_fields<'lua, F: UserDataFields<'lua, Self>>(fields: &mut F) {
        fields.add_field_method_get("id", |_, this| Ok(this.0.id));
        fields.add_field_method_get("texture", |_, this| Ok(LuaTexture(this.0.texture)));
        fields.add_field_method_get("depth", |_, this| Ok(LuaTexture(this.0.depth)));
    }
}

impl<'lua> FromLua<'lua> for LuaRenderTexture {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        match value {
            Value::UserData(ud) => ud.borrow::<LuaRenderTexture>().map(|target| *target),
            _ => Err(conversion_error(&value, "RenderTexture2D")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LuaFont(pub Font);

impl UserData for LuaFont {
    fn add_fields<'lua, F: UserDataFields<'lua, Self>>(fields: &mut F) {
        fields.add_field_method_get("baseSize", |_, this| Ok(this.0.base_size));
        fields.add_field_method_get("charsCount", |_, this| Ok(this.0.chars_count));
        fields.add_field_method_get("texture", |_, this| Ok(LuaTexture(this.0.texture)));
    }
}

impl<'lua> FromLua<'lua> for LuaFont {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        match value {
            Value::UserData(ud) => ud.borrow::<LuaFont>().map(|font| *font),
            _ => Err(conversion_error(&value, "Font")),
        }
    }
}

/// A color packed as a 0xRRGGBBAA integer literal.
///
/// Literals with the red high bit set (`0xFF0000FF`, `0xFFFFFFFF`) exceed
/// `i32::MAX`, so the conversion accepts any Lua integer or number and
/// wraps to 32 bits the way a C cast does.
#[derive(Debug, Clone, Copy)]
pub struct PackedColor(pub i32);

impl<'lua> FromLua<'lua> for PackedColor {
    fn from_lua(value: Value<'lua>, _: &'lua Lua) -> LuaResult<Self> {
        match value {
            Value::Integer(hex) => Ok(Self(hex as i32)),
            Value::Number(hex) => Ok(Self(hex as i64 as i32)),
            _ => Err(conversion_error(&value, "packed color")),
        }
    }
}

/// Builds a NUL-terminated copy of `text` for a `const char *` parameter.
pub fn cstring(text: &str) -> LuaResult<CString> {
    CString::new(text).map_err(mlua::Error::external)
}

/// Copies a native `const char *` return value into an owned string.
///
/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated string that stays
/// alive for the duration of the call.
pub unsafe fn string_from_native(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

fn expect_table<'a, 'lua>(value: &'a Value<'lua>, to: &'static str) -> LuaResult<&'a Table<'lua>> {
    match value {
        Value::Table(table) => Ok(table),
        _ => Err(conversion_error(value, to)),
    }
}

fn conversion_error(value: &Value, to: &'static str) -> mlua::Error {
    mlua::Error::FromLuaConversionError {
        from: value.type_name(),
        to,
        message: Some(format!("expected a {to} table or userdata")),
    }
}

fn table_component(table: &Table, key: &str, index: i32) -> LuaResult<f32> {
    if let Ok(value) = table.get::<_, f32>(key) {
        return Ok(value);
    }
    table.get::<_, f32>(index)
}

fn table_byte(table: &Table, key: &str, index: i32) -> LuaResult<u8> {
    if let Ok(value) = table.get::<_, u8>(key) {
        return Ok(value);
    }
    table.get::<_, u8>(index)
}

fn optional_struct<'lua, T: FromLua<'lua>>(
    lua: &'lua Lua,
    table: &Table<'lua>,
    key: &str,
) -> LuaResult<Option<T>> {
    match table.get::<_, Value>(key)? {
        Value::Nil => Ok(None),
        value => T::from_lua(value, lua).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_round_trips_bit_identically() {
        let lua = Lua::new();
        let echo = lua
            .create_function(|_, rec: Rectangle| Ok(rec))
            .unwrap();
        lua.globals().set("echo", echo).unwrap();

        let (x, y, w, h): (f32, f32, f32, f32) = lua
            .load(
                r#"
                local rec = echo({x = 1.5, y = 2.25, width = 3.125, height = 4.0625})
                return rec.x, rec.y, rec.width, rec.height
            "#,
            )
            .eval()
            .unwrap();
        assert_eq!(x.to_bits(), 1.5f32.to_bits());
        assert_eq!(y.to_bits(), 2.25f32.to_bits());
        assert_eq!(w.to_bits(), 3.125f32.to_bits());
        assert_eq!(h.to_bits(), 4.0625f32.to_bits());
    }

    #[test]
    fn vectors_accept_named_or_indexed_fields() {
        let lua = Lua::new();
        let echo = lua.create_function(|_, v: Vector2| Ok(v)).unwrap();
        lua.globals().set("echo", echo).unwrap();

        let (ax, by): (f32, f32) = lua
            .load("local a = echo({x = 3, y = 4}) local b = echo({5, 6}) return a.x, b.y")
            .eval()
            .unwrap();
        assert_eq!(ax, 3.0);
        assert_eq!(by, 6.0);
    }

    #[test]
    fn color_defaults_alpha_to_opaque() {
        let lua = Lua::new();
        let echo = lua.create_function(|_, c: Color| Ok(c)).unwrap();
        lua.globals().set("echo", echo).unwrap();

        let (a_full, a_default): (u8, u8) = lua
            .load("return echo({r=1,g=2,b=3,a=4}).a, echo({r=1,g=2,b=3}).a")
            .eval()
            .unwrap();
        assert_eq!(a_full, 4);
        assert_eq!(a_default, 255);
    }

    #[test]
    fn point_arrays_preserve_order_and_count() {
        let lua = Lua::new();
        let collect = lua
            .create_function(|_, points: Vec<Vector2>| {
                Ok(points
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>())
            })
            .unwrap();
        lua.globals().set("collect", collect).unwrap();

        let joined: Vec<String> = lua
            .load("return collect({{1, 2}, {3, 4}, {x = 5, y = 6}})")
            .eval()
            .unwrap();
        assert_eq!(joined, vec!["1,2", "3,4", "5,6"]);
    }

    #[test]
    fn camera_defaults_fill_missing_fields() {
        let lua = Lua::new();
        let echo = lua.create_function(|_, cam: Camera2D| Ok(cam)).unwrap();
        lua.globals().set("echo", echo).unwrap();

        let (zoom, rotation, tx): (f32, f32, f32) = lua
            .load("local c = echo({target = {x = 7, y = 8}}) return c.zoom, c.rotation, c.target.x")
            .eval()
            .unwrap();
        assert_eq!(zoom, 1.0);
        assert_eq!(rotation, 0.0);
        assert_eq!(tx, 7.0);
    }

    #[test]
    fn packed_color_accepts_full_alpha_literals() {
        let lua = Lua::new();
        let echo = lua
            .create_function(|_, hex: PackedColor| Ok(hex.0))
            .unwrap();
        lua.globals().set("echo", echo).unwrap();

        let (red, white, float): (i32, i32, i32) = lua
            .load("return echo(0xFF0000FF), echo(0xFFFFFFFF), echo(4278190335.0)")
            .eval()
            .unwrap();
        assert_eq!(red as u32, 0xFF0000FF);
        assert_eq!(white as u32, 0xFFFFFFFF);
        assert_eq!(float as u32, 0xFF0000FF);
    }

    #[test]
    fn handles_reject_plain_tables() {
        let lua = Lua::new();
        let take = lua
            .create_function(|_, _texture: LuaTexture| Ok(()))
            .unwrap();
        lua.globals().set("take", take).unwrap();

        let err = lua.load("take({id = 1})").exec().unwrap_err();
        assert!(err.to_string().contains("Texture2D"));
    }
}
