//! `#[repr(C)]` mirrors of the raylib 2.5 types that cross the boundary.
//!
//! Layouts must match `raylib.h` exactly: values are copied across the FFI
//! boundary by value, so a reordered or resized field silently corrupts
//! every call.  The tests at the bottom pin the ABI.

pub mod api;

use std::os::raw::{c_int, c_uchar, c_uint, c_void};

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Column-major, following raylib's `m0..m15` field order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix {
    pub m0: f32,
    pub m4: f32,
    pub m8: f32,
    pub m12: f32,
    pub m1: f32,
    pub m5: f32,
    pub m9: f32,
    pub m13: f32,
    pub m2: f32,
    pub m6: f32,
    pub m10: f32,
    pub m14: f32,
    pub m3: f32,
    pub m7: f32,
    pub m11: f32,
    pub m15: f32,
}

impl Matrix {
    /// Fields in declaration order, for marshaling to a flat Lua sequence.
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self)
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Camera2D {
    pub offset: Vector2,
    pub target: Vector2,
    pub rotation: f32,
    pub zoom: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Camera3D {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fovy: f32,
    /// `CameraType` value: perspective or orthographic.
    pub camera_type: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

/// CPU-side pixel data.  `data` is allocated and freed by raylib; the
/// binding forwards the struct by value and never touches the pointer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Image {
    pub data: *mut c_void,
    pub width: c_int,
    pub height: c_int,
    pub mipmaps: c_int,
    pub format: c_int,
}

/// GPU texture handle.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Texture2D {
    pub id: c_uint,
    pub width: c_int,
    pub height: c_int,
    pub mipmaps: c_int,
    pub format: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RenderTexture2D {
    pub id: c_uint,
    pub texture: Texture2D,
    pub depth: Texture2D,
    pub depth_texture: bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CharInfo {
    pub value: c_int,
    pub rec: Rectangle,
    pub offset_x: c_int,
    pub offset_y: c_int,
    pub advance_x: c_int,
    pub data: *mut c_uchar,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Font {
    pub texture: Texture2D,
    pub base_size: c_int,
    pub chars_count: c_int,
    pub chars: *mut CharInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn value_types_match_c_layout() {
        assert_eq!(size_of::<Vector2>(), 8);
        assert_eq!(size_of::<Vector3>(), 12);
        assert_eq!(size_of::<Vector4>(), 16);
        assert_eq!(size_of::<Matrix>(), 64);
        assert_eq!(size_of::<Color>(), 4);
        assert_eq!(size_of::<Rectangle>(), 16);
        assert_eq!(size_of::<Camera2D>(), 20);
        assert_eq!(size_of::<Camera3D>(), 44);
        assert_eq!(size_of::<Ray>(), 24);

        assert_eq!(offset_of!(Rectangle, x), 0);
        assert_eq!(offset_of!(Rectangle, y), 4);
        assert_eq!(offset_of!(Rectangle, width), 8);
        assert_eq!(offset_of!(Rectangle, height), 12);
        assert_eq!(offset_of!(Color, r), 0);
        assert_eq!(offset_of!(Color, a), 3);
        assert_eq!(offset_of!(Camera3D, fovy), 36);
        assert_eq!(offset_of!(Camera3D, camera_type), 40);
    }

    #[test]
    fn handle_types_match_c_layout() {
        assert_eq!(size_of::<Texture2D>(), 20);
        assert_eq!(
            size_of::<Image>(),
            size_of::<*mut c_void>() + 4 * size_of::<c_int>()
        );
        assert_eq!(offset_of!(Texture2D, id), 0);
        assert_eq!(offset_of!(Texture2D, width), 4);
        assert_eq!(offset_of!(Font, base_size), size_of::<Texture2D>());
        assert_eq!(offset_of!(CharInfo, rec), 4);
    }

    #[test]
    fn matrix_flattens_in_field_order() {
        let mut m = Matrix::zeroed();
        m.m0 = 1.0;
        m.m4 = 2.0;
        m.m15 = 3.0;
        let flat = m.to_array();
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[1], 2.0);
        assert_eq!(flat[15], 3.0);
    }
}
