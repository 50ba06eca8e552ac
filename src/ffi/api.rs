//! The resolved symbol table for the native raylib library.
//!
//! `RaylibApi` holds one typed function pointer per wrapped entry point,
//! looked up by name when the shared library is opened.  Resolution is
//! all-or-nothing: a single missing symbol fails the load, there is no
//! partial table.  The `Library` stays alive inside the struct for as long
//! as any pointer can be called.

use std::env;
use std::ffi::OsString;
use std::os::raw::{c_char, c_int, c_long, c_uint};
use std::path::Path;

use libloading::Library;
use log::info;

use crate::error::BindError;
use crate::ffi::{
    Camera2D, Camera3D, Color, Font, Image, Matrix, Ray, Rectangle, RenderTexture2D, Texture2D,
    Vector2, Vector3, Vector4,
};

/// Environment variable naming the shared library to open instead of the
/// platform default soname.
pub const LIBRARY_ENV: &str = "RAYLIB_LUA_LIBRARY";

/// Soname the dynamic loader searches for when no explicit path is given.
pub fn default_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "raylib.dll"
    } else if cfg!(target_os = "macos") {
        "libraylib.dylib"
    } else {
        "libraylib.so"
    }
}

macro_rules! raylib_api {
    ($( fn $field:ident = $symbol:literal ( $($arg:ty),* ) $(-> $ret:ty)? ; )*) => {
        pub struct RaylibApi {
            $( pub $field: unsafe extern "C" fn($($arg),*) $(-> $ret)?, )*
            _lib: Library,
        }

        impl RaylibApi {
            /// Every native symbol the binding resolves, in declaration
            /// order.  The list is closed: nothing else is looked up.
            pub const SYMBOLS: &'static [&'static str] = &[$($symbol),*];

            /// Opens `path` and resolves the full symbol table.
            pub fn load(path: &Path) -> Result<Self, BindError> {
                let lib = unsafe { Library::new(path) }.map_err(|source| {
                    BindError::LibraryOpen { path: path.to_path_buf(), source }
                })?;
                $(
                    let $field = unsafe {
                        *lib.get::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>($symbol.as_bytes())
                            .map_err(|source| BindError::MissingSymbol { symbol: $symbol, source })?
                    };
                )*
                info!(
                    "resolved {} raylib symbols from {}",
                    Self::SYMBOLS.len(),
                    path.display()
                );
                Ok(Self { $($field,)* _lib: lib })
            }
        }
    };
}

impl RaylibApi {
    /// Resolves the library location: explicit path, then `RAYLIB_LUA_LIBRARY`,
    /// then the platform soname (searched by the system loader).
    pub fn load_default(explicit: Option<&Path>) -> Result<Self, BindError> {
        let location: OsString = match explicit {
            Some(path) => path.into(),
            None => env::var_os(LIBRARY_ENV)
                .unwrap_or_else(|| default_library_name().into()),
        };
        Self::load(Path::new(&location))
    }
}

raylib_api! {
    // Window-related functions
    fn init_window = "InitWindow"(c_int, c_int, *const c_char);
    fn window_should_close = "WindowShouldClose"() -> bool;
    fn close_window = "CloseWindow"();
    fn is_window_ready = "IsWindowReady"() -> bool;
    fn is_window_minimized = "IsWindowMinimized"() -> bool;
    fn is_window_resized = "IsWindowResized"() -> bool;
    fn is_window_hidden = "IsWindowHidden"() -> bool;
    fn toggle_fullscreen = "ToggleFullscreen"();
    fn unhide_window = "UnhideWindow"();
    fn hide_window = "HideWindow"();
    fn set_window_icon = "SetWindowIcon"(Image);
    fn set_window_title = "SetWindowTitle"(*const c_char);
    fn set_window_position = "SetWindowPosition"(c_int, c_int);
    fn set_window_monitor = "SetWindowMonitor"(c_int);
    fn set_window_min_size = "SetWindowMinSize"(c_int, c_int);
    fn set_window_size = "SetWindowSize"(c_int, c_int);
    fn get_screen_width = "GetScreenWidth"() -> c_int;
    fn get_screen_height = "GetScreenHeight"() -> c_int;
    fn get_monitor_count = "GetMonitorCount"() -> c_int;
    fn get_monitor_width = "GetMonitorWidth"(c_int) -> c_int;
    fn get_monitor_height = "GetMonitorHeight"(c_int) -> c_int;
    fn get_monitor_physical_width = "GetMonitorPhysicalWidth"(c_int) -> c_int;
    fn get_monitor_physical_height = "GetMonitorPhysicalHeight"(c_int) -> c_int;
    fn get_monitor_name = "GetMonitorName"(c_int) -> *const c_char;
    fn get_clipboard_text = "GetClipboardText"() -> *const c_char;
    fn set_clipboard_text = "SetClipboardText"(*const c_char);

    // Cursor-related functions
    fn show_cursor = "ShowCursor"();
    fn hide_cursor = "HideCursor"();
    fn is_cursor_hidden = "IsCursorHidden"() -> bool;
    fn enable_cursor = "EnableCursor"();
    fn disable_cursor = "DisableCursor"();

    // Drawing-related functions
    fn clear_background = "ClearBackground"(Color);
    fn begin_drawing = "BeginDrawing"();
    fn end_drawing = "EndDrawing"();
    fn begin_mode_2d = "BeginMode2D"(Camera2D);
    fn end_mode_2d = "EndMode2D"();
    fn begin_mode_3d = "BeginMode3D"(Camera3D);
    fn end_mode_3d = "EndMode3D"();
    fn begin_texture_mode = "BeginTextureMode"(RenderTexture2D);
    fn end_texture_mode = "EndTextureMode"();

    // Screen-space-related functions
    fn get_mouse_ray = "GetMouseRay"(Vector2, Camera3D) -> Ray;
    fn get_world_to_screen = "GetWorldToScreen"(Vector3, Camera3D) -> Vector2;
    fn get_camera_matrix = "GetCameraMatrix"(Camera3D) -> Matrix;

    // Timing-related functions
    fn set_target_fps = "SetTargetFPS"(c_int);
    fn get_fps = "GetFPS"() -> c_int;
    fn get_frame_time = "GetFrameTime"() -> f32;
    fn get_time = "GetTime"() -> f64;

    // Color-related functions
    fn color_to_int = "ColorToInt"(Color) -> c_int;
    fn color_normalize = "ColorNormalize"(Color) -> Vector4;
    fn color_to_hsv = "ColorToHSV"(Color) -> Vector3;
    fn color_from_hsv = "ColorFromHSV"(Vector3) -> Color;
    fn get_color = "GetColor"(c_int) -> Color;
    fn fade = "Fade"(Color, f32) -> Color;

    // Misc. functions
    fn set_config_flags = "SetConfigFlags"(u8);
    fn set_trace_log_level = "SetTraceLogLevel"(c_int);
    fn set_trace_log_exit = "SetTraceLogExit"(c_int);
    fn take_screenshot = "TakeScreenshot"(*const c_char);
    fn get_random_value = "GetRandomValue"(c_int, c_int) -> c_int;
    fn open_url = "OpenURL"(*const c_char);

    // Files management functions
    fn file_exists = "FileExists"(*const c_char) -> bool;
    fn is_file_extension = "IsFileExtension"(*const c_char, *const c_char) -> bool;
    fn get_extension = "GetExtension"(*const c_char) -> *const c_char;
    fn get_file_name = "GetFileName"(*const c_char) -> *const c_char;
    fn get_file_name_without_ext = "GetFileNameWithoutExt"(*const c_char) -> *const c_char;
    fn get_directory_path = "GetDirectoryPath"(*const c_char) -> *const c_char;
    fn get_working_directory = "GetWorkingDirectory"() -> *const c_char;
    fn get_directory_files = "GetDirectoryFiles"(*const c_char, *mut c_int) -> *mut *mut c_char;
    fn clear_directory_files = "ClearDirectoryFiles"();
    fn change_directory = "ChangeDirectory"(*const c_char) -> bool;
    fn is_file_dropped = "IsFileDropped"() -> bool;
    fn get_dropped_files = "GetDroppedFiles"(*mut c_int) -> *mut *mut c_char;
    fn clear_dropped_files = "ClearDroppedFiles"();
    fn get_file_mod_time = "GetFileModTime"(*const c_char) -> c_long;

    // Persistent storage
    fn storage_save_value = "StorageSaveValue"(c_int, c_int);
    fn storage_load_value = "StorageLoadValue"(c_int) -> c_int;

    // Input: keyboard
    fn is_key_pressed = "IsKeyPressed"(c_int) -> bool;
    fn is_key_down = "IsKeyDown"(c_int) -> bool;
    fn is_key_released = "IsKeyReleased"(c_int) -> bool;
    fn is_key_up = "IsKeyUp"(c_int) -> bool;
    fn get_key_pressed = "GetKeyPressed"() -> c_int;
    fn set_exit_key = "SetExitKey"(c_int);

    // Input: gamepad
    fn is_gamepad_available = "IsGamepadAvailable"(c_int) -> bool;
    fn is_gamepad_name = "IsGamepadName"(c_int, *const c_char) -> bool;
    fn get_gamepad_name = "GetGamepadName"(c_int) -> *const c_char;
    fn is_gamepad_button_pressed = "IsGamepadButtonPressed"(c_int, c_int) -> bool;
    fn is_gamepad_button_down = "IsGamepadButtonDown"(c_int, c_int) -> bool;
    fn is_gamepad_button_released = "IsGamepadButtonReleased"(c_int, c_int) -> bool;
    fn is_gamepad_button_up = "IsGamepadButtonUp"(c_int, c_int) -> bool;
    fn get_gamepad_button_pressed = "GetGamepadButtonPressed"() -> c_int;
    fn get_gamepad_axis_count = "GetGamepadAxisCount"(c_int) -> c_int;
    fn get_gamepad_axis_movement = "GetGamepadAxisMovement"(c_int, c_int) -> f32;

    // Input: mouse
    fn is_mouse_button_pressed = "IsMouseButtonPressed"(c_int) -> bool;
    fn is_mouse_button_down = "IsMouseButtonDown"(c_int) -> bool;
    fn is_mouse_button_released = "IsMouseButtonReleased"(c_int) -> bool;
    fn is_mouse_button_up = "IsMouseButtonUp"(c_int) -> bool;
    fn get_mouse_x = "GetMouseX"() -> c_int;
    fn get_mouse_y = "GetMouseY"() -> c_int;
    fn get_mouse_position = "GetMousePosition"() -> Vector2;
    fn set_mouse_position = "SetMousePosition"(c_int, c_int);
    fn set_mouse_offset = "SetMouseOffset"(c_int, c_int);
    fn set_mouse_scale = "SetMouseScale"(f32, f32);
    fn get_mouse_wheel_move = "GetMouseWheelMove"() -> c_int;

    // Input: touch
    fn get_touch_x = "GetTouchX"() -> c_int;
    fn get_touch_y = "GetTouchY"() -> c_int;
    fn get_touch_position = "GetTouchPosition"(c_int) -> Vector2;

    // Gestures
    fn set_gestures_enabled = "SetGesturesEnabled"(c_uint);
    fn is_gesture_detected = "IsGestureDetected"(c_int) -> bool;
    fn get_gesture_detected = "GetGestureDetected"() -> c_int;
    fn get_touch_points_count = "GetTouchPointsCount"() -> c_int;
    fn get_gesture_hold_duration = "GetGestureHoldDuration"() -> f32;
    fn get_gesture_drag_vector = "GetGestureDragVector"() -> Vector2;
    fn get_gesture_drag_angle = "GetGestureDragAngle"() -> f32;
    fn get_gesture_pinch_vector = "GetGesturePinchVector"() -> Vector2;
    fn get_gesture_pinch_angle = "GetGesturePinchAngle"() -> f32;

    // Camera system
    fn set_camera_mode = "SetCameraMode"(Camera3D, c_int);
    fn update_camera = "UpdateCamera"(*mut Camera3D);
    fn set_camera_pan_control = "SetCameraPanControl"(c_int);
    fn set_camera_alt_control = "SetCameraAltControl"(c_int);
    fn set_camera_smooth_zoom_control = "SetCameraSmoothZoomControl"(c_int);
    fn set_camera_move_controls = "SetCameraMoveControls"(c_int, c_int, c_int, c_int, c_int, c_int);

    // Basic shapes drawing
    fn draw_pixel = "DrawPixel"(c_int, c_int, Color);
    fn draw_pixel_v = "DrawPixelV"(Vector2, Color);
    fn draw_line = "DrawLine"(c_int, c_int, c_int, c_int, Color);
    fn draw_line_v = "DrawLineV"(Vector2, Vector2, Color);
    fn draw_line_ex = "DrawLineEx"(Vector2, Vector2, f32, Color);
    fn draw_line_bezier = "DrawLineBezier"(Vector2, Vector2, f32, Color);
    fn draw_line_strip = "DrawLineStrip"(*mut Vector2, c_int, Color);
    fn draw_circle = "DrawCircle"(c_int, c_int, f32, Color);
    fn draw_circle_sector = "DrawCircleSector"(Vector2, f32, c_int, c_int, c_int, Color);
    fn draw_circle_sector_lines = "DrawCircleSectorLines"(Vector2, f32, c_int, c_int, c_int, Color);
    fn draw_circle_gradient = "DrawCircleGradient"(c_int, c_int, f32, Color, Color);
    fn draw_circle_v = "DrawCircleV"(Vector2, f32, Color);
    fn draw_circle_lines = "DrawCircleLines"(c_int, c_int, f32, Color);
    fn draw_ring = "DrawRing"(Vector2, f32, f32, c_int, c_int, c_int, Color);
    fn draw_ring_lines = "DrawRingLines"(Vector2, f32, f32, c_int, c_int, c_int, Color);
    fn draw_rectangle = "DrawRectangle"(c_int, c_int, c_int, c_int, Color);
    fn draw_rectangle_v = "DrawRectangleV"(Vector2, Vector2, Color);
    fn draw_rectangle_rec = "DrawRectangleRec"(Rectangle, Color);
    fn draw_rectangle_pro = "DrawRectanglePro"(Rectangle, Vector2, f32, Color);
    fn draw_rectangle_gradient_v = "DrawRectangleGradientV"(c_int, c_int, c_int, c_int, Color, Color);
    fn draw_rectangle_gradient_h = "DrawRectangleGradientH"(c_int, c_int, c_int, c_int, Color, Color);
    fn draw_rectangle_gradient_ex = "DrawRectangleGradientEx"(Rectangle, Color, Color, Color, Color);
    fn draw_rectangle_lines = "DrawRectangleLines"(c_int, c_int, c_int, c_int, Color);
    fn draw_rectangle_lines_ex = "DrawRectangleLinesEx"(Rectangle, c_int, Color);
    fn draw_rectangle_rounded = "DrawRectangleRounded"(Rectangle, f32, c_int, Color);
    fn draw_rectangle_rounded_lines = "DrawRectangleRoundedLines"(Rectangle, f32, c_int, c_int, Color);
    fn draw_triangle = "DrawTriangle"(Vector2, Vector2, Vector2, Color);
    fn draw_triangle_lines = "DrawTriangleLines"(Vector2, Vector2, Vector2, Color);
    fn draw_triangle_fan = "DrawTriangleFan"(*mut Vector2, c_int, Color);
    fn draw_poly = "DrawPoly"(Vector2, c_int, f32, f32, Color);
    fn set_shapes_texture = "SetShapesTexture"(Texture2D, Rectangle);

    // Basic shapes collision detection
    fn check_collision_recs = "CheckCollisionRecs"(Rectangle, Rectangle) -> bool;
    fn check_collision_circles = "CheckCollisionCircles"(Vector2, f32, Vector2, f32) -> bool;
    fn check_collision_circle_rec = "CheckCollisionCircleRec"(Vector2, f32, Rectangle) -> bool;
    fn get_collision_rec = "GetCollisionRec"(Rectangle, Rectangle) -> Rectangle;
    fn check_collision_point_rec = "CheckCollisionPointRec"(Vector2, Rectangle) -> bool;
    fn check_collision_point_circle = "CheckCollisionPointCircle"(Vector2, Vector2, f32) -> bool;
    fn check_collision_point_triangle = "CheckCollisionPointTriangle"(Vector2, Vector2, Vector2, Vector2) -> bool;

    // Image/texture loading and unloading
    fn load_image = "LoadImage"(*const c_char) -> Image;
    fn load_image_raw = "LoadImageRaw"(*const c_char, c_int, c_int, c_int, c_int) -> Image;
    fn export_image = "ExportImage"(Image, *const c_char);
    fn export_image_as_code = "ExportImageAsCode"(Image, *const c_char);
    fn load_texture = "LoadTexture"(*const c_char) -> Texture2D;
    fn load_texture_from_image = "LoadTextureFromImage"(Image) -> Texture2D;
    fn load_texture_cubemap = "LoadTextureCubemap"(Image, c_int) -> Texture2D;
    fn load_render_texture = "LoadRenderTexture"(c_int, c_int) -> RenderTexture2D;
    fn unload_image = "UnloadImage"(Image);
    fn unload_texture = "UnloadTexture"(Texture2D);
    fn unload_render_texture = "UnloadRenderTexture"(RenderTexture2D);
    fn get_pixel_data_size = "GetPixelDataSize"(c_int, c_int, c_int) -> c_int;
    fn get_texture_data = "GetTextureData"(Texture2D) -> Image;
    fn get_screen_data = "GetScreenData"() -> Image;

    // Font loading and text drawing
    fn get_font_default = "GetFontDefault"() -> Font;
    fn load_font = "LoadFont"(*const c_char) -> Font;
    fn load_font_ex = "LoadFontEx"(*const c_char, c_int, *mut c_int, c_int) -> Font;
    fn load_font_from_image = "LoadFontFromImage"(Image, Color, c_int) -> Font;
    fn unload_font = "UnloadFont"(Font);
    fn draw_fps = "DrawFPS"(c_int, c_int);
    fn draw_text = "DrawText"(*const c_char, c_int, c_int, c_int, Color);
    fn draw_text_ex = "DrawTextEx"(Font, *const c_char, Vector2, f32, f32, Color);
    fn draw_text_rec = "DrawTextRec"(Font, *const c_char, Rectangle, f32, f32, bool, Color);
    fn measure_text = "MeasureText"(*const c_char, c_int) -> c_int;
    fn measure_text_ex = "MeasureTextEx"(Font, *const c_char, f32, f32) -> Vector2;
    fn get_glyph_index = "GetGlyphIndex"(Font, c_int) -> c_int;

    // 3D geometry drawing
    fn draw_line_3d = "DrawLine3D"(Vector3, Vector3, Color);
    fn draw_point_3d = "DrawPoint3D"(Vector3, Color);
    fn draw_circle_3d = "DrawCircle3D"(Vector3, f32, Vector3, f32, Color);
    fn draw_cube = "DrawCube"(Vector3, f32, f32, f32, Color);
    fn draw_cube_v = "DrawCubeV"(Vector3, Vector3, Color);
    fn draw_cube_wires = "DrawCubeWires"(Vector3, f32, f32, f32, Color);
    fn draw_cube_wires_v = "DrawCubeWiresV"(Vector3, Vector3, Color);
    fn draw_cube_texture = "DrawCubeTexture"(Texture2D, Vector3, f32, f32, f32, Color);
    fn draw_sphere = "DrawSphere"(Vector3, f32, Color);
    fn draw_sphere_ex = "DrawSphereEx"(Vector3, f32, c_int, c_int, Color);
    fn draw_sphere_wires = "DrawSphereWires"(Vector3, f32, c_int, c_int, Color);
    fn draw_cylinder = "DrawCylinder"(Vector3, f32, f32, f32, c_int, Color);
    fn draw_cylinder_wires = "DrawCylinderWires"(Vector3, f32, f32, f32, c_int, Color);
    fn draw_plane = "DrawPlane"(Vector3, Vector2, Color);
    fn draw_ray = "DrawRay"(Ray, Color);
    fn draw_grid = "DrawGrid"(c_int, f32);
    fn draw_gizmo = "DrawGizmo"(Vector3);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for symbol in RaylibApi::SYMBOLS {
            assert!(seen.insert(symbol), "duplicate native symbol {symbol}");
        }
    }

    #[test]
    fn load_reports_unopenable_library() {
        let missing = Path::new("/nonexistent/libraylib-missing.so");
        match RaylibApi::load(missing) {
            Err(BindError::LibraryOpen { path, .. }) => {
                assert_eq!(path, missing.to_path_buf())
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("load of a nonexistent path succeeded"),
        }
    }
}
