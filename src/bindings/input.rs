//! Input polling: keyboard, gamepad, mouse, touch, and gestures.

use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::marshal::{cstring, string_from_native};

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("isKeyPressed", "IsKeyPressed"),
    ("isKeyDown", "IsKeyDown"),
    ("isKeyReleased", "IsKeyReleased"),
    ("isKeyUp", "IsKeyUp"),
    ("getKeyPressed", "GetKeyPressed"),
    ("setExitKey", "SetExitKey"),
    ("isGamepadAvailable", "IsGamepadAvailable"),
    ("isGamepadName", "IsGamepadName"),
    ("getGamepadName", "GetGamepadName"),
    ("isGamepadButtonPressed", "IsGamepadButtonPressed"),
    ("isGamepadButtonDown", "IsGamepadButtonDown"),
    ("isGamepadButtonReleased", "IsGamepadButtonReleased"),
    ("isGamepadButtonUp", "IsGamepadButtonUp"),
    ("getGamepadButtonPressed", "GetGamepadButtonPressed"),
    ("getGamepadAxisCount", "GetGamepadAxisCount"),
    ("getGamepadAxisMovement", "GetGamepadAxisMovement"),
    ("isMouseButtonPressed", "IsMouseButtonPressed"),
    ("isMouseButtonDown", "IsMouseButtonDown"),
    ("isMouseButtonReleased", "IsMouseButtonReleased"),
    ("isMouseButtonUp", "IsMouseButtonUp"),
    ("getMouseX", "GetMouseX"),
    ("getMouseY", "GetMouseY"),
    ("getMousePosition", "GetMousePosition"),
    ("setMousePosition", "SetMousePosition"),
    ("setMouseOffset", "SetMouseOffset"),
    ("setMouseScale", "SetMouseScale"),
    ("getMouseWheelMove", "GetMouseWheelMove"),
    ("getTouchX", "GetTouchX"),
    ("getTouchY", "GetTouchY"),
    ("getTouchPosition", "GetTouchPosition"),
    ("setGesturesEnabled", "SetGesturesEnabled"),
    ("isGestureDetected", "IsGestureDetected"),
    ("getGestureDetected", "GetGestureDetected"),
    ("getTouchPointsCount", "GetTouchPointsCount"),
    ("getGestureHoldDuration", "GetGestureHoldDuration"),
    ("getGestureDragVector", "GetGestureDragVector"),
    ("getGestureDragAngle", "GetGestureDragAngle"),
    ("getGesturePinchVector", "GetGesturePinchVector"),
    ("getGesturePinchAngle", "GetGesturePinchAngle"),
];

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    // Keyboard
    let a = Arc::clone(api);
    rl.set(
        "isKeyPressed",
        lua.create_function(move |_, key: i32| Ok(unsafe { (a.is_key_pressed)(key) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isKeyDown",
        lua.create_function(move |_, key: i32| Ok(unsafe { (a.is_key_down)(key) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isKeyReleased",
        lua.create_function(move |_, key: i32| Ok(unsafe { (a.is_key_released)(key) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isKeyUp",
        lua.create_function(move |_, key: i32| Ok(unsafe { (a.is_key_up)(key) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getKeyPressed",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_key_pressed)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setExitKey",
        lua.create_function(move |_, key: i32| {
            unsafe { (a.set_exit_key)(key) };
            Ok(())
        })?,
    )?;

    // Gamepad
    let a = Arc::clone(api);
    rl.set(
        "isGamepadAvailable",
        lua.create_function(move |_, gamepad: i32| {
            Ok(unsafe { (a.is_gamepad_available)(gamepad) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isGamepadName",
        lua.create_function(move |_, (gamepad, name): (i32, String)| {
            let name = cstring(&name)?;
            Ok(unsafe { (a.is_gamepad_name)(gamepad, name.as_ptr()) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGamepadName",
        lua.create_function(move |_, gamepad: i32| {
            Ok(unsafe { string_from_native((a.get_gamepad_name)(gamepad)) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isGamepadButtonPressed",
        lua.create_function(move |_, (gamepad, button): (i32, i32)| {
            Ok(unsafe { (a.is_gamepad_button_pressed)(gamepad, button) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isGamepadButtonDown",
        lua.create_function(move |_, (gamepad, button): (i32, i32)| {
            Ok(unsafe { (a.is_gamepad_button_down)(gamepad, button) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isGamepadButtonReleased",
        lua.create_function(move |_, (gamepad, button): (i32, i32)| {
            Ok(unsafe { (a.is_gamepad_button_released)(gamepad, button) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isGamepadButtonUp",
        lua.create_function(move |_, (gamepad, button): (i32, i32)| {
            Ok(unsafe { (a.is_gamepad_button_up)(gamepad, button) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGamepadButtonPressed",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_gamepad_button_pressed)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGamepadAxisCount",
        lua.create_function(move |_, gamepad: i32| {
            Ok(unsafe { (a.get_gamepad_axis_count)(gamepad) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGamepadAxisMovement",
        lua.create_function(move |_, (gamepad, axis): (i32, i32)| {
            Ok(unsafe { (a.get_gamepad_axis_movement)(gamepad, axis) })
        })?,
    )?;

    // Mouse
    let a = Arc::clone(api);
    rl.set(
        "isMouseButtonPressed",
        lua.create_function(move |_, button: i32| {
            Ok(unsafe { (a.is_mouse_button_pressed)(button) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isMouseButtonDown",
        lua.create_function(move |_, button: i32| {
            Ok(unsafe { (a.is_mouse_button_down)(button) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isMouseButtonReleased",
        lua.create_function(move |_, button: i32| {
            Ok(unsafe { (a.is_mouse_button_released)(button) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isMouseButtonUp",
        lua.create_function(move |_, button: i32| Ok(unsafe { (a.is_mouse_button_up)(button) }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMouseX",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_mouse_x)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMouseY",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_mouse_y)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMousePosition",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_mouse_position)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setMousePosition",
        lua.create_function(move |_, (x, y): (i32, i32)| {
            unsafe { (a.set_mouse_position)(x, y) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setMouseOffset",
        lua.create_function(move |_, (offset_x, offset_y): (i32, i32)| {
            unsafe { (a.set_mouse_offset)(offset_x, offset_y) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "setMouseScale",
        lua.create_function(move |_, (scale_x, scale_y): (f32, f32)| {
            unsafe { (a.set_mouse_scale)(scale_x, scale_y) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getMouseWheelMove",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_mouse_wheel_move)() }))?,
    )?;

    // Touch
    let a = Arc::clone(api);
    rl.set(
        "getTouchX",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_touch_x)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getTouchY",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_touch_y)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getTouchPosition",
        lua.create_function(move |_, index: i32| Ok(unsafe { (a.get_touch_position)(index) }))?,
    )?;

    // Gestures
    let a = Arc::clone(api);
    rl.set(
        "setGesturesEnabled",
        lua.create_function(move |_, flags: u32| {
            unsafe { (a.set_gestures_enabled)(flags) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isGestureDetected",
        lua.create_function(move |_, gesture: i32| {
            Ok(unsafe { (a.is_gesture_detected)(gesture) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGestureDetected",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_gesture_detected)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getTouchPointsCount",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_touch_points_count)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGestureHoldDuration",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_gesture_hold_duration)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGestureDragVector",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_gesture_drag_vector)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGestureDragAngle",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_gesture_drag_angle)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGesturePinchVector",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_gesture_pinch_vector)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getGesturePinchAngle",
        lua.create_function(move |_, ()| Ok(unsafe { (a.get_gesture_pinch_angle)() }))?,
    )?;

    Ok(())
}
