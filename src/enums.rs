//! Enumerated constant tables mirrored from the native headers.
//!
//! Every group is a closed set of name→integer pairs baked in at bind time.
//! Members that share a value in the native library (`LOC_MAP_DIFFUSE` /
//! `LOC_MAP_ALBEDO`, `CUBEMAP_CROSS_FOUR_BY_THREE` / `CUBEMAP_PANORAMA`,
//! ...) are modeled as one canonical constant with accepted alias names, so
//! the pairs cannot drift apart if the native values ever change.

use mlua::{Lua, Result as LuaResult, Table};

/// A named, closed table of integer constants.
pub struct EnumGroup {
    pub name: &'static str,
    pub entries: &'static [(&'static str, i32)],
}

// Canonical constants for the duplicate-valued members.
pub const LOC_MAP_DIFFUSE: i32 = 14;
pub const LOC_MAP_ALBEDO: i32 = LOC_MAP_DIFFUSE;
pub const LOC_MAP_SPECULAR: i32 = 15;
pub const LOC_MAP_METALNESS: i32 = LOC_MAP_SPECULAR;
pub const MAP_DIFFUSE: i32 = 0;
pub const MAP_ALBEDO: i32 = MAP_DIFFUSE;
pub const MAP_SPECULAR: i32 = 1;
pub const MAP_METALNESS: i32 = MAP_SPECULAR;
pub const CUBEMAP_CROSS_FOUR_BY_THREE: i32 = 4;
pub const CUBEMAP_PANORAMA: i32 = CUBEMAP_CROSS_FOUR_BY_THREE;

/// Alias name → canonical name, for the uniqueness test below.
pub static ALIASES: &[(&str, &str)] = &[
    ("LOC_MAP_ALBEDO", "LOC_MAP_DIFFUSE"),
    ("LOC_MAP_METALNESS", "LOC_MAP_SPECULAR"),
    ("MAP_ALBEDO", "MAP_DIFFUSE"),
    ("MAP_METALNESS", "MAP_SPECULAR"),
    ("CUBEMAP_PANORAMA", "CUBEMAP_CROSS_FOUR_BY_THREE"),
];

pub static GROUPS: &[EnumGroup] = &[
    EnumGroup {
        name: "ConfigFlag",
        entries: &[
            ("FLAG_SHOW_LOGO", 1),
            ("FLAG_FULLSCREEN_MODE", 2),
            ("FLAG_WINDOW_RESIZABLE", 4),
            ("FLAG_WINDOW_UNDECORATED", 8),
            ("FLAG_WINDOW_TRANSPARENT", 16),
            ("FLAG_MSAA_4X_HINT", 32),
            ("FLAG_VSYNC_HINT", 64),
            ("FLAG_WINDOW_HIDDEN", 128),
        ],
    },
    EnumGroup {
        name: "TraceLogType",
        entries: &[
            ("LOG_ALL", 0),
            ("LOG_TRACE", 1),
            ("LOG_DEBUG", 2),
            ("LOG_INFO", 3),
            ("LOG_WARNING", 4),
            ("LOG_ERROR", 5),
            ("LOG_FATAL", 6),
            ("LOG_NONE", 7),
        ],
    },
    EnumGroup {
        name: "KeyboardKey",
        entries: &[
            ("KEY_APOSTROPHE", 39),
            ("KEY_COMMA", 44),
            ("KEY_MINUS", 45),
            ("KEY_PERIOD", 46),
            ("KEY_SLASH", 47),
            ("KEY_ZERO", 48),
            ("KEY_ONE", 49),
            ("KEY_TWO", 50),
            ("KEY_THREE", 51),
            ("KEY_FOUR", 52),
            ("KEY_FIVE", 53),
            ("KEY_SIX", 54),
            ("KEY_SEVEN", 55),
            ("KEY_EIGHT", 56),
            ("KEY_NINE", 57),
            ("KEY_SEMICOLON", 59),
            ("KEY_EQUAL", 61),
            ("KEY_A", 65),
            ("KEY_B", 66),
            ("KEY_C", 67),
            ("KEY_D", 68),
            ("KEY_E", 69),
            ("KEY_F", 70),
            ("KEY_G", 71),
            ("KEY_H", 72),
            ("KEY_I", 73),
            ("KEY_J", 74),
            ("KEY_K", 75),
            ("KEY_L", 76),
            ("KEY_M", 77),
            ("KEY_N", 78),
            ("KEY_O", 79),
            ("KEY_P", 80),
            ("KEY_Q", 81),
            ("KEY_R", 82),
            ("KEY_S", 83),
            ("KEY_T", 84),
            ("KEY_U", 85),
            ("KEY_V", 86),
            ("KEY_W", 87),
            ("KEY_X", 88),
            ("KEY_Y", 89),
            ("KEY_Z", 90),
            ("KEY_SPACE", 32),
            ("KEY_ESCAPE", 256),
            ("KEY_ENTER", 257),
            ("KEY_TAB", 258),
            ("KEY_BACKSPACE", 259),
            ("KEY_INSERT", 260),
            ("KEY_DELETE", 261),
            ("KEY_RIGHT", 262),
            ("KEY_LEFT", 263),
            ("KEY_DOWN", 264),
            ("KEY_UP", 265),
            ("KEY_PAGE_UP", 266),
            ("KEY_PAGE_DOWN", 267),
            ("KEY_HOME", 268),
            ("KEY_END", 269),
            ("KEY_CAPS_LOCK", 280),
            ("KEY_SCROLL_LOCK", 281),
            ("KEY_NUM_LOCK", 282),
            ("KEY_PRINT_SCREEN", 283),
            ("KEY_PAUSE", 284),
            ("KEY_F1", 290),
            ("KEY_F2", 291),
            ("KEY_F3", 292),
            ("KEY_F4", 293),
            ("KEY_F5", 294),
            ("KEY_F6", 295),
            ("KEY_F7", 296),
            ("KEY_F8", 297),
            ("KEY_F9", 298),
            ("KEY_F10", 299),
            ("KEY_F11", 300),
            ("KEY_F12", 301),
            ("KEY_LEFT_SHIFT", 340),
            ("KEY_LEFT_CONTROL", 341),
            ("KEY_LEFT_ALT", 342),
            ("KEY_LEFT_SUPER", 343),
            ("KEY_RIGHT_SHIFT", 344),
            ("KEY_RIGHT_CONTROL", 345),
            ("KEY_RIGHT_ALT", 346),
            ("KEY_RIGHT_SUPER", 347),
            ("KEY_KB_MENU", 348),
            ("KEY_LEFT_BRACKET", 91),
            ("KEY_BACKSLASH", 92),
            ("KEY_RIGHT_BRACKET", 93),
            ("KEY_GRAVE", 96),
            ("KEY_KP_0", 320),
            ("KEY_KP_1", 321),
            ("KEY_KP_2", 322),
            ("KEY_KP_3", 323),
            ("KEY_KP_4", 324),
            ("KEY_KP_5", 325),
            ("KEY_KP_6", 326),
            ("KEY_KP_7", 327),
            ("KEY_KP_8", 328),
            ("KEY_KP_9", 329),
            ("KEY_KP_DECIMAL", 330),
            ("KEY_KP_DIVIDE", 331),
            ("KEY_KP_MULTIPLY", 332),
            ("KEY_KP_SUBTRACT", 333),
            ("KEY_KP_ADD", 334),
            ("KEY_KP_ENTER", 335),
            ("KEY_KP_EQUAL", 336),
        ],
    },
    EnumGroup {
        name: "MouseButton",
        entries: &[
            ("MOUSE_LEFT_BUTTON", 0),
            ("MOUSE_RIGHT_BUTTON", 1),
            ("MOUSE_MIDDLE_BUTTON", 2),
        ],
    },
    EnumGroup {
        name: "GamepadNumber",
        entries: &[
            ("GAMEPAD_PLAYER1", 0),
            ("GAMEPAD_PLAYER2", 1),
            ("GAMEPAD_PLAYER3", 2),
            ("GAMEPAD_PLAYER4", 3),
        ],
    },
    EnumGroup {
        name: "GamepadButton",
        entries: &[
            ("GAMEPAD_BUTTON_UNKNOWN", 0),
            ("GAMEPAD_BUTTON_LEFT_FACE_UP", 1),
            ("GAMEPAD_BUTTON_LEFT_FACE_RIGHT", 2),
            ("GAMEPAD_BUTTON_LEFT_FACE_DOWN", 3),
            ("GAMEPAD_BUTTON_LEFT_FACE_LEFT", 4),
            ("GAMEPAD_BUTTON_RIGHT_FACE_UP", 5),
            ("GAMEPAD_BUTTON_RIGHT_FACE_RIGHT", 6),
            ("GAMEPAD_BUTTON_RIGHT_FACE_DOWN", 7),
            ("GAMEPAD_BUTTON_RIGHT_FACE_LEFT", 8),
            ("GAMEPAD_BUTTON_LEFT_TRIGGER_1", 9),
            ("GAMEPAD_BUTTON_LEFT_TRIGGER_2", 10),
            ("GAMEPAD_BUTTON_RIGHT_TRIGGER_1", 11),
            ("GAMEPAD_BUTTON_RIGHT_TRIGGER_2", 12),
            ("GAMEPAD_BUTTON_MIDDLE_LEFT", 13),
            ("GAMEPAD_BUTTON_MIDDLE", 14),
            ("GAMEPAD_BUTTON_MIDDLE_RIGHT", 15),
            ("GAMEPAD_BUTTON_LEFT_THUMB", 16),
            ("GAMEPAD_BUTTON_RIGHT_THUMB", 17),
        ],
    },
    EnumGroup {
        name: "ShaderLocationIndex",
        entries: &[
            ("LOC_VERTEX_POSITION", 0),
            ("LOC_VERTEX_TEXCOORD01", 1),
            ("LOC_VERTEX_TEXCOORD02", 2),
            ("LOC_VERTEX_NORMAL", 3),
            ("LOC_VERTEX_TANGENT", 4),
            ("LOC_VERTEX_COLOR", 5),
            ("LOC_MATRIX_MVP", 6),
            ("LOC_MATRIX_MODEL", 7),
            ("LOC_MATRIX_VIEW", 8),
            ("LOC_MATRIX_PROJECTION", 9),
            ("LOC_VECTOR_VIEW", 10),
            ("LOC_COLOR_DIFFUSE", 11),
            ("LOC_COLOR_SPECULAR", 12),
            ("LOC_COLOR_AMBIENT", 13),
            ("LOC_MAP_DIFFUSE", LOC_MAP_DIFFUSE),
            ("LOC_MAP_ALBEDO", LOC_MAP_ALBEDO),
            ("LOC_MAP_SPECULAR", LOC_MAP_SPECULAR),
            ("LOC_MAP_METALNESS", LOC_MAP_METALNESS),
            ("LOC_MAP_NORMAL", 16),
            ("LOC_MAP_ROUGHNESS", 17),
            ("LOC_MAP_OCCLUSION", 18),
            ("LOC_MAP_EMISSION", 19),
            ("LOC_MAP_HEIGHT", 20),
            ("LOC_MAP_CUBEMAP", 21),
            ("LOC_MAP_IRRADIANCE", 22),
            ("LOC_MAP_PREFILTER", 23),
            ("LOC_MAP_BRDF", 24),
        ],
    },
    EnumGroup {
        name: "ShaderUniformDataType",
        entries: &[
            ("UNIFORM_FLOAT", 0),
            ("UNIFORM_VEC2", 1),
            ("UNIFORM_VEC3", 2),
            ("UNIFORM_VEC4", 3),
            ("UNIFORM_INT", 4),
            ("UNIFORM_IVEC2", 5),
            ("UNIFORM_IVEC3", 6),
            ("UNIFORM_IVEC4", 7),
            ("UNIFORM_SAMPLER2D", 8),
        ],
    },
    EnumGroup {
        name: "MaterialMapType",
        entries: &[
            ("MAP_DIFFUSE", MAP_DIFFUSE),
            ("MAP_ALBEDO", MAP_ALBEDO),
            ("MAP_SPECULAR", MAP_SPECULAR),
            ("MAP_METALNESS", MAP_METALNESS),
            ("MAP_NORMAL", 2),
            ("MAP_ROUGHNESS", 3),
            ("MAP_OCCLUSION", 4),
            ("MAP_EMISSION", 5),
            ("MAP_HEIGHT", 6),
            ("MAP_CUBEMAP", 7),
            ("MAP_IRRADIANCE", 8),
            ("MAP_PREFILTER", 9),
            ("MAP_BRDF", 10),
        ],
    },
    EnumGroup {
        name: "PixelFormat",
        entries: &[
            ("UNCOMPRESSED_GRAYSCALE", 1),
            ("UNCOMPRESSED_GRAY_ALPHA", 2),
            ("UNCOMPRESSED_R5G6B5", 3),
            ("UNCOMPRESSED_R8G8B8", 4),
            ("UNCOMPRESSED_R5G5B5A1", 5),
            ("UNCOMPRESSED_R4G4B4A4", 6),
            ("UNCOMPRESSED_R8G8B8A8", 7),
            ("UNCOMPRESSED_R32", 8),
            ("UNCOMPRESSED_R32G32B32", 9),
            ("UNCOMPRESSED_R32G32B32A32", 10),
            ("COMPRESSED_DXT1_RGB", 11),
            ("COMPRESSED_DXT1_RGBA", 12),
            ("COMPRESSED_DXT3_RGBA", 13),
            ("COMPRESSED_DXT5_RGBA", 14),
            ("COMPRESSED_ETC1_RGB", 15),
            ("COMPRESSED_ETC2_RGB", 16),
            ("COMPRESSED_ETC2_EAC_RGBA", 17),
            ("COMPRESSED_PVRT_RGB", 18),
            ("COMPRESSED_PVRT_RGBA", 19),
            ("COMPRESSED_ASTC_4x4_RGBA", 20),
            ("COMPRESSED_ASTC_8x8_RGBA", 21),
        ],
    },
    EnumGroup {
        name: "TextureFilterMode",
        entries: &[
            ("FILTER_POINT", 1),
            ("FILTER_BILINEAR", 2),
            ("FILTER_TRILINEAR", 3),
            ("FILTER_ANISOTROPIC_4X", 4),
            ("FILTER_ANISOTROPIC_8X", 5),
            ("FILTER_ANISOTROPIC_16X", 6),
        ],
    },
    EnumGroup {
        name: "CubemapLayoutType",
        entries: &[
            ("CUBEMAP_AUTO_DETECT", 0),
            ("CUBEMAP_LINE_VERTICAL", 1),
            ("CUBEMAP_LINE_HORIZONTAL", 2),
            ("CUBEMAP_CROSS_THREE_BY_FOUR", 3),
            ("CUBEMAP_CROSS_FOUR_BY_THREE", CUBEMAP_CROSS_FOUR_BY_THREE),
            ("CUBEMAP_PANORAMA", CUBEMAP_PANORAMA),
        ],
    },
    EnumGroup {
        name: "TextureWrapMode",
        entries: &[
            ("WRAP_REPEAT", 0),
            ("WRAP_CLAMP", 1),
            ("WRAP_MIRROR_REPEAT", 2),
            ("WRAP_MIRROR_CLAMP", 3),
        ],
    },
    EnumGroup {
        name: "FontType",
        entries: &[
            ("FONT_DEFAULT", 0),
            ("FONT_BITMAP", 1),
            ("FONT_SDF", 2),
        ],
    },
    EnumGroup {
        name: "BlendMode",
        entries: &[
            ("BLEND_ALPHA", 0),
            ("BLEND_ADDITIVE", 1),
            ("BLEND_MULTIPLIED", 2),
        ],
    },
    EnumGroup {
        name: "GestureType",
        entries: &[
            ("GESTURE_NONE", 0),
            ("GESTURE_TAP", 1),
            ("GESTURE_DOUBLETAP", 2),
            ("GESTURE_HOLD", 4),
            ("GESTURE_DRAG", 8),
            ("GESTURE_SWIPE_RIGHT", 16),
            ("GESTURE_SWIPE_LEFT", 32),
            ("GESTURE_SWIPE_UP", 64),
            ("GESTURE_SWIPE_DOWN", 128),
            ("GESTURE_PINCH_IN", 256),
            ("GESTURE_PINCH_OUT", 512),
        ],
    },
    EnumGroup {
        name: "CameraMode",
        entries: &[
            ("CAMERA_CUSTOM", 0),
            ("CAMERA_FREE", 1),
            ("CAMERA_ORBITAL", 2),
            ("CAMERA_FIRST_PERSON", 3),
            ("CAMERA_THIRD_PERSON", 4),
        ],
    },
    EnumGroup {
        name: "CameraType",
        entries: &[
            ("CAMERA_PERSPECTIVE", 0),
            ("CAMERA_ORTHOGRAPHIC", 1),
        ],
    },
    EnumGroup {
        name: "NPatchType",
        entries: &[
            ("NPT_9PATCH", 0),
            ("NPT_3PATCH_VERTICAL", 1),
            ("NPT_3PATCH_HORIZONTAL", 2),
        ],
    },
];

/// Installs every constant group as a nested table on `target`.
pub fn register(lua: &Lua, target: &Table) -> LuaResult<()> {
    for group in GROUPS {
        let table = lua.create_table_with_capacity(0, group.entries.len())?;
        for (name, value) in group.entries {
            table.set(*name, *value)?;
        }
        target.set(group.name, table)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn group(name: &str) -> &'static EnumGroup {
        GROUPS
            .iter()
            .find(|group| group.name == name)
            .unwrap_or_else(|| panic!("missing group {name}"))
    }

    fn value(group_name: &str, entry: &str) -> i32 {
        group(group_name)
            .entries
            .iter()
            .find(|(name, _)| *name == entry)
            .unwrap_or_else(|| panic!("missing entry {entry}"))
            .1
    }

    #[test]
    fn values_match_native_headers() {
        assert_eq!(value("KeyboardKey", "KEY_A"), 65);
        assert_eq!(value("KeyboardKey", "KEY_SPACE"), 32);
        assert_eq!(value("KeyboardKey", "KEY_KP_EQUAL"), 336);
        assert_eq!(value("ConfigFlag", "FLAG_FULLSCREEN_MODE"), 2);
        assert_eq!(value("ConfigFlag", "FLAG_WINDOW_HIDDEN"), 128);
        assert_eq!(value("MouseButton", "MOUSE_MIDDLE_BUTTON"), 2);
        assert_eq!(value("GestureType", "GESTURE_PINCH_OUT"), 512);
        assert_eq!(value("PixelFormat", "COMPRESSED_ASTC_8x8_RGBA"), 21);
        assert_eq!(value("TraceLogType", "LOG_NONE"), 7);
    }

    #[test]
    fn aliases_share_the_canonical_value() {
        for (alias, canonical) in ALIASES {
            let shared: Vec<i32> = GROUPS
                .iter()
                .flat_map(|group| group.entries)
                .filter(|(name, _)| name == alias || name == canonical)
                .map(|(_, value)| *value)
                .collect();
            assert_eq!(shared.len(), 2, "{alias}/{canonical} not registered");
            assert_eq!(shared[0], shared[1], "{alias} diverged from {canonical}");
        }
    }

    #[test]
    fn entry_names_are_unique_within_groups() {
        let mut group_names = HashSet::new();
        for group in GROUPS {
            assert!(group_names.insert(group.name));
            let mut names = HashSet::new();
            for (name, _) in group.entries {
                assert!(names.insert(name), "{} duplicated in {}", name, group.name);
            }
        }
    }

    #[test]
    fn values_are_unique_except_documented_aliases() {
        let aliased: HashSet<&str> = ALIASES
            .iter()
            .flat_map(|(alias, canonical)| [*alias, *canonical])
            .collect();
        for group in GROUPS {
            let mut seen: HashMap<i32, &str> = HashMap::new();
            for (name, value) in group.entries {
                if let Some(existing) = seen.insert(*value, name) {
                    assert!(
                        aliased.contains(name) && aliased.contains(existing),
                        "{} and {} silently share value {} in {}",
                        existing,
                        name,
                        value,
                        group.name
                    );
                }
            }
        }
    }

    #[test]
    fn register_installs_nested_tables() {
        let lua = Lua::new();
        let target = lua.create_table().unwrap();
        register(&lua, &target).unwrap();
        lua.globals().set("rl", target).unwrap();

        let (key_a, vsync, panorama, cross): (i32, i32, i32, i32) = lua
            .load(
                r#"
                return rl.KeyboardKey.KEY_A,
                       rl.ConfigFlag.FLAG_VSYNC_HINT,
                       rl.CubemapLayoutType.CUBEMAP_PANORAMA,
                       rl.CubemapLayoutType.CUBEMAP_CROSS_FOUR_BY_THREE
            "#,
            )
            .eval()
            .unwrap();
        assert_eq!(key_a, 65);
        assert_eq!(vsync, 64);
        assert_eq!(panorama, cross);
    }
}
