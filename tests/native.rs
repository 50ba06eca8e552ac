//! Integration tests against a real raylib shared library.
//!
//! These exercise the subset of calls that work without a window.  When no
//! compatible library can be bound (the usual CI situation), every test
//! skips instead of failing, keeping the suite hermetic.

use std::io::Write;

use raylib_lua::{HostConfig, ScriptHost};

fn try_host() -> Option<ScriptHost> {
    match ScriptHost::new(HostConfig::default()) {
        Ok(host) => Some(host),
        Err(err) => {
            eprintln!("skipping native test: {err:#}");
            None
        }
    }
}

#[test]
fn collision_rec_round_trips_bit_identically() {
    let Some(host) = try_host() else { return };
    let (x, y, w, h): (f32, f32, f32, f32) = host
        .lua()
        .load(
            r#"
            local rec = rl.getCollisionRec(
                {x = 0.5, y = 0.25, width = 10.125, height = 10.0625},
                {x = 0.5, y = 0.25, width = 10.125, height = 10.0625})
            return rec.x, rec.y, rec.width, rec.height
        "#,
        )
        .eval()
        .expect("getCollisionRec");
    // A rectangle intersected with itself comes back untouched.
    assert_eq!(x.to_bits(), 0.5f32.to_bits());
    assert_eq!(y.to_bits(), 0.25f32.to_bits());
    assert_eq!(w.to_bits(), 10.125f32.to_bits());
    assert_eq!(h.to_bits(), 10.0625f32.to_bits());
}

#[test]
fn collision_predicates_agree_with_geometry() {
    let Some(host) = try_host() else { return };
    let (overlap, separate, inside): (bool, bool, bool) = host
        .lua()
        .load(
            r#"
            return rl.checkCollisionRecs({0, 0, 10, 10}, {5, 5, 10, 10}),
                   rl.checkCollisionRecs({0, 0, 10, 10}, {20, 20, 5, 5}),
                   rl.checkCollisionPointRec({3, 3}, {0, 0, 10, 10})
        "#,
        )
        .eval()
        .expect("collision checks");
    assert!(overlap);
    assert!(!separate);
    assert!(inside);
}

#[test]
fn color_to_int_packs_rgba_bytes() {
    let Some(host) = try_host() else { return };
    let packed: i64 = host
        .lua()
        .load("return rl.colorToInt({r = 1, g = 2, b = 3, a = 4})")
        .eval()
        .expect("colorToInt");
    assert_eq!(packed, 0x01020304);
}

#[test]
fn get_color_unpacks_full_alpha_literals() {
    let Some(host) = try_host() else { return };
    let (r, g, b, a): (u8, u8, u8, u8) = host
        .lua()
        .load(
            r#"
            local c = rl.getColor(0xFF0000FF)
            return c.r, c.g, c.b, c.a
        "#,
        )
        .eval()
        .expect("getColor");
    assert_eq!((r, g, b, a), (255, 0, 0, 255));
}

#[test]
fn random_value_stays_in_range() {
    let Some(host) = try_host() else { return };
    for _ in 0..32 {
        let value: i32 = host
            .lua()
            .load("return rl.getRandomValue(3, 7)")
            .eval()
            .expect("getRandomValue");
        assert!((3..=7).contains(&value), "value {value} out of range");
    }
}

#[test]
fn file_queries_see_the_filesystem() {
    let Some(host) = try_host() else { return };
    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("temp file");
    file.write_all(b"not really a png").expect("write");
    let path = file.path().display().to_string();

    host.lua().globals().set("path", path).expect("set path");
    let (exists, is_png, missing): (bool, bool, bool) = host
        .lua()
        .load(
            r#"
            return rl.fileExists(path),
                   rl.isFileExtension(path, ".png"),
                   rl.fileExists("/nonexistent/sprite.png")
        "#,
        )
        .eval()
        .expect("file queries");
    assert!(exists);
    assert!(is_png);
    assert!(!missing);
}

#[test]
fn fade_scales_only_the_alpha_channel() {
    let Some(host) = try_host() else { return };
    let (r, g, b, a): (u8, u8, u8, u8) = host
        .lua()
        .load(
            r#"
            local c = rl.fade({r = 200, g = 100, b = 50, a = 255}, 0.5)
            return c.r, c.g, c.b, c.a
        "#,
        )
        .eval()
        .expect("fade");
    assert_eq!((r, g, b), (200, 100, 50));
    assert!(a < 255, "alpha {a} not reduced");
}
