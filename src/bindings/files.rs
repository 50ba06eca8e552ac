//! Filesystem queries, dropped-file handling, and persistent storage.
//!
//! `getDirectoryFiles` and `getDroppedFiles` copy the native string list
//! into a Lua sequence and release it with the matching `Clear*` call
//! before returning, so scripts never hold a pointer into freed memory.

use std::os::raw::{c_char, c_int};
use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use crate::ffi::api::RaylibApi;
use crate::marshal::{cstring, string_from_native};

pub(super) const EXPORTS: &[(&str, &str)] = &[
    ("fileExists", "FileExists"),
    ("isFileExtension", "IsFileExtension"),
    ("getExtension", "GetExtension"),
    ("getFileName", "GetFileName"),
    ("getFileNameWithoutExt", "GetFileNameWithoutExt"),
    ("getDirectoryPath", "GetDirectoryPath"),
    ("getWorkingDirectory", "GetWorkingDirectory"),
    ("getDirectoryFiles", "GetDirectoryFiles"),
    ("changeDirectory", "ChangeDirectory"),
    ("isFileDropped", "IsFileDropped"),
    ("getDroppedFiles", "GetDroppedFiles"),
    ("getFileModTime", "GetFileModTime"),
    ("storageSaveValue", "StorageSaveValue"),
    ("storageLoadValue", "StorageLoadValue"),
];

/// Copies `count` entries out of a native `char **` list.
unsafe fn copy_string_list(list: *mut *mut c_char, count: c_int) -> Vec<String> {
    if list.is_null() {
        return Vec::new();
    }
    let mut entries = Vec::with_capacity(count.max(0) as usize);
    for i in 0..count.max(0) as isize {
        entries.push(string_from_native(*list.offset(i)));
    }
    entries
}

pub(super) fn register(lua: &Lua, rl: &Table, api: &Arc<RaylibApi>) -> LuaResult<()> {
    let a = Arc::clone(api);
    rl.set(
        "fileExists",
        lua.create_function(move |_, file_name: String| {
            let file_name = cstring(&file_name)?;
            Ok(unsafe { (a.file_exists)(file_name.as_ptr()) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isFileExtension",
        lua.create_function(move |_, (file_name, ext): (String, String)| {
            let file_name = cstring(&file_name)?;
            let ext = cstring(&ext)?;
            Ok(unsafe { (a.is_file_extension)(file_name.as_ptr(), ext.as_ptr()) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getExtension",
        lua.create_function(move |_, file_name: String| {
            let file_name = cstring(&file_name)?;
            Ok(unsafe { string_from_native((a.get_extension)(file_name.as_ptr())) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getFileName",
        lua.create_function(move |_, path: String| {
            let path = cstring(&path)?;
            Ok(unsafe { string_from_native((a.get_file_name)(path.as_ptr())) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getFileNameWithoutExt",
        lua.create_function(move |_, path: String| {
            let path = cstring(&path)?;
            Ok(unsafe { string_from_native((a.get_file_name_without_ext)(path.as_ptr())) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getDirectoryPath",
        lua.create_function(move |_, file_name: String| {
            let file_name = cstring(&file_name)?;
            Ok(unsafe { string_from_native((a.get_directory_path)(file_name.as_ptr())) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getWorkingDirectory",
        lua.create_function(move |_, ()| {
            Ok(unsafe { string_from_native((a.get_working_directory)()) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getDirectoryFiles",
        lua.create_function(move |_, dir_path: String| {
            let dir_path = cstring(&dir_path)?;
            let mut count: c_int = 0;
            let entries = unsafe {
                let list = (a.get_directory_files)(dir_path.as_ptr(), &mut count);
                let entries = copy_string_list(list, count);
                (a.clear_directory_files)();
                entries
            };
            Ok(entries)
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "changeDirectory",
        lua.create_function(move |_, dir: String| {
            let dir = cstring(&dir)?;
            Ok(unsafe { (a.change_directory)(dir.as_ptr()) })
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "isFileDropped",
        lua.create_function(move |_, ()| Ok(unsafe { (a.is_file_dropped)() }))?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getDroppedFiles",
        lua.create_function(move |_, ()| {
            let mut count: c_int = 0;
            let entries = unsafe {
                let list = (a.get_dropped_files)(&mut count);
                let entries = copy_string_list(list, count);
                (a.clear_dropped_files)();
                entries
            };
            Ok(entries)
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "getFileModTime",
        lua.create_function(move |_, file_name: String| {
            let file_name = cstring(&file_name)?;
            Ok(unsafe { (a.get_file_mod_time)(file_name.as_ptr()) } as i64)
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "storageSaveValue",
        lua.create_function(move |_, (position, value): (i32, i32)| {
            unsafe { (a.storage_save_value)(position, value) };
            Ok(())
        })?,
    )?;

    let a = Arc::clone(api);
    rl.set(
        "storageLoadValue",
        lua.create_function(move |_, position: i32| {
            Ok(unsafe { (a.storage_load_value)(position) })
        })?,
    )?;

    Ok(())
}
