//! The script host: one Lua state wired to one resolved native library.
//!
//! Everything runs on the caller's thread.  Scripts drive their own frame
//! loop through the exported calls, so there is no scheduler here; a
//! script that never returns from its loop is simply a running game.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;
use mlua::Lua;

use crate::bindings;
use crate::ffi::api::RaylibApi;

/// Host construction options.
#[derive(Debug, Default)]
pub struct HostConfig {
    /// Explicit shared library path.  Falls back to the `RAYLIB_LUA_LIBRARY`
    /// environment variable, then the platform soname.
    pub library: Option<PathBuf>,
}

pub struct ScriptHost {
    lua: Lua,
}

impl ScriptHost {
    /// Opens the native library, resolves the symbol table, and registers
    /// the `rl` module in a fresh Lua state.  The registered closures keep
    /// the library alive for the life of the state.
    pub fn new(config: HostConfig) -> Result<Self> {
        let api = Arc::new(
            RaylibApi::load_default(config.library.as_deref())
                .context("failed to bind the raylib library")?,
        );
        let lua = Lua::new();
        bindings::register(&lua, api).context("failed to register the rl module")?;
        Ok(Self { lua })
    }

    /// The Lua state, for callers embedding the host.
    pub fn lua(&self) -> &Lua {
        &self.lua
    }

    /// Runs a script from source, reporting Lua errors with `name` as the
    /// chunk label.
    pub fn run_source(&self, name: &str, source: &str) -> Result<()> {
        debug!("running script chunk {name}");
        self.lua
            .load(source)
            .set_name(name)
            .exec()
            .with_context(|| format!("script {name} failed"))
    }
}
