use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use raylib_lua::{HostConfig, ScriptHost};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse()?;

    // Read the script before touching the native library, so a bad path
    // fails fast with a filesystem error instead of a bind error.
    let source = std::fs::read_to_string(&options.script)
        .with_context(|| format!("could not read script {}", options.script.display()))?;

    let host = ScriptHost::new(HostConfig {
        library: options.library,
    })?;
    host.run_source(&options.script.display().to_string(), &source)
}

struct CliOptions {
    script: PathBuf,
    library: Option<PathBuf>,
}

impl CliOptions {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let Some(script) = args.next() else {
            return Err(anyhow!(
                "Usage: raylib-lua <script.lua> [--library <path/to/libraylib>]"
            ));
        };
        let mut library = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--library" => {
                    let Some(path) = args.next() else {
                        return Err(anyhow!("--library requires a path argument"));
                    };
                    library = Some(PathBuf::from(path));
                }
                other => {
                    return Err(anyhow!("Unknown argument: {other}. Expected --library <path>"));
                }
            }
        }
        Ok(Self {
            script: PathBuf::from(script),
            library,
        })
    }
}
