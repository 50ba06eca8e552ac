use std::path::PathBuf;

use thiserror::Error;

/// Fatal load-time failures.  The binding has no error taxonomy of its own
/// beyond this: either the whole symbol table resolves, or the module does
/// not load.  Runtime failures inside native calls surface however raylib
/// chooses to surface them.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("failed to open native raylib library {path}: {source}")]
    LibraryOpen {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("native symbol `{symbol}` is missing from the raylib library")]
    MissingSymbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}
