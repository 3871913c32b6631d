use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a filter run. Both argument and file errors
/// are fatal before any output line is produced.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("missing input path (usage: doxyfilter <file>)")]
    MissingInputPath,

    #[error("cannot read {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write filtered output")]
    Write(#[from] io::Error),
}
