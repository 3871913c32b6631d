mod probe;
mod rewrite;

pub use probe::{ExistenceProbe, FsProbe};
pub use rewrite::{including_dir, rewrite_line, rewrite_source, run};
