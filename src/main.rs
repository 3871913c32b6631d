use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use doxyfilter::errors::FilterError;
use doxyfilter::filter;

fn main() -> anyhow::Result<()> {
    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(FilterError::MissingInputPath)?;

    // Stdout carries nothing but the filtered text; Doxygen reads it as the
    // file's effective content. Diagnostics go to stderr via anyhow.
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    filter::run(&path, &mut out)?;
    out.flush().map_err(FilterError::Write)?;

    Ok(())
}
