use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::probe::{ExistenceProbe, FsProbe};
use crate::errors::FilterError;

/// The 10-character directive prefix that triggers the rewrite rule.
const INCLUDE_PREFIX: &str = "#include \"";

/// Base name of the directory containing `input`:
/// `src/widgets/button.cc` -> `widgets`. `None` when the path has no
/// named parent (a bare filename argument), in which case no line of the
/// file can be rewritten.
pub fn including_dir(input: &Path) -> Option<String> {
    input
        .parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
}

/// Apply the rewrite rule to one line.
///
/// A bare `#include "name"` becomes `#include "dir/name"` when the probe
/// finds an entry at `dir/name`; every other line passes through untouched.
/// A `/` anywhere in the line marks the include as already qualified.
pub fn rewrite_line<'a>(line: &'a str, dir: &str, probe: &dyn ExistenceProbe) -> Cow<'a, str> {
    let rest = match line.strip_prefix(INCLUDE_PREFIX) {
        Some(rest) => rest,
        None => return Cow::Borrowed(line),
    };

    if line.contains('/') {
        return Cow::Borrowed(line);
    }

    // Candidate name: everything after the prefix except the final
    // character, assumed to be the closing quote. A directive with trailing
    // text yields a garbage candidate that the probe then rejects.
    let name = match rest.char_indices().last() {
        Some((cut, _)) => &rest[..cut],
        None => rest,
    };

    let sibling = format!("{dir}/{name}");
    if probe.exists(Path::new(&sibling)) {
        Cow::Owned(format!("{INCLUDE_PREFIX}{sibling}\""))
    } else {
        Cow::Borrowed(line)
    }
}

/// Transform every line of `source` independently and in order, writing
/// each (possibly rewritten) line plus a newline to `out`.
pub fn rewrite_source<W: Write>(
    source: &str,
    dir: Option<&str>,
    probe: &dyn ExistenceProbe,
    out: &mut W,
) -> io::Result<()> {
    for line in source.lines() {
        match dir {
            Some(dir) => writeln!(out, "{}", rewrite_line(line, dir, probe))?,
            None => writeln!(out, "{line}")?,
        }
    }
    Ok(())
}

/// Read the file at `path` and stream its transformed lines to `out`.
/// Sibling probes hit the real filesystem relative to the working directory.
pub fn run<W: Write>(path: &Path, out: &mut W) -> Result<(), FilterError> {
    let source = fs::read_to_string(path).map_err(|source| FilterError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = including_dir(path);
    let probe = FsProbe::new();
    rewrite_source(&source, dir.as_deref(), &probe, out)?;
    Ok(())
}
