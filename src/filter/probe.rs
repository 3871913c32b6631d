use std::path::{Path, PathBuf};

/// Filesystem existence check as an injectable capability, so tests can
/// simulate "sibling exists" / "sibling absent" without real files.
pub trait ExistenceProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probes the real filesystem. Candidate paths resolve against `root`;
/// without one they resolve against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FsProbe {
    root: Option<PathBuf>,
}

impl FsProbe {
    /// Probe relative to the process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe relative to `root` instead of the working directory.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl ExistenceProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        match &self.root {
            Some(root) => root.join(path).exists(),
            None => path.exists(),
        }
    }
}
