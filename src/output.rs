use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const PDF_EXTENSION: &str = "pdf";

/// Where split outputs go and how they are named: `{dir}/{prefix}_{n}.pdf`
#[derive(Debug, Clone)]
pub struct OutputPlan {
    dir: PathBuf,
    prefix: String,
}

impl OutputPlan {
    pub fn new<P: AsRef<Path>>(dir: P, prefix: &str) -> Self {
        OutputPlan {
            dir: dir.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    /// Create the output directory (and any missing parents)
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))
    }

    /// Destination for the output with 1-based `ordinal`
    pub fn path_for(&self, ordinal: usize) -> PathBuf {
        self.dir
            .join(format!("{}_{}.{}", self.prefix, ordinal, PDF_EXTENSION))
    }
}
