//! Options for writing phrase reports

use std::path::{Path, PathBuf};

/// Options controlling where extracted reports are written.
///
/// # Example
///
/// ```no_run
/// use dlcdict::extract::ExtractOptions;
///
/// // Reports next to each input
/// let options = ExtractOptions::new();
///
/// // Or collected in one directory
/// let options = ExtractOptions::new().with_output_dir("reports/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Directory for reports. `None` writes each report next to its input.
    pub output_dir: Option<PathBuf>,
}

impl ExtractOptions {
    /// Create options that write reports next to their inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect reports in `dir`, creating it on demand.
    #[must_use]
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// The configured output directory, if any
    #[must_use]
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_writes_next_to_input() {
        assert!(ExtractOptions::new().output_dir().is_none());
    }

    #[test]
    fn test_with_output_dir() {
        let options = ExtractOptions::new().with_output_dir("reports");
        assert_eq!(options.output_dir(), Some(Path::new("reports")));
    }
}
