use std::path::PathBuf;

/// Report rendering and writing failures.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Template rendering failed
    #[error("failed to render report: {0}")]
    Render(#[from] askama::Error),

    /// Report file could not be written
    #[error("failed to write report {}: {source}", path.display())]
    Write {
        /// Target report file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
