//! Failures surfaced while loading inputs for an index build.
//!
//! Rejected tokens, unknown query keywords and empty query results are normal
//! outcomes and never show up here.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A document named in the manifest could not be read. Aborts the build.
    #[error("document not found: {}", path.display())]
    MissingDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The noise-word list could not be read.
    #[error("cannot read noise words from {}", path.display())]
    NoiseWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document manifest could not be read.
    #[error("cannot read document manifest {}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
