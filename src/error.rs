use std::path::PathBuf;

/// Failures the converter detects and reports
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input directory does not exist: {}", path.display())]
    InputDirMissing { path: PathBuf },

    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to run {program}: {source}")]
    TracerSpawn {
        program: String,
        source: std::io::Error,
    },

    /// `code` is None when the tracer was killed by a signal
    #[error("{program} exited with status {}", code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    TracerFailed { program: String, code: Option<i32> },

    #[error("Tracer produced no output at {}", path.display())]
    MissingOutput { path: PathBuf },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
