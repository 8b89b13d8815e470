use std::path::{Path, PathBuf};

use crate::config::{MASK_EXTENSION, SVG_EXTENSION};

/// One PNG icon and the files derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// Source raster in the input directory
    pub source: PathBuf,
    /// Transient bi-level mask handed to the tracer
    pub mask: PathBuf,
    /// Final vector output
    pub svg: PathBuf,
}

impl ConversionJob {
    /// Derive mask and SVG paths in `output_dir` from the source's base name
    pub fn new(source: impl Into<PathBuf>, output_dir: &Path) -> Self {
        let source = source.into();
        let stem = source
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_default();

        // `set_extension` would eat the last segment of a dotted stem like "app.logo"
        let with_extension = |ext: &str| {
            let mut name = stem.clone();
            name.push(".");
            name.push(ext);
            output_dir.join(name)
        };

        Self {
            mask: with_extension(MASK_EXTENSION),
            svg: with_extension(SVG_EXTENSION),
            source,
        }
    }

    /// File name of the source, for progress lines
    pub fn source_name(&self) -> String {
        file_name(&self.source)
    }

    /// File name of the SVG output, for progress lines
    pub fn svg_name(&self) -> String {
        file_name(&self.svg)
    }

    /// An existing SVG marks the job as done
    pub fn is_converted(&self) -> bool {
        self.svg.exists()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
