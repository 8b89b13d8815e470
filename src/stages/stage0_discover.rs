use std::path::Path;

use tracing::debug;

use crate::config::{ConverterConfig, RASTER_EXTENSION};
use crate::error::ConvertError;
use crate::models::ConversionJob;

/// Stage 0: find every PNG in the input directory.
///
/// Fails only when the input directory is missing; creates the output
/// directory afterwards so a missing input leaves the filesystem untouched.
/// Jobs come back sorted by file name.
pub fn discover_jobs(config: &ConverterConfig) -> Result<Vec<ConversionJob>, ConvertError> {
    if !config.input_dir.is_dir() {
        return Err(ConvertError::InputDirMissing {
            path: config.input_dir.clone(),
        });
    }

    std::fs::create_dir_all(&config.output_dir).map_err(|source| ConvertError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let entries = std::fs::read_dir(&config.input_dir)
        .map_err(|e| ConvertError::io(&config.input_dir, e))?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::io(&config.input_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_raster(&path) {
            sources.push(path);
        } else {
            debug!("Ignoring {:?}", path);
        }
    }
    sources.sort();

    Ok(sources
        .into_iter()
        .map(|source| ConversionJob::new(source, &config.output_dir))
        .collect())
}

/// Name ends in `.png`, any case
pub fn is_raster(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .is_some_and(|n| n.ends_with(&format!(".{}", RASTER_EXTENSION)))
}
