use std::path::{Path, PathBuf};

/// Extension of source rasters, matched case-insensitively
pub const RASTER_EXTENSION: &str = "png";
/// Extension of the intermediate bi-level mask
pub const MASK_EXTENSION: &str = "pbm";
/// Extension of the traced vector output
pub const SVG_EXTENSION: &str = "svg";

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Project the icon assets belong to
    pub project_root: PathBuf,
    /// Directory scanned for PNG icons
    pub input_dir: PathBuf,
    /// Directory receiving SVG icons (and transient masks)
    pub output_dir: PathBuf,
    /// Gray values below this become black, the rest white
    pub threshold: u8,
    /// Width and height written into every SVG
    pub target_size: u32,
    /// Executable used to trace masks
    pub tracer_program: String,
    /// Treat any failed file as a failed run
    pub strict: bool,
}

impl ConverterConfig {
    /// Standard layout: `<root>/assets/icons/imports` in, `<root>/assets/icons/svgs` out
    pub fn from_project_root(root: impl Into<PathBuf>) -> Self {
        let project_root = root.into();
        let icons = project_root.join("assets").join("icons");

        Self {
            input_dir: icons.join("imports"),
            output_dir: icons.join("svgs"),
            project_root,
            threshold: 128,
            target_size: 1024,
            tracer_program: "potrace".to_string(),
            strict: false,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::from_project_root(default_project_root())
    }
}

/// Directory holding this tool's manifest
pub fn tool_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Project the tool belongs to.
///
/// The tool sits at `<project>/tools/icontrace`, so the project is two levels
/// above its manifest.
pub fn default_project_root() -> PathBuf {
    let tool_dir = tool_dir();
    tool_dir
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or(tool_dir)
}
