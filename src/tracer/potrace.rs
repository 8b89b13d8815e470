use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::Tracer;
use crate::error::ConvertError;

/// Tracer backed by the `potrace` executable
#[derive(Debug, Clone)]
pub struct PotraceTracer {
    program: String,
}

impl PotraceTracer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for one invocation: SVG backend, explicit output path
    fn args<'a>(mask: &'a Path, svg: &'a Path) -> [&'a std::ffi::OsStr; 4] {
        [
            mask.as_os_str(),
            "-s".as_ref(),
            "-o".as_ref(),
            svg.as_os_str(),
        ]
    }
}

impl Default for PotraceTracer {
    fn default() -> Self {
        Self::new("potrace")
    }
}

impl Tracer for PotraceTracer {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn trace(&self, mask: &Path, svg: &Path) -> Result<(), ConvertError> {
        debug!("Running {} on {:?}", self.program, mask);

        let status = Command::new(&self.program)
            .args(Self::args(mask, svg))
            .stdin(Stdio::null())
            .status()
            .map_err(|source| ConvertError::TracerSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ConvertError::TracerFailed {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        if !svg.exists() {
            return Err(ConvertError::MissingOutput {
                path: svg.to_path_buf(),
            });
        }

        Ok(())
    }
}
