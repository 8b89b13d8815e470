pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;
pub mod tracer;

pub use config::{default_project_root, tool_dir, ConverterConfig};
pub use error::ConvertError;
pub use io::RunReport;
pub use models::{ConversionJob, FileOutcome, OutcomeKind, RunSummary};
pub use pipeline::{convert_job, run};
pub use stages::{add_background, discover_jobs, normalize_dimensions, write_mask};
pub use tracer::{PotraceTracer, Tracer};
