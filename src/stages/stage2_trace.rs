use tracing::debug;

use crate::error::ConvertError;
use crate::models::ConversionJob;
use crate::tracer::Tracer;

/// Stage 2: hand the job's mask to the tracer and read back the SVG markup
pub fn trace_job(tracer: &dyn Tracer, job: &ConversionJob) -> Result<String, ConvertError> {
    tracer.trace(&job.mask, &job.svg)?;

    let svg = std::fs::read_to_string(&job.svg).map_err(|e| ConvertError::io(&job.svg, e))?;
    debug!("{} wrote {} bytes to {:?}", tracer.name(), svg.len(), job.svg);

    Ok(svg)
}
