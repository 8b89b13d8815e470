use tracing::{debug, info, warn};

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::models::{ConversionJob, FileOutcome, RunSummary};
use crate::stages::{
    add_background, discover_jobs, has_path, normalize_dimensions, trace_job, write_mask,
};
use crate::tracer::Tracer;

/// Convert every PNG in the input directory.
///
/// Files run one at a time, in name order. Each outcome is printed as soon as
/// the file is done. Only a missing input directory (or an uncreatable output
/// directory) aborts the run; per-file failures are recorded in the summary.
pub fn run(config: &ConverterConfig, tracer: &dyn Tracer) -> Result<RunSummary, ConvertError> {
    let jobs = discover_jobs(config)?;
    info!("Found {} PNG files in {:?}", jobs.len(), config.input_dir);

    if !jobs.iter().all(ConversionJob::is_converted) && !tracer.is_available() {
        warn!("{} does not appear to be installed; conversions will fail", tracer.name());
    }

    let mut summary = RunSummary::default();
    for job in &jobs {
        let outcome = convert_job(job, config, tracer);
        println!("{}", outcome);
        summary.push(outcome);
    }

    Ok(summary)
}

/// Run the per-file procedure for one job: skip check, threshold, trace,
/// background, resize, cleanup.
pub fn convert_job(job: &ConversionJob, config: &ConverterConfig, tracer: &dyn Tracer) -> FileOutcome {
    if job.is_converted() {
        debug!("{:?} already exists", job.svg);
        return FileOutcome::skipped(job);
    }

    let result = produce_svg(job, config, tracer);

    if job.mask.exists() {
        if let Err(e) = std::fs::remove_file(&job.mask) {
            warn!("Failed to remove mask {:?}: {}", job.mask, e);
        }
    }

    match result {
        Ok(empty) => FileOutcome::converted(job, config.target_size, empty),
        Err(e) => {
            warn!("{}: {}", job.source_name(), e);
            // A half-written SVG would make the next run skip this file
            if job.svg.exists() {
                if let Err(e) = std::fs::remove_file(&job.svg) {
                    warn!("Failed to remove partial output {:?}: {}", job.svg, e);
                }
            }
            FileOutcome::failed(job, e.to_string())
        }
    }
}

/// Returns whether the traced SVG came back without any path
fn produce_svg(
    job: &ConversionJob,
    config: &ConverterConfig,
    tracer: &dyn Tracer,
) -> Result<bool, ConvertError> {
    write_mask(&job.source, &job.mask, config.threshold)?;

    let traced = trace_job(tracer, job)?;
    let empty = !has_path(&traced);
    if empty {
        warn!("{} traced to an SVG without paths", job.source_name());
    }

    let annotated = add_background(&traced);
    if !empty && annotated == traced {
        warn!("{} has no <svg> root tag; background not added", job.svg_name());
    }

    let normalized = normalize_dimensions(&annotated, config.target_size);
    std::fs::write(&job.svg, normalized).map_err(|e| ConvertError::io(&job.svg, e))?;

    Ok(empty)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::Path;

    use super::*;
    use crate::models::OutcomeKind;
    use crate::stages::BACKGROUND_RECT;

    /// Writes potrace-shaped markup sized to the mask instead of spawning a process
    struct FakeTracer {
        calls: Cell<usize>,
        mode: FakeMode,
    }

    enum FakeMode {
        Shapes,
        Blank,
        Fail,
        NoOutput,
    }

    impl FakeTracer {
        fn new(mode: FakeMode) -> Self {
            Self {
                calls: Cell::new(0),
                mode,
            }
        }
    }

    impl Tracer for FakeTracer {
        fn name(&self) -> &str {
            "fake"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn trace(&self, mask: &Path, svg: &Path) -> Result<(), ConvertError> {
            self.calls.set(self.calls.get() + 1);
            assert!(mask.exists(), "mask must exist while tracing");

            let body = match self.mode {
                FakeMode::Shapes => "<g fill=\"#000000\" stroke=\"none\">\n<path d=\"M20 40 l0 -20z\"/>\n</g>\n",
                FakeMode::Blank => "<g fill=\"#000000\" stroke=\"none\">\n</g>\n",
                FakeMode::Fail => {
                    std::fs::write(svg, "<svg").unwrap();
                    return Err(ConvertError::TracerFailed {
                        program: "fake".to_string(),
                        code: Some(1),
                    });
                }
                FakeMode::NoOutput => {
                    return Err(ConvertError::MissingOutput {
                        path: svg.to_path_buf(),
                    });
                }
            };

            let markup = format!(
                "<?xml version=\"1.0\" standalone=\"no\"?>\n<svg version=\"1.0\" xmlns=\"http://www.w3.org/2000/svg\"\n width=\"8.000000pt\" height=\"8.000000pt\" viewBox=\"0 0 8.000000 8.000000\"\n preserveAspectRatio=\"xMidYMid meet\">\n{}</svg>\n",
                body
            );
            std::fs::write(svg, markup).unwrap();
            Ok(())
        }
    }

    fn setup(names: &[&str]) -> (tempfile::TempDir, ConverterConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = ConverterConfig::from_project_root(dir.path());
        std::fs::create_dir_all(&config.input_dir).unwrap();

        let icon = image::GrayImage::from_fn(8, 8, |x, y| {
            let inside = (2..6).contains(&x) && (2..6).contains(&y);
            image::Luma([if inside { 0 } else { 255 }])
        });
        for name in names {
            icon.save(config.input_dir.join(name)).unwrap();
        }

        (dir, config)
    }

    #[test]
    fn test_converts_icon() {
        let (_dir, config) = setup(&["icon.png"]);
        let tracer = FakeTracer::new(FakeMode::Shapes);

        let summary = run(&config, &tracer).unwrap();
        assert_eq!(summary.converted(), 1);

        let svg = std::fs::read_to_string(config.output_dir.join("icon.svg")).unwrap();
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.find("<rect").unwrap() < svg.find("<path").unwrap());
        assert!(svg.contains("fill=\"white\""));
        assert!(svg.contains(r#"viewBox="0 0 1024 1024""#));
        assert_eq!(svg.matches(r#"width="1024""#).count(), 2);
        assert!(!svg.contains("pt\""));
        assert!(!config.output_dir.join("icon.pbm").exists());
    }

    #[test]
    fn test_second_run_skips_and_preserves_bytes() {
        let (_dir, config) = setup(&["a.png", "b.PNG"]);
        let tracer = FakeTracer::new(FakeMode::Shapes);

        run(&config, &tracer).unwrap();
        let before = std::fs::read(config.output_dir.join("a.svg")).unwrap();
        assert_eq!(tracer.calls.get(), 2);

        let summary = run(&config, &tracer).unwrap();
        assert_eq!(summary.skipped(), 2);
        assert_eq!(summary.converted(), 0);
        assert_eq!(tracer.calls.get(), 2);
        assert_eq!(std::fs::read(config.output_dir.join("a.svg")).unwrap(), before);
    }

    #[test]
    fn test_existing_svg_never_touched() {
        let (_dir, config) = setup(&["icon.png"]);
        std::fs::create_dir_all(&config.output_dir).unwrap();
        std::fs::write(config.output_dir.join("icon.svg"), "stale").unwrap();

        let tracer = FakeTracer::new(FakeMode::Shapes);
        let summary = run(&config, &tracer).unwrap();

        assert_eq!(
            summary.outcomes[0].to_string(),
            "Skipped: icon.png → icon.svg (already exists)"
        );
        assert_eq!(tracer.calls.get(), 0);
        assert_eq!(
            std::fs::read_to_string(config.output_dir.join("icon.svg")).unwrap(),
            "stale"
        );
    }

    #[test]
    fn test_blank_trace_has_no_background() {
        let (_dir, config) = setup(&["blank.png"]);
        let tracer = FakeTracer::new(FakeMode::Blank);

        let summary = run(&config, &tracer).unwrap();
        assert_eq!(summary.outcomes[0].kind, OutcomeKind::Converted { empty: true });
        assert_eq!(
            summary.outcomes[0].to_string(),
            "Converted: blank.png → blank.svg (1024x1024, no paths traced)"
        );

        let svg = std::fs::read_to_string(config.output_dir.join("blank.svg")).unwrap();
        assert!(!svg.contains(BACKGROUND_RECT));
        assert!(svg.contains(r#"height="1024""#));
    }

    #[test]
    fn test_tracer_failure_cleans_up() {
        let (_dir, config) = setup(&["icon.png"]);
        let tracer = FakeTracer::new(FakeMode::Fail);

        let summary = run(&config, &tracer).unwrap();
        assert!(summary.has_failures());
        assert_eq!(
            summary.outcomes[0].to_string(),
            "Failed: icon.png → icon.svg (fake exited with status 1)"
        );
        assert!(!config.output_dir.join("icon.svg").exists());
        assert!(!config.output_dir.join("icon.pbm").exists());
    }

    #[test]
    fn test_missing_output_is_failure() {
        let (_dir, config) = setup(&["icon.png"]);
        let tracer = FakeTracer::new(FakeMode::NoOutput);

        let summary = run(&config, &tracer).unwrap();
        assert_eq!(summary.failed(), 1);
        assert!(!config.output_dir.join("icon.pbm").exists());
    }

    #[test]
    fn test_corrupt_png_fails_without_tracing() {
        let (_dir, config) = setup(&["good.png"]);
        std::fs::write(config.input_dir.join("bad.png"), b"garbage").unwrap();
        let tracer = FakeTracer::new(FakeMode::Shapes);

        let summary = run(&config, &tracer).unwrap();
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.converted(), 1);
        assert_eq!(tracer.calls.get(), 1);
        assert!(!config.output_dir.join("bad.svg").exists());
    }

    #[test]
    fn test_custom_target_size() {
        let (_dir, mut config) = setup(&["icon.png"]);
        config.target_size = 256;
        let tracer = FakeTracer::new(FakeMode::Shapes);

        let summary = run(&config, &tracer).unwrap();
        assert_eq!(
            summary.outcomes[0].to_string(),
            "Converted: icon.png → icon.svg (256x256 with white background)"
        );
        let svg = std::fs::read_to_string(config.output_dir.join("icon.svg")).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 256 256""#));
    }

    #[test]
    fn test_missing_input_dir_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConverterConfig::from_project_root(dir.path());
        let tracer = FakeTracer::new(FakeMode::Shapes);

        let err = run(&config, &tracer).unwrap_err();
        assert!(matches!(err, ConvertError::InputDirMissing { .. }));
        assert!(!config.output_dir.exists());
    }
}
