//! Frame synthesis and export commands

use anyhow::{Context, Result, bail};
use console::style;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use footwork::export::write_frames;
use footwork::{ExportFormat, Playback};

use crate::cli::{BatchArgs, PlaybackArgs, RenderArgs};
use crate::commands::{build_pipeline, load_choreography};
use crate::utils::{create_progress_bar, format_bytes, format_duration};

/// Pick the export format: explicit flag, then output extension, then CSV
fn resolve_format(explicit: Option<ExportFormat>, output: Option<&Path>) -> ExportFormat {
    explicit
        .or_else(|| {
            output
                .and_then(|path| path.extension())
                .and_then(|ext| ext.to_str())
                .and_then(|ext| ext.parse().ok())
        })
        .unwrap_or(ExportFormat::Csv)
}

/// Load, synthesize and write one sequence file
fn render_file(
    file: &Path,
    playback_args: &PlaybackArgs,
    format: ExportFormat,
    output: &Path,
) -> Result<Playback> {
    let choreography = load_choreography(file)?;
    let pipeline = build_pipeline(&choreography, playback_args)?;
    let playback = pipeline.run(&choreography.steps);

    let out = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    write_frames(&playback, format, BufWriter::new(out))
        .with_context(|| format!("Failed to write frames to {}", output.display()))?;

    Ok(playback)
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let format = resolve_format(args.format, args.output.as_deref());

    let Some(output) = &args.output else {
        let choreography = load_choreography(&args.file)?;
        let pipeline = build_pipeline(&choreography, &args.playback)?;
        let playback = pipeline.run(&choreography.steps);
        if playback.is_empty() {
            log::warn!("{} produced no frames", args.file.display());
        }

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_frames(&playback, format, &mut handle).context("Failed to write frames")?;
        handle.flush()?;
        return Ok(());
    };

    log::info!("Rendering {} to {}", args.file.display(), output.display());
    let playback = render_file(&args.file, &args.playback, format, output)?;
    if playback.is_empty() {
        log::warn!("{} produced no frames", args.file.display());
    }

    let size = fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    println!(
        "{} Wrote {} frames ({}) to {} [{}, {}]",
        style("✓").green().bold(),
        playback.frame_count(),
        format_duration(playback.duration()),
        output.display(),
        format,
        format_bytes(size)
    );

    Ok(())
}

/// Expand the batch patterns into a sorted, de-duplicated file list
fn collect_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let entries =
            glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        let before = files.len();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => log::warn!("Skipping unreadable path: {e}"),
            }
        }
        if files.len() == before {
            log::warn!("Pattern '{pattern}' matched no files");
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Output path for one input file inside `out_dir`
fn output_path(input: &Path, out_dir: &Path, format: ExportFormat) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("Input has no file name: {}", input.display()))?;
    Ok(out_dir.join(format!(
        "{}.{}",
        stem.to_string_lossy(),
        format.extension()
    )))
}

/// Execute the batch command
pub fn execute_batch(args: BatchArgs) -> Result<()> {
    let inputs = collect_inputs(&args.patterns)?;
    if inputs.is_empty() {
        bail!("No sequence files matched the given patterns");
    }

    fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.out_dir.display()
        )
    })?;

    let jobs = inputs
        .iter()
        .map(|input| Ok((input.as_path(), output_path(input, &args.out_dir, args.format)?)))
        .collect::<Result<Vec<_>>>()?;

    let pb = create_progress_bar(jobs.len() as u64, "Rendering sequences");
    let render_one = |(input, output): &(&Path, PathBuf)| {
        let result = render_file(input, &args.playback, args.format, output);
        pb.inc(1);
        result
    };

    #[cfg(feature = "parallel")]
    let results: Vec<Result<Playback>> = {
        use rayon::prelude::*;
        jobs.par_iter().map(render_one).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<Playback>> = jobs.iter().map(render_one).collect();

    pb.finish_and_clear();

    let mut failures = 0usize;
    let mut total_frames = 0usize;
    for ((input, output), result) in jobs.iter().zip(results) {
        match result {
            Ok(playback) => {
                total_frames += playback.frame_count();
                log::info!(
                    "{} -> {} ({} frames)",
                    input.display(),
                    output.display(),
                    playback.frame_count()
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {e:#}", style("✗").red().bold(), input.display());
            }
        }
    }

    let rendered = jobs.len() - failures;
    println!(
        "{} Rendered {rendered} of {} sequences ({total_frames} frames) into {}",
        style("✓").green().bold(),
        jobs.len(),
        args.out_dir.display()
    );

    if failures > 0 {
        bail!("{failures} sequence(s) failed to render");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, None), ExportFormat::Csv);
        assert_eq!(
            resolve_format(None, Some(Path::new("out/frames.JSON"))),
            ExportFormat::Json
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("frames.txt"))),
            ExportFormat::Csv
        );
        assert_eq!(
            resolve_format(Some(ExportFormat::Csv), Some(Path::new("frames.json"))),
            ExportFormat::Csv
        );
    }

    #[test]
    fn test_output_path() {
        let path = output_path(
            Path::new("sequences/short-form-1.yml"),
            Path::new("out"),
            ExportFormat::Json,
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("out/short-form-1.json"));
    }
}
