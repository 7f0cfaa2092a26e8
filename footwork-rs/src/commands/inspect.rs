//! Read-only commands: info, waypoints and validate

use anyhow::Result;
use console::style;
use std::path::Path;

use footwork::Foot;

use crate::cli::PlaybackArgs;
use crate::commands::{build_pipeline, load_choreography};
use crate::utils::{add_table_row, create_table, format_degrees, format_duration, format_point};

/// Execute the info command
pub fn execute_info(file: &Path, playback_args: &PlaybackArgs) -> Result<()> {
    let choreography = load_choreography(file)?;
    let pipeline = build_pipeline(&choreography, playback_args)?;
    let config = pipeline.config();

    let waypoints = pipeline.waypoints(&choreography.steps);
    let playback = pipeline.run(&choreography.steps);

    let left_steps = choreography
        .steps
        .iter()
        .filter(|s| s.active_point == Foot::Left)
        .count();

    println!("{}", style("Sequence Information").bold().cyan());
    println!("{}", style("====================").cyan());
    println!();
    println!("{}: {}", style("File").bold(), file.display());
    println!(
        "{}: {}",
        style("Playback source").bold(),
        if choreography.playback.is_some() {
            "file"
        } else {
            "defaults"
        }
    );
    println!(
        "{}: {}",
        style("Start stance").bold(),
        choreography.start.unwrap_or_default()
    );
    println!();

    let mut table = create_table(vec!["Property", "Value"]);
    add_table_row(
        &mut table,
        vec!["Steps".to_string(), choreography.steps.len().to_string()],
    );
    add_table_row(
        &mut table,
        vec![
            "Left / right steps".to_string(),
            format!("{left_steps} / {}", choreography.steps.len() - left_steps),
        ],
    );
    add_table_row(
        &mut table,
        vec![
            "Skipped steps".to_string(),
            waypoints.skipped.len().to_string(),
        ],
    );
    add_table_row(
        &mut table,
        vec!["Waypoints".to_string(), waypoints.len().to_string()],
    );
    add_table_row(
        &mut table,
        vec!["FPS".to_string(), config.fps.to_string()],
    );
    add_table_row(
        &mut table,
        vec![
            "Frames per segment".to_string(),
            config.frames_per_segment.to_string(),
        ],
    );
    add_table_row(
        &mut table,
        vec!["Hold frames".to_string(), playback.hold_frames().to_string()],
    );
    add_table_row(
        &mut table,
        vec!["Total frames".to_string(), playback.frame_count().to_string()],
    );
    add_table_row(
        &mut table,
        vec!["Duration".to_string(), format_duration(playback.duration())],
    );
    if let Some(last) = waypoints.stance(waypoints.len().saturating_sub(1)) {
        add_table_row(
            &mut table,
            vec![
                "Final centre of gravity".to_string(),
                format_point(last.center_of_gravity()),
            ],
        );
    }
    table.printstd();

    if waypoints.is_degenerate() {
        println!();
        println!(
            "{} No recognized steps, nothing will be drawn",
            style("⚠").yellow().bold()
        );
    }

    Ok(())
}

/// Execute the waypoints command
pub fn execute_waypoints(file: &Path) -> Result<()> {
    let choreography = load_choreography(file)?;
    let waypoints = choreography.sequencer().sequence(&choreography.steps);

    let mut table = create_table(vec!["#", "Left", "Right", "Centre", "Facing"]);
    for i in 0..waypoints.len() {
        add_table_row(
            &mut table,
            vec![
                i.to_string(),
                format_point(waypoints.left[i]),
                format_point(waypoints.right[i]),
                format_point(waypoints.center[i]),
                format_degrees(waypoints.facing[i]),
            ],
        );
    }
    table.printstd();

    if !waypoints.skipped.is_empty() {
        let indices: Vec<String> = waypoints.skipped.iter().map(ToString::to_string).collect();
        println!(
            "{} Skipped steps with unknown codes: {}",
            style("⚠").yellow().bold(),
            indices.join(", ")
        );
    }

    Ok(())
}

/// Execute the validate command
///
/// Malformed records fail the load itself. Unknown direction codes are legal
/// but dropped during sequencing, so they are reported as warnings.
pub fn execute_validate(file: &Path) -> Result<()> {
    let choreography = load_choreography(file)?;

    let mut warnings = 0usize;
    for (index, step) in choreography.steps.iter().enumerate() {
        if step.direction().is_none() {
            warnings += 1;
            println!(
                "{} Step {index}: unknown direction code {} for {}, it will be skipped",
                style("⚠").yellow().bold(),
                step.movement_code,
                step.active_point
            );
        }
    }

    if warnings == 0 {
        println!(
            "{} {} is valid ({} steps)",
            style("✓").green().bold(),
            file.display(),
            choreography.steps.len()
        );
    } else {
        println!(
            "{} {} is valid with {warnings} warning(s) ({} steps)",
            style("✓").green().bold(),
            file.display(),
            choreography.steps.len()
        );
    }

    Ok(())
}
