//! Parallel processing across independent sequences
//!
//! Steps within one sequence depend on the stance left by the previous step,
//! so a single sequence is always processed front to back on one thread.
//! Separate sequences share nothing and can be synthesized concurrently.

use crate::pipeline::Pipeline;
use crate::playback::Playback;
use crate::step::StepRecord;
use rayon::prelude::*;

/// Run the pipeline over many sequences, preserving input order
pub fn run_batch<S>(pipeline: &Pipeline, sequences: &[S]) -> Vec<Playback>
where
    S: AsRef<[StepRecord]> + Sync,
{
    log::debug!(
        "Synthesizing {} sequences on {} threads",
        sequences.len(),
        rayon::current_num_threads()
    );

    sequences
        .par_iter()
        .map(|steps| pipeline.run(steps.as_ref()))
        .collect()
}
