//! CLI command for writing phrase reports

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::progress::{Stage, extraction_bar, print_done, print_stage};
use crate::extract::{ExtractOptions, batch_extract, expand_inputs};

/// Extract reports for every input, reporting each file's outcome
pub fn execute(sources: &[PathBuf], output_dir: Option<&Path>, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();

    if !quiet {
        print_stage(Stage::Collect, "Collecting dictionaries...");
    }
    let inputs = expand_inputs(sources);
    if inputs.is_empty() {
        anyhow::bail!("no .pc files found");
    }

    let mut options = ExtractOptions::new();
    if let Some(dir) = output_dir {
        options = options.with_output_dir(dir);
    }

    if !quiet {
        print_stage(Stage::Extract, &format!("Extracting {} file(s)...", inputs.len()));
    }

    let pb = if quiet || inputs.len() == 1 {
        None
    } else {
        Some(extraction_bar(inputs.len()))
    };

    let result = batch_extract(&inputs, &options, |progress| {
        if let Some(pb) = &pb {
            pb.set_position(progress.current as u64);
            if let Some(ref name) = progress.current_file {
                pb.set_message(name.clone());
            }
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if !quiet {
        for file in &result.results {
            println!("  {file}");
        }
        println!();
        println!(
            "Extracted {} of {} file(s) ({} failed, {} skipped)",
            result.success_count,
            result.results.len(),
            result.fail_count,
            result.skipped_count
        );
        print_done(started.elapsed());
    }

    if result.all_failed() {
        anyhow::bail!("no dictionaries could be extracted");
    }

    Ok(())
}
