//! CLI interface for lookup-map generation
use std::path::Path;

use tipimap::Error;
use tipimap::converter::{MapOptions, convert_catalogue_to_map};
use tipimap::script::{PassthroughProcessor, Script};

pub fn execute(
    source: &Path,
    destination: &Path,
    skip_titles: bool,
    target_script: &str,
) -> anyhow::Result<()> {
    println!("Building map from {:?} into {:?}", source, destination);

    let options = MapOptions {
        include_nav_title: !skip_titles,
        target_script: target_script.parse::<Script>()?,
        ..MapOptions::default()
    };

    // No external script converter is bundled; nav paths pass through.
    match convert_catalogue_to_map(source, destination, &PassthroughProcessor, &options) {
        Ok(()) => {
            println!("✓ Map complete");
            Ok(())
        }
        // A duplicated FileName or a broken override means the catalogue
        // itself is bad: fail the run.
        Err(err @ (Error::DuplicateFileName { .. } | Error::OverrideEntryMissing { .. })) => {
            Err(err.into())
        }
        // Anything else (missing or malformed input, write failure) aborts
        // this run only.
        Err(err) => {
            tracing::error!("Error processing {:?}: {err}", source);
            Ok(())
        }
    }
}
