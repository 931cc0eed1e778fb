//! CLI interface for catalogue index resolution
use std::path::Path;

pub fn execute(source: &Path, destination: &Path) -> anyhow::Result<()> {
    println!("Resolving {:?} to {:?}", source, destination);

    tipimap::converter::resolve_indices_to_filenames(source, destination)?;

    println!("✓ Resolution complete");
    Ok(())
}
