//! File-to-file pipeline operations

use std::fs;
use std::path::Path;

use crate::converter::map::{apply_manual_links, build_lookup_map};
use crate::converter::navpath::transliterate_nav_path;
use crate::converter::resolve::resolve_indices;
use crate::error::Result;
use crate::formats::book::{self, Book};
use crate::formats::lookup;
use crate::script::{Script, TextProcessor};

/// Options for the catalogue → map conversion.
#[derive(Debug, Clone, Copy)]
pub struct MapOptions {
    /// Copy the transliterated `LongNavPath` into each entry's `title`.
    pub include_nav_title: bool,
    /// Script the catalogue nav paths are written in.
    pub source_script: Script,
    /// Script nav paths are rendered to for display.
    pub target_script: Script,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            include_nav_title: true,
            source_script: Script::Devanagari,
            target_script: Script::Roman,
        }
    }
}

/// Resolve the numeric cross-references of a catalogue file to filenames.
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn resolve_indices_to_filenames<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    tracing::info!(
        "Resolving catalogue indices: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    let indexed = book::read_indexed_books(&source)?;
    let resolved = resolve_indices(&indexed);

    create_parent_dir(dest.as_ref())?;
    book::write_books(&resolved, &dest)?;

    tracing::info!("Resolved {} records", resolved.len());
    Ok(())
}

/// Convert a resolved catalogue file into the display catalogue
/// (`books.json`) and the filename-keyed lookup map (`tpo_map.json`),
/// both written into `out_dir`.
///
/// # Errors
/// Returns an error if I/O fails, if the catalogue contains duplicate
/// filenames, or if a manual override references a missing entry.
pub fn convert_catalogue_to_map<P: AsRef<Path>>(
    source: P,
    out_dir: P,
    processor: &dyn TextProcessor,
    options: &MapOptions,
) -> Result<()> {
    let out_dir = out_dir.as_ref();
    tracing::info!("Building lookup map: {:?} → {:?}", source.as_ref(), out_dir);

    let mut books = book::read_books(&source)?;
    transliterate_books(&mut books, processor, options);

    fs::create_dir_all(out_dir)?;
    let books_path = out_dir.join("books.json");
    book::write_books(&books, &books_path)?;
    tracing::info!("Wrote {} records to {:?}", books.len(), books_path);

    let mut map = build_lookup_map(&books, options.include_nav_title)?;
    apply_manual_links(&mut map)?;

    let map_path = out_dir.join("tpo_map.json");
    lookup::write_map(&map, &map_path)?;
    tracing::info!("Wrote {} entries to {:?}", map.len(), map_path);

    Ok(())
}

/// Transliterate the two nav-path fields of every record in place.
///
/// Empty nav paths are left alone.
pub fn transliterate_books(books: &mut [Book], processor: &dyn TextProcessor, options: &MapOptions) {
    for book in books {
        if !book.long_nav_path.is_empty() {
            book.long_nav_path = transliterate_nav_path(
                processor,
                &book.long_nav_path,
                options.source_script,
                options.target_script,
            );
        }
        if !book.short_nav_path.is_empty() {
            book.short_nav_path = transliterate_nav_path(
                processor,
                &book.short_nav_path,
                options.source_script,
                options.target_script,
            );
        }
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
