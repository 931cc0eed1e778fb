//! Nav-path transliteration and title-casing

use crate::script::{Script, TextProcessor};

/// Render a breadcrumb path for display.
///
/// `/` separators become ` > `, every space-separated word is capitalized,
/// and quoted tokens survive intact. Capitalization leaves two artifacts in
/// romanized paths that are cleaned afterwards: a middle dot followed by a
/// space collapses to a period, and a period butting against a `>` separator
/// regains its space. Applying the function twice yields the same result as
/// applying it once.
#[must_use]
pub fn to_title_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let spaced = text.replace('/', " > ").replace('"', " \" ");

    let titled: Vec<String> = spaced
        .to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect();

    titled
        .join(" ")
        .replace(" \" ", "\"")
        .replace("\u{b7} ", ".")
        .replace(".>", ". >")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Transliterate a nav path from the `from` script and render it in the
/// `target` script.
///
/// The text is first converted to the Sinhala intermediate form; a Sinhala
/// target returns that form untouched, any other target converts onward and
/// title-cases the result.
#[must_use]
pub fn transliterate_nav_path(
    processor: &dyn TextProcessor,
    text: &str,
    from: Script,
    target: Script,
) -> String {
    let sinhala = processor.convert_to_sinhala(text, from);
    if target == Script::Sinhala {
        return sinhala;
    }
    to_title_case(&processor.convert_from_sinhala(&sinhala, target))
}
