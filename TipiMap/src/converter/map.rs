//! Lookup-map construction and manual link overrides

use crate::error::{Error, Result};
use crate::formats::book::Book;
use crate::formats::lookup::{JumpKind, LookupEntry, LookupMap};

/// Hand-curated link between two catalogue entries the source data cannot
/// express symmetrically.
struct ManualLink {
    file_name: &'static str,
    kind: JumpKind,
    target: &'static str,
}

/// Añña > Visuddhimagga: the two mula volumes and their mahāṭīkā volumes
/// reference each other even though neither record carries the other's index.
const MANUAL_LINKS: &[ManualLink] = &[
    ManualLink {
        file_name: "e0101n.mul.xml",
        kind: JumpKind::Tika,
        target: "e0103n.att.xml",
    },
    ManualLink {
        file_name: "e0102n.mul.xml",
        kind: JumpKind::Tika,
        target: "e0104n.att.xml",
    },
    ManualLink {
        file_name: "e0103n.att.xml",
        kind: JumpKind::Mula,
        target: "e0101n.mul.xml",
    },
    ManualLink {
        file_name: "e0104n.att.xml",
        kind: JumpKind::Mula,
        target: "e0102n.mul.xml",
    },
];

/// Build the filename-keyed lookup map from resolved book records.
///
/// Entry order mirrors record order. `include_nav_title` copies each
/// record's (already transliterated) `LongNavPath` into the entry's `title`.
///
/// # Errors
/// Returns [`Error::DuplicateFileName`] if two records share a `FileName`.
pub fn build_lookup_map(books: &[Book], include_nav_title: bool) -> Result<LookupMap> {
    let mut map = LookupMap::new();

    for book in books {
        let mut entry = LookupEntry {
            title: include_nav_title.then(|| book.long_nav_path.clone()),
            matn: book.matn,
            ..LookupEntry::default()
        };
        if let Some(target) = &book.mula_index {
            entry.set_jump(JumpKind::Mula, target.clone());
        }
        if let Some(target) = &book.atthakatha_index {
            entry.set_jump(JumpKind::Atthakatha, target.clone());
        }
        if let Some(target) = &book.tika_index {
            entry.set_jump(JumpKind::Tika, target.clone());
        }

        let file_name = book.file_name.clone();
        if map.insert(file_name.clone(), entry).is_some() {
            return Err(Error::DuplicateFileName { file_name });
        }
    }

    Ok(map)
}

/// Apply the manual link table to an assembled map.
///
/// # Errors
/// Returns [`Error::OverrideEntryMissing`] if a linked filename is absent
/// from the map.
pub fn apply_manual_links(map: &mut LookupMap) -> Result<()> {
    for link in MANUAL_LINKS {
        let entry = map.get_mut(link.file_name).ok_or_else(|| Error::OverrideEntryMissing {
            file_name: link.file_name.to_owned(),
        })?;
        entry.set_jump(link.kind, link.target);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::book::CommentaryLevel;

    fn book(file_name: &str) -> Book {
        Book {
            index: 0,
            file_name: file_name.to_owned(),
            long_nav_path: format!("Añña > {file_name}"),
            short_nav_path: String::new(),
            matn: Some(CommentaryLevel::Mula),
            pitaka: None,
            book_type: None,
            mula_index: None,
            atthakatha_index: None,
            tika_index: None,
            chapter_list_types: None,
        }
    }

    #[test]
    fn test_mula_only_record_yields_m_flag() {
        let mut record = book("s0101a.att.xml");
        record.mula_index = Some("s0101m.mul.xml".to_owned());

        let map = build_lookup_map(&[record], false).unwrap();
        let entry = &map["s0101a.att.xml"];

        assert_eq!(entry.y, "m");
        assert_eq!(entry.m.as_deref(), Some("s0101m.mul.xml"));
        assert_eq!(entry.a, None);
        assert_eq!(entry.t, None);
    }

    #[test]
    fn test_all_three_targets_yield_mat_in_fixed_order() {
        let mut record = book("s0102a.att.xml");
        record.mula_index = Some("s0102m.mul.xml".to_owned());
        record.atthakatha_index = Some("s0102a2.att.xml".to_owned());
        record.tika_index = Some("s0102t.tik.xml".to_owned());

        let map = build_lookup_map(&[record], false).unwrap();

        assert_eq!(map["s0102a.att.xml"].y, "mat");
    }

    #[test]
    fn test_titles_are_included_on_request() {
        let record = book("s0101m.mul.xml");

        let without = build_lookup_map(std::slice::from_ref(&record), false).unwrap();
        let with = build_lookup_map(&[record], true).unwrap();

        assert_eq!(without["s0101m.mul.xml"].title, None);
        assert_eq!(
            with["s0101m.mul.xml"].title.as_deref(),
            Some("Añña > s0101m.mul.xml")
        );
    }

    #[test]
    fn test_duplicate_file_name_is_fatal() {
        let books = [book("s0101m.mul.xml"), book("s0101m.mul.xml")];

        let err = build_lookup_map(&books, false).unwrap_err();

        assert!(matches!(
            err,
            Error::DuplicateFileName { file_name } if file_name == "s0101m.mul.xml"
        ));
    }

    #[test]
    fn test_entry_order_mirrors_record_order() {
        let books = [book("z.mul.xml"), book("a.mul.xml"), book("m.mul.xml")];

        let map = build_lookup_map(&books, false).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();

        assert_eq!(keys, ["z.mul.xml", "a.mul.xml", "m.mul.xml"]);
    }

    #[test]
    fn test_manual_links_cross_reference_visuddhimagga_volumes() {
        let books = [
            book("e0101n.mul.xml"),
            book("e0102n.mul.xml"),
            book("e0103n.att.xml"),
            book("e0104n.att.xml"),
        ];
        let mut map = build_lookup_map(&books, false).unwrap();

        apply_manual_links(&mut map).unwrap();

        assert_eq!(map["e0101n.mul.xml"].y, "t");
        assert_eq!(map["e0101n.mul.xml"].t.as_deref(), Some("e0103n.att.xml"));
        assert_eq!(map["e0103n.att.xml"].y, "m");
        assert_eq!(map["e0103n.att.xml"].m.as_deref(), Some("e0101n.mul.xml"));
        assert_eq!(map["e0102n.mul.xml"].t.as_deref(), Some("e0104n.att.xml"));
        assert_eq!(map["e0104n.att.xml"].m.as_deref(), Some("e0102n.mul.xml"));
    }

    #[test]
    fn test_manual_link_to_missing_entry_fails() {
        let mut map = build_lookup_map(&[book("e0101n.mul.xml")], false).unwrap();

        let err = apply_manual_links(&mut map).unwrap_err();

        assert!(matches!(err, Error::OverrideEntryMissing { .. }));
    }
}
