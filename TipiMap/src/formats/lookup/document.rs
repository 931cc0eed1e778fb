//! Lookup map structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::formats::book::CommentaryLevel;

/// Companion-jump kinds a lookup entry can advertise in its `y` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Root text (`m`).
    Mula,
    /// Commentary (`a`).
    Atthakatha,
    /// Sub-commentary (`t`).
    Tika,
}

impl JumpKind {
    /// The flag character recorded in the `y` string.
    #[must_use]
    pub const fn flag(self) -> char {
        match self {
            JumpKind::Mula => 'm',
            JumpKind::Atthakatha => 'a',
            JumpKind::Tika => 't',
        }
    }
}

/// Per-filename lookup entry summarizing companion texts and jump capability.
///
/// `y` is a quick capability check for readers: `"at"` means atthakatha and
/// tika jumps are possible. Absent targets serialize as absent keys, not null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    /// Display title (the transliterated long nav path), when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Commentary level, copied verbatim from the book record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matn: Option<CommentaryLevel>,
    /// Which jump targets exist, as a subset of `m`, `a`, `t` in that order.
    pub y: String,
    /// Root-text target filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<String>,
    /// Commentary target filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<String>,
    /// Sub-commentary target filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
}

impl LookupEntry {
    /// Record a jump target and append its flag character to `y`.
    pub fn set_jump(&mut self, kind: JumpKind, target: impl Into<String>) {
        let target = target.into();
        match kind {
            JumpKind::Mula => self.m = Some(target),
            JumpKind::Atthakatha => self.a = Some(target),
            JumpKind::Tika => self.t = Some(target),
        }
        self.y.push(kind.flag());
    }
}

/// Filename-keyed lookup map; iteration order mirrors catalogue order.
pub type LookupMap = IndexMap<String, LookupEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_jump_appends_flags_in_call_order() {
        let mut entry = LookupEntry::default();
        entry.set_jump(JumpKind::Atthakatha, "s0101a.att.xml");
        entry.set_jump(JumpKind::Tika, "s0101t.tik.xml");

        assert_eq!(entry.y, "at");
        assert_eq!(entry.a.as_deref(), Some("s0101a.att.xml"));
        assert_eq!(entry.t.as_deref(), Some("s0101t.tik.xml"));
        assert_eq!(entry.m, None);
    }

    #[test]
    fn test_absent_targets_are_omitted_from_json() {
        let entry = LookupEntry {
            matn: Some(CommentaryLevel::Mula),
            ..LookupEntry::default()
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"matn":"Mula","y":""}"#);
    }
}
