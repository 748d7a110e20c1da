//! Classification of loose navigation entries.
//!
//! The legacy `nav:` structure is loosely typed: an entry can be a bare
//! string, a single-key mapping, or a list. Classification happens once at
//! the top of the converter so the conversion rules can match on an explicit
//! enum instead of scattering shape checks.

use serde_yaml::Value;

/// One classified navigation entry.
#[derive(Debug)]
pub enum NavEntry<'a> {
    /// Bare string: a page reference, label derived from the filename.
    Page(&'a str),
    /// Single-key mapping: an explicit label over a page path, external URL,
    /// or nested list.
    Titled(&'a str, &'a Value),
    /// Bare list (valid YAML, but not addressable without a label).
    List(&'a [Value]),
    /// Anything else: null, number, multi-key mapping.
    Other,
}

impl<'a> NavEntry<'a> {
    /// Classify one raw YAML node.
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::Page(s),
            Value::Mapping(map) if map.len() == 1 => match map.iter().next() {
                Some((key, inner)) => match key.as_str() {
                    Some(label) => Self::Titled(label, inner),
                    None => Self::Other,
                },
                None => Self::Other,
            },
            Value::Sequence(items) => Self::List(items),
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_classify_string() {
        let value = yaml("quickstart.md");
        assert!(matches!(NavEntry::classify(&value), NavEntry::Page("quickstart.md")));
    }

    #[test]
    fn test_classify_single_key_mapping() {
        let value = yaml("Concepts: concepts.md");
        let NavEntry::Titled(label, inner) = NavEntry::classify(&value) else {
            panic!("expected Titled");
        };
        assert_eq!(label, "Concepts");
        assert_eq!(inner.as_str(), Some("concepts.md"));
    }

    #[test]
    fn test_classify_sequence() {
        let value = yaml("- a.md\n- b.md");
        let NavEntry::List(items) = NavEntry::classify(&value) else {
            panic!("expected List");
        };
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_classify_multi_key_mapping_is_other() {
        let value = yaml("A: a.md\nB: b.md");
        assert!(matches!(NavEntry::classify(&value), NavEntry::Other));
    }

    #[test]
    fn test_classify_scalar_is_other() {
        assert!(matches!(NavEntry::classify(&yaml("42")), NavEntry::Other));
        assert!(matches!(NavEntry::classify(&yaml("null")), NavEntry::Other));
    }

    #[test]
    fn test_classify_non_string_key_is_other() {
        let value = yaml("1: a.md");
        assert!(matches!(NavEntry::classify(&value), NavEntry::Other));
    }
}
