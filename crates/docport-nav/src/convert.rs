//! Recursive conversion of navigation entries into sidebar items.
//!
//! Conversion either produces one normalized [`SidebarItem`] or prunes the
//! entry (`None`). Pruning is silent by design: legacy navigation files are
//! allowed to reference future or placeholder content, and an empty list
//! under a label is the convention for a reserved section.

use serde::Serialize;
use serde_yaml::Value;

use crate::entry::NavEntry;
use crate::slug::SlugResolver;

/// URL scheme prefixes marking an entry as an external link.
const EXTERNAL_SCHEMES: &[&str] = &["https://", "http://"];

/// One normalized sidebar entry.
///
/// Invariant: a `Group` is never empty. Groups whose children all prune away
/// are dropped during construction and never represented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Internal page, addressed by slug.
    Link {
        /// Display label.
        label: String,
        /// Normalized page slug.
        slug: String,
    },
    /// External URL, always opened in a new browsing context.
    ExternalLink {
        /// Display label.
        label: String,
        /// Absolute URL.
        href: String,
        /// Anchor attributes (`target: _blank`).
        attrs: LinkAttrs,
    },
    /// Recursive container of items.
    Group {
        /// Display label.
        label: String,
        /// Child items, in source order, never empty.
        items: Vec<SidebarItem>,
    },
}

/// Anchor attributes attached to external links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkAttrs {
    /// Link target; always `_blank`.
    pub target: String,
}

impl Default for LinkAttrs {
    fn default() -> Self {
        Self {
            target: "_blank".to_owned(),
        }
    }
}

/// Convert one navigation entry, pruning unresolvable or empty entries.
///
/// Rules, in order of precedence:
/// 1. A bare string is a page reference; the label is the final path segment
///    without its extension. Prunes when the slug has no backing file.
/// 2. A single-key mapping maps an explicit label over an external URL, a
///    page path, or a nested list. An empty list prunes (reserved section);
///    a non-empty list converts recursively and prunes when no child
///    survives.
/// 3. Any other shape prunes.
#[must_use]
pub fn convert_entry(value: &Value, resolver: &SlugResolver) -> Option<SidebarItem> {
    match NavEntry::classify(value) {
        NavEntry::Page(path) => convert_page(path, file_label(path), resolver),
        NavEntry::Titled(label, inner) => convert_titled(label, inner, resolver),
        NavEntry::List(_) | NavEntry::Other => {
            tracing::debug!(?value, "pruning navigation entry with unsupported shape");
            None
        }
    }
}

fn convert_titled(label: &str, inner: &Value, resolver: &SlugResolver) -> Option<SidebarItem> {
    match inner {
        Value::String(target) if is_external(target) => Some(SidebarItem::ExternalLink {
            label: label.to_owned(),
            href: target.clone(),
            attrs: LinkAttrs::default(),
        }),
        Value::String(path) => convert_page(path, label.to_owned(), resolver),
        Value::Sequence(children) => {
            let items: Vec<SidebarItem> = children
                .iter()
                .filter_map(|child| convert_entry(child, resolver))
                .collect();
            if items.is_empty() {
                tracing::debug!(label, "pruning empty navigation group");
                return None;
            }
            Some(SidebarItem::Group {
                label: label.to_owned(),
                items,
            })
        }
        _ => None,
    }
}

fn convert_page(path: &str, label: String, resolver: &SlugResolver) -> Option<SidebarItem> {
    match resolver.resolve(path) {
        Some(slug) => Some(SidebarItem::Link { label, slug }),
        None => {
            tracing::debug!(path, "pruning navigation entry without backing file");
            None
        }
    }
}

/// Derive a label from a path's final segment, extension removed.
fn file_label(path: &str) -> String {
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or(path);
    segment
        .rsplit_once('.')
        .map_or(segment, |(stem, _)| stem)
        .to_owned()
}

/// Check whether a map value points at an external URL.
fn is_external(target: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|s| target.starts_with(s))
}

/// Drop external links that resolve to static HTML artifacts.
///
/// Applied after conversion as a post-filter because it depends on suffix
/// inspection of the resolved href, not on the entry's shape. Groups emptied
/// by the filter are pruned to uphold the non-empty invariant.
#[must_use]
pub(crate) fn drop_html_links(item: SidebarItem) -> Option<SidebarItem> {
    match item {
        SidebarItem::ExternalLink { ref href, .. } if href.ends_with(".html") => {
            tracing::debug!(%href, "filtering external link to static HTML artifact");
            None
        }
        SidebarItem::Group { label, items } => {
            let items: Vec<SidebarItem> = items.into_iter().filter_map(drop_html_links).collect();
            if items.is_empty() {
                return None;
            }
            Some(SidebarItem::Group { label, items })
        }
        other => Some(other),
    }
}
