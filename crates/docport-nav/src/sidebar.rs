//! Sidebar and tab assembly from converted navigation entries.
//!
//! The flat sidebar is a straight map-and-filter over the top-level entries.
//! Tabs partition those entries into independently-rooted sidebars: each
//! surviving top-level section becomes one tab, keyed by the first path
//! segment of the first resolvable page beneath it.

use serde::Serialize;
use serde::ser::SerializeMap;
use serde_yaml::Value;

use crate::convert::{SidebarItem, convert_entry, drop_html_links};
use crate::slug::SlugResolver;

/// One top-level tab: an independently-rooted sidebar plus the label and
/// root slug used to build the top navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabConfig {
    /// Display label, from the navigation section title.
    pub label: String,
    /// Un-prefixed root slug (first path segment, or slugified label).
    pub root_slug: String,
    /// The tab's sidebar items, in source order.
    pub items: Vec<SidebarItem>,
}

/// Mapping from root-path key (`"/" + root_slug + "/"`) to sidebar items.
///
/// Keys are unique and insertion preserves the source order of the top-level
/// navigation sections; later tabs never overwrite earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiSidebar(Vec<(String, Vec<SidebarItem>)>);

impl MultiSidebar {
    /// Insert a sidebar under `key` unless the key is already taken.
    fn insert_first_wins(&mut self, key: String, items: Vec<SidebarItem>) {
        if self.0.iter().any(|(existing, _)| *existing == key) {
            tracing::debug!(%key, "duplicate sidebar root key, keeping earlier tab");
            return;
        }
        self.0.push((key, items));
    }

    /// Look up the items for a root-path key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[SidebarItem]> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, items)| items.as_slice())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarItem])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of independent sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no sidebar was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for MultiSidebar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, items) in &self.0 {
            map.serialize_entry(key, items)?;
        }
        map.end()
    }
}

/// Build one flat sidebar from all top-level navigation entries.
///
/// Used for the single-sidebar site layout. Pruned entries are absent;
/// source order is preserved exactly.
#[must_use]
pub fn build_sidebar(entries: &[Value], resolver: &SlugResolver) -> Vec<SidebarItem> {
    entries
        .iter()
        .filter_map(|entry| convert_entry(entry, resolver))
        .filter_map(drop_html_links)
        .collect()
}

/// Partition top-level navigation sections into tabs.
///
/// A candidate section is skipped when it converts to an external link (tabs
/// must contain page trees, not bare redirects) or prunes away entirely. The
/// root slug comes from the first `Link` with a non-root slug found by
/// pre-order traversal, falling back to the slugified label for sections
/// that legitimately contain no direct page (e.g. external references only).
#[must_use]
pub fn build_tabs(entries: &[Value], resolver: &SlugResolver) -> Vec<TabConfig> {
    let mut tabs = Vec::new();
    for entry in entries {
        let Some(item) = convert_entry(entry, resolver).and_then(drop_html_links) else {
            continue;
        };
        let (label, items) = match item {
            SidebarItem::ExternalLink { .. } => continue,
            SidebarItem::Group { label, items } => (label, items),
            SidebarItem::Link { label, slug } => {
                let tab_label = label.clone();
                (tab_label, vec![SidebarItem::Link { label, slug }])
            }
        };
        let root_slug = detect_root_slug(&items).unwrap_or_else(|| slugify(&label));
        tabs.push(TabConfig {
            label,
            root_slug,
            items,
        });
    }
    tabs
}

/// Build the root-path-keyed sidebar map from detected tabs.
#[must_use]
pub fn build_multi_sidebar(tabs: Vec<TabConfig>) -> MultiSidebar {
    let mut sidebars = MultiSidebar::default();
    for tab in tabs {
        sidebars.insert_first_wins(format!("/{}/", tab.root_slug), tab.items);
    }
    sidebars
}

/// Find the first path segment of the first non-root `Link` in pre-order.
fn detect_root_slug(items: &[SidebarItem]) -> Option<String> {
    for item in items {
        match item {
            SidebarItem::Link { slug, .. } if !slug.is_empty() => {
                return slug.split('/').next().map(str::to_owned);
            }
            SidebarItem::Group { items, .. } => {
                if let Some(root) = detect_root_slug(items) {
                    return Some(root);
                }
            }
            _ => {}
        }
    }
    None
}

/// Slugify a label: lowercase, non-alphanumeric runs collapsed to a single
/// hyphen, leading/trailing hyphens trimmed.
#[must_use]
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_hyphen = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nav(s: &str) -> Vec<Value> {
        serde_yaml::from_str(s).unwrap()
    }

    fn open_resolver() -> SlugResolver {
        SlugResolver::new(None)
    }

    #[test]
    fn test_build_sidebar_flat_order() {
        let entries = nav("- index.md\n- Concepts:\n    - concepts/agents.md\n- about.md");
        let sidebar = build_sidebar(&entries, &open_resolver());
        assert_eq!(sidebar.len(), 3);
        assert!(matches!(&sidebar[0], SidebarItem::Link { slug, .. } if slug.is_empty()));
        assert!(matches!(&sidebar[1], SidebarItem::Group { label, .. } if label == "Concepts"));
        assert!(matches!(&sidebar[2], SidebarItem::Link { slug, .. } if slug == "about"));
    }

    #[test]
    fn test_build_sidebar_filters_html_links() {
        let entries = nav("- Reference: https://example.com/api.html\n- page.md");
        let sidebar = build_sidebar(&entries, &open_resolver());
        assert_eq!(sidebar.len(), 1);
        assert!(matches!(&sidebar[0], SidebarItem::Link { .. }));
    }

    #[test]
    fn test_build_tabs_from_sections() {
        let entries = nav(concat!(
            "- User Guide:\n",
            "    - user-guide/index.md\n",
            "    - user-guide/quickstart.md\n",
            "- API Reference:\n",
            "    - api/agent.md\n",
        ));
        let tabs = build_tabs(&entries, &open_resolver());
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].label, "User Guide");
        assert_eq!(tabs[0].root_slug, "user-guide");
        assert_eq!(tabs[0].items.len(), 2);
        assert_eq!(tabs[1].root_slug, "api");
    }

    #[test]
    fn test_build_tabs_skips_external_link_sections() {
        let entries = nav("- Blog: https://example.com/blog\n- Guide:\n    - guide/index.md\n    - guide/setup.md");
        let tabs = build_tabs(&entries, &open_resolver());
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].label, "Guide");
    }

    #[test]
    fn test_build_tabs_skips_pruned_sections() {
        let entries = nav("- Future: []\n- Guide:\n    - guide/setup.md");
        let tabs = build_tabs(&entries, &open_resolver());
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].root_slug, "guide");
    }

    #[test]
    fn test_root_detection_skips_root_slug_links() {
        // index.md maps to the root slug; the next link decides the root.
        let entries = nav("- Guide:\n    - index.md\n    - guide/setup.md");
        let tabs = build_tabs(&entries, &open_resolver());
        assert_eq!(tabs[0].root_slug, "guide");
    }

    #[test]
    fn test_root_detection_descends_into_groups() {
        let entries = nav(concat!(
            "- Guide:\n",
            "    - Setup:\n",
            "        - guide/setup/install.md\n",
        ));
        let tabs = build_tabs(&entries, &open_resolver());
        assert_eq!(tabs[0].root_slug, "guide");
    }

    #[test]
    fn test_root_fallback_to_slugified_label() {
        // A section of external links only has no page to derive a root from.
        let entries = nav(concat!(
            "- Community & Support:\n",
            "    - Forum: https://example.com/forum\n",
            "    - Chat: https://example.com/chat\n",
        ));
        let tabs = build_tabs(&entries, &open_resolver());
        assert_eq!(tabs[0].root_slug, "community-support");
    }

    #[test]
    fn test_bare_page_section_becomes_single_item_tab() {
        let entries = nav("- about.md");
        let tabs = build_tabs(&entries, &open_resolver());
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].label, "about");
        assert_eq!(tabs[0].root_slug, "about");
        assert_eq!(tabs[0].items.len(), 1);
    }

    #[test]
    fn test_build_tabs_deterministic() {
        let entries = nav("- Guide:\n    - guide/setup.md\n- API:\n    - api/agent.md");
        let first = build_tabs(&entries, &open_resolver());
        let second = build_tabs(&entries, &open_resolver());
        assert_eq!(first, second);
    }

    #[test]
    fn test_multi_sidebar_keys_and_order() {
        let entries = nav("- Guide:\n    - guide/setup.md\n- API:\n    - api/agent.md");
        let sidebars = build_multi_sidebar(build_tabs(&entries, &open_resolver()));
        let keys: Vec<&str> = sidebars.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["/guide/", "/api/"]);
        assert!(sidebars.get("/guide/").is_some());
    }

    #[test]
    fn test_multi_sidebar_first_wins_on_collision() {
        let entries = nav(concat!(
            "- Guide:\n",
            "    - guide/setup.md\n",
            "- Guide Extras:\n",
            "    - guide/extras.md\n",
        ));
        let sidebars = build_multi_sidebar(build_tabs(&entries, &open_resolver()));
        assert_eq!(sidebars.len(), 1);
        let items = sidebars.get("/guide/").unwrap();
        assert!(matches!(&items[0], SidebarItem::Link { slug, .. } if slug == "guide/setup"));
    }

    #[test]
    fn test_multi_sidebar_serializes_as_map() {
        let entries = nav("- Guide:\n    - guide/setup.md");
        let sidebars = build_multi_sidebar(build_tabs(&entries, &open_resolver()));
        let json = serde_json::to_value(&sidebars).unwrap();
        assert!(json.get("/guide/").is_some());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("User Guide"), "user-guide");
        assert_eq!(slugify("Community & Support"), "community-support");
        assert_eq!(slugify("  API!  "), "api");
        assert_eq!(slugify("v2.0"), "v2-0");
    }
}
