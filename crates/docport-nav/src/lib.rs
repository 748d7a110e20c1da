//! Legacy navigation conversion for Docport.
//!
//! Converts the legacy mkdocs `nav:` structure into the site generator's
//! sidebar model. The pipeline is:
//!
//! 1. [`load_nav`] reads the legacy YAML file and extracts the `nav` array.
//! 2. [`convert_entry`] turns one loose entry (string, single-key map, list)
//!    into a normalized [`SidebarItem`], pruning unresolvable references.
//! 3. [`build_sidebar`] produces one flat sidebar for single-sidebar layouts;
//!    [`build_tabs`] / [`build_multi_sidebar`] partition the top-level
//!    sections into independently-rooted sidebars ("tabs").
//!
//! Slug existence is checked against a content root via [`SlugResolver`],
//! which is threaded explicitly through every call so conversion stays pure
//! and testable without a filesystem fixture.
//!
//! # Example
//!
//! ```
//! use docport_nav::{SlugResolver, build_sidebar};
//!
//! let nav: Vec<serde_yaml::Value> =
//!     serde_yaml::from_str("- index.md\n- Concepts:\n    - concepts/agents.md\n").unwrap();
//! // No content root: every slug is presumed valid.
//! let resolver = SlugResolver::new(None);
//! let sidebar = build_sidebar(&nav, &resolver);
//! assert_eq!(sidebar.len(), 2);
//! ```

mod convert;
mod entry;
mod nav_file;
mod sidebar;
mod slug;

pub use convert::{SidebarItem, convert_entry};
pub use entry::NavEntry;
pub use nav_file::{NavFileError, load_nav, parse_nav};
pub use sidebar::{MultiSidebar, TabConfig, build_multi_sidebar, build_sidebar, build_tabs, slugify};
pub use slug::{SlugResolver, page_slug};
