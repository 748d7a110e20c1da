//! CLI command implementations.

mod nav;
mod snippets;

pub(crate) use nav::NavArgs;
pub(crate) use snippets::SnippetsArgs;
