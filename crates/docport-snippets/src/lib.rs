//! Snippet transclusion for fenced code blocks.
//!
//! Implements the `--8<--` transclusion directive: a single line inside a
//! fenced code block referencing an external source file (optionally a named
//! section of it) that is substituted at build time. Snippet sources can be
//! indented naturally inside their own file; the extracted region is
//! dedented before substitution.
//!
//! The engine operates per code block with no shared state, and degrades to
//! inline comment placeholders on missing files or sections instead of
//! failing the build.
//!
//! # Example
//!
//! ```no_run
//! use docport_snippets::SnippetEngine;
//!
//! let mut engine = SnippetEngine::new().with_base_dir("docs");
//! let rewritten = engine.process_markdown("```ts\n--8<-- \"examples/demo.ts:setup\"\n```\n");
//! for warning in engine.warnings() {
//!     eprintln!("{warning}");
//! }
//! ```

mod engine;
mod reference;
mod section;

pub use engine::{ReadFileFn, SnippetEngine};
pub use reference::SnippetReference;
pub use section::{dedent, extract_section};
