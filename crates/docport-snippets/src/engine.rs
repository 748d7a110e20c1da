//! The snippet transclusion engine.
//!
//! Scans fenced code blocks for transclusion directives of the form
//! `--8<-- "path"` or `--8<-- "path:section"` on their own line, and
//! substitutes the referenced content. Failures are never fatal: a missing
//! file or section degrades to an inline comment placeholder so the defect
//! is visible in the rendered page while the rest of the build proceeds.
//!
//! Each code block is processed independently of all others; there is no
//! shared state between blocks.

use std::io;
use std::path::{Path, PathBuf};

use pulldown_cmark::{CodeBlockKind, Event, Tag, TagEnd};

use crate::reference::SnippetReference;
use crate::section::{MARKER, extract_section};

/// Type alias for the file reading callback function.
pub type ReadFileFn = dyn Fn(&Path) -> io::Result<String> + Send;

/// Resolves transclusion directives inside fenced code blocks.
///
/// File reads go through a replaceable callback so tests can inject
/// failures without touching the filesystem.
///
/// # Example
///
/// ```
/// use docport_snippets::SnippetEngine;
///
/// let mut engine = SnippetEngine::new()
///     .with_read_file(|_| Ok("const x = 1;\n".to_owned()));
///
/// let block = "--8<-- \"example.ts\"\n";
/// assert_eq!(engine.process_block(block), Some("const x = 1;\n".to_owned()));
/// ```
pub struct SnippetEngine {
    /// Base directory for resolving relative snippet paths.
    base_dir: PathBuf,
    /// Callback to read files from the file system.
    ///
    /// Default: `std::fs::read_to_string`
    read_file: Option<Box<ReadFileFn>>,
    warnings: Vec<String>,
}

impl Default for SnippetEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetEngine {
    /// Create an engine resolving snippets relative to the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            read_file: None,
            warnings: Vec::new(),
        }
    }

    /// Set the base directory for resolving relative snippet paths.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set the file reading callback.
    #[must_use]
    pub fn with_read_file<F>(mut self, read_file: F) -> Self
    where
        F: Fn(&Path) -> io::Result<String> + Send + 'static,
    {
        self.read_file = Some(Box::new(read_file));
        self
    }

    /// Warnings collected while processing (missing files and sections).
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Process one code block's content.
    ///
    /// Returns the rewritten content when at least one directive line was
    /// substituted, `None` when the block contains no directive and must be
    /// left byte-for-byte untouched.
    pub fn process_block(&mut self, code: &str) -> Option<String> {
        let mut out: Vec<String> = Vec::new();
        let mut substituted = false;

        for line in code.lines() {
            match parse_directive(line) {
                Some(reference) => {
                    substituted = true;
                    out.push(self.transclude(&reference));
                }
                None => out.push(line.to_owned()),
            }
        }

        if !substituted {
            return None;
        }
        let mut rewritten = out.join("\n");
        if code.ends_with('\n') {
            rewritten.push('\n');
        }
        Some(rewritten)
    }

    /// Rewrite a markdown event stream, replacing the text of fenced code
    /// blocks whose content contains transclusion directives.
    ///
    /// Blocks without directives pass through with their original events, so
    /// fence metadata such as language tags is preserved either way.
    pub fn process_events<'a>(&mut self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());
        let mut buffered: Vec<Event<'a>> = Vec::new();
        let mut text = String::new();
        let mut in_block = false;

        for event in events {
            if !in_block {
                if matches!(event, Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_)))) {
                    in_block = true;
                    buffered.push(event);
                } else {
                    out.push(event);
                }
                continue;
            }

            if matches!(event, Event::End(TagEnd::CodeBlock)) {
                match self.process_block(&text) {
                    Some(rewritten) => {
                        out.push(buffered.remove(0));
                        out.push(Event::Text(rewritten.into()));
                    }
                    None => out.append(&mut buffered),
                }
                out.push(event);
                buffered.clear();
                text.clear();
                in_block = false;
                continue;
            }

            if let Event::Text(t) = &event {
                text.push_str(t);
            }
            buffered.push(event);
        }

        // A well-formed stream closes every block, but never drop events.
        out.append(&mut buffered);
        out
    }

    /// Rewrite raw markdown text, processing every fenced code block.
    ///
    /// Line-based counterpart of [`process_events`](Self::process_events)
    /// for callers that work on markdown source instead of a parsed event
    /// stream. Fence lines and everything outside fences pass through
    /// unchanged.
    pub fn process_markdown(&mut self, input: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut fence: Option<(char, usize)> = None;
        let mut block: Vec<&str> = Vec::new();

        for line in input.lines() {
            match fence {
                None => {
                    fence = detect_fence(line);
                    out.push(line.to_owned());
                }
                Some((ch, len)) => {
                    if is_closing_fence(line, ch, len) {
                        self.flush_block(&block, &mut out);
                        block.clear();
                        fence = None;
                        out.push(line.to_owned());
                    } else {
                        block.push(line);
                    }
                }
            }
        }
        // Unterminated fence: emit the collected lines untouched.
        out.extend(block.iter().map(|&line| line.to_owned()));

        let mut result = out.join("\n");
        if input.ends_with('\n') {
            result.push('\n');
        }
        result
    }

    fn flush_block(&mut self, block: &[&str], out: &mut Vec<String>) {
        let content = block.join("\n");
        match self.process_block(&content) {
            Some(rewritten) => out.extend(rewritten.lines().map(str::to_owned)),
            None => out.extend(block.iter().map(|&line| line.to_owned())),
        }
    }

    /// Resolve one directive to its substitution text.
    fn transclude(&mut self, reference: &SnippetReference) -> String {
        let path = self.base_dir.join(&reference.path);
        let content = match self.read(&path) {
            Ok(content) => content,
            Err(err) => {
                let warning = format!("snippet not found: {} ({err})", path.display());
                tracing::warn!("{warning}");
                self.warnings.push(warning);
                return format!("// snippet not found: {}", reference.path);
            }
        };

        match &reference.section {
            None => content.trim().to_owned(),
            Some(name) => extract_section(&content, name).unwrap_or_else(|| {
                let warning =
                    format!("snippet section not found: {}:{name}", reference.path);
                tracing::warn!("{warning}");
                self.warnings.push(warning);
                format!("// snippet section not found: {}:{name}", reference.path)
            }),
        }
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        match &self.read_file {
            Some(read_file) => read_file(path),
            None => std::fs::read_to_string(path),
        }
    }
}

/// Parse a transclusion directive from a code block line.
///
/// A directive is a line consisting solely of the marker token followed by a
/// double-quoted reference. Section marker lines (`--8<-- [start:...]`) use
/// brackets instead of quotes and do not match.
fn parse_directive(line: &str) -> Option<SnippetReference> {
    let rest = line.trim().strip_prefix(MARKER)?.trim_start();
    let inner = rest.strip_prefix('"')?;
    let close = inner.rfind('"')?;
    if !inner[close + 1..].trim().is_empty() || inner[..close].is_empty() {
        return None;
    }
    Some(SnippetReference::parse(&inner[..close]))
}

/// Detect an opening code fence (three or more backticks or tildes).
fn detect_fence(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start();
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let count = trimmed.chars().take_while(|&c| c == first).count();
    (count >= 3).then_some((first, count))
}

/// Check for a closing fence: same character, at least as long, nothing but
/// whitespace after.
fn is_closing_fence(line: &str, ch: char, min_len: usize) -> bool {
    let trimmed = line.trim_start();
    let count = trimmed.chars().take_while(|&c| c == ch).count();
    count >= min_len && trimmed[count..].chars().all(char::is_whitespace)
}
