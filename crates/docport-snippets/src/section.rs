//! Named section extraction from snippet source files.
//!
//! Sections are delimited by single-line comment markers of the form
//! `--8<-- [start:<name>]` / `--8<-- [end:<name>]`. The scan is an explicit
//! two-state machine so the edge cases (duplicate markers, missing end) stay
//! easy to reason about: the first matching start marker wins, extraction
//! stops at the first matching end marker, and marker lines themselves never
//! appear in the output.

/// The snippet marker token, shared by directives and section markers.
pub(crate) const MARKER: &str = "--8<--";

/// Scanner state while walking a snippet source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before the matching start marker.
    Outside,
    /// Between the matching start and end markers.
    Inside,
}

/// A section marker found on a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Marker {
    /// `--8<-- [start:<name>]`
    Start(String),
    /// `--8<-- [end:<name>]`
    End(String),
}

/// Parse a section marker from a source line, if present.
///
/// Markers live inside language comments, so the marker token may appear
/// anywhere in the line. Whitespace around the name inside the brackets is
/// allowed.
pub(crate) fn parse_marker(line: &str) -> Option<Marker> {
    let after = &line[line.find(MARKER)? + MARKER.len()..];
    let open = after.find('[')?;
    let close = after[open..].find(']')? + open;
    let inner = after[open + 1..close].trim();

    if let Some(name) = inner.strip_prefix("start:") {
        return Some(Marker::Start(name.trim().to_owned()));
    }
    if let Some(name) = inner.strip_prefix("end:") {
        return Some(Marker::End(name.trim().to_owned()));
    }
    None
}

/// Extract the named section from snippet source content.
///
/// Returns `None` when no matching start marker exists. A missing end marker
/// extracts to the end of the file. Marker lines (for any section) are
/// excluded from the output.
#[must_use]
pub fn extract_section(content: &str, name: &str) -> Option<String> {
    let mut state = ScanState::Outside;
    let mut collected: Vec<&str> = Vec::new();

    for line in content.lines() {
        let marker = parse_marker(line);
        match (state, marker) {
            (ScanState::Outside, Some(Marker::Start(n))) if n == name => {
                state = ScanState::Inside;
            }
            (ScanState::Inside, Some(Marker::End(n))) if n == name => {
                return Some(dedent(&collected));
            }
            (ScanState::Inside, None) => collected.push(line),
            // Markers for other sections are dropped, everything else outside
            // the section is ignored.
            _ => {}
        }
    }

    match state {
        ScanState::Inside => Some(dedent(&collected)),
        ScanState::Outside => None,
    }
}

/// Strip the common leading indentation from a set of lines.
///
/// The minimum leading-whitespace length across non-blank lines is removed
/// from every line, clamped at each line's own length so blank lines never
/// underflow. Normalizing an already-flush block is the identity.
#[must_use]
pub fn dedent(lines: &[&str]) -> String {
    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let stripped: Vec<&str> = lines
        .iter()
        .map(|line| line.get(min_indent.min(line.len())..).unwrap_or(""))
        .collect();
    stripped.join("\n")
}
