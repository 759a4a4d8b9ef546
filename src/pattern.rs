use std::path::{is_separator, Path};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::PhyloError;

/// A listing pattern split at its last path separator.
///
/// Wildcards (`*`, `?`) are only recognised in the last segment, which is
/// how `FindFirstFile` treats its argument. Everything before it names the
/// directory to enumerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw:     String,
    dir:     String,
    segment: String,
}

impl Pattern {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (dir, segment) = match raw.rfind(is_separator) {
            // Keep the separator so `/` and `C:\` stay roots.
            Some(idx) => (raw[..=idx].to_string(), raw[idx + 1..].to_string()),
            None => (".".to_string(), raw.clone()),
        };
        Self { raw, dir, segment }
    }

    /// The pattern as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The directory to enumerate, `.` when the pattern has no separator.
    pub fn dir(&self) -> &Path {
        Path::new(&self.dir)
    }

    /// The last path segment: a literal name or a glob.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn has_wildcards(&self) -> bool {
        self.segment.contains(['*', '?'])
    }

    /// Compile the last segment into a name matcher.
    ///
    /// Only `*` and `?` keep their meaning; brackets, braces and commas
    /// match literally. A trailing `.*` may also match nothing, so `*.*`
    /// covers names without a dot and `notes.*` matches `notes`.
    pub fn matcher(&self, case_insensitive: bool) -> Result<GlobMatcher, PhyloError> {
        let source = match self.segment.strip_suffix(".*") {
            Some(stem) if !stem.is_empty() => {
                let stem = escape_segment(stem);
                format!("{{{stem},{stem}.*}}")
            }
            _ => escape_segment(&self.segment),
        };

        let glob = GlobBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .literal_separator(false)
            .backslash_escape(false)
            .build()
            .map_err(|source| PhyloError::InvalidPattern {
                pattern: self.raw.clone(),
                source,
            })?;
        Ok(glob.compile_matcher())
    }
}

/// Rewrite a segment so globset only sees `*` and `?` as operators.
fn escape_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev_star = false;
    for c in segment.chars() {
        match c {
            // `**` means "any directories" to globset.
            '*' if prev_star => continue,
            '[' | ']' | '{' | '}' | ',' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
        prev_star = c == '*';
    }
    out
}
