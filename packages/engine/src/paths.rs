//! Dotted path specifications
//!
//! A spec is a comma-separated list of dotted paths such as `"a.b, c.d"`.
//! Whitespace is trimmed around every path and every segment, and paths that
//! are empty after trimming are dropped. Zero-length segments (`"a..b"`) are
//! kept and match the empty property name.
//!
//! A path with more than `MAX_PATH_SEGMENTS` segments could only match a
//! document nested deeper than the tokenizer accepts, so it is dropped.

use std::fmt;

use crate::tokenizer::DEFAULT_MAX_DEPTH;

/// Separates paths within a spec
pub const PATH_SEPARATOR: char = ',';

/// Separates segments within a path
pub const SEGMENT_SEPARATOR: char = '.';

/// Longest accepted path, in segments
pub const MAX_PATH_SEGMENTS: usize = DEFAULT_MAX_DEPTH;

/// One inclusion path, always holding at least one segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSpec {
    segments: Vec<String>,
}

impl PathSpec {
    /// Parse a single dotted path, `None` if it is empty after trimming or
    /// longer than `MAX_PATH_SEGMENTS`
    ///
    /// # Examples
    /// ```
    /// use jsonsift_engine::paths::PathSpec;
    ///
    /// let path = PathSpec::parse(" a . b ").expect("non-empty path");
    /// assert_eq!(path.segments().collect::<Vec<_>>(), ["a", "b"]);
    /// assert!(PathSpec::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let segment_count = path.matches(SEGMENT_SEPARATOR).count() + 1;
        if segment_count > MAX_PATH_SEGMENTS {
            tracing::debug!(
                target: "jsonsift::paths",
                segment_count,
                max = MAX_PATH_SEGMENTS,
                "dropping path deeper than the nesting limit"
            );
            return None;
        }
        let segments = path
            .split(SEGMENT_SEPARATOR)
            .map(|segment| segment.trim().to_owned())
            .collect();
        Some(Self { segments })
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{SEGMENT_SEPARATOR}")?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

/// Split a comma-separated spec into its non-empty paths, in spec order
#[must_use]
pub fn parse_spec(spec: &str) -> Vec<PathSpec> {
    spec.split(PATH_SEPARATOR).filter_map(PathSpec::parse).collect()
}

/// Parse an explicit list where every entry is one dotted path
pub fn parse_paths<I, S>(paths: I) -> Vec<PathSpec>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .filter_map(|path| PathSpec::parse(path.as_ref()))
        .collect()
}
