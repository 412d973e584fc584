//! Centralized path pattern parsing for the `:param` convention.
//!
//! Route paths follow the same pattern syntax throughout the scaffold:
//! `/`-separated segments, where a segment is either a literal, a required
//! parameter (`:name`), or an optional parameter (`:name?`). This module
//! compiles a pattern string once and matches request paths against it,
//! extracting named captures.
//!
//! ## Pattern Forms
//!
//! - `/about` → one literal segment
//! - `/post/:postSlug` → literal, then a required parameter
//! - `/:date?` → a single optional parameter; also matches `/`
//!
//! Optional parameters are only supported in the final position — the
//! convention has no way to tell which segments are present when an
//! optional sits in the middle of a pattern.
//!
//! Matching is on the path component only. Query strings and fragments are
//! the caller's problem.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("empty segment in pattern: {0:?}")]
    EmptySegment(String),
    #[error("parameter without a name in pattern: {0:?}")]
    EmptyParamName(String),
    #[error("duplicate parameter `{0}` in pattern: {1:?}")]
    DuplicateParam(String, String),
    #[error("optional parameter must be the final segment: {0:?}")]
    OptionalNotLast(String),
}

/// One compiled segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches exactly this text.
    Literal(String),
    /// Captures one segment under `name`. When `optional`, the segment
    /// may be absent entirely.
    Param { name: String, optional: bool },
}

/// A compiled path pattern.
///
/// Parse once with [`Pattern::parse`], then test paths with
/// [`Pattern::match_path`]. Serializes as its declared string form, so a
/// route table can be exported without leaking compiled internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compile a pattern string.
    ///
    /// - `"/about"` → literal `about`
    /// - `"/post/:postSlug"` → literal `post`, required param `postSlug`
    /// - `"/:date?"` → optional param `date`
    /// - `"/"` → zero segments; matches only the root path
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if let Some(decl) = part.strip_prefix(':') {
                    let (name, optional) = match decl.strip_suffix('?') {
                        Some(name) => (name, true),
                        None => (decl, false),
                    };
                    if name.is_empty() {
                        return Err(PatternError::EmptyParamName(raw.to_string()));
                    }
                    let taken = segments.iter().any(|s| {
                        matches!(s, Segment::Param { name: n, .. } if n == name)
                    });
                    if taken {
                        return Err(PatternError::DuplicateParam(
                            name.to_string(),
                            raw.to_string(),
                        ));
                    }
                    segments.push(Segment::Param {
                        name: name.to_string(),
                        optional,
                    });
                } else if part.is_empty() {
                    return Err(PatternError::EmptySegment(raw.to_string()));
                } else {
                    segments.push(Segment::Literal(part.to_string()));
                }
            }
        }

        // Only a trailing optional is unambiguous.
        let non_final_optional = segments
            .iter()
            .rev()
            .skip(1)
            .any(|s| matches!(s, Segment::Param { optional: true, .. }));
        if non_final_optional {
            return Err(PatternError::OptionalNotLast(raw.to_string()));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as declared, e.g. `"/post/:postSlug"`.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a request path, returning captured parameters on success.
    ///
    /// The path must start with `/`; one trailing `/` is tolerated
    /// (`/about/` matches `/about`). Every path segment must be consumed
    /// by the pattern — extra segments mean no match.
    pub fn match_path(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        let mut captures = BTreeMap::new();
        let mut consumed = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    if parts.get(consumed) != Some(&lit.as_str()) {
                        return None;
                    }
                    consumed += 1;
                }
                Segment::Param { name, optional } => match parts.get(consumed) {
                    Some(part) if !part.is_empty() => {
                        captures.insert(name.clone(), (*part).to_string());
                        consumed += 1;
                    }
                    _ if *optional => {}
                    _ => return None,
                },
            }
        }

        if consumed == parts.len() {
            Some(captures)
        } else {
            None
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
