//! JSON-Pointer-like paths into data and schema trees.
//!
//! Two textual dialects share this one type:
//! - **schema-space** scopes as found in UI schemas: `#/properties/name`,
//!   possibly interleaved with `items` (`#/properties/rows/items`). `#`
//!   alone denotes the root.
//! - **data-space** pointers addressing actual values: `/name`, `/rows/0`.
//!
//! Segments are percent-decoded (scopes are URI fragments) and RFC 6901
//! tilde-unescaped (`~1` → `/`, `~0` → `~`) at parse time. All-digit
//! segments become array indices.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single step of a [`Path`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Property name on an object.
    Key(String),
    /// Position in an array.
    Index(usize),
}

impl Segment {
    /// Creates a key segment.
    #[must_use]
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    /// Returns the key name, if this is a key segment.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Index(_) => None,
        }
    }

    /// Returns the index, if this is an index segment.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(_) => None,
            Self::Index(i) => Some(*i),
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl fmt::Display for Segment {
    /// Prints the segment with RFC 6901 escaping applied to key text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => {
                for c in k.chars() {
                    match c {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                Ok(())
            }
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Errors raised while parsing pointer text.
///
/// Parsing is deliberately permissive — resolution failures are `None`
/// results, not errors — so only malformed escape sequences end up here.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("percent-escape decodes to invalid UTF-8 in segment '{0}'")]
    InvalidUtf8(String),

    #[error("invalid '~' escape in segment '{0}' (expected ~0 or ~1)")]
    InvalidTildeEscape(String),
}

/// An ordered sequence of [`Segment`]s locating a value inside a JSON
/// document or a fragment inside a JSON Schema.
///
/// The empty path denotes the root. Paths are cheap to clone and compose;
/// composition drops redundant empty segments so the empty path is the
/// identity on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The root path (no segments).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from segments.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Parses pointer text in either dialect.
    ///
    /// Accepts `#`, `#/...`, `/...`, and relative `a/b` forms. Empty
    /// segments are dropped, so `#//properties//x` parses like
    /// `#/properties/x`.
    pub fn parse(text: &str) -> Result<Self, PathError> {
        let body = text.strip_prefix('#').unwrap_or(text);
        let mut segments = Vec::new();
        for raw in body.split('/') {
            if raw.is_empty() {
                continue;
            }
            segments.push(decode_segment(raw)?);
        }
        Ok(Self { segments })
    }

    /// Returns true for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the path has no segments (same as [`Path::is_root`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The final segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// True when the final segment is the given key.
    #[must_use]
    pub fn ends_with_key(&self, key: &str) -> bool {
        matches!(self.last(), Some(Segment::Key(k)) if k == key)
    }

    /// Appends a single segment, returning the extended path.
    #[must_use]
    pub fn join(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Appends every segment of `suffix`, returning the combined path.
    ///
    /// The empty path is the identity on either side.
    #[must_use]
    pub fn compose(&self, suffix: &Path) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(suffix.segments.iter().cloned());
        Self { segments }
    }

    /// Strips a single leading `properties` pseudo-segment.
    ///
    /// Schema walks produce suffixes like `properties/name`; this maps such
    /// a suffix onto the bare property path `name`.
    #[must_use]
    pub fn to_property_path(&self) -> Self {
        match self.segments.split_first() {
            Some((Segment::Key(k), rest)) if k == "properties" => Self {
                segments: rest.to_vec(),
            },
            _ => self.clone(),
        }
    }

    /// Converts a schema-space path into the data-space path addressing the
    /// corresponding value.
    ///
    /// Every `properties` marker is dropped (keeping the name that follows
    /// it) and every bare `items` marker is dropped — array positions exist
    /// only in data space, so `#/properties/rows/items` maps to `/rows`.
    #[must_use]
    pub fn to_data_path(&self) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len());
        let mut iter = self.segments.iter();
        while let Some(seg) = iter.next() {
            match seg {
                Segment::Key(k) if k == "properties" => {
                    if let Some(name) = iter.next() {
                        segments.push(name.clone());
                    }
                }
                Segment::Key(k) if k == "items" => {}
                other => segments.push(other.clone()),
            }
        }
        Self { segments }
    }

    /// Prints the path as a schema-space scope: `#` for the root,
    /// `#/...` otherwise.
    #[must_use]
    pub fn scope_string(&self) -> String {
        if self.is_root() {
            "#".to_string()
        } else {
            format!("#/{self}")
        }
    }
}

impl fmt::Display for Path {
    /// Prints the `/`-joined segments with RFC 6901 escaping; the root path
    /// prints as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seg in &self.segments {
            if !first {
                f.write_str("/")?;
            }
            write!(f, "{seg}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(D::Error::custom)
    }
}

/// Serde adapter serializing a [`Path`] in scope form (`#/properties/...`),
/// the wire convention for `Control.scope`.
pub mod scope_format {
    use super::Path;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&path.scope_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Path, D::Error> {
        let text = String::deserialize(deserializer)?;
        Path::parse(&text).map_err(D::Error::custom)
    }
}

/// Walks `root` following each segment of `path`.
///
/// Returns `None` as soon as a key is absent, an index is out of range, or
/// an intermediate node is not a container. Absence is normal control flow
/// here (data not yet filled in), never an error.
#[must_use]
pub fn resolve<'a>(root: &'a serde_json::Value, path: &Path) -> Option<&'a serde_json::Value> {
    let mut node = root;
    for segment in path.segments() {
        node = match (node, segment) {
            (serde_json::Value::Object(map), Segment::Key(key)) => map.get(key)?,
            (serde_json::Value::Array(items), Segment::Index(index)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Percent-decodes and tilde-unescapes one raw segment, classifying
/// all-digit text as an index.
fn decode_segment(raw: &str) -> Result<Segment, PathError> {
    let decoded = urlencoding::decode(raw)
        .map_err(|_| PathError::InvalidUtf8(raw.to_string()))?
        .into_owned();
    let unescaped = untilde(&decoded).ok_or_else(|| PathError::InvalidTildeEscape(raw.to_string()))?;
    if !unescaped.is_empty() && unescaped.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(index) = unescaped.parse::<usize>() {
            return Ok(Segment::Index(index));
        }
    }
    Ok(Segment::Key(unescaped))
}

/// Single-pass RFC 6901 unescape; `None` on a dangling or unknown `~`.
fn untilde(text: &str) -> Option<String> {
    if !text.contains('~') {
        return Some(text.to_string());
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return None,
        }
    }
    Some(out)
}
