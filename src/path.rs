//! Structural addressing of nodes inside a JSON tree.
//!
//! A [`Path`] is a sequence of typed segments. Identity is the segment
//! sequence itself, never its rendering, so a key such as `"a.b"` and the
//! two keys `"a"`, `"b"` stay distinct.
use std::fmt;

use indexmap::IndexSet;
use serde::{Serialize, Serializer};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// object property
    Key(String),
    /// array element
    Index(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<Segment>,
}

/// Set of paths with deterministic (construction) iteration order.
pub type PathSet = IndexSet<Path>;

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// New path one level below `self`.
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(Segment::Key(key.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }
}

/// RFC 6901 JSON Pointer. The root renders as the empty string.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str("/")?;
            match segment {
                Segment::Key(key) => f.write_str(&key.replace('~', "~0").replace('/', "~1"))?,
                Segment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_owned())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Segment::Key(key) => serializer.serialize_str(key),
            Segment::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.segments.serialize(serializer)
    }
}

/// Build a [`Path`] from a mix of `&str` keys and `usize` indices.
#[macro_export]
macro_rules! path {
    () => { $crate::path::Path::root() };
    ($($segment:expr),+ $(,)?) => {
        $crate::path::Path::from(vec![$($crate::path::Segment::from($segment)),+])
    };
}

// ------------------------------- Tests ------------------------------------ //
