//! Structural comparison and search over JSON trees.
//!
//! - [`compare`] / [`diff`]: path-level classification of two trees and the
//!   aggregate [`ComparisonStats`].
//! - [`search`]: case-insensitive matching over keys and primitive values.
//! - [`resolve`], [`deep_equal`], [`enumerate_paths`]: the building blocks.
//!
//! Everything in those modules is pure and infallible. The [`input`],
//! [`report`] and [`session`] modules add the file-facing surface used by
//! the `json-compare` binary.
pub mod access;
pub mod compare;
pub mod enumerate;
pub mod equality;
pub mod error;
pub mod input;
pub mod path;
pub mod report;
pub mod search;
pub mod session;

pub use access::{resolve, resolve_in};
pub use compare::{
    compare, compare_resolved, diff, diff_resolved, ComparisonStats, DiffEntry, DiffStatus, StructuralDiff,
};
pub use enumerate::enumerate_paths;
pub use equality::{deep_equal, resolved_equal};
pub use error::{Error, Result};
pub use path::{Path, PathSet, Segment};
pub use report::{ComparisonReport, ReportOptions, SearchHighlights};
pub use search::search;
pub use session::{Session, SessionStore};
