//! Path-level comparison of two JSON trees.
//!
//! [`diff`] classifies every path of the union of both trees' path sets,
//! [`compare`] tallies that classification into [`ComparisonStats`]. Since
//! the statistics are derived from the entries, the decomposition
//! `total = common + exclusive` and `common = matching + different` always
//! holds.
//!
//! Roots get special treatment: a primitive root, an absent root, or an
//! empty container root contributes a single pseudo-entry at
//! [`Path::root`] so every non-absent side counts at least one item.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::access::resolve;
use crate::enumerate::enumerate_paths;
use crate::equality::deep_equal;
use crate::path::{Path, PathSet};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffStatus {
    /// present on both sides with deeply-equal values
    Matching,
    /// present on both sides with different values
    Different,
    OnlyLeft,
    OnlyRight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub path: Path,
    pub status: DiffStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuralDiff {
    entries: Vec<DiffEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub total_left_items: usize,
    pub total_right_items: usize,
    pub common_paths: usize,
    pub matching_values: usize,
    pub different_values: usize,
    pub only_in_left: usize,
    pub only_in_right: usize,
}

/// Shape of one side's root.
enum Root<'a> {
    Absent,
    Primitive,
    Container(&'a Value),
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

// ————————————————————————————————————————————————————————————————————————————
// ENTRY POINTS
// ————————————————————————————————————————————————————————————————————————————

pub fn compare(left: &Value, right: &Value) -> ComparisonStats {
    diff(left, right).stats()
}

/// [`compare`] where either side may be absent.
pub fn compare_resolved(left: Option<&Value>, right: Option<&Value>) -> ComparisonStats {
    diff_resolved(left, right).stats()
}

pub fn diff(left: &Value, right: &Value) -> StructuralDiff {
    diff_resolved(Some(left), Some(right))
}

pub fn diff_resolved(left: Option<&Value>, right: Option<&Value>) -> StructuralDiff {
    let entries = match (root_of(left), root_of(right)) {
        (Root::Container(l), Root::Container(r)) => {
            log::debug!("comparing two container roots");
            containers(l, r)
        }
        (Root::Container(l), other) => {
            log::debug!("comparing container root against primitive/absent root");
            let mut entries = exclusive(l, Side::Left);
            entries.extend(root_entry(&other, Side::Right));
            entries
        }
        (other, Root::Container(r)) => {
            log::debug!("comparing primitive/absent root against container root");
            let mut entries = root_entry(&other, Side::Left).into_iter().collect::<Vec<_>>();
            entries.extend(exclusive(r, Side::Right));
            entries
        }
        (l, r) => {
            log::debug!("comparing two primitive/absent roots");
            primitives(&l, &r, left, right)
        }
    };
    StructuralDiff { entries }
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl StructuralDiff {
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    pub fn paths_with(&self, status: DiffStatus) -> impl Iterator<Item = &Path> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.status == status)
            .map(|entry| &entry.path)
    }

    pub fn is_identical(&self) -> bool {
        self.entries.iter().all(|entry| entry.status == DiffStatus::Matching)
    }

    pub fn stats(&self) -> ComparisonStats {
        self.entries.iter().fold(ComparisonStats::default(), |mut stats, entry| {
            match entry.status {
                DiffStatus::Matching | DiffStatus::Different => {
                    stats.common_paths += 1;
                    stats.total_left_items += 1;
                    stats.total_right_items += 1;
                    if entry.status == DiffStatus::Matching {
                        stats.matching_values += 1;
                    } else {
                        stats.different_values += 1;
                    }
                }
                DiffStatus::OnlyLeft => {
                    stats.only_in_left += 1;
                    stats.total_left_items += 1;
                }
                DiffStatus::OnlyRight => {
                    stats.only_in_right += 1;
                    stats.total_right_items += 1;
                }
            }
            stats
        })
    }
}

impl ComparisonStats {
    /// Rows in display order, labelled for humans.
    pub fn labelled(&self) -> [(&'static str, usize); 7] {
        [
            ("Total Properties/Elements (Left)", self.total_left_items),
            ("Total Properties/Elements (Right)", self.total_right_items),
            ("Common Paths (Keys/Indices)", self.common_paths),
            ("Matching Values (at Common Paths)", self.matching_values),
            ("Different Values (at Common Paths)", self.different_values),
            ("Exclusive to Left (Paths)", self.only_in_left),
            ("Exclusive to Right (Paths)", self.only_in_right),
        ]
    }
}

impl Side {
    fn exclusive(self) -> DiffStatus {
        match self {
            Side::Left => DiffStatus::OnlyLeft,
            Side::Right => DiffStatus::OnlyRight,
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn root_of(value: Option<&Value>) -> Root<'_> {
    match value {
        None => Root::Absent,
        Some(v @ (Value::Array(_) | Value::Object(_))) => Root::Container(v),
        Some(_) => Root::Primitive,
    }
}

fn root_entry(root: &Root<'_>, side: Side) -> Option<DiffEntry> {
    match root {
        Root::Absent => None,
        _ => Some(DiffEntry { path: Path::root(), status: side.exclusive() }),
    }
}

fn primitives(
    l: &Root<'_>,
    r: &Root<'_>,
    left: Option<&Value>,
    right: Option<&Value>,
) -> Vec<DiffEntry> {
    match (left, right) {
        (Some(a), Some(b)) => vec![DiffEntry {
            path: Path::root(),
            status: if deep_equal(a, b) { DiffStatus::Matching } else { DiffStatus::Different },
        }],
        _ => root_entry(l, Side::Left).into_iter().chain(root_entry(r, Side::Right)).collect(),
    }
}

/// All items of a container that has no counterpart on the other side.
fn exclusive(container: &Value, side: Side) -> Vec<DiffEntry> {
    let paths = enumerate_paths(container);
    if paths.is_empty() {
        return vec![DiffEntry { path: Path::root(), status: side.exclusive() }];
    }
    paths
        .into_iter()
        .map(|path| DiffEntry { path, status: side.exclusive() })
        .collect()
}

fn containers(left: &Value, right: &Value) -> Vec<DiffEntry> {
    let left_paths = enumerate_paths(left);
    let right_paths = enumerate_paths(right);

    match (left_paths.is_empty(), right_paths.is_empty()) {
        (true, true) => {
            let status = if deep_equal(left, right) {
                DiffStatus::Matching
            } else {
                DiffStatus::Different
            };
            vec![DiffEntry { path: Path::root(), status }]
        }
        // an empty container still counts as one item of its own side
        (true, false) => {
            let mut entries = vec![DiffEntry { path: Path::root(), status: DiffStatus::OnlyLeft }];
            entries.extend(union_entries(left, right, &left_paths, &right_paths));
            entries
        }
        (false, true) => {
            let mut entries = union_entries(left, right, &left_paths, &right_paths);
            entries.push(DiffEntry { path: Path::root(), status: DiffStatus::OnlyRight });
            entries
        }
        (false, false) => union_entries(left, right, &left_paths, &right_paths),
    }
}

fn union_entries(
    left: &Value,
    right: &Value,
    left_paths: &PathSet,
    right_paths: &PathSet,
) -> Vec<DiffEntry> {
    left_paths
        .union(right_paths)
        .map(|path| {
            let status = match (left_paths.contains(path), right_paths.contains(path)) {
                (true, true) => match (resolve(left, path), resolve(right, path)) {
                    (Some(a), Some(b)) if deep_equal(a, b) => DiffStatus::Matching,
                    _ => DiffStatus::Different,
                },
                (true, false) => DiffStatus::OnlyLeft,
                _ => DiffStatus::OnlyRight,
            };
            DiffEntry { path: path.clone(), status }
        })
        .collect()
}

// ------------------------------- Tests ------------------------------------ //
