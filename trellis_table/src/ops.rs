// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical row operations: the atomic batches a mutation hands to the host.

use core::ops::Range;

use smallvec::SmallVec;

/// One physical insert or delete instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowOp {
    /// Insert a row at the given physical coordinate.
    Insert {
        /// Target section index.
        section: usize,
        /// Target row index within the section.
        row: usize,
    },
    /// Delete the row at the given physical coordinate.
    Delete {
        /// Target section index.
        section: usize,
        /// Target row index within the section.
        row: usize,
    },
}

impl RowOp {
    /// The op that undoes this one at the same coordinate.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Insert { section, row } => Self::Delete { section, row },
            Self::Delete { section, row } => Self::Insert { section, row },
        }
    }
}

/// The ordered op list produced by a single mutation.
///
/// A batch is atomic: the host must apply all of it or none of it, because
/// the plan's coordinate map already reflects the post-mutation state.
/// Partial application leaves the physical list permanently inconsistent.
///
/// Coordinates follow batched-list-update conventions: deletes address
/// pre-mutation positions, inserts address post-mutation positions, and both
/// are emitted in ascending order. Hosts applying ops one at a time must
/// still treat the batch as a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowOpBatch {
    ops: SmallVec<[RowOp; 8]>,
}

impl RowOpBatch {
    /// An empty batch (a mutation that changed nothing physically).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_range(section: usize, rows: Range<usize>) -> Self {
        Self {
            ops: rows.map(|row| RowOp::Insert { section, row }).collect(),
        }
    }

    pub(crate) fn delete_range(section: usize, rows: Range<usize>) -> Self {
        Self {
            ops: rows.map(|row| RowOp::Delete { section, row }).collect(),
        }
    }

    /// Returns `true` if the batch contains no ops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of ops in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// The ops, in the order the host must apply them.
    #[must_use]
    pub fn ops(&self) -> &[RowOp] {
        &self.ops
    }

    /// Combines this batch with one emitted later.
    ///
    /// If `later` is the exact coordinate-wise inverse of this batch (a
    /// show immediately undone by a hide, or vice versa), the two cancel to
    /// an empty batch. Anything else is concatenated unchanged — this is a
    /// convenience for toggle churn, not a general op algebra.
    #[must_use]
    pub fn coalesced_with(&self, later: &Self) -> Self {
        let inverse = self.ops.len() == later.ops.len()
            && self
                .ops
                .iter()
                .zip(later.ops.iter())
                .all(|(a, b)| a.inverse() == *b);
        if inverse {
            return Self::new();
        }
        let mut ops = self.ops.clone();
        ops.extend(later.ops.iter().copied());
        Self { ops }
    }
}

impl<'a> IntoIterator for &'a RowOpBatch {
    type Item = RowOp;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, RowOp>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter().copied()
    }
}

/// The host-side batched mutation primitive.
///
/// Implementations map each op onto their widget's insert/delete calls and
/// apply the whole slice as one atomic update.
pub trait RowTarget {
    /// Applies an entire batch, in order, atomically.
    fn apply_batch(&mut self, ops: &[RowOp]);
}
