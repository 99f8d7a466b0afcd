// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for table-scope operations.

use thiserror::Error;
use trellis_rows::{BuildError, GroupKind, OutOfRange};

/// Errors surfaced synchronously from plan and coordinate-map operations.
///
/// All operations are local computation; there are no retries and no partial
/// failures. The only multi-step obligation lives with the host: a
/// [`RowOpBatch`](crate::RowOpBatch) must be applied atomically.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A section index outside the plan.
    #[error("section index {index} out of range for {len} sections")]
    SectionOutOfRange {
        /// The offending section index.
        index: usize,
        /// Number of sections in the plan.
        len: usize,
    },
    /// A group index outside its section.
    #[error("group index {index} out of range for {len} groups")]
    GroupOutOfRange {
        /// The offending group index.
        index: usize,
        /// Number of groups in the section.
        len: usize,
    },
    /// A physical or relative row index outside its valid range.
    #[error(transparent)]
    RowOutOfRange(#[from] OutOfRange),
    /// A direct row-count change on a group whose count is not set that way.
    ///
    /// Fixed groups always span one row; radio groups change size through
    /// their choice list (see
    /// [`TablePlan::set_choices`](crate::TablePlan::set_choices)).
    #[error("group kind {kind:?} does not take a direct row count")]
    FixedRowCount {
        /// The group's shape.
        kind: GroupKind,
    },
    /// A choice-list change on a group that is not a radio group.
    #[error("expected a radio group, found {kind:?}")]
    NotRadio {
        /// The group's shape.
        kind: GroupKind,
    },
    /// Invalid replacement configuration, forwarded from the rows layer.
    #[error(transparent)]
    Build(#[from] BuildError),
}
