// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for group construction and relative-index access.

use thiserror::Error;

/// A relative index that falls outside a group's current row range.
///
/// Returned from any per-row accessor (`reuse_identifier`, `height`,
/// `configure_cell`, `select`) when `index >= len`. Indices are never
/// silently clamped; the one sanctioned fallback is the selection
/// revalidation policy on [`RadioRows`](crate::RadioRows), which is a
/// state-change rule, not an access rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("relative index {index} out of range for {len} rows")]
pub struct OutOfRange {
    /// The offending relative index.
    pub index: usize,
    /// The group's row count at the time of the call.
    pub len: usize,
}

/// Invalid builder input, surfaced synchronously at build time.
///
/// A failed build produces no group; callers must not proceed with a
/// partially built one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A radio group was built with an empty choice list.
    ///
    /// Only *construction* requires at least one choice. A live group may
    /// later shrink to zero rows through
    /// [`RadioRows::set_choices`](crate::RadioRows::set_choices), at which
    /// point its selection clears.
    #[error("a radio group needs at least one choice")]
    NoChoices,
    /// A per-row height list does not cover the group's rows exactly.
    #[error("height list covers {heights} rows but the group has {rows}")]
    HeightCountMismatch {
        /// Number of heights supplied.
        heights: usize,
        /// Number of rows in the group.
        rows: usize,
    },
    /// The initial selected index lies outside the choice list.
    #[error("initial selected index {index} out of range for {len} choices")]
    SelectedOutOfRange {
        /// The requested initial selection.
        index: usize,
        /// Number of choices in the group.
        len: usize,
    },
}
