// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row height instructions.

/// How the presentation layer should size a single row.
///
/// Heights are *instructions*, not measurements: the table layer reports them
/// per physical row and the host's widget applies them. Values are in the
/// host's logical point space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowHeight {
    /// Use the table-wide default row height.
    UseTable,
    /// A fixed height in logical points.
    Fixed(f32),
    /// Let the widget self-size the row from its content.
    Automatic,
}

impl Default for RowHeight {
    fn default() -> Self {
        Self::UseTable
    }
}
