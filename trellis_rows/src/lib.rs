// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_rows --heading-base-level=0

//! Trellis Rows: declarative row groups for table-style list views.
//!
//! A *row group* is a logical unit representing one or more physical table
//! rows that render together. Instead of tracking index paths and reuse
//! identifiers by hand, hosts declare groups and let the table layer (see
//! `trellis_table`) flatten them into physical `(section, row)` coordinates.
//!
//! The core concepts are:
//!
//! - [`RowGroup`]: a tagged variant over the three group shapes —
//!   [`FixedRows`] (exactly one row), [`RadioRows`] (a mutually-exclusive
//!   single-selection set, one row per choice), and [`DynamicRows`] (a
//!   host-sized run of rows sharing one reuse identifier). All three expose
//!   the same capability surface: row count, per-row reuse identifier,
//!   per-row [`RowHeight`], and cell configuration.
//! - [`GroupBuilder`]: validated, fail-fast construction of the three shapes.
//! - [`Cell`]: the one capability an opaque host cell handle must offer so
//!   radio groups can move the single-selection marker.
//! - [`SelectionFallback`]: policy for where the selection lands when a radio
//!   group's row count shrinks below the selected index.
//!
//! This crate deliberately does **not** know about widgets, sections, or any
//! particular UI framework. Host frameworks own the actual data and
//! view/cell instances; a group only calls back into them through the
//! configuration and selection closures it was built with.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_rows::{Cell, GroupBuilder};
//!
//! #[derive(Default)]
//! struct DemoCell {
//!     label: String,
//!     marked: bool,
//! }
//!
//! impl Cell for DemoCell {
//!     fn set_selection_marker(&mut self, on: bool) {
//!         self.marked = on;
//!     }
//! }
//!
//! // Three mutually-exclusive rows; the choice names double as reuse identifiers.
//! let mut group = GroupBuilder::radio(["light", "dark", "system"], |cell: &mut DemoCell, index| {
//!     cell.label = ["Light", "Dark", "System"][index].to_owned();
//! })
//! .build()
//! .unwrap();
//!
//! assert_eq!(group.len(), 3);
//! assert_eq!(group.reuse_identifier(1).unwrap(), "dark");
//!
//! let mut cell = DemoCell::default();
//! group.configure_cell(&mut cell, 0).unwrap();
//! assert_eq!(cell.label, "Light");
//! // Row 0 is selected by default, so configuring it overlays the marker.
//! assert!(cell.marked);
//! ```
//!
//! Selection itself is usually driven by the table layer, which resolves a
//! physical row to a `(group, relative index)` pair and calls
//! [`RadioRows::select`]; see `trellis_table` for the full wiring.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod error;
mod group;
mod height;

pub use builder::{DynamicBuilder, FixedBuilder, GroupBuilder, RadioBuilder};
pub use error::{BuildError, OutOfRange};
pub use group::{
    Cell, ConfigureFn, DynamicRows, FixedRows, GroupCaps, GroupKind, HeightFn, RadioRows,
    RowGroup, SelectFn, SelectOutcome, SelectionChange, SelectionFallback,
};
pub use height::RowHeight;
