// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_table --heading-base-level=0

//! Sections, physical-row coordinate mapping, and mutation batches over
//! [`trellis_rows`] row groups.
//!
//! A [`TablePlan`] owns an ordered list of [`Section`]s, each an ordered
//! list of row groups, and maintains the mapping between that logical
//! structure and the flat physical row space a table widget renders.
//! Hosts drive everything through the plan: per-row queries (count, reuse
//! identifier, height, resolution), selection gestures, and structural
//! mutations. Every mutation returns a [`RowOpBatch`] of physical inserts
//! and deletes the host must apply atomically, so the widget's animated
//! list updates stay in step with the logical state.
//!
//! This crate is `no_std` (with `alloc`) and UI-toolkit agnostic: cells are
//! an opaque host type reached through [`trellis_rows::Cell`] and
//! [`CellHost`].
//!
//! ```rust
//! use trellis_rows::{Cell, GroupBuilder};
//! use trellis_table::{CellHost, SectionBuilder, TablePlan};
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
//! struct DemoHost {
//!     cells: Vec<DemoCell>,
//! }
//!
//! impl CellHost<DemoCell> for DemoHost {
//!     fn cell_at(&mut self, _section: usize, row: usize) -> Option<&mut DemoCell> {
//!         self.cells.get_mut(row)
//!     }
//! }
//!
//! let mut section = SectionBuilder::new().header("Appearance");
//! section.push(
//!     GroupBuilder::fixed("banner", |cell: &mut DemoCell, _| {
//!         cell.label = "Preview".into();
//!     })
//!     .build()
//!     .unwrap(),
//! );
//! let theme = section.push(
//!     GroupBuilder::radio(["light", "dark", "system"], |cell: &mut DemoCell, index| {
//!         cell.label = ["Light", "Dark", "System"][index].into();
//!     })
//!     .build()
//!     .unwrap(),
//! );
//!
//! let mut plan = TablePlan::from_sections(vec![section.finish()]);
//! assert_eq!(plan.number_of_sections(), 1);
//! assert_eq!(plan.number_of_rows(0).unwrap(), 4);
//!
//! // Physical row 2 is the second radio choice.
//! let hit = plan.resolve(0, 2).unwrap();
//! assert_eq!((hit.group, hit.relative), (theme, 1));
//! assert_eq!(plan.reuse_identifier(0, 2).unwrap(), "dark");
//!
//! // A tap on physical row 3 moves the selection and its marker.
//! let mut host = DemoHost {
//!     cells: (0..4).map(|_| DemoCell::default()).collect(),
//! };
//! plan.handle_selection(&mut host, 0, 3).unwrap();
//! assert!(host.cells[3].marked);
//!
//! // Hiding the radio group hands back the physical deletes to animate.
//! let batch = plan.set_group_visible(0, theme, false).unwrap();
//! assert_eq!(batch.len(), 3);
//! assert_eq!(plan.number_of_rows(0).unwrap(), 1);
//! ```

#![no_std]

extern crate alloc;

mod error;
mod map;
mod ops;
mod plan;
mod section;

pub use error::PlanError;
pub use map::{CoordinateMap, Resolved};
pub use ops::{RowOp, RowOpBatch, RowTarget};
pub use plan::{CellHost, TablePlan};
pub use section::{Section, SectionBuilder};
