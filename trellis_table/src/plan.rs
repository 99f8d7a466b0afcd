// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The table plan: the single façade hosts talk to.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use trellis_rows::{Cell, GroupCaps, RowGroup, RowHeight, SelectOutcome};

use crate::map::{CoordinateMap, Resolved};
use crate::ops::RowOpBatch;
use crate::{PlanError, Section};

/// Host-side cell lookup for selection handling.
///
/// The host owns its cells; the plan reaches them only through this trait,
/// and only for the rows a gesture or a marker effect actually touches.
/// Returning `None` (the cell is off screen, or already recycled) skips the
/// effect for that row.
pub trait CellHost<C> {
    /// The cell currently rendering physical `(section, row)`, if any.
    fn cell_at(&mut self, section: usize, row: usize) -> Option<&mut C>;
}

/// An ordered list of sections plus the cached coordinate map over them.
///
/// All traffic between a host widget and its row groups goes through here:
/// the read surface answers per-physical-row queries, and the mutation
/// surface changes logical state while handing back the [`RowOpBatch`] the
/// host must apply to keep its physical list in step.
///
/// Read methods take `&mut self` because they may rebuild the lazy
/// coordinate cache; they never change logical state.
pub struct TablePlan<C> {
    sections: Vec<Section<C>>,
    map: CoordinateMap,
}

impl<C> TablePlan<C> {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            map: CoordinateMap::new(),
        }
    }

    /// Creates a plan over pre-built sections.
    #[must_use]
    pub fn from_sections(sections: Vec<Section<C>>) -> Self {
        Self {
            sections,
            map: CoordinateMap::new(),
        }
    }

    /// Appends a section; returns its index.
    pub fn push_section(&mut self, section: Section<C>) -> usize {
        self.sections.push(section);
        self.sections.len() - 1
    }

    /// Number of sections, visible or not.
    #[must_use]
    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    /// Total physical row count of section `s`. A hidden section counts zero.
    pub fn number_of_rows(&mut self, s: usize) -> Result<usize, PlanError> {
        self.map.count_rows(&self.sections, s)
    }

    /// The header text of section `s`, if any.
    pub fn header(&self, s: usize) -> Result<Option<&str>, PlanError> {
        Ok(self.checked_section(s)?.header())
    }

    /// The footer text of section `s`, if any.
    pub fn footer(&self, s: usize) -> Result<Option<&str>, PlanError> {
        Ok(self.checked_section(s)?.footer())
    }

    /// Resolves physical `(s, row)` to its owning group and relative index.
    pub fn resolve(&mut self, s: usize, row: usize) -> Result<Resolved, PlanError> {
        self.map.resolve(&self.sections, s, row)
    }

    /// Cumulative visible-row count of groups preceding `group` in section
    /// `s`. Defined for hidden groups: the position their rows would occupy.
    pub fn rows_before(&mut self, s: usize, group: usize) -> Result<usize, PlanError> {
        self.map.rows_before(&self.sections, s, group)
    }

    /// The reuse identifier for physical `(s, row)`.
    pub fn reuse_identifier(&mut self, s: usize, row: usize) -> Result<&str, PlanError> {
        let hit = self.map.resolve(&self.sections, s, row)?;
        let group = self.group_at(s, hit.group)?;
        Ok(group.reuse_identifier(hit.relative)?)
    }

    /// The height instruction for physical `(s, row)`.
    pub fn height(&mut self, s: usize, row: usize) -> Result<RowHeight, PlanError> {
        let hit = self.map.resolve(&self.sections, s, row)?;
        let group = self.group_at(s, hit.group)?;
        Ok(group.height(hit.relative)?)
    }

    /// Whether the row at physical `(s, row)` responds to selection.
    ///
    /// Hosts use this to decide row highlighting before any gesture lands.
    pub fn handles_selection(&mut self, s: usize, row: usize) -> Result<bool, PlanError> {
        let hit = self.map.resolve(&self.sections, s, row)?;
        let group = self.group_at(s, hit.group)?;
        Ok(group.caps().contains(GroupCaps::SELECTABLE))
    }

    /// Every distinct reuse identifier any group can produce, in first-seen
    /// order across the whole plan.
    ///
    /// Includes hidden groups and momentarily empty dynamic groups, so hosts
    /// can register all cell types once, up front.
    #[must_use]
    pub fn reuse_identifiers(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for section in &self.sections {
            for (group, _) in section.iter() {
                for id in group.distinct_reuse_identifiers() {
                    if seen.insert(id) {
                        out.push(id);
                    }
                }
            }
        }
        out
    }

    /// The section at `s`, if it exists.
    #[must_use]
    pub fn section(&self, s: usize) -> Option<&Section<C>> {
        self.sections.get(s)
    }

    /// The section at `s`, mutably. Invalidates the section's cached
    /// coordinates, since the caller may change its shape.
    pub fn section_mut(&mut self, s: usize) -> Option<&mut Section<C>> {
        self.map.invalidate(s);
        self.sections.get_mut(s)
    }

    /// The group at `(s, group)`, if it exists.
    #[must_use]
    pub fn group(&self, s: usize, group: usize) -> Option<&RowGroup<C>> {
        self.sections.get(s).and_then(|sec| sec.group(group))
    }

    /// The group at `(s, group)`, mutably. Invalidates the section's cached
    /// coordinates, since the caller may change the group's row count.
    pub fn group_mut(&mut self, s: usize, group: usize) -> Option<&mut RowGroup<C>> {
        self.map.invalidate(s);
        self.sections.get_mut(s).and_then(|sec| sec.group_mut(group))
    }

    /// Shows or hides one group, returning the batch of physical ops the
    /// change implies.
    ///
    /// Setting the flag to its current value is a no-op with an empty batch.
    /// Within a hidden section the flag still flips, but the batch is empty:
    /// the rows were not physically present to begin with.
    pub fn set_group_visible(
        &mut self,
        s: usize,
        group: usize,
        visible: bool,
    ) -> Result<RowOpBatch, PlanError> {
        let current = self.checked_group_visible(s, group)?;
        if current == visible {
            return Ok(RowOpBatch::new());
        }
        let batch = if self.sections[s].is_visible() {
            let before = self.map.rows_before(&self.sections, s, group)?;
            let len = self.sections[s]
                .group(group)
                .map_or(0, RowGroup::len);
            if visible {
                RowOpBatch::insert_range(s, before..before + len)
            } else {
                RowOpBatch::delete_range(s, before..before + len)
            }
        } else {
            RowOpBatch::new()
        };
        self.sections[s].set_group_visible(group, visible);
        self.map.invalidate(s);
        Ok(batch)
    }

    /// Shows or hides a whole section, returning the implied op batch.
    ///
    /// The batch covers every row of the section's visible groups; groups
    /// individually hidden stay hidden and contribute nothing.
    pub fn set_section_visible(&mut self, s: usize, visible: bool) -> Result<RowOpBatch, PlanError> {
        let section = self.checked_section(s)?;
        if section.is_visible() == visible {
            return Ok(RowOpBatch::new());
        }
        // Summed directly: the map reports zero for the hidden state.
        let count: usize = section
            .iter()
            .filter(|(_, group_visible)| *group_visible)
            .map(|(group, _)| group.len())
            .sum();
        let batch = if visible {
            RowOpBatch::insert_range(s, 0..count)
        } else {
            RowOpBatch::delete_range(s, 0..count)
        };
        self.sections[s].set_visible(visible);
        self.map.invalidate(s);
        Ok(batch)
    }

    /// Resizes a dynamic group, returning the implied op batch.
    ///
    /// Only dynamic groups take a direct row count; fixed groups always span
    /// one row and radio groups are sized by [`TablePlan::set_choices`].
    /// Growth inserts at the end of the group's run, shrinkage deletes from
    /// it. If the group is not physically present (it or its section is
    /// hidden) the count still changes but the batch is empty.
    pub fn set_row_count(
        &mut self,
        s: usize,
        group: usize,
        len: usize,
    ) -> Result<RowOpBatch, PlanError> {
        let group_visible = self.checked_group_visible(s, group)?;
        let kind = self.group_at(s, group)?.kind();
        let present = group_visible && self.sections[s].is_visible();
        let before = if present {
            self.map.rows_before(&self.sections, s, group)?
        } else {
            0
        };
        let Some(rows) = self.sections[s]
            .group_mut(group)
            .and_then(RowGroup::as_dynamic_mut)
        else {
            return Err(PlanError::FixedRowCount { kind });
        };
        let old = rows.len();
        rows.set_len(len);
        self.map.invalidate(s);
        Ok(Self::resize_batch(s, present, before, old, len))
    }

    /// Replaces a radio group's choice list, returning the implied op batch.
    ///
    /// The new list may be empty (the group keeps zero rows and no selection
    /// until repopulated). A selection that falls out of range is revalidated
    /// per the group's [`SelectionFallback`](trellis_rows::SelectionFallback).
    pub fn set_choices(
        &mut self,
        s: usize,
        group: usize,
        choices: Vec<String>,
        heights: Option<Vec<RowHeight>>,
    ) -> Result<RowOpBatch, PlanError> {
        let group_visible = self.checked_group_visible(s, group)?;
        let kind = self.group_at(s, group)?.kind();
        let present = group_visible && self.sections[s].is_visible();
        let before = if present {
            self.map.rows_before(&self.sections, s, group)?
        } else {
            0
        };
        let Some(radio) = self.sections[s]
            .group_mut(group)
            .and_then(RowGroup::as_radio_mut)
        else {
            return Err(PlanError::NotRadio { kind });
        };
        let old = radio.len();
        let new = choices.len();
        radio.set_choices(choices, heights)?;
        self.map.invalidate(s);
        Ok(Self::resize_batch(s, present, before, old, new))
    }

    /// Trailing-diff batch for a group whose row count moved from `old` to
    /// `new` at offset `before`.
    fn resize_batch(s: usize, present: bool, before: usize, old: usize, new: usize) -> RowOpBatch {
        if !present || old == new {
            return RowOpBatch::new();
        }
        if new > old {
            RowOpBatch::insert_range(s, before + old..before + new)
        } else {
            RowOpBatch::delete_range(s, before + new..before + old)
        }
    }

    fn checked_section(&self, s: usize) -> Result<&Section<C>, PlanError> {
        self.sections.get(s).ok_or(PlanError::SectionOutOfRange {
            index: s,
            len: self.sections.len(),
        })
    }

    fn checked_group_visible(&self, s: usize, group: usize) -> Result<bool, PlanError> {
        let section = self.checked_section(s)?;
        section
            .group_visible(group)
            .ok_or(PlanError::GroupOutOfRange {
                index: group,
                len: section.num_groups(),
            })
    }

    fn group_at(&self, s: usize, group: usize) -> Result<&RowGroup<C>, PlanError> {
        let section = self.checked_section(s)?;
        section.group(group).ok_or(PlanError::GroupOutOfRange {
            index: group,
            len: section.num_groups(),
        })
    }
}

impl<C: Cell> TablePlan<C> {
    /// Configures the host's cell for physical `(s, row)`: runs the owning
    /// group's configuration callback and, for radio groups, overlays the
    /// selection marker.
    pub fn configure_cell(
        &mut self,
        cell: &mut C,
        s: usize,
        row: usize,
    ) -> Result<(), PlanError> {
        let hit = self.map.resolve(&self.sections, s, row)?;
        let Some(group) = self.sections[s].group_mut(hit.group) else {
            return Err(PlanError::GroupOutOfRange {
                index: hit.group,
                len: self.sections[s].num_groups(),
            });
        };
        group.configure_cell(cell, hit.relative)?;
        Ok(())
    }

    /// Routes a selection gesture on physical `(s, row)`.
    ///
    /// Out-of-range coordinates are an error. A tap on a non-selectable row
    /// is silently ignored. When the selection actually moves, the plan
    /// drives the two marker effects in order — clear at the old physical
    /// row, set at the new one — through cells fetched from `host`; rows the
    /// host no longer has cells for are skipped (their markers are re-derived
    /// on the next configure pass).
    pub fn handle_selection(
        &mut self,
        host: &mut impl CellHost<C>,
        s: usize,
        row: usize,
    ) -> Result<(), PlanError> {
        let hit = self.map.resolve(&self.sections, s, row)?;
        let before = self.map.rows_before(&self.sections, s, hit.group)?;
        let Some(radio) = self.sections[s]
            .group_mut(hit.group)
            .and_then(RowGroup::as_radio_mut)
        else {
            return Ok(());
        };
        let Some(cell) = host.cell_at(s, row) else {
            return Ok(());
        };
        let outcome = radio.select(cell, hit.relative)?;
        if let SelectOutcome::Changed { previous } = outcome {
            if let Some(previous) = previous {
                if let Some(old) = host.cell_at(s, before + previous) {
                    old.set_selection_marker(false);
                }
            }
            if let Some(new) = host.cell_at(s, row) {
                new.set_selection_marker(true);
            }
        }
        Ok(())
    }
}

impl<C> Default for TablePlan<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for TablePlan<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TablePlan")
            .field("num_sections", &self.sections.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::{CellHost, TablePlan};
    use crate::map::Resolved;
    use crate::ops::RowOp;
    use crate::{PlanError, SectionBuilder};
    use trellis_rows::{Cell, GroupBuilder, GroupKind, RowGroup};

    type MarkerLog = Rc<RefCell<Vec<(usize, bool)>>>;

    struct LogCell {
        row: usize,
        log: MarkerLog,
    }

    impl Cell for LogCell {
        fn set_selection_marker(&mut self, on: bool) {
            self.log.borrow_mut().push((self.row, on));
        }
    }

    struct LogHost {
        cells: Vec<LogCell>,
    }

    impl CellHost<LogCell> for LogHost {
        fn cell_at(&mut self, _section: usize, row: usize) -> Option<&mut LogCell> {
            self.cells.get_mut(row)
        }
    }

    fn fixed(reuse: &str) -> RowGroup<LogCell> {
        GroupBuilder::fixed(reuse, |_: &mut LogCell, _| {})
            .build()
            .unwrap()
    }

    fn radio(choices: &[&str]) -> RowGroup<LogCell> {
        GroupBuilder::radio(choices.iter().copied(), |_: &mut LogCell, _| {})
            .build()
            .unwrap()
    }

    fn dynamic(reuse: &str, len: usize) -> RowGroup<LogCell> {
        GroupBuilder::dynamic(reuse, len, |_: &mut LogCell, _| {})
            .build()
            .unwrap()
    }

    /// One section: Fixed(1) + Radio(3).
    fn settings_plan() -> TablePlan<LogCell> {
        let mut b = SectionBuilder::new().header("Appearance");
        b.push(fixed("banner"));
        b.push(radio(&["light", "dark", "system"]));
        TablePlan::from_sections(vec![b.finish()])
    }

    fn host_with_rows(rows: usize) -> (LogHost, MarkerLog) {
        let log: MarkerLog = Rc::new(RefCell::new(Vec::new()));
        let cells = (0..rows)
            .map(|row| LogCell {
                row,
                log: Rc::clone(&log),
            })
            .collect();
        (LogHost { cells }, log)
    }

    #[test]
    fn read_surface_over_a_mixed_section() {
        let mut plan = settings_plan();
        assert_eq!(plan.number_of_sections(), 1);
        assert_eq!(plan.number_of_rows(0).unwrap(), 4);
        assert_eq!(plan.header(0).unwrap(), Some("Appearance"));
        assert_eq!(plan.footer(0).unwrap(), None);
        assert_eq!(
            plan.resolve(0, 2).unwrap(),
            Resolved {
                group: 1,
                relative: 1,
            }
        );
        assert_eq!(plan.reuse_identifier(0, 0).unwrap(), "banner");
        assert_eq!(plan.reuse_identifier(0, 2).unwrap(), "dark");
        assert!(!plan.handles_selection(0, 0).unwrap());
        assert!(plan.handles_selection(0, 3).unwrap());
    }

    #[test]
    fn hiding_a_group_emits_pre_mutation_delete_coordinates() {
        let mut plan = settings_plan();
        let batch = plan.set_group_visible(0, 1, false).unwrap();
        assert_eq!(
            batch.ops(),
            [
                RowOp::Delete { section: 0, row: 1 },
                RowOp::Delete { section: 0, row: 2 },
                RowOp::Delete { section: 0, row: 3 },
            ]
        );
        assert_eq!(plan.number_of_rows(0).unwrap(), 1);
        assert_eq!(plan.section(0).unwrap().group_visible(1), Some(false));
    }

    #[test]
    fn show_after_hide_coalesces_to_nothing() {
        let mut plan = settings_plan();
        let hide = plan.set_group_visible(0, 1, false).unwrap();
        let show = plan.set_group_visible(0, 1, true).unwrap();
        assert!(hide.coalesced_with(&show).is_empty());
        assert_eq!(plan.number_of_rows(0).unwrap(), 4);
    }

    #[test]
    fn redundant_visibility_changes_are_empty_no_ops() {
        let mut plan = settings_plan();
        assert!(plan.set_group_visible(0, 1, true).unwrap().is_empty());
        assert!(plan.set_section_visible(0, true).unwrap().is_empty());
    }

    #[test]
    fn group_visibility_inside_a_hidden_section_flips_without_ops() {
        let mut plan = settings_plan();
        let _ = plan.set_section_visible(0, false).unwrap();

        let batch = plan.set_group_visible(0, 1, false).unwrap();
        assert!(batch.is_empty());
        assert_eq!(plan.section(0).unwrap().group_visible(1), Some(false));
        assert_eq!(plan.number_of_rows(0).unwrap(), 0);
    }

    #[test]
    fn section_visibility_round_trip() {
        let mut plan = settings_plan();
        let hide = plan.set_section_visible(0, false).unwrap();
        assert_eq!(hide.len(), 4);
        assert_eq!(plan.number_of_rows(0).unwrap(), 0);
        // Physical row queries now fail; the rows are gone.
        assert!(plan.resolve(0, 0).is_err());

        let show = plan.set_section_visible(0, true).unwrap();
        assert!(hide.coalesced_with(&show).is_empty());
        assert_eq!(plan.number_of_rows(0).unwrap(), 4);
    }

    #[test]
    fn section_batches_skip_individually_hidden_groups() {
        let mut plan = settings_plan();
        let _ = plan.set_group_visible(0, 1, false).unwrap();

        let hide = plan.set_section_visible(0, false).unwrap();
        // Only the fixed row was physically present.
        assert_eq!(hide.ops(), [RowOp::Delete { section: 0, row: 0 }]);
    }

    #[test]
    fn selection_clears_old_marker_then_sets_new() {
        let mut plan = settings_plan();
        let (mut host, log) = host_with_rows(4);

        // The radio group starts on its first choice (physical row 1);
        // tapping physical row 3 moves it.
        plan.handle_selection(&mut host, 0, 3).unwrap();
        assert_eq!(log.borrow().as_slice(), &[(1, false), (3, true)]);

        let radio = plan.group(0, 1).unwrap().as_radio().unwrap();
        assert_eq!(radio.selected(), Some(2));
    }

    #[test]
    fn reselecting_the_same_row_touches_nothing() {
        let mut plan = settings_plan();
        let (mut host, log) = host_with_rows(4);

        plan.handle_selection(&mut host, 0, 3).unwrap();
        log.borrow_mut().clear();
        plan.handle_selection(&mut host, 0, 3).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn taps_on_non_selectable_rows_are_ignored() {
        let mut plan = settings_plan();
        let (mut host, log) = host_with_rows(4);

        plan.handle_selection(&mut host, 0, 0).unwrap();
        assert!(log.borrow().is_empty());

        // Out of range is still an error, not a silent ignore.
        assert!(matches!(
            plan.handle_selection(&mut host, 0, 4),
            Err(PlanError::RowOutOfRange(_))
        ));
    }

    #[test]
    fn gestures_without_a_tapped_cell_are_dropped() {
        let mut plan = settings_plan();
        let (mut host, log) = host_with_rows(2);

        // Row 3 is valid but the host has no cell for it: nothing happens.
        plan.handle_selection(&mut host, 0, 3).unwrap();
        assert!(log.borrow().is_empty());
        let radio = plan.group(0, 1).unwrap().as_radio().unwrap();
        assert_eq!(radio.selected(), Some(0));
    }

    #[test]
    fn dynamic_resize_emits_trailing_diffs() {
        let mut b = SectionBuilder::new();
        b.push(fixed("head"));
        b.push(dynamic("item", 2));
        let mut plan = TablePlan::from_sections(vec![b.finish()]);

        let grow = plan.set_row_count(0, 1, 4).unwrap();
        assert_eq!(
            grow.ops(),
            [
                RowOp::Insert { section: 0, row: 3 },
                RowOp::Insert { section: 0, row: 4 },
            ]
        );
        assert_eq!(plan.number_of_rows(0).unwrap(), 5);

        let shrink = plan.set_row_count(0, 1, 1).unwrap();
        assert_eq!(
            shrink.ops(),
            [
                RowOp::Delete { section: 0, row: 2 },
                RowOp::Delete { section: 0, row: 3 },
                RowOp::Delete { section: 0, row: 4 },
            ]
        );
        assert_eq!(plan.number_of_rows(0).unwrap(), 2);
    }

    #[test]
    fn resizing_a_hidden_group_changes_count_without_ops() {
        let mut b = SectionBuilder::new();
        b.push_hidden(dynamic("item", 2));
        let mut plan = TablePlan::from_sections(vec![b.finish()]);

        let batch = plan.set_row_count(0, 0, 6).unwrap();
        assert!(batch.is_empty());
        assert_eq!(plan.group(0, 0).unwrap().len(), 6);
        assert_eq!(plan.number_of_rows(0).unwrap(), 0);
    }

    #[test]
    fn only_dynamic_groups_take_a_direct_row_count() {
        let mut plan = settings_plan();
        assert_eq!(
            plan.set_row_count(0, 0, 3),
            Err(PlanError::FixedRowCount {
                kind: GroupKind::Fixed,
            })
        );
        assert_eq!(
            plan.set_row_count(0, 1, 5),
            Err(PlanError::FixedRowCount {
                kind: GroupKind::Radio,
            })
        );
    }

    #[test]
    fn set_choices_resizes_and_revalidates_selection() {
        let mut plan = settings_plan();
        let (mut host, _log) = host_with_rows(4);
        plan.handle_selection(&mut host, 0, 3).unwrap();

        let shrink = plan
            .set_choices(0, 1, vec!["light".to_string()], None)
            .unwrap();
        assert_eq!(
            shrink.ops(),
            [
                RowOp::Delete { section: 0, row: 2 },
                RowOp::Delete { section: 0, row: 3 },
            ]
        );
        assert_eq!(plan.number_of_rows(0).unwrap(), 2);
        let radio = plan.group(0, 1).unwrap().as_radio().unwrap();
        assert_eq!(radio.selected(), Some(0));

        assert_eq!(
            plan.set_choices(0, 0, Vec::<String>::new(), None),
            Err(PlanError::NotRadio {
                kind: GroupKind::Fixed,
            })
        );
    }

    #[test]
    fn set_choices_may_empty_the_group() {
        let mut plan = settings_plan();
        let batch = plan.set_choices(0, 1, Vec::new(), None).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(plan.number_of_rows(0).unwrap(), 1);
        let radio = plan.group(0, 1).unwrap().as_radio().unwrap();
        assert_eq!(radio.selected(), None);
    }

    #[test]
    fn reuse_identifiers_dedupe_in_first_seen_order() {
        let mut b = SectionBuilder::new();
        b.push(fixed("banner"));
        b.push(radio(&["light", "dark"]));
        b.push_hidden(dynamic("item", 0));
        let mut c = SectionBuilder::new();
        c.push(fixed("banner"));
        c.push(dynamic("item", 3));
        let plan = TablePlan::from_sections(vec![b.finish(), c.finish()]);

        assert_eq!(
            plan.reuse_identifiers(),
            ["banner", "light", "dark", "item"]
        );
    }

    #[test]
    fn mutable_accessors_invalidate_the_coordinate_cache() {
        let mut b = SectionBuilder::new();
        b.push(dynamic("item", 2));
        let mut plan = TablePlan::from_sections(vec![b.finish()]);
        assert_eq!(plan.number_of_rows(0).unwrap(), 2);

        plan.group_mut(0, 0)
            .unwrap()
            .as_dynamic_mut()
            .unwrap()
            .set_len(5);
        assert_eq!(plan.number_of_rows(0).unwrap(), 5);
    }

    #[test]
    fn configure_routes_through_the_owning_group() {
        let mut b = SectionBuilder::new();
        b.push(fixed("head"));
        b.push(radio(&["a", "b"]));
        let mut plan = TablePlan::from_sections(vec![b.finish()]);
        let (mut host, log) = host_with_rows(3);

        // Physical row 1 is the selected radio choice.
        let cell = host.cell_at(0, 1).unwrap();
        plan.configure_cell(cell, 0, 1).unwrap();
        assert_eq!(log.borrow().as_slice(), &[(1, true)]);
    }
}
