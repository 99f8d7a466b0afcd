// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinate map: cached flattening of visible groups into a contiguous
//! physical row space per section.

use alloc::vec::Vec;

use trellis_rows::OutOfRange;

use crate::{PlanError, Section};

/// Resolution of a physical row to its owning group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resolved {
    /// Index of the owning group within its section.
    pub group: usize,
    /// The row's relative index within that group.
    pub relative: usize,
}

/// One visible group's contiguous interval of physical rows.
#[derive(Copy, Clone, Debug)]
struct Run {
    group: usize,
    start: usize,
    len: usize,
}

#[derive(Clone, Debug)]
struct SectionMap {
    runs: Vec<Run>,
    total: usize,
    dirty: bool,
}

impl Default for SectionMap {
    fn default() -> Self {
        Self {
            runs: Vec::new(),
            total: 0,
            dirty: true,
        }
    }
}

/// Cached mapping between physical rows and `(group, relative index)` pairs.
///
/// For each section the map holds the cumulative row intervals of its
/// visible groups, in insertion order. The cache is rebuilt lazily behind a
/// per-section dirty flag; every mutation path must call
/// [`CoordinateMap::invalidate`], because a stale map is a correctness bug,
/// not a performance one.
///
/// Methods that consult the cache take `&mut self` so the map can maintain
/// it without interior mutability at the call site, and take the section
/// slice explicitly — the map derives from the sections but does not own
/// them.
#[derive(Debug, Default)]
pub struct CoordinateMap {
    sections: Vec<SectionMap>,
}

impl CoordinateMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one section's cache stale. Out-of-range indices are ignored;
    /// the section will start dirty once it exists.
    pub fn invalidate(&mut self, section: usize) {
        if let Some(map) = self.sections.get_mut(section) {
            map.dirty = true;
        }
    }

    /// Marks every section's cache stale.
    pub fn invalidate_all(&mut self) {
        for map in &mut self.sections {
            map.dirty = true;
        }
    }

    /// Grows the cache to cover `sections` and rebuilds section `s` if stale.
    /// Fails if `s` is not a section index.
    fn ensure<C>(&mut self, sections: &[Section<C>], s: usize) -> Result<(), PlanError> {
        if s >= sections.len() {
            return Err(PlanError::SectionOutOfRange {
                index: s,
                len: sections.len(),
            });
        }
        if self.sections.len() < sections.len() {
            self.sections.resize_with(sections.len(), SectionMap::default);
        }
        let map = &mut self.sections[s];
        if !map.dirty {
            return Ok(());
        }
        map.runs.clear();
        map.total = 0;
        let section = &sections[s];
        if section.is_visible() {
            for (index, (group, visible)) in section.iter().enumerate() {
                if !visible {
                    continue;
                }
                let len = group.len();
                map.runs.push(Run {
                    group: index,
                    start: map.total,
                    len,
                });
                map.total += len;
            }
        }
        map.dirty = false;
        Ok(())
    }

    /// Total physical row count of section `s`: the sum of row counts over
    /// groups that are visible in a visible section. A hidden section counts
    /// zero rows.
    pub fn count_rows<C>(&mut self, sections: &[Section<C>], s: usize) -> Result<usize, PlanError> {
        self.ensure(sections, s)?;
        Ok(self.sections[s].total)
    }

    /// Resolves physical row `row` in section `s` to its owning group and
    /// relative index.
    ///
    /// For every row in `0..count_rows(s)` there is exactly one such pair,
    /// and `rows_before(s, group) + relative == row`; rows at or past the
    /// total are an error.
    pub fn resolve<C>(
        &mut self,
        sections: &[Section<C>],
        s: usize,
        row: usize,
    ) -> Result<Resolved, PlanError> {
        self.ensure(sections, s)?;
        let map = &self.sections[s];
        if row >= map.total {
            return Err(OutOfRange {
                index: row,
                len: map.total,
            }
            .into());
        }
        // Last run starting at or before `row`. Zero-row runs share their
        // start with the next run and sort before it, so the last match is
        // always the covering, non-empty run while `row < total`.
        let i = map.runs.partition_point(|run| run.start <= row) - 1;
        let run = map.runs[i];
        debug_assert!(
            run.len > 0 && row - run.start < run.len,
            "resolved run must contain the row"
        );
        Ok(Resolved {
            group: run.group,
            relative: row - run.start,
        })
    }

    /// Cumulative count of visible rows in groups preceding `group` within
    /// section `s`.
    ///
    /// Defined for hidden groups too: it is the physical position their rows
    /// would occupy, which is what an insert batch needs before the
    /// visibility flag flips.
    pub fn rows_before<C>(
        &mut self,
        sections: &[Section<C>],
        s: usize,
        group: usize,
    ) -> Result<usize, PlanError> {
        self.ensure(sections, s)?;
        let num_groups = sections[s].num_groups();
        if group >= num_groups {
            return Err(PlanError::GroupOutOfRange {
                index: group,
                len: num_groups,
            });
        }
        let map = &self.sections[s];
        let i = map.runs.partition_point(|run| run.group < group);
        Ok(map.runs.get(i).map_or(map.total, |run| run.start))
    }
}
