// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row group variants and their shared capability surface.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{OutOfRange, RowHeight};

/// The capability an opaque host cell handle must expose to row groups.
///
/// The host owns its cell/view instances; groups only ever see them as
/// `&mut C` during configuration and selection. The single-selection marker
/// is the one visual effect a group drives directly (a checkmark, a filled
/// radio dot, a highlight — whatever the host renders it as).
pub trait Cell {
    /// Show or hide the single-selection marker on this cell.
    fn set_selection_marker(&mut self, on: bool);
}

/// Configuration callback: invoked once per row at render time with the
/// host's cell handle and the row's relative index within its group.
pub type ConfigureFn<C> = Box<dyn FnMut(&mut C, usize)>;

/// Selection callback for radio groups.
///
/// Fired *before* the group's selected index mutates, so the
/// [`SelectionChange`] it receives is the handler's view of the pre-change
/// state.
pub type SelectFn<C> = Box<dyn FnMut(&mut C, SelectionChange)>;

/// Per-relative-index height callback for dynamic groups.
pub type HeightFn = Box<dyn Fn(usize) -> RowHeight>;

/// Discriminant for the three row-group shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Exactly one row.
    Fixed,
    /// One row per choice, with mutually-exclusive single selection.
    Radio,
    /// A host-sized run of rows sharing one reuse identifier.
    Dynamic,
}

bitflags::bitflags! {
    /// Group capabilities, for hosts that decide behavior (row highlighting,
    /// edit affordances) without matching on the variant.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GroupCaps: u8 {
        /// Rows respond to selection gestures.
        const SELECTABLE = 0b0000_0001;
        /// The row count can change after construction.
        const RESIZABLE  = 0b0000_0010;
    }
}

/// The selection transition passed to a radio group's selection callback.
///
/// `previous` is carried by value because the callback cannot re-borrow the
/// group mid-call to inspect it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// The relative index being selected.
    pub selected: usize,
    /// The relative index that was selected before this change, if any.
    pub previous: Option<usize>,
}

/// Where the selection lands when a radio group's row count shrinks below
/// the selected index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionFallback {
    /// Fall back to relative index 0, or to no selection if the group is empty.
    FirstRow,
    /// Clear the selection entirely.
    Clear,
}

/// Result of a [`RadioRows::select`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The row was already selected; nothing fired and nothing changed.
    Unchanged,
    /// The selection moved. `previous` is the old relative index, if any,
    /// so the caller can clear the marker at the old physical row before
    /// setting it at the new one.
    Changed {
        /// The previously selected relative index.
        previous: Option<usize>,
    },
}

/// A single fixed row.
pub struct FixedRows<C> {
    pub(crate) reuse: String,
    pub(crate) height: Option<RowHeight>,
    pub(crate) configure: ConfigureFn<C>,
}

impl<C> FixedRows<C> {
    /// The row's reuse identifier.
    #[must_use]
    pub fn reuse_identifier(&self) -> &str {
        &self.reuse
    }
}

impl<C> fmt::Debug for FixedRows<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedRows")
            .field("reuse", &self.reuse)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// A mutually-exclusive single-selection set: one row per choice.
///
/// At most one row is marked selected at any time. The choice strings double
/// as per-row reuse identifiers.
pub struct RadioRows<C> {
    pub(crate) choices: Vec<String>,
    pub(crate) heights: Option<Vec<RowHeight>>,
    pub(crate) selected: Option<usize>,
    pub(crate) fallback: SelectionFallback,
    pub(crate) configure: ConfigureFn<C>,
    pub(crate) on_select: Option<SelectFn<C>>,
}

impl<C> RadioRows<C> {
    /// Number of rows (choices).
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns `true` if the group currently has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// The currently selected relative index. `None` iff the group has zero
    /// rows, or its fallback policy is [`SelectionFallback::Clear`] and the
    /// previous selection was invalidated.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The active selection-invalidation policy.
    #[must_use]
    pub fn fallback(&self) -> SelectionFallback {
        self.fallback
    }

    /// The choice list (also the per-row reuse identifiers).
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Replaces the choice list, and with it the group's row count.
    ///
    /// `heights` replaces the per-row height list and must cover the new
    /// choices exactly (or be `None`). An empty choice list is accepted here
    /// — unlike at build time — and leaves the group with zero rows and no
    /// selection. A selection that falls out of range is revalidated per the
    /// group's [`SelectionFallback`].
    ///
    /// The group's physical footprint changes with its row count; when the
    /// group is owned by a table plan, use the plan's mutation method instead
    /// so the host also receives the insert/delete batch.
    pub fn set_choices(
        &mut self,
        choices: Vec<String>,
        heights: Option<Vec<RowHeight>>,
    ) -> Result<(), crate::BuildError> {
        if let Some(heights) = &heights {
            if heights.len() != choices.len() {
                return Err(crate::BuildError::HeightCountMismatch {
                    heights: heights.len(),
                    rows: choices.len(),
                });
            }
        }
        self.choices = choices;
        self.heights = heights;
        self.revalidate_selection();
        Ok(())
    }

    fn revalidate_selection(&mut self) {
        match self.selected {
            Some(i) if i < self.choices.len() => {}
            _ => {
                self.selected = match self.fallback {
                    SelectionFallback::FirstRow if !self.choices.is_empty() => Some(0),
                    _ => None,
                };
            }
        }
    }
}

impl<C: Cell> RadioRows<C> {
    /// Selects the row at `relative`, firing the selection callback and
    /// moving the selected index.
    ///
    /// Re-selecting the already-selected row is a pure no-op: no callback,
    /// no state change. Otherwise the callback fires first — observing the
    /// pre-change state through [`SelectionChange`] — and the selected index
    /// mutates after it returns.
    ///
    /// The caller owns the two visual effects, in this order: clear the
    /// marker at the *old* physical row (`rows_before_group + previous`),
    /// then set it at the new one.
    pub fn select(&mut self, cell: &mut C, relative: usize) -> Result<SelectOutcome, OutOfRange> {
        if relative >= self.choices.len() {
            return Err(OutOfRange {
                index: relative,
                len: self.choices.len(),
            });
        }
        if self.selected == Some(relative) {
            return Ok(SelectOutcome::Unchanged);
        }
        let previous = self.selected;
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(
                cell,
                SelectionChange {
                    selected: relative,
                    previous,
                },
            );
        }
        self.selected = Some(relative);
        Ok(SelectOutcome::Changed { previous })
    }
}

impl<C> fmt::Debug for RadioRows<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioRows")
            .field("choices", &self.choices)
            .field("heights", &self.heights)
            .field("selected", &self.selected)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// A host-sized run of rows sharing one reuse identifier.
///
/// The host owns the backing data; the group only tracks how many rows it
/// currently spans.
pub struct DynamicRows<C> {
    pub(crate) reuse: String,
    pub(crate) len: usize,
    pub(crate) height: Option<HeightFn>,
    pub(crate) configure: ConfigureFn<C>,
}

impl<C> DynamicRows<C> {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the group currently has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The shared reuse identifier.
    #[must_use]
    pub fn reuse_identifier(&self) -> &str {
        &self.reuse
    }

    /// Sets the row count.
    ///
    /// The group's physical footprint changes with its row count; when the
    /// group is owned by a table plan, use the plan's mutation method instead
    /// so the host also receives the insert/delete batch.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }
}

impl<C> fmt::Debug for DynamicRows<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicRows")
            .field("reuse", &self.reuse)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// A logical group of one or more physical rows that render together.
///
/// The tagged variant keeps dispatch exhaustive at compile time; every shape
/// answers the same capability surface (row count, reuse identifier, height,
/// configuration), and shape-specific operations are reached through the
/// `as_*` accessors.
pub enum RowGroup<C> {
    /// A single fixed row.
    Fixed(FixedRows<C>),
    /// A mutually-exclusive single-selection set.
    Radio(RadioRows<C>),
    /// A host-sized run of rows.
    Dynamic(DynamicRows<C>),
}

impl<C> RowGroup<C> {
    /// The group's shape discriminant.
    #[must_use]
    pub fn kind(&self) -> GroupKind {
        match self {
            Self::Fixed(_) => GroupKind::Fixed,
            Self::Radio(_) => GroupKind::Radio,
            Self::Dynamic(_) => GroupKind::Dynamic,
        }
    }

    /// The group's capabilities.
    #[must_use]
    pub fn caps(&self) -> GroupCaps {
        match self {
            Self::Fixed(_) => GroupCaps::empty(),
            Self::Radio(_) => GroupCaps::SELECTABLE | GroupCaps::RESIZABLE,
            Self::Dynamic(_) => GroupCaps::RESIZABLE,
        }
    }

    /// Number of physical rows this group currently spans.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Fixed(_) => 1,
            Self::Radio(g) => g.len(),
            Self::Dynamic(g) => g.len(),
        }
    }

    /// Returns `true` if the group currently spans no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self, relative: usize) -> Result<(), OutOfRange> {
        let len = self.len();
        if relative < len {
            Ok(())
        } else {
            Err(OutOfRange {
                index: relative,
                len,
            })
        }
    }

    /// The reuse identifier for the row at `relative`.
    pub fn reuse_identifier(&self, relative: usize) -> Result<&str, OutOfRange> {
        self.check(relative)?;
        Ok(match self {
            Self::Fixed(g) => &g.reuse,
            Self::Radio(g) => &g.choices[relative],
            Self::Dynamic(g) => &g.reuse,
        })
    }

    /// The height instruction for the row at `relative`.
    pub fn height(&self, relative: usize) -> Result<RowHeight, OutOfRange> {
        self.check(relative)?;
        Ok(match self {
            Self::Fixed(g) => g.height.unwrap_or_default(),
            Self::Radio(g) => g
                .heights
                .as_ref()
                .map_or(RowHeight::UseTable, |h| h[relative]),
            Self::Dynamic(g) => g
                .height
                .as_ref()
                .map_or(RowHeight::UseTable, |h| h(relative)),
        })
    }

    /// The distinct reuse identifiers this group can produce, independent of
    /// its current row count.
    ///
    /// Hosts use this to register cell types up front; a dynamic group that
    /// is momentarily empty still contributes its identifier.
    pub fn distinct_reuse_identifiers(&self) -> impl Iterator<Item = &str> {
        let (single, many): (Option<&str>, &[String]) = match self {
            Self::Fixed(g) => (Some(&g.reuse), &[]),
            Self::Radio(g) => (None, &g.choices),
            Self::Dynamic(g) => (Some(&g.reuse), &[]),
        };
        single.into_iter().chain(many.iter().map(String::as_str))
    }

    /// Shape accessor for radio groups.
    #[must_use]
    pub fn as_radio(&self) -> Option<&RadioRows<C>> {
        match self {
            Self::Radio(g) => Some(g),
            _ => None,
        }
    }

    /// Mutable shape accessor for radio groups.
    pub fn as_radio_mut(&mut self) -> Option<&mut RadioRows<C>> {
        match self {
            Self::Radio(g) => Some(g),
            _ => None,
        }
    }

    /// Shape accessor for dynamic groups.
    #[must_use]
    pub fn as_dynamic(&self) -> Option<&DynamicRows<C>> {
        match self {
            Self::Dynamic(g) => Some(g),
            _ => None,
        }
    }

    /// Mutable shape accessor for dynamic groups.
    pub fn as_dynamic_mut(&mut self) -> Option<&mut DynamicRows<C>> {
        match self {
            Self::Dynamic(g) => Some(g),
            _ => None,
        }
    }
}

impl<C: Cell> RowGroup<C> {
    /// Configures the host's cell for the row at `relative`.
    ///
    /// Runs the group's configuration callback; for radio groups, then
    /// overlays the selection marker iff the row is the selected one (and
    /// clears it otherwise, since hosts reuse cell instances).
    pub fn configure_cell(&mut self, cell: &mut C, relative: usize) -> Result<(), OutOfRange> {
        self.check(relative)?;
        match self {
            Self::Fixed(g) => (g.configure)(cell, relative),
            Self::Dynamic(g) => (g.configure)(cell, relative),
            Self::Radio(g) => {
                (g.configure)(cell, relative);
                cell.set_selection_marker(g.selected == Some(relative));
            }
        }
        Ok(())
    }
}

impl<C> fmt::Debug for RowGroup<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(g) => f.debug_tuple("Fixed").field(g).finish(),
            Self::Radio(g) => f.debug_tuple("Radio").field(g).finish(),
            Self::Dynamic(g) => f.debug_tuple("Dynamic").field(g).finish(),
        }
    }
}
