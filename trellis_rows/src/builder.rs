// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated, fail-fast construction of row groups.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::group::{DynamicRows, FixedRows, RadioRows, SelectFn, SelectionFallback};
use crate::{BuildError, ConfigureFn, HeightFn, RowGroup, RowHeight};

/// Entry points for the row-group builders.
///
/// Each entry point captures the group's configuration callback up front and
/// returns a shape-specific builder for the optional knobs. `build()`
/// validates everything at once and either returns a ready [`RowGroup`] or a
/// [`BuildError`]; a failed build produces nothing.
///
/// ```rust
/// use trellis_rows::{Cell, GroupBuilder, RowHeight};
///
/// struct DemoCell(String);
/// # impl Cell for DemoCell { fn set_selection_marker(&mut self, _: bool) {} }
///
/// let group = GroupBuilder::fixed("banner", |cell: &mut DemoCell, _| {
///     cell.0 = "Welcome".to_owned();
/// })
/// .height(RowHeight::Fixed(96.0))
/// .build()
/// .unwrap();
///
/// assert_eq!(group.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GroupBuilder;

impl GroupBuilder {
    /// Starts a single fixed row with the given reuse identifier.
    pub fn fixed<C>(
        reuse: impl Into<String>,
        configure: impl FnMut(&mut C, usize) + 'static,
    ) -> FixedBuilder<C> {
        FixedBuilder {
            reuse: reuse.into(),
            height: None,
            configure: Box::new(configure),
        }
    }

    /// Starts a radio group with one row per choice.
    ///
    /// The choice strings double as per-row reuse identifiers. The initial
    /// selection defaults to relative index 0.
    pub fn radio<C, S>(
        choices: impl IntoIterator<Item = S>,
        configure: impl FnMut(&mut C, usize) + 'static,
    ) -> RadioBuilder<C>
    where
        S: Into<String>,
    {
        RadioBuilder {
            choices: choices.into_iter().map(Into::into).collect(),
            heights: None,
            selected: 0,
            fallback: SelectionFallback::FirstRow,
            configure: Box::new(configure),
            on_select: None,
        }
    }

    /// Starts a dynamic group of `len` rows sharing one reuse identifier.
    pub fn dynamic<C>(
        reuse: impl Into<String>,
        len: usize,
        configure: impl FnMut(&mut C, usize) + 'static,
    ) -> DynamicBuilder<C> {
        DynamicBuilder {
            reuse: reuse.into(),
            len,
            height: None,
            configure: Box::new(configure),
        }
    }
}

/// Builder for a single fixed row. See [`GroupBuilder::fixed`].
pub struct FixedBuilder<C> {
    reuse: String,
    height: Option<RowHeight>,
    configure: ConfigureFn<C>,
}

impl<C> FixedBuilder<C> {
    /// Sets the row's height instruction (default: [`RowHeight::UseTable`]).
    #[must_use]
    pub fn height(mut self, height: RowHeight) -> Self {
        self.height = Some(height);
        self
    }

    /// Builds the group. Fixed rows have no invalid shapes; the `Result` is
    /// kept for a uniform builder contract.
    pub fn build(self) -> Result<RowGroup<C>, BuildError> {
        Ok(RowGroup::Fixed(FixedRows {
            reuse: self.reuse,
            height: self.height,
            configure: self.configure,
        }))
    }
}

impl<C> fmt::Debug for FixedBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuilder")
            .field("reuse", &self.reuse)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Builder for a radio group. See [`GroupBuilder::radio`].
pub struct RadioBuilder<C> {
    choices: Vec<String>,
    heights: Option<Vec<RowHeight>>,
    selected: usize,
    fallback: SelectionFallback,
    configure: ConfigureFn<C>,
    on_select: Option<SelectFn<C>>,
}

impl<C> RadioBuilder<C> {
    /// Sets per-row height instructions; must cover the choices exactly.
    #[must_use]
    pub fn heights(mut self, heights: Vec<RowHeight>) -> Self {
        self.heights = Some(heights);
        self
    }

    /// Sets the initially selected relative index (default: 0).
    #[must_use]
    pub fn selected(mut self, relative: usize) -> Self {
        self.selected = relative;
        self
    }

    /// Sets the selection-invalidation policy (default:
    /// [`SelectionFallback::FirstRow`]).
    #[must_use]
    pub fn fallback(mut self, fallback: SelectionFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the selection callback, fired when the selection moves to a new
    /// row. Re-selecting the current row does not fire it.
    #[must_use]
    pub fn on_select(
        mut self,
        on_select: impl FnMut(&mut C, crate::SelectionChange) + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Builds the group, validating the whole shape:
    ///
    /// - the choice list must be non-empty,
    /// - a height list must cover the choices exactly,
    /// - the initial selection must be in range.
    pub fn build(self) -> Result<RowGroup<C>, BuildError> {
        if self.choices.is_empty() {
            return Err(BuildError::NoChoices);
        }
        if let Some(heights) = &self.heights {
            if heights.len() != self.choices.len() {
                return Err(BuildError::HeightCountMismatch {
                    heights: heights.len(),
                    rows: self.choices.len(),
                });
            }
        }
        if self.selected >= self.choices.len() {
            return Err(BuildError::SelectedOutOfRange {
                index: self.selected,
                len: self.choices.len(),
            });
        }
        Ok(RowGroup::Radio(RadioRows {
            choices: self.choices,
            heights: self.heights,
            selected: Some(self.selected),
            fallback: self.fallback,
            configure: self.configure,
            on_select: self.on_select,
        }))
    }
}

impl<C> fmt::Debug for RadioBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioBuilder")
            .field("choices", &self.choices)
            .field("heights", &self.heights)
            .field("selected", &self.selected)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Builder for a dynamic group. See [`GroupBuilder::dynamic`].
pub struct DynamicBuilder<C> {
    reuse: String,
    len: usize,
    height: Option<HeightFn>,
    configure: ConfigureFn<C>,
}

impl<C> DynamicBuilder<C> {
    /// Sets a per-relative-index height callback (default: every row uses
    /// [`RowHeight::UseTable`]).
    #[must_use]
    pub fn height_with(mut self, height: impl Fn(usize) -> RowHeight + 'static) -> Self {
        self.height = Some(Box::new(height));
        self
    }

    /// Builds the group. Any `len` (including 0) is a valid shape; the
    /// `Result` is kept for a uniform builder contract.
    pub fn build(self) -> Result<RowGroup<C>, BuildError> {
        Ok(RowGroup::Dynamic(DynamicRows {
            reuse: self.reuse,
            len: self.len,
            height: self.height,
            configure: self.configure,
        }))
    }
}

impl<C> fmt::Debug for DynamicBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicBuilder")
            .field("reuse", &self.reuse)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::GroupBuilder;
    use crate::{BuildError, RowHeight, SelectionFallback};

    struct NoCell;

    impl crate::Cell for NoCell {
        fn set_selection_marker(&mut self, _on: bool) {}
    }

    #[test]
    fn empty_choice_list_fails_at_build_time() {
        let err = GroupBuilder::radio::<NoCell, &str>([], |_, _| {})
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::NoChoices);
    }

    #[test]
    fn mismatched_height_list_fails() {
        let err = GroupBuilder::radio(["a", "b", "c"], |_: &mut NoCell, _| {})
            .heights(vec![RowHeight::UseTable, RowHeight::Automatic])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::HeightCountMismatch {
                heights: 2,
                rows: 3,
            }
        );
    }

    #[test]
    fn initial_selection_out_of_range_fails() {
        let err = GroupBuilder::radio(["a", "b"], |_: &mut NoCell, _| {})
            .selected(2)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::SelectedOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn radio_defaults_select_the_first_row() {
        let group = GroupBuilder::radio(["a", "b"], |_: &mut NoCell, _| {})
            .build()
            .unwrap();
        let radio = group.as_radio().unwrap();
        assert_eq!(radio.selected(), Some(0));
        assert_eq!(radio.fallback(), SelectionFallback::FirstRow);
    }

    #[test]
    fn fixed_and_dynamic_builds_are_infallible_shapes() {
        assert!(
            GroupBuilder::fixed("banner", |_: &mut NoCell, _| {})
                .height(RowHeight::Automatic)
                .build()
                .is_ok()
        );
        assert!(
            GroupBuilder::dynamic("item", 0, |_: &mut NoCell, _| {})
                .build()
                .is_ok()
        );
    }
}
