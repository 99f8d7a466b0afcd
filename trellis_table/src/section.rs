// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sections: ordered row groups plus header/footer labels.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use trellis_rows::RowGroup;

pub(crate) struct Entry<C> {
    pub(crate) group: RowGroup<C>,
    pub(crate) visible: bool,
}

/// An ordered collection of row groups displayed together, with optional
/// header and footer labels.
///
/// Insertion order is the sole determinant of physical placement: groups are
/// never reordered by size, priority, or content. Section-level visibility
/// is independent of per-group visibility; a group's rows are physically
/// present only when both hold.
///
/// Direct setters here flip flags without producing insert/delete batches;
/// when the section is owned by a [`TablePlan`](crate::TablePlan), prefer
/// the plan's mutation methods so the host receives the ops too.
pub struct Section<C> {
    pub(crate) entries: Vec<Entry<C>>,
    pub(crate) header: Option<String>,
    pub(crate) footer: Option<String>,
    pub(crate) visible: bool,
}

impl<C> Section<C> {
    /// Number of groups in this section (visible or not).
    #[must_use]
    pub fn num_groups(&self) -> usize {
        self.entries.len()
    }

    /// The section's header text, if any.
    #[must_use]
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The section's footer text, if any.
    #[must_use]
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Whether the section itself is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets section-level visibility without emitting ops.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The group at `index`, if it exists.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&RowGroup<C>> {
        self.entries.get(index).map(|e| &e.group)
    }

    /// The group at `index`, mutably.
    pub fn group_mut(&mut self, index: usize) -> Option<&mut RowGroup<C>> {
        self.entries.get_mut(index).map(|e| &mut e.group)
    }

    /// Whether the group at `index` is visible (independent of the section's
    /// own visibility).
    #[must_use]
    pub fn group_visible(&self, index: usize) -> Option<bool> {
        self.entries.get(index).map(|e| e.visible)
    }

    /// Sets group-level visibility without emitting ops. Returns `false` if
    /// there is no group at `index`.
    pub fn set_group_visible(&mut self, index: usize, visible: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(e) => {
                e.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Iterates `(group, group-visible)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&RowGroup<C>, bool)> {
        self.entries.iter().map(|e| (&e.group, e.visible))
    }
}

impl<C> fmt::Debug for Section<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("visible", &self.visible)
            .field("num_groups", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Collects an ordered sequence of row groups into a [`Section`].
///
/// ```rust
/// use trellis_rows::{Cell, GroupBuilder};
/// use trellis_table::SectionBuilder;
///
/// struct DemoCell;
/// # impl Cell for DemoCell { fn set_selection_marker(&mut self, _: bool) {} }
///
/// let mut builder = SectionBuilder::new().header("Account");
/// let first = builder.push(GroupBuilder::fixed("name", |_: &mut DemoCell, _| {}).build().unwrap());
/// let second = builder.push_hidden(GroupBuilder::fixed("debug", |_: &mut DemoCell, _| {}).build().unwrap());
///
/// let section = builder.finish();
/// assert_eq!((first, second), (0, 1));
/// assert_eq!(section.header(), Some("Account"));
/// assert_eq!(section.group_visible(1), Some(false));
/// ```
pub struct SectionBuilder<C> {
    entries: Vec<Entry<C>>,
    header: Option<String>,
    footer: Option<String>,
    visible: bool,
}

impl<C> SectionBuilder<C> {
    /// Starts an empty, visible section with no labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            header: None,
            footer: None,
            visible: true,
        }
    }

    /// Sets the section's header text.
    #[must_use]
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    /// Sets the section's footer text.
    #[must_use]
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    /// Marks the whole section as initially hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Appends a visible group; returns its index within the section.
    pub fn push(&mut self, group: RowGroup<C>) -> usize {
        self.entries.push(Entry {
            group,
            visible: true,
        });
        self.entries.len() - 1
    }

    /// Appends an initially hidden group; returns its index within the
    /// section.
    pub fn push_hidden(&mut self, group: RowGroup<C>) -> usize {
        self.entries.push(Entry {
            group,
            visible: false,
        });
        self.entries.len() - 1
    }

    /// Finishes the section.
    #[must_use]
    pub fn finish(self) -> Section<C> {
        Section {
            entries: self.entries,
            header: self.header,
            footer: self.footer,
            visible: self.visible,
        }
    }
}

impl<C> Default for SectionBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for SectionBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionBuilder")
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("visible", &self.visible)
            .field("num_groups", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::SectionBuilder;
    use trellis_rows::GroupBuilder;

    struct NoCell;

    impl trellis_rows::Cell for NoCell {
        fn set_selection_marker(&mut self, _on: bool) {}
    }

    #[test]
    fn builder_preserves_insertion_order_and_flags() {
        let mut builder = SectionBuilder::new().header("General").footer("Fine print");
        let a = builder.push(
            GroupBuilder::fixed("a", |_: &mut NoCell, _| {})
                .build()
                .unwrap(),
        );
        let b = builder.push_hidden(
            GroupBuilder::dynamic("b", 3, |_: &mut NoCell, _| {})
                .build()
                .unwrap(),
        );

        let section = builder.finish();
        assert_eq!((a, b), (0, 1));
        assert_eq!(section.num_groups(), 2);
        assert_eq!(section.header(), Some("General"));
        assert_eq!(section.footer(), Some("Fine print"));
        assert!(section.is_visible());
        assert_eq!(section.group_visible(0), Some(true));
        assert_eq!(section.group_visible(1), Some(false));
        assert_eq!(section.group(1).unwrap().len(), 3);
        assert_eq!(section.group_visible(2), None);
    }

    #[test]
    fn hidden_sections_and_direct_setters() {
        let mut builder = SectionBuilder::new().hidden();
        builder.push(
            GroupBuilder::fixed("a", |_: &mut NoCell, _| {})
                .build()
                .unwrap(),
        );
        let mut section = builder.finish();

        assert!(!section.is_visible());
        section.set_visible(true);
        assert!(section.is_visible());

        assert!(section.set_group_visible(0, false));
        assert_eq!(section.group_visible(0), Some(false));
        assert!(!section.set_group_visible(5, true));
    }
}
