use alloc::vec::Vec;

use crate::emitter::IndexEmitter;
use crate::error::SequenceError;
use crate::key::{ReleaseMap, TokenMap};
use crate::overscan::expand_with_overscan;
use crate::search::locate;
use crate::{
    Align, Cell, CellKind, OverscanPolicy, ScrollDirection, StickyHeader, Viewport, VisibleRange,
};

/// An immutable, positioned snapshot of a sectioned list.
///
/// Built in one pass by [`FlatSequence::build`] (or [`crate::build_flat_sequence`]) and never
/// patched: a data or size change means building a new snapshot and swapping it in. All
/// queries take `&self`, so readers can keep using an old snapshot while a new one is built.
///
/// Offsets are in the list's coordinate space: the first cell starts at the leading inset,
/// and `cell[i + 1].start == cell[i].start + cell[i].size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatSequence {
    pub(crate) cells: Vec<Cell>,
    pub(crate) accumulated_size: u64,
    pub(crate) scroll_inset_start: u32,
    pub(crate) scroll_inset_end: u32,
    pub(crate) release_map: ReleaseMap,
    pub(crate) header_indexes: Vec<usize>, // flat index of each section's header
}

impl Default for FlatSequence {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            accumulated_size: 0,
            scroll_inset_start: 0,
            scroll_inset_end: 0,
            release_map: ReleaseMap::default(),
            header_indexes: Vec::new(),
        }
    }
}

impl FlatSequence {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.header_indexes.len()
    }

    /// End offset of the last cell (leading inset included).
    pub fn accumulated_size(&self) -> u64 {
        self.accumulated_size
    }

    /// Full scrollable extent: the accumulated size plus the trailing inset.
    pub fn total_size(&self) -> u64 {
        let trailing = self.scroll_inset_end as u64;
        self.accumulated_size.saturating_add(trailing)
    }

    pub fn scroll_inset_start(&self) -> u32 {
        self.scroll_inset_start
    }

    pub fn scroll_inset_end(&self) -> u32 {
        self.scroll_inset_end
    }

    /// Flat index of the header of `section_index`.
    pub fn header_index(&self, section_index: usize) -> Option<usize> {
        self.header_indexes.get(section_index).copied()
    }

    /// Scroll offset at which the pinned header `token` gives way to the next section's
    /// header. Only headers of non-terminal sections have one.
    pub fn release_offset(&self, token: &str) -> Option<u64> {
        self.release_map.get(token).copied()
    }

    /// Iterates over the sticky header release map (token → release offset).
    pub fn for_each_release_offset(&self, mut f: impl FnMut(&str, u64)) {
        for (token, offset) in self.release_map.iter() {
            f(token.as_str(), *offset);
        }
    }

    pub fn release_map_len(&self) -> usize {
        self.release_map.len()
    }

    /// Finds the first cell whose identity token is `token`.
    ///
    /// Linear in the number of cells; intended for occasional lookups such as restoring an
    /// anchor after a rebuild, not for per-frame use.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.identity_token.as_str() == token)
    }

    /// Index of the cell containing `offset`, clamped to the first/last cell.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if self.cells.is_empty() {
            return None;
        }
        Some(locate(offset, self.accumulated_size, &self.cells))
    }

    pub fn cell_at_offset(&self, offset: u64) -> Option<&Cell> {
        self.index_at_offset(offset).map(|i| &self.cells[i])
    }

    /// Maps a viewport plus overscan policy to an inclusive index range.
    ///
    /// The leading edge is `visible_start`, the trailing edge the last visible pixel
    /// (`visible_end - 1`). Offsets outside the list degrade to the nearest boundary cell.
    /// Returns `None` only for an empty sequence.
    pub fn visible_range(
        &self,
        viewport: Viewport,
        policy: &OverscanPolicy,
    ) -> Option<VisibleRange> {
        if self.cells.is_empty() {
            return None;
        }

        let leading = viewport.visible_start;
        let trailing = viewport.visible_end.saturating_sub(1).max(leading);

        let first = locate(leading, self.accumulated_size, &self.cells);
        let last = locate(trailing, self.accumulated_size, &self.cells).max(first);

        let cells = self.cells.as_slice();
        let range = VisibleRange {
            first_index: expand_with_overscan(first, ScrollDirection::Backward, policy, cells),
            last_index: expand_with_overscan(last, ScrollDirection::Forward, policy, cells),
        };
        vtrace!(
            visible_start = viewport.visible_start,
            visible_end = viewport.visible_end,
            first,
            last,
            first_index = range.first_index,
            last_index = range.last_index,
            "visible_range"
        );
        Some(range)
    }

    /// Cells of `range`, clamped to the sequence.
    pub fn cells_in(&self, range: VisibleRange) -> &[Cell] {
        let len = self.cells.len();
        let start = range.first_index.min(len);
        let end = range.last_index.saturating_add(1).clamp(start, len);
        &self.cells[start..end]
    }

    /// The header to pin at the viewport's leading edge for `scroll_offset`.
    ///
    /// `None` while the offset is still before the first header or the list is empty.
    pub fn sticky_header_at(&self, scroll_offset: u64) -> Option<StickyHeader> {
        let index = self.index_at_offset(scroll_offset)?;
        let section_index = self.cells[index].payload.section_index;
        let header_index = self.header_index(section_index)?;
        let header = &self.cells[header_index];
        if scroll_offset < header.start {
            return None;
        }

        let pinned_start = match self.release_offset(header.identity_token.as_str()) {
            Some(release) => scroll_offset.min(release),
            None => scroll_offset,
        };
        Some(StickyHeader {
            index: header_index,
            section_index,
            pinned_start,
        })
    }

    /// Emits the indexes to render for `viewport`, in ascending order.
    ///
    /// When the pinned sticky header lies before the overscanned range it is emitted first, so
    /// the host can mount it even though its natural position is off-screen.
    pub fn for_each_render_index(
        &self,
        viewport: Viewport,
        policy: &OverscanPolicy,
        f: impl FnMut(usize),
    ) {
        self.for_each_render_index_with_pinned(viewport, policy, &[], f);
    }

    /// Like [`Self::for_each_render_index`], plus host-pinned indexes outside the range.
    ///
    /// `pinned` should be ascending. Out-of-bounds, repeated or out-of-order entries are
    /// dropped, so a pin list left over from an older snapshot is safe to pass.
    pub fn for_each_render_index_with_pinned(
        &self,
        viewport: Viewport,
        policy: &OverscanPolicy,
        pinned: &[usize],
        mut f: impl FnMut(usize),
    ) {
        let Some(range) = self.visible_range(viewport, policy) else {
            return;
        };
        let sticky = self.sticky_header_at(viewport.visible_start).map(|h| h.index);

        let mut e = IndexEmitter::new(range, self.cells.len(), &mut f);
        e.emit_leading(sticky, pinned);
        e.emit_range();
        e.emit_trailing(pinned);
    }

    /// Collects render indexes into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_render_index`]; reuse `out` across frames.
    pub fn collect_render_indexes(
        &self,
        viewport: Viewport,
        policy: &OverscanPolicy,
        out: &mut Vec<usize>,
    ) {
        self.collect_render_indexes_with_pinned(viewport, policy, &[], out);
    }

    pub fn collect_render_indexes_with_pinned(
        &self,
        viewport: Viewport,
        policy: &OverscanPolicy,
        pinned: &[usize],
        out: &mut Vec<usize>,
    ) {
        out.clear();
        self.for_each_render_index_with_pinned(viewport, policy, pinned, |i| out.push(i));
    }

    pub fn max_scroll_offset(&self, viewport_size: u64) -> u64 {
        self.total_size().saturating_sub(viewport_size)
    }

    pub fn clamp_scroll_offset(&self, offset: u64, viewport_size: u64) -> u64 {
        offset.min(self.max_scroll_offset(viewport_size))
    }

    /// Scroll offset that brings cell `index` into view with `align`.
    ///
    /// `viewport` is the current one; `Align::Auto` keeps it when the cell is already fully
    /// visible. The index is clamped to the last cell, and the result to the scrollable range.
    pub fn offset_for_index(&self, index: usize, align: Align, viewport: Viewport) -> u64 {
        let Some(last) = self.cells.len().checked_sub(1) else {
            return 0;
        };
        let cell = &self.cells[index.min(last)];
        let view = viewport.size();

        let target = match align {
            Align::Start => cell.start,
            Align::End => cell.end().saturating_sub(view),
            Align::Center => {
                let center = cell.start.saturating_add(cell.size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = viewport.visible_start;
                if cell.start >= cur && cell.end() <= viewport.visible_end {
                    cur
                } else if cell.start < cur {
                    cell.start
                } else {
                    cell.end().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target, view)
    }

    /// Scroll offset that brings the header of `section_index` into view.
    pub fn offset_for_section(
        &self,
        section_index: usize,
        align: Align,
        viewport: Viewport,
    ) -> Option<u64> {
        let index = self.header_index(section_index)?;
        Some(self.offset_for_index(index, align, viewport))
    }

    /// Checks the snapshot's invariants, reporting the first violation.
    ///
    /// Building trusts its inputs; duplicate keys or inconsistent sizes only show up here.
    pub fn validate(&self) -> Result<(), SequenceError> {
        let mut expected = self.scroll_inset_start as u64;
        let mut seen: TokenMap<&str, usize> = TokenMap::default();

        for (index, cell) in self.cells.iter().enumerate() {
            if cell.start != expected {
                return Err(SequenceError::NonContiguous {
                    index,
                    start: cell.start,
                    expected,
                });
            }
            expected = cell.end();

            if let Some(&first) = seen.get(cell.identity_token.as_str()) {
                return Err(SequenceError::DuplicateToken {
                    token: cell.identity_token.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(cell.identity_token.as_str(), index);
        }

        if expected != self.accumulated_size {
            return Err(SequenceError::SizeMismatch {
                accumulated: self.accumulated_size,
                end: expected,
            });
        }
        Ok(())
    }

    /// Counts cells of `kind`.
    pub fn count_of(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }
}
