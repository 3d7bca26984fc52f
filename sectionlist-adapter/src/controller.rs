use alloc::sync::Arc;
use alloc::vec::Vec;

use sectionlist::{
    Align, FlatSequence, OverscanPolicy, Section, SectionListOptions, StickyHeader, Viewport,
    VisibleRange,
};

use crate::{ScrollAnchor, capture_first_visible_anchor, resolve_anchor};

/// A framework-neutral controller that owns the current [`FlatSequence`] snapshot.
///
/// This type does not hold any UI objects or section data. Adapters drive it by calling:
/// - `update(version, sections)` when data may have changed
/// - `on_viewport` / `on_scroll` when the scroll container reports a new position
///
/// Rebuilds are gated by a caller-owned version number: the snapshot is rebuilt only when the
/// version differs from the one it was built with (or the options changed since). Bump the
/// version to force a rebuild when content changed without the keys changing.
///
/// The snapshot lives behind an `Arc` and is replaced, never mutated, so anything still holding
/// a previous [`Self::snapshot`] keeps a consistent view.
pub struct ListController<S, I> {
    options: SectionListOptions<S, I>,
    snapshot: Arc<FlatSequence>,
    built_version: Option<u64>,
    viewport: Viewport,
    overscan: OverscanPolicy,
    range: Option<VisibleRange>,
}

impl<S, I> Clone for ListController<S, I> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            snapshot: Arc::clone(&self.snapshot),
            built_version: self.built_version,
            viewport: self.viewport,
            overscan: self.overscan,
            range: self.range,
        }
    }
}

impl<S, I> core::fmt::Debug for ListController<S, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListController")
            .field("options", &self.options)
            .field("cells", &self.snapshot.len())
            .field("built_version", &self.built_version)
            .field("viewport", &self.viewport)
            .field("overscan", &self.overscan)
            .field("range", &self.range)
            .finish()
    }
}

impl<S, I> ListController<S, I> {
    pub fn new(options: SectionListOptions<S, I>, overscan: OverscanPolicy) -> Self {
        Self {
            options,
            snapshot: Arc::new(FlatSequence::default()),
            built_version: None,
            viewport: Viewport::default(),
            overscan,
            range: None,
        }
    }

    pub fn options(&self) -> &SectionListOptions<S, I> {
        &self.options
    }

    /// Replaces the options. The next `update` rebuilds regardless of version.
    pub fn set_options(&mut self, options: SectionListOptions<S, I>) {
        self.options = options;
        self.built_version = None;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SectionListOptions<S, I>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Version the current snapshot was built with (`None` before the first build or after an
    /// options change).
    pub fn version(&self) -> Option<u64> {
        self.built_version
    }

    pub fn needs_rebuild(&self, version: u64) -> bool {
        self.built_version != Some(version)
    }

    /// Rebuilds the snapshot if `version` differs from the built one.
    ///
    /// Returns `true` when a new snapshot was swapped in.
    pub fn update(&mut self, version: u64, sections: &[Section<S, I>]) -> bool {
        if !self.needs_rebuild(version) {
            return false;
        }
        self.rebuild(version, sections);
        true
    }

    /// Rebuilds like [`Self::update`] while keeping the first visible cell in place.
    ///
    /// Returns the new scroll offset when the anchor survived the rebuild. The adapter should
    /// apply it to the real scroll container; the controller's viewport is already moved.
    pub fn update_anchored(&mut self, version: u64, sections: &[Section<S, I>]) -> Option<u64> {
        if !self.needs_rebuild(version) {
            return None;
        }
        let anchor = self.capture_first_visible_anchor();
        self.rebuild(version, sections);

        let offset = resolve_anchor(&self.snapshot, anchor.as_ref()?, self.viewport.size())?;
        self.on_scroll(offset);
        Some(offset)
    }

    fn rebuild(&mut self, version: u64, sections: &[Section<S, I>]) {
        let next = FlatSequence::build(sections, &self.options);
        vdebug!(
            version,
            previous = ?self.built_version,
            cells = next.len(),
            "ListController: snapshot rebuilt"
        );
        self.snapshot = Arc::new(next);
        self.built_version = Some(version);
        self.recompute_range();
    }

    /// The current snapshot. Cheap to clone; stays valid after later rebuilds.
    pub fn snapshot(&self) -> Arc<FlatSequence> {
        Arc::clone(&self.snapshot)
    }

    pub fn sequence(&self) -> &FlatSequence {
        &self.snapshot
    }

    pub fn overscan(&self) -> OverscanPolicy {
        self.overscan
    }

    /// Returns `true` when the computed range changed.
    pub fn set_overscan(&mut self, overscan: OverscanPolicy) -> bool {
        if self.overscan == overscan {
            return false;
        }
        self.overscan = overscan;
        self.recompute_range()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Applies a new visible span. Returns `true` when the computed range changed.
    pub fn on_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        self.recompute_range()
    }

    /// Moves the viewport to `scroll_offset`, keeping its size.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> bool {
        let end = scroll_offset.saturating_add(self.viewport.size());
        self.on_viewport(Viewport::new(scroll_offset, end))
    }

    fn recompute_range(&mut self) -> bool {
        let next = self.snapshot.visible_range(self.viewport, &self.overscan);
        let changed = next != self.range;
        if changed {
            vtrace!(range = ?next, "ListController: range changed");
        }
        self.range = next;
        changed
    }

    /// The last computed inclusive range (`None` for an empty list).
    pub fn range(&self) -> Option<VisibleRange> {
        self.range
    }

    pub fn sticky_header(&self) -> Option<StickyHeader> {
        self.snapshot.sticky_header_at(self.viewport.visible_start)
    }

    /// Collects the indexes to render (pinned header first, then the range) into `out`.
    pub fn collect_render_indexes(&self, out: &mut Vec<usize>) {
        self.collect_render_indexes_with_pinned(&[], out);
    }

    /// Like [`Self::collect_render_indexes`], keeping the host's `pinned` cells mounted.
    ///
    /// Pins are indexes into the current snapshot; ones a rebuild made stale are dropped.
    pub fn collect_render_indexes_with_pinned(&self, pinned: &[usize], out: &mut Vec<usize>) {
        let seq = &self.snapshot;
        seq.collect_render_indexes_with_pinned(self.viewport, &self.overscan, pinned, out);
    }

    /// Computes the scroll offset for `index` without applying it.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        self.snapshot.offset_for_index(index, align, self.viewport)
    }

    /// Scrolls to cell `index` and returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.on_scroll(offset);
        offset
    }

    /// Scrolls to the header of `section_index` and returns the applied offset.
    pub fn scroll_to_section(&mut self, section_index: usize, align: Align) -> Option<u64> {
        let seq = &self.snapshot;
        let offset = seq.offset_for_section(section_index, align, self.viewport)?;
        self.on_scroll(offset);
        Some(offset)
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor> {
        capture_first_visible_anchor(&self.snapshot, self.viewport)
    }

    /// Restores a previously captured anchor against the current snapshot.
    ///
    /// Returns `true` when the anchored cell was found.
    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor) -> bool {
        let Some(offset) = resolve_anchor(&self.snapshot, anchor, self.viewport.size()) else {
            return false;
        };
        self.on_scroll(offset);
        true
    }
}
