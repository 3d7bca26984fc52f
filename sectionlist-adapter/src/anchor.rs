use sectionlist::{FlatSequence, IdentityToken, OverscanPolicy, Viewport};

/// A scroll anchor that keeps a cell in place across snapshot rebuilds.
///
/// Typical use cases:
/// - loading older entries above the viewport (chat/timeline prepend)
/// - section inserts/removals above the current position
/// - size declaration changes that shift every offset
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    pub token: IdentityToken,
    /// Distance from the anchor cell's start to the viewport's leading edge.
    pub offset_in_viewport: u64,
}

/// Captures an anchor for the first visible cell.
///
/// Returns `None` if the sequence is empty.
pub fn capture_first_visible_anchor(
    seq: &FlatSequence,
    viewport: Viewport,
) -> Option<ScrollAnchor> {
    let range = seq.visible_range(viewport, &OverscanPolicy::NONE)?;
    capture_anchor_at(seq, range.first_index, viewport)
}

/// Captures an anchor for the cell at `index`.
pub fn capture_anchor_at(
    seq: &FlatSequence,
    index: usize,
    viewport: Viewport,
) -> Option<ScrollAnchor> {
    let cell = seq.cell(index)?;
    Some(ScrollAnchor {
        token: cell.identity_token.clone(),
        offset_in_viewport: viewport.visible_start.saturating_sub(cell.start),
    })
}

/// Computes the scroll offset that restores `anchor` in `seq`.
///
/// Returns `None` when the anchored cell no longer exists. The offset is clamped to the
/// scrollable range for `viewport_size`.
pub fn resolve_anchor(
    seq: &FlatSequence,
    anchor: &ScrollAnchor,
    viewport_size: u64,
) -> Option<u64> {
    let index = seq.index_of(anchor.token.as_str())?;
    let start = seq.cell(index)?.start;
    let target = start.saturating_add(anchor.offset_in_viewport);
    Some(seq.clamp_scroll_offset(target, viewport_size))
}
