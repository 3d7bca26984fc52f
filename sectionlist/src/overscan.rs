use crate::{Cell, OverscanPolicy, ScrollDirection};

/// Extends `boundary_index` outward by the overscan budgets of `policy`.
///
/// Two trackers advance with every step: the count tracker for non-separator cells and the
/// pixel tracker by each stepped cell's size. Stepping continues while either configured
/// budget is unmet and stops at the ends of `cells`.
pub fn expand_with_overscan(
    boundary_index: usize,
    direction: ScrollDirection,
    policy: &OverscanPolicy,
    cells: &[Cell],
) -> usize {
    if policy.is_noop() || cells.is_empty() {
        return boundary_index;
    }

    let last = cells.len() - 1;
    let mut index = boundary_index.min(last);
    let mut counted = 0usize;
    let mut pixels = 0u64;

    let wants_more = |counted: usize, pixels: u64| {
        policy.count.is_some_and(|budget| counted < budget)
            || policy.pixels.is_some_and(|budget| pixels < budget)
    };

    while wants_more(counted, pixels) {
        let next = match direction {
            ScrollDirection::Backward => index.checked_sub(1),
            ScrollDirection::Forward => (index < last).then_some(index + 1),
        };
        let Some(next) = next else {
            break;
        };
        index = next;

        let cell = &cells[index];
        if !cell.kind.is_separator() {
            counted += 1;
        }
        pixels = pixels.saturating_add(cell.size as u64);
    }

    index
}
