//! Offset → index lookup: a linear-interpolation guess followed by a local walk.
//!
//! Cell sizes come from a handful of per-kind declarations, so the uniform-density guess
//! usually lands within a few cells of the answer and the walk is short. Heavily skewed size
//! mixes degrade towards a linear scan.

use core::cmp::Ordering;

use crate::Cell;

/// Guesses the index of the cell at `position` assuming every cell has the same size.
///
/// `position` is clamped to `[0, total_list_size]`. Returns `0` for an empty list or a zero
/// total; callers normally short-circuit before asking.
pub fn estimate_fractional_index(position: u64, total_list_size: u64, cell_count: usize) -> usize {
    if total_list_size == 0 || cell_count == 0 {
        return 0;
    }
    let position = position.min(total_list_size);
    let last = (cell_count - 1) as u128;
    // floor(position / total * (count - 1)) without going through floats.
    let guess = (position as u128 * last) / total_list_size as u128;
    guess as usize
}

/// Three-way bound check of `position` against `cell`.
///
/// `Less` means the position lies before the cell (step backward), `Greater` at or after its
/// end (step forward), `Equal` inside `[start, start + size)`.
pub fn bound_check(position: u64, cell: &Cell) -> Ordering {
    if position < cell.start {
        Ordering::Less
    } else if position >= cell.end() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Walks from `estimated_index` to the cell containing `position`.
///
/// Stops at the first or last cell when the position lies outside the sequence. Returns `0`
/// for an empty slice.
pub fn correct_index(position: u64, estimated_index: usize, cells: &[Cell]) -> usize {
    let Some(last) = cells.len().checked_sub(1) else {
        return 0;
    };

    let mut index = estimated_index.min(last);
    loop {
        match bound_check(position, &cells[index]) {
            Ordering::Equal => break,
            Ordering::Less if index > 0 => index -= 1,
            Ordering::Greater if index < last => index += 1,
            _ => break,
        }
    }
    vtrace!(position, estimated_index, index, "correct_index");
    index
}

/// Estimate-then-correct lookup over a whole sequence.
///
/// `total_list_size` is the accumulated size of the run (inset included).
pub fn locate(position: u64, total_list_size: u64, cells: &[Cell]) -> usize {
    let estimate = estimate_fractional_index(position, total_list_size, cells.len());
    correct_index(position, estimate, cells)
}
