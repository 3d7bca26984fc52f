use crate::VisibleRange;

/// Merges pinned indexes with a computed range into one ascending, duplicate-free stream.
///
/// Pinned indexes come from the sticky header and from the host (focused or selected cells
/// that must stay mounted while scrolled away). Host pins are taken as given: entries that are
/// out of bounds, repeated, or not ascending are dropped rather than trusted.
pub(crate) struct IndexEmitter<'a> {
    range: VisibleRange,
    count: usize,
    last: Option<usize>,
    emit: &'a mut dyn FnMut(usize),
}

impl<'a> IndexEmitter<'a> {
    pub(crate) fn new(range: VisibleRange, count: usize, emit: &'a mut dyn FnMut(usize)) -> Self {
        Self {
            range,
            count,
            last: None,
            emit,
        }
    }

    /// Emits `index` unless it is out of bounds or not past the last emitted index.
    fn push(&mut self, index: usize) {
        if index >= self.count {
            vwarn!(index, count = self.count, "render index out of bounds, dropped");
            return;
        }
        match self.last {
            Some(prev) if index == prev => return,
            Some(prev) if index < prev => {
                vwarn!(prev, next = index, "pinned indexes must be ascending, dropped");
                return;
            }
            _ => {}
        }
        self.last = Some(index);
        (self.emit)(index);
    }

    /// Pins before the range, with `sticky` merged in at its ordered position.
    pub(crate) fn emit_leading(&mut self, sticky: Option<usize>, pinned: &[usize]) {
        let first = self.range.first_index;
        let mut sticky = sticky.filter(|&s| s < first);
        for &index in pinned.iter().filter(|&&i| i < first) {
            if let Some(s) = sticky.filter(|&s| s <= index) {
                self.push(s);
                sticky = None;
            }
            self.push(index);
        }
        if let Some(s) = sticky {
            self.push(s);
        }
    }

    pub(crate) fn emit_range(&mut self) {
        let Some(end) = self.count.checked_sub(1) else {
            return;
        };
        for i in self.range.first_index..=self.range.last_index.min(end) {
            self.push(i);
        }
    }

    /// Pins after the range.
    pub(crate) fn emit_trailing(&mut self, pinned: &[usize]) {
        let last = self.range.last_index;
        for &index in pinned.iter().filter(|&&i| i > last) {
            self.push(index);
        }
    }
}
