use crate::IdentityToken;

/// The four kinds of flattened cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    SectionHeader,
    Item,
    ItemSeparator,
    SectionFooter,
}

impl CellKind {
    pub const ALL: [CellKind; 4] = [
        CellKind::SectionHeader,
        CellKind::Item,
        CellKind::ItemSeparator,
        CellKind::SectionFooter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SectionHeader => "sectionHeader",
            Self::Item => "item",
            Self::ItemSeparator => "itemSeparator",
            Self::SectionFooter => "sectionFooter",
        }
    }

    pub(crate) fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// Separators occupy space but are not counted as content by the overscan count budget.
    pub fn is_separator(self) -> bool {
        matches!(self, Self::ItemSeparator)
    }
}

/// Where a cell comes from in the caller's section slice.
///
/// `item_index` is set for `Item` and `ItemSeparator` cells (a separator carries the index of
/// the item it follows).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPayload {
    pub section_index: usize,
    pub item_index: Option<usize>,
}

/// One flattened, positioned rendering unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellKind,
    pub identity_token: IdentityToken,
    /// Size in the scroll axis.
    pub size: u32,
    /// Offset of the leading edge (includes the leading inset).
    pub start: u64,
    /// Identity token of the owning section's key (`SectionHeader` kind).
    pub section_key: IdentityToken,
    pub payload: CellPayload,
}

impl Cell {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }

    /// Whether `position` lies inside `[start, end)`.
    pub fn contains(&self, position: u64) -> bool {
        position >= self.start && position < self.end()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// Direction in which the overscan expander walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// The strictly visible pixel span, `[visible_start, visible_end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub visible_start: u64,
    pub visible_end: u64,
}

impl Viewport {
    pub fn new(visible_start: u64, visible_end: u64) -> Self {
        Self {
            visible_start,
            visible_end,
        }
    }

    /// Builds a viewport from a scroll offset and the viewport's main-axis size.
    pub fn from_scroll(scroll_offset: u64, viewport_size: u32) -> Self {
        Self {
            visible_start: scroll_offset,
            visible_end: scroll_offset.saturating_add(viewport_size as u64),
        }
    }

    pub fn size(&self) -> u64 {
        self.visible_end.saturating_sub(self.visible_start)
    }
}

/// How far past the visible edges to keep cells rendered.
///
/// Both budgets are optional and independent: the expander keeps walking while *either* is
/// unmet, so the effective overscan is the farther of the two. With neither set, overscan is
/// a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverscanPolicy {
    /// Number of non-separator cells.
    pub count: Option<usize>,
    /// Distance in pixels, separators included.
    pub pixels: Option<u64>,
}

impl OverscanPolicy {
    pub const NONE: Self = Self {
        count: None,
        pixels: None,
    };

    pub fn count(count: usize) -> Self {
        Self {
            count: Some(count),
            pixels: None,
        }
    }

    pub fn pixels(pixels: u64) -> Self {
        Self {
            count: None,
            pixels: Some(pixels),
        }
    }

    pub fn with_count(mut self, count: Option<usize>) -> Self {
        self.count = count;
        self
    }

    pub fn with_pixels(mut self, pixels: Option<u64>) -> Self {
        self.pixels = pixels;
        self
    }

    pub fn is_noop(&self) -> bool {
        self.count.is_none() && self.pixels.is_none()
    }
}

/// An inclusive range of flat cell indexes, `[first_index, last_index]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub first_index: usize,
    pub last_index: usize,
}

impl VisibleRange {
    /// Number of cells in the range.
    pub fn count(&self) -> usize {
        self.last_index.saturating_sub(self.first_index) + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.first_index && index <= self.last_index
    }

    pub fn iter(&self) -> core::ops::RangeInclusive<usize> {
        self.first_index..=self.last_index
    }
}

/// A header pinned at the viewport's leading edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickyHeader {
    /// Flat index of the `SectionHeader` cell.
    pub index: usize,
    pub section_index: usize,
    /// Where to draw the pinned header, in list coordinates. Equals the scroll offset until
    /// the release offset is passed; after that the next header pushes it up.
    pub pinned_start: u64,
}
