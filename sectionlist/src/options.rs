use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{CellKind, CellPayload};

/// A caller-owned section: section-level data plus its ordered items.
///
/// The engine never mutates sections; a data change means handing over a new slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section<S, I> {
    pub data: S,
    pub items: Vec<I>,
}

impl<S, I> Section<S, I> {
    pub fn new(data: S, items: Vec<I>) -> Self {
        Self { data, items }
    }
}

/// Key extraction strategy supplied by the host.
///
/// Keys must be unique within their extraction scope: section keys across sections, item keys
/// across all items. Violations are not checked while building and surface as colliding
/// identity tokens.
pub trait KeyExtractor<S, I> {
    fn section_key(&self, section: &S, section_index: usize, items: &[I]) -> String;

    fn item_key(&self, item: &I, item_index: usize, section: &S, section_index: usize) -> String;
}

/// Adapts a pair of closures to [`KeyExtractor`].
#[derive(Clone, Copy)]
pub struct KeyFns<FS, FI> {
    section_key: FS,
    item_key: FI,
}

impl<FS, FI> KeyFns<FS, FI> {
    pub fn new(section_key: FS, item_key: FI) -> Self {
        Self {
            section_key,
            item_key,
        }
    }
}

impl<S, I, FS, FI> KeyExtractor<S, I> for KeyFns<FS, FI>
where
    FS: Fn(&S, usize, &[I]) -> String,
    FI: Fn(&I, usize, &S, usize) -> String,
{
    fn section_key(&self, section: &S, section_index: usize, items: &[I]) -> String {
        (self.section_key)(section, section_index, items)
    }

    fn item_key(&self, item: &I, item_index: usize, section: &S, section_index: usize) -> String {
        (self.item_key)(item, item_index, section, section_index)
    }
}

/// Keys sections by index (`"3"`) and items by section and item index (`"3.7"`).
///
/// Only stable while the data is append-only; reordering moves identities between cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexKeys;

impl<S, I> KeyExtractor<S, I> for IndexKeys {
    fn section_key(&self, _section: &S, section_index: usize, _items: &[I]) -> String {
        format!("{section_index}")
    }

    fn item_key(&self, _item: &I, item_index: usize, _section: &S, section_index: usize) -> String {
        format!("{section_index}.{item_index}")
    }
}

/// A per-cell size function, called with the cell's position in the section slice.
pub type SizeFn = Arc<dyn Fn(CellPayload) -> u32 + Send + Sync>;

/// A per-cell size function that may omit the cell by returning `None`.
pub type OptionalSizeFn = Arc<dyn Fn(CellPayload) -> Option<u32> + Send + Sync>;

/// A declared (not measured) cell size.
#[derive(Clone)]
pub enum CellSize {
    Fixed(u32),
    PerCell(SizeFn),
    /// Lets a section or item opt out of an optional cell (a footer for some sections only,
    /// no separator after certain items). Headers and items are always emitted; `None` sizes
    /// them as `0`.
    Optional(OptionalSizeFn),
}

impl CellSize {
    pub fn per_cell(f: impl Fn(CellPayload) -> u32 + Send + Sync + 'static) -> Self {
        Self::PerCell(Arc::new(f))
    }

    pub fn optional(f: impl Fn(CellPayload) -> Option<u32> + Send + Sync + 'static) -> Self {
        Self::Optional(Arc::new(f))
    }

    pub fn resolve(&self, at: CellPayload) -> Option<u32> {
        match self {
            Self::Fixed(size) => Some(*size),
            Self::PerCell(f) => Some(f(at)),
            Self::Optional(f) => f(at),
        }
    }
}

impl From<u32> for CellSize {
    fn from(size: u32) -> Self {
        Self::Fixed(size)
    }
}

impl core::fmt::Debug for CellSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::PerCell(_) => f.write_str("PerCell(..)"),
            Self::Optional(_) => f.write_str("Optional(..)"),
        }
    }
}

/// Size declarations per cell kind.
///
/// Separators and footers are optional; a kind without a declaration is never emitted.
#[derive(Clone, Debug)]
pub struct SizeConfig {
    pub section_header: CellSize,
    pub item: CellSize,
    pub item_separator: Option<CellSize>,
    pub section_footer: Option<CellSize>,
}

impl SizeConfig {
    pub fn new(section_header: impl Into<CellSize>, item: impl Into<CellSize>) -> Self {
        Self {
            section_header: section_header.into(),
            item: item.into(),
            item_separator: None,
            section_footer: None,
        }
    }

    pub fn with_item_separator(mut self, size: impl Into<CellSize>) -> Self {
        self.item_separator = Some(size.into());
        self
    }

    pub fn with_section_footer(mut self, size: impl Into<CellSize>) -> Self {
        self.section_footer = Some(size.into());
        self
    }

    pub fn declaration(&self, kind: CellKind) -> Option<&CellSize> {
        match kind {
            CellKind::SectionHeader => Some(&self.section_header),
            CellKind::Item => Some(&self.item),
            CellKind::ItemSeparator => self.item_separator.as_ref(),
            CellKind::SectionFooter => self.section_footer.as_ref(),
        }
    }

    /// Resolves the size of a `kind` cell at `at`.
    ///
    /// `None` when the kind is not configured or an [`CellSize::Optional`] declaration omits
    /// this cell.
    pub fn size_of(&self, kind: CellKind, at: CellPayload) -> Option<u32> {
        self.declaration(kind).and_then(|size| size.resolve(at))
    }
}

/// Configuration for building a [`crate::FlatSequence`].
///
/// Cheap to clone: the key strategy lives behind an `Arc`, so hosts can tweak sizes or insets
/// and rebuild without re-boxing their extractors.
pub struct SectionListOptions<S, I> {
    pub keys: Arc<dyn KeyExtractor<S, I> + Send + Sync>,
    pub sizes: SizeConfig,
    /// Space reserved before the first cell. Cell offsets start here.
    pub scroll_inset_start: u32,
    /// Space reserved after the last cell. Only affects [`crate::FlatSequence::total_size`].
    pub scroll_inset_end: u32,
}

impl<S, I> Clone for SectionListOptions<S, I> {
    fn clone(&self) -> Self {
        Self {
            keys: Arc::clone(&self.keys),
            sizes: self.sizes.clone(),
            scroll_inset_start: self.scroll_inset_start,
            scroll_inset_end: self.scroll_inset_end,
        }
    }
}

impl<S, I> SectionListOptions<S, I> {
    pub fn new(sizes: SizeConfig, keys: impl KeyExtractor<S, I> + Send + Sync + 'static) -> Self {
        Self {
            keys: Arc::new(keys),
            sizes,
            scroll_inset_start: 0,
            scroll_inset_end: 0,
        }
    }

    /// Creates options from two key-extraction closures.
    pub fn new_with_key_fns(
        sizes: SizeConfig,
        section_key: impl Fn(&S, usize, &[I]) -> String + Send + Sync + 'static,
        item_key: impl Fn(&I, usize, &S, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(sizes, KeyFns::new(section_key, item_key))
    }

    /// Creates options keyed by position (see [`IndexKeys`]).
    pub fn indexed(sizes: SizeConfig) -> Self {
        Self::new(sizes, IndexKeys)
    }

    pub fn with_keys(mut self, keys: impl KeyExtractor<S, I> + Send + Sync + 'static) -> Self {
        self.keys = Arc::new(keys);
        self
    }

    pub fn with_sizes(mut self, sizes: SizeConfig) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_scroll_inset(mut self, scroll_inset_start: u32, scroll_inset_end: u32) -> Self {
        self.scroll_inset_start = scroll_inset_start;
        self.scroll_inset_end = scroll_inset_end;
        self
    }

    pub fn with_scroll_inset_start(mut self, scroll_inset_start: u32) -> Self {
        self.scroll_inset_start = scroll_inset_start;
        self
    }
}

impl<S, I> core::fmt::Debug for SectionListOptions<S, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionListOptions")
            .field("sizes", &self.sizes)
            .field("scroll_inset_start", &self.scroll_inset_start)
            .field("scroll_inset_end", &self.scroll_inset_end)
            .finish_non_exhaustive()
    }
}
