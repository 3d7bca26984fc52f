use alloc::vec::Vec;

use crate::key::ReleaseMap;
use crate::{
    Cell, CellKind, CellPayload, FlatSequence, IdentityToken, KeyExtractor, Section,
    SectionListOptions, SizeConfig, make_identity_token,
};

/// Flattens `sections` into a positioned cell run starting at `scroll_inset_start`.
///
/// Per section the emitted order is `SectionHeader, (Item, ItemSeparator?)*, SectionFooter?`:
/// separators only when configured and never after a section's last item, footers only when
/// configured. Empty sections still emit their header (and footer).
///
/// Single forward pass, `O(cells)`; the output is a pure function of the inputs.
pub fn build_flat_sequence<S, I>(
    sections: &[Section<S, I>],
    keys: &dyn KeyExtractor<S, I>,
    sizes: &SizeConfig,
    scroll_inset_start: u32,
) -> FlatSequence {
    let mut f = Flattener::new(sizes, scroll_inset_start, capacity_hint(sections, sizes));

    for (section_index, section) in sections.iter().enumerate() {
        let section_key = keys.section_key(&section.data, section_index, &section.items);
        let section_token = make_identity_token(CellKind::SectionHeader, &section_key);
        let at_section = CellPayload {
            section_index,
            item_index: None,
        };

        f.push_header(section_token.clone(), at_section);

        let item_count = section.items.len();
        for (item_index, item) in section.items.iter().enumerate() {
            let item_key = keys.item_key(item, item_index, &section.data, section_index);
            let at_item = CellPayload {
                section_index,
                item_index: Some(item_index),
            };
            f.push(CellKind::Item, &item_key, &section_token, at_item);
            if item_index + 1 < item_count {
                f.push_optional(CellKind::ItemSeparator, &item_key, &section_token, at_item);
            }
        }

        f.push_optional(CellKind::SectionFooter, &section_key, &section_token, at_section);
    }

    let seq = f.finish(scroll_inset_start);
    vdebug!(
        sections = sections.len(),
        cells = seq.len(),
        accumulated_size = seq.accumulated_size(),
        "build_flat_sequence"
    );
    seq
}

impl FlatSequence {
    /// Builds a fresh snapshot from `sections` using `options`.
    pub fn build<S, I>(sections: &[Section<S, I>], options: &SectionListOptions<S, I>) -> Self {
        let mut seq = build_flat_sequence(
            sections,
            options.keys.as_ref(),
            &options.sizes,
            options.scroll_inset_start,
        );
        seq.scroll_inset_end = options.scroll_inset_end;
        seq
    }
}

fn capacity_hint<S, I>(sections: &[Section<S, I>], sizes: &SizeConfig) -> usize {
    let per_section = 1 + usize::from(sizes.section_footer.is_some());
    let items: usize = sections.iter().map(|s| s.items.len()).sum();
    let separators = if sizes.item_separator.is_some() {
        sections
            .iter()
            .map(|s| s.items.len().saturating_sub(1))
            .sum()
    } else {
        0
    };
    sections.len() * per_section + items + separators
}

struct Flattener<'a> {
    sizes: &'a SizeConfig,
    cells: Vec<Cell>,
    accumulated: u64,
    header_indexes: Vec<usize>,
    release_map: ReleaseMap,
    // Header awaiting its release offset: (token, size).
    open_header: Option<(IdentityToken, u32)>,
}

impl<'a> Flattener<'a> {
    fn new(sizes: &'a SizeConfig, scroll_inset_start: u32, capacity: usize) -> Self {
        Self {
            sizes,
            cells: Vec::with_capacity(capacity),
            accumulated: scroll_inset_start as u64,
            header_indexes: Vec::new(),
            release_map: ReleaseMap::default(),
            open_header: None,
        }
    }

    fn push_header(&mut self, token: IdentityToken, at: CellPayload) {
        let start = self.accumulated;
        if let Some((prev, prev_size)) = self.open_header.take() {
            let release = start.saturating_sub(prev_size as u64);
            if self.release_map.insert(prev, release).is_some() {
                vwarn!(release, "duplicate section key; sticky release offset overwritten");
            }
        }

        let size = self.required_size(CellKind::SectionHeader, at);
        self.header_indexes.push(self.cells.len());
        self.open_header = Some((token.clone(), size));
        self.push_cell(CellKind::SectionHeader, token.clone(), size, token, at);
    }

    fn push(&mut self, kind: CellKind, base_key: &str, section: &IdentityToken, at: CellPayload) {
        let size = self.required_size(kind, at);
        let token = make_identity_token(kind, base_key);
        self.push_cell(kind, token, size, section.clone(), at);
    }

    // Separators and footers: emitted only when a size resolves for this position.
    fn push_optional(
        &mut self,
        kind: CellKind,
        base_key: &str,
        section: &IdentityToken,
        at: CellPayload,
    ) {
        if let Some(size) = self.sizes.size_of(kind, at) {
            let token = make_identity_token(kind, base_key);
            self.push_cell(kind, token, size, section.clone(), at);
        }
    }

    fn push_cell(
        &mut self,
        kind: CellKind,
        identity_token: IdentityToken,
        size: u32,
        section_key: IdentityToken,
        payload: CellPayload,
    ) {
        let start = self.accumulated;
        self.accumulated = start.saturating_add(size as u64);
        self.cells.push(Cell {
            kind,
            identity_token,
            size,
            start,
            section_key,
            payload,
        });
    }

    fn required_size(&self, kind: CellKind, at: CellPayload) -> u32 {
        self.sizes.size_of(kind, at).unwrap_or_else(|| {
            vwarn!(?kind, "no size resolved for a required cell; using 0");
            0
        })
    }

    fn finish(self, scroll_inset_start: u32) -> FlatSequence {
        FlatSequence {
            cells: self.cells,
            accumulated_size: self.accumulated,
            scroll_inset_start,
            scroll_inset_end: 0,
            release_map: self.release_map,
            header_indexes: self.header_indexes,
        }
    }
}
