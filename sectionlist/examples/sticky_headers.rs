// Example: sticky section headers via the release map and render-index emission.
use sectionlist::{
    CellKind, FlatSequence, OverscanPolicy, Section, SectionListOptions, SizeConfig, Viewport,
};

fn main() {
    let sections: Vec<Section<(), ()>> = (0..20)
        .map(|s| Section::new((), vec![(); 3 + s % 4]))
        .collect();
    let seq = FlatSequence::build(
        &sections,
        &SectionListOptions::indexed(SizeConfig::new(24, 40).with_section_footer(8)),
    );

    let mut indexes = Vec::new();
    for scroll in [0u64, 150, 170, 600, 2_000] {
        let viewport = Viewport::from_scroll(scroll, 120);
        seq.collect_render_indexes(viewport, &OverscanPolicy::count(1), &mut indexes);

        let pinned = seq.sticky_header_at(scroll);
        println!("scroll={scroll} pinned={pinned:?}");
        if let Some(header) = pinned.and_then(|p| seq.cell(p.index)) {
            debug_assert_eq!(header.kind, CellKind::SectionHeader);
            println!(
                "  header={} release={:?}",
                header.identity_token,
                seq.release_offset(header.identity_token.as_str())
            );
        }
        println!("  render={indexes:?}");
    }
}
