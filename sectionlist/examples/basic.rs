// Example: flatten a sectioned list and map a viewport to the cells to render.
use sectionlist::{FlatSequence, OverscanPolicy, Section, SectionListOptions, SizeConfig, Viewport};

fn main() {
    let sections: Vec<Section<String, u32>> = (0..1_000)
        .map(|s| Section::new(format!("section-{s}"), (0..50).collect()))
        .collect();

    let options = SectionListOptions::new_with_key_fns(
        SizeConfig::new(32, 48).with_item_separator(1),
        |name: &String, _, _| name.clone(),
        |item: &u32, _, section: &String, _| format!("{section}/{item}"),
    );

    let seq = FlatSequence::build(&sections, &options);
    println!("cells={} total_size={}", seq.len(), seq.total_size());

    let viewport = Viewport::from_scroll(1_234_567, 800);
    let policy = OverscanPolicy::count(3).with_pixels(Some(400));
    let range = seq.visible_range(viewport, &policy).expect("non-empty list");
    println!("range={range:?} ({} cells)", range.count());

    for cell in seq.cells_in(range).iter().take(5) {
        println!("  {:?} {} @ {}+{}", cell.kind, cell.identity_token, cell.start, cell.size);
    }
}
