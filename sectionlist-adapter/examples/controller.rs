use sectionlist::{Align, OverscanPolicy, Section, SectionListOptions, SizeConfig, Viewport};
use sectionlist_adapter::ListController;

fn main() {
    // Example: a host loop driving the controller without holding any UI objects.
    //
    // An adapter would:
    // - call `update(version, sections)` whenever its data may have changed
    // - forward scroll events through `on_scroll`
    // - re-render only when the range (or the sticky header) changed
    let sections: Vec<Section<&str, u32>> = ["A", "B", "C", "D"]
        .into_iter()
        .map(|letter| Section::new(letter, (0..25).collect()))
        .collect();

    let options = SectionListOptions::indexed(SizeConfig::new(28, 44).with_item_separator(1));
    let mut c = ListController::new(options, OverscanPolicy::count(2).with_pixels(Some(200)));
    c.update(1, &sections);
    c.on_viewport(Viewport::new(0, 480));

    let mut out = Vec::new();
    for offset in (0..4_000u64).step_by(250) {
        if c.on_scroll(offset) {
            c.collect_render_indexes(&mut out);
            println!(
                "off={offset} range={:?} sticky={:?} mounted={}",
                c.range(),
                c.sticky_header(),
                out.len()
            );
        }
    }

    let target = c.scroll_to_section(2, Align::Start);
    println!("jumped to section C: off={target:?} range={:?}", c.range());

    // Same version: nothing to rebuild.
    assert!(!c.update(1, &sections));
}
