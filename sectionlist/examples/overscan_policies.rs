// Example: count-based vs pixel-based overscan, and both combined.
use sectionlist::{FlatSequence, OverscanPolicy, Section, SectionListOptions, SizeConfig, Viewport};

fn main() {
    let sections: Vec<Section<(), ()>> = (0..10).map(|_| Section::new((), vec![(); 30])).collect();
    let seq = FlatSequence::build(
        &sections,
        &SectionListOptions::indexed(SizeConfig::new(30, 60).with_item_separator(2)),
    );

    let viewport = Viewport::from_scroll(5_000, 600);
    let policies = [
        ("none", OverscanPolicy::NONE),
        ("count(4)", OverscanPolicy::count(4)),
        ("pixels(300)", OverscanPolicy::pixels(300)),
        ("count(4)+pixels(300)", OverscanPolicy::count(4).with_pixels(Some(300))),
    ];
    for (name, policy) in policies {
        let r = seq.visible_range(viewport, &policy).expect("non-empty list");
        println!("{name:>22}: {}..={} ({} cells)", r.first_index, r.last_index, r.count());
    }
}
