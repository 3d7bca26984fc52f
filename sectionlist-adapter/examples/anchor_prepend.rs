use sectionlist::{OverscanPolicy, Section, SectionListOptions, SizeConfig, Viewport};
use sectionlist_adapter::ListController;

fn messages(older: usize, newer: usize) -> Vec<Section<String, u64>> {
    let ids = (1000 - older as u64)..(1000 + newer as u64);
    vec![Section::new("today".to_string(), ids.collect())]
}

fn main() {
    // Example: keep the reader's place while older messages load above the viewport.
    //
    // The adapter flow is typically:
    // 1) bump the data version whenever the message list changes
    // 2) call `update_anchored` instead of `update`
    // 3) apply the returned offset to the real scroll container
    let options = SectionListOptions::new_with_key_fns(
        SizeConfig::new(24, 40),
        |day: &String, _, _| day.clone(),
        |id: &u64, _, _, _| id.to_string(),
    );
    let mut c = ListController::new(options, OverscanPolicy::count(3));
    c.update(1, &messages(0, 100));
    c.on_viewport(Viewport::new(2_010, 2_610));

    println!(
        "before prepend: viewport={:?} anchor={:?}",
        c.viewport(),
        c.capture_first_visible_anchor()
    );

    let applied = c.update_anchored(2, &messages(20, 100));
    println!(
        "after prepend: applied={applied:?} viewport={:?} anchor={:?}",
        c.viewport(),
        c.capture_first_visible_anchor()
    );
}
