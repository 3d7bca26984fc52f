use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use sectionlist::{
    Align, CellKind, OverscanPolicy, Section, SectionListOptions, SizeConfig, Viewport,
    make_identity_token,
};

type Sections = Vec<Section<String, String>>;

fn options() -> SectionListOptions<String, String> {
    SectionListOptions::new_with_key_fns(
        SizeConfig::new(20, 10),
        |s: &String, _, _| s.clone(),
        |item: &String, _, _, _| item.clone(),
    )
}

fn section(key: &str, items: &[&str]) -> Section<String, String> {
    Section::new(
        key.to_string(),
        items.iter().map(|s| s.to_string()).collect(),
    )
}

fn chat(prefix: &[&str]) -> Sections {
    let mut items: Vec<&str> = prefix.to_vec();
    items.extend(["m0", "m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9"]);
    vec![section("chat", &items)]
}

// a: header 0..20, items 20..50; b: header 50..70, items 70..100.
fn two_sections() -> Sections {
    vec![
        section("a", &["a0", "a1", "a2"]),
        section("b", &["b0", "b1", "b2"]),
    ]
}

#[test]
fn anchor_preserves_position_across_prepend() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    assert!(c.update(1, &chat(&[])));
    c.on_viewport(Viewport::new(45, 75));

    let anchor = c.capture_first_visible_anchor().unwrap();
    assert_eq!(anchor.token, make_identity_token(CellKind::Item, "m2"));
    assert_eq!(anchor.offset_in_viewport, 5);

    // Five older entries land above: m2 moves from 40 to 90.
    let offset = c.update_anchored(2, &chat(&["p0", "p1", "p2", "p3", "p4"]));
    assert_eq!(offset, Some(95));
    assert_eq!(c.viewport(), Viewport::new(95, 125));
    assert_eq!(c.capture_first_visible_anchor(), Some(anchor));
}

#[test]
fn anchor_helpers_work_on_bare_snapshots() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    c.update(1, &chat(&[]));
    let before = c.snapshot();

    let anchor = capture_anchor_at(&before, 3, Viewport::new(45, 75)).unwrap();
    assert_eq!(anchor.token.as_str(), "item:m2");

    c.update(2, &chat(&["p0"]));
    assert_eq!(resolve_anchor(&c.snapshot(), &anchor, 30), Some(55));

    // Removed cells do not resolve.
    c.update(3, &[section("chat", &["m0"])]);
    assert_eq!(resolve_anchor(&c.snapshot(), &anchor, 30), None);
    assert!(!c.apply_anchor(&anchor));
}

#[test]
fn anchor_resolution_clamps_to_scrollable_range() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    c.update(1, &chat(&[]));
    c.on_viewport(Viewport::new(90, 120));
    let anchor = c.capture_first_visible_anchor().unwrap();

    // Shorter items after a size change: the old relative offset overshoots the end.
    c.update_options(|o| *o = o.clone().with_sizes(SizeConfig::new(20, 4)));
    assert_eq!(c.update_anchored(2, &chat(&[])), Some(30));
}

#[test]
fn update_is_version_gated() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    assert_eq!(c.version(), None);
    assert!(c.needs_rebuild(0));

    assert!(c.update(7, &two_sections()));
    assert_eq!(c.version(), Some(7));
    assert_eq!(c.sequence().len(), 8);

    // Same version: the new data is ignored until the caller bumps it.
    assert!(!c.update(7, &chat(&[])));
    assert_eq!(c.sequence().len(), 8);
    assert_eq!(c.update_anchored(7, &chat(&[])), None);

    assert!(c.update(8, &chat(&[])));
    assert_eq!(c.sequence().len(), 11);
}

#[test]
fn old_snapshot_survives_swap() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    c.update(1, &two_sections());
    let old = c.snapshot();
    assert!(Arc::ptr_eq(&old, &c.snapshot()));

    c.update(2, &chat(&[]));
    assert!(!Arc::ptr_eq(&old, &c.snapshot()));
    assert_eq!(old.len(), 8);
    assert_eq!(old.total_size(), 100);
    assert_eq!(old.release_offset("sectionHeader:a"), Some(30));
    assert_eq!(c.sequence().section_count(), 1);
}

#[test]
fn option_changes_force_rebuild() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    c.update(1, &two_sections());

    c.update_options(|o| *o = o.clone().with_scroll_inset(10, 5));
    assert_eq!(c.version(), None);
    assert_eq!(c.options().scroll_inset_start, 10);
    assert!(c.update(1, &two_sections()));
    assert_eq!(c.sequence().cells()[0].start, 10);
    assert_eq!(c.sequence().total_size(), 115);
}

#[test]
fn viewport_changes_report_range_changes() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    assert_eq!(c.range(), None);
    c.update(1, &chat(&[]));

    assert!(c.on_viewport(Viewport::new(0, 30)));
    let range = c.range().unwrap();
    assert_eq!((range.first_index, range.last_index), (0, 1));

    assert!(!c.on_viewport(Viewport::new(0, 30)));
    assert!(c.on_scroll(5));
    assert_eq!(c.viewport(), Viewport::new(5, 35));
    assert_eq!(c.range().unwrap().last_index, 2);

    // Still inside the same cells.
    assert!(!c.on_scroll(6));

    assert!(c.set_overscan(OverscanPolicy::count(2)));
    assert_eq!(c.range().unwrap().last_index, 4);
    assert!(!c.set_overscan(OverscanPolicy::count(2)));
    assert_eq!(c.overscan(), OverscanPolicy::count(2));
}

#[test]
fn sticky_header_and_render_indexes() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    c.update(1, &two_sections());

    c.on_scroll(10);
    let sticky = c.sticky_header().unwrap();
    assert_eq!((sticky.index, sticky.pinned_start), (0, 10));

    c.on_viewport(Viewport::new(35, 65));
    let sticky = c.sticky_header().unwrap();
    assert_eq!(sticky.section_index, 0);
    assert_eq!(sticky.pinned_start, 30);

    let mut out = Vec::new();
    c.collect_render_indexes(&mut out);
    assert_eq!(out, vec![0, 2, 3, 4]);

    // A pin the next rebuild leaves out of bounds is dropped.
    c.collect_render_indexes_with_pinned(&[7], &mut out);
    assert_eq!(out, vec![0, 2, 3, 4, 7]);
    c.update(2, &[section("a", &["a0", "a1", "a2"])]);
    c.collect_render_indexes_with_pinned(&[7], &mut out);
    assert_eq!(out, vec![0, 2, 3]);
}

#[test]
fn scroll_commands_move_the_viewport() {
    let mut c = ListController::new(options(), OverscanPolicy::NONE);
    c.update(1, &two_sections());
    c.on_viewport(Viewport::new(0, 30));

    assert_eq!(c.scroll_to_section(1, Align::Start), Some(50));
    assert_eq!(c.viewport(), Viewport::new(50, 80));
    assert_eq!(c.scroll_to_section(9, Align::Start), None);

    // Clamped to total 100 - viewport 30.
    assert_eq!(c.scroll_to_index_offset(7, Align::Start), 70);
    assert_eq!(c.scroll_to_index(0, Align::Auto), 0);
    assert_eq!(c.viewport().visible_start, 0);
}

#[test]
fn controller_clone_shares_snapshot() {
    let mut c = ListController::new(options(), OverscanPolicy::pixels(40));
    c.update(1, &two_sections());
    let copy = c.clone();
    assert!(Arc::ptr_eq(&copy.snapshot(), &c.snapshot()));
    assert!(alloc::format!("{c:?}").contains("ListController"));
}

