//! Renderer tests: card layout, fallbacks for absent fields, the spelled
//! and halloween item sections, and HTML escaping.

mod common;

use spellscan_sdk::config;
use spellscan_sdk::render::{render_card, render_page, NO_NAME_PLACEHOLDER, PAGE_HEADING};

// ---------------------------------------------------------------------------
// Spelled items
// ---------------------------------------------------------------------------

#[test]
fn spelled_item_renders_name_marker_and_spells() {
    let profile = common::sample_profile();
    let html = render_card(&profile);

    assert!(html.contains("Spelled items:"));
    assert!(html.contains("Rocket Launcher"));
    assert!(html.contains("Non tradable!!"));
    assert!(html.contains("1 spells: Exorcism"));
}

#[test]
fn tradable_item_has_no_marker() {
    let mut profile = common::sample_profile();
    profile.spelled_items[0].tradable = true;

    let html = render_card(&profile);
    assert!(!html.contains("Non tradable!!"));
}

#[test]
fn quality_prefixes_the_name_line() {
    let profile = common::sample_profile();
    let html = render_card(&profile);

    assert!(html.contains("Strange Rocket Launcher"));
}

#[test]
fn spells_are_comma_joined() {
    let mut profile = common::sample_profile();
    profile.spelled_items = vec![common::spelled_item(
        "Team Captain",
        &["Voices from Below", "Chromatic Corruption"],
    )];

    let html = render_card(&profile);
    assert!(html.contains("2 spells: Voices from Below,Chromatic Corruption"));
}

#[test]
fn icon_is_rendered_only_when_present() {
    let profile = common::sample_profile();
    let html = render_card(&profile);
    let expected_src = format!(
        "{}{}{}",
        config::ICON_CDN_BASE,
        profile.spelled_items[0].icon_url.as_deref().unwrap(),
        config::ICON_CDN_SUFFIX
    );
    assert!(html.contains(&expected_src));

    let mut bare = common::sample_profile();
    bare.spelled_items[0].icon_url = None;
    assert!(!render_card(&bare).contains("<img"));
}

#[test]
fn empty_spelled_items_renders_no_section() {
    let mut profile = common::sample_profile();
    profile.spelled_items.clear();

    let html = render_card(&profile);
    assert!(!html.contains("Spelled items:"));
}

// ---------------------------------------------------------------------------
// Halloween items
// ---------------------------------------------------------------------------

#[test]
fn halloween_section_lists_halloween_items() {
    let mut profile = common::sample_profile();
    profile.halloween_items = vec![common::spelled_item("Spooky Hat", &[])];

    let html = render_card(&profile);
    assert!(html.contains("Halloween items:"));
    assert!(html.contains("Spooky Hat"));
}

#[test]
fn no_halloween_items_renders_no_section() {
    let profile = common::sample_profile();
    assert!(profile.halloween_items.is_empty());

    let html = render_card(&profile);
    assert!(!html.contains("Halloween items:"));
}

// ---------------------------------------------------------------------------
// Header and identity
// ---------------------------------------------------------------------------

#[test]
fn missing_name_shows_placeholder() {
    let mut profile = common::sample_profile();
    profile.name = None;

    let html = render_card(&profile);
    assert!(html.contains(NO_NAME_PLACEHOLDER));
}

#[test]
fn present_name_is_shown() {
    let profile = common::sample_profile();
    let html = render_card(&profile);

    assert!(html.contains("Pyro Dealer"));
    assert!(!html.contains(NO_NAME_PLACEHOLDER));
}

#[test]
fn header_links_point_at_derived_urls() {
    let profile = common::sample_profile();
    let html = render_card(&profile);

    assert!(html.contains("href=\"https://steamrep.com/search?q=76561198000000001\""));
    assert!(html.contains("href=\"https://steamcommunity.com/profiles/76561198000000001\""));
}

#[test]
fn header_shows_slot_usage_and_value() {
    let profile = common::sample_profile();
    let html = render_card(&profile);

    assert!(html.contains("Slots used: 120/300"));
    assert!(html.contains("Ref Value: 150.5"));
}

#[test]
fn absent_ref_value_renders_as_na() {
    let mut profile = common::sample_profile();
    profile.ref_value = None;

    let html = render_card(&profile);
    assert!(html.contains("Ref Value: n/a"));
}

#[test]
fn ban_warning_only_when_flagged() {
    let mut profile = common::sample_profile();
    assert!(!render_card(&profile).contains("Have ban"));

    profile.have_ban = true;
    assert!(render_card(&profile).contains("Have ban"));
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[test]
fn footer_shows_scan_times_and_comment() {
    let profile = common::sample_profile();
    let html = render_card(&profile);

    assert!(html.contains("Last parsed me: 2024-02-02 12:30:00"));
    assert!(html.contains("Last parsed by bp: 2024-02-01 10:00:00"));
    assert!(html.contains("Comment: checked twice"));
}

#[test]
fn absent_comment_renders_blank() {
    let mut profile = common::sample_profile();
    profile.comment = None;

    let html = render_card(&profile);
    assert!(html.contains("Comment: </p>"));
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

#[test]
fn page_has_heading_and_one_card_per_profile() {
    let profiles = vec![common::sample_profile(), common::sample_profile()];
    let html = render_page(&profiles);

    assert!(html.contains(&format!("<h1>{}</h1>", PAGE_HEADING)));
    assert_eq!(html.matches("<div class=\"card\">").count(), 2);
}

#[test]
fn empty_page_still_renders_heading() {
    let html = render_page(&[]);

    assert!(html.contains(PAGE_HEADING));
    assert_eq!(html.matches("<div class=\"card\">").count(), 0);
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

#[test]
fn user_strings_are_escaped() {
    let mut profile = common::sample_profile();
    profile.name = Some("<script>alert(\"x\")</script>".to_string());
    profile.spelled_items[0].market_hash_name = "A & B <Launcher>".to_string();

    let html = render_card(&profile);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A &amp; B &lt;Launcher&gt;"));
}
