//! HTML rendering of profile cards.
//!
//! A single linear pass over the fetched profiles, stateless across cards:
//! [`render_page`] wraps the card list in a page skeleton, [`render_card`]
//! emits one bordered card per profile. No I/O happens here -- rendering
//! works off whatever the query returned.

use crate::config;
use crate::models::{Item, Profile};

pub const PAGE_HEADING: &str = "Parsed items!";
pub const NO_NAME_PLACEHOLDER: &str = "No Name \u{1F61E}";

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; max-width: 760px; margin: 1em auto; }\n\
.card { border: 1px solid #bbb; border-radius: 6px; padding: 0.8em; margin-bottom: 1em; }\n\
.card-header { display: flex; justify-content: space-between; gap: 0.5em; }\n\
.warning { background: #fff3cd; border: 1px solid #e0c878; padding: 0.4em; margin: 0.4em 0; }\n\
.item { border: 1px solid #ddd; border-radius: 4px; display: flex; gap: 0.8em; align-items: center; padding: 0.4em; margin: 0.4em 0; }\n";

/// Render the whole listing page: heading plus one card per profile, in
/// returned order.
pub fn render_page(profiles: &[Profile]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", PAGE_HEADING));
    out.push_str(&format!("<style>\n{}</style>\n", PAGE_STYLE));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", PAGE_HEADING));

    for profile in profiles {
        out.push_str(&render_card(profile));
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Render one profile as a bordered card.
pub fn render_card(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"card\">\n");

    // Two-column header: identity and links left, usage and value right.
    out.push_str("<div class=\"card-header\">\n<div>\n");
    let name = profile.name.as_deref().unwrap_or(NO_NAME_PLACEHOLDER);
    out.push_str(&format!("<p>{}</p>\n", escape(name)));
    out.push_str(&format!(
        "<p><a href=\"{}\">steamrep</a> <a href=\"{}\">steam</a></p>\n",
        escape(&profile.link_steamrep),
        escape(&profile.link_steam),
    ));
    out.push_str("</div>\n<div>\n");
    out.push_str(&format!(
        "<p>Slots used: {}/{}</p>\n",
        profile.slots_used, profile.bp_info.inventory_slots,
    ));
    match profile.ref_value {
        Some(value) => out.push_str(&format!("<p>Ref Value: {}</p>\n", value)),
        None => out.push_str("<p>Ref Value: n/a</p>\n"),
    }
    out.push_str("</div>\n</div>\n");

    if profile.have_ban {
        out.push_str("<p class=\"warning\">Have ban</p>\n");
    }

    if !profile.spelled_items.is_empty() {
        out.push_str("<p>Spelled items:</p>\n");
        for item in &profile.spelled_items {
            out.push_str(&render_spelled_item(item));
        }
    }

    if !profile.halloween_items.is_empty() {
        out.push_str("<p>Halloween items:</p>\n");
        for item in &profile.halloween_items {
            out.push_str(&format!("<p>{}</p>\n", escape(&item.market_hash_name)));
        }
    }

    out.push_str(&format!(
        "<p>Last parsed me: {}</p>\n",
        escape(&profile.last_parsed)
    ));
    out.push_str(&format!(
        "<p>Last parsed by bp: {}</p>\n",
        escape(&profile.bp_info.last_parsed_bp)
    ));
    let comment = profile.comment.as_deref().unwrap_or("");
    out.push_str(&format!("<p>Comment: {}</p>\n", escape(comment)));

    out.push_str("</div>\n");
    out
}

/// Render one spelled item: optional icon, name line, spells summary.
fn render_spelled_item(item: &Item) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"item\">\n");

    if let Some(icon_url) = &item.icon_url {
        out.push_str(&format!(
            "<img src=\"{}\" width=\"128\">\n",
            escape(&item_icon_src(icon_url)),
        ));
    }

    let mut name_line = String::new();
    if let Some(quality) = &item.quality {
        name_line.push_str(&escape(quality));
        name_line.push(' ');
    }
    name_line.push_str(&escape(&item.market_hash_name));
    if !item.tradable {
        name_line.push_str(" <strong>Non tradable!!</strong>");
    }
    out.push_str(&format!("<p>{}</p>\n", name_line));

    let spells: Vec<String> = item.spells.iter().map(|s| escape(s)).collect();
    out.push_str(&format!(
        "<p>{} spells: {}</p>\n",
        item.spells.len(),
        spells.join(",")
    ));

    out.push_str("</div>\n");
    out
}

/// Full CDN URL for an item's icon.
pub fn item_icon_src(icon_url: &str) -> String {
    format!(
        "{}{}{}",
        config::ICON_CDN_BASE,
        icon_url,
        config::ICON_CDN_SUFFIX
    )
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
