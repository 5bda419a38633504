//! Shared test fixtures for the spellscan SDK integration tests.
//!
//! Provides sample profile documents in the shape the listing projection
//! produces, plus small builders for embedded items.

use serde_json::{json, Value};
use spellscan_sdk::models::{Item, Profile};

/// A full projected profile document as JSON.
pub fn profile_doc(steam_id: &str) -> Value {
    json!({
        "user_steamID64": steam_id,
        "name": "Pyro Dealer",
        "link_steamrep": format!("https://steamrep.com/search?q={steam_id}"),
        "link_steam": format!("https://steamcommunity.com/profiles/{steam_id}"),
        "spelled_items": [
            {
                "icon_url": "fWFc82js0fmoRAP-qOIPu5THSWqfSmTELLqcUywGkijVjZULUrsm1j-9xgEYYQnX",
                "quality": "Strange",
                "market_hash_name": "Rocket Launcher",
                "tradable": false,
                "spells": ["Exorcism"]
            }
        ],
        "halloween_items": [],
        "slots_used": 120,
        "ref_value": 150.5,
        "have_ban": false,
        "bp_info": {
            "ref_value": 150.5,
            "inventory_slots": 300,
            "last_parsed_bp": "2024-02-01 10:00:00",
            "scam_info": {
                "ban_steam_community": false,
                "ban_vac": false
            }
        },
        "last_parsed": "2024-02-02 12:30:00",
        "comment": "checked twice"
    })
}

/// Deserialize the sample document into a `Profile`.
pub fn sample_profile() -> Profile {
    serde_json::from_value(profile_doc("76561198000000001")).unwrap()
}

/// A bare tradable item with the given spells and no icon or quality.
pub fn spelled_item(name: &str, spells: &[&str]) -> Item {
    Item {
        icon_url: None,
        quality: None,
        market_hash_name: name.to_string(),
        tradable: true,
        spells: spells.iter().map(|s| s.to_string()).collect(),
    }
}
