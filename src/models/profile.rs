use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Profile — one scanned trading profile, as shaped by the listing projection
// ---------------------------------------------------------------------------

/// A scanned trading profile.
///
/// Mirrors the projected form of a `parsed profiles` document: verbatim
/// scanner fields plus the fields the projection derives (`link_steamrep`,
/// `link_steam`, `have_ban`) or renames (`slots_used` from `total_items`,
/// `ref_value` hoisted out of `bp_info`).
///
/// Fields the renderer tolerates being absent are `Option` or defaulted;
/// the rest are required and fail deserialization of the whole batch when
/// missing, matching the all-or-nothing page render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "user_steamID64")]
    pub user_steam_id64: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link_steamrep: String,
    #[serde(default)]
    pub link_steam: String,
    #[serde(default)]
    pub spelled_items: Vec<Item>,
    #[serde(default)]
    pub halloween_items: Vec<Item>,
    /// Inventory slots in use, renamed from the stored `total_items`.
    pub slots_used: i64,
    #[serde(default)]
    pub ref_value: Option<f64>,
    #[serde(default)]
    pub have_ban: bool,
    pub bp_info: BpInfo,
    /// When this system's own scanner last visited the profile.
    pub last_parsed: String,
    #[serde(default)]
    pub comment: Option<String>,
}

// ---------------------------------------------------------------------------
// BpInfo — valuation and ban data from the inventory-valuation service
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BpInfo {
    /// Backpack valuation in refined metal. Null until the valuation
    /// service has priced the inventory.
    #[serde(default)]
    pub ref_value: Option<f64>,
    pub inventory_slots: i64,
    pub last_parsed_bp: String,
    #[serde(default)]
    pub scam_info: ScamInfo,
}

/// Ban flags sourced from trading platforms and anti-cheat.
///
/// Absent flags deserialize to `false`; absence and "not banned" mean the
/// same thing here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScamInfo {
    #[serde(default)]
    pub ban_steam_community: bool,
    #[serde(default)]
    pub ban_vac: bool,
}

impl ScamInfo {
    /// True if any ban flag is set.
    pub fn any_ban(&self) -> bool {
        self.ban_steam_community || self.ban_vac
    }
}

// ---------------------------------------------------------------------------
// Item — an embedded cosmetic item instance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    pub market_hash_name: String,
    pub tradable: bool,
    /// Spell attribute names. Only spelled items carry any.
    #[serde(default)]
    pub spells: Vec<String>,
}
