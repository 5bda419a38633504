use std::time::Duration;

use crate::error::{Result, SpellscanError};

/// Database holding the scanner's output collections.
pub const DATABASE_NAME: &str = "tf2_trade";

/// Collection of profile documents produced by the external scanner.
pub const PROFILES_COLLECTION: &str = "parsed profiles";

/// Environment variable holding the MongoDB connection string.
pub const CONNECTION_STRING_ENV: &str = "SPELLSCAN_MONGODB_URI";

pub const STEAMREP_SEARCH_BASE: &str = "https://steamrep.com/search?q=";
pub const STEAM_PROFILE_BASE: &str = "https://steamcommunity.com/profiles/";
pub const ICON_CDN_BASE: &str = "https://community.akamai.steamstatic.com/economy/image/";
pub const ICON_CDN_SUFFIX: &str = "?allow_animated=1";

/// Profiles at or above this backpack valuation are filtered out of listings.
pub const REF_VALUE_LIMIT: f64 = 2000.0;

/// How long a fetched page of profiles stays valid in the query cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Read the MongoDB connection string from the environment.
///
/// Fails with [`SpellscanError::Config`] when the variable is unset; there is
/// no fallback data source to degrade to.
pub fn connection_string_from_env() -> Result<String> {
    std::env::var(CONNECTION_STRING_ENV).map_err(|_| {
        SpellscanError::Config(format!(
            "environment variable {} is not set",
            CONNECTION_STRING_ENV
        ))
    })
}
