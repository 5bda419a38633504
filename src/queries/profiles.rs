//! Profile listing queries against the `parsed profiles` collection.
//!
//! The filter, projection, and sort are fixed: the listing shows profiles
//! that carry at least one spelled item, are not VAC-banned, and have a
//! backpack valuation under the limit (or none yet), cheapest-inventory
//! first. All three documents are built by pure functions so the query
//! contract can be asserted without a live server.

use std::sync::Arc;

use log::debug;
use mongodb::bson::{doc, Bson, Document};

use crate::cache::PageKey;
use crate::config;
use crate::error::Result;
use crate::models::Profile;

// ---------------------------------------------------------------------------
// ProfileQuery
// ---------------------------------------------------------------------------

/// Query interface for scanned trading profiles.
pub struct ProfileQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> ProfileQuery<'a> {
    /// Create a new `ProfileQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Fetch one page of the listing, cheapest inventory first.
    ///
    /// Results are memoized per `(page, page_size)` for the connection's
    /// cache TTL; within the window repeated calls return the cached page
    /// without touching the database.
    pub fn list(&self, page: u64, page_size: i64) -> Result<Arc<[Profile]>> {
        let key = PageKey { page, page_size };
        if let Some(cached) = self.conn.cache.borrow_mut().get(&key) {
            debug!("profile page ({}, {}) served from cache", page, page_size);
            return Ok(cached);
        }

        let coll = self
            .conn
            .collection::<Profile>(config::PROFILES_COLLECTION);
        let cursor = coll
            .find(Self::filter_doc())
            .projection(Self::projection_doc())
            .sort(Self::sort_doc())
            .skip(Self::skip_for(page, page_size))
            .limit(page_size)
            .run()?;

        let mut profiles = Vec::new();
        for profile in cursor {
            profiles.push(profile?);
        }
        debug!(
            "fetched {} profiles for page ({}, {})",
            profiles.len(),
            page,
            page_size
        );

        let profiles: Arc<[Profile]> = profiles.into();
        self.conn.cache.borrow_mut().insert(key, profiles.clone());
        Ok(profiles)
    }

    /// Count all profiles matching the listing filter, ignoring pagination.
    pub fn count(&self) -> Result<u64> {
        let coll = self
            .conn
            .collection::<Profile>(config::PROFILES_COLLECTION);
        Ok(coll.count_documents(Self::filter_doc()).run()?)
    }

    // -- Query documents ---------------------------------------------------

    /// Server-side filter: has spelled items, no VAC ban, and a backpack
    /// valuation below the limit or not yet priced.
    pub fn filter_doc() -> Document {
        doc! {
            "spelled_items": {
                "$exists": true,
                "$ne": [],
            },
            "bp_info.scam_info.ban_vac": {
                "$ne": true,
            },
            "$or": [
                { "bp_info.ref_value": { "$lt": config::REF_VALUE_LIMIT } },
                { "bp_info.ref_value": { "$eq": Bson::Null } },
            ],
        }
    }

    /// Server-side projection: the rendered fields verbatim, the profile
    /// links and ban flag derived, and the value fields renamed.
    pub fn projection_doc() -> Document {
        doc! {
            "user_steamID64": 1,
            "name": 1,
            "link_steamrep": {
                "$concat": [config::STEAMREP_SEARCH_BASE, "$user_steamID64"],
            },
            "link_steam": {
                "$concat": [config::STEAM_PROFILE_BASE, "$user_steamID64"],
            },
            "spelled_items": 1,
            "halloween_items": 1,
            "slots_used": "$total_items",
            "ref_value": "$bp_info.ref_value",
            "have_ban": {
                "$or": [
                    "$bp_info.scam_info.ban_steam_community",
                    "$bp_info.scam_info.ban_vac",
                ],
            },
            "bp_info": 1,
            "last_parsed": 1,
            "comment": 1,
        }
    }

    /// Ascending by stored item count: profiles using fewer slots first.
    pub fn sort_doc() -> Document {
        doc! { "total_items": 1 }
    }

    /// Documents to skip for a page: `page_size * page`.
    pub fn skip_for(page: u64, page_size: i64) -> u64 {
        page.saturating_mul(page_size.max(0) as u64)
    }
}
