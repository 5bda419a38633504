//! Spellscan SDK for Rust.
//!
//! Provides a high-level client for browsing trading profiles that carry
//! spelled cosmetic items. Profile documents are produced by an external
//! scanner into a MongoDB collection; this SDK runs the fixed listing query
//! (filter, projection, sort, pagination), memoizes each page for a fixed
//! time window, and renders the results as HTML cards.
//!
//! # Quick start
//!
//! ```no_run
//! use spellscan_sdk::SpellscanSdk;
//!
//! let sdk = SpellscanSdk::builder()
//!     .connection_string("mongodb://localhost:27017")
//!     .build()
//!     .unwrap();
//!
//! // One page of profiles, cheapest inventory first
//! let profiles = sdk.profiles().list(0, 10).unwrap();
//!
//! // Render them as a card list
//! let html = spellscan_sdk::render::render_page(&profiles);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod render;

#[cfg(feature = "async")]
pub use async_client::AsyncSpellscanSdk;
pub use cache::QueryCache;
pub use connection::Connection;
pub use error::{Result, SpellscanError};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// SpellscanSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SpellscanSdk`] instance.
///
/// Use [`SpellscanSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SpellscanSdkBuilder::build) to create the SDK.
pub struct SpellscanSdkBuilder {
    connection_string: Option<String>,
    database: String,
    cache_ttl: Duration,
}

impl Default for SpellscanSdkBuilder {
    fn default() -> Self {
        Self {
            connection_string: None,
            database: config::DATABASE_NAME.to_string(),
            cache_ttl: config::DEFAULT_CACHE_TTL,
        }
    }
}

impl SpellscanSdkBuilder {
    /// Set the MongoDB connection string explicitly.
    ///
    /// If not set, [`build()`](Self::build) reads it from the
    /// `SPELLSCAN_MONGODB_URI` environment variable.
    pub fn connection_string<S: Into<String>>(mut self, uri: S) -> Self {
        self.connection_string = Some(uri.into());
        self
    }

    /// Select a database other than the default `tf2_trade`.
    pub fn database<S: Into<String>>(mut self, name: S) -> Self {
        self.database = name.into();
        self
    }

    /// Override how long fetched pages stay valid in the query cache.
    ///
    /// Defaults to 10 minutes.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Build the SDK, resolving configuration and opening the connection.
    ///
    /// A missing connection string or an unreachable server is fatal here --
    /// there is no fallback data source, so nothing renders without one.
    pub fn build(self) -> Result<SpellscanSdk> {
        let uri = match self.connection_string {
            Some(uri) => uri,
            None => config::connection_string_from_env()?,
        };
        let conn = Connection::connect(&uri, &self.database, self.cache_ttl)?;
        Ok(SpellscanSdk { conn })
    }
}

// ---------------------------------------------------------------------------
// SpellscanSdk
// ---------------------------------------------------------------------------

/// The main entry point for the spellscan SDK.
///
/// Wraps a [`Connection`] (which owns the MongoDB client and the query
/// cache) and exposes domain-specific query interfaces as lightweight
/// borrowing wrappers.
///
/// Created via [`SpellscanSdk::builder()`].
pub struct SpellscanSdk {
    conn: Connection,
}

impl SpellscanSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SpellscanSdkBuilder {
        SpellscanSdkBuilder::default()
    }

    /// Access the profile query interface.
    ///
    /// Returns a lightweight wrapper that borrows from the underlying
    /// connection and provides the listing and count queries.
    pub fn profiles(&self) -> queries::profiles::ProfileQuery<'_> {
        queries::profiles::ProfileQuery::new(&self.conn)
    }

    /// Drop every cached listing page so the next call re-queries.
    pub fn clear_cache(&self) {
        self.conn.cache.borrow_mut().clear();
    }

    /// Number of listing pages currently cached.
    pub fn cached_pages(&self) -> usize {
        self.conn.cache.borrow().len()
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SpellscanSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.conn.cache.borrow();
        write!(
            f,
            "SpellscanSdk(database={}, cached_pages={}, cache_ttl={}s)",
            self.conn.database().name(),
            cache.len(),
            cache.ttl().as_secs()
        )
    }
}
