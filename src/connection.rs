//! MongoDB connection wrapper.
//!
//! Opens the client once from a connection string and hands out typed
//! collection handles for the lifetime of the SDK. The query-result cache
//! lives here so everything the queries share sits behind one borrow.

use std::cell::RefCell;
use std::time::Duration;

use log::info;
use mongodb::bson::doc;
use mongodb::sync::{Client, Collection, Database};

use crate::cache::QueryCache;
use crate::error::Result;

/// Wraps the sync MongoDB client and the selected database.
///
/// Constructed once per process (by the SDK builder) and shared read-only
/// across all queries; the handle is never re-created and relies on `Drop`
/// for teardown.
pub struct Connection {
    client: Client,
    db: Database,
    /// Listing-result cache shared by all query interfaces.
    pub cache: RefCell<QueryCache>,
}

impl Connection {
    /// Open a client from the connection string and select a database.
    ///
    /// Issues a `ping` so that an unreachable server fails here, at startup,
    /// rather than on the first page render.
    pub fn connect(uri: &str, database: &str, cache_ttl: Duration) -> Result<Self> {
        let client = Client::with_uri_str(uri)?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).run()?;
        info!("connected to database {}", database);

        Ok(Self {
            client,
            db,
            cache: RefCell::new(QueryCache::new(cache_ttl)),
        })
    }

    /// Typed handle to a collection in the selected database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// The selected database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Access the underlying client for advanced usage.
    pub fn raw(&self) -> &Client {
        &self.client
    }
}
