//! Async wrapper around [`SpellscanSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the sync MongoDB driver blocks on the server round-trip.
//!
//! # Example
//!
//! ```no_run
//! # use spellscan_sdk::AsyncSpellscanSdk;
//! # async fn example() -> spellscan_sdk::Result<()> {
//! let sdk = AsyncSpellscanSdk::builder()
//!     .connection_string("mongodb://localhost:27017")
//!     .build()
//!     .await?;
//!
//! // Run any sync SDK method via closure
//! let profiles = sdk.run(|s| s.profiles().list(0, 10)).await?;
//!
//! // Or use a convenience method
//! let html = sdk.render_page(0, 10).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, SpellscanError};
use crate::models::Profile;
use crate::{render, SpellscanSdk};

// ---------------------------------------------------------------------------
// AsyncSpellscanSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSpellscanSdk`] instance.
#[derive(Default)]
pub struct AsyncSpellscanSdkBuilder {
    connection_string: Option<String>,
    database: Option<String>,
    cache_ttl: Option<Duration>,
}

impl AsyncSpellscanSdkBuilder {
    /// Set the MongoDB connection string explicitly.
    pub fn connection_string<S: Into<String>>(mut self, uri: S) -> Self {
        self.connection_string = Some(uri.into());
        self
    }

    /// Select a database other than the default `tf2_trade`.
    pub fn database<S: Into<String>>(mut self, name: S) -> Self {
        self.database = Some(name.into());
        self
    }

    /// Override how long fetched pages stay valid in the query cache.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Build the async SDK, opening the connection on the blocking pool
    /// so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncSpellscanSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SpellscanSdk::builder();
            if let Some(uri) = self.connection_string {
                builder = builder.connection_string(uri);
            }
            if let Some(name) = self.database {
                builder = builder.database(name);
            }
            if let Some(ttl) = self.cache_ttl {
                builder = builder.cache_ttl(ttl);
            }
            let sdk = builder.build()?;
            Ok(AsyncSpellscanSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| SpellscanError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSpellscanSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`SpellscanSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`SpellscanSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncSpellscanSdk {
    inner: Arc<Mutex<SpellscanSdk>>,
}

impl AsyncSpellscanSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncSpellscanSdkBuilder {
        AsyncSpellscanSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&SpellscanSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SpellscanSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| SpellscanError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| SpellscanError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch one listing page asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`ProfileQuery::list()`](crate::queries::ProfileQuery::list).
    pub async fn list(&self, page: u64, page_size: i64) -> Result<Arc<[Profile]>> {
        self.run(move |s| s.profiles().list(page, page_size)).await
    }

    /// Count all profiles matching the listing filter.
    pub async fn count(&self) -> Result<u64> {
        self.run(|s| s.profiles().count()).await
    }

    /// Fetch one listing page and render it as a full HTML page.
    pub async fn render_page(&self, page: u64, page_size: i64) -> Result<String> {
        self.run(move |s| {
            let profiles = s.profiles().list(page, page_size)?;
            Ok(render::render_page(&profiles))
        })
        .await
    }

    /// Drop every cached listing page.
    pub async fn clear_cache(&self) -> Result<()> {
        self.run(|s| {
            s.clear_cache();
            Ok(())
        })
        .await
    }
}
