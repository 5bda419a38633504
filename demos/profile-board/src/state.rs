/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async spellscan SDK instance. Dispatches blocking SDK operations
    /// to a thread pool internally; the listing cache lives inside it, so
    /// repeated page loads within the TTL never re-query the database.
    pub sdk: spellscan_sdk::AsyncSpellscanSdk,
}
