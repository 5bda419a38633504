//! Query modules for the spellscan SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods
//! returning `Result<T>` with typed model payloads.

pub mod profiles;

pub use profiles::ProfileQuery;
