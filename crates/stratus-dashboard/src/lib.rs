//! Pinned-city dashboard for Stratus
//!
//! A small persisted list of cities the user has pinned. Storage is a
//! single JSON slot behind an injected repository trait; the whole list
//! is read at open and written back after every mutation.

pub mod dashboard;
pub mod store;

pub use dashboard::{Dashboard, DashboardError};
pub use store::{DashboardStore, JsonFileStore, MemoryStore, StoreError};
