//! City browsing for Stratus
//!
//! Provides the paginated/searchable world-city list: a client for the
//! geonames records API plus the browse state machine that owns
//! accumulation, search, sorting, and the infinite-scroll trigger.

pub mod browse;
pub mod client;
pub mod session;
pub mod types;

pub use browse::{derive_view, BrowseState, PageState, SortColumn, SortDirection};
pub use client::{CitySearchClient, CitySearchError};
pub use session::BrowseSession;
pub use types::City;
