//! Async orchestration of the browse state machine.
//!
//! `BrowseSession` ties the state machine to the search client: the
//! sentinel-visibility signal drives page loads one at a time, and
//! query changes run server-side searches whose results replace the
//! view. All transitions happen on discrete await points; there is no
//! parallel fetching.

use crate::browse::{BrowseState, SortColumn};
use crate::client::{CitySearchClient, CitySearchError};
use crate::types::City;

#[derive(Debug)]
pub struct BrowseSession {
    client: CitySearchClient,
    state: BrowseState,
}

impl BrowseSession {
    pub fn new(client: CitySearchClient) -> Self {
        Self {
            client,
            state: BrowseState::new(),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// The rows currently rendered.
    pub fn view(&self) -> &[City] {
        self.state.view()
    }

    /// Handle the end-of-list sentinel becoming visible.
    ///
    /// Starts the next page fetch unless one is already in flight or
    /// pagination is exhausted. Returns `Ok(false)` when no fetch was
    /// started. On a fetch error the state keeps its accumulation and
    /// the loading gate resets; the caller surfaces the error to the
    /// user.
    pub async fn sentinel_visible(&mut self) -> Result<bool, CitySearchError> {
        let Some(page) = self.state.begin_load() else {
            return Ok(false);
        };

        match self.client.fetch_page(page).await {
            Ok(batch) => {
                self.state.finish_load(batch);
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "City page load failed");
                self.state.abort_load();
                Err(e)
            }
        }
    }

    /// Handle a search-input change.
    ///
    /// Empty input clears the view. Non-empty input runs a fresh
    /// full-text search; its results replace the view directly. On
    /// error the view keeps its prior value and the error is returned
    /// for the caller to surface.
    pub async fn set_query(&mut self, text: &str) -> Result<(), CitySearchError> {
        self.state.set_query(text);
        let query = self.state.query().to_string();
        if query.is_empty() {
            return Ok(());
        }

        match self.client.search(&query).await {
            Ok(results) => {
                self.state.apply_search_results(results);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "City search failed");
                Err(e)
            }
        }
    }

    /// Handle a sort-button click.
    pub fn set_sort(&mut self, column: SortColumn) {
        self.state.set_sort(column);
    }
}
