//! City browser state machine.
//!
//! Owns the append-only accumulated city list, the search query, the
//! sort key/direction, and the derived view actually rendered. The
//! pagination side is a small state machine (`PageState`) that keeps at
//! most one page fetch in flight; view derivation is an explicit pure
//! function rather than a hidden recomputation chain.

use crate::types::City;

/// Sortable columns of the city table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Country,
    Timezone,
    Population,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Pagination state for the infinite-scroll loader.
///
/// `Idle(p)` holds the next page to fetch. The visibility trigger
/// advances the counter and enters `Loading`; a zero-row batch is
/// terminal for pagination (search stays active).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Idle(u32),
    Loading(u32),
    Exhausted,
}

impl Default for PageState {
    fn default() -> Self {
        PageState::Idle(1)
    }
}

impl PageState {
    /// True if a new page fetch can be started.
    pub fn can_start(self) -> bool {
        matches!(self, PageState::Idle(_))
    }

    /// State after the visibility trigger fires.
    pub fn on_trigger(self) -> Self {
        match self {
            PageState::Idle(page) => PageState::Loading(page),
            other => other,
        }
    }

    /// State after a page fetch settled with `batch_len` rows.
    pub fn on_loaded(self, batch_len: usize) -> Self {
        match self {
            PageState::Loading(_) if batch_len == 0 => PageState::Exhausted,
            PageState::Loading(page) => PageState::Idle(page + 1),
            other => other,
        }
    }

    /// State after a page fetch failed.
    ///
    /// The page counter still advances: the next trigger fetches the
    /// following page number, so the failed page is skipped rather than
    /// retried. Preserved from the observed source behavior.
    pub fn on_failed(self) -> Self {
        match self {
            PageState::Loading(page) => PageState::Idle(page + 1),
            other => other,
        }
    }
}

/// Compute the rendered view from the accumulated list.
///
/// Empty trimmed query yields the empty view (the cleared-search case
/// is preserved literally: the full list is not restored). A non-empty
/// query filters by case-insensitive substring match on the city name,
/// then applies the sort if a column is set.
pub fn derive_view(
    accumulated: &[City],
    query: &str,
    sort: Option<SortColumn>,
    direction: SortDirection,
) -> Vec<City> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut view: Vec<City> = accumulated
        .iter()
        .filter(|city| city.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if let Some(column) = sort {
        sort_cities(&mut view, column, direction);
    }

    view
}

/// Sort cities in place by the given column and direction.
///
/// String columns compare case-insensitively; population compares
/// numerically. `sort_by` is stable, so equal keys keep arrival order.
pub fn sort_cities(cities: &mut [City], column: SortColumn, direction: SortDirection) {
    cities.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Country => a.country.to_lowercase().cmp(&b.country.to_lowercase()),
            SortColumn::Timezone => a.timezone.to_lowercase().cmp(&b.timezone.to_lowercase()),
            SortColumn::Population => a.population.cmp(&b.population),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// The browse state: accumulation, query, sort, and derived view.
#[derive(Debug, Default)]
pub struct BrowseState {
    accumulated: Vec<City>,
    query: String,
    sort: Option<SortColumn>,
    direction: SortDirection,
    page_state: PageState,
    view: Vec<City>,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every city fetched so far, in arrival order.
    pub fn accumulated(&self) -> &[City] {
        &self.accumulated
    }

    /// The currently rendered rows.
    pub fn view(&self) -> &[City] {
        &self.view
    }

    pub fn page_state(&self) -> PageState {
        self.page_state
    }

    /// False once a page fetch has returned zero rows.
    pub fn has_more(&self) -> bool {
        self.page_state != PageState::Exhausted
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.page_state, PageState::Loading(_))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort.map(|column| (column, self.direction))
    }

    /// React to the visibility trigger.
    ///
    /// Returns the page number to fetch when a load may start, or
    /// `None` when exhausted or a fetch is already in flight.
    pub fn begin_load(&mut self) -> Option<u32> {
        if !self.page_state.can_start() {
            return None;
        }
        self.page_state = self.page_state.on_trigger();
        match self.page_state {
            PageState::Loading(page) => Some(page),
            _ => None,
        }
    }

    /// Record a successful page fetch: append and re-derive the view.
    pub fn finish_load(&mut self, batch: Vec<City>) {
        self.page_state = self.page_state.on_loaded(batch.len());
        self.accumulated.extend(batch);
        self.recompute_view();
    }

    /// Record a failed page fetch.
    ///
    /// Accumulation, `has_more`, and the view are left untouched; only
    /// the loading gate resets (with the page counter already advanced,
    /// see `PageState::on_failed`).
    pub fn abort_load(&mut self) {
        self.page_state = self.page_state.on_failed();
    }

    /// Store a new (trimmed) query.
    ///
    /// An empty query clears the view immediately. A non-empty query
    /// leaves the view untouched; the caller follows up with either
    /// `apply_search_results` (server search) or nothing on failure,
    /// keeping the prior view on screen.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.trim().to_string();
        if self.query.is_empty() {
            self.view.clear();
        }
    }

    /// Replace the view with server-side search results directly,
    /// bypassing local derivation until a sort is re-applied.
    pub fn apply_search_results(&mut self, results: Vec<City>) {
        self.view = results;
    }

    /// Select a sort column: toggles direction on the current column,
    /// otherwise switches to the column ascending. Re-sorts the current
    /// view in place; nothing is refetched.
    pub fn set_sort(&mut self, column: SortColumn) {
        if self.sort == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.sort = Some(column);
            self.direction = SortDirection::Asc;
        }
        sort_cities(&mut self.view, column, self.direction);
    }

    /// Explicitly re-derive the view from the accumulated list.
    pub fn recompute_view(&mut self) {
        self.view = derive_view(&self.accumulated, &self.query, self.sort, self.direction);
    }
}
