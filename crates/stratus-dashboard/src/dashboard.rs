//! The dashboard model: a persisted ordered list of pinned cities.

use crate::store::{DashboardStore, StoreError};
use stratus_cities::City;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("No pinned city at index {0}")]
    IndexOutOfRange(usize),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DashboardError> for stratus_core::AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::IndexOutOfRange(index) => {
                stratus_core::AppError::Service(format!("No pinned city at index {}", index))
            }
            DashboardError::Store(e) => e.into(),
        }
    }
}

/// Pinned-city dashboard backed by an injected store.
///
/// Loaded whole at open; every mutation writes the whole list back
/// synchronously.
#[derive(Debug)]
pub struct Dashboard<S: DashboardStore> {
    store: S,
    cities: Vec<City>,
}

impl<S: DashboardStore> Dashboard<S> {
    /// Open the dashboard, loading the pinned list from the store.
    ///
    /// A read failure is logged and treated as an empty dashboard.
    pub fn open(store: S) -> Self {
        let cities = match store.load() {
            Ok(cities) => cities,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load dashboard, starting empty");
                Vec::new()
            }
        };
        Self { store, cities }
    }

    /// The pinned cities in pin order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Pin a city to the end of the dashboard.
    pub fn pin(&mut self, city: City) -> Result<(), DashboardError> {
        self.cities.push(city);
        self.store.save(&self.cities)?;
        Ok(())
    }

    /// Remove the pinned city at `index`, preserving the relative order
    /// of the rest. Out-of-range indices are rejected without touching
    /// storage.
    pub fn remove(&mut self, index: usize) -> Result<City, DashboardError> {
        if index >= self.cities.len() {
            return Err(DashboardError::IndexOutOfRange(index));
        }
        let removed = self.cities.remove(index);
        self.store.save(&self.cities)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonFileStore, MemoryStore};

    fn city(name: &str) -> City {
        City {
            name: name.to_string(),
            timezone: "Etc/UTC".to_string(),
            population: 1000,
            country: "Testland".to_string(),
        }
    }

    #[test]
    fn open_with_empty_store_is_empty() {
        let dashboard = Dashboard::open(MemoryStore::new());
        assert!(dashboard.is_empty());
    }

    #[test]
    fn open_with_absent_slot_does_not_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("dashboard_cities.json"));
        let dashboard = Dashboard::open(store);
        assert!(dashboard.is_empty());
    }

    #[test]
    fn open_with_corrupt_slot_falls_back_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dashboard_cities.json");
        std::fs::write(&path, "][").expect("write");

        let dashboard = Dashboard::open(JsonFileStore::new(path));
        assert!(dashboard.is_empty());
    }

    #[test]
    fn pin_persists_immediately() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dashboard_cities.json");

        let mut dashboard = Dashboard::open(JsonFileStore::new(path.clone()));
        dashboard.pin(city("Ottawa")).expect("pin");

        let reopened = Dashboard::open(JsonFileStore::new(path));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.cities()[0].name, "Ottawa");
    }

    #[test]
    fn remove_middle_preserves_order_and_storage() {
        let store = MemoryStore::with_cities(vec![city("A"), city("B"), city("C")]);
        let mut dashboard = Dashboard::open(store);

        let removed = dashboard.remove(1).expect("remove");
        assert_eq!(removed.name, "B");

        let names: Vec<&str> = dashboard.cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        // Storage reflects the same two cities afterward.
        let stored = dashboard.store.load().expect("load");
        let stored_names: Vec<&str> = stored.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(stored_names, ["A", "C"]);
    }

    #[test]
    fn remove_out_of_range_is_rejected() {
        let store = MemoryStore::with_cities(vec![city("A")]);
        let mut dashboard = Dashboard::open(store);

        assert!(matches!(
            dashboard.remove(5),
            Err(DashboardError::IndexOutOfRange(5))
        ));
        assert_eq!(dashboard.len(), 1);
        assert_eq!(dashboard.store.load().expect("load").len(), 1);
    }

    #[test]
    fn errors_map_to_user_facing_messages() {
        use stratus_core::AppError;

        let app_err: AppError = DashboardError::IndexOutOfRange(7).into();
        assert_eq!(
            app_err.user_message(),
            "Something went wrong. Please try again."
        );

        let app_err: AppError =
            DashboardError::Store(StoreError::Corrupt("bad json".into())).into();
        assert!(matches!(app_err, AppError::Storage(_)));
        assert_eq!(
            app_err.user_message(),
            "Saved data may be corrupted. Consider resetting app data."
        );
    }

    #[test]
    fn pin_order_is_preserved() {
        let mut dashboard = Dashboard::open(MemoryStore::new());
        dashboard.pin(city("Ottawa")).expect("pin");
        dashboard.pin(city("Oslo")).expect("pin");
        dashboard.pin(city("Osaka")).expect("pin");

        let names: Vec<&str> = dashboard.cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ottawa", "Oslo", "Osaka"]);
    }
}
