//! Thread-safe handle to the station collection and its data file.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::domain::{PriceUpdate, Station, StationId};

use super::error::StoreError;
use super::persist::DataFile;
use super::records::Records;

/// Shared station store.
///
/// One mutex guards both the records and the data file, and each mutation
/// holds it through the file rewrite, so the file always reflects the last
/// completed mutation.
#[derive(Clone)]
pub struct StationStore {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    records: Records,
    file: DataFile,
}

impl Inner {
    /// Rewrite the data file. Failures are logged, not returned: the
    /// in-memory change has already been applied.
    fn persist(&self) {
        match self.file.save(self.records.list_all()) {
            Ok(()) => debug!(
                path = %self.file.path().display(),
                count = self.records.len(),
                "saved stations"
            ),
            Err(e) => error!(error = %e, "failed to save stations"),
        }
    }
}

impl StationStore {
    /// Open the store from its data file, falling back to seed stations.
    pub fn open(file: DataFile) -> Self {
        let stations = file.load_or_seed();
        Self::new(Records::new(stations), file)
    }

    /// Create a store from already-loaded records.
    pub fn new(records: Records, file: DataFile) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { records, file })),
        }
    }

    /// Look up a station by id.
    pub async fn get(&self, id: StationId) -> Option<Station> {
        let guard = self.inner.lock().await;
        guard.records.find_by_id(id).cloned()
    }

    /// All stations ordered by id.
    pub async fn list(&self) -> Vec<Station> {
        let guard = self.inner.lock().await;
        guard.records.sorted()
    }

    /// Stations matching a search query, ordered by id.
    pub async fn search(&self, query: &str) -> Vec<Station> {
        let guard = self.inner.lock().await;
        guard.records.search(query)
    }

    /// Distinct region names.
    pub async fn regions(&self) -> Vec<String> {
        let guard = self.inner.lock().await;
        guard.records.regions()
    }

    /// Number of stations.
    pub async fn len(&self) -> usize {
        let guard = self.inner.lock().await;
        guard.records.len()
    }

    /// Add a new station and persist.
    ///
    /// The duplicate check, the insert and the save happen under a single
    /// lock acquisition.
    pub async fn add(&self, station: Station) -> Result<Station, StoreError> {
        let mut guard = self.inner.lock().await;
        let added = guard.records.insert_if_absent(station)?.clone();
        guard.persist();
        Ok(added)
    }

    /// Update prices for every station in `region` and persist.
    ///
    /// Returns the number of stations matched. Nothing is written when no
    /// station matches.
    pub async fn update_region_prices(&self, region: &str, update: PriceUpdate) -> usize {
        let mut guard = self.inner.lock().await;
        let updated = guard.records.update_prices_for_region(region, &update);
        if updated > 0 {
            guard.persist();
        }
        updated
    }
}
