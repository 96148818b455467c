//! In-memory station collection.
//!
//! `Records` has no locking of its own; [`super::StationStore`] owns it
//! behind a lock and is the only way handlers reach it.

use crate::domain::{PriceUpdate, Station, StationId};

use super::error::StoreError;

/// Unordered set of stations with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Records {
    stations: Vec<Station>,
}

impl Records {
    /// Build from loaded stations. Later duplicates of an id are dropped.
    pub fn new(stations: Vec<Station>) -> Self {
        let mut records = Self::default();
        for station in stations {
            if records.find_by_id(station.id).is_none() {
                records.insert(station);
            }
        }
        records
    }

    /// Look up a station by id.
    pub fn find_by_id(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Every station, in storage order.
    pub fn list_all(&self) -> &[Station] {
        &self.stations
    }

    /// Every station, cloned and ordered by ascending id.
    pub fn sorted(&self) -> Vec<Station> {
        sort_by_id(self.stations.clone())
    }

    /// Append without checking for an existing id.
    fn insert(&mut self, station: Station) {
        self.stations.push(station);
    }

    /// Insert a station unless its id is taken.
    pub fn insert_if_absent(&mut self, station: Station) -> Result<&Station, StoreError> {
        if self.find_by_id(station.id).is_some() {
            return Err(StoreError::Duplicate(station.id));
        }
        self.insert(station);
        Ok(&self.stations[self.stations.len() - 1])
    }

    /// Overwrite prices on every station in `region` (case-insensitive).
    ///
    /// Returns the number of stations matched; 0 means nothing changed.
    pub fn update_prices_for_region(&mut self, region: &str, update: &PriceUpdate) -> usize {
        let region = region.to_lowercase();
        let mut updated = 0;
        for station in self
            .stations
            .iter_mut()
            .filter(|s| s.region.to_lowercase() == region)
        {
            station.apply_prices(update);
            updated += 1;
        }
        updated
    }

    /// Stations selected by a search query, ordered by id.
    ///
    /// The query is trimmed and compared case-insensitively. An empty query
    /// selects nothing.
    pub fn search(&self, query: &str) -> Vec<Station> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        let hits = self
            .stations
            .iter()
            .filter(|s| s.matches(&term))
            .cloned()
            .collect();
        sort_by_id(hits)
    }

    /// Distinct region names, sorted.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.stations.iter().map(|s| s.region.clone()).collect();
        regions.sort();
        regions.dedup();
        regions
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

fn sort_by_id(mut stations: Vec<Station>) -> Vec<Station> {
    stations.sort_by_key(|s| s.id);
    stations
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn station(id: StationId, region: &str) -> Station {
        Station {
            id,
            region: region.to_string(),
            city: format!("City{id}"),
            gasoline_volume: 0.0,
            diesel_volume: 0.0,
            gasoline_price: 1.0,
            diesel_price: 1.0,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    fn region_name() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["Milano", "milano", "Roma", "Torino", "Bari"])
            .prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn sorted_is_ascending_for_any_insertion_order(
            ids in prop::collection::hash_set(-1000i64..1000, 0..40)
        ) {
            let mut records = Records::default();
            for id in ids.iter().copied() {
                records.insert_if_absent(station(id, "Roma")).unwrap();
            }
            let sorted = records.sorted();
            prop_assert_eq!(sorted.len(), ids.len());
            prop_assert!(sorted.windows(2).all(|w| w[0].id < w[1].id));
        }

        #[test]
        fn region_update_touches_exactly_the_region(
            regions in prop::collection::vec(region_name(), 1..30),
            price in 0.0f64..5.0,
        ) {
            let mut records = Records::new(
                regions
                    .iter()
                    .enumerate()
                    .map(|(i, r)| station(i as StationId, r))
                    .collect(),
            );
            let update = PriceUpdate { gasoline_price: Some(price), diesel_price: None };
            let expected = regions.iter().filter(|r| r.eq_ignore_ascii_case("milano")).count();

            prop_assert_eq!(records.update_prices_for_region("MILANO", &update), expected);
            for s in records.list_all() {
                if s.region.eq_ignore_ascii_case("milano") {
                    prop_assert_eq!(s.gasoline_price, price);
                } else {
                    prop_assert_eq!(s.gasoline_price, 1.0);
                }
                prop_assert_eq!(s.diesel_price, 1.0);
            }
        }
    }
}
