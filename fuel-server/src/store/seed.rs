//! Fallback station set used when no valid data file exists.

use crate::domain::Station;

/// The five stations the service starts with on a fresh install.
pub fn seed_stations() -> Vec<Station> {
    [
        (1, "Milano", 5000.0, 3000.0, 1.85, 1.75, 45.4642, 9.19),
        (2, "Roma", 4000.0, 2500.0, 1.83, 1.70, 41.9028, 12.4964),
        (3, "Napoli", 3500.0, 2000.0, 1.80, 1.68, 40.8522, 14.2681),
        (4, "Torino", 4500.0, 2800.0, 1.82, 1.72, 45.0703, 7.6869),
        (5, "Palermo", 3000.0, 1500.0, 1.78, 1.65, 38.1157, 13.3615),
    ]
    .into_iter()
    .map(|(id, name, gasoline, diesel, gasoline_price, diesel_price, lat, lon)| Station {
        id,
        region: name.to_string(),
        city: name.to_string(),
        gasoline_volume: gasoline,
        diesel_volume: diesel,
        gasoline_price,
        diesel_price,
        latitude: lat,
        longitude: lon,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_unique_ids() {
        let seed = seed_stations();
        let ids: Vec<_> = seed.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn naples_seed_values() {
        let seed = seed_stations();
        let naples = seed.iter().find(|s| s.id == 3).unwrap();
        assert_eq!(naples.city, "Napoli");
        assert_eq!(naples.region, "Napoli");
        assert_eq!(naples.gasoline_price, 1.80);
        assert_eq!(naples.diesel_price, 1.68);
        assert_eq!(naples.gasoline_volume, 3500.0);
        assert_eq!(naples.latitude, 40.8522);
    }
}
