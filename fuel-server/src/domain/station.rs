//! The fuel station record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DomainError;
use super::fields;

/// Caller-assigned station identifier, unique within the store.
pub type StationId = i64;

/// A fuel station's stock and pricing data.
///
/// Serialized field names are the Italian keys used on the wire and in the
/// data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,

    #[serde(rename = "provincia")]
    pub region: String,

    #[serde(rename = "citta")]
    pub city: String,

    /// Gasoline stock
    #[serde(rename = "benzina")]
    pub gasoline_volume: f64,

    /// Diesel stock
    #[serde(rename = "diesel")]
    pub diesel_volume: f64,

    #[serde(rename = "prezzo_benzina")]
    pub gasoline_price: f64,

    #[serde(rename = "prezzo_diesel")]
    pub diesel_price: f64,

    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Station {
    /// Wire names of every field, in the order they are validated.
    pub const FIELDS: [&'static str; 9] = [
        "id",
        "provincia",
        "citta",
        "benzina",
        "diesel",
        "prezzo_benzina",
        "prezzo_diesel",
        "lat",
        "lon",
    ];

    /// Build a station from an untyped JSON object.
    ///
    /// All fields are checked for presence before any is coerced, so a
    /// payload with both a missing and a malformed field reports the
    /// missing one.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let obj = value.as_object().ok_or(DomainError::NotAnObject)?;

        for field in Self::FIELDS {
            fields::required(obj, field)?;
        }

        let float = |field: &'static str| fields::float(&obj[field], field);

        Ok(Self {
            id: fields::integer(&obj["id"], "id")?,
            region: fields::text(&obj["provincia"], "provincia")?,
            city: fields::text(&obj["citta"], "citta")?,
            gasoline_volume: float("benzina")?,
            diesel_volume: float("diesel")?,
            gasoline_price: float("prezzo_benzina")?,
            diesel_price: float("prezzo_diesel")?,
            latitude: float("lat")?,
            longitude: float("lon")?,
        })
    }

    /// Whether the station belongs to `region`, ignoring case.
    pub fn in_region(&self, region: &str) -> bool {
        self.region.to_lowercase() == region.to_lowercase()
    }

    /// Whether a lowercased search term selects this station.
    ///
    /// The term must equal the id exactly, or appear anywhere in the city or
    /// region name.
    pub fn matches(&self, term: &str) -> bool {
        term == self.id.to_string()
            || self.city.to_lowercase().contains(term)
            || self.region.to_lowercase().contains(term)
    }

    /// Apply whichever prices the update carries.
    pub fn apply_prices(&mut self, update: &PriceUpdate) {
        if let Some(price) = update.gasoline_price {
            self.gasoline_price = price;
        }
        if let Some(price) = update.diesel_price {
            self.diesel_price = price;
        }
    }
}

/// New prices for every station in a region. `None` leaves a price as is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceUpdate {
    pub gasoline_price: Option<f64>,
    pub diesel_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn naples() -> Value {
        json!({
            "id": 3, "provincia": "Napoli", "citta": "Napoli",
            "benzina": 3500, "diesel": 2000,
            "prezzo_benzina": 1.80, "prezzo_diesel": 1.68,
            "lat": 40.8522, "lon": 14.2681
        })
    }

    #[test]
    fn from_json_reads_all_fields() {
        let station = Station::from_json(&naples()).unwrap();
        assert_eq!(station.id, 3);
        assert_eq!(station.region, "Napoli");
        assert_eq!(station.gasoline_volume, 3500.0);
        assert_eq!(station.gasoline_price, 1.80);
        assert_eq!(station.longitude, 14.2681);
    }

    #[test]
    fn from_json_coerces_numeric_strings() {
        let mut value = naples();
        value["id"] = json!("3");
        value["prezzo_diesel"] = json!("1.5");
        let station = Station::from_json(&value).unwrap();
        assert_eq!(station.id, 3);
        assert_eq!(station.diesel_price, 1.5);
    }

    #[test]
    fn missing_field_wins_over_invalid_field() {
        let mut value = naples();
        value["benzina"] = json!("lots");
        value.as_object_mut().unwrap().remove("lon");
        assert_eq!(
            Station::from_json(&value),
            Err(DomainError::MissingField("lon"))
        );
    }

    #[test]
    fn first_missing_field_in_order_is_reported() {
        let value = json!({"id": 1, "lat": 1.0});
        assert_eq!(
            Station::from_json(&value),
            Err(DomainError::MissingField("provincia"))
        );
    }

    #[test]
    fn rejects_non_object() {
        assert_eq!(
            Station::from_json(&json!([1, 2])),
            Err(DomainError::NotAnObject)
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let station = Station::from_json(&naples()).unwrap();
        let value = serde_json::to_value(&station).unwrap();
        assert_eq!(value["provincia"], "Napoli");
        assert_eq!(value["prezzo_benzina"], 1.80);
        assert_eq!(value["lon"], 14.2681);
        assert_eq!(value.as_object().unwrap().len(), 9);
    }

    #[test]
    fn matching_rules() {
        let station = Station::from_json(&naples()).unwrap();
        assert!(station.matches("3"));
        assert!(!station.matches("33"));
        assert!(station.matches("apol"));
        assert!(!station.matches("roma"));
        assert!(station.in_region("NAPOLI"));
        assert!(!station.in_region("Napol"));
    }

    #[test]
    fn apply_prices_leaves_missing_prices_untouched() {
        let mut station = Station::from_json(&naples()).unwrap();
        station.apply_prices(&PriceUpdate {
            gasoline_price: Some(1.99),
            diesel_price: None,
        });
        assert_eq!(station.gasoline_price, 1.99);
        assert_eq!(station.diesel_price, 1.68);
    }
}
