//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DomainError, PriceUpdate, Station, fields};

/// Query string for station search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Id, city or region fragment
    pub q: Option<String>,
}

/// Response for a created station.
#[derive(Debug, Serialize)]
pub struct CreateStationResponse {
    pub message: String,

    /// The stored station
    pub distributore: Station,
}

/// Response carrying only a human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request to set prices for every station in a region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPricesRequest {
    /// Region name, trimmed. Empty when absent.
    pub provincia: String,

    pub prices: PriceUpdate,
}

impl RegionPricesRequest {
    /// Decode from an untyped JSON body.
    ///
    /// Prices are optional; `null` counts as absent.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let obj = value.as_object().ok_or(DomainError::NotAnObject)?;

        let provincia = match obj.get("provincia") {
            None | Some(Value::Null) => String::new(),
            Some(v) => fields::text(v, "provincia")?.trim().to_string(),
        };

        Ok(Self {
            provincia,
            prices: PriceUpdate {
                gasoline_price: fields::optional_float(obj, "prezzo_benzina")?,
                diesel_price: fields::optional_float(obj, "prezzo_diesel")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn region_request_with_both_prices() {
        let req = RegionPricesRequest::from_json(&json!({
            "provincia": "  Roma ",
            "prezzo_benzina": 1.9,
            "prezzo_diesel": "1.8"
        }))
        .unwrap();
        assert_eq!(req.provincia, "Roma");
        assert_eq!(req.prices.gasoline_price, Some(1.9));
        assert_eq!(req.prices.diesel_price, Some(1.8));
    }

    #[test]
    fn region_request_missing_region_is_empty() {
        let req = RegionPricesRequest::from_json(&json!({"prezzo_diesel": null})).unwrap();
        assert!(req.provincia.is_empty());
        assert_eq!(req.prices, PriceUpdate::default());
    }

    #[test]
    fn region_request_rejects_bad_price() {
        let err = RegionPricesRequest::from_json(&json!({
            "provincia": "Roma",
            "prezzo_benzina": "cara"
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("prezzo_benzina"));
    }

    #[test]
    fn create_response_shape() {
        let station = crate::store::seed_stations().remove(0);
        let body = serde_json::to_value(CreateStationResponse {
            message: "Distributore aggiunto".to_string(),
            distributore: station,
        })
        .unwrap();
        assert_eq!(body["message"], "Distributore aggiunto");
        assert_eq!(body["distributore"]["citta"], "Milano");
    }
}
