// Core structs: Offer, Platform, SearchReport
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Delivery platform brands an offer can come from.
///
/// Declaration order doubles as the tie-break order when two candidates
/// for the same restaurant cost exactly the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Uber Eats")]
    UberEats,
    #[serde(rename = "Just Eat")]
    JustEat,
    #[serde(rename = "Deliveroo")]
    Deliveroo,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::UberEats, Platform::JustEat, Platform::Deliveroo];

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::UberEats => "Uber Eats",
            Platform::JustEat => "Just Eat",
            Platform::Deliveroo => "Deliveroo",
        }
    }

    /// Short lowercase token used when building candidate ids.
    pub fn slug(self) -> &'static str {
        match self {
            Platform::UberEats => "ubereats",
            Platform::JustEat => "justeat",
            Platform::Deliveroo => "deliveroo",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub platform: Platform,
    pub price: f64,
    pub delivery_fee: f64,
    pub delivery_time: u32,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none", rename = "restaurantUrl")]
    pub url: Option<String>,
}

impl Offer {
    /// Price plus delivery fee, what the customer actually pays.
    pub fn total_cost(&self) -> f64 {
        crate::utils::round_to_cents(self.price + self.delivery_fee)
    }
}

/// One finished search: the offers plus what was asked for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub query: String,
    pub location: String,
    pub offers: Vec<Offer>,
    /// A Places API key was saved when the search ran. Offers are generated either way.
    pub api_key_configured: bool,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("no restaurant names configured for cuisine {0}")]
    EmptyNameTable(String),
    #[error("offer {id} is invalid: {reason}")]
    InvalidOffer { id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(price: f64, fee: f64) -> Offer {
        Offer {
            id: "ubereats-0".into(),
            name: "Tokyo Kitchen".into(),
            cuisine: "Japanese".into(),
            platform: Platform::UberEats,
            price,
            delivery_fee: fee,
            delivery_time: 25,
            rating: 4.5,
            url: None,
        }
    }

    #[test]
    fn total_cost_is_rounded_to_cents() {
        assert_eq!(offer(12.1, 2.2).total_cost(), 14.3);
    }

    #[test]
    fn platform_order_follows_declaration() {
        assert!(Platform::UberEats < Platform::JustEat);
        assert!(Platform::JustEat < Platform::Deliveroo);
    }

    #[test]
    fn report_serializes_in_camel_case() {
        let report = SearchReport {
            query: "katsu".into(),
            location: "SW1A 1AA".into(),
            offers: vec![offer(12.0, 2.0)],
            api_key_configured: true,
            generated_at: Utc::now(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("generatedAt").is_some());
        assert!(json.get("generated_at").is_none());
        assert_eq!(json["apiKeyConfigured"], true);
        assert_eq!(json["offers"][0]["deliveryTime"], 25);
    }

    #[test]
    fn offer_serializes_with_original_field_names() {
        let mut o = offer(10.0, 1.99);
        o.url = Some("https://deliveroo.co.uk".into());
        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["deliveryFee"], 1.99);
        assert_eq!(json["platform"], "Uber Eats");
        assert_eq!(json["restaurantUrl"], "https://deliveroo.co.uk");
    }
}
