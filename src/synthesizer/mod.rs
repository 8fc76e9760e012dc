// Synthesizer module: builds per-platform candidates and keeps the best offer per restaurant.

pub mod dedup;
pub mod pricing;

use crate::config::AppConfig;
use crate::model::{Offer, Platform, SynthesisError};
use crate::platform::{FEE_FLOOR, TIME_FLOOR, build_url};
use crate::resolver::{CuisineGroup, resolve};
use dedup::cheapest_per_name;
use pricing::PriceSynthesizer;
use rand::Rng;
use tracing::{debug, info, warn};

/// Generates synthetic restaurant offers for a dish near a location.
pub struct OfferSynthesizer {
    pricing: PriceSynthesizer,
    api_key: Option<String>,
}

impl OfferSynthesizer {
    pub fn new(config: &AppConfig, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        if api_key.is_some() {
            info!("Places API key found; generated data is used regardless");
        } else {
            info!("No Places API key found, using generated data");
        }
        Self {
            pricing: PriceSynthesizer::new(config.price_jitter),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Runs the whole pipeline with the thread-local RNG.
    /// Never returns an empty list: failures are replaced by a single fallback offer.
    pub fn search(&self, query: &str, location: &str) -> Vec<Offer> {
        self.search_with(&mut rand::rng(), query, location)
    }

    pub fn search_with<R: Rng>(&self, rng: &mut R, query: &str, location: &str) -> Vec<Offer> {
        let group = resolve(query);
        debug!("Query \"{}\" resolved to cuisine {}", query, group.cuisine);
        self.search_group_with(rng, group, query, location)
    }

    /// Same as `search_with` but with the cuisine group already chosen.
    pub fn search_group_with<R: Rng>(
        &self,
        rng: &mut R,
        group: &CuisineGroup,
        query: &str,
        location: &str,
    ) -> Vec<Offer> {
        info!("Searching for \"{}\" in {} across all platforms", query, location);
        match self.try_search(rng, group, location) {
            Ok(offers) => {
                info!("Found {} offers for \"{}\"", offers.len(), query);
                offers
            }
            Err(e) => {
                warn!("Synthesis failed, using fallback offer: {}", e);
                vec![fallback_offer(query, location)]
            }
        }
    }

    /// Expands, reduces and validates offers for a resolved group.
    pub fn try_search<R: Rng>(
        &self,
        rng: &mut R,
        group: &CuisineGroup,
        location: &str,
    ) -> Result<Vec<Offer>, SynthesisError> {
        let candidates = self.expand_candidates(rng, group, location)?;
        let offers = cheapest_per_name(candidates);

        for offer in &offers {
            validate(offer)?;
        }
        Ok(offers)
    }

    /// One candidate per (restaurant name, platform).
    fn expand_candidates<R: Rng>(
        &self,
        rng: &mut R,
        group: &CuisineGroup,
        location: &str,
    ) -> Result<Vec<Offer>, SynthesisError> {
        if group.names.is_empty() {
            return Err(SynthesisError::EmptyNameTable(group.cuisine.to_string()));
        }

        let mut candidates = Vec::with_capacity(group.names.len() * Platform::ALL.len());
        for (index, name) in group.names.iter().enumerate() {
            for platform in Platform::ALL {
                candidates.push(Offer {
                    id: format!("{}-{}", platform.slug(), index),
                    name: name.to_string(),
                    cuisine: group.cuisine.to_string(),
                    platform,
                    price: self.pricing.price(rng, group.base_price),
                    delivery_fee: self.pricing.delivery_fee(rng, platform),
                    delivery_time: self.pricing.delivery_time(rng, platform),
                    rating: self.pricing.rating(rng),
                    url: Some(build_url(platform, name, location)),
                });
            }
        }
        Ok(candidates)
    }
}

fn validate(offer: &Offer) -> Result<(), SynthesisError> {
    let reason = if !(offer.price.is_finite() && offer.price > 0.0) {
        Some(format!("price {} is not positive", offer.price))
    } else if !(offer.delivery_fee >= FEE_FLOOR) {
        Some(format!("delivery fee {} below {}", offer.delivery_fee, FEE_FLOOR))
    } else if offer.delivery_time < TIME_FLOOR {
        Some(format!("delivery time {} below {}", offer.delivery_time, TIME_FLOOR))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SynthesisError::InvalidOffer {
            id: offer.id.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Placeholder shown when the pipeline fails.
pub fn fallback_offer(query: &str, location: &str) -> Offer {
    Offer {
        id: "fallback-0".into(),
        name: format!("{} near {}", query, location),
        cuisine: "Various".into(),
        platform: Platform::UberEats,
        price: 12.99,
        delivery_fee: 2.49,
        delivery_time: 30,
        rating: 4.2,
        url: Some(build_url(Platform::UberEats, query, location)),
    }
}
