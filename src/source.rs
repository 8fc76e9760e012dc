use crate::model::{Offer, SearchReport};
use crate::synthesizer::OfferSynthesizer;
use chrono::Utc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

#[async_trait::async_trait]
pub trait OfferSource: Send + Sync {
    async fn search(&self, query: &str, location: &str) -> Vec<Offer>;

    fn has_api_key(&self) -> bool;
}

/// Serves generated offers after an artificial delay that mimics a network round trip.
pub struct SimulatedSource {
    synthesizer: OfferSynthesizer,
    latency: Duration,
}

impl SimulatedSource {
    pub fn new(synthesizer: OfferSynthesizer, latency: Duration) -> Self {
        Self { synthesizer, latency }
    }
}

#[async_trait::async_trait]
impl OfferSource for SimulatedSource {
    async fn search(&self, query: &str, location: &str) -> Vec<Offer> {
        if !self.latency.is_zero() {
            info!("Checking Uber Eats, Just Eat, and Deliveroo...");
            sleep(self.latency).await;
        }
        self.synthesizer.search(query, location)
    }

    fn has_api_key(&self) -> bool {
        self.synthesizer.has_api_key()
    }
}

/// Runs one search against a source and stamps the result.
pub async fn run_search(source: &dyn OfferSource, query: &str, location: &str) -> SearchReport {
    let offers = source.search(query, location).await;
    SearchReport {
        query: query.to_string(),
        location: location.to_string(),
        offers,
        api_key_configured: source.has_api_key(),
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Instant;

    fn source(latency_ms: u64) -> SimulatedSource {
        source_with_key(latency_ms, None)
    }

    fn source_with_key(latency_ms: u64, api_key: Option<&str>) -> SimulatedSource {
        SimulatedSource::new(
            OfferSynthesizer::new(&AppConfig::default(), api_key.map(String::from)),
            Duration::from_millis(latency_ms),
        )
    }

    #[tokio::test]
    async fn report_carries_inputs_and_offers() {
        let src = source(0);
        let report = run_search(&src, "curry", "SW1A 1AA").await;
        assert_eq!(report.query, "curry");
        assert_eq!(report.location, "SW1A 1AA");
        assert!(report.offers.iter().all(|o| o.cuisine == "Indian"));
        assert!(!report.api_key_configured);
    }

    #[tokio::test]
    async fn report_records_saved_api_key() {
        let src = source_with_key(0, Some("AIza-test-key"));
        let report = run_search(&src, "pizza", "E1 6AN").await;
        assert!(report.api_key_configured);
        assert!(!report.offers.is_empty());
    }

    #[tokio::test]
    async fn latency_is_applied_before_results() {
        let src = source(50);
        let started = Instant::now();
        let offers = src.search("burger", "E1").await;
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert!(!offers.is_empty());
    }
}
