// Terminal rendering of search results
use crate::model::{Offer, SearchReport};
use std::fmt::Write;

/// Lowest price in the list; every offer at this price is highlighted.
pub fn cheapest_price(offers: &[Offer]) -> Option<f64> {
    offers.iter().map(|o| o.price).min_by(|a, b| a.total_cmp(b))
}

pub fn is_cheapest(offer: &Offer, offers: &[Offer]) -> bool {
    cheapest_price(offers) == Some(offer.price)
}

pub fn render(report: &SearchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "🔎 \"{}\" near {} ({})",
        report.query,
        report.location,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    if report.api_key_configured {
        let _ = writeln!(out, "Places API key saved; showing generated offers");
    }

    if report.offers.is_empty() {
        let _ = writeln!(out, "No results found. Try a different dish or postcode.");
        return out;
    }

    let _ = writeln!(out, "Found {} options, cheapest highlighted\n", report.offers.len());
    for offer in &report.offers {
        let marker = if is_cheapest(offer, &report.offers) { "💚" } else { "  " };
        let _ = writeln!(
            out,
            "{} {:<22} {:<10} {:<9} £{:>6.2} + £{:.2} delivery = £{:.2} | {} min | ★ {:.1}",
            marker,
            offer.name,
            offer.platform.display_name(),
            offer.cuisine,
            offer.price,
            offer.delivery_fee,
            offer.total_cost(),
            offer.delivery_time,
            offer.rating
        );
        if let Some(url) = &offer.url {
            let _ = writeln!(out, "     🔗 {}", url);
        }
    }
    out
}
