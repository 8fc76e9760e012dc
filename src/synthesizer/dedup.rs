use crate::model::Offer;
use std::collections::HashMap;

/// Keeps the cheapest candidate (price + delivery fee) for every restaurant name
/// and returns them sorted by price.
///
/// Names are compared exactly. On equal totals the lower platform wins.
pub fn cheapest_per_name(candidates: Vec<Offer>) -> Vec<Offer> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, Offer> = HashMap::new();

    for candidate in candidates {
        match best.get_mut(&candidate.name) {
            Some(current) => {
                if beats(&candidate, current) {
                    *current = candidate;
                }
            }
            None => {
                order.push(candidate.name.clone());
                best.insert(candidate.name.clone(), candidate);
            }
        }
    }

    let mut offers: Vec<Offer> = order.iter().filter_map(|name| best.remove(name)).collect();
    offers.sort_by(|a, b| a.price.total_cmp(&b.price));
    offers
}

fn beats(candidate: &Offer, current: &Offer) -> bool {
    let (a, b) = (candidate.total_cost(), current.total_cost());
    a < b || (a == b && candidate.platform < current.platform)
}
