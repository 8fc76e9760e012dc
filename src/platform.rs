// Per-platform base values and deep-link templates
use crate::model::Platform;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

pub const FEE_FLOOR: f64 = 0.99;
pub const TIME_FLOOR: u32 = 15;

pub fn base_fee(platform: Platform) -> f64 {
    match platform {
        Platform::UberEats => 2.49,
        Platform::JustEat => 1.99,
        Platform::Deliveroo => 2.99,
    }
}

/// Base delivery time in minutes.
pub fn base_time(platform: Platform) -> u32 {
    match platform {
        Platform::UberEats => 25,
        Platform::JustEat => 30,
        Platform::Deliveroo => 22,
    }
}

/// Builds a search deep link on the platform for a restaurant (or dish) near a location.
pub fn build_url(platform: Platform, term: &str, location: &str) -> String {
    let term = utf8_percent_encode(term, NON_ALPHANUMERIC).to_string();
    let location = utf8_percent_encode(location, NON_ALPHANUMERIC).to_string();

    match platform {
        Platform::UberEats => format!("https://www.ubereats.com/gb/search?q={term}&pl={location}"),
        Platform::JustEat => {
            format!("https://www.just-eat.co.uk/area/{location}/restaurants-{term}")
        }
        Platform::Deliveroo => {
            format!("https://deliveroo.co.uk/restaurants/{location}?search={term}")
        }
    }
}
