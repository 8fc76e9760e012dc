use crate::model::Platform;
use crate::platform::{FEE_FLOOR, TIME_FLOOR, base_fee, base_time};
use crate::utils::{round_to_cents, round_to_tenths};
use rand::Rng;

pub const MAX_PRICE_JITTER: f64 = 3.0;
const FEE_JITTER: f64 = 0.75;
const TIME_JITTER_MIN: i32 = -5;
const TIME_JITTER_MAX: i32 = 10;
const RATING_MIN: f64 = 3.8;
const RATING_MAX: f64 = 5.0;
const PRICE_FLOOR: f64 = 0.01;

/// Draws prices, fees, delivery times and ratings within fixed bands.
#[derive(Debug, Clone)]
pub struct PriceSynthesizer {
    price_jitter: f64,
}

impl PriceSynthesizer {
    /// `price_jitter` is clamped to `[0, MAX_PRICE_JITTER]`.
    pub fn new(price_jitter: f64) -> Self {
        let price_jitter = if price_jitter.is_finite() {
            price_jitter.clamp(0.0, MAX_PRICE_JITTER)
        } else {
            0.0
        };
        Self { price_jitter }
    }

    pub fn price<R: Rng>(&self, rng: &mut R, base_price: f64) -> f64 {
        let jitter = rng.random_range(-self.price_jitter..=self.price_jitter);
        round_to_cents(base_price + jitter).max(PRICE_FLOOR)
    }

    pub fn delivery_fee<R: Rng>(&self, rng: &mut R, platform: Platform) -> f64 {
        let jitter = rng.random_range(-FEE_JITTER..=FEE_JITTER);
        round_to_cents(base_fee(platform) + jitter).max(FEE_FLOOR)
    }

    pub fn delivery_time<R: Rng>(&self, rng: &mut R, platform: Platform) -> u32 {
        let jitter = rng.random_range(TIME_JITTER_MIN..=TIME_JITTER_MAX);
        let minutes = base_time(platform) as i32 + jitter;
        (minutes.max(TIME_FLOOR as i32)) as u32
    }

    pub fn rating<R: Rng>(&self, rng: &mut R) -> f64 {
        round_to_tenths(rng.random_range(RATING_MIN..=RATING_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn prices_stay_within_jitter_band() {
        let synth = PriceSynthesizer::new(2.5);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let price = synth.price(&mut rng, 10.0);
            assert!((7.5..=12.5).contains(&price), "price {price} out of band");
        }
    }

    #[test]
    fn jitter_is_clamped() {
        let synth = PriceSynthesizer::new(50.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let price = synth.price(&mut rng, 10.0);
            assert!((7.0..=13.0).contains(&price));
        }
        let flat = PriceSynthesizer::new(-1.0);
        assert_eq!(flat.price(&mut rng, 9.5), 9.5);
    }

    #[test]
    fn fees_and_times_respect_floors() {
        let synth = PriceSynthesizer::new(2.5);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            for platform in Platform::ALL {
                assert!(synth.delivery_fee(&mut rng, platform) >= FEE_FLOOR);
                assert!(synth.delivery_time(&mut rng, platform) >= TIME_FLOOR);
            }
        }
    }

    #[test]
    fn ratings_stay_in_range() {
        let synth = PriceSynthesizer::new(2.5);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let rating = synth.rating(&mut rng);
            assert!((RATING_MIN..=RATING_MAX).contains(&rating));
        }
    }
}
