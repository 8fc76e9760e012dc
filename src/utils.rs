// Utility functions

/// Rounds a currency amount to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place, used for star ratings.
pub fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Hides all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_currency() {
        assert_eq!(round_to_cents(12.345_6), 12.35);
        assert_eq!(round_to_cents(0.994), 0.99);
    }

    #[test]
    fn rounds_rating() {
        assert_eq!(round_to_tenths(4.26), 4.3);
    }

    #[test]
    fn masks_all_but_tail() {
        assert_eq!(mask_secret("AIzaSyABCD1234"), "**********1234");
        assert_eq!(mask_secret("abc"), "***");
    }
}
