/// A quick-pick dish with its "from" price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub name: &'static str,
    pub from_price: f64,
}

const CURRIES: &[Suggestion] = &[
    Suggestion { name: "Chicken Tikka Masala", from_price: 12.99 },
    Suggestion { name: "Lamb Vindaloo", from_price: 14.50 },
    Suggestion { name: "Thai Green Curry", from_price: 13.25 },
    Suggestion { name: "Thai Red Curry", from_price: 13.25 },
    Suggestion { name: "Chicken Korma", from_price: 12.75 },
    Suggestion { name: "Beef Madras", from_price: 14.99 },
    Suggestion { name: "Vegetable Curry", from_price: 11.50 },
    Suggestion { name: "Fish Curry", from_price: 15.25 },
    Suggestion { name: "Butter Chicken", from_price: 13.99 },
    Suggestion { name: "Prawn Curry", from_price: 16.50 },
];

/// Dish suggestions for a category, matched case-insensitively.
pub fn suggestions(category: &str) -> Option<&'static [Suggestion]> {
    match category.trim().to_lowercase().as_str() {
        "curry" | "curries" => Some(CURRIES),
        _ => None,
    }
}

pub fn render(category: &str, items: &[Suggestion]) -> String {
    let mut out = format!("Available {} options:\n", category.trim().to_lowercase());
    for item in items {
        out.push_str(&format!("  {:<22} from £{:.2}\n", item.name, item.from_price));
    }
    out
}
