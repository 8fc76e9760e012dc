/// A keyword group: any keyword found in the query selects the cuisine.
#[derive(Debug)]
pub struct CuisineGroup {
    pub cuisine: &'static str,
    pub keywords: &'static [&'static str],
    pub base_price: f64,
    pub names: &'static [&'static str],
}

/// Evaluated top to bottom; the first group with a matching keyword wins.
/// "curry" sits in the Indian group, so "thai green curry" resolves to Indian.
pub static CUISINE_TABLE: &[CuisineGroup] = &[
    CuisineGroup {
        cuisine: "Japanese",
        keywords: &["katsu", "japanese", "sushi", "ramen", "teriyaki"],
        base_price: 13.50,
        names: &["Tokyo Kitchen", "Sakura Sushi", "Bento Express", "Katsu House", "Ramen Yokocho"],
    },
    CuisineGroup {
        cuisine: "Indian",
        keywords: &[
            "curry",
            "indian",
            "tikka",
            "masala",
            "korma",
            "biryani",
            "vindaloo",
            "madras",
            "butter chicken",
        ],
        base_price: 12.50,
        names: &[
            "Curry House Spice",
            "Mumbai Palace",
            "Royal Tandoor",
            "Bombay Brasserie",
            "Spice of Delhi",
            "Taj Express",
        ],
    },
    CuisineGroup {
        cuisine: "Italian",
        keywords: &["pizza", "italian", "pasta", "margherita", "lasagne"],
        base_price: 10.00,
        names: &[
            "Pizza Napoli",
            "Forno Romano",
            "Mama Mia Pizzeria",
            "Slice & Co",
            "Trattoria Bella",
        ],
    },
    CuisineGroup {
        cuisine: "Chinese",
        keywords: &["chinese", "noodle", "dumpling", "chow mein", "dim sum"],
        base_price: 11.00,
        names: &["Golden Dragon", "Jade Garden", "Lucky Panda", "Wok Express", "Peking House"],
    },
    CuisineGroup {
        cuisine: "Thai",
        keywords: &["thai", "pad", "tom yum"],
        base_price: 11.75,
        names: &["Bangkok Street", "Thai Orchid", "Siam Kitchen", "Lemongrass Cafe"],
    },
    CuisineGroup {
        cuisine: "American",
        keywords: &["burger", "american", "fries", "wings", "hot dog"],
        base_price: 9.50,
        names: &[
            "Burger Joint",
            "Smokehouse Grill",
            "Liberty Diner",
            "Stack Burgers",
            "Route 66 Eats",
        ],
    },
];

pub static FALLBACK_GROUP: CuisineGroup = CuisineGroup {
    cuisine: "Various",
    keywords: &[],
    base_price: 11.50,
    names: &["Local Kitchen", "Quick Bites", "Express Delivery", "Corner Cafe", "Food Hub"],
};

/// Maps a free-text food query onto a cuisine group. Never fails.
pub fn resolve(query: &str) -> &'static CuisineGroup {
    let query = query.to_lowercase();

    for group in CUISINE_TABLE {
        for keyword in group.keywords {
            if query.contains(keyword) {
                return group;
            }
        }
    }

    &FALLBACK_GROUP
}
