use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flights,
    Hotels,
    Activities,
    Visas,
}

const VISA_KEYWORDS: &[&str] = &["visa", "passport", "entry permit"];
const HOTEL_KEYWORDS: &[&str] = &["hotel", "stay", "accommodation", "resort", "lodging"];
const ACTIVITY_KEYWORDS: &[&str] = &[
    "activity",
    "activities",
    "tour",
    "things to do",
    "excursion",
    "experience",
    "sightseeing",
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Flights => "flights",
            Category::Hotels => "hotels",
            Category::Activities => "activities",
            Category::Visas => "visas",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "flights" => Some(Category::Flights),
            "hotels" => Some(Category::Hotels),
            "activities" => Some(Category::Activities),
            "visas" => Some(Category::Visas),
            _ => None,
        }
    }

    /// Pick a category from the user's literal query. Checked most specific
    /// first; flight searches and anything unrecognised fall through to
    /// flights.
    pub fn detect(query: &str) -> Self {
        let q = query.to_lowercase();
        let has_any = |keywords: &[&str]| keywords.iter().any(|k| q.contains(k));

        if has_any(VISA_KEYWORDS) {
            Category::Visas
        } else if has_any(HOTEL_KEYWORDS) {
            Category::Hotels
        } else if has_any(ACTIVITY_KEYWORDS) {
            Category::Activities
        } else {
            Category::Flights
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
