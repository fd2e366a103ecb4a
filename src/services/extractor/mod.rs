//! Mines structured booking options out of an assistant's free-text reply.
//!
//! Best effort by construction: every input maps to a list of at most
//! [`MAX_OPTIONS`] options, possibly empty. Prices pair with items by
//! position (see [`timeline::Timeline`]), and anything the text does not
//! state is synthesized from the injected random source.

pub mod matchers;
pub mod patterns;
pub mod prices;
pub mod timeline;

use std::ops::Range;

use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CandidateOption, Category};

use self::matchers::{ItemMatch, MatchContext};
use self::patterns::RE_DESTINATION;
use self::prices::{resolve_price, scan_prices, PriceToken};
use self::timeline::Timeline;

pub const MAX_OPTIONS: usize = 6;
pub const DEFAULT_DESTINATION: &str = "Various";

const FALLBACK_NAME_CHARS: usize = 100;

/// Range a price is drawn from when the text does not supply one.
pub fn fallback_price_range(category: Category) -> Range<u32> {
    match category {
        Category::Flights => 200..700,
        Category::Hotels => 100..400,
        Category::Activities => 50..200,
        Category::Visas => 50..250,
    }
}

/// `(to|in|at|visit) Place` phrases in order of appearance.
pub fn scan_destinations(text: &str) -> Vec<String> {
    RE_DESTINATION
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

pub struct OptionExtractor<R = StdRng> {
    rng: R,
    today: NaiveDate,
}

impl OptionExtractor<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), Utc::now().date_naive())
    }
}

impl Default for OptionExtractor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> OptionExtractor<R> {
    /// `today` is the date given to flights whose text names none.
    pub fn with_rng(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    pub fn extract(&mut self, text: &str, category: Category) -> Vec<CandidateOption> {
        let prices = scan_prices(text);
        let destinations = scan_destinations(text);
        let ctx = MatchContext {
            text,
            destinations: &destinations,
            today: self.today,
        };

        let mut items = match category {
            Category::Flights => matchers::flights(&ctx),
            Category::Hotels => matchers::hotels(&ctx),
            Category::Activities => matchers::activities(&ctx),
            Category::Visas => matchers::visas(&ctx),
        };
        items.truncate(MAX_OPTIONS);

        tracing::debug!(
            category = %category,
            items = items.len(),
            prices = prices.len(),
            "scanned assistant response"
        );

        if items.is_empty() {
            return self
                .fallback_option(text, category, &prices, &destinations)
                .into_iter()
                .collect();
        }

        self.attach_prices(items, category, &prices)
    }

    fn attach_prices(
        &mut self,
        items: Vec<ItemMatch>,
        category: Category,
        prices: &[PriceToken],
    ) -> Vec<CandidateOption> {
        let item_spans: Vec<_> = items.iter().map(|i| i.span.clone()).collect();
        let price_spans: Vec<_> = prices.iter().map(|p| p.span.clone()).collect();
        let timeline = Timeline::new(&item_spans, &price_spans);
        tracing::trace!(timeline = %timeline.describe(), "pairing prices");

        let range = fallback_price_range(category);
        let mut slots: Vec<Option<CandidateOption>> =
            items.into_iter().map(|i| Some(i.option)).collect();

        timeline
            .pairs()
            .into_iter()
            .filter_map(|(item, price)| {
                let mut option = slots.get_mut(item)?.take()?;
                option.price =
                    resolve_price(price.map(|p| &prices[p]), range.clone(), &mut self.rng);
                Some(option)
            })
            .collect()
    }

    fn fallback_option(
        &mut self,
        text: &str,
        category: Category,
        prices: &[PriceToken],
        destinations: &[String],
    ) -> Option<CandidateOption> {
        let first = prices.first()?;
        let price = resolve_price(Some(first), fallback_price_range(category), &mut self.rng);

        let trimmed = text.trim();
        let name = if trimmed.chars().count() > FALLBACK_NAME_CHARS {
            let head: String = trimmed.chars().take(FALLBACK_NAME_CHARS).collect();
            format!("{head}...")
        } else {
            trimmed.to_string()
        };
        let destination = destinations
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

        let mut option = CandidateOption::new(category, name, destination, price);
        option.details = Some(text.to_string());
        Some(option)
    }
}

/// Extract with a fresh entropy-seeded source and today's date.
pub fn extract_options(text: &str, category: Category) -> Vec<CandidateOption> {
    OptionExtractor::new().extract(text, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 4] = [
        Category::Flights,
        Category::Hotels,
        Category::Activities,
        Category::Visas,
    ];

    fn extractor(seed: u64) -> OptionExtractor<StdRng> {
        OptionExtractor::with_rng(
            StdRng::seed_from_u64(seed),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
    }

    fn ten_routes() -> String {
        let cities = [
            ("Paris", "Rome"),
            ("Berlin", "Madrid"),
            ("Vienna", "Prague"),
            ("Dublin", "Lisbon"),
            ("Oslo", "Helsinki"),
            ("Zurich", "Milan"),
            ("Warsaw", "Budapest"),
            ("Athens", "Sofia"),
            ("Brussels", "Amsterdam"),
            ("Munich", "Venice"),
        ];
        cities
            .iter()
            .enumerate()
            .map(|(i, (from, to))| format!("{}. {from} to {to} - ${}\n", i + 1, 300 + i * 10))
            .collect()
    }

    #[test]
    fn test_flight_price_association() {
        let options = extractor(1).extract("$1200 New York to London", Category::Flights);
        assert_eq!(options.len(), 1);
        let o = &options[0];
        assert_eq!(o.departure.as_deref(), Some("New York"));
        assert_eq!(o.arrival.as_deref(), Some("London"));
        assert_eq!(o.destination, "London");
        assert_eq!(o.price, 1200);
        assert_eq!(o.date.as_deref(), Some("2025-06-01"));
    }

    #[test]
    fn test_hotel_suffix_and_window() {
        let options = extractor(1).extract(
            "Stay at the Grand Palace Hotel in Dubai for $300",
            Category::Hotels,
        );
        assert_eq!(options.len(), 1);
        assert!(options[0].name.contains("Grand Palace Hotel"));
        assert_eq!(options[0].destination, "Dubai");
        assert_eq!(options[0].price, 300);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        for category in ALL {
            assert!(extractor(1).extract("", category).is_empty());
            assert!(extractor(1).extract("   \n\t", category).is_empty());
        }
    }

    #[test]
    fn test_fallback_when_no_structure() {
        let text = "Overall cost will be around $450 depending on season.";
        let options = extractor(1).extract(text, Category::Activities);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].price, 450);
        assert_eq!(options[0].details.as_deref(), Some(text));
        assert_eq!(options[0].name, text);
        assert_eq!(options[0].destination, DEFAULT_DESTINATION);
    }

    #[test]
    fn test_fallback_name_truncated() {
        let text = format!("{} costs $80", "a".repeat(150));
        let options = extractor(1).extract(&text, Category::Visas);
        assert_eq!(options[0].name.chars().count(), FALLBACK_NAME_CHARS + 3);
        assert!(options[0].name.ends_with("..."));
        assert_eq!(options[0].details.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn test_fallback_uses_destination_pool() {
        let options = extractor(1).extract(
            "Budget about $900 for a week in Portugal.",
            Category::Hotels,
        );
        assert_eq!(options[0].destination, "Portugal");
    }

    #[test]
    fn test_cap_keeps_first_six_in_order() {
        let options = extractor(1).extract(&ten_routes(), Category::Flights);
        assert_eq!(options.len(), MAX_OPTIONS);
        let departures: Vec<_> = options
            .iter()
            .map(|o| o.departure.clone().unwrap())
            .collect();
        assert_eq!(
            departures,
            vec!["Paris", "Berlin", "Vienna", "Dublin", "Oslo", "Zurich"]
        );
        assert_eq!(options[5].price, 350);
    }

    #[test]
    fn test_no_price_no_structure() {
        for category in ALL {
            let options = extractor(1).extract("Let me know what you think!", category);
            assert!(options.is_empty());
        }
    }

    #[test]
    fn test_bound_holds_for_every_category() {
        let text = format!(
            "{}Hilton Hotel, Marriott Hotel, Hyatt Hotel, Sheraton Hotel, Westin Hotel, \
             Ritz Hotel, Savoy Hotel. Canal tour, Food tour, Bike tour, Boat tour, Wine tour, \
             Art tour, Jazz tour. Tourist Visa, Business Visa, Student Visa, Transit Visa, \
             Work Visa, Golden Visa, Digital Visa.",
            ten_routes()
        );
        for category in ALL {
            let options = extractor(3).extract(&text, category);
            assert!(options.len() <= MAX_OPTIONS, "{category}: {}", options.len());
            assert!(options.iter().all(|o| !o.name.is_empty()));
            assert!(options.iter().all(|o| o.category == category));
        }
    }

    #[test]
    fn test_priced_items_are_deterministic() {
        let text = "1. Paris to Rome - $300\n2. Berlin to Madrid - $410";
        let a = OptionExtractor::new().extract(text, Category::Flights);
        let b = OptionExtractor::new().extract(text, Category::Flights);
        assert_eq!(a, b);

        let text = "Louvre tour for $40. Seine cruise for $25.";
        let a = OptionExtractor::new().extract(text, Category::Activities);
        let b = OptionExtractor::new().extract(text, Category::Activities);
        assert_eq!(a, b);
    }

    #[test]
    fn test_priced_hotels_are_deterministic() {
        let text = "Stay at the Grand Palace Hotel in Dubai for $300";
        let first = extract_options(text, Category::Hotels);
        for _ in 0..20 {
            assert_eq!(extract_options(text, Category::Hotels), first);
        }
    }

    #[test]
    fn test_accented_routes_keep_their_prices() {
        let text = "1. Miami to Bogotá - $320\n2. Paris to Zürich - $150\n3. Oslo to Reykjavík - $200";
        let options = extractor(1).extract(text, Category::Flights);
        let got: Vec<_> = options
            .iter()
            .map(|o| (o.arrival.clone().unwrap(), o.price))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Bogotá".to_string(), 320),
                ("Zürich".to_string(), 150),
                ("Reykjavík".to_string(), 200),
            ]
        );
    }

    #[test]
    fn test_same_seed_same_output() {
        let text = "Try the Harbor Inn or the Hillside Lodge near Cork.";
        assert_eq!(
            extractor(42).extract(text, Category::Hotels),
            extractor(42).extract(text, Category::Hotels)
        );
    }

    #[test]
    fn test_missing_prices_fall_in_category_range() {
        let text = "Harbor Inn, Hillside Lodge and Cliff Resort in Kerry";
        let options = extractor(9).extract(text, Category::Hotels);
        assert_eq!(options.len(), 3);
        let range = fallback_price_range(Category::Hotels);
        assert!(options.iter().all(|o| range.contains(&o.price)));
    }

    #[test]
    fn test_prices_pair_positionally() {
        let text = "Prices: $150 and $90. Options: Lisbon to Porto, Porto to Faro, Faro to Seville.";
        let options = extractor(5).extract(text, Category::Flights);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].price, 150);
        assert_eq!(options[1].price, 90);
        assert!(fallback_price_range(Category::Flights).contains(&options[2].price));
    }
}
