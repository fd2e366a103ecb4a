use std::ops::Range;

use chrono::NaiveDate;

use super::patterns::{
    RE_ACTIVITY, RE_ACTIVITY_PLACE, RE_DURATION, RE_FLIGHT_DATE, RE_HOTEL, RE_HOTEL_PLACE,
    RE_ROUTE, RE_SENTENCE_END, RE_VISA, RE_VISA_COUNTRY,
};
use super::DEFAULT_DESTINATION;
use crate::models::{CandidateOption, Category};

pub const HOTEL_DESTINATION: &str = "International";
pub const ACTIVITY_DESTINATION: &str = "Various Locations";
pub const VISA_PROCESSING: &str = "5-7 business days";

const HOTEL_WINDOW_CHARS: usize = 100;

/// Capitalized words that open a sentence rather than name a place.
const LEADING_NOISE: &[&str] = &[
    "Fly", "Flying", "Flight", "Flights", "Travel", "Traveling", "Travelling", "Go", "Going",
    "Head", "Return", "Returning", "Route", "Option", "Direct", "Nonstop", "Trip", "Welcome",
    "Consider", "Try", "Book", "Stay", "Choose", "Recommended",
];

const CALENDAR_WORDS: &[&str] = &[
    "Jan", "January", "Feb", "February", "Mar", "March", "Apr", "April", "May", "Jun", "June",
    "Jul", "July", "Aug", "August", "Sep", "Sept", "September", "Oct", "October", "Nov",
    "November", "Dec", "December", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
    "Saturday", "Sunday",
];

const VISA_QUALIFIERS: &[&str] = &["Tourist", "Business", "Student", "Transit", "Work", "Visitor"];

pub struct MatchContext<'a> {
    pub text: &'a str,
    pub destinations: &'a [String],
    pub today: NaiveDate,
}

/// A structural match awaiting its price.
#[derive(Debug)]
pub struct ItemMatch {
    pub span: Range<usize>,
    pub option: CandidateOption,
}

fn strip_leading_noise(phrase: &str) -> Option<String> {
    let words: Vec<&str> = phrase
        .split_whitespace()
        .skip_while(|w| LEADING_NOISE.contains(w))
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn is_calendar_phrase(phrase: &str) -> bool {
    phrase
        .split_whitespace()
        .next()
        .map(|w| CALENDAR_WORDS.contains(&w))
        .unwrap_or(false)
}

// Byte offsets of the text reaching `radius` characters either side of `span`.
fn char_window(text: &str, span: &Range<usize>, radius: usize) -> Range<usize> {
    let lo = text[..span.start]
        .char_indices()
        .rev()
        .nth(radius.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let hi = text[span.end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| span.end + i)
        .unwrap_or(text.len());
    lo..hi
}

pub fn flights(ctx: &MatchContext) -> Vec<ItemMatch> {
    let routes: Vec<(Range<usize>, String, String)> = RE_ROUTE
        .captures_iter(ctx.text)
        .filter_map(|caps| {
            let span = caps.get(0)?.range();
            let departure = strip_leading_noise(&caps[1])?;
            let arrival = caps[2].to_string();
            if is_calendar_phrase(&departure) || is_calendar_phrase(&arrival) {
                return None;
            }
            Some((span, departure, arrival))
        })
        .collect();

    let first_date = RE_FLIGHT_DATE
        .captures(ctx.text)
        .map(|c| c[1].to_string());

    routes
        .iter()
        .enumerate()
        .map(|(i, (span, departure, arrival))| {
            let segment_end = routes
                .get(i + 1)
                .map(|(next, _, _)| next.start)
                .unwrap_or(ctx.text.len());
            let date = RE_FLIGHT_DATE
                .captures(&ctx.text[span.start..segment_end])
                .map(|c| c[1].to_string())
                .or_else(|| first_date.clone())
                .unwrap_or_else(|| ctx.today.format("%Y-%m-%d").to_string());

            let mut option = CandidateOption::new(
                Category::Flights,
                format!("{departure} to {arrival}"),
                arrival.clone(),
                0,
            );
            option.departure = Some(departure.clone());
            option.arrival = Some(arrival.clone());
            option.date = Some(date);
            ItemMatch {
                span: span.clone(),
                option,
            }
        })
        .collect()
}

/// First `(in|at|near) Place` after the hotel name within the window,
/// otherwise the closest one before it. Places inside the name are ignored.
fn nearby_place(text: &str, span: &Range<usize>) -> Option<String> {
    let window = char_window(text, span, HOTEL_WINDOW_CHARS);
    let places: Vec<(Range<usize>, &str)> = RE_HOTEL_PLACE
        .captures_iter(&text[window.clone()])
        .filter_map(|c| c.get(1))
        .map(|m| (window.start + m.start()..window.start + m.end(), m.as_str()))
        .collect();

    places
        .iter()
        .find(|(r, _)| r.start >= span.end)
        .or_else(|| places.iter().rev().find(|(r, _)| r.end <= span.start))
        .map(|(_, place)| place.to_string())
}

/// 4 or 5 stars, fixed per name so repeated extractions agree.
fn star_rating(name: &str) -> u8 {
    let sum: u32 = name.bytes().map(u32::from).sum();
    4 + (sum % 2) as u8
}

pub fn hotels(ctx: &MatchContext) -> Vec<ItemMatch> {
    RE_HOTEL
        .captures_iter(ctx.text)
        .filter_map(|caps| {
            let m = caps.get(1)?;
            let name = strip_leading_noise(m.as_str())?;
            let span = m.range();

            let destination = nearby_place(ctx.text, &span)
                .unwrap_or_else(|| HOTEL_DESTINATION.to_string());

            let mut option = CandidateOption::new(Category::Hotels, name, destination, 0);
            option.rating = Some(star_rating(&option.name));
            Some(ItemMatch { span, option })
        })
        .collect()
}

pub fn activities(ctx: &MatchContext) -> Vec<ItemMatch> {
    // one lookup for the whole response, shared by every item
    let duration = RE_DURATION
        .captures(ctx.text)
        .map(|c| format!("{} {}", &c[1], &c[2]));

    RE_ACTIVITY
        .captures_iter(ctx.text)
        .filter_map(|caps| {
            let m = caps.get(1)?;
            let name = m.as_str().trim().to_string();
            if name.is_empty() {
                return None;
            }

            let sentence_end = RE_SENTENCE_END
                .find_at(ctx.text, m.end())
                .map(|end| end.start())
                .unwrap_or(ctx.text.len());
            let destination = RE_ACTIVITY_PLACE
                .captures(&ctx.text[m.start()..sentence_end])
                .map(|c| c[1].to_string())
                .unwrap_or_else(|| ACTIVITY_DESTINATION.to_string());

            let mut option = CandidateOption::new(Category::Activities, name, destination, 0);
            option.duration = duration.clone();
            Some(ItemMatch {
                span: m.range(),
                option,
            })
        })
        .collect()
}

fn strip_visa_qualifiers(country: &str) -> String {
    let mut words: Vec<&str> = country.split_whitespace().collect();
    while words.len() > 1 && words.last().is_some_and(|w| VISA_QUALIFIERS.contains(w)) {
        words.pop();
    }
    words.join(" ")
}

pub fn visas(ctx: &MatchContext) -> Vec<ItemMatch> {
    // one country for the whole response, shared by every item
    let country = RE_VISA_COUNTRY
        .captures(ctx.text)
        .map(|c| strip_visa_qualifiers(&c[1]))
        .or_else(|| ctx.destinations.first().cloned())
        .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

    RE_VISA
        .captures_iter(ctx.text)
        .filter_map(|caps| {
            let m = caps.get(1)?;
            let mut option = CandidateOption::new(
                Category::Visas,
                m.as_str().to_string(),
                country.clone(),
                0,
            );
            option.processing = Some(VISA_PROCESSING.to_string());
            Some(ItemMatch {
                span: m.range(),
                option,
            })
        })
        .collect()
}
