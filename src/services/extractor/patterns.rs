use std::sync::LazyLock;

use regex::Regex;

// Place names are runs of capitalized words on a single line, accents included.
const PLACE: &str = r"(\p{Lu}\p{Ll}+(?:[ ]\p{Lu}\p{Ll}+)*)\b";

pub static RE_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[$€£¥₹][ ]?\d[\d,]*|\b\d[\d,]*[ ]?USD\b").unwrap()
});

pub static RE_DESTINATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:to|in|at|visit)[ ]+{PLACE}")).unwrap()
});

pub static RE_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{PLACE}(?:[ ]+to[ ]+|[ ]*(?:→|->)[ ]*){PLACE}")).unwrap()
});

pub static RE_FLIGHT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:on|from|starting)[ ]+((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?[ ]+\d{1,2}(?:st|nd|rd|th)?(?:,?[ ]+\d{4})?|\d{1,2}(?:st|nd|rd|th)?[ ]+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*(?:[ ]+\d{4})?|\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{2,4})",
    )
    .unwrap()
});

pub static RE_HOTEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b((?:\p{Lu}[\p{L}'&.-]*[ ]+)+(?:Hotel|Resort|Inn|Lodge|Suites|Grand|Palace))\b",
    )
    .unwrap()
});

pub static RE_HOTEL_PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:in|at|near)[ ]+{PLACE}")).unwrap()
});

pub static RE_ACTIVITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\b\d+[.)][ ]*)?\b(\p{Lu}[^.!?\n,;:]*\b(?i:tours?|experiences?|visits?|adventures?|excursions?|safaris?|cruises?))\b",
    )
    .unwrap()
});

pub static RE_ACTIVITY_PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:in|at|of)[ ]+{PLACE}")).unwrap()
});

pub static RE_SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?\n]").unwrap());

pub static RE_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d+)[ ]*(hours?|days?)\b").unwrap()
});

pub static RE_VISA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\p{Lu}[\p{L}'-]*(?:[ ]+\p{Lu}[\p{L}'-]*){0,3}(?:[ ]+(?i:tourist|business|student|transit|work|visitor))?[ ]+(?:\p{L}+-)?(?:[Vv]isas?|[Ee]ntry[ ]+[Pp]ermits?))\b",
    )
    .unwrap()
});

pub static RE_VISA_COUNTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:for|to|in)[ ]+{PLACE}[ ]+(?:[Vv]isa|[Ee]ntry)")).unwrap()
});
