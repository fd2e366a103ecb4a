use std::ops::Range;

use rand::Rng;

use super::patterns::RE_PRICE;

/// A monetary token as it appeared in the response.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceToken {
    pub raw: String,
    pub span: Range<usize>,
}

impl PriceToken {
    /// Digits only, so `$1,250` reads as 1250. `None` when nothing numeric
    /// survives or the value does not fit.
    pub fn value(&self) -> Option<u32> {
        let digits: String = self.raw.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

pub fn scan_prices(text: &str) -> Vec<PriceToken> {
    RE_PRICE
        .find_iter(text)
        .map(|m| PriceToken {
            raw: m.as_str().to_string(),
            span: m.range(),
        })
        .collect()
}

/// Missing and unparsable prices share one path: a draw from `fallback`.
pub fn resolve_price<R: Rng + ?Sized>(
    token: Option<&PriceToken>,
    fallback: Range<u32>,
    rng: &mut R,
) -> u32 {
    token
        .and_then(PriceToken::value)
        .unwrap_or_else(|| rng.gen_range(fallback))
}
