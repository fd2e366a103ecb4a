use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Item,
    Price,
}

/// Structural matches and price tokens laid out in text order.
///
/// Pairing is positional: the n-th item gets the n-th price, wherever each
/// sits in the text. Responses that list prices in a different order than
/// the items they belong to will pair them wrong.
#[derive(Debug, Default)]
pub struct Timeline {
    spans: Vec<(SpanKind, usize, Range<usize>)>,
}

impl Timeline {
    pub fn new(items: &[Range<usize>], prices: &[Range<usize>]) -> Self {
        let mut spans: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, r)| (SpanKind::Item, i, r.clone()))
            .chain(
                prices
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (SpanKind::Price, i, r.clone())),
            )
            .collect();
        spans.sort_by_key(|(kind, _, r)| (r.start, *kind == SpanKind::Price));
        Self { spans }
    }

    fn ordinals(&self, kind: SpanKind) -> Vec<usize> {
        self.spans
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .map(|(_, i, _)| *i)
            .collect()
    }

    /// For each item, in text order, the index of the price paired with it.
    pub fn pairs(&self) -> Vec<(usize, Option<usize>)> {
        let prices = self.ordinals(SpanKind::Price);
        self.ordinals(SpanKind::Item)
            .into_iter()
            .enumerate()
            .map(|(n, item)| (item, prices.get(n).copied()))
            .collect()
    }

    /// Compact `I P I P` rendering for debug logs.
    pub fn describe(&self) -> String {
        self.spans
            .iter()
            .map(|(kind, _, _)| match kind {
                SpanKind::Item => "I",
                SpanKind::Price => "P",
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
