/// One way of deciding whether a stored assembly code identifies the
/// requested product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Trimmed, case-sensitive equality
    Exact,
    /// Trimmed, case-insensitive equality
    CaseInsensitive,
    /// Case-insensitive containment of the requested id in the stored code
    Substring,
}

impl MatchStrategy {
    /// Strategies in the order they are attempted
    pub const FALLBACK_ORDER: [MatchStrategy; 3] = [
        MatchStrategy::Exact,
        MatchStrategy::CaseInsensitive,
        MatchStrategy::Substring,
    ];

    /// Tests a stored code against an already-trimmed query
    pub fn matches(self, stored: &str, query: &str) -> bool {
        let stored = stored.trim();
        match self {
            MatchStrategy::Exact => stored == query,
            MatchStrategy::CaseInsensitive => stored.to_lowercase() == query.to_lowercase(),
            MatchStrategy::Substring => stored.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

/// ProductMatcher policy implementing the ordered lookup fallback
///
/// Identifiers vary in casing, whitespace and truncation across feeds, so a
/// product is located by trying each [`MatchStrategy`] in order and keeping
/// the first one that yields any rows.
pub struct ProductMatcher;

impl ProductMatcher {
    /// Returns the indices of matching entries and the strategy that matched
    ///
    /// `codes` yields the assembly code of each row (`None` for missing cells).
    /// A blank query matches nothing.
    pub fn find<'a, I>(codes: I, product_id: &str) -> Option<(MatchStrategy, Vec<usize>)>
    where
        I: Iterator<Item = Option<&'a str>> + Clone,
    {
        let query = product_id.trim();
        if query.is_empty() {
            return None;
        }

        MatchStrategy::FALLBACK_ORDER.iter().find_map(|strategy| {
            let hits: Vec<usize> = codes
                .clone()
                .enumerate()
                .filter_map(|(idx, code)| match code {
                    Some(code) if strategy.matches(code, query) => Some(idx),
                    _ => None,
                })
                .collect();
            if hits.is_empty() {
                None
            } else {
                Some((*strategy, hits))
            }
        })
    }
}
