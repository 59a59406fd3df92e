//! Fuzzy matching for the incremental filters.
//!
//! Wraps the underlying matcher so screens only deal with scores and
//! booleans.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

pub struct Matcher {
    inner: SkimMatcherV2,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            inner: SkimMatcherV2::default(),
        }
    }

    /// Match score of `pattern` against `text`, case-insensitive.
    ///
    /// Higher is better; `None` means no match.
    pub fn score(&self, text: &str, pattern: &str) -> Option<i64> {
        // Skim is smart-case; a lowercase pattern makes it ignore case.
        self.inner.fuzzy_match(text, &pattern.to_lowercase())
    }

    /// Best score over several fields of the same item.
    pub fn best_score<'a>(
        &self,
        texts: impl IntoIterator<Item = &'a str>,
        pattern: &str,
    ) -> Option<i64> {
        texts
            .into_iter()
            .filter_map(|text| self.score(text, pattern))
            .max()
    }

    /// Filter `items` by `pattern`, best matches first.
    ///
    /// An empty pattern keeps every item in its original order. Ties keep
    /// the original order too.
    pub fn rank<'a, T, F, I>(&self, items: &'a [T], pattern: &str, fields: F) -> Vec<&'a T>
    where
        F: Fn(&'a T) -> I,
        I: IntoIterator<Item = &'a str>,
    {
        if pattern.is_empty() {
            return items.iter().collect();
        }

        let mut scored: Vec<(i64, &T)> = items
            .iter()
            .filter_map(|item| {
                self.best_score(fields(item), pattern)
                    .map(|score| (score, item))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, item)| item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match() {
        let matcher = Matcher::new();

        assert!(matcher.score("Corte de Cabelo", "cdc").is_some());
        assert!(matcher.score("Corte + Barba", "crtbrb").is_some());
        assert!(matcher.score("Barba", "barba").is_some());

        // Case-insensitive
        assert!(matcher.score("barba", "BARBA").is_some());

        assert!(matcher.score("Barba", "xyz").is_none());
    }

    #[test]
    fn test_best_score_looks_at_every_field() {
        let matcher = Matcher::new();
        let fields = ["Hidratação", "Hidratação profunda para cabelo e barba"];
        assert!(matcher.best_score(fields, "profunda").is_some());
        assert!(matcher.best_score(fields, "zzz").is_none());
    }

    #[test]
    fn test_rank_orders_by_score() {
        let matcher = Matcher::new();
        let items = ["b-a-r-b-a", "Pigmentação", "Barba"];

        let ranked = matcher.rank(&items, "barba", |s| [*s]);
        assert_eq!(ranked, vec![&"Barba", &"b-a-r-b-a"]);

        let all = matcher.rank(&items, "", |s| [*s]);
        assert_eq!(all, vec![&"b-a-r-b-a", &"Pigmentação", &"Barba"]);
    }
}
