//! Keyword matcher over the intent catalog.
//!
//! Input is trimmed and lower-cased, then the catalog is scanned in
//! declaration order; the first entry with any keyword contained in the input
//! wins. Containment is plain substring search, so a keyword also matches
//! inside longer words ("место" matches "вместо").

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{IntentCatalog, IntentEntry};

/// Stateless first-match matcher. Cloning shares the catalog.
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    catalog: Arc<IntentCatalog>,
}

impl FaqMatcher {
    pub fn new(catalog: Arc<IntentCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// Find the first entry whose keywords occur in `input`.
    pub fn find(&self, input: &str) -> Option<&IntentEntry> {
        let normalized = normalize(input);
        let found = self
            .catalog
            .entries()
            .iter()
            .find(|entry| entry.matches(&normalized));

        match found {
            Some(entry) => debug!(question = entry.question(), "FAQ intent matched"),
            None => debug!("No FAQ intent matched"),
        }
        found
    }
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> FaqMatcher {
        FaqMatcher::new(Arc::new(IntentCatalog::builtin()))
    }

    fn matched_question(input: &str) -> Option<String> {
        matcher().find(input).map(|e| e.question().to_string())
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  ЦЕНА Стрижки \n"), "цена стрижки");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_price_keyword_anywhere_any_case() {
        for input in [
            "цена",
            "ЦЕНА",
            "Какая цена?",
            "  а ЦеНа стрижки  ",
            "xxценаxx",
            "ценами интересуюсь",
        ] {
            assert_eq!(
                matched_question(input).as_deref(),
                Some("Сколько стоит стрижка?"),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_location_question() {
        assert_eq!(
            matched_question("Привет, где вы находитесь?").as_deref(),
            Some("Где вы находитесь?")
        );
    }

    #[test]
    fn test_booking_and_prepayment() {
        assert_eq!(
            matched_question("Как записаться онлайн?").as_deref(),
            Some("Как записаться?")
        );
        assert_eq!(
            matched_question("Нужен ли залог?").as_deref(),
            Some("Нужна ли предоплата?")
        );
    }

    #[test]
    fn test_no_match() {
        assert!(matcher().find("asdkjasd").is_none());
        assert!(matcher().find("").is_none());
    }

    #[test]
    fn test_first_match_wins_in_catalog_order() {
        // "записаться" (booking, first) and "где" (location, third)
        assert_eq!(
            matched_question("Где записаться?").as_deref(),
            Some("Как записаться?")
        );
    }

    #[test]
    fn test_substring_matches_inside_words() {
        assert_eq!(
            matched_question("Можно вместо бороды усы?").as_deref(),
            Some("Где вы находитесь?")
        );
        assert_eq!(
            matched_question("Какой у вас сценарий?").as_deref(),
            Some("Сколько стоит стрижка?")
        );
    }

    #[test]
    fn test_matching_is_idempotent() {
        let m = matcher();
        let first = m.find("Сколько стоит?").cloned();
        let second = m.find("Сколько стоит?").cloned();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog_never_matches() {
        let m = FaqMatcher::new(Arc::new(IntentCatalog::default()));
        assert!(m.find("цена").is_none());
    }
}
