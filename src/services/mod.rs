// Persistence gateways, one per app. Each method is a single unit of work
// against the shared pool; duplicate keys surface through the UNIQUE
// constraint rather than the callers' advisory pre-checks.
pub mod bar;
pub mod booking;
pub mod classroom;
pub mod trivia;

pub use bar::BarService;
pub use booking::BookingService;
pub use classroom::ClassroomService;
pub use trivia::TriviaService;

/// Lowercased whitespace tokens for "tokenized contains" search.
pub(crate) fn search_tokens(term: &str) -> Vec<String> {
    term.split_whitespace().map(|t| t.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::search_tokens;

    #[test]
    fn tokens_are_lowercased_and_split() {
        assert_eq!(search_tokens("  The Dueling  PIANOS "), vec!["the", "dueling", "pianos"]);
        assert!(search_tokens("   ").is_empty());
    }
}
