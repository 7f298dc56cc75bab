//! Curated "word of the day" candidates, picked uniformly at random.

use rand::prelude::IndexedRandom;

/// Curated candidates shown on startup and on "new random word".
pub const CANDIDATES: &[&str] = &[
    "ephemeral",
    "serendipity",
    "resilience",
    "petrichor",
    "sonder",
    "eloquence",
    "luminous",
    "mellifluous",
    "quixotic",
    "halcyon",
    "ineffable",
    "sanguine",
    "zenith",
    "labyrinth",
];

pub struct WordOfTheDay {
    candidates: Vec<String>,
}

impl WordOfTheDay {
    pub fn new() -> Self {
        Self::with_candidates(CANDIDATES.iter().map(|s| s.to_string()).collect())
    }

    /// Custom list. Falls back to the curated list when `candidates` is empty.
    pub fn with_candidates(candidates: Vec<String>) -> Self {
        if candidates.is_empty() {
            return Self::new();
        }
        Self { candidates }
    }

    pub fn pick(&self) -> &str {
        let mut rng = rand::rng();
        self.candidates
            .choose(&mut rng)
            .map(String::as_str)
            .unwrap_or(CANDIDATES[0])
    }
}

impl Default for WordOfTheDay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_at_least_ten_distinct_candidates() {
        let set: HashSet<_> = CANDIDATES.iter().collect();
        assert!(set.len() >= 10);
        assert_eq!(set.len(), CANDIDATES.len());
    }

    #[test]
    fn test_pick_is_from_candidates() {
        let wotd = WordOfTheDay::new();
        for _ in 0..50 {
            assert!(CANDIDATES.contains(&wotd.pick()));
        }
    }

    #[test]
    fn test_pick_covers_list() {
        let wotd = WordOfTheDay::with_candidates(vec!["a".into(), "b".into()]);
        let seen: HashSet<_> = (0..200).map(|_| wotd.pick().to_string()).collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_empty_custom_list_falls_back() {
        let wotd = WordOfTheDay::with_candidates(Vec::new());
        assert!(CANDIDATES.contains(&wotd.pick()));
    }
}
