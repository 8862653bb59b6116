//! Built-in quotes used when nothing is stored yet.

use quotes_core::types::{Collection, Quote};

const SEED: [(&str, &str); 3] = [
    ("The only way to do great work is to love what you do.", "Motivation"),
    ("Innovation distinguishes between a leader and a follower.", "Leadership"),
    ("Stay hungry, stay foolish.", "Life"),
];

/// The fixed seed collection.
pub fn seed_quotes() -> Collection {
    SEED.iter()
        .map(|(text, category)| Quote {
            text: (*text).to_string(),
            category: (*category).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_valid() {
        let seed = seed_quotes();
        assert_eq!(seed.len(), 3);
        assert!(seed.iter().all(|q| q.validate().is_ok()));
        assert_eq!(seed[2].text, "Stay hungry, stay foolish.");
    }
}
