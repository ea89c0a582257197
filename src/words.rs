/// The word every round is played against. Must be a lowercase isogram
/// whose length has an entry in [`max_tries_for_length`].
pub const HIDDEN_WORD: &str = "badger";

const MAX_TRIES_BY_LENGTH: [(usize, u32); 5] = [(3, 4), (4, 5), (5, 6), (6, 7), (7, 8)];

/// Attempt budget for a hidden word of `length` letters, if one is defined.
#[must_use]
pub fn max_tries_for_length(length: usize) -> Option<u32> {
    MAX_TRIES_BY_LENGTH
        .iter()
        .find(|(len, _)| *len == length)
        .map(|(_, tries)| *tries)
}

/// True if no letter repeats, ignoring case. Non-letters are not compared.
#[must_use]
pub fn is_isogram(word: &str) -> bool {
    let mut seen = std::collections::HashSet::new();
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .all(|c| seen.insert(c))
}

/// True if every character is an ASCII lowercase letter.
#[must_use]
pub fn is_lowercase(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_lowercase())
}
