use crate::types::{CharacterScore, FocalLetter};

/// Number of focal letters a word of `word_length` characters warrants.
///
/// | length | letters |
/// |--------|---------|
/// | 0      | 0       |
/// | 1-5    | 1       |
/// | 6-8    | 2       |
/// | 9+     | min(3, length / 4) |
pub fn focal_budget(word_length: usize) -> usize {
    match word_length {
        0 => 0,
        1..=5 => 1,
        6..=8 => 2,
        n => (n / 4).min(3),
    }
}

/// Keep the `budget` best-scoring positions and return them in reading order.
///
/// Ranking is by normalized score descending; equal scores go to the lower
/// index.
pub fn apply_budget(scores: &[CharacterScore], budget: usize) -> Vec<FocalLetter> {
    let mut ranked: Vec<&CharacterScore> = scores.iter().collect();

    ranked.sort_by(|a, b| {
        b.normalized
            .total_cmp(&a.normalized)
            .then_with(|| a.index.cmp(&b.index))
    });

    debug_assert!(ranked.windows(2).all(|w| {
        let a = w[0];
        let b = w[1];
        a.normalized > b.normalized || (a.normalized == b.normalized && a.index < b.index)
    }));

    ranked.truncate(budget);
    ranked.sort_by_key(|s| s.index);

    ranked.into_iter().map(FocalLetter::from).collect()
}
