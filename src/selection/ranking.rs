use crate::config::ScoringConfig;
use crate::word::{classify, CharacterClass};

pub trait Scorer {
    /// Importance of `character` at `position` in a word of `word_length`
    /// characters. Callers guarantee `position < word_length`.
    fn score(&self, character: char, position: usize, word_length: usize) -> f64;
}

/// v0: positional heuristic scorer
///
/// score = class_score * decay(|position - ovp|) * edge_penalty * interior_boost
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionalScorer {
    config: ScoringConfig,
}

impl PositionalScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn class_score(&self, class: CharacterClass) -> f64 {
        match class {
            CharacterClass::Consonant => self.config.consonant_score,
            CharacterClass::Vowel => self.config.vowel_score,
            CharacterClass::Other => self.config.other_score,
        }
    }

    /// Optimal viewing position, from the word length alone.
    pub fn optimal_viewing_position(&self, word_length: usize) -> usize {
        let ratio = match word_length {
            0..=3 => return word_length / 2,
            4..=5 => self.config.short_ovp_ratio,
            6..=8 => self.config.medium_ovp_ratio,
            _ => self.config.long_ovp_ratio,
        };

        (word_length as f64 * ratio).floor() as usize
    }
}

impl Scorer for PositionalScorer {
    fn score(&self, character: char, position: usize, word_length: usize) -> f64 {
        let class = classify(character);
        let mut score = self.class_score(class);

        let ovp = self.optimal_viewing_position(word_length);
        let distance = position.abs_diff(ovp) as f64;
        score *= 1.0 / (1.0 + distance * self.config.decay_rate);

        // A single-character word is first, not last.
        let last = word_length.saturating_sub(1);
        if position == 0 {
            score *= self.config.first_position_penalty;
        } else if position == last {
            score *= self.config.last_position_penalty;
        }

        if position > 0 && position < last && class.is_consonant() {
            score *= self.config.interior_consonant_boost;
        }

        score
    }
}
