use serde::{Deserialize, Serialize};

use crate::word::CharacterClass;

/// A highlighted letter within a word.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalLetter {
    /// 0-based character position (counted in `char`s, not bytes).
    pub index: usize,
    #[serde(rename = "char")]
    pub character: char,
    /// Normalized importance in [0.0, 1.0].
    pub weight: f64,
}

/// A word together with its focal letters, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAnnotation {
    pub word: String,
    pub focal_letters: Vec<FocalLetter>,
}

impl WordAnnotation {
    /// The leftmost focal letter, which an RSVP display anchors on.
    pub fn primary(&self) -> Option<&FocalLetter> {
        self.focal_letters.first()
    }
}

/// Per-position scoring breakdown for a word.
///
/// `normalized` equals `raw` divided by the word's maximum raw score, or
/// `raw` itself when that maximum is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterScore {
    pub index: usize,
    pub character: char,
    pub class: CharacterClass,
    pub raw: f64,
    pub normalized: f64,
}

impl From<&CharacterScore> for FocalLetter {
    fn from(score: &CharacterScore) -> Self {
        FocalLetter {
            index: score.index,
            character: score.character,
            weight: score.normalized,
        }
    }
}
