use serde::{Deserialize, Serialize};

/// Phonological class of a single character.
///
/// Classification is ASCII-letter based and case-insensitive. Anything that is
/// not an ASCII letter (digits, punctuation, whitespace, accented or non-Latin
/// letters) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Consonant,
    Vowel,
    Other,
}

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub fn classify(c: char) -> CharacterClass {
    if !c.is_ascii_alphabetic() {
        return CharacterClass::Other;
    }

    if VOWELS.contains(&c.to_ascii_lowercase()) {
        CharacterClass::Vowel
    } else {
        CharacterClass::Consonant
    }
}

impl CharacterClass {
    pub fn of(c: char) -> Self {
        classify(c)
    }

    pub fn is_consonant(self) -> bool {
        self == CharacterClass::Consonant
    }
}
