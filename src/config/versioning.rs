use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::types::ConfigFingerprint;

pub const CONFIG_VERSION: &str = "1";

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub version: String,

    pub consonant_score: f64,
    pub vowel_score: f64,
    pub other_score: f64,

    /// Slope of the `1 / (1 + decay_rate * distance)` falloff around the OVP.
    pub decay_rate: f64,
    pub first_position_penalty: f64,
    pub last_position_penalty: f64,
    pub interior_consonant_boost: f64,

    /// OVP as a fraction of word length, for lengths 4-5, 6-8 and 9+.
    /// Words of up to 3 characters always anchor on `len / 2`.
    pub short_ovp_ratio: f64,
    pub medium_ovp_ratio: f64,
    pub long_ovp_ratio: f64,
}

impl ScoringConfig {
    pub fn v0() -> Self {
        Self {
            version: CONFIG_VERSION.into(),
            consonant_score: 1.0,
            vowel_score: 0.3,
            other_score: 0.1,
            decay_rate: 0.5,
            first_position_penalty: 0.7,
            last_position_penalty: 0.6,
            interior_consonant_boost: 1.2,
            short_ovp_ratio: 0.35,
            medium_ovp_ratio: 0.37,
            long_ovp_ratio: 0.40,
        }
    }

    /// Hash of the canonical JSON form. Two configs that score identically
    /// share a fingerprint.
    pub fn fingerprint(&self) -> Result<ConfigFingerprint, ConfigError> {
        let canonical = serde_json::to_vec(self)?;
        Ok(ConfigFingerprint::from_bytes(&canonical))
    }

    /// True when every base class score is zero, so every word normalizes to
    /// all-zero weights.
    pub fn is_degenerate(&self) -> bool {
        self.consonant_score == 0.0 && self.vowel_score == 0.0 && self.other_score == 0.0
    }

    pub(crate) fn parameters(&self) -> [(&'static str, f64); 7] {
        [
            ("consonant_score", self.consonant_score),
            ("vowel_score", self.vowel_score),
            ("other_score", self.other_score),
            ("decay_rate", self.decay_rate),
            ("first_position_penalty", self.first_position_penalty),
            ("last_position_penalty", self.last_position_penalty),
            ("interior_consonant_boost", self.interior_consonant_boost),
        ]
    }

    pub(crate) fn ratios(&self) -> [(&'static str, f64); 3] {
        [
            ("short_ovp_ratio", self.short_ovp_ratio),
            ("medium_ovp_ratio", self.medium_ovp_ratio),
            ("long_ovp_ratio", self.long_ovp_ratio),
        ]
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::v0()
    }
}
