pub mod budgeting;
pub mod ranking;

use tracing::trace;

use crate::config::ScoringConfig;
use crate::types::{CharacterScore, FocalLetter, WordAnnotation};
use crate::word::classify;
pub use budgeting::{apply_budget, focal_budget};
pub use ranking::{PositionalScorer, Scorer};

/// Stateless focal letter selector.
///
/// Holds only an immutable scorer, so one instance can be shared across
/// threads or a fresh one built per call.
#[derive(Debug, Clone)]
pub struct FocalSelector<S = PositionalScorer> {
	scorer: S,
}

impl Default for FocalSelector<PositionalScorer> {
	fn default() -> Self {
		Self {
			scorer: PositionalScorer::default(),
		}
	}
}

impl FocalSelector<PositionalScorer> {
	pub fn with_config(config: ScoringConfig) -> Self {
		Self::new(PositionalScorer::new(config))
	}
}

impl<S> FocalSelector<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self { scorer }
	}

	pub fn scorer(&self) -> &S {
		&self.scorer
	}

	/// Raw and normalized score for every character of `word`.
	///
	/// Unlike [`select`](Self::select), single-character words are scored
	/// like any other.
	pub fn score_word(&self, word: &str) -> Vec<CharacterScore> {
		let chars: Vec<char> = word.chars().collect();
		self.score_chars(&chars)
	}

	pub fn select(&self, word: &str) -> Vec<FocalLetter> {
		let chars: Vec<char> = word.chars().collect();

		match chars.as_slice() {
			[] => return Vec::new(),
			// A lone character is its own anchor; scoring is bypassed.
			[only] => {
				return vec![FocalLetter {
					index: 0,
					character: *only,
					weight: 1.0,
				}]
			}
			_ => {}
		}

		// 1. Scoring + normalization
		let scores = self.score_chars(&chars);

		// 2. Budgeting + ordering
		let budget = focal_budget(chars.len());
		let selected = apply_budget(&scores, budget);

		debug_assert_eq!(selected.len(), budget);
		debug_assert!(selected.windows(2).all(|w| w[0].index < w[1].index));

		trace!(
			word_length = chars.len(),
			budget,
			indices = ?selected.iter().map(|f| f.index).collect::<Vec<_>>(),
			"selected focal letters"
		);

		selected
	}

	/// The leftmost focal letter, or `None` for the empty word.
	pub fn primary(&self, word: &str) -> Option<FocalLetter> {
		self.select(word).into_iter().next()
	}

	pub fn annotate(&self, word: &str) -> WordAnnotation {
		WordAnnotation {
			word: word.to_string(),
			focal_letters: self.select(word),
		}
	}

	/// Annotate a token stream, preserving its order.
	pub fn annotate_all<I>(&self, words: I) -> Vec<WordAnnotation>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		words
			.into_iter()
			.map(|word| self.annotate(word.as_ref()))
			.collect()
	}

	fn score_chars(&self, chars: &[char]) -> Vec<CharacterScore> {
		let word_length = chars.len();

		// Non-finite or negative scores from a custom scorer count as zero.
		let raw: Vec<f64> = chars
			.iter()
			.enumerate()
			.map(|(i, &c)| {
				let s = self.scorer.score(c, i, word_length);
				if s.is_finite() && s > 0.0 {
					s
				} else {
					0.0
				}
			})
			.collect();

		let max = raw.iter().copied().fold(0.0_f64, f64::max);

		chars
			.iter()
			.zip(raw)
			.enumerate()
			.map(|(index, (&character, raw))| CharacterScore {
				index,
				character,
				class: classify(character),
				raw,
				normalized: if max > 0.0 { raw / max } else { raw },
			})
			.collect()
	}
}

/// Focal letters of `word` under the `v0` scoring configuration.
pub fn select_focal_letters(word: &str) -> Vec<FocalLetter> {
	FocalSelector::default().select(word)
}

pub fn primary_focal_letter(word: &str) -> Option<FocalLetter> {
	FocalSelector::default().primary(word)
}
