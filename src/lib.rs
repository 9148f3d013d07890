//! Deterministic focal letter selection for RSVP reading.
//!
//! `focal-core` scores every character of a word for its recognition value
//! (consonant/vowel salience, distance from the optimal viewing position,
//! edge penalties) and selects the letters to highlight, with normalized
//! weights. All operations are deterministic: identical inputs always produce
//! identical outputs.

pub mod config;
pub mod selection;
pub mod types;
pub mod word;

pub use selection::{primary_focal_letter, select_focal_letters, FocalSelector};
pub use types::{FocalLetter, WordAnnotation};
