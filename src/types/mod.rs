pub mod focal;
pub mod identifiers;

pub use focal::{CharacterScore, FocalLetter, WordAnnotation};
pub use identifiers::ConfigFingerprint;
