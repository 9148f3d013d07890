pub mod classify;

pub use classify::{classify, CharacterClass};
