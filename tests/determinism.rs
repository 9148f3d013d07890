use std::thread;

use focal_core::config::ScoringConfig;
use focal_core::selection::FocalSelector;

const PASSAGE: &str = "The quick brown fox jumps over the lazy dog while reading \
    extraordinary information about comprehension, rhythm and beautiful examples.";

#[test]
fn selection_is_idempotent() {
    let selector = FocalSelector::default();

    for word in PASSAGE.split_whitespace() {
        assert_eq!(selector.select(word), selector.select(word), "{word:?}");
    }
}

#[test]
fn fresh_and_shared_selectors_agree() {
    let shared = FocalSelector::default();

    for word in PASSAGE.split_whitespace() {
        let fresh = FocalSelector::with_config(ScoringConfig::v0());
        assert_eq!(shared.select(word), fresh.select(word));
    }
}

#[test]
fn concurrent_selection_matches_sequential() {
    let selector = FocalSelector::default();
    let words: Vec<&str> = PASSAGE.split_whitespace().collect();
    let expected = selector.annotate_all(&words);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| selector.annotate_all(&words)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn annotation_json_is_byte_identical_across_runs() {
    let words: Vec<&str> = PASSAGE.split_whitespace().collect();

    let first = serde_json::to_vec(&FocalSelector::default().annotate_all(&words)).unwrap();
    let second = serde_json::to_vec(&FocalSelector::default().annotate_all(&words)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn config_fingerprint_is_stable() {
    let a = ScoringConfig::v0().fingerprint().unwrap();
    let b = ScoringConfig::default().fingerprint().unwrap();
    assert_eq!(a, b);
    assert!(a.as_str().starts_with("sha256:"));
    assert_eq!(a.as_str().len(), "sha256:".len() + 64);

    let tweaked = ScoringConfig {
        decay_rate: 0.6,
        ..ScoringConfig::v0()
    };
    assert_ne!(a, tweaked.fingerprint().unwrap());
}
