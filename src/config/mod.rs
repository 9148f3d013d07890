pub mod loading;
pub mod versioning;

pub use loading::ConfigError;
pub use versioning::ScoringConfig;
