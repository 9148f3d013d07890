use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of a canonical scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigFingerprint(String);

impl ConfigFingerprint {
    pub fn from_bytes(canonical: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(canonical);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ConfigFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
