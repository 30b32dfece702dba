//! Engine snapshot for deterministic parity testing

use crate::{Entry, Operator};
use serde::{Deserialize, Serialize};

/// Complete engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub entry: Entry,
    pub pending_operand: Option<Entry>,
    pub pending_operator: Option<Operator>,
    pub reset_flag: bool,
}

impl EngineSnapshot {
    /// State of a freshly constructed (or cleared) engine
    pub fn initial() -> Self {
        Self {
            entry: Entry::zero(),
            pending_operand: None,
            pending_operator: None,
            reset_flag: false,
        }
    }

    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        fn hash_entry(hasher: &mut Sha256, entry: &Entry) {
            hasher.update([entry.is_error() as u8]);
            hasher.update(entry.display_text().as_bytes());
            hasher.update(b"\0");
        }

        let mut hasher = Sha256::new();

        hash_entry(&mut hasher, &self.entry);

        match &self.pending_operand {
            Some(operand) => {
                hasher.update([1u8]);
                hash_entry(&mut hasher, operand);
            }
            None => hasher.update([0u8]),
        }

        match self.pending_operator {
            Some(op) => hasher.update(op.symbol().as_bytes()),
            None => hasher.update(b"_"),
        }

        hasher.update([self.reset_flag as u8]);

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}

impl Default for EngineSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
