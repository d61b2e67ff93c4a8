//! Blockchain checkpoints and transaction-count anchors
//!
//! Checkpoints only speed up initial validation. They are never a consensus
//! rule, and nothing here decides validity.

use crate::hash::BlockHash;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blockchain checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Block height
    pub height: u32,
    /// Block hash
    pub hash: BlockHash,
}

/// Checkpoints ordered by strictly increasing height
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Checkpoint>", into = "Vec<Checkpoint>")]
pub struct CheckpointList {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointList {
    /// Build a list from a literal table.
    ///
    /// The table must already be in strictly increasing height order; a
    /// duplicate or out-of-order height means the table itself is wrong.
    pub fn new(checkpoints: Vec<Checkpoint>) -> Result<Self> {
        if let Some(pair) = checkpoints.windows(2).find(|w| w[0].height >= w[1].height) {
            return Err(Error::CheckpointOrder {
                previous: pair[0].height,
                next: pair[1].height,
            });
        }
        Ok(Self { checkpoints })
    }

    /// Build a list from `(height, display-hex hash)` literals.
    pub fn from_literals(entries: &[(u32, &str)]) -> Result<Self> {
        let checkpoints = entries
            .iter()
            .map(|(height, hash)| {
                Ok(Checkpoint {
                    height: *height,
                    hash: BlockHash::from_hex(hash)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(checkpoints)
    }

    /// Get checkpoint at or before given height
    pub fn checkpoint_at_height(&self, height: u32) -> Result<&Checkpoint> {
        self.checkpoints
            .iter()
            .rev()
            .find(|cp| cp.height <= height)
            .ok_or(Error::CheckpointNotFound(height))
    }

    /// Hash pinned at exactly `height`, if any
    pub fn hash_at(&self, height: u32) -> Option<&BlockHash> {
        self.checkpoints
            .binary_search_by_key(&height, |cp| cp.height)
            .ok()
            .map(|i| &self.checkpoints[i].hash)
    }

    /// Get all checkpoints
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Get latest checkpoint
    pub fn latest(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    /// Get checkpoint count
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

impl TryFrom<Vec<Checkpoint>> for CheckpointList {
    type Error = Error;

    fn try_from(checkpoints: Vec<Checkpoint>) -> Result<Self> {
        Self::new(checkpoints)
    }
}

impl From<CheckpointList> for Vec<Checkpoint> {
    fn from(list: CheckpointList) -> Self {
        list.checkpoints
    }
}

/// Snapshot of chain transaction statistics for progress estimation.
///
/// All-zero means unknown. Not consensus relevant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainTxData {
    /// Unix time of the last known transaction count
    pub time: i64,
    /// Total transactions between genesis and that time
    pub tx_count: u64,
    /// Estimated transactions per second after that time
    pub tx_rate: f64,
}

impl ChainTxData {
    /// Whether the anchor carries real data
    pub fn is_known(&self) -> bool {
        self.time != 0 || self.tx_count != 0
    }

    /// Anchor time, if known
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if self.time == 0 {
            return None;
        }
        DateTime::from_timestamp(self.time, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "0000099bd865de77fb9b5feec657ac4ee3c5bc3f90f440cb3caafdb6880c9cf2";
    const B: &str = "000005bdd1cf92beb2160476b7b854a3d77a69b892490e7eb418180d77df42ea";
    const C: &str = "0000044c87e4882fc8d278bb3b0bf97748c58a51360755d12b2a6587f8ea67b9";

    #[test]
    fn test_checkpoint_at_height() {
        let checkpoints = CheckpointList::from_literals(&[(0, A), (1, B), (10, C)]).unwrap();

        let cp = checkpoints.checkpoint_at_height(5).unwrap();
        assert_eq!(cp.height, 1);

        let cp = checkpoints.checkpoint_at_height(1_000).unwrap();
        assert_eq!(cp.height, 10);
        assert_eq!(checkpoints.latest().unwrap().hash.to_hex(), C);
    }

    #[test]
    fn test_checkpoint_not_found() {
        let checkpoints = CheckpointList::from_literals(&[(100, A)]).unwrap();
        let result = checkpoints.checkpoint_at_height(99);
        assert!(matches!(result, Err(Error::CheckpointNotFound(99))));
    }

    #[test]
    fn test_order_enforced() {
        let err = CheckpointList::from_literals(&[(0, A), (10, B), (5, C)]).unwrap_err();
        assert!(matches!(err, Error::CheckpointOrder { previous: 10, next: 5 }));

        let err = CheckpointList::from_literals(&[(1, A), (1, B)]).unwrap_err();
        assert!(matches!(err, Error::CheckpointOrder { .. }));
    }

    #[test]
    fn test_hash_at() {
        let checkpoints = CheckpointList::from_literals(&[(0, A), (10, C)]).unwrap();
        assert_eq!(checkpoints.hash_at(10).unwrap().to_hex(), C);
        assert!(checkpoints.hash_at(5).is_none());
        assert_eq!(checkpoints.len(), 2);
        assert!(CheckpointList::default().is_empty());
    }

    #[test]
    fn test_deserialize_enforces_order() {
        let json = format!(r#"[{{"height":10,"hash":"{}"}},{{"height":5,"hash":"{}"}}]"#, A, B);
        let err = serde_json::from_str::<CheckpointList>(&json).unwrap_err();
        assert!(err.to_string().contains("does not follow"));

        let list = CheckpointList::from_literals(&[(0, A), (10, C)]).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(serde_json::from_str::<CheckpointList>(&json).unwrap(), list);
    }

    #[test]
    fn test_chain_tx_data() {
        let unknown = ChainTxData::default();
        assert!(!unknown.is_known());
        assert!(unknown.timestamp().is_none());

        let known = ChainTxData {
            time: 1_603_995_752,
            tx_count: 582_083_445,
            tx_rate: 3.5,
        };
        assert!(known.is_known());
        assert_eq!(known.timestamp().unwrap().timestamp(), 1_603_995_752);
    }
}
