//! Consensus parameters for Rwa networks

use crate::deployments::{Deployment, DeploymentPos, Deployments};
use crate::hash::BlockHash;
use crate::{Error, Result};
use primitive_types::U256;

/// Amount in base units
pub type Amount = i64;

/// Base units per coin
pub const COIN: Amount = 100_000_000;

/// Soft forks activated by a fixed height instead of version bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuriedDeployment {
    /// BIP34: height in coinbase
    HeightInCb,
    /// BIP65: OP_CHECKLOCKTIMEVERIFY
    Cltv,
    /// BIP66: strict DER signatures
    DerSig,
    /// BIPs 68, 112, 113: relative lock-time
    Csv,
    /// BIPs 141, 143, 147: segregated witness
    Segwit,
}

/// Consensus parameters
#[derive(Debug, Clone)]
pub struct ConsensusParams {
    /// Genesis block hash, filled in once the genesis block is verified
    pub hash_genesis_block: BlockHash,
    /// Blocks between subsidy halvings
    pub subsidy_halving_interval: u32,
    /// Block exempt from BIP16 enforcement
    pub bip16_exception: BlockHash,
    /// BIP34 activation height
    pub bip34_height: u32,
    /// Block hash at the BIP34 activation height
    pub bip34_hash: BlockHash,
    /// BIP65 activation height
    pub bip65_height: u32,
    /// BIP66 activation height
    pub bip66_height: u32,
    /// CSV activation height
    pub csv_height: u32,
    /// Segwit activation height; `i32::MAX` disables
    pub segwit_height: u32,
    /// Don't warn about unknown BIP9 activations below this height
    pub min_bip9_warning_height: u32,
    /// Blocks out of a window needed to lock in a rule change
    pub rule_change_activation_threshold: u32,
    /// Blocks per signaling window (usually timespan / spacing)
    pub miner_confirmation_window: u32,
    /// Version-bits deployments
    pub deployments: Deployments,
    /// Proof-of-work ceiling (easiest allowed target)
    pub pow_limit: U256,
    /// Permit minimum-difficulty blocks after long gaps
    pub pow_allow_min_difficulty_blocks: bool,
    /// Never retarget
    pub pow_no_retargeting: bool,
    /// Target seconds between blocks
    pub pow_target_spacing: i64,
    /// Seconds per difficulty period
    pub pow_target_timespan: i64,
    /// Least total work a valid best chain must have
    pub minimum_chain_work: U256,
    /// Blocks at or below this hash skip script checks by default
    pub default_assume_valid: BlockHash,
    /// Blocks must satisfy the signet challenge
    pub signet_blocks: bool,
    /// Signet challenge script; empty elsewhere
    pub signet_challenge: Vec<u8>,
}

impl ConsensusParams {
    /// Check the invariants every network must satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.pow_target_spacing <= 0 {
            return Err(Error::InvalidConsensus(format!(
                "target spacing must be positive, got {}",
                self.pow_target_spacing
            )));
        }
        if self.pow_target_timespan <= 0 {
            return Err(Error::InvalidConsensus(format!(
                "target timespan must be positive, got {}",
                self.pow_target_timespan
            )));
        }
        if self.rule_change_activation_threshold == 0 {
            return Err(Error::InvalidConsensus(
                "rule change activation threshold must be positive".to_string(),
            ));
        }
        if self.miner_confirmation_window < self.rule_change_activation_threshold {
            return Err(Error::InvalidConsensus(format!(
                "confirmation window {} is smaller than activation threshold {}",
                self.miner_confirmation_window, self.rule_change_activation_threshold
            )));
        }
        if self.signet_blocks == self.signet_challenge.is_empty() {
            return Err(Error::InvalidConsensus(
                "signet challenge must be set exactly when signet blocks are enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Blocks between difficulty adjustments
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Activation height of a buried deployment
    pub fn deployment_height(&self, dep: BuriedDeployment) -> u32 {
        match dep {
            BuriedDeployment::HeightInCb => self.bip34_height,
            BuriedDeployment::Cltv => self.bip65_height,
            BuriedDeployment::DerSig => self.bip66_height,
            BuriedDeployment::Csv => self.csv_height,
            BuriedDeployment::Segwit => self.segwit_height,
        }
    }

    /// Version-bits deployment at `pos`
    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        self.deployments.get(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ConsensusParams {
        ConsensusParams {
            hash_genesis_block: BlockHash::ZERO,
            subsidy_halving_interval: 150,
            bip16_exception: BlockHash::ZERO,
            bip34_height: 500,
            bip34_hash: BlockHash::ZERO,
            bip65_height: 1351,
            bip66_height: 1251,
            csv_height: 432,
            segwit_height: 0,
            min_bip9_warning_height: 0,
            rule_change_activation_threshold: 108,
            miner_confirmation_window: 144,
            deployments: Deployments::new([
                Deployment::new(28, 0, Deployment::NO_TIMEOUT, 0),
                Deployment::new(1, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
                Deployment::new(2, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
            ])
            .unwrap(),
            pow_limit: U256::MAX >> 1usize,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            pow_target_spacing: 10 * 60,
            pow_target_timespan: 14 * 24 * 60 * 60,
            minimum_chain_work: U256::zero(),
            default_assume_valid: BlockHash::ZERO,
            signet_blocks: false,
            signet_challenge: Vec::new(),
        }
    }

    #[test]
    fn test_valid_params() {
        let p = params();
        p.validate().unwrap();
        assert_eq!(p.difficulty_adjustment_interval(), 2016);
        assert_eq!(p.deployment_height(BuriedDeployment::Csv), 432);
        assert_eq!(p.deployment_height(BuriedDeployment::Cltv), 1351);
        assert_eq!(p.deployment(DeploymentPos::TestDummy).bit, 28);
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let mut p = params();
        p.pow_target_spacing = 0;
        assert!(matches!(p.validate(), Err(Error::InvalidConsensus(_))));
    }

    #[test]
    fn test_window_below_threshold_rejected() {
        let mut p = params();
        p.miner_confirmation_window = 100;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_signet_flag_requires_challenge() {
        let mut p = params();
        p.signet_blocks = true;
        assert!(p.validate().is_err());
        p.signet_challenge = vec![0x51];
        p.validate().unwrap();
    }
}
