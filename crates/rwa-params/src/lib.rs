//! Rwa chain parameters and deployment activation
//!
//! This crate defines the four Rwa networks (main, test, signet, regtest):
//! consensus constants, genesis blocks, network identity, version-bits
//! deployments and checkpoints, plus the process-wide selection of the
//! active network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chainparams;
pub mod checkpoints;
pub mod config;
pub mod consensus;
pub mod deployments;
pub mod genesis;
pub mod hash;
pub mod network;
pub mod overrides;
pub mod pow;
pub mod selector;

pub use chainparams::ChainParams;
pub use checkpoints::{ChainTxData, Checkpoint, CheckpointList};
pub use config::ChainArgs;
pub use consensus::{Amount, BuriedDeployment, ConsensusParams, COIN};
pub use deployments::{Deployment, DeploymentPos, Deployments};
pub use genesis::GenesisBlock;
pub use hash::{BlockHash, Hash256};
pub use network::{Base58Prefixes, Base58Type, NetworkIdentity, NetworkType};
pub use selector::{create_chain_params, params, select_params, select_params_from_args};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network name not recognized
    #[error("Unknown chain {0}")]
    UnknownNetwork(String),

    /// More than one network flag set
    #[error("Invalid combination of -regtest, -signet, -testnet and -chain. Can use at most one.")]
    ConflictingNetworks,

    /// A different network was already selected for this process
    #[error("Chain parameters already selected for {selected}, cannot select {requested}")]
    AlreadySelected {
        /// Network currently active
        selected: NetworkType,
        /// Network asked for
        requested: NetworkType,
    },

    /// Parameters read before any network was selected
    #[error("Chain parameters have not been selected")]
    NotSelected,

    /// Override directive has the wrong shape
    #[error("Malformed override: {0}")]
    MalformedOverride(String),

    /// Override field failed to parse
    #[error("Invalid {field} ({value})")]
    InvalidOverrideValue {
        /// Field name
        field: &'static str,
        /// Raw value
        value: String,
    },

    /// `-vbparams` names no known deployment
    #[error("Invalid deployment ({0})")]
    UnknownDeployment(String),

    /// `-segwitheight` outside the accepted range
    #[error("Activation height {0} for segwit is out of valid range. Use -1 to disable segwit.")]
    HeightOutOfRange(i64),

    /// Hex literal could not be decoded
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Bech32 human-readable part rejected
    #[error("Invalid bech32 hrp: {0}")]
    InvalidHrp(String),

    /// Deployment table is inconsistent
    #[error("Invalid deployment table: {0}")]
    InvalidDeployment(String),

    /// Consensus constants are inconsistent
    #[error("Invalid consensus parameters: {0}")]
    InvalidConsensus(String),

    /// Checkpoint heights not strictly increasing
    #[error("Checkpoint at height {next} does not follow height {previous}")]
    CheckpointOrder {
        /// Earlier height in the table
        previous: u32,
        /// Following height
        next: u32,
    },

    /// Checkpoint not found
    #[error("No checkpoint found for height {0}")]
    CheckpointNotFound(u32),

    /// Built genesis block disagrees with its pinned value
    #[error("Genesis {field} mismatch: expected {expected}, computed {computed}")]
    GenesisMismatch {
        /// `hash`, `merkle root` or `checkpoint 0`
        field: &'static str,
        /// Pinned value
        expected: String,
        /// Value computed from the block
        computed: String,
    },

    /// JSON configuration error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the built-in tables themselves are broken, as opposed to the
    /// caller's configuration.
    pub fn is_fatal_integrity(&self) -> bool {
        matches!(
            self,
            Error::GenesisMismatch { .. }
                | Error::CheckpointOrder { .. }
                | Error::InvalidDeployment(_)
                | Error::InvalidConsensus(_)
                | Error::InvalidHrp(_)
        )
    }
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
