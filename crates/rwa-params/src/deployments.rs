//! Version-bits soft-fork deployments
//!
//! Only the static configuration lives here. The BIP9 state machine
//! (DEFINED, STARTED, LOCKED_IN/FAILED, ACTIVE) is evaluated by the
//! validation engine against real block heights and times.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What block version must be set to when version bits are in use
pub const VERSIONBITS_TOP_BITS: u32 = 0x2000_0000;
/// Mask applied to the version to detect version-bits blocks
pub const VERSIONBITS_TOP_MASK: u32 = 0xE000_0000;
/// Total bits available for deployments
pub const VERSIONBITS_NUM_BITS: u8 = 29;

/// Number of entries in every deployment table
pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 3;

/// Position of a deployment in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentPos {
    /// Dummy deployment used by tests
    TestDummy,
    /// Segregated witness (BIPs 141, 143, 147)
    Segwit,
    /// Taproot (BIPs 340-342)
    Taproot,
}

impl DeploymentPos {
    /// Every position, in table order
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] =
        [DeploymentPos::TestDummy, DeploymentPos::Segwit, DeploymentPos::Taproot];

    /// Name used by `-vbparams` and RPC
    pub const fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Segwit => "segwit",
            DeploymentPos::Taproot => "taproot",
        }
    }

    /// Look up a position by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|pos| pos.name() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DeploymentPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Activation window of one deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Bit position to select the particular bit in nVersion
    pub bit: u8,
    /// Start median time past; or one of the sentinels
    pub start_time: i64,
    /// Timeout median time past; `NO_TIMEOUT` for no deadline
    pub timeout: i64,
    /// Earliest height at which the deployment may become active
    pub min_activation_height: u32,
}

impl Deployment {
    /// Start time that makes the deployment active from genesis, without signaling
    pub const ALWAYS_ACTIVE: i64 = -1;
    /// Start time that disables the deployment permanently
    pub const NEVER_ACTIVE: i64 = -2;
    /// Timeout that removes the failure deadline
    pub const NO_TIMEOUT: i64 = i64::MAX;

    /// New deployment record
    pub const fn new(bit: u8, start_time: i64, timeout: i64, min_activation_height: u32) -> Self {
        Self {
            bit,
            start_time,
            timeout,
            min_activation_height,
        }
    }

    /// Version bit mask for signaling
    pub const fn mask(&self) -> u32 {
        1u32 << self.bit
    }

    /// Active from genesis
    pub const fn is_always_active(&self) -> bool {
        self.start_time == Self::ALWAYS_ACTIVE
    }

    /// Permanently disabled
    pub const fn is_never_active(&self) -> bool {
        self.start_time == Self::NEVER_ACTIVE
    }

    /// Has a failure deadline
    pub const fn has_timeout(&self) -> bool {
        self.timeout != Self::NO_TIMEOUT
    }
}

/// Fixed table of deployments for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "[Deployment; MAX_VERSION_BITS_DEPLOYMENTS]",
    into = "[Deployment; MAX_VERSION_BITS_DEPLOYMENTS]"
)]
pub struct Deployments {
    table: [Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
}

impl Deployments {
    /// Build a table, rejecting out-of-range or duplicate bits.
    pub fn new(table: [Deployment; MAX_VERSION_BITS_DEPLOYMENTS]) -> Result<Self> {
        for (i, pos) in DeploymentPos::ALL.iter().enumerate() {
            let deployment = &table[i];
            if deployment.bit >= VERSIONBITS_NUM_BITS {
                return Err(Error::InvalidDeployment(format!(
                    "{} uses bit {} (max {})",
                    pos,
                    deployment.bit,
                    VERSIONBITS_NUM_BITS - 1
                )));
            }
            if let Some(other) = DeploymentPos::ALL[..i]
                .iter()
                .find(|other| table[other.index()].bit == deployment.bit)
            {
                return Err(Error::InvalidDeployment(format!(
                    "{} and {} share bit {}",
                    other, pos, deployment.bit
                )));
            }
        }
        Ok(Self { table })
    }

    /// Deployment at `pos`
    pub fn get(&self, pos: DeploymentPos) -> &Deployment {
        &self.table[pos.index()]
    }

    /// Deployment by name
    pub fn by_name(&self, name: &str) -> Option<(DeploymentPos, &Deployment)> {
        DeploymentPos::from_name(name).map(|pos| (pos, self.get(pos)))
    }

    /// Iterate in table order
    pub fn iter(&self) -> impl Iterator<Item = (DeploymentPos, &Deployment)> {
        DeploymentPos::ALL.iter().map(move |pos| (*pos, self.get(*pos)))
    }

    /// Replace the activation window; the bit is fixed.
    pub(crate) fn update(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
        min_activation_height: u32,
    ) {
        let deployment = &mut self.table[pos.index()];
        deployment.start_time = start_time;
        deployment.timeout = timeout;
        deployment.min_activation_height = min_activation_height;
    }
}

impl TryFrom<[Deployment; MAX_VERSION_BITS_DEPLOYMENTS]> for Deployments {
    type Error = Error;

    fn try_from(table: [Deployment; MAX_VERSION_BITS_DEPLOYMENTS]) -> Result<Self> {
        Self::new(table)
    }
}

impl From<Deployments> for [Deployment; MAX_VERSION_BITS_DEPLOYMENTS] {
    fn from(deployments: Deployments) -> Self {
        deployments.table
    }
}
