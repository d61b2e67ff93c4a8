//! Parameter overrides for test-oriented networks
//!
//! Every directive is parsed before any of them is applied, so a bad
//! directive aborts network selection without leaving a half-modified
//! parameter set behind.

use crate::config::ChainArgs;
use crate::consensus::ConsensusParams;
use crate::deployments::DeploymentPos;
use crate::network::NetworkType;
use crate::{Error, Result};

/// Height that can never be reached; used to disable a buried deployment.
pub const MAX_HEIGHT: u32 = i32::MAX as u32;

/// One parsed `-vbparams` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionBitsOverride {
    /// Target deployment
    pub deployment: DeploymentPos,
    /// New start time (may be a sentinel)
    pub start_time: i64,
    /// New timeout (may be `NO_TIMEOUT`)
    pub timeout: i64,
    /// New minimum activation height
    pub min_activation_height: u32,
}

/// Validate a `-segwitheight` value.
///
/// `-1` disables segwit by moving its height out of reach; anything else
/// must be a height below [`MAX_HEIGHT`].
pub fn parse_segwit_height(height: i64) -> Result<u32> {
    if height < -1 || height >= i64::from(MAX_HEIGHT) {
        return Err(Error::HeightOutOfRange(height));
    }
    if height == -1 {
        return Ok(MAX_HEIGHT);
    }
    Ok(height as u32)
}

/// Parse `deployment:start:end[:min_activation_height]`.
pub fn parse_vbparams(directive: &str) -> Result<VersionBitsOverride> {
    let fields: Vec<&str> = directive.split(':').collect();
    if fields.len() < 3 || fields.len() > 4 {
        return Err(Error::MalformedOverride(format!(
            "version bits parameters malformed ({}), expecting deployment:start:end[:min_activation_height]",
            directive
        )));
    }

    let start_time = parse_field::<i64>("start time", fields[1])?;
    let timeout = parse_field::<i64>("timeout", fields[2])?;
    let min_activation_height = match fields.get(3) {
        Some(raw) => {
            let height = parse_field::<i32>("min_activation_height", raw)?;
            u32::try_from(height).map_err(|_| invalid_value("min_activation_height", raw))?
        }
        None => 0,
    };

    let deployment = DeploymentPos::from_name(fields[0])
        .ok_or_else(|| Error::UnknownDeployment(fields[0].to_string()))?;

    Ok(VersionBitsOverride {
        deployment,
        start_time,
        timeout,
        min_activation_height,
    })
}

/// Parse `-signetchallenge`; `None` when the directive is absent.
pub fn parse_signet_challenge(values: &[String]) -> Result<Option<Vec<u8>>> {
    match values {
        [] => Ok(None),
        [challenge] => {
            let bytes = hex::decode(challenge).map_err(|_| invalid_value("signetchallenge", challenge))?;
            if bytes.is_empty() {
                return Err(invalid_value("signetchallenge", challenge));
            }
            Ok(Some(bytes))
        }
        _ => Err(Error::MalformedOverride(
            "-signetchallenge cannot be multiple values".to_string(),
        )),
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.parse::<T>().map_err(|_| invalid_value(field, raw))
}

fn invalid_value(field: &'static str, raw: &str) -> Error {
    Error::InvalidOverrideValue {
        field,
        value: raw.to_string(),
    }
}

/// Overrides accepted by regtest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegtestOverrides {
    /// Replacement segwit height
    pub segwit_height: Option<u32>,
    /// Deployment windows, applied in order
    pub vbparams: Vec<VersionBitsOverride>,
}

impl RegtestOverrides {
    /// Parse every regtest directive in `args`.
    pub fn from_args(args: &ChainArgs) -> Result<Self> {
        let segwit_height = args.segwit_height.map(parse_segwit_height).transpose()?;
        let vbparams = args
            .vbparams
            .iter()
            .map(|directive| parse_vbparams(directive))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            segwit_height,
            vbparams,
        })
    }

    /// Whether nothing would change
    pub fn is_empty(&self) -> bool {
        self.segwit_height.is_none() && self.vbparams.is_empty()
    }

    pub(crate) fn apply(&self, consensus: &mut ConsensusParams) {
        if let Some(height) = self.segwit_height {
            if height == MAX_HEIGHT {
                tracing::info!("Segwit disabled for testing");
            } else {
                tracing::info!(height, "Setting segwit activation height");
            }
            consensus.segwit_height = height;
        }
        for vb in &self.vbparams {
            consensus
                .deployments
                .update(vb.deployment, vb.start_time, vb.timeout, vb.min_activation_height);
            tracing::info!(
                deployment = vb.deployment.name(),
                start = vb.start_time,
                timeout = vb.timeout,
                min_activation_height = vb.min_activation_height,
                "Setting version bits activation parameters"
            );
        }
    }
}

/// Overrides accepted by signet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignetOverrides {
    /// Replacement challenge script
    pub challenge: Option<Vec<u8>>,
    /// Replacement seed nodes
    pub seed_nodes: Option<Vec<String>>,
}

impl SignetOverrides {
    /// Parse every signet directive in `args`.
    pub fn from_args(args: &ChainArgs) -> Result<Self> {
        let challenge = parse_signet_challenge(&args.signet_challenge)?;
        let seed_nodes = if args.signet_seed_nodes.is_empty() {
            None
        } else {
            Some(args.signet_seed_nodes.clone())
        };
        Ok(Self {
            challenge,
            seed_nodes,
        })
    }
}

/// Parsed overrides for the network being built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NetworkOverrides {
    /// Network takes no overrides, or none were given
    #[default]
    None,
    /// Signet challenge and seeds
    Signet(SignetOverrides),
    /// Regtest heights and deployment windows
    Regtest(RegtestOverrides),
}

impl NetworkOverrides {
    /// Parse the directives `network` accepts; the rest are ignored with a warning.
    pub fn from_args(network: NetworkType, args: &ChainArgs) -> Result<Self> {
        warn_ignored_overrides(network, args);
        if !network.accepts_overrides() {
            return Ok(Self::None);
        }
        match network {
            NetworkType::Signet => Ok(Self::Signet(SignetOverrides::from_args(args)?)),
            NetworkType::Regtest => Ok(Self::Regtest(RegtestOverrides::from_args(args)?)),
            NetworkType::Mainnet | NetworkType::Testnet => Ok(Self::None),
        }
    }

    /// Whether nothing would change
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Signet(signet) => *signet == SignetOverrides::default(),
            Self::Regtest(regtest) => regtest.is_empty(),
        }
    }
}

fn warn_ignored_overrides(network: NetworkType, args: &ChainArgs) {
    let regtest_only = args.segwit_height.is_some() || !args.vbparams.is_empty();
    let signet_only = !args.signet_challenge.is_empty() || !args.signet_seed_nodes.is_empty();
    if !network.accepts_overrides() {
        if regtest_only || signet_only {
            tracing::warn!(%network, "ignoring override directives, only signet and regtest accept them");
        }
        return;
    }
    if regtest_only && network != NetworkType::Regtest {
        tracing::warn!(%network, "ignoring -segwitheight/-vbparams, only regtest accepts them");
    }
    if signet_only && network != NetworkType::Signet {
        tracing::warn!(%network, "ignoring -signetchallenge/-signetseednode, only signet accepts them");
    }
}
