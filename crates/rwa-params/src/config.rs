//! Chain selection arguments
//!
//! `ChainArgs` holds configuration already resolved by the caller: the chain
//! to run and the raw override directives. It can be deserialized from JSON
//! or collected from `-name[=value]` tokens; it never touches the disk.

use crate::network::NetworkType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Resolved configuration that drives network selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainArgs {
    /// `-chain=<name>`
    pub chain: Option<String>,
    /// `-testnet`
    pub testnet: bool,
    /// `-signet`
    pub signet: bool,
    /// `-regtest`
    pub regtest: bool,
    /// `-segwitheight=<n>` (regtest)
    pub segwit_height: Option<i64>,
    /// `-vbparams=deployment:start:end[:min_activation_height]` (regtest)
    pub vbparams: Vec<String>,
    /// `-signetchallenge=<hex>` (signet)
    pub signet_challenge: Vec<String>,
    /// `-signetseednode=<host>` (signet)
    pub signet_seed_nodes: Vec<String>,
}

impl ChainArgs {
    /// Load from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Collect from command-line style tokens.
    ///
    /// Accepts `-name`, `-name=value` and `--name=value`. Tokens that are not
    /// chain options are ignored.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let body = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
                Some(body) => body,
                None => continue,
            };
            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            match name {
                "chain" => parsed.chain = value.map(str::to_string),
                "testnet" => parsed.testnet = interpret_bool(value),
                "signet" => parsed.signet = interpret_bool(value),
                "regtest" => parsed.regtest = interpret_bool(value),
                "segwitheight" => {
                    let raw = value.unwrap_or("");
                    let height = raw.parse::<i64>().map_err(|_| Error::InvalidOverrideValue {
                        field: "segwitheight",
                        value: raw.to_string(),
                    })?;
                    parsed.segwit_height = Some(height);
                }
                "vbparams" => parsed.vbparams.push(value.unwrap_or("").to_string()),
                "signetchallenge" => parsed.signet_challenge.push(value.unwrap_or("").to_string()),
                "signetseednode" => parsed.signet_seed_nodes.push(value.unwrap_or("").to_string()),
                _ => tracing::trace!(arg, "ignoring non-chain argument"),
            }
        }
        Ok(parsed)
    }

    /// Name of the selected chain; `main` when nothing is set.
    ///
    /// At most one of `-testnet`, `-signet`, `-regtest` and `-chain` may be given.
    pub fn chain_name(&self) -> Result<String> {
        let selected = [self.testnet, self.signet, self.regtest, self.chain.is_some()]
            .iter()
            .filter(|set| **set)
            .count();
        if selected > 1 {
            return Err(Error::ConflictingNetworks);
        }
        let name = if self.regtest {
            NetworkType::Regtest.name().to_string()
        } else if self.signet {
            NetworkType::Signet.name().to_string()
        } else if self.testnet {
            NetworkType::Testnet.name().to_string()
        } else {
            self.chain
                .clone()
                .unwrap_or_else(|| NetworkType::Mainnet.name().to_string())
        };
        Ok(name)
    }

    /// Add a `-vbparams` directive
    pub fn with_vbparams(mut self, directive: &str) -> Self {
        self.vbparams.push(directive.to_string());
        self
    }

    /// Set `-segwitheight`
    pub fn with_segwit_height(mut self, height: i64) -> Self {
        self.segwit_height = Some(height);
        self
    }

    /// Add a `-signetchallenge` value
    pub fn with_signet_challenge(mut self, challenge_hex: &str) -> Self {
        self.signet_challenge.push(challenge_hex.to_string());
        self
    }

    /// Add a `-signetseednode` value
    pub fn with_signet_seed_node(mut self, node: &str) -> Self {
        self.signet_seed_nodes.push(node.to_string());
        self
    }
}

/// Bare flag or empty value is true; otherwise a non-zero integer is true.
fn interpret_bool(value: Option<&str>) -> bool {
    match value {
        None | Some("") => true,
        Some(v) => v.parse::<i64>().map(|n| n != 0).unwrap_or(false),
    }
}
