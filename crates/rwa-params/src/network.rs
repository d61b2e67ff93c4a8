//! Rwa network definitions and identity framing

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Mainnet
    #[serde(rename = "main")]
    Mainnet,
    /// Public testnet
    #[serde(rename = "test")]
    Testnet,
    /// Signet (blocks gated by a challenge script)
    Signet,
    /// Regtest (local development)
    Regtest,
}

impl NetworkType {
    /// Every network, in selection order
    pub const ALL: [NetworkType; 4] = [
        NetworkType::Mainnet,
        NetworkType::Testnet,
        NetworkType::Signet,
        NetworkType::Regtest,
    ];

    /// Canonical name accepted by `-chain=`
    pub const fn name(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "main",
            NetworkType::Testnet => "test",
            NetworkType::Signet => "signet",
            NetworkType::Regtest => "regtest",
        }
    }

    /// Default RPC port
    pub const fn rpc_port(self) -> u16 {
        match self {
            NetworkType::Mainnet => 8332,
            NetworkType::Testnet => 18332,
            NetworkType::Signet => 38332,
            NetworkType::Regtest => 18443,
        }
    }

    /// Sub-directory of the data directory; empty for mainnet
    pub const fn data_dir(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "",
            NetworkType::Testnet => "testnet3",
            NetworkType::Signet => "signet",
            NetworkType::Regtest => "regtest",
        }
    }

    /// Whether parameter overrides may be applied on this network
    pub const fn accepts_overrides(self) -> bool {
        matches!(self, NetworkType::Signet | NetworkType::Regtest)
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|network| network.name() == s)
            .ok_or_else(|| Error::UnknownNetwork(s.to_string()))
    }
}

/// Kinds of base58 payloads that carry a version prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Type {
    /// P2PKH address
    PubkeyAddress,
    /// P2SH address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

/// Base58 version prefixes for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    /// P2PKH address prefix
    pub pubkey_address: Vec<u8>,
    /// P2SH address prefix
    pub script_address: Vec<u8>,
    /// WIF prefix
    pub secret_key: Vec<u8>,
    /// xpub prefix
    pub ext_public_key: Vec<u8>,
    /// xprv prefix
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    /// Mainnet prefixes
    pub fn mainnet() -> Self {
        Self {
            pubkey_address: vec![0],
            script_address: vec![5],
            secret_key: vec![128],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
        }
    }

    /// Prefixes shared by testnet, signet and regtest
    pub fn testnet() -> Self {
        Self {
            pubkey_address: vec![111],
            script_address: vec![196],
            secret_key: vec![239],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        }
    }

    /// Prefix for `kind`
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

/// How peers and addresses recognise the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkIdentity {
    /// Message start bytes prefixed to every P2P message
    pub message_start: [u8; 4],
    /// Default P2P port
    pub default_port: u16,
    /// Bech32 human-readable part
    pub bech32_hrp: String,
    /// Base58 version prefixes
    pub base58_prefixes: Base58Prefixes,
}

impl NetworkIdentity {
    /// Build an identity, validating the bech32 HRP.
    pub fn new(
        message_start: [u8; 4],
        default_port: u16,
        bech32_hrp: &str,
        base58_prefixes: Base58Prefixes,
    ) -> Result<Self> {
        bech32::Hrp::parse(bech32_hrp)
            .map_err(|e| Error::InvalidHrp(format!("{}: {}", bech32_hrp, e)))?;
        if bech32_hrp.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(Error::InvalidHrp(format!("{}: must be lowercase", bech32_hrp)));
        }
        Ok(Self {
            message_start,
            default_port,
            bech32_hrp: bech32_hrp.to_string(),
            base58_prefixes,
        })
    }

    /// Message start as a hex string, for logs
    pub fn message_start_hex(&self) -> String {
        hex::encode(self.message_start)
    }
}
