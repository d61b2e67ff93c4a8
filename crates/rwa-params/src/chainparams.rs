//! Per-network parameter sets
//!
//! Each network is plain data built by one constructor. Construction runs in
//! a fixed order: consensus constants, genesis build and verification,
//! identity, seeds and checkpoints, then regtest overrides. A signet challenge
//! override is resolved first since the network magic is derived from it. Any
//! inconsistency fails the whole construction.

use crate::checkpoints::{ChainTxData, CheckpointList};
use crate::config::ChainArgs;
use crate::consensus::{Amount, ConsensusParams, COIN};
use crate::deployments::{Deployment, DeploymentPos, Deployments};
use crate::genesis::{build_genesis, serialize_bytes, GenesisBlock};
use crate::hash::{sha256d, BlockHash, Hash256};
use crate::network::{Base58Prefixes, Base58Type, NetworkIdentity, NetworkType};
use crate::overrides::{NetworkOverrides, RegtestOverrides, SignetOverrides};
use crate::pow::u256_from_hex;
use crate::{Error, Result};
use primitive_types::U256;

const GENESIS_TIMESTAMP: &str =
    "BBC: 15/Mar/2025, US had productive talks with Putin over Ukraine war, Trump says.";
const GENESIS_OUTPUT_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";
const GENESIS_TIME: u32 = 1_742_126_400;
const GENESIS_BITS: u32 = 0x1e0f_ffff;
const GENESIS_VERSION: i32 = 1;
const GENESIS_REWARD: Amount = 5000 * COIN;
const GENESIS_MERKLE_ROOT: &str =
    "5694e0b86d592596c4443fa62badaf08e760fe06056503851a8985655105e4a5";

/// Challenge used by the default signet when none is configured.
pub const DEFAULT_SIGNET_CHALLENGE: &str = "512103ad5e0edad18cb1f0fc0d28a3d4f1f3e445640337489abb10404f2d1e086be430210359ef5021964fe22d6f8e05b2463c9540ce96883fe3b278760f048f5189f2e6c452ae";

const TWO_WEEKS: i64 = 14 * 24 * 60 * 60;

/// Nonce and pinned hash of one network's genesis block
struct GenesisPin {
    nonce: u32,
    hash: &'static str,
}

const MAIN_GENESIS: GenesisPin = GenesisPin {
    nonce: 10_100_045,
    hash: "0000099bd865de77fb9b5feec657ac4ee3c5bc3f90f440cb3caafdb6880c9cf2",
};
const TEST_GENESIS: GenesisPin = GenesisPin {
    nonce: 21_640_014,
    hash: "0000034a32d8621a713d4c538ddd3c1b0eb397c4eb06c226737de32aaddca609",
};
const SIGNET_GENESIS: GenesisPin = GenesisPin {
    nonce: 30_429_951,
    hash: "00000d43e1b337527b3afcd97e3bb6e4797fbe3393f31ac6e2548d366824a179",
};
const REGTEST_GENESIS: GenesisPin = GenesisPin {
    nonce: 40_029_800,
    hash: "00000c8521ef8aeed65fc85eeacab258be0b4ab572a3be97744a352c32e3ae53",
};

const MAIN_SEEDS: &[&str] = &[
    "150.242.231.236",
    "150.242.231.186",
    "150.242.231.200",
    "18.190.176.88",
    "110.40.44.59",
    "116.198.39.1",
    "43.242.202.162",
    "113.83.147.147",
    "182.43.68.150",
    "182.43.64.195",
    "113.95.132.105",
    "43.242.202.162",
    "38.207.179.59",
    "110.40.44.59",
    "116.198.39.1",
    "3.16.25.74",
    "18.217.78.126",
    "10.8.1.177",
    "10.8.1.196",
];

const TEST_SEEDS: &[&str] = &[
    "testnet-seed.bitcoin.jonasschnelli.ch",
    "seed.tbtc.petertodd.org",
    "seed.testnet.bitcoin.sprovoost.nl",
    "testnet-seed.bluematt.me",
];

const SIGNET_SEEDS: &[&str] = &[
    "178.128.221.177",
    "2a01:7c8:d005:390::5",
    "v7ajjeirttkbnt32wpy3c6w3emwnfr3fkla7hpxcfokr3ysd3kqtzmqd.onion:38333",
];

const MAIN_CHECKPOINTS: &[(u32, &str)] = &[
    (0, "0000099bd865de77fb9b5feec657ac4ee3c5bc3f90f440cb3caafdb6880c9cf2"),
    (1, "000005bdd1cf92beb2160476b7b854a3d77a69b892490e7eb418180d77df42ea"),
    (2, "000001065bd6b282f4a15cb27bb513422c1cf26967d3b547daa39f425c15fef3"),
    (3, "00000eb3733f1c30a3cbc35d2624b41d19dda39ca6d53860cfe30aaabbe2623b"),
    (4, "000009898291c876d5ae06fcd56bcc535ca8218fdd73d1d6d8a41dfd8b946527"),
    (5, "000007ecd625f21f4d1b2ce3abc73212df3a17534ed32edd383ca216d1b1a730"),
    (10, "0000044c87e4882fc8d278bb3b0bf97748c58a51360755d12b2a6587f8ea67b9"),
    (11, "0000029f8f92bf5d00032795f8f6810c10e054be7be27d69db3fe3e22343f1bf"),
    (12, "000000ee2ad0cb33611b1504d91c03a45061a3db9fbd95d95e1d406629429e72"),
    (13, "000005d03421f77904d407a645fb627e5229b3c311770ba07c90dd00bf092eb6"),
    (14, "000004b2e5953a68515c106e9f6d8a4a203b464ca3adf209c7b8a61e6c86c660"),
    (15, "00000521703644169e94d7b5e6f50fccfb7ec66528846a0e60bdbc5307c66c0c"),
    (100, "00000cc3b1626fcf80bc7b3cf90c65c28b5624ab278c67b38cc8ac6a12afec66"),
    (101, "0000053d92839197390a315964dc1abbcf10b293e7c3887a1d52ca10f6eb92a1"),
    (102, "000006320bd4ce148819fa4f6d1769e8f8289b79a2f2f66b3cc6277ce728afb4"),
    (103, "00000554f5158778aa8f74b86cc9ab320cac5fc48cb4ee453cb572a809ed4d49"),
    (104, "000005d05c852093048b1f104cf6a2b8f902ba6c63a96c73d3406210a7f2ceac"),
    (105, "00000c58b4d79d3ddd4003769e1a20dde54bf7a69d8db16de189de3a870b35ed"),
    (1000, "000003d4dada46e2fa6a91701f6f79e30f2c347955d4b194435f00f9faff8941"),
    (2000, "000002e1d90856ac6622a34a3b261a4e5d07d1821063e11a68ab2563f78af29b"),
    (3000, "000000267f5c1cab4177730f3d2227bb425b47bd9876f65387ce0bd7657fa63e"),
    (4000, "0000015b418bebdd56bdaae7364ff4bc2cac3d5af967f3ceea534f77d43f4d3b"),
    (5000, "000000af4a69c6f8bb2dc00fa7ec0e1188bae032939ef540b1de07f7037b45c8"),
    (10000, "0000001b03e85e8723d693e8bf3701fc844a376100f70268dbd17dc325151be8"),
    (20000, "00000000183a0896222b5485492bc94b341b0fa75e6fa30b723d1268d3d097e1"),
    (30000, "000000001da04b01996d8764238ffbf11a34072339e09fefc8db90e819c1ac86"),
    (40000, "000000002547dd9bf1e3ebe2c7cd052520855257d46f9ff8a775b61ae48af648"),
    (50000, "00000000e24d1dbb6826d506d78b4438662f23253a0aa01543ae4a2d8176dd1d"),
    (60000, "0000000080cc72f921cc3fb953c998403dc70cc83662d941f86b42cf8641278b"),
    (70000, "0000000039b8e6baf66cf149b7052d083646652eb391c1025763ab9015c74a53"),
    (80000, "00000000a41447620fb99b5bf7c0c247293b7bede20a61e377331643dce68f51"),
    (90000, "0000000099f41389242c91a98eb42268bef880a04260f18a370f7b6a4143daf3"),
];

const TEST_CHECKPOINTS: &[(u32, &str)] = &[(0, TEST_GENESIS.hash)];

const REGTEST_CHECKPOINTS: &[(u32, &str)] = &[(0, REGTEST_GENESIS.hash)];

/// Network magic of a signet: the first four bytes of the double-SHA256 of
/// the serialized challenge script.
pub fn signet_message_start(challenge: &[u8]) -> [u8; 4] {
    let hash = sha256d(&serialize_bytes(challenge));
    let mut magic = [0u8; 4];
    magic.copy_from_slice(&hash.as_bytes()[..4]);
    magic
}

/// Build and verify a genesis block against its pinned hash.
fn verified_genesis(pin: &GenesisPin) -> Result<GenesisBlock> {
    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY)
        .map_err(|e| Error::InvalidHex(format!("genesis output pubkey: {}", e)))?;
    let genesis = build_genesis(
        GENESIS_TIMESTAMP,
        &pubkey,
        GENESIS_TIME,
        pin.nonce,
        GENESIS_BITS,
        GENESIS_VERSION,
        GENESIS_REWARD,
    );
    genesis.verify(
        &BlockHash::from_hex(pin.hash)?,
        &Hash256::from_hex(GENESIS_MERKLE_ROOT)?,
    )?;
    Ok(genesis)
}

fn seeds(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Everything a node needs to know about the network it runs on.
#[derive(Debug, Clone)]
pub struct ChainParams {
    network: NetworkType,
    consensus: ConsensusParams,
    identity: NetworkIdentity,
    genesis: GenesisBlock,
    prune_after_height: u64,
    assumed_blockchain_size: u64,
    assumed_chain_state_size: u64,
    dns_seeds: Vec<String>,
    default_consistency_checks: bool,
    require_standard: bool,
    is_test_chain: bool,
    is_mockable_chain: bool,
    checkpoints: CheckpointList,
    chain_tx_data: ChainTxData,
}

impl ChainParams {
    /// Build the parameter set for `network`, applying the overrides it accepts.
    pub fn new(network: NetworkType, args: &ChainArgs) -> Result<Self> {
        let overrides = NetworkOverrides::from_args(network, args)?;
        Self::with_overrides(network, &overrides)
    }

    pub(crate) fn with_overrides(network: NetworkType, overrides: &NetworkOverrides) -> Result<Self> {
        match (network, overrides) {
            (NetworkType::Mainnet, _) => Self::mainnet(),
            (NetworkType::Testnet, _) => Self::testnet(),
            (NetworkType::Signet, NetworkOverrides::Signet(signet)) => Self::signet(signet),
            (NetworkType::Signet, _) => Self::signet(&SignetOverrides::default()),
            (NetworkType::Regtest, NetworkOverrides::Regtest(regtest)) => Self::regtest(regtest),
            (NetworkType::Regtest, _) => Self::regtest(&RegtestOverrides::default()),
        }
    }

    /// Main network
    pub fn mainnet() -> Result<Self> {
        let consensus = ConsensusParams {
            hash_genesis_block: BlockHash::ZERO,
            subsidy_halving_interval: 1_576_800, // three years of one-minute blocks
            bip16_exception: BlockHash::ZERO,
            bip34_height: 0,
            bip34_hash: BlockHash::ZERO,
            bip65_height: 0,
            bip66_height: 0,
            csv_height: 0,
            segwit_height: 0,
            min_bip9_warning_height: 0,
            rule_change_activation_threshold: 1815, // 90% of 2016
            miner_confirmation_window: 2016,
            deployments: Deployments::new([
                Deployment::new(28, Deployment::NEVER_ACTIVE, Deployment::NO_TIMEOUT, 0),
                Deployment::new(1, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
                Deployment::new(2, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
            ])?,
            pow_limit: u256_from_hex(
                "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            pow_target_spacing: 60,
            pow_target_timespan: 24 * 60 * 60,
            minimum_chain_work: U256::zero(),
            default_assume_valid: BlockHash::ZERO,
            signet_blocks: false,
            signet_challenge: Vec::new(),
        };

        Self::assemble(ChainParamsParts {
            network: NetworkType::Mainnet,
            consensus,
            genesis_pin: &MAIN_GENESIS,
            message_start: [0x72, 0x77, 0x61, 0x00],
            default_port: 8333,
            bech32_hrp: "bc",
            base58_prefixes: Base58Prefixes::mainnet(),
            prune_after_height: 100_000,
            assumed_blockchain_size: 10,
            assumed_chain_state_size: 1,
            dns_seeds: seeds(MAIN_SEEDS),
            default_consistency_checks: false,
            require_standard: true,
            is_test_chain: false,
            is_mockable_chain: false,
            checkpoints: MAIN_CHECKPOINTS,
            chain_tx_data: ChainTxData::default(),
        })
    }

    /// Public test network
    pub fn testnet() -> Result<Self> {
        let consensus = ConsensusParams {
            hash_genesis_block: BlockHash::ZERO,
            subsidy_halving_interval: 500_000,
            bip16_exception: BlockHash::from_hex(
                "0x00000000dd30457c001f4095d208cc1296b0eed002427aa599874af7a432b105",
            )?,
            bip34_height: 21_111,
            bip34_hash: BlockHash::from_hex(
                "0x0000000023b3a96d3484e5abb3755c413e7d41500f8e2a5c3f0dd01299cd8ef8",
            )?,
            bip65_height: 581_885,
            bip66_height: 330_776,
            csv_height: 770_112,
            segwit_height: 834_624,
            min_bip9_warning_height: 836_640, // segwit height + confirmation window
            rule_change_activation_threshold: 1512, // 75% for testchains
            miner_confirmation_window: 2016,
            deployments: Deployments::new([
                Deployment::new(28, Deployment::NEVER_ACTIVE, Deployment::NO_TIMEOUT, 0),
                Deployment::new(1, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
                Deployment::new(2, 1_619_222_400, 1_628_640_000, 0),
            ])?,
            pow_limit: u256_from_hex(
                "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: false,
            pow_target_spacing: 10 * 60,
            pow_target_timespan: TWO_WEEKS,
            minimum_chain_work: u256_from_hex(
                "0x0000000000000000000000000000000000000000000001db6ec4ac88cf2272c6",
            )?,
            default_assume_valid: BlockHash::from_hex(
                "0x000000000000006433d1efec504c53ca332b64963c425395515b01977bd7b3b0",
            )?,
            signet_blocks: false,
            signet_challenge: Vec::new(),
        };

        Self::assemble(ChainParamsParts {
            network: NetworkType::Testnet,
            consensus,
            genesis_pin: &TEST_GENESIS,
            message_start: [0x0b, 0x11, 0x09, 0x07],
            default_port: 18333,
            bech32_hrp: "tb",
            base58_prefixes: Base58Prefixes::testnet(),
            prune_after_height: 1000,
            assumed_blockchain_size: 40,
            assumed_chain_state_size: 2,
            dns_seeds: seeds(TEST_SEEDS),
            default_consistency_checks: false,
            require_standard: false,
            is_test_chain: true,
            is_mockable_chain: false,
            checkpoints: TEST_CHECKPOINTS,
            chain_tx_data: ChainTxData::default(),
        })
    }

    /// Signet; the challenge and seeds may be replaced.
    pub fn signet(overrides: &SignetOverrides) -> Result<Self> {
        let (challenge, minimum_chain_work, default_assume_valid, blockchain_size, mut dns_seeds) =
            match &overrides.challenge {
                None => (
                    hex::decode(DEFAULT_SIGNET_CHALLENGE)
                        .map_err(|e| Error::InvalidHex(format!("signet challenge: {}", e)))?,
                    u256_from_hex(
                        "0x00000000000000000000000000000000000000000000000000000019fd16269a",
                    )?,
                    BlockHash::from_hex(
                        "0x0000002a1de0f46379358c1fd09906f7ac59adf3712323ed90eb59e4c183c020",
                    )?,
                    1,
                    seeds(SIGNET_SEEDS),
                ),
                Some(custom) => {
                    tracing::info!(challenge = %hex::encode(custom), "Signet with custom challenge");
                    (custom.clone(), U256::zero(), BlockHash::ZERO, 0, Vec::new())
                }
            };
        if let Some(nodes) = &overrides.seed_nodes {
            tracing::info!(count = nodes.len(), "Using configured signet seed nodes");
            dns_seeds = nodes.clone();
        }

        let message_start = signet_message_start(&challenge);

        let consensus = ConsensusParams {
            hash_genesis_block: BlockHash::ZERO,
            subsidy_halving_interval: 500_000,
            bip16_exception: BlockHash::ZERO,
            bip34_height: 1,
            bip34_hash: BlockHash::ZERO,
            bip65_height: 1,
            bip66_height: 1,
            csv_height: 1,
            segwit_height: 1,
            min_bip9_warning_height: 0,
            rule_change_activation_threshold: 1815, // 90% of 2016
            miner_confirmation_window: 2016,
            deployments: Deployments::new([
                Deployment::new(28, Deployment::NEVER_ACTIVE, Deployment::NO_TIMEOUT, 0),
                Deployment::new(1, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
                Deployment::new(2, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
            ])?,
            pow_limit: u256_from_hex(
                "00000377ae000000000000000000000000000000000000000000000000000000",
            )?,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            pow_target_spacing: 10 * 60,
            pow_target_timespan: TWO_WEEKS,
            minimum_chain_work,
            default_assume_valid,
            signet_blocks: true,
            signet_challenge: challenge,
        };

        Self::assemble(ChainParamsParts {
            network: NetworkType::Signet,
            consensus,
            genesis_pin: &SIGNET_GENESIS,
            message_start,
            default_port: 38333,
            bech32_hrp: "tb",
            base58_prefixes: Base58Prefixes::testnet(),
            prune_after_height: 1000,
            assumed_blockchain_size: blockchain_size,
            assumed_chain_state_size: 0,
            dns_seeds,
            default_consistency_checks: false,
            require_standard: true,
            is_test_chain: true,
            is_mockable_chain: false,
            checkpoints: &[],
            chain_tx_data: ChainTxData::default(),
        })
    }

    /// Regression test network; buried heights and deployments may be replaced.
    pub fn regtest(overrides: &RegtestOverrides) -> Result<Self> {
        let consensus = ConsensusParams {
            hash_genesis_block: BlockHash::ZERO,
            subsidy_halving_interval: 150,
            bip16_exception: BlockHash::ZERO,
            bip34_height: 500,
            bip34_hash: BlockHash::ZERO,
            bip65_height: 1351,
            bip66_height: 1251,
            csv_height: 432,
            segwit_height: 0, // always active unless overridden
            min_bip9_warning_height: 0,
            rule_change_activation_threshold: 108, // 75% for testchains
            miner_confirmation_window: 144,
            deployments: Deployments::new([
                Deployment::new(28, 0, Deployment::NO_TIMEOUT, 0),
                Deployment::new(1, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
                Deployment::new(2, Deployment::ALWAYS_ACTIVE, Deployment::NO_TIMEOUT, 0),
            ])?,
            pow_limit: u256_from_hex(
                "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            pow_target_spacing: 10 * 60,
            pow_target_timespan: TWO_WEEKS,
            minimum_chain_work: U256::zero(),
            default_assume_valid: BlockHash::ZERO,
            signet_blocks: false,
            signet_challenge: Vec::new(),
        };

        let mut params = Self::assemble(ChainParamsParts {
            network: NetworkType::Regtest,
            consensus,
            genesis_pin: &REGTEST_GENESIS,
            message_start: [0xfa, 0xbf, 0xb5, 0xda],
            default_port: 18444,
            bech32_hrp: "bcrt",
            base58_prefixes: Base58Prefixes::testnet(),
            prune_after_height: 1000,
            assumed_blockchain_size: 0,
            assumed_chain_state_size: 0,
            dns_seeds: Vec::new(),
            default_consistency_checks: true,
            require_standard: true,
            is_test_chain: true,
            is_mockable_chain: true,
            checkpoints: REGTEST_CHECKPOINTS,
            chain_tx_data: ChainTxData::default(),
        })?;
        overrides.apply(&mut params.consensus);
        Ok(params)
    }

    fn assemble(parts: ChainParamsParts<'_>) -> Result<Self> {
        let ChainParamsParts {
            network,
            mut consensus,
            genesis_pin,
            message_start,
            default_port,
            bech32_hrp,
            base58_prefixes,
            prune_after_height,
            assumed_blockchain_size,
            assumed_chain_state_size,
            dns_seeds,
            default_consistency_checks,
            require_standard,
            is_test_chain,
            is_mockable_chain,
            checkpoints,
            chain_tx_data,
        } = parts;

        consensus.validate()?;

        let genesis = verified_genesis(genesis_pin)?;
        consensus.hash_genesis_block = genesis.hash();
        tracing::debug!(%network, genesis = %consensus.hash_genesis_block, "genesis verified");

        let identity = NetworkIdentity::new(message_start, default_port, bech32_hrp, base58_prefixes)?;

        let checkpoints = CheckpointList::from_literals(checkpoints)?;
        if let Some(pinned) = checkpoints.hash_at(0) {
            if *pinned != consensus.hash_genesis_block {
                return Err(Error::GenesisMismatch {
                    field: "checkpoint 0",
                    expected: pinned.to_hex(),
                    computed: consensus.hash_genesis_block.to_hex(),
                });
            }
        }

        Ok(Self {
            network,
            consensus,
            identity,
            genesis,
            prune_after_height,
            assumed_blockchain_size,
            assumed_chain_state_size,
            dns_seeds,
            default_consistency_checks,
            require_standard,
            is_test_chain,
            is_mockable_chain,
            checkpoints,
            chain_tx_data,
        })
    }

    /// Which network these parameters describe
    pub fn network(&self) -> NetworkType {
        self.network
    }

    /// Network name (`main`, `test`, `signet`, `regtest`)
    pub fn network_id(&self) -> &'static str {
        self.network.name()
    }

    /// Consensus rules
    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    /// Deployment at `pos`
    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        self.consensus.deployment(pos)
    }

    /// Identity framing (magic, port, prefixes)
    pub fn identity(&self) -> &NetworkIdentity {
        &self.identity
    }

    /// Message start bytes
    pub fn message_start(&self) -> [u8; 4] {
        self.identity.message_start
    }

    /// Default P2P port
    pub fn default_port(&self) -> u16 {
        self.identity.default_port
    }

    /// Bech32 human-readable part
    pub fn bech32_hrp(&self) -> &str {
        &self.identity.bech32_hrp
    }

    /// Base58 prefix for `kind`
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.identity.base58_prefixes.get(kind)
    }

    /// Verified genesis block
    pub fn genesis_block(&self) -> &GenesisBlock {
        &self.genesis
    }

    /// Genesis block hash
    pub fn genesis_hash(&self) -> BlockHash {
        self.consensus.hash_genesis_block
    }

    /// Height below which block files are never pruned
    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    /// Expected block data size in GB, for disk space warnings
    pub fn assumed_blockchain_size(&self) -> u64 {
        self.assumed_blockchain_size
    }

    /// Expected chain state size in GB
    pub fn assumed_chain_state_size(&self) -> u64 {
        self.assumed_chain_state_size
    }

    /// DNS seeds (or literal seed nodes)
    pub fn dns_seeds(&self) -> &[String] {
        &self.dns_seeds
    }

    /// Run expensive consistency checks by default
    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }

    /// Relay only standard transactions by default
    pub fn require_standard(&self) -> bool {
        self.require_standard
    }

    /// Test chain (testnet, signet, regtest)
    pub fn is_test_chain(&self) -> bool {
        self.is_test_chain
    }

    /// Time may be mocked (regtest only)
    pub fn is_mockable_chain(&self) -> bool {
        self.is_mockable_chain
    }

    /// Advisory checkpoints
    pub fn checkpoints(&self) -> &CheckpointList {
        &self.checkpoints
    }

    /// Progress estimation anchor
    pub fn chain_tx_data(&self) -> &ChainTxData {
        &self.chain_tx_data
    }
}

/// Literal inputs of one network, before verification.
struct ChainParamsParts<'a> {
    network: NetworkType,
    consensus: ConsensusParams,
    genesis_pin: &'a GenesisPin,
    message_start: [u8; 4],
    default_port: u16,
    bech32_hrp: &'a str,
    base58_prefixes: Base58Prefixes,
    prune_after_height: u64,
    assumed_blockchain_size: u64,
    assumed_chain_state_size: u64,
    dns_seeds: Vec<String>,
    default_consistency_checks: bool,
    require_standard: bool,
    is_test_chain: bool,
    is_mockable_chain: bool,
    checkpoints: &'a [(u32, &'a str)],
    chain_tx_data: ChainTxData,
}
