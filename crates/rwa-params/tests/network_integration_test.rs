//! Integration tests for per-network parameter construction
//!
//! Builds every network through the public API and checks the pinned
//! genesis, identity and checkpoint data consumers rely on

use rwa_params::overrides::MAX_HEIGHT;
use rwa_params::pow::check_proof_of_work;
use rwa_params::{
    create_chain_params, Base58Type, BuriedDeployment, ChainArgs, ChainParams, DeploymentPos,
    Error, NetworkType,
};

const MERKLE_ROOT: &str = "5694e0b86d592596c4443fa62badaf08e760fe06056503851a8985655105e4a5";

fn build(network: NetworkType) -> ChainParams {
    ChainParams::new(network, &ChainArgs::default()).unwrap()
}

#[test]
fn test_genesis_per_network() {
    let expected = [
        (NetworkType::Mainnet, 10_100_045, "0000099bd865de77fb9b5feec657ac4ee3c5bc3f90f440cb3caafdb6880c9cf2"),
        (NetworkType::Testnet, 21_640_014, "0000034a32d8621a713d4c538ddd3c1b0eb397c4eb06c226737de32aaddca609"),
        (NetworkType::Signet, 30_429_951, "00000d43e1b337527b3afcd97e3bb6e4797fbe3393f31ac6e2548d366824a179"),
        (NetworkType::Regtest, 40_029_800, "00000c8521ef8aeed65fc85eeacab258be0b4ab572a3be97744a352c32e3ae53"),
    ];

    for (network, nonce, hash) in expected {
        let params = build(network);
        let genesis = params.genesis_block();
        assert_eq!(genesis.header.nonce, nonce);
        assert_eq!(genesis.header.time, 1_742_126_400);
        assert_eq!(genesis.header.bits, 0x1e0f_ffff);
        assert_eq!(genesis.header.version, 1);
        assert_eq!(genesis.hash().to_hex(), hash);
        assert_eq!(genesis.merkle_root().to_hex(), MERKLE_ROOT);
        assert_eq!(params.genesis_hash().to_hex(), hash);
        assert!(genesis.coinbase.is_coinbase());
        assert_eq!(genesis.coinbase.outputs[0].value, 5000 * rwa_params::COIN);
    }
}

#[test]
fn test_identity_per_network() {
    let main = build(NetworkType::Mainnet);
    assert_eq!(main.identity().message_start_hex(), "72776100");
    assert_eq!(main.base58_prefix(Base58Type::PubkeyAddress), &[0]);
    assert_eq!(main.base58_prefix(Base58Type::ExtSecretKey), &[0x04, 0x88, 0xAD, 0xE4]);

    let test = build(NetworkType::Testnet);
    assert_eq!(test.identity().message_start_hex(), "0b110907");
    assert_eq!(test.default_port(), 18333);
    assert_eq!(test.bech32_hrp(), "tb");
    assert_eq!(test.base58_prefix(Base58Type::SecretKey), &[239]);
    assert!(!test.require_standard());

    let signet = build(NetworkType::Signet);
    assert_eq!(signet.identity().message_start_hex(), "0a03cf40");
    assert_eq!(signet.default_port(), 38333);

    let regtest = build(NetworkType::Regtest);
    assert_eq!(regtest.identity().message_start_hex(), "fabfb5da");
    assert_eq!(regtest.default_port(), 18444);
    assert_eq!(regtest.bech32_hrp(), "bcrt");
}

#[test]
fn test_base_parameters() {
    let ports: Vec<u16> = NetworkType::ALL.iter().map(|n| n.rpc_port()).collect();
    assert_eq!(ports, vec![8332, 18332, 38332, 18443]);
    assert_eq!(NetworkType::Testnet.data_dir(), "testnet3");
    assert_eq!(NetworkType::Mainnet.data_dir(), "");
}

#[test]
fn test_checkpoints_strictly_increasing() {
    for network in NetworkType::ALL {
        let params = build(network);
        let heights: Vec<u32> = params
            .checkpoints()
            .checkpoints()
            .iter()
            .map(|cp| cp.height)
            .collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]), "{}", network);
    }
    assert_eq!(build(NetworkType::Mainnet).checkpoints().len(), 32);
    assert!(build(NetworkType::Signet).checkpoints().is_empty());
}

#[test]
fn test_difficulty_intervals() {
    assert_eq!(build(NetworkType::Mainnet).consensus().difficulty_adjustment_interval(), 1440);
    assert_eq!(build(NetworkType::Testnet).consensus().difficulty_adjustment_interval(), 2016);
    assert_eq!(build(NetworkType::Regtest).consensus().miner_confirmation_window, 144);
}

#[test]
fn test_testnet_deployments() {
    let test = build(NetworkType::Testnet);
    let taproot = test.deployment(DeploymentPos::Taproot);
    assert_eq!(taproot.bit, 2);
    assert_eq!(taproot.start_time, 1_619_222_400);
    assert_eq!(taproot.timeout, 1_628_640_000);
    assert_eq!(test.consensus().deployment_height(BuriedDeployment::Segwit), 834_624);
    assert_eq!(test.consensus().min_bip9_warning_height, 836_640);
}

#[test]
fn test_regtest_overrides_from_args() {
    let args = ChainArgs::from_args([
        "-regtest",
        "-segwitheight=-1",
        "-vbparams=segwit:0:999999999:0",
    ])
    .unwrap();
    let regtest = create_chain_params(&args.chain_name().unwrap(), &args).unwrap();
    assert_eq!(regtest.consensus().segwit_height, MAX_HEIGHT);
    let segwit = regtest.deployment(DeploymentPos::Segwit);
    assert_eq!((segwit.start_time, segwit.timeout), (0, 999_999_999));
}

#[test]
fn test_malformed_vbparams_aborts() {
    let args = ChainArgs::default().with_vbparams("segwit:0");
    let err = create_chain_params("regtest", &args).unwrap_err();
    assert!(matches!(err, Error::MalformedOverride(_)));
    assert!(!err.is_fatal_integrity());
}

#[test]
fn test_regtest_accepts_trivial_difficulty() {
    let regtest = build(NetworkType::Regtest);
    let pow_limit = regtest.consensus().pow_limit;
    let pubkey = hex::decode("04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f").unwrap();
    let text = "BBC: 15/Mar/2025, US had productive talks with Putin over Ukraine war, Trump says.";

    let nonce = (0..16u32).find(|nonce| {
        let block = rwa_params::genesis::build_genesis(
            text,
            &pubkey,
            1_742_126_400,
            *nonce,
            0x207f_ffff,
            1,
            5000 * rwa_params::COIN,
        );
        check_proof_of_work(&block.hash(), 0x207f_ffff, &pow_limit)
    });
    assert_eq!(nonce, Some(2));
}

#[test]
fn test_chain_args_json() {
    let args = ChainArgs::from_json(r#"{"regtest":true,"vbparams":["testdummy:0:1:144"]}"#).unwrap();
    let regtest = create_chain_params(&args.chain_name().unwrap(), &args).unwrap();
    assert_eq!(regtest.deployment(DeploymentPos::TestDummy).min_activation_height, 144);
}
