//! Property-based tests for rwa-params
//!
//! Uses proptest to verify override parsing and derived identity across
//! randomized inputs

use rwa_params::chainparams::signet_message_start;
use rwa_params::overrides::{parse_segwit_height, parse_vbparams, MAX_HEIGHT};
use rwa_params::{ChainArgs, ChainParams, DeploymentPos, Error};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn deployment_strategy() -> impl Strategy<Value = DeploymentPos> {
    prop::sample::select(DeploymentPos::ALL.to_vec())
}

fn challenge_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..100)
}

// ============================================================================
// Override Parsing Properties
// ============================================================================

proptest! {
    /// Property: well-formed directives parse to exactly the given fields
    #[test]
    fn prop_vbparams_fields_preserved(
        pos in deployment_strategy(),
        start in any::<i64>(),
        timeout in any::<i64>(),
        min_height in 0..=i32::MAX,
    ) {
        let directive = format!("{}:{}:{}:{}", pos.name(), start, timeout, min_height);
        let vb = parse_vbparams(&directive).unwrap();
        prop_assert_eq!(vb.deployment, pos);
        prop_assert_eq!(vb.start_time, start);
        prop_assert_eq!(vb.timeout, timeout);
        prop_assert_eq!(vb.min_activation_height, min_height as u32);
    }

    /// Property: anything other than 3 or 4 fields is malformed
    #[test]
    fn prop_vbparams_field_count(
        fields in prop::collection::vec("[0-9]{1,6}", 1..8),
    ) {
        prop_assume!(fields.len() != 3 && fields.len() != 4);
        let directive = fields.join(":");
        prop_assert!(matches!(parse_vbparams(&directive), Err(Error::MalformedOverride(_))));
    }

    /// Property: negative minimum activation heights are rejected
    #[test]
    fn prop_vbparams_negative_min_height(min_height in i32::MIN..0) {
        let directive = format!("testdummy:0:1:{}", min_height);
        let is_invalid_value = matches!(
            parse_vbparams(&directive),
            Err(Error::InvalidOverrideValue { .. })
        );
        prop_assert!(is_invalid_value);
    }

    /// Property: every height in [-1, i32::MAX) is accepted, -1 disables
    #[test]
    fn prop_segwit_height_in_range(height in -1i64..i64::from(i32::MAX)) {
        let parsed = parse_segwit_height(height).unwrap();
        if height == -1 {
            prop_assert_eq!(parsed, MAX_HEIGHT);
        } else {
            prop_assert_eq!(i64::from(parsed), height);
        }
    }

    /// Property: heights outside the range are rejected
    #[test]
    fn prop_segwit_height_out_of_range(
        height in prop_oneof![i64::MIN..-1, i64::from(i32::MAX)..i64::MAX],
    ) {
        let is_out_of_range = matches!(parse_segwit_height(height), Err(Error::HeightOutOfRange(h)) if h == height);
        prop_assert!(is_out_of_range);
    }
}

// ============================================================================
// Identity Properties
// ============================================================================

proptest! {
    /// Property: signet magic is a pure function of the challenge
    #[test]
    fn prop_signet_magic_deterministic(challenge in challenge_strategy()) {
        prop_assert_eq!(signet_message_start(&challenge), signet_message_start(&challenge));
    }

    /// Property: distinct challenges give distinct magics
    #[test]
    fn prop_signet_magic_distinct(a in challenge_strategy(), b in challenge_strategy()) {
        prop_assume!(a != b);
        prop_assert_ne!(signet_message_start(&a), signet_message_start(&b));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: a custom signet challenge flows into consensus and identity
    #[test]
    fn prop_custom_signet_challenge(challenge in challenge_strategy()) {
        let args = ChainArgs::default().with_signet_challenge(&hex::encode(&challenge));
        let signet = ChainParams::new(rwa_params::NetworkType::Signet, &args).unwrap();
        prop_assert_eq!(&signet.consensus().signet_challenge, &challenge);
        prop_assert_eq!(signet.message_start(), signet_message_start(&challenge));
        prop_assert!(signet.consensus().minimum_chain_work.is_zero());
    }

    /// Property: the last checkpoint at or below a height is the closest one
    #[test]
    fn prop_checkpoint_lookup(height in 0u32..200_000) {
        let main = ChainParams::mainnet().unwrap();
        let checkpoints = main.checkpoints();
        let found = checkpoints.checkpoint_at_height(height).unwrap();
        prop_assert!(found.height <= height);
        let closer = checkpoints
            .checkpoints()
            .iter()
            .any(|cp| cp.height > found.height && cp.height <= height);
        prop_assert!(!closer);
    }
}
