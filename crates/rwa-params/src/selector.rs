//! Process-wide active network
//!
//! Selection happens once. After that every reader gets the same immutable
//! `ChainParams` for the life of the process.

use crate::chainparams::ChainParams;
use crate::config::ChainArgs;
use crate::network::NetworkType;
use crate::overrides::NetworkOverrides;
use crate::{Error, Result};
use once_cell::sync::OnceCell;

static GLOBAL_PARAMS: OnceCell<ChainParams> = OnceCell::new();

/// Build a fresh parameter set for `chain` without touching the global one.
pub fn create_chain_params(chain: &str, args: &ChainArgs) -> Result<ChainParams> {
    let network: NetworkType = chain.parse()?;
    ChainParams::new(network, args)
}

/// Select the active network for this process.
///
/// `args` are parsed on every call, so a bad override fails even when a
/// network is already active. Selecting the active network again returns the
/// existing instance and ignores its overrides with a warning. Selecting a
/// different one fails.
pub fn select_params(chain: &str, args: &ChainArgs) -> Result<&'static ChainParams> {
    let network: NetworkType = chain.parse()?;
    let overrides = NetworkOverrides::from_args(network, args)?;
    let mut built = false;
    let selected = GLOBAL_PARAMS.get_or_try_init(|| {
        let params = ChainParams::with_overrides(network, &overrides)?;
        tracing::info!(
            %network,
            genesis = %params.genesis_hash(),
            magic = %params.identity().message_start_hex(),
            port = params.default_port(),
            "Selected chain parameters"
        );
        built = true;
        Ok::<_, Error>(params)
    })?;
    if selected.network() != network {
        return Err(Error::AlreadySelected {
            selected: selected.network(),
            requested: network,
        });
    }
    if !built && !overrides.is_empty() {
        tracing::warn!(%network, "chain parameters already selected, ignoring overrides");
    }
    Ok(selected)
}

/// Select the network named by `args` (`-chain`, `-testnet`, `-signet`, `-regtest`).
pub fn select_params_from_args(args: &ChainArgs) -> Result<&'static ChainParams> {
    select_params(&args.chain_name()?, args)
}

/// The active network's parameters
pub fn params() -> Result<&'static ChainParams> {
    GLOBAL_PARAMS.get().ok_or(Error::NotSelected)
}
