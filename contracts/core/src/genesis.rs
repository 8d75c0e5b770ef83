use {
    cosmwasm_std::{Deps, DepsMut, Order, StdResult},
    denom_registry::GenesisState,
};

use crate::{
    error::{Error, Result},
    state::{DENOMS, PARAMS},
    utils::validate_address,
};

/// Import a genesis state. Returns the number of denoms imported.
///
/// Denoms are written in the order given; should the same key appear twice,
/// the last one wins. `GenesisState::validate` rejects such states up front.
pub fn init_genesis(deps: DepsMut, genesis: GenesisState) -> Result<usize> {
    genesis
        .validate()
        .map_err(|err| Error::invalid_request(format!("invalid genesis state: {err}")))?;

    for denom in &genesis.denoms {
        validate_address(deps.api, "owner", &denom.owner)?;
        DENOMS.save(deps.storage, &denom.denom, denom)?;
    }

    PARAMS.save(deps.storage, &genesis.params)?;

    Ok(genesis.denoms.len())
}

/// Dump params and all denoms, in ascending order of their keys.
pub fn export_genesis(deps: Deps) -> StdResult<GenesisState> {
    let params = PARAMS.load(deps.storage)?;

    let denoms = DENOMS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, denom)| denom))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(GenesisState {
        params,
        denoms,
    })
}

// ----------------------------------- Tests -----------------------------------
