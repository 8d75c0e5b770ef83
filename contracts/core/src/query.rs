use {
    cosmwasm_std::{Deps, Env, Order, StdResult},
    cw_storage_plus::Bound,
    denom_registry::{Denom, PageRequest, PageResponse, Params},
};

use crate::{
    error::{Error, Result},
    ledger::{bank_denom, is_valid_subdenom},
    msg::{BankDenomResponse, ListDenomResponse},
    state::{load_denom, DENOMS, PARAMS},
    utils::assert_denom_key,
};

pub fn params(deps: Deps) -> Result<Params> {
    PARAMS.load(deps.storage).map_err(Into::into)
}

pub fn denom(deps: Deps, denom: String) -> Result<Denom> {
    assert_denom_key(&denom)?;
    load_denom(deps.storage, &denom)
}

/// Iterate denoms in the order of their keys.
///
/// A page can start either from a key (inclusive), which is the `next_key` of
/// the previous page, or from an offset counted from the start of the
/// collection.
pub fn list_denom(deps: Deps, pagination: Option<PageRequest>) -> Result<ListDenomResponse> {
    let page = pagination.unwrap_or_default();

    if page.key.is_some() && page.offset.is_some() {
        return Err(Error::invalid_request("either key or offset can be set, not both"));
    }

    let limit = page.limit();
    let offset = page.offset.unwrap_or(0).try_into().unwrap_or(usize::MAX);

    let cursor = page.key.as_ref().map(|key| Bound::inclusive(key.as_str()));
    let (min, max, order) = if page.reverse {
        (None, cursor, Order::Descending)
    } else {
        (cursor, None, Order::Ascending)
    };

    let mut iter = DENOMS.range(deps.storage, min, max, order).skip(offset);

    let denoms = iter
        .by_ref()
        .take(limit)
        .map(|item| item.map(|(_, denom)| denom))
        .collect::<StdResult<Vec<_>>>()?;

    // peek one record beyond the page to find out where the next page starts
    let next_key = iter.next().transpose()?.map(|(key, _)| key);

    let total = if page.count_total {
        Some(DENOMS.keys_raw(deps.storage, None, None, Order::Ascending).count() as u64)
    } else {
        None
    };

    Ok(ListDenomResponse {
        denoms,
        pagination: PageResponse {
            next_key,
            total,
        },
    })
}

pub fn bank_denom_of(deps: Deps, env: Env, denom: String) -> Result<BankDenomResponse> {
    // the denom must be registered
    load_denom(deps.storage, &denom)?;

    Ok(BankDenomResponse {
        bank_denom: bank_denom(env.contract.address.as_str(), &denom),
        mintable:   is_valid_subdenom(&denom),
        denom,
    })
}

// ----------------------------------- Tests -----------------------------------
