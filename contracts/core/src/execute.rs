use {
    cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdError, SubMsgResult, Uint128},
    denom_registry::{Denom, Params},
};

use crate::{
    error::{Error, Result},
    genesis,
    ledger::{
        assert_creation_fee, bank_denom, coin, denom_creation_fee, denom_exists,
        is_valid_subdenom, mint_and_send,
    },
    msg::InstantiateMsg,
    state::{load_denom, PendingMint, DENOMS, PARAMS, PENDING_MINT},
    utils::{assert_denom_key, assert_owner, assert_positive, validate_address},
};

pub fn init(deps: DepsMut, info: MessageInfo, msg: InstantiateMsg) -> Result<Response> {
    let owner = match &msg.owner {
        Some(owner) => validate_address(deps.api, "contract owner", owner)?,
        None => info.sender,
    };

    cw_ownable::initialize_owner(deps.storage, deps.api, Some(owner.as_str()))?;

    let count = genesis::init_genesis(deps, msg.genesis)?;

    Ok(Response::new()
        .add_attribute("method", "init")
        .add_attribute("owner", owner)
        .add_attribute("denoms", count.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub fn create_denom(
    deps:                  DepsMut,
    info:                  MessageInfo,
    denom:                 String,
    description:           String,
    ticker:                String,
    precision:             u32,
    url:                   String,
    max_supply:            Uint128,
    can_change_max_supply: bool,
) -> Result<Response> {
    let owner = validate_address(deps.api, "owner", info.sender.as_str())?;
    assert_denom_key(&denom)?;
    assert_positive("max supply", max_supply)?;

    if DENOMS.has(deps.storage, &denom) {
        return Err(Error::AlreadyExists {
            denom,
        });
    }

    DENOMS.save(deps.storage, &denom, &Denom {
        denom:   denom.clone(),
        owner:   owner.to_string(),
        description,
        ticker,
        precision,
        url,
        max_supply,
        supply:  Uint128::zero(),
        can_change_max_supply,
    })?;

    Ok(Response::new()
        .add_attribute("method", "create_denom")
        .add_attribute("denom", denom)
        .add_attribute("owner", owner)
        .add_attribute("max_supply", max_supply))
}

/// Overwrite the mutable fields of a denom.
///
/// NOTE: lowering `max_supply` below the current supply is allowed. Such a
/// denom simply can't be minted any more until `max_supply` is raised again.
pub fn update_denom(
    deps:                  DepsMut,
    info:                  MessageInfo,
    denom:                 String,
    description:           String,
    url:                   String,
    max_supply:            Uint128,
    can_change_max_supply: bool,
) -> Result<Response> {
    let owner = validate_address(deps.api, "owner", info.sender.as_str())?;
    assert_denom_key(&denom)?;
    assert_positive("max supply", max_supply)?;

    let stored = load_denom(deps.storage, &denom)?;
    assert_owner(&stored, &owner)?;

    DENOMS.save(deps.storage, &denom, &Denom {
        description,
        url,
        max_supply,
        can_change_max_supply,
        ..stored
    })?;

    Ok(Response::new()
        .add_attribute("method", "update_denom")
        .add_attribute("denom", denom)
        .add_attribute("owner", owner)
        .add_attribute("max_supply", max_supply))
}

pub fn delete_denom(deps: DepsMut, info: MessageInfo, denom: String) -> Result<Response> {
    let creator = validate_address(deps.api, "creator", info.sender.as_str())?;
    assert_denom_key(&denom)?;

    let stored = load_denom(deps.storage, &denom)?;
    assert_owner(&stored, &creator)?;

    if !stored.supply.is_zero() {
        return Err(Error::invalid_request(format!(
            "cannot delete denom `{denom}` with {} tokens in circulation",
            stored.supply,
        )));
    }

    DENOMS.remove(deps.storage, &denom);

    Ok(Response::new()
        .add_attribute("method", "delete_denom")
        .add_attribute("denom", denom)
        .add_attribute("creator", creator))
}

/// Dispatch the ledger messages of a mint. The supply is recorded in the reply
/// to the bank send, i.e. only after both the mint and the send succeeded.
///
/// The first mint of a denom creates the tokenfactory denom, which costs the
/// chain's denom creation fee. The sender must attach exactly that fee; any
/// other mint accepts no funds.
pub fn mint_and_send_tokens(
    deps:      DepsMut,
    env:       Env,
    info:      MessageInfo,
    denom:     String,
    amount:    Uint128,
    recipient: String,
) -> Result<Response> {
    let creator = validate_address(deps.api, "creator", info.sender.as_str())?;
    let recipient = validate_address(deps.api, "recipient", &recipient)?;
    assert_denom_key(&denom)?;
    assert_positive("amount", amount)?;

    let stored = load_denom(deps.storage, &denom)?;
    assert_owner(&stored, &creator)?;

    let within_cap = stored
        .supply
        .checked_add(amount)
        .map_or(false, |new_supply| new_supply <= stored.max_supply);
    if !within_cap {
        return Err(Error::ExceedsMaxSupply {
            denom,
            amount,
            supply:     stored.supply,
            max_supply: stored.max_supply,
        });
    }

    if !is_valid_subdenom(&denom) {
        return Err(Error::invalid_request(format!(
            "denom `{denom}` can't be used as a tokenfactory subdenom and can't be minted",
        )));
    }

    let bank_denom = bank_denom(env.contract.address.as_str(), &denom);
    let create = !denom_exists(&deps.querier, &bank_denom);

    let fee = if create {
        denom_creation_fee(&deps.querier)?
    } else {
        vec![]
    };
    assert_creation_fee(&info.funds, &fee)?;

    PENDING_MINT.save(deps.storage, &PendingMint {
        denom:      denom.clone(),
        bank_denom: bank_denom.clone(),
        amount,
        recipient:  recipient.to_string(),
    })?;

    Ok(Response::new()
        .add_attribute("method", "mint_and_send_tokens")
        .add_attribute("denom", &denom)
        .add_attribute("bank_denom", &bank_denom)
        .add_attribute("amount", amount)
        .add_attribute("creator", creator)
        .add_attribute("recipient", &recipient)
        .add_attribute("create_bank_denom", create.to_string())
        .add_submessages(mint_and_send(
            env.contract.address,
            &denom,
            coin(amount, bank_denom),
            recipient,
            create,
        )))
}

/// Either the tokenfactory denom creation or the mint failed.
///
/// Erroring here reverts the entire transaction, including the pending mint.
pub fn after_mint(deps: DepsMut, res: SubMsgResult) -> Result<Response> {
    // reply on error, so the result can't be ok
    let SubMsgResult::Err(reason) = res else {
        unreachable!("mint reply is only requested on error");
    };

    let pending = PENDING_MINT.load(deps.storage)?;

    Err(Error::MintFailure {
        denom: pending.denom,
        reason,
    })
}

/// The bank send has completed. If it succeeded, the mint is complete and the
/// supply is recorded.
pub fn after_transfer(deps: DepsMut, res: SubMsgResult) -> Result<Response> {
    let pending = PENDING_MINT.load(deps.storage)?;
    PENDING_MINT.remove(deps.storage);

    if let SubMsgResult::Err(reason) = res {
        return Err(Error::TransferFailure {
            denom:     pending.denom,
            recipient: pending.recipient,
            reason,
        });
    }

    let mut denom = load_denom(deps.storage, &pending.denom)?;
    denom.supply = denom.supply.checked_add(pending.amount).map_err(StdError::from)?;
    DENOMS.save(deps.storage, &pending.denom, &denom)?;

    Ok(Response::new()
        .add_attribute("method", "after_transfer")
        .add_attribute("denom", pending.denom)
        .add_attribute("bank_denom", pending.bank_denom)
        .add_attribute("supply", denom.supply))
}

pub fn update_owner(
    deps:      DepsMut,
    info:      MessageInfo,
    denom:     String,
    new_owner: String,
) -> Result<Response> {
    let creator = validate_address(deps.api, "creator", info.sender.as_str())?;
    let new_owner = validate_address(deps.api, "new owner", &new_owner)?;
    assert_denom_key(&denom)?;

    let mut stored = load_denom(deps.storage, &denom)?;
    assert_owner(&stored, &creator)?;

    stored.owner = new_owner.to_string();
    DENOMS.save(deps.storage, &denom, &stored)?;

    Ok(Response::new()
        .add_attribute("method", "update_owner")
        .add_attribute("denom", denom)
        .add_attribute("creator", creator)
        .add_attribute("new_owner", new_owner))
}

pub fn update_params(deps: DepsMut, info: MessageInfo, params: Params) -> Result<Response> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    params
        .validate()
        .map_err(|err| Error::invalid_request(format!("invalid params: {err}")))?;
    PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("method", "update_params")
        .add_attribute("sender", info.sender))
}

pub fn update_ownership(
    deps:   DepsMut,
    env:    Env,
    info:   MessageInfo,
    action: cw_ownable::Action,
) -> Result<Response> {
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;

    Ok(Response::new()
        .add_attribute("method", "update_ownership")
        .add_attributes(ownership.into_attributes()))
}

// ----------------------------------- Tests -----------------------------------
