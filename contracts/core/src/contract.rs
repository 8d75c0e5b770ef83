use cosmwasm_std::{
    entry_point, to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
};

use crate::{
    error::Result,
    execute, genesis,
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    query, AFTER_MINT, AFTER_TRANSFER, CONTRACT_NAME, CONTRACT_VERSION,
};

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg:  InstantiateMsg,
) -> Result<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    execute::init(deps, info, msg)
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env:  Env,
    info: MessageInfo,
    msg:  ExecuteMsg,
) -> Result<Response> {
    // the registry never holds anyone's funds. the only coins it accepts are
    // the tokenfactory's denom creation fee, which mint checks by itself
    if !matches!(msg, ExecuteMsg::MintAndSendTokens { .. }) {
        cw_utils::nonpayable(&info)?;
    }

    match msg {
        ExecuteMsg::CreateDenom {
            denom,
            description,
            ticker,
            precision,
            url,
            max_supply,
            can_change_max_supply,
        } => execute::create_denom(
            deps,
            info,
            denom,
            description,
            ticker,
            precision,
            url,
            max_supply,
            can_change_max_supply,
        ),
        ExecuteMsg::UpdateDenom {
            denom,
            description,
            url,
            max_supply,
            can_change_max_supply,
        } => execute::update_denom(
            deps,
            info,
            denom,
            description,
            url,
            max_supply,
            can_change_max_supply,
        ),
        ExecuteMsg::DeleteDenom {
            denom,
        } => execute::delete_denom(deps, info, denom),
        ExecuteMsg::MintAndSendTokens {
            denom,
            amount,
            recipient,
        } => execute::mint_and_send_tokens(deps, env, info, denom, amount, recipient),
        ExecuteMsg::UpdateOwner {
            denom,
            new_owner,
        } => execute::update_owner(deps, info, denom, new_owner),
        ExecuteMsg::UpdateParams {
            params,
        } => execute::update_params(deps, info, params),
        ExecuteMsg::UpdateOwnership(action) => execute::update_ownership(deps, env, info, action),
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response> {
    match msg.id {
        // denom creation or mint failed - abort the transaction
        AFTER_MINT => execute::after_mint(deps, msg.result),

        // coins sent (or failed to) - record the new supply
        AFTER_TRANSFER => execute::after_transfer(deps, msg.result),

        id => unreachable!("unknown reply ID: `{id}`"),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary> {
    let bin = match msg {
        QueryMsg::Params {} => to_binary(&query::params(deps)?),
        QueryMsg::Denom {
            denom,
        } => to_binary(&query::denom(deps, denom)?),
        QueryMsg::ListDenom {
            pagination,
        } => to_binary(&query::list_denom(deps, pagination)?),
        QueryMsg::BankDenom {
            denom,
        } => to_binary(&query::bank_denom_of(deps, env, denom)?),
        QueryMsg::ExportGenesis {} => to_binary(&genesis::export_genesis(deps)?),
        QueryMsg::Ownership {} => to_binary(&cw_ownable::get_ownership(deps.storage)?),
    }?;

    Ok(bin)
}

// ----------------------------------- Tests -----------------------------------
