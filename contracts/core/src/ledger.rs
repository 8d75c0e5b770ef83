use {
    cosmwasm_std::{BankMsg, Coin, QuerierWrapper, StdError, StdResult, SubMsg, Uint128},
    osmosis_std::types::{
        cosmos::base::v1beta1::Coin as ProtoCoin, osmosis::tokenfactory::v1beta1 as tokenfactory,
    },
};

use crate::{
    error::{Error, Result},
    AFTER_MINT, AFTER_TRANSFER,
};

/// The tokenfactory module's limit on subdenom length
pub const MAX_SUBDENOM_LENGTH: usize = 44;

/// The token factory denom that backs a registry denom.
///
/// The token factory namespaces denoms by their creator, which is always this
/// contract, so the registry key is used verbatim as the subdenom.
///
/// NOTE: the registry accepts any non-empty key, but the tokenfactory only
/// accepts subdenoms that pass `is_valid_subdenom`. A denom whose key doesn't
/// can be registered, updated, and deleted, but never minted.
pub fn bank_denom(contract: &str, denom: &str) -> String {
    format!("factory/{contract}/{denom}")
}

/// Whether the tokenfactory accepts the registry key as a subdenom: at most 44
/// characters in `[a-zA-Z0-9/:._-]`.
pub fn is_valid_subdenom(denom: &str) -> bool {
    denom.len() <= MAX_SUBDENOM_LENGTH
        && denom
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
}

/// Query the fee the tokenfactory charges for creating a denom.
pub fn denom_creation_fee(querier: &QuerierWrapper) -> Result<Vec<Coin>> {
    let Some(params) = tokenfactory::TokenfactoryQuerier::new(querier).params()?.params else {
        return Err(StdError::generic_err("tokenfactory params query returned no params").into());
    };

    params
        .denom_creation_fee
        .into_iter()
        .map(from_proto_coin)
        .collect::<StdResult<_>>()
        .map_err(Into::into)
}

/// The tokenfactory charges the creation fee to the contract, so the sender
/// must attach exactly that fee. If no denom is created, no funds are
/// accepted.
pub fn assert_creation_fee(funds: &[Coin], fee: &[Coin]) -> Result<()> {
    let mut actual = funds.to_vec();
    let mut expected = fee.to_vec();
    actual.sort_by(|a, b| a.denom.cmp(&b.denom));
    expected.sort_by(|a, b| a.denom.cmp(&b.denom));

    if actual != expected {
        return Err(Error::DenomCreationFee {
            expected: stringify_coins(&expected),
            actual:   stringify_coins(&actual),
        });
    }

    Ok(())
}

fn stringify_coins(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "[]".into();
    }

    coins.iter().map(|coin| coin.to_string()).collect::<Vec<_>>().join(",")
}

/// Check whether a tokenfactory denom exists.
///
/// We do this by attempting to query the denom's authority metadata. If it
/// errors, we assume the token doesn't exist, and attempt to create it. If the
/// query failed for a different reason, the creation fails and surfaces as a
/// mint failure.
pub fn denom_exists(querier: &QuerierWrapper, bank_denom: &str) -> bool {
    tokenfactory::TokenfactoryQuerier::new(querier)
        .denom_authority_metadata(bank_denom.into())
        .is_ok()
}

/// Compose the ledger messages of a mint, in execution order:
///
/// 1. create the tokenfactory denom, if it doesn't exist yet
/// 2. mint the coins into the contract's own account
/// 3. send the coins from the contract to the recipient
///
/// A failure of 1 or 2 is caught by the `AFTER_MINT` reply, a failure of 3 by
/// the `AFTER_TRANSFER` reply. The success of 3 also triggers `AFTER_TRANSFER`,
/// which is where the supply is recorded.
pub fn mint_and_send(
    contract:  impl Into<String>,
    denom:     &str,
    coin:      Coin,
    recipient: impl Into<String>,
    create:    bool,
) -> Vec<SubMsg> {
    let contract = contract.into();
    let mut submsgs = vec![];

    if create {
        submsgs.push(SubMsg::reply_on_error(
            tokenfactory::MsgCreateDenom {
                sender:   contract.clone(),
                subdenom: denom.into(),
            },
            AFTER_MINT,
        ));
    }

    submsgs.push(SubMsg::reply_on_error(
        tokenfactory::MsgMint {
            sender: contract,
            amount: Some(into_proto_coin(coin.clone())),
        },
        AFTER_MINT,
    ));

    submsgs.push(SubMsg::reply_always(
        BankMsg::Send {
            to_address: recipient.into(),
            amount:     vec![coin],
        },
        AFTER_TRANSFER,
    ));

    submsgs
}

/// Convert a /cosmos.base.v1beta1.coin into a cosmwasm_std::Coin
pub fn from_proto_coin(coin: ProtoCoin) -> StdResult<Coin> {
    Ok(Coin {
        denom:  coin.denom,
        amount: coin.amount.parse()?,
    })
}

/// Convert a cosmwasm_std::Coin into a /cosmos.base.v1beta1.coin
pub fn into_proto_coin(coin: Coin) -> ProtoCoin {
    ProtoCoin {
        denom:  coin.denom,
        amount: coin.amount.to_string(),
    }
}

pub fn coin(amount: Uint128, bank_denom: impl Into<String>) -> Coin {
    Coin {
        denom: bank_denom.into(),
        amount,
    }
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::testing::mock_dependencies_with_fee,
        cosmwasm_std::{coin as cw_coin, testing::mock_dependencies, CosmosMsg, ReplyOn},
    };

    #[test]
    fn composing_bank_denom() {
        assert_eq!(bank_denom("contract", "gold"), "factory/contract/gold");
    }

    #[test]
    fn validating_subdenom() {
        assert!(is_valid_subdenom("gold"));
        assert!(is_valid_subdenom("ibc/GOLD:v1.0_final-2"));
        assert!(is_valid_subdenom(&"a".repeat(MAX_SUBDENOM_LENGTH)));

        assert!(!is_valid_subdenom(&"a".repeat(MAX_SUBDENOM_LENGTH + 1)));
        assert!(!is_valid_subdenom("gold coin"));
        assert!(!is_valid_subdenom("gold#1"));
        assert!(!is_valid_subdenom("göld"));
    }

    #[test]
    fn querying_creation_fee() {
        let deps = mock_dependencies_with_fee(&[cw_coin(10_000_000, "uosmo")]);
        let fee = denom_creation_fee(&deps.as_ref().querier).unwrap();
        assert_eq!(fee, vec![cw_coin(10_000_000, "uosmo")]);

        let deps = mock_dependencies_with_fee(&[]);
        assert!(denom_creation_fee(&deps.as_ref().querier).unwrap().is_empty());

        // the plain mock querier doesn't know about the tokenfactory module
        let deps = mock_dependencies();
        let err = denom_creation_fee(&deps.as_ref().querier).unwrap_err();
        assert!(matches!(err, Error::Std(_)));
    }

    #[test]
    fn checking_creation_fee() {
        let fee = [cw_coin(100, "uosmo"), cw_coin(5, "uatom")];

        assert!(assert_creation_fee(&[], &[]).is_ok());
        // order doesn't matter
        assert!(assert_creation_fee(&[cw_coin(5, "uatom"), cw_coin(100, "uosmo")], &fee).is_ok());

        let err = assert_creation_fee(&[cw_coin(100, "uosmo")], &fee).unwrap_err();
        assert_eq!(err, Error::DenomCreationFee {
            expected: "5uatom,100uosmo".into(),
            actual:   "100uosmo".into(),
        });

        let err = assert_creation_fee(&[cw_coin(1, "uosmo")], &[]).unwrap_err();
        assert_eq!(err, Error::DenomCreationFee {
            expected: "[]".into(),
            actual:   "1uosmo".into(),
        });
    }

    #[test]
    fn querying_missing_denom() {
        let deps = mock_dependencies();

        // the mock querier doesn't know about the tokenfactory module
        assert!(!denom_exists(&deps.as_ref().querier, "factory/contract/gold"));
    }

    #[test]
    fn composing_messages() {
        let coin = coin(Uint128::new(400), "factory/contract/gold");

        let submsgs = mint_and_send("contract", "gold", coin.clone(), "jake", true);
        assert_eq!(submsgs.len(), 3);
        assert_eq!(submsgs[0].id, AFTER_MINT);
        assert_eq!(submsgs[0].reply_on, ReplyOn::Error);
        assert_eq!(submsgs[1].id, AFTER_MINT);
        assert_eq!(submsgs[1].reply_on, ReplyOn::Error);
        assert_eq!(submsgs[2].id, AFTER_TRANSFER);
        assert_eq!(submsgs[2].reply_on, ReplyOn::Always);
        assert_eq!(
            submsgs[2].msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "jake".into(),
                amount:     vec![coin.clone()],
            }),
        );

        // the denom already exists: no creation message
        let submsgs = mint_and_send("contract", "gold", coin, "jake", false);
        assert_eq!(submsgs.len(), 2);
        assert!(matches!(submsgs[0].msg, CosmosMsg::Stargate { .. }));
    }
}
