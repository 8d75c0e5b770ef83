use {
    cosmwasm_schema::cw_serde,
    cosmwasm_std::{Storage, Uint128},
    cw_storage_plus::{Item, Map},
    denom_registry::{Denom, Params},
};

use crate::error::{Error, Result};

pub const PARAMS: Item<Params> = Item::new("params");

// denom => denom record
//
// the key is the last and only key component, so iterating the map is ordered
// by the raw bytes of the denom string
pub const DENOMS: Map<&str, Denom> = Map::new("denoms");

// a mint whose ledger messages have been dispatched but whose supply hasn't
// been recorded yet. only exists between `mint_and_send_tokens` and the reply
// to its bank send, within the same transaction
pub const PENDING_MINT: Item<PendingMint> = Item::new("pending_mint");

#[cw_serde]
pub struct PendingMint {
    pub denom:      String,
    pub bank_denom: String,
    pub amount:     Uint128,
    pub recipient:  String,
}

/// Load a denom record, or error with `NotFound` if it doesn't exist.
pub fn load_denom(store: &dyn Storage, denom: &str) -> Result<Denom> {
    DENOMS
        .may_load(store, denom)?
        .ok_or_else(|| Error::NotFound {
            denom: denom.into(),
        })
}

// ----------------------------------- Tests -----------------------------------
