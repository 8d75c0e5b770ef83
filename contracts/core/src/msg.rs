use {
    cosmwasm_schema::{cw_serde, QueryResponses},
    cosmwasm_std::Uint128,
    cw_ownable::{cw_ownable_execute, cw_ownable_query},
    denom_registry::{Denom, GenesisState, PageRequest, PageResponse, Params},
};

#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to update the params.
    /// If not provided, default to the instantiator.
    pub owner: Option<String>,

    /// Initial params and denoms
    #[serde(default)]
    pub genesis: GenesisState,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Register a new denom, owned by the sender, with zero supply
    CreateDenom {
        denom:                 String,
        description:           String,
        ticker:                String,
        precision:             u32,
        url:                   String,
        max_supply:            Uint128,
        can_change_max_supply: bool,
    },

    /// Update the metadata of a denom owned by the sender.
    ///
    /// Ticker, precision, and supply can't be changed this way.
    UpdateDenom {
        denom:                 String,
        description:           String,
        url:                   String,
        max_supply:            Uint128,
        can_change_max_supply: bool,
    },

    /// Delete a denom owned by the sender. Only possible if nothing has been
    /// minted.
    DeleteDenom {
        denom: String,
    },

    /// Mint new coins of a denom owned by the sender, and send them to the
    /// recipient
    MintAndSendTokens {
        denom:     String,
        amount:    Uint128,
        recipient: String,
    },

    /// Transfer the ownership of a denom owned by the sender
    UpdateOwner {
        denom:     String,
        new_owner: String,
    },

    /// Replace the params. Only callable by the contract owner.
    UpdateParams {
        params: Params,
    },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current params
    #[returns(Params)]
    Params {},

    /// A single denom
    #[returns(Denom)]
    Denom {
        denom: String,
    },

    /// Iterate denoms in order of their keys
    #[returns(ListDenomResponse)]
    ListDenom {
        pagination: Option<PageRequest>,
    },

    /// The bank denom that the registry mints for a denom, and whether it can
    /// be minted at all
    #[returns(BankDenomResponse)]
    BankDenom {
        denom: String,
    },

    /// Dump the entire state of the registry
    #[returns(GenesisState)]
    ExportGenesis {},
}

#[cw_serde]
pub struct ListDenomResponse {
    pub denoms:     Vec<Denom>,
    pub pagination: PageResponse,
}

#[cw_serde]
pub struct BankDenomResponse {
    pub denom:      String,
    pub bank_denom: String,

    /// Whether the tokenfactory accepts the denom as a subdenom. If not, the
    /// denom can't be minted.
    pub mintable:   bool,
}
