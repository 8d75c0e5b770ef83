use {
    cosmwasm_schema::cw_serde,
    cosmwasm_std::{StdError, StdResult, Uint128},
    std::collections::BTreeSet,
};

// ----------------------------------- denom -----------------------------------

/// A denomination registered by a user.
///
/// `ticker` and `precision` are set at creation and never changed afterwards.
/// `supply` is only ever increased by minting, and only the registry itself
/// tracks it; it is independent of the bank module's total supply.
#[cw_serde]
pub struct Denom {
    /// Unique identifier of the denom, also its key in the contract store
    pub denom: String,

    /// The account allowed to update, mint, delete, and transfer this denom
    pub owner: String,

    pub description: String,

    /// Display symbol
    pub ticker: String,

    /// Number of decimal places
    pub precision: u32,

    pub url: String,

    /// Upper bound of `supply`, enforced on every mint
    pub max_supply: Uint128,

    /// Amount minted through the registry so far
    pub supply: Uint128,

    pub can_change_max_supply: bool,
}

// ---------------------------------- params -----------------------------------

/// Module parameters.
///
/// Carries no fields for now. It is stored and exported alongside the denoms
/// so that adding a field later does not change the genesis format.
#[cw_serde]
#[derive(Default)]
pub struct Params {}

impl Params {
    pub fn validate(&self) -> StdResult<()> {
        Ok(())
    }
}

// ---------------------------------- genesis ----------------------------------

/// Snapshot of the entire registry, used to bootstrap a new contract or to
/// dump the state of an existing one.
#[cw_serde]
#[derive(Default)]
pub struct GenesisState {
    pub params: Params,

    /// Denoms in ascending order of their keys when exported. The order is
    /// not significant when importing.
    pub denoms: Vec<Denom>,
}

impl GenesisState {
    /// Reject empty or duplicate denom keys and zero max supplies, then
    /// validate the params.
    ///
    /// Importing is last-write-wins, so without the duplicate check a later
    /// record would silently shadow an earlier one.
    ///
    /// NOTE: `supply <= max_supply` is not checked. An owner may lower the max
    /// supply below the supply, and an exported state must import again.
    pub fn validate(&self) -> StdResult<()> {
        let mut seen = BTreeSet::new();

        for denom in &self.denoms {
            if denom.denom.is_empty() {
                return Err(StdError::generic_err("empty denom in genesis state"));
            }

            if denom.max_supply.is_zero() {
                return Err(StdError::generic_err(format!(
                    "zero max supply in genesis state: `{}`",
                    denom.denom,
                )));
            }

            if !seen.insert(denom.denom.as_str()) {
                return Err(StdError::generic_err(format!(
                    "duplicate denom in genesis state: `{}`",
                    denom.denom,
                )));
            }
        }

        self.params.validate()
    }
}

// -------------------------------- pagination ---------------------------------

/// Number of records returned if the request does not specify a limit
pub const DEFAULT_LIMIT: u32 = 100;

/// The largest page size a request may ask for. Bigger limits are clamped.
pub const MAX_LIMIT: u32 = 1000;

/// Pagination options for list queries.
///
/// Either `key` or `offset` may be used to continue from a previous page, but
/// not both at the same time.
#[cw_serde]
#[derive(Default)]
pub struct PageRequest {
    /// Resume from this key (inclusive). Set it to the `next_key` returned in
    /// the previous page's `PageResponse`.
    pub key: Option<String>,

    /// Number of records to skip before the page starts
    pub offset: Option<u64>,

    /// Maximum number of records in the page. Zero or unset means
    /// `DEFAULT_LIMIT`.
    pub limit: Option<u32>,

    /// Whether to also count all records in the store
    #[serde(default)]
    pub count_total: bool,

    /// Iterate in descending key order
    #[serde(default)]
    pub reverse: bool,
}

impl PageRequest {
    /// The effective page size
    pub fn limit(&self) -> usize {
        let limit = match self.limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit.min(MAX_LIMIT),
        };
        limit as usize
    }
}

#[cw_serde]
#[derive(Default)]
pub struct PageResponse {
    /// Key of the first record of the next page. None if this is the last
    /// page.
    pub next_key: Option<String>,

    /// Total number of records, if `count_total` was requested
    pub total: Option<u64>,
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_denom(denom: &str) -> Denom {
        Denom {
            denom:                 denom.into(),
            owner:                 "larry".into(),
            description:           "".into(),
            ticker:                denom.to_uppercase(),
            precision:             6,
            url:                   "".into(),
            max_supply:            Uint128::new(1000),
            supply:                Uint128::zero(),
            can_change_max_supply: false,
        }
    }

    #[test]
    fn validating_genesis() {
        assert!(GenesisState::default().validate().is_ok());

        let genesis = GenesisState {
            params: Params::default(),
            denoms: vec![mock_denom("gold"), mock_denom("silver")],
        };
        assert!(genesis.validate().is_ok());

        let genesis = GenesisState {
            params: Params::default(),
            denoms: vec![mock_denom("gold"), mock_denom("silver"), mock_denom("gold")],
        };
        assert!(genesis.validate().is_err());

        let genesis = GenesisState {
            params: Params::default(),
            denoms: vec![mock_denom("gold"), mock_denom("")],
        };
        assert!(genesis.validate().is_err());

        let mut silver = mock_denom("silver");
        silver.max_supply = Uint128::zero();
        let genesis = GenesisState {
            params: Params::default(),
            denoms: vec![mock_denom("gold"), silver],
        };
        assert!(genesis.validate().is_err());

        // supply above max supply is importable
        let mut gold = mock_denom("gold");
        gold.supply = Uint128::new(2000);
        let genesis = GenesisState {
            params: Params::default(),
            denoms: vec![gold],
        };
        assert!(genesis.validate().is_ok());
    }

    #[test]
    fn effective_limit() {
        let mut req = PageRequest::default();
        assert_eq!(req.limit(), DEFAULT_LIMIT as usize);

        req.limit = Some(0);
        assert_eq!(req.limit(), DEFAULT_LIMIT as usize);

        req.limit = Some(5);
        assert_eq!(req.limit(), 5);

        req.limit = Some(MAX_LIMIT + 1);
        assert_eq!(req.limit(), MAX_LIMIT as usize);
    }
}
