use {
    cosmwasm_std::{StdError, Uint128},
    cw_ownable::OwnershipError,
    cw_utils::PaymentError,
};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("invalid {role} address `{address}`: {reason}")]
    InvalidAddress {
        role:    &'static str,
        address: String,
        reason:  String,
    },

    #[error("invalid request: {reason}")]
    InvalidRequest {
        reason: String,
    },

    #[error("denom `{denom}` already exists")]
    AlreadyExists {
        denom: String,
    },

    #[error("denom `{denom}` not found")]
    NotFound {
        denom: String,
    },

    #[error("`{sender}` is not the owner of denom `{denom}`")]
    Unauthorized {
        sender: String,
        denom:  String,
    },

    #[error("minting `{amount}` of denom `{denom}` would exceed max supply: supply `{supply}`, max supply `{max_supply}`")]
    ExceedsMaxSupply {
        denom:      String,
        amount:     Uint128,
        supply:     Uint128,
        max_supply: Uint128,
    },

    #[error("incorrect denom creation fee: expecting `{expected}`, found `{actual}`")]
    DenomCreationFee {
        expected: String,
        actual:   String,
    },

    #[error("failed to mint denom `{denom}`: {reason}")]
    MintFailure {
        denom:  String,
        reason: String,
    },

    #[error("failed to send denom `{denom}` to `{recipient}`: {reason}")]
    TransferFailure {
        denom:     String,
        recipient: String,
        reason:    String,
    },
}

impl Error {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// ----------------------------------- Tests -----------------------------------
