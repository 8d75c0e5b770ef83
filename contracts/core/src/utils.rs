use {
    cosmwasm_std::{Addr, Api, Uint128},
    denom_registry::Denom,
};

use crate::error::{Error, Result};

/// Validate an address string, attributing the failure to the role the address
/// plays in the request, e.g. "owner" or "recipient".
pub fn validate_address(api: &dyn Api, role: &'static str, address: &str) -> Result<Addr> {
    api.addr_validate(address).map_err(|err| Error::InvalidAddress {
        role,
        address: address.into(),
        reason:  err.to_string(),
    })
}

pub fn assert_denom_key(denom: &str) -> Result<()> {
    if denom.is_empty() {
        return Err(Error::invalid_request("denom cannot be empty"));
    }

    Ok(())
}

pub fn assert_positive(name: &str, value: Uint128) -> Result<()> {
    if value.is_zero() {
        return Err(Error::invalid_request(format!("{name} must be positive")));
    }

    Ok(())
}

/// Only the owner of a denom may mutate it.
pub fn assert_owner(denom: &Denom, sender: &Addr) -> Result<()> {
    if denom.owner != sender.as_str() {
        return Err(Error::Unauthorized {
            sender: sender.into(),
            denom:  denom.denom.clone(),
        });
    }

    Ok(())
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, cosmwasm_std::testing::MockApi};

    #[test]
    fn validating_addresses() {
        let api = MockApi::default();

        assert_eq!(validate_address(&api, "owner", "larry").unwrap(), Addr::unchecked("larry"));

        // too short
        let err = validate_address(&api, "owner", "xx").unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { role: "owner", .. }));

        // not normalized
        let err = validate_address(&api, "recipient", "Larry").unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { role: "recipient", .. }));
    }

    #[test]
    fn stateless_checks() {
        assert!(assert_denom_key("gold").is_ok());
        assert!(matches!(assert_denom_key(""), Err(Error::InvalidRequest { .. })));

        assert!(assert_positive("amount", Uint128::one()).is_ok());
        assert!(matches!(
            assert_positive("amount", Uint128::zero()),
            Err(Error::InvalidRequest { .. }),
        ));
    }
}
