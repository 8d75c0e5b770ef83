use {
    cosmwasm_std::{
        from_slice,
        testing::{MockApi, MockQuerier, MockStorage},
        to_binary, Coin, ContractResult, Empty, OwnedDeps, Querier, QuerierResult, QueryRequest,
        SystemError, SystemResult,
    },
    osmosis_std::types::osmosis::tokenfactory::v1beta1 as tokenfactory,
    std::marker::PhantomData,
};

use crate::ledger::into_proto_coin;

const PARAMS_PATH: &str = "/osmosis.tokenfactory.v1beta1.Query/Params";

/// `MockQuerier` doesn't handle stargate queries at all. This one answers the
/// tokenfactory params query with the given denom creation fee, and leaves
/// everything else, including the denom authority metadata query, to
/// `MockQuerier`. To the contract, no tokenfactory denom exists yet.
pub struct TokenfactoryMockQuerier {
    base: MockQuerier,
    fee:  Vec<Coin>,
}

impl Querier for TokenfactoryMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_slice(bin_request) {
            Ok(request) => request,
            Err(err) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error:   format!("failed to parse query request: {err}"),
                    request: bin_request.into(),
                });
            },
        };

        match request {
            QueryRequest::Stargate {
                path,
                ..
            } if path == PARAMS_PATH => {
                let res = tokenfactory::QueryParamsResponse {
                    params: Some(tokenfactory::Params {
                        denom_creation_fee: self.fee.iter().cloned().map(into_proto_coin).collect(),
                        ..Default::default()
                    }),
                };
                SystemResult::Ok(ContractResult::from(to_binary(&res)))
            },
            _ => self.base.raw_query(bin_request),
        }
    }
}

pub type MockDeps = OwnedDeps<MockStorage, MockApi, TokenfactoryMockQuerier>;

/// Mock dependencies on a chain that charges `fee` for creating a
/// tokenfactory denom.
pub fn mock_dependencies_with_fee(fee: &[Coin]) -> MockDeps {
    OwnedDeps {
        storage:           MockStorage::default(),
        api:               MockApi::default(),
        querier:           TokenfactoryMockQuerier {
            base: MockQuerier::default(),
            fee:  fee.to_vec(),
        },
        custom_query_type: PhantomData,
    }
}
