use crate::test_utils::TokenQuerier;
use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage};
use cosmwasm_std::{
    from_binary, from_slice, Addr, Empty, OwnedDeps, Querier, QuerierResult, QueryRequest,
    SystemError, SystemResult, Uint128, WasmQuery,
};
use cw20::Cw20QueryMsg;
use std::marker::PhantomData;

pub fn mock_dependencies() -> OwnedDeps<MockStorage, MockApi, CustomMockQuerier> {
    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: CustomMockQuerier::default(),
        custom_query_type: PhantomData,
    }
}

// We do not have any custom query
type CustomQuery = Empty;

pub struct CustomMockQuerier {
    base: MockQuerier<CustomQuery>,
    token_querier: TokenQuerier,
}

impl Default for CustomMockQuerier {
    fn default() -> Self {
        Self {
            base: MockQuerier::<CustomQuery>::new(&[]),
            token_querier: TokenQuerier::default(),
        }
    }
}

impl Querier for CustomMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<CustomQuery> = match from_slice(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("[mock]: failed to parse query request {}", e),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl CustomMockQuerier {
    pub fn handle_query(&self, request: &QueryRequest<CustomQuery>) -> QuerierResult {
        match request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                let contract_addr = Addr::unchecked(contract_addr);
                match from_binary::<Cw20QueryMsg>(msg) {
                    Ok(query) => self.token_querier.handle_query(&contract_addr, query),
                    Err(_) => SystemResult::Err(SystemError::InvalidRequest {
                        error: "[mock]: unsupported wasm query".into(),
                        request: msg.clone(),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    pub fn set_token_supply(&mut self, token: &str, amount: Uint128) {
        self.token_querier.set_supply(token, amount);
    }
}
