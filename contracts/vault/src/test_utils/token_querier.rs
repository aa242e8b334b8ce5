use cosmwasm_std::{to_binary, Addr, ContractResult, QuerierResult, SystemError, SystemResult, Uint128};
use cw20::{Cw20QueryMsg, TokenInfoResponse};
use std::collections::HashMap;

/// Answers cw20 smart queries for the tokens the vault talks to. The engine
/// only reads total supply, so that is all this mock keeps.
#[derive(Default)]
pub struct TokenQuerier {
    supplies: HashMap<String, Uint128>,
}

impl TokenQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: Cw20QueryMsg) -> QuerierResult {
        match query {
            Cw20QueryMsg::TokenInfo {} => self.query_token_info(contract_addr),
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: "unknown cw20 request".into(),
            }),
        }
    }

    fn query_token_info(&self, token: &Addr) -> QuerierResult {
        let total_supply = self
            .supplies
            .get(token.as_str())
            .copied()
            .unwrap_or_default();
        let response = TokenInfoResponse {
            name: "vault token".into(),
            symbol: "vtT".into(),
            decimals: 6,
            total_supply,
        };
        SystemResult::Ok(ContractResult::from(to_binary(&response)))
    }

    pub fn set_supply(&mut self, token: &str, amount: Uint128) {
        self.supplies.insert(token.into(), amount);
    }
}
