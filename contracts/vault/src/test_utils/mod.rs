mod helpers;
mod token_querier;

pub use helpers::{mock_dependencies, CustomMockQuerier};
pub use token_querier::TokenQuerier;
