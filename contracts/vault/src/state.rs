use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use asset::AssetInfo;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Immutable-after-instantiation identity of the vault plus the owner-mutable
/// authority settings. `vault_token_addr` is filled in by the instantiate
/// reply once the claim-token contract exists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct VaultConfig {
    pub asset_info: AssetInfo,
    pub vault_token_addr: Addr,
    pub reserve_pool_bps: u16,
    pub whitelisted_workers: Vec<Addr>,
    pub owner: Addr,
}

/// Ledger aggregates. `total_balance` is free liquidity only: borrowing moves
/// funds out of it and repaying moves them back, so assets under management
/// are always `total_balance + total_debt`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PoolState {
    pub total_balance: Uint128,
    pub total_debt: Uint128,
    pub total_debt_shares: Uint128,
    pub last_accrue_timestamp: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Position {
    pub id: u64,
    pub owner: Addr,
    pub worker: Addr,
    pub debt_share: Uint128,
    pub closed: bool,
}

pub const CONFIG: Item<VaultConfig> = Item::new("config");
pub const POOL: Item<PoolState> = Item::new("pool");
pub const POSITIONS: Map<u64, Position> = Map::new("positions");
pub const LAST_POSITION_ID: Item<u64> = Item::new("last_position_id");
