use asset::AssetInfo;
use cosmwasm_std::Uint128;
use cw20::{Cw20Coin, Cw20ReceiveMsg, MinterResponse};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub asset_info: AssetInfo,
    pub reserve_pool_bps: u16,
    pub cw20_code_id: u64,
    pub whitelisted_workers: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Receive(Cw20ReceiveMsg),
    /// Native-asset deposit; amount comes from the attached funds.
    Deposit {},
    /// Opens a new position (no `position_id`) or re-borrows against an
    /// existing one. Attached native funds are the principal contribution.
    Borrow {
        borrow_amount: Uint128,
        worker_addr: Option<String>,
        position_id: Option<u64>,
    },
    /// Native-asset repayment; amount comes from the attached funds.
    Repay { position_id: u64 },
    /// Native-asset reserve credit; grows the pool without minting shares.
    CreditReserve {},
    /// Worker-only, requires the position to be fully repaid.
    ClosePosition { position_id: u64 },
    Accrue {},
    AddWhitelist { address: String },
    RemoveWhitelist { address: String },
    SetReservePoolBps { bps: u16 },
    ChangeOwner { new_owner: String },
}

/// Instructions embedded in a cw20 `Send`. Deposit/Borrow/Repay/CreditReserve
/// must arrive from the configured asset token, Withdraw from the vault
/// token. Each dispatches into the same internal operation as the native
/// path.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Cw20HookMsg {
    Deposit {},
    Withdraw {},
    Borrow {
        borrow_amount: Uint128,
        worker_addr: Option<String>,
        position_id: Option<u64>,
    },
    Repay { position_id: u64 },
    CreditReserve {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetVaultConfig {},
    GetPosition {
        position_id: u64,
    },
    GetPositionsByOwner {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    GetPositionsByWorker {
        worker: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct ConfigResponse {
    pub asset_info: AssetInfo,
    pub vault_token_addr: String,
    pub reserve_pool_bps: u16,
    pub owner: String,
    pub whitelisted_workers: Vec<String>,
    pub total_balance: Uint128,
    pub total_debt: Uint128,
    pub total_debt_shares: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct PositionResponse {
    pub id: u64,
    pub owner: String,
    pub worker: String,
    pub debt_share: Uint128,
    pub debt_value: Uint128,
    pub closed: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct PositionsResponse {
    pub positions: Vec<PositionResponse>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Cw20InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    pub mint: Option<MinterResponse>,
}
