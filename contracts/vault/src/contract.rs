use asset::{Asset, AssetInfo};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    from_binary, to_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order,
    QuerierWrapper, QueryRequest, Reply, ReplyOn, Response, StdError, StdResult, SubMsg,
    Timestamp, Uint128, Uint256, WasmMsg, WasmQuery,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg, Cw20ReceiveMsg, MinterResponse, TokenInfoResponse};
use cw_storage_plus::Bound;
use cw_utils::{may_pay, nonpayable, parse_reply_instantiate_data};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, Cw20HookMsg, Cw20InstantiateMsg, ExecuteMsg, InstantiateMsg, PositionResponse,
    PositionsResponse, QueryMsg,
};
use crate::state::{PoolState, Position, VaultConfig, CONFIG, LAST_POSITION_ID, POOL, POSITIONS};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:vault";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const INSTANTIATE_REPLY_ID: u64 = 1;

const MAX_BPS: u16 = 10000;
const SECONDS_IN_A_YEAR_10000: u128 = 315569520000u128;

const DEFAULT_PAGE_LIMIT: u32 = 10;
const MAX_PAGE_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    if msg.reserve_pool_bps > MAX_BPS {
        return Err(ContractError::InvalidParameter {
            msg: format!("reserve_pool_bps must not exceed {}", MAX_BPS),
        });
    }
    let whitelisted_workers: StdResult<Vec<Addr>> = msg
        .whitelisted_workers
        .iter()
        .map(|a| deps.api.addr_validate(a))
        .collect();

    let config = VaultConfig {
        asset_info: msg.asset_info,
        // filled in by the instantiate reply below
        vault_token_addr: Addr::unchecked(String::default()),
        reserve_pool_bps: msg.reserve_pool_bps,
        whitelisted_workers: whitelisted_workers?,
        owner: info.sender,
    };
    CONFIG.save(deps.storage, &config)?;
    POOL.save(
        deps.storage,
        &PoolState {
            total_balance: Uint128::zero(),
            total_debt: Uint128::zero(),
            total_debt_shares: Uint128::zero(),
            last_accrue_timestamp: env.block.time,
        },
    )?;
    LAST_POSITION_ID.save(deps.storage, &0u64)?;

    Ok(Response::new().add_submessage(SubMsg {
        // Create the claim token
        msg: WasmMsg::Instantiate {
            admin: None,
            code_id: msg.cw20_code_id,
            msg: to_binary(&Cw20InstantiateMsg {
                name: "vault token".to_string(),
                symbol: "vtT".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: Some(MinterResponse {
                    minter: env.contract.address.to_string(),
                    cap: None,
                }),
            })?,
            funds: vec![],
            label: "vault token".to_string(),
        }
        .into(),
        gas_limit: None,
        id: INSTANTIATE_REPLY_ID,
        reply_on: ReplyOn::Success,
    }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INSTANTIATE_REPLY_ID {
        return Err(StdError::generic_err(format!("unknown reply id: {}", msg.id)).into());
    }
    let res = parse_reply_instantiate_data(msg)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let vault_token_addr = deps.api.addr_validate(res.contract_address.as_str())?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.vault_token_addr = vault_token_addr.clone();
        Ok(config)
    })?;
    Ok(Response::new().add_attribute("vault_token_addr", vault_token_addr))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(msg) => receive_cw20(deps, env, info, msg),
        ExecuteMsg::Deposit {} => {
            let config = CONFIG.load(deps.storage)?;
            if !config.asset_info.is_native_token() {
                return Err(ContractError::WrongToken {});
            }
            let amount = received_native(&config, &info)?;
            deposit(deps, env, config, amount, info.sender)
        }
        ExecuteMsg::Borrow {
            borrow_amount,
            worker_addr,
            position_id,
        } => {
            let config = CONFIG.load(deps.storage)?;
            let principal = received_native(&config, &info)?;
            let worker = worker_addr
                .map(|a| deps.api.addr_validate(&a))
                .transpose()?;
            borrow(
                deps,
                env,
                config,
                info.sender,
                worker,
                principal,
                borrow_amount,
                position_id,
            )
        }
        ExecuteMsg::Repay { position_id } => {
            let config = CONFIG.load(deps.storage)?;
            let amount = received_native(&config, &info)?;
            repay(deps, env, position_id, amount)
        }
        ExecuteMsg::CreditReserve {} => {
            let config = CONFIG.load(deps.storage)?;
            let amount = received_native(&config, &info)?;
            credit_reserve(deps, amount)
        }
        ExecuteMsg::ClosePosition { position_id } => close_position(deps, info, position_id),
        ExecuteMsg::Accrue {} => accrue(deps, env),
        ExecuteMsg::AddWhitelist { address } => add_whitelist(deps, info, address),
        ExecuteMsg::RemoveWhitelist { address } => remove_whitelist(deps, info, address),
        ExecuteMsg::SetReservePoolBps { bps } => set_reserve_pool_bps(deps, info, bps),
        ExecuteMsg::ChangeOwner { new_owner } => change_owner(deps, info, new_owner),
    }
}

/// Token-denominated inflows arrive here as a cw20 `Send` with an embedded
/// instruction. Decode and dispatch into the same internal operations as the
/// direct-call path.
pub fn receive_cw20(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receive: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_validate(receive.sender.as_str())?;
    let amount = receive.amount;

    match from_binary::<Cw20HookMsg>(&receive.msg)? {
        Cw20HookMsg::Deposit {} => {
            assert_asset_token(&config, &info.sender)?;
            deposit(deps, env, config, amount, sender)
        }
        Cw20HookMsg::Withdraw {} => {
            if config.vault_token_addr != info.sender {
                return Err(ContractError::WrongToken {});
            }
            withdraw(deps, env, config, amount, sender)
        }
        Cw20HookMsg::Borrow {
            borrow_amount,
            worker_addr,
            position_id,
        } => {
            assert_asset_token(&config, &info.sender)?;
            let worker = worker_addr
                .map(|a| deps.api.addr_validate(&a))
                .transpose()?;
            borrow(
                deps,
                env,
                config,
                sender,
                worker,
                amount,
                borrow_amount,
                position_id,
            )
        }
        Cw20HookMsg::Repay { position_id } => {
            assert_asset_token(&config, &info.sender)?;
            repay(deps, env, position_id, amount)
        }
        Cw20HookMsg::CreditReserve {} => {
            assert_asset_token(&config, &info.sender)?;
            credit_reserve(deps, amount)
        }
    }
}

fn assert_asset_token(config: &VaultConfig, token: &Addr) -> Result<(), ContractError> {
    match &config.asset_info {
        AssetInfo::Token { contract_addr } if contract_addr.as_str() == token.as_str() => Ok(()),
        _ => Err(ContractError::WrongToken {}),
    }
}

fn assert_owner(config: &VaultConfig, sender: &Addr) -> Result<(), ContractError> {
    if sender != &config.owner {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// Amount of the configured asset attached as native funds on a direct call.
/// Coins the vault does not track are rejected rather than absorbed; on a
/// token vault no native funds are accepted at all.
fn received_native(config: &VaultConfig, info: &MessageInfo) -> Result<Uint128, ContractError> {
    match &config.asset_info {
        AssetInfo::NativeToken { denom } => Ok(may_pay(info, denom)?),
        AssetInfo::Token { .. } => {
            nonpayable(info)?;
            Ok(Uint128::zero())
        }
    }
}

pub fn deposit(
    deps: DepsMut,
    env: Env,
    config: VaultConfig,
    amount: Uint128,
    depositor: Addr,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    let mut pool = POOL.load(deps.storage)?;
    accrue_interest(&mut pool, &env.block.time)?;

    let total_shares = query_total_vault_shares(&deps.querier, &config.vault_token_addr)?;
    // Exchange rate is quoted against assets under management before this
    // deposit joins the pool.
    let total_managed = total_managed_assets(&pool)?;
    let shares_to_mint: Uint128 = if total_shares.is_zero() || total_managed.is_zero() {
        amount
    } else {
        share_from_value(total_shares.into(), total_managed.into(), amount.into()).try_into()?
    };

    pool.total_balance = pool.total_balance.checked_add(amount)?;
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new()
        .add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.vault_token_addr.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Mint {
                recipient: depositor.to_string(),
                amount: shares_to_mint,
            })?,
            funds: vec![],
        }))
        .add_attributes(vec![
            ("action", "deposit".to_string()),
            ("depositor", depositor.to_string()),
            ("amount", amount.to_string()),
            ("shares_minted", shares_to_mint.to_string()),
        ]))
}

fn withdraw(
    deps: DepsMut,
    env: Env,
    config: VaultConfig,
    share_amount: Uint128,
    recipient: Addr,
) -> Result<Response, ContractError> {
    if share_amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    let mut pool = POOL.load(deps.storage)?;
    accrue_interest(&mut pool, &env.block.time)?;

    // The shares being redeemed were just transferred to the vault and are
    // not burnt yet, so the queried supply still includes them.
    let total_shares = query_total_vault_shares(&deps.querier, &config.vault_token_addr)?;
    let total_managed = total_managed_assets(&pool)?;
    let payout: Uint128 =
        value_from_share(total_shares.into(), total_managed.into(), share_amount.into())
            .try_into()?;

    if payout > pool.total_balance {
        return Err(ContractError::InsufficientLiquidity {
            requested: payout,
            available: pool.total_balance,
        });
    }
    pool.total_balance = pool.total_balance.checked_sub(payout)?;
    POOL.save(deps.storage, &pool)?;

    let burn_vault_token_msg: CosmosMsg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.vault_token_addr.to_string(),
        msg: to_binary(&Cw20ExecuteMsg::Burn {
            amount: share_amount,
        })?,
        funds: vec![],
    });
    let payout_msg = Asset {
        info: config.asset_info,
        amount: payout,
    }
    .into_msg(recipient.clone())?;

    Ok(Response::new()
        .add_messages(vec![burn_vault_token_msg, payout_msg])
        .add_attributes(vec![
            ("action", "withdraw".to_string()),
            ("recipient", recipient.to_string()),
            ("burnt", share_amount.to_string()),
            ("withdrew", payout.to_string()),
        ]))
}

#[allow(clippy::too_many_arguments)]
pub fn borrow(
    deps: DepsMut,
    env: Env,
    config: VaultConfig,
    sender: Addr,
    worker_addr: Option<Addr>,
    principal_amount: Uint128,
    borrow_amount: Uint128,
    position_id: Option<u64>,
) -> Result<Response, ContractError> {
    if borrow_amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    let mut pool = POOL.load(deps.storage)?;
    accrue_interest(&mut pool, &env.block.time)?;

    if borrow_amount > pool.total_balance {
        return Err(ContractError::InsufficientLiquidity {
            requested: borrow_amount,
            available: pool.total_balance,
        });
    }

    let (id, mut position) = match position_id {
        // Re-borrow against an existing position. Only the account that
        // opened it or its recorded worker may add debt; the worker was
        // validated against the whitelist when the position was opened.
        Some(id) => {
            let position = POSITIONS
                .may_load(deps.storage, id)?
                .ok_or(ContractError::PositionNotFound { position_id: id })?;
            if sender != position.owner && sender != position.worker {
                return Err(ContractError::Unauthorized {});
            }
            if let Some(worker) = worker_addr {
                if worker != position.worker {
                    return Err(ContractError::Unauthorized {});
                }
            }
            if position.closed {
                return Err(ContractError::PositionClosed { position_id: id });
            }
            (id, position)
        }
        None => {
            let worker = worker_addr.unwrap_or_else(|| sender.clone());
            if !config.whitelisted_workers.iter().any(|a| worker.eq(a)) {
                return Err(ContractError::Unauthorized {});
            }
            let id = LAST_POSITION_ID.load(deps.storage)? + 1;
            LAST_POSITION_ID.save(deps.storage, &id)?;
            (
                id,
                Position {
                    id,
                    owner: sender.clone(),
                    worker,
                    debt_share: Uint128::zero(),
                    closed: false,
                },
            )
        }
    };

    let debt_share: Uint128 = share_from_value(
        pool.total_debt_shares.into(),
        pool.total_debt.into(),
        borrow_amount.into(),
    )
    .try_into()?;

    pool.total_debt = pool.total_debt.checked_add(borrow_amount)?;
    pool.total_debt_shares = pool.total_debt_shares.checked_add(debt_share)?;
    pool.total_balance = pool.total_balance.checked_sub(borrow_amount)?;
    POOL.save(deps.storage, &pool)?;

    position.debt_share = position.debt_share.checked_add(debt_share)?;
    POSITIONS.save(deps.storage, id, &position)?;

    // The recorded worker receives the pooled borrow plus the end user's
    // principal and is trusted to deploy both.
    let payout_msg = Asset {
        info: config.asset_info,
        amount: principal_amount.checked_add(borrow_amount)?,
    }
    .into_msg(position.worker.clone())?;

    Ok(Response::new().add_message(payout_msg).add_attributes(vec![
        ("action", "borrow".to_string()),
        ("position_id", id.to_string()),
        ("worker", position.worker.to_string()),
        ("borrow_amount", borrow_amount.to_string()),
        ("debt_share", debt_share.to_string()),
    ]))
}

pub fn repay(
    deps: DepsMut,
    env: Env,
    position_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    let mut pool = POOL.load(deps.storage)?;
    accrue_interest(&mut pool, &env.block.time)?;

    let mut position = POSITIONS
        .may_load(deps.storage, position_id)?
        .ok_or(ContractError::PositionNotFound { position_id })?;

    let debt_value: Uint128 = value_from_share(
        pool.total_debt_shares.into(),
        pool.total_debt.into(),
        position.debt_share.into(),
    )
    .try_into()?;
    if amount > debt_value {
        return Err(ContractError::InsufficientBalance {
            available: debt_value,
        });
    }

    let shares_to_burn: Uint128 = share_from_value(
        pool.total_debt_shares.into(),
        pool.total_debt.into(),
        amount.into(),
    )
    .try_into()?;
    // Floor division can overshoot by the residual of the value conversion;
    // never burn more than the position holds.
    let shares_to_burn = std::cmp::min(shares_to_burn, position.debt_share);

    pool.total_debt = pool.total_debt.checked_sub(amount)?;
    pool.total_debt_shares = pool.total_debt_shares.checked_sub(shares_to_burn)?;
    pool.total_balance = pool.total_balance.checked_add(amount)?;
    POOL.save(deps.storage, &pool)?;

    // A fully repaid position keeps its zero-share record until the worker
    // closes it explicitly.
    position.debt_share = position.debt_share.checked_sub(shares_to_burn)?;
    POSITIONS.save(deps.storage, position_id, &position)?;

    Ok(Response::new().add_attributes(vec![
        ("action", "repay".to_string()),
        ("position_id", position_id.to_string()),
        ("amount", amount.to_string()),
        ("shares_burnt", shares_to_burn.to_string()),
        ("debt_share", position.debt_share.to_string()),
    ]))
}

fn close_position(
    deps: DepsMut,
    info: MessageInfo,
    position_id: u64,
) -> Result<Response, ContractError> {
    let mut position = POSITIONS
        .may_load(deps.storage, position_id)?
        .ok_or(ContractError::PositionNotFound { position_id })?;
    if position.worker != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    if !position.debt_share.is_zero() {
        return Err(ContractError::OutstandingDebt { position_id });
    }
    position.closed = true;
    POSITIONS.save(deps.storage, position_id, &position)?;

    Ok(Response::new().add_attributes(vec![
        ("action", "close_position".to_string()),
        ("position_id", position_id.to_string()),
    ]))
}

/// Grows the pool without minting shares. This is how realized worker
/// returns raise the claim-token exchange rate; the trigger policy and the
/// `reserve_pool_bps` fraction are the worker contract's business.
pub fn credit_reserve(deps: DepsMut, amount: Uint128) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    POOL.update(deps.storage, |mut pool| -> Result<_, ContractError> {
        pool.total_balance = pool.total_balance.checked_add(amount)?;
        Ok(pool)
    })?;

    Ok(Response::new().add_attributes(vec![
        ("action", "credit_reserve".to_string()),
        ("amount", amount.to_string()),
    ]))
}

fn accrue(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let mut pool = POOL.load(deps.storage)?;
    let debt_before = pool.total_debt;
    accrue_interest(&mut pool, &env.block.time)?;
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new().add_attributes(vec![
        ("action", "accrue".to_string()),
        (
            "interest",
            pool.total_debt.checked_sub(debt_before)?.to_string(),
        ),
    ]))
}

fn add_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    let worker = deps.api.addr_validate(&address)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        if !config.whitelisted_workers.iter().any(|a| worker.eq(a)) {
            config.whitelisted_workers.push(worker.clone());
        }
        Ok(config)
    })?;

    Ok(Response::new().add_attributes(vec![
        ("action", "add_whitelist".to_string()),
        ("address", address),
    ]))
}

fn remove_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    let worker = deps.api.addr_validate(&address)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.whitelisted_workers.retain(|a| !worker.eq(a));
        Ok(config)
    })?;

    Ok(Response::new().add_attributes(vec![
        ("action", "remove_whitelist".to_string()),
        ("address", address),
    ]))
}

fn set_reserve_pool_bps(
    deps: DepsMut,
    info: MessageInfo,
    bps: u16,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    if bps > MAX_BPS {
        return Err(ContractError::InvalidParameter {
            msg: format!("reserve_pool_bps must not exceed {}", MAX_BPS),
        });
    }
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.reserve_pool_bps = bps;
        Ok(config)
    })?;

    Ok(Response::new().add_attributes(vec![
        ("action", "set_reserve_pool_bps".to_string()),
        ("bps", bps.to_string()),
    ]))
}

fn change_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    let new_owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.owner = new_owner.clone();
        Ok(config)
    })?;

    Ok(Response::new().add_attributes(vec![
        ("action", "change_owner".to_string()),
        ("owner", new_owner.to_string()),
    ]))
}

pub fn query_total_vault_shares(
    querier: &QuerierWrapper,
    token_contract_addr: &Addr,
) -> StdResult<Uint128> {
    let token_info: TokenInfoResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: token_contract_addr.to_string(),
        msg: to_binary(&Cw20QueryMsg::TokenInfo {})?,
    }))?;
    Ok(token_info.total_supply)
}

fn total_managed_assets(pool: &PoolState) -> Result<Uint128, ContractError> {
    Ok(pool.total_balance.checked_add(pool.total_debt)?)
}

/// Simple linear interest: utilization in bps applied to the outstanding
/// debt, pro-rated per second. Interest lands in `total_debt`, so the share
/// mechanism spreads it across positions without touching any of them.
pub fn accrue_interest(pool: &mut PoolState, now: &Timestamp) -> Result<(), ContractError> {
    let elapsed = now
        .seconds()
        .saturating_sub(pool.last_accrue_timestamp.seconds());
    pool.last_accrue_timestamp = *now;
    if elapsed == 0 || pool.total_debt.is_zero() {
        return Ok(());
    }
    let total_managed = total_managed_assets(pool)?;
    let rate_bps = pool.total_debt.multiply_ratio(10000u128, total_managed);
    let interest: Uint128 = Uint256::from(pool.total_debt)
        .multiply_ratio(
            Uint256::from(rate_bps) * Uint256::from(elapsed),
            Uint256::from(SECONDS_IN_A_YEAR_10000),
        )
        .try_into()?;
    pool.total_debt = pool.total_debt.checked_add(interest)?;
    Ok(())
}

/// Proportional-share mint: bootstraps 1:1 while no shares (or no value)
/// exist, otherwise floor(value * total_share / total_value). The bootstrap
/// branch is what keeps every division's denominator non-zero.
pub fn share_from_value(total_share: Uint256, total_value: Uint256, value: Uint256) -> Uint256 {
    if total_share.is_zero() || total_value.is_zero() {
        return value;
    }
    value.multiply_ratio(total_share, total_value)
}

pub fn value_from_share(total_share: Uint256, total_value: Uint256, share: Uint256) -> Uint256 {
    if total_share.is_zero() {
        return Uint256::zero();
    }
    share.multiply_ratio(total_value, total_share)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetVaultConfig {} => to_binary(&query_vault_config(deps)?),
        QueryMsg::GetPosition { position_id } => to_binary(&query_position(deps, position_id)?),
        QueryMsg::GetPositionsByOwner {
            owner,
            start_after,
            limit,
        } => {
            let owner = deps.api.addr_validate(&owner)?;
            to_binary(&query_positions(deps, start_after, limit, |p| {
                p.owner == owner
            })?)
        }
        QueryMsg::GetPositionsByWorker {
            worker,
            start_after,
            limit,
        } => {
            let worker = deps.api.addr_validate(&worker)?;
            to_binary(&query_positions(deps, start_after, limit, |p| {
                p.worker == worker
            })?)
        }
    }
}

fn query_vault_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let pool = POOL.load(deps.storage)?;
    Ok(ConfigResponse {
        asset_info: config.asset_info,
        vault_token_addr: config.vault_token_addr.to_string(),
        reserve_pool_bps: config.reserve_pool_bps,
        owner: config.owner.to_string(),
        whitelisted_workers: config
            .whitelisted_workers
            .iter()
            .map(|a| a.to_string())
            .collect(),
        total_balance: pool.total_balance,
        total_debt: pool.total_debt,
        total_debt_shares: pool.total_debt_shares,
    })
}

fn query_position(deps: Deps, position_id: u64) -> StdResult<PositionResponse> {
    let pool = POOL.load(deps.storage)?;
    let position = POSITIONS.load(deps.storage, position_id)?;
    position_response(&pool, position)
}

fn query_positions(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
    predicate: impl Fn(&Position) -> bool,
) -> StdResult<PositionsResponse> {
    let pool = POOL.load(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let positions = POSITIONS
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| match item {
            Ok((_, position)) => predicate(position),
            Err(_) => true,
        })
        .take(limit)
        .map(|item| {
            let (_, position) = item?;
            position_response(&pool, position)
        })
        .collect::<StdResult<Vec<PositionResponse>>>()?;

    Ok(PositionsResponse { positions })
}

fn position_response(pool: &PoolState, position: Position) -> StdResult<PositionResponse> {
    let debt_value: Uint128 = value_from_share(
        pool.total_debt_shares.into(),
        pool.total_debt.into(),
        position.debt_share.into(),
    )
    .try_into()
    .map_err(|_| StdError::generic_err("conversion error"))?;

    Ok(PositionResponse {
        id: position.id,
        owner: position.owner.to_string(),
        worker: position.worker.to_string(),
        debt_share: position.debt_share,
        debt_value,
        closed: position.closed,
    })
}
