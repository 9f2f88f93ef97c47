use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, StdResult, Uint128};
use cw2::{get_contract_version, set_contract_version};
use prize_pool_common::randomness::CommitReveal;
use prize_pool_common::reward::SCALE;
use prize_pool_common::sortition::SortitionTree;
use prize_pool_common::types::DrawState;

use crate::error::ContractError;
use crate::execute::{self, ContractResponse};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{
    Draw, PoolConfig, PoolState, ADMINS, ADMIN_COUNT, CONFIG, DRAWS, SORTITION, STATE,
};

const CONTRACT_NAME: &str = "crates.io:prize-pool";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<ContractResponse, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    for (field, value) in [
        ("draw_duration_seconds", msg.draw_duration_seconds),
        ("lock_duration_seconds", msg.lock_duration_seconds),
        ("cooldown_duration_seconds", msg.cooldown_duration_seconds),
        ("seconds_per_block", msg.seconds_per_block),
    ] {
        if value == 0 {
            return Err(ContractError::InvalidDuration {
                field: field.to_string(),
            });
        }
    }
    if msg.fee_fraction > SCALE {
        return Err(ContractError::InvalidFeeFraction {
            fee_fraction: msg.fee_fraction,
        });
    }

    let fee_beneficiary = deps.api.addr_validate(&msg.fee_beneficiary)?;

    // Create the Token Factory accounting denom.
    let (create_denom_msg, accounting_denom) = execute::create_denom(&env, &msg.accounting_subdenom)?;

    let config = PoolConfig {
        deposit_denom: msg.deposit_denom,
        accounting_denom: accounting_denom.clone(),
        yield_oracle: deps.api.addr_validate(&msg.yield_oracle)?,
        draw_duration_seconds: msg.draw_duration_seconds,
        lock_duration_seconds: msg.lock_duration_seconds,
        cooldown_duration_seconds: msg.cooldown_duration_seconds,
        seconds_per_block: msg.seconds_per_block,
    };
    CONFIG.save(deps.storage, &config)?;

    ADMINS.save(deps.storage, &info.sender, &())?;
    ADMIN_COUNT.save(deps.storage, &1u32)?;
    SORTITION.save(deps.storage, &SortitionTree::new())?;

    // The first draw opens immediately, so deposits are accepted from the
    // very first block.
    let mut randomness = CommitReveal::new();
    randomness.commit(msg.initial_secret_hash.clone())?;
    let end_time = env.block.time.plus_seconds(msg.draw_duration_seconds);
    let draw = Draw {
        id: 1,
        state: DrawState::Open,
        fee_fraction: msg.fee_fraction,
        fee_beneficiary: fee_beneficiary.clone(),
        opened_at: env.block.time,
        opened_at_height: env.block.height,
        end_time,
        randomness,
        committed_at: None,
        committed_total_weight: None,
        committed_participants: None,
        winner: None,
        net_reward: Uint128::zero(),
        fee_amount: Uint128::zero(),
        rewarded_at: None,
    };
    DRAWS.save(deps.storage, 1, &draw)?;

    let state = PoolState {
        open_draw_id: 1,
        committed_draw_id: None,
        next_fee_fraction: msg.fee_fraction,
        next_fee_beneficiary: fee_beneficiary,
        deposits_paused: false,
        locked_until: None,
        cooldown_until: None,
        open_total: Uint128::zero(),
        committed_total: Uint128::zero(),
        sponsorship_total: Uint128::zero(),
        total_draws_completed: 0,
        total_rewards_distributed: Uint128::zero(),
        total_fees_collected: Uint128::zero(),
    };
    STATE.save(deps.storage, &state)?;

    Ok(ContractResponse::new()
        .add_message(create_denom_msg)
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "prize-pool")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("accounting_denom", accounting_denom)
        .add_attribute("secret_hash", msg.initial_secret_hash)
        .add_attribute("end_time", end_time.seconds().to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<ContractResponse, ContractError> {
    match msg {
        ExecuteMsg::Deposit {} => execute::deposit(deps, env, info),
        ExecuteMsg::DepositSponsorship {} => execute::deposit_sponsorship(deps, env, info),
        ExecuteMsg::WithdrawOpenDeposit { amount } => {
            execute::withdraw_open_deposit(deps, env, info, amount)
        }
        ExecuteMsg::WithdrawCommittedDeposit { amount } => {
            execute::withdraw_committed_deposit(deps, env, info, amount)
        }
        ExecuteMsg::WithdrawSponsorship { amount } => {
            execute::withdraw_sponsorship(deps, env, info, amount)
        }
        ExecuteMsg::OpenNextDraw { next_secret_hash } => {
            execute::open_next_draw(deps, env, info, next_secret_hash)
        }
        ExecuteMsg::LockTokens {} => execute::lock_tokens(deps, env, info),
        ExecuteMsg::UnlockTokens {} => execute::unlock_tokens(deps, env, info),
        ExecuteMsg::Reward { secret, salt } => execute::reward(deps, env, info, secret, salt),
        ExecuteMsg::RewardAndOpenNextDraw {
            secret,
            salt,
            next_secret_hash,
        } => execute::reward_and_open_next_draw(deps, env, info, secret, salt, next_secret_hash),
        ExecuteMsg::SetNextFeeFraction { fee_fraction } => {
            execute::set_next_fee_fraction(deps, env, info, fee_fraction)
        }
        ExecuteMsg::SetNextFeeBeneficiary { beneficiary } => {
            execute::set_next_fee_beneficiary(deps, env, info, beneficiary)
        }
        ExecuteMsg::AddAdmin { address } => execute::add_admin(deps, env, info, address),
        ExecuteMsg::RemoveAdmin { address } => execute::remove_admin(deps, env, info, address),
        ExecuteMsg::PauseDeposits {} => execute::pause_deposits(deps, env, info),
        ExecuteMsg::UnpauseDeposits {} => execute::unpause_deposits(deps, env, info),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::PoolState {} => query::query_pool_state(deps),
        QueryMsg::Draw { draw_id } => query::query_draw(deps, draw_id),
        QueryMsg::DrawHistory { start_after, limit } => {
            query::query_draw_history(deps, start_after, limit)
        }
        QueryMsg::Position { address } => query::query_position(deps, address),
        QueryMsg::Participants { start_after, limit } => {
            query::query_participants(deps, start_after, limit)
        }
        QueryMsg::Admins {} => query::query_admins(deps),
        QueryMsg::EstimatedReward {} => query::query_estimated_reward(deps, env),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<ContractResponse, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
