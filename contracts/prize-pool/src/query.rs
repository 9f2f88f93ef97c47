use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;
use prize_pool_common::reward;
use prize_pool_common::types::ParticipantWeight;

use crate::execute::query_account_snapshot;
use crate::msg::{
    AdminsResponse, DrawHistoryResponse, EstimatedRewardResponse, ParticipantsResponse,
    PositionResponse,
};
use crate::state::{ADMINS, CONFIG, DRAWS, POSITIONS, SPONSORSHIP, STATE};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_pool_state(deps: Deps) -> StdResult<Binary> {
    let state = STATE.load(deps.storage)?;
    to_json_binary(&state)
}

pub fn query_draw(deps: Deps, draw_id: u64) -> StdResult<Binary> {
    let draw = DRAWS.load(deps.storage, draw_id)?;
    to_json_binary(&draw)
}

pub fn query_draw_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let draws: Vec<_> = DRAWS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, draw)| draw)
        .collect();

    to_json_binary(&DrawHistoryResponse { draws })
}

pub fn query_position(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let state = STATE.load(deps.storage)?;
    let position = POSITIONS
        .may_load(deps.storage, &addr)?
        .unwrap_or_else(crate::state::DepositPosition::zero);
    let sponsorship = SPONSORSHIP
        .may_load(deps.storage, &addr)?
        .unwrap_or(Uint128::zero());

    to_json_binary(&PositionResponse {
        address,
        open_balance: position.open_balance,
        committed_balance: position.committed_balance,
        sponsorship_balance: sponsorship,
        locked_until: state.locked_until,
        cooldown_until: state.cooldown_until,
    })
}

/// Cursor-paginated committed weights: the off-chain selection snapshot.
pub fn query_participants(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(100).min(1000) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let participants: Vec<ParticipantWeight> = POSITIONS
        .range(deps.storage, start, None, Order::Ascending)
        .filter_map(|r| r.ok())
        .filter(|(_, position)| !position.committed_balance.is_zero())
        .take(limit)
        .map(|(addr, position)| ParticipantWeight {
            identity: addr.to_string(),
            weight: position.committed_balance,
        })
        .collect();

    to_json_binary(&ParticipantsResponse { participants })
}

pub fn query_admins(deps: Deps) -> StdResult<Binary> {
    let admins = ADMINS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    to_json_binary(&AdminsResponse { admins })
}

/// Reward accrued so far plus the projection over the remaining draw
/// blocks, from the yield oracle's latest snapshot.
pub fn query_estimated_reward(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    let open_draw = DRAWS.load(deps.storage, state.open_draw_id)?;

    let snapshot = query_account_snapshot(&deps.querier, &config.yield_oracle)
        .map_err(|e| StdError::generic_err(e.to_string()))?;

    let seconds_remaining = open_draw
        .end_time
        .seconds()
        .saturating_sub(env.block.time.seconds());
    let blocks_remaining = seconds_remaining / config.seconds_per_block;

    let principal = state.open_total + state.committed_total + state.sponsorship_total;
    let estimate = reward::estimate_reward(
        snapshot.balance,
        snapshot.exchange_rate_mantissa,
        principal,
        open_draw.fee_fraction,
        snapshot.supply_rate_per_block,
        blocks_remaining,
    )
    .map_err(|e| StdError::generic_err(e.to_string()))?;

    to_json_binary(&EstimatedRewardResponse {
        draw_id: open_draw.id,
        end_time: open_draw.end_time,
        seconds_remaining,
        blocks_remaining,
        current: estimate.current,
        projected_interest: estimate.projected_interest,
        estimated: estimate.estimated,
    })
}
