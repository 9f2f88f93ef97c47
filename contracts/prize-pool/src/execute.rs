use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Coin, CosmosMsg, DepsMut, Env, Event, MessageInfo,
    Order, QuerierWrapper, QueryRequest, StdResult, Storage, Timestamp, Uint128, WasmQuery,
};
use injective_cosmwasm::{create_mint_tokens_msg, create_new_denom_msg, InjectiveMsgWrapper};
use prize_pool_common::randomness::{self, CommitReveal};
use prize_pool_common::reward::{self, RewardSplit};
use prize_pool_common::types::{AccountSnapshotResponse, DrawState};

use crate::error::ContractError;
use crate::msg::OracleQueryMsg;
use crate::state::{
    DepositPosition, Draw, PoolState, ADMINS, ADMIN_COUNT, CONFIG, DRAWS, OPEN_DEPOSITORS,
    POSITIONS, SORTITION, SPONSORSHIP, STATE,
};

pub type ContractResponse = cosmwasm_std::Response<InjectiveMsgWrapper>;

/// Create the Token Factory denom during instantiation.
pub fn create_denom(
    env: &Env,
    subdenom: &str,
) -> Result<(CosmosMsg<InjectiveMsgWrapper>, String), ContractError> {
    let contract_addr = env.contract.address.to_string();
    let msg = create_new_denom_msg(contract_addr.clone(), subdenom.to_string());
    let full_denom = format!("factory/{}/{}", contract_addr, subdenom);
    Ok((msg, full_denom))
}

pub fn ensure_admin(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if !ADMINS.has(storage, sender) {
        return Err(ContractError::Unauthorized {
            reason: format!("{} is not a pool admin", sender),
        });
    }
    Ok(())
}

fn ensure_unlocked(state: &PoolState, now: Timestamp) -> Result<(), ContractError> {
    if let Some(until) = state.locked_until {
        if now < until {
            return Err(ContractError::PoolLocked {
                until: until.seconds(),
            });
        }
    }
    Ok(())
}

/// Validate funds: exactly one coin of the expected denom, positive amount.
fn one_coin(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != denom {
        return Err(ContractError::WrongDenom {
            denom: sent.denom.clone(),
        });
    }
    if sent.amount.is_zero() {
        return Err(ContractError::NoFundsSent);
    }
    Ok(sent.amount)
}

/// Query the yield oracle's latest account snapshot.
pub fn query_account_snapshot(
    querier: &QuerierWrapper,
    oracle: &Addr,
) -> Result<AccountSnapshotResponse, ContractError> {
    let request = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: oracle.to_string(),
        msg: to_json_binary(&OracleQueryMsg::AccountSnapshot {})?,
    });
    let snapshot: Option<AccountSnapshotResponse> = querier.query(&request)?;
    snapshot.ok_or(ContractError::SnapshotUnavailable)
}

/// Deposit into the currently open draw.
pub fn deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<ContractResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;

    if state.deposits_paused {
        return Err(ContractError::DepositsPaused);
    }
    ensure_unlocked(&state, env.block.time)?;

    let amount = one_coin(&info, &config.deposit_denom)?;

    let mut position = POSITIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_else(DepositPosition::zero);
    position.open_balance += amount;
    POSITIONS.save(deps.storage, &info.sender, &position)?;
    OPEN_DEPOSITORS.save(deps.storage, &info.sender, &())?;

    state.open_total += amount;
    STATE.save(deps.storage, &state)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "deposit")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("pool_deposit")
                .add_attribute("user", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("draw_id", state.open_draw_id.to_string())
                .add_attribute("open_balance", position.open_balance.to_string()),
        ))
}

/// Deposit sponsorship: backs the pool's yield but never enters selection.
pub fn deposit_sponsorship(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<ContractResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;

    if state.deposits_paused {
        return Err(ContractError::DepositsPaused);
    }
    ensure_unlocked(&state, env.block.time)?;

    let amount = one_coin(&info, &config.deposit_denom)?;

    let balance = SPONSORSHIP
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(Uint128::zero());
    let balance = balance + amount;
    SPONSORSHIP.save(deps.storage, &info.sender, &balance)?;

    state.sponsorship_total += amount;
    STATE.save(deps.storage, &state)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "deposit_sponsorship")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("pool_sponsorship_deposit")
                .add_attribute("user", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("balance", balance.to_string()),
        ))
}

/// Withdraw from the open (not yet eligible) balance.
pub fn withdraw_open_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<ContractResponse, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;
    ensure_unlocked(&state, env.block.time)?;

    let mut position = POSITIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_else(DepositPosition::zero);
    if amount > position.open_balance {
        return Err(ContractError::InsufficientOpenBalance {
            available: position.open_balance,
            requested: amount,
        });
    }
    position.open_balance -= amount;
    POSITIONS.save(deps.storage, &info.sender, &position)?;
    if position.open_balance.is_zero() {
        OPEN_DEPOSITORS.remove(deps.storage, &info.sender);
    }

    state.open_total -= amount;
    STATE.save(deps.storage, &state)?;

    let send_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(amount.u128(), &config.deposit_denom),
    };

    Ok(ContractResponse::new()
        .add_message(send_msg)
        .add_attribute("action", "withdraw_open_deposit")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("pool_withdraw")
                .add_attribute("user", info.sender.to_string())
                .add_attribute("bucket", "open")
                .add_attribute("amount", amount.to_string()),
        ))
}

/// Withdraw from the committed (eligible) balance. Rejected inside the
/// lock and cooldown windows around draw resolution.
pub fn withdraw_committed_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<ContractResponse, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;
    ensure_unlocked(&state, env.block.time)?;
    if let Some(until) = state.cooldown_until {
        if env.block.time < until {
            return Err(ContractError::WithdrawRestricted {
                until: until.seconds(),
            });
        }
    }

    let mut position = POSITIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_else(DepositPosition::zero);
    if amount > position.committed_balance {
        return Err(ContractError::InsufficientCommittedBalance {
            available: position.committed_balance,
            requested: amount,
        });
    }
    position.committed_balance -= amount;
    POSITIONS.save(deps.storage, &info.sender, &position)?;

    let mut tree = SORTITION.load(deps.storage)?;
    tree.insert_or_update(info.sender.as_str(), position.committed_balance);
    SORTITION.save(deps.storage, &tree)?;

    state.committed_total -= amount;
    STATE.save(deps.storage, &state)?;

    let send_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(amount.u128(), &config.deposit_denom),
    };

    Ok(ContractResponse::new()
        .add_message(send_msg)
        .add_attribute("action", "withdraw_committed_deposit")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("pool_withdraw")
                .add_attribute("user", info.sender.to_string())
                .add_attribute("bucket", "committed")
                .add_attribute("amount", amount.to_string()),
        ))
}

pub fn withdraw_sponsorship(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<ContractResponse, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;
    ensure_unlocked(&state, env.block.time)?;

    let balance = SPONSORSHIP
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(Uint128::zero());
    if amount > balance {
        return Err(ContractError::InsufficientSponsorship {
            available: balance,
            requested: amount,
        });
    }
    let balance = balance - amount;
    if balance.is_zero() {
        SPONSORSHIP.remove(deps.storage, &info.sender);
    } else {
        SPONSORSHIP.save(deps.storage, &info.sender, &balance)?;
    }

    state.sponsorship_total -= amount;
    STATE.save(deps.storage, &state)?;

    let send_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(amount.u128(), &config.deposit_denom),
    };

    Ok(ContractResponse::new()
        .add_message(send_msg)
        .add_attribute("action", "withdraw_sponsorship")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("amount", amount.to_string()))
}

/// Promote the open draw to committed and open the next one. Admin only.
pub fn open_next_draw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    next_secret_hash: String,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let response = do_open_next_draw(deps, &env, next_secret_hash)?;
    Ok(response.add_attribute("action", "open_next_draw"))
}

fn do_open_next_draw(
    deps: DepsMut,
    env: &Env,
    next_secret_hash: String,
) -> Result<ContractResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;

    if let Some(committed_id) = state.committed_draw_id {
        let committed = DRAWS.load(deps.storage, committed_id)?;
        if committed.state != DrawState::Rewarded {
            return Err(ContractError::PriorDrawNotRewarded {
                draw_id: committed_id,
            });
        }
    }

    // Validate the new commitment before touching any balances.
    let mut next_randomness = CommitReveal::new();
    next_randomness.commit(next_secret_hash.clone())?;

    // Promote: fold every open balance into the committed balance and the
    // sortition tree. Only participants who deposited during this draw are
    // visited.
    let mut open_draw = DRAWS.load(deps.storage, state.open_draw_id)?;
    let mut tree = SORTITION.load(deps.storage)?;

    let depositors: Vec<Addr> = OPEN_DEPOSITORS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    for addr in &depositors {
        let mut position = POSITIONS.load(deps.storage, addr)?;
        position.committed_balance += position.open_balance;
        position.open_balance = Uint128::zero();
        tree.insert_or_update(addr.as_str(), position.committed_balance);
        POSITIONS.save(deps.storage, addr, &position)?;
        OPEN_DEPOSITORS.remove(deps.storage, addr);
    }

    state.committed_total += state.open_total;
    state.open_total = Uint128::zero();

    open_draw.state = DrawState::Committed;
    open_draw.committed_at = Some(env.block.time);
    open_draw.committed_total_weight = Some(tree.total());
    open_draw.committed_participants = Some(tree.population());
    DRAWS.save(deps.storage, open_draw.id, &open_draw)?;
    SORTITION.save(deps.storage, &tree)?;
    state.committed_draw_id = Some(open_draw.id);

    // Open the next draw with the staged fee parameters.
    let next_id = state.open_draw_id + 1;
    let end_time = env.block.time.plus_seconds(config.draw_duration_seconds);
    let draw = Draw {
        id: next_id,
        state: DrawState::Open,
        fee_fraction: state.next_fee_fraction,
        fee_beneficiary: state.next_fee_beneficiary.clone(),
        opened_at: env.block.time,
        opened_at_height: env.block.height,
        end_time,
        randomness: next_randomness,
        committed_at: None,
        committed_total_weight: None,
        committed_participants: None,
        winner: None,
        net_reward: Uint128::zero(),
        fee_amount: Uint128::zero(),
        rewarded_at: None,
    };
    DRAWS.save(deps.storage, next_id, &draw)?;
    state.open_draw_id = next_id;
    STATE.save(deps.storage, &state)?;

    Ok(ContractResponse::new()
        .add_attribute("promoted_draw_id", open_draw.id.to_string())
        .add_attribute("opened_draw_id", next_id.to_string())
        .add_event(
            Event::new("pool_draw_committed")
                .add_attribute("draw_id", open_draw.id.to_string())
                .add_attribute("total_weight", tree.total().to_string())
                .add_attribute("participants", tree.population().to_string()),
        )
        .add_event(
            Event::new("pool_draw_opened")
                .add_attribute("draw_id", next_id.to_string())
                .add_attribute("secret_hash", next_secret_hash)
                .add_attribute("fee_fraction", state.next_fee_fraction.to_string())
                .add_attribute("fee_beneficiary", state.next_fee_beneficiary.to_string())
                .add_attribute("end_time", end_time.seconds().to_string()),
        ))
}

/// Freeze balances once the open draw's scheduled end has passed, pinning
/// the committed weights between snapshot and reveal. Admin only.
pub fn lock_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;

    let open_draw = DRAWS.load(deps.storage, state.open_draw_id)?;
    if env.block.time < open_draw.end_time {
        return Err(ContractError::DrawNotEnded {
            draw_id: open_draw.id,
            end_time: open_draw.end_time.seconds(),
        });
    }
    if let Some(until) = state.locked_until {
        if env.block.time < until {
            return Err(ContractError::AlreadyLocked {
                until: until.seconds(),
            });
        }
    }
    if let Some(until) = state.cooldown_until {
        if env.block.time < until {
            return Err(ContractError::CooldownActive {
                until: until.seconds(),
            });
        }
    }

    let locked_until = env.block.time.plus_seconds(config.lock_duration_seconds);
    state.locked_until = Some(locked_until);
    STATE.save(deps.storage, &state)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "lock_tokens")
        .add_event(
            Event::new("pool_locked")
                .add_attribute("locked_until", locked_until.seconds().to_string())
                .add_attribute("open_draw_id", state.open_draw_id.to_string()),
        ))
}

/// Release an active lock early and start the cooldown. Admin only.
pub fn unlock_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;

    match state.locked_until {
        Some(until) if env.block.time < until => {}
        _ => return Err(ContractError::PoolNotLocked),
    }

    state.locked_until = None;
    let cooldown_until = env.block.time.plus_seconds(config.cooldown_duration_seconds);
    state.cooldown_until = Some(cooldown_until);
    STATE.save(deps.storage, &state)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "unlock_tokens")
        .add_event(
            Event::new("pool_unlocked")
                .add_attribute("cooldown_until", cooldown_until.seconds().to_string()),
        ))
}

/// Reveal the committed draw's secret, select the winner and credit winner
/// and fee beneficiary. Admin only.
pub fn reward(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    secret: String,
    salt: String,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let response = do_reward(deps, &env, &secret, &salt)?;
    Ok(response.add_attribute("action", "reward"))
}

/// Atomic reward then open-next-draw: external callers must never observe a
/// resolved committed draw with no open draw, since that gap would freeze
/// all new deposits.
pub fn reward_and_open_next_draw(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    secret: String,
    salt: String,
    next_secret_hash: String,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let reward_resp = do_reward(deps.branch(), &env, &secret, &salt)?;
    let open_resp = do_open_next_draw(deps, &env, next_secret_hash)?;

    let mut response = ContractResponse::new().add_attribute("action", "reward_and_open_next_draw");
    response.messages.extend(reward_resp.messages);
    response.messages.extend(open_resp.messages);
    response.attributes.extend(reward_resp.attributes);
    response.attributes.extend(open_resp.attributes);
    response.events.extend(reward_resp.events);
    response.events.extend(open_resp.events);
    Ok(response)
}

/// The draw resolution itself:
/// 1. Verify the reveal pre-image against the commitment made at open.
/// 2. Fold in entropy from the reveal block and reduce to a pick.
/// 3. Walk the sortition tree to the winner.
/// 4. Compute the reward split from the yield oracle snapshot.
/// 5. Mint the net reward to the winner and the fee to the beneficiary,
///    all inside one response.
/// An empty committed population resolves as a zero-reward draw; the
/// accrued yield simply rolls into the next draw's base.
fn do_reward(
    deps: DepsMut,
    env: &Env,
    secret_hex: &str,
    salt_hex: &str,
) -> Result<ContractResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;

    let committed_id = state.committed_draw_id.ok_or(ContractError::NoCommittedDraw)?;
    let mut draw = DRAWS.load(deps.storage, committed_id)?;
    if draw.state != DrawState::Committed {
        return Err(ContractError::DrawNotCommitted {
            draw_id: committed_id,
        });
    }

    // Resolution happens under an active lock; the lock is what pins the
    // committed weights between snapshot and reveal.
    match state.locked_until {
        Some(until) if env.block.time < until => {}
        _ => return Err(ContractError::PoolNotLocked),
    }

    let secret = hex::decode(secret_hex).map_err(|_| ContractError::InvalidHex {
        field: "secret".to_string(),
    })?;
    let salt = hex::decode(salt_hex).map_err(|_| ContractError::InvalidHex {
        field: "salt".to_string(),
    })?;

    let entropy = randomness::block_entropy(env.block.height, env.block.time.nanos());
    let randomness_bytes = draw.randomness.reveal(&secret, &salt, &entropy)?;

    let tree = SORTITION.load(deps.storage)?;
    let total_weight = tree.total();

    let mut messages: Vec<CosmosMsg<InjectiveMsgWrapper>> = Vec::new();
    let mut winner: Option<Addr> = None;
    let mut split = RewardSplit::zero();
    let mut pick_value = Uint128::zero();

    if !total_weight.is_zero() {
        pick_value = Uint128::new(randomness::pick(&randomness_bytes, total_weight.u128()));
        let selected = tree.select(pick_value)?;
        let winner_addr = deps.api.addr_validate(selected)?;

        let snapshot = query_account_snapshot(&deps.querier, &config.yield_oracle)?;
        let principal = state.open_total + state.committed_total + state.sponsorship_total;
        split = reward::compute_reward(
            snapshot.balance,
            snapshot.exchange_rate_mantissa,
            principal,
            draw.fee_fraction,
        )?;

        if !split.net_reward.is_zero() {
            messages.push(create_mint_tokens_msg(
                env.contract.address.clone(),
                Coin {
                    denom: config.accounting_denom.clone(),
                    amount: split.net_reward,
                },
                winner_addr.to_string(),
            ));
        }
        if !split.fee_amount.is_zero() {
            messages.push(create_mint_tokens_msg(
                env.contract.address.clone(),
                Coin {
                    denom: config.accounting_denom.clone(),
                    amount: split.fee_amount,
                },
                draw.fee_beneficiary.to_string(),
            ));
        }
        winner = Some(winner_addr);
    }

    draw.state = DrawState::Rewarded;
    draw.winner = winner.clone();
    draw.net_reward = split.net_reward;
    draw.fee_amount = split.fee_amount;
    draw.rewarded_at = Some(env.block.time);
    DRAWS.save(deps.storage, committed_id, &draw)?;

    state.locked_until = None;
    state.cooldown_until = Some(env.block.time.plus_seconds(config.cooldown_duration_seconds));
    state.total_draws_completed += 1;
    state.total_rewards_distributed += split.net_reward;
    state.total_fees_collected += split.fee_amount;
    STATE.save(deps.storage, &state)?;

    let winner_attr = winner
        .as_ref()
        .map(|a| a.to_string())
        .unwrap_or_else(|| "none".to_string());

    let mut response = ContractResponse::new()
        .add_attribute("draw_id", committed_id.to_string())
        .add_attribute("winner", winner_attr.clone())
        .add_attribute("net_reward", split.net_reward.to_string());
    for msg in messages {
        response = response.add_message(msg);
    }
    Ok(response.add_event(
        Event::new("pool_draw_rewarded")
            .add_attribute("draw_id", committed_id.to_string())
            .add_attribute("winner", winner_attr)
            .add_attribute("gross_winnings", split.gross_winnings.to_string())
            .add_attribute("net_reward", split.net_reward.to_string())
            .add_attribute("fee_amount", split.fee_amount.to_string())
            .add_attribute("total_weight", total_weight.to_string())
            .add_attribute("winning_pick", pick_value.to_string())
            .add_attribute("randomness", hex::encode(randomness_bytes))
            .add_attribute("timestamp", env.block.time.seconds().to_string()),
    ))
}

/// Stage the fee fraction for the next draw to open. Admin only.
pub fn set_next_fee_fraction(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    fee_fraction: Uint128,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    if fee_fraction > reward::SCALE {
        return Err(ContractError::InvalidFeeFraction { fee_fraction });
    }

    let mut state = STATE.load(deps.storage)?;
    state.next_fee_fraction = fee_fraction;
    STATE.save(deps.storage, &state)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "set_next_fee_fraction")
        .add_attribute("fee_fraction", fee_fraction.to_string()))
}

/// Stage the fee beneficiary for the next draw to open. Admin only.
pub fn set_next_fee_beneficiary(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    beneficiary: String,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let beneficiary = deps.api.addr_validate(&beneficiary)?;

    let mut state = STATE.load(deps.storage)?;
    state.next_fee_beneficiary = beneficiary.clone();
    STATE.save(deps.storage, &state)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "set_next_fee_beneficiary")
        .add_attribute("beneficiary", beneficiary.to_string()))
}

pub fn add_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let addr = deps.api.addr_validate(&address)?;

    if ADMINS.has(deps.storage, &addr) {
        return Err(ContractError::AlreadyAdmin { address });
    }
    ADMINS.save(deps.storage, &addr, &())?;
    let count = ADMIN_COUNT.load(deps.storage)?;
    ADMIN_COUNT.save(deps.storage, &(count + 1))?;

    Ok(ContractResponse::new()
        .add_attribute("action", "add_admin")
        .add_attribute("admin", addr.to_string()))
}

/// Remove an admin. The admin set never empties: the last admin cannot be
/// removed and no admin can remove themselves.
pub fn remove_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let addr = deps.api.addr_validate(&address)?;

    if !ADMINS.has(deps.storage, &addr) {
        return Err(ContractError::NotAdmin { address });
    }
    let count = ADMIN_COUNT.load(deps.storage)?;
    if count <= 1 {
        return Err(ContractError::CannotRemoveLastAdmin);
    }
    if addr == info.sender {
        return Err(ContractError::CannotRemoveSelf);
    }
    ADMINS.remove(deps.storage, &addr);
    ADMIN_COUNT.save(deps.storage, &(count - 1))?;

    Ok(ContractResponse::new()
        .add_attribute("action", "remove_admin")
        .add_attribute("admin", addr.to_string()))
}

pub fn pause_deposits(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let mut state = STATE.load(deps.storage)?;
    state.deposits_paused = true;
    STATE.save(deps.storage, &state)?;
    Ok(ContractResponse::new().add_attribute("action", "pause_deposits"))
}

pub fn unpause_deposits(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;
    let mut state = STATE.load(deps.storage)?;
    state.deposits_paused = false;
    STATE.save(deps.storage, &state)?;
    Ok(ContractResponse::new().add_attribute("action", "unpause_deposits"))
}
