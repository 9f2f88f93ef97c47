use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use prize_pool_common::randomness::CommitReveal;
use prize_pool_common::sortition::SortitionTree;
use prize_pool_common::types::DrawState;

pub const CONFIG: Item<PoolConfig> = Item::new("config");
pub const STATE: Item<PoolState> = Item::new("pool_state");
/// Draw records are retained forever for audit; only state, randomness and
/// winner/reward fields mutate after creation.
pub const DRAWS: Map<u64, Draw> = Map::new("draws");
pub const POSITIONS: Map<&Addr, DepositPosition> = Map::new("positions");
pub const SPONSORSHIP: Map<&Addr, Uint128> = Map::new("sponsorship");
/// Participants with a nonzero open balance in the currently open draw.
/// Drained into committed balances and the sortition tree when the open
/// draw is promoted, so promotion cost tracks draw activity rather than
/// the all-time participant count.
pub const OPEN_DEPOSITORS: Map<&Addr, ()> = Map::new("open_depositors");
/// Committed (selection-eligible) weights. Exclusively owned by the pool;
/// mutated only inside deposit/withdraw/promote/reward handlers.
pub const SORTITION: Item<SortitionTree> = Item::new("sortition");
pub const ADMINS: Map<&Addr, ()> = Map::new("admins");
pub const ADMIN_COUNT: Item<u32> = Item::new("admin_count");

#[cw_serde]
pub struct PoolConfig {
    /// Denom users deposit and withdraw.
    pub deposit_denom: String,
    /// Token Factory denom rewards are minted in:
    /// "factory/{this_contract}/{subdenom}"
    pub accounting_denom: String,
    pub yield_oracle: Addr,
    pub draw_duration_seconds: u64,
    pub lock_duration_seconds: u64,
    pub cooldown_duration_seconds: u64,
    /// Chain block time assumed by the estimated-reward projection.
    pub seconds_per_block: u64,
}

#[cw_serde]
pub struct PoolState {
    /// There is always exactly one open draw.
    pub open_draw_id: u64,
    /// At most one committed draw; stays set (pointing at a Rewarded draw)
    /// until the next promotion replaces it.
    pub committed_draw_id: Option<u64>,
    /// Fee parameters staged for the next draw to open.
    pub next_fee_fraction: Uint128,
    pub next_fee_beneficiary: Addr,
    pub deposits_paused: bool,
    /// While set and in the future, deposits and withdrawals are frozen.
    pub locked_until: Option<Timestamp>,
    /// After a reward, committed withdrawals stay frozen and re-locking is
    /// barred until this passes.
    pub cooldown_until: Option<Timestamp>,
    pub open_total: Uint128,
    pub committed_total: Uint128,
    pub sponsorship_total: Uint128,
    pub total_draws_completed: u64,
    pub total_rewards_distributed: Uint128,
    pub total_fees_collected: Uint128,
}

#[cw_serde]
pub struct Draw {
    pub id: u64,
    pub state: DrawState,
    /// Fraction of gross winnings retained as fee, 1e18 fixed point.
    pub fee_fraction: Uint128,
    pub fee_beneficiary: Addr,
    pub opened_at: Timestamp,
    pub opened_at_height: u64,
    /// Scheduled end; locking is possible only after this passes.
    pub end_time: Timestamp,
    pub randomness: CommitReveal,
    pub committed_at: Option<Timestamp>,
    /// Snapshot of the eligible population taken at promotion.
    pub committed_total_weight: Option<Uint128>,
    pub committed_participants: Option<u32>,
    pub winner: Option<Addr>,
    pub net_reward: Uint128,
    pub fee_amount: Uint128,
    pub rewarded_at: Option<Timestamp>,
}

#[cw_serde]
pub struct DepositPosition {
    /// Deposited during the currently open draw; not selection-eligible.
    pub open_balance: Uint128,
    /// Eligible weight; mirrored in the sortition tree.
    pub committed_balance: Uint128,
}

impl DepositPosition {
    pub fn zero() -> Self {
        DepositPosition {
            open_balance: Uint128::zero(),
            committed_balance: Uint128::zero(),
        }
    }
}
