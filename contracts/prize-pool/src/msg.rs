use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};
use prize_pool_common::reward::RewardSplit;
use prize_pool_common::types::ParticipantWeight;

use crate::state::{Draw, PoolConfig, PoolState};

#[cw_serde]
pub struct InstantiateMsg {
    pub yield_oracle: String,
    pub deposit_denom: String,
    /// Subdenom for the Token Factory accounting token, e.g. "DAIP"
    pub accounting_subdenom: String,
    /// Fee fraction for the first draw, 1e18 fixed point, at most 1e18.
    pub fee_fraction: Uint128,
    pub fee_beneficiary: String,
    pub draw_duration_seconds: u64,
    pub lock_duration_seconds: u64,
    pub cooldown_duration_seconds: u64,
    pub seconds_per_block: u64,
    /// sha256(secret, salt) for the first draw, hex-encoded.
    pub initial_secret_hash: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit into the open draw. Send the deposit denom in info.funds.
    Deposit {},
    /// Deposit sponsorship: backs the pool's yield but never enters
    /// winner selection. Send the deposit denom in info.funds.
    DepositSponsorship {},
    /// Withdraw from the open (not yet eligible) balance.
    WithdrawOpenDeposit { amount: Uint128 },
    /// Withdraw from the committed (eligible) balance. Rejected inside the
    /// lock and cooldown windows around draw resolution.
    WithdrawCommittedDeposit { amount: Uint128 },
    WithdrawSponsorship { amount: Uint128 },
    /// Promote the open draw to committed and open a new draw carrying the
    /// staged fee parameters. Admin only. Fails while a committed draw is
    /// still unrewarded.
    OpenNextDraw {
        /// sha256(secret, salt) for the new draw, hex-encoded.
        next_secret_hash: String,
    },
    /// Freeze balances once the open draw's end time has passed. Admin only.
    LockTokens {},
    /// Release an active lock early and start the cooldown. Admin only.
    UnlockTokens {},
    /// Reveal the committed draw's secret, select the winner and credit
    /// winner and fee beneficiary. Admin only.
    Reward {
        /// hex-encoded
        secret: String,
        /// hex-encoded
        salt: String,
    },
    /// Atomic reward followed by open-next-draw, so no caller ever
    /// observes a resolved committed draw without an open draw.
    RewardAndOpenNextDraw {
        secret: String,
        salt: String,
        next_secret_hash: String,
    },
    /// Stage the fee fraction for the next draw to open. Admin only.
    SetNextFeeFraction { fee_fraction: Uint128 },
    /// Stage the fee beneficiary for the next draw to open. Admin only.
    SetNextFeeBeneficiary { beneficiary: String },
    AddAdmin { address: String },
    RemoveAdmin { address: String },
    PauseDeposits {},
    UnpauseDeposits {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PoolConfig)]
    Config {},
    #[returns(PoolState)]
    PoolState {},
    /// Persisted draw record, retained forever for audit.
    #[returns(Draw)]
    Draw { draw_id: u64 },
    #[returns(DrawHistoryResponse)]
    DrawHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(PositionResponse)]
    Position { address: String },
    /// Cursor-paginated committed (selection-eligible) weights, for
    /// off-chain consumers rebuilding a selection snapshot.
    #[returns(ParticipantsResponse)]
    Participants {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(AdminsResponse)]
    Admins {},
    /// Reward accrued so far plus the projection over the remaining draw
    /// blocks, from the yield oracle's latest snapshot.
    #[returns(EstimatedRewardResponse)]
    EstimatedReward {},
}

/// Query message for the yield oracle contract.
#[cw_serde]
pub enum OracleQueryMsg {
    AccountSnapshot {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct DrawHistoryResponse {
    pub draws: Vec<Draw>,
}

#[cw_serde]
pub struct PositionResponse {
    pub address: String,
    pub open_balance: Uint128,
    pub committed_balance: Uint128,
    pub sponsorship_balance: Uint128,
    pub locked_until: Option<Timestamp>,
    pub cooldown_until: Option<Timestamp>,
}

#[cw_serde]
pub struct ParticipantsResponse {
    pub participants: Vec<ParticipantWeight>,
}

#[cw_serde]
pub struct AdminsResponse {
    pub admins: Vec<Addr>,
}

#[cw_serde]
pub struct EstimatedRewardResponse {
    pub draw_id: u64,
    pub end_time: Timestamp,
    pub seconds_remaining: u64,
    pub blocks_remaining: u64,
    pub current: RewardSplit,
    pub projected_interest: Uint128,
    pub estimated: RewardSplit,
}
