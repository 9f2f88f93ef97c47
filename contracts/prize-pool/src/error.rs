use cosmwasm_std::{StdError, Uint128};
use prize_pool_common::randomness::RandomnessError;
use prize_pool_common::reward::RewardError;
use prize_pool_common::sortition::SortitionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Randomness(#[from] RandomnessError),

    #[error("{0}")]
    Reward(#[from] RewardError),

    #[error("{0}")]
    Sortition(#[from] SortitionError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("no funds sent with deposit")]
    NoFundsSent,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must send the deposit denom, got {denom}")]
    WrongDenom { denom: String },

    #[error("amount must be positive")]
    ZeroAmount,

    #[error("deposits are paused")]
    DepositsPaused,

    #[error("pool is locked until {until}")]
    PoolLocked { until: u64 },

    #[error("pool is not locked")]
    PoolNotLocked,

    #[error("pool already locked until {until}")]
    AlreadyLocked { until: u64 },

    #[error("cooldown active until {until}")]
    CooldownActive { until: u64 },

    #[error("draw {draw_id} has not reached its end time {end_time}")]
    DrawNotEnded { draw_id: u64, end_time: u64 },

    #[error("committed withdrawals restricted until {until}")]
    WithdrawRestricted { until: u64 },

    #[error("insufficient open balance: have {available}, requested {requested}")]
    InsufficientOpenBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("insufficient committed balance: have {available}, requested {requested}")]
    InsufficientCommittedBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("insufficient sponsorship balance: have {available}, requested {requested}")]
    InsufficientSponsorship {
        available: Uint128,
        requested: Uint128,
    },

    #[error("draw {draw_id} is committed but not rewarded")]
    PriorDrawNotRewarded { draw_id: u64 },

    #[error("no committed draw to reward")]
    NoCommittedDraw,

    #[error("draw {draw_id} is not in Committed state")]
    DrawNotCommitted { draw_id: u64 },

    #[error("invalid fee fraction {fee_fraction}: must not exceed the 1e18 scale")]
    InvalidFeeFraction { fee_fraction: Uint128 },

    #[error("invalid duration: {field} must be positive")]
    InvalidDuration { field: String },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },

    #[error("{address} is already an admin")]
    AlreadyAdmin { address: String },

    #[error("{address} is not an admin")]
    NotAdmin { address: String },

    #[error("an admin cannot remove themselves")]
    CannotRemoveSelf,

    #[error("cannot remove the last admin")]
    CannotRemoveLastAdmin,

    #[error("no yield snapshot posted to the oracle")]
    SnapshotUnavailable,
}
