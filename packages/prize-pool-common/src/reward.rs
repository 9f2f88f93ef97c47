use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use thiserror::Error;

/// 10^18 fixed-point scale shared by the exchange rate, the fee fraction
/// and the supply rate.
pub const SCALE: Uint128 = Uint128::new(1_000_000_000_000_000_000u128);

#[derive(Error, Debug, PartialEq)]
pub enum RewardError {
    #[error("fee fraction {fee_fraction} exceeds the fixed-point scale")]
    InvalidFeeFraction { fee_fraction: Uint128 },

    #[error("fixed-point overflow computing {operation}")]
    Overflow { operation: String },
}

#[cw_serde]
pub struct RewardSplit {
    pub gross_winnings: Uint128,
    pub net_reward: Uint128,
    pub fee_amount: Uint128,
}

impl RewardSplit {
    pub fn zero() -> Self {
        RewardSplit {
            gross_winnings: Uint128::zero(),
            net_reward: Uint128::zero(),
            fee_amount: Uint128::zero(),
        }
    }
}

#[cw_serde]
pub struct RewardEstimate {
    pub current: RewardSplit,
    pub projected_interest: Uint128,
    pub estimated: RewardSplit,
}

/// Underlying value of the yield-bearing balance:
/// `balance * exchange_rate / SCALE`, truncating.
pub fn current_value(
    yield_bearing_balance: Uint128,
    exchange_rate_mantissa: Uint128,
) -> Result<Uint128, RewardError> {
    yield_bearing_balance
        .checked_multiply_ratio(exchange_rate_mantissa, SCALE)
        .map_err(|_| RewardError::Overflow {
            operation: "current_value".to_string(),
        })
}

/// Split gross winnings into the winner's net reward and the protocol fee:
/// `net = gross * (SCALE - fee_fraction) / SCALE`, truncating toward zero,
/// `fee = gross - net`. Truncation rounds in the pool's favor and is never
/// allowed to over-credit.
pub fn split_winnings(
    gross_winnings: Uint128,
    fee_fraction: Uint128,
) -> Result<RewardSplit, RewardError> {
    if fee_fraction > SCALE {
        return Err(RewardError::InvalidFeeFraction { fee_fraction });
    }

    let net_reward = gross_winnings
        .checked_multiply_ratio(SCALE - fee_fraction, SCALE)
        .map_err(|_| RewardError::Overflow {
            operation: "net_reward".to_string(),
        })?;

    Ok(RewardSplit {
        gross_winnings,
        net_reward,
        fee_amount: gross_winnings - net_reward,
    })
}

/// The distributable reward right now. A current value below the principal
/// outstanding is a yield-source shortfall and resolves to a zero split,
/// not an error.
pub fn compute_reward(
    yield_bearing_balance: Uint128,
    exchange_rate_mantissa: Uint128,
    total_principal_outstanding: Uint128,
    fee_fraction: Uint128,
) -> Result<RewardSplit, RewardError> {
    let value = current_value(yield_bearing_balance, exchange_rate_mantissa)?;
    let gross_winnings = value.saturating_sub(total_principal_outstanding);
    split_winnings(gross_winnings, fee_fraction)
}

/// Interest expected to accrue over the remaining draw blocks:
/// `blocks_remaining * supply_rate_per_block * current_value / SCALE`.
pub fn projected_interest(
    value: Uint128,
    supply_rate_per_block: Uint128,
    blocks_remaining: u64,
) -> Result<Uint128, RewardError> {
    let interest_rate = supply_rate_per_block
        .checked_mul(Uint128::from(blocks_remaining))
        .map_err(|_| RewardError::Overflow {
            operation: "interest_rate".to_string(),
        })?;
    value
        .checked_multiply_ratio(interest_rate, SCALE)
        .map_err(|_| RewardError::Overflow {
            operation: "projected_interest".to_string(),
        })
}

/// Reward-to-date plus the projection over the remaining draw blocks, both
/// run through the same fee split.
pub fn estimate_reward(
    yield_bearing_balance: Uint128,
    exchange_rate_mantissa: Uint128,
    total_principal_outstanding: Uint128,
    fee_fraction: Uint128,
    supply_rate_per_block: Uint128,
    blocks_remaining: u64,
) -> Result<RewardEstimate, RewardError> {
    let value = current_value(yield_bearing_balance, exchange_rate_mantissa)?;
    let gross_winnings = value.saturating_sub(total_principal_outstanding);
    let current = split_winnings(gross_winnings, fee_fraction)?;

    let projected = projected_interest(value, supply_rate_per_block, blocks_remaining)?;
    let estimated_gross = gross_winnings
        .checked_add(projected)
        .map_err(|_| RewardError::Overflow {
            operation: "estimated_gross".to_string(),
        })?;
    let estimated = split_winnings(estimated_gross, fee_fraction)?;

    Ok(RewardEstimate {
        current,
        projected_interest: projected,
        estimated,
    })
}
