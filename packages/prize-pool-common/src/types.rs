use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Timestamp, Uint128};

/// The lifecycle state of a draw.
#[cw_serde]
pub enum DrawState {
    Open,
    Committed,
    Rewarded,
}

/// One entry of the committed (selection-eligible) population, as returned
/// by the paged participants query.
#[cw_serde]
pub struct ParticipantWeight {
    pub identity: String,
    pub weight: Uint128,
}

/// Response type for querying the yield oracle's account snapshot.
/// Mirrors the StoredSnapshot struct from the oracle contract.
#[cw_serde]
pub struct AccountSnapshotResponse {
    /// Principal + accrued interest held at the yield source, in the
    /// yield-bearing unit.
    pub balance: Uint128,
    /// Yield-bearing-token-to-underlying rate, 1e18 fixed point.
    pub exchange_rate_mantissa: Uint128,
    /// Per-block supply rate, 1e18 fixed point.
    pub supply_rate_per_block: Uint128,
    pub updated_at: Timestamp,
}
