use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::Item;

pub const CONFIG: Item<OracleConfig> = Item::new("config");
pub const SNAPSHOT: Item<StoredSnapshot> = Item::new("snapshot");

#[cw_serde]
pub struct OracleConfig {
    pub admin: Addr,
    pub operators: Vec<Addr>,
}

/// Latest account snapshot of the pool's holdings at the yield source.
/// Overwritten on every submission; consumers only ever need the freshest
/// reading.
#[cw_serde]
pub struct StoredSnapshot {
    /// Principal + accrued interest, in the yield-bearing unit.
    pub balance: Uint128,
    /// Yield-bearing-token-to-underlying rate, 1e18 fixed point.
    pub exchange_rate_mantissa: Uint128,
    /// Per-block supply rate, 1e18 fixed point.
    pub supply_rate_per_block: Uint128,
    pub submitted_at: Timestamp,
    pub submitted_by: Addr,
}
