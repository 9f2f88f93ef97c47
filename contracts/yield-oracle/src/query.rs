use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult, Uint128};
use prize_pool_common::types::AccountSnapshotResponse;

use crate::state::{CONFIG, SNAPSHOT};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_account_snapshot(deps: Deps) -> StdResult<Binary> {
    let snapshot = SNAPSHOT.may_load(deps.storage)?.map(|s| AccountSnapshotResponse {
        balance: s.balance,
        exchange_rate_mantissa: s.exchange_rate_mantissa,
        supply_rate_per_block: s.supply_rate_per_block,
        updated_at: s.submitted_at,
    });
    to_json_binary(&snapshot)
}

pub fn query_supply_rate(deps: Deps) -> StdResult<Binary> {
    let rate: Option<Uint128> = SNAPSHOT
        .may_load(deps.storage)?
        .map(|s| s.supply_rate_per_block);
    to_json_binary(&rate)
}
