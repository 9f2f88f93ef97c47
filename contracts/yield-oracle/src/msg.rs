use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use prize_pool_common::types::AccountSnapshotResponse;

use crate::state::OracleConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub operators: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Post the pool's latest account snapshot at the yield source.
    /// Operator only.
    SubmitSnapshot {
        balance: Uint128,
        exchange_rate_mantissa: Uint128,
        supply_rate_per_block: Uint128,
    },
    /// Update operator list (admin only).
    UpdateOperators {
        add: Vec<String>,
        remove: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OracleConfig)]
    Config {},

    /// The latest snapshot, None until one has been posted.
    #[returns(Option<AccountSnapshotResponse>)]
    AccountSnapshot {},

    /// The latest per-block supply rate, None until a snapshot has been
    /// posted.
    #[returns(Option<Uint128>)]
    SupplyRate {},
}
