use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{StoredSnapshot, CONFIG, SNAPSHOT};

/// Post the latest account snapshot. Only operators can call this.
pub fn submit_snapshot(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    balance: Uint128,
    exchange_rate_mantissa: Uint128,
    supply_rate_per_block: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config.operators.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only operators can submit snapshots".to_string(),
        });
    }

    // A zero rate would make every downstream valuation collapse to zero.
    if exchange_rate_mantissa.is_zero() {
        return Err(ContractError::ZeroExchangeRate);
    }

    let snapshot = StoredSnapshot {
        balance,
        exchange_rate_mantissa,
        supply_rate_per_block,
        submitted_at: env.block.time,
        submitted_by: info.sender.clone(),
    };
    SNAPSHOT.save(deps.storage, &snapshot)?;

    Ok(Response::new()
        .add_attribute("action", "submit_snapshot")
        .add_attribute("submitted_by", info.sender.to_string())
        .add_event(
            Event::new("yield_snapshot_submitted")
                .add_attribute("balance", balance.to_string())
                .add_attribute("exchange_rate_mantissa", exchange_rate_mantissa.to_string())
                .add_attribute("supply_rate_per_block", supply_rate_per_block.to_string())
                .add_attribute("submitted_by", info.sender.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Update the operator list. Admin only.
pub fn update_operators(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update operators".to_string(),
        });
    }

    // Remove operators
    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.operators.retain(|a| a != addr);
    }

    // Add operators
    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.operators.contains(&addr) {
            config.operators.push(addr);
        }
    }

    if config.operators.is_empty() {
        return Err(ContractError::NoOperators);
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_operators")
        .add_attribute("added", add.join(","))
        .add_attribute("removed", remove.join(",")))
}
