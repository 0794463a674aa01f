#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::{error::ContractError, msg::*, state::*};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let token_contract = deps.api.addr_validate(&msg.token_contract)?;
    TOKEN_CONTRACT.save(deps.storage, &token_contract)?;
    Ok(Response::new()
        .add_event(Event::new("farm-instantiated").add_attribute("token_contract", token_contract)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenContract {} => to_json_binary(&TokenContractResponse {
            token_contract: TOKEN_CONTRACT.load(deps.storage)?,
        }),
    }
}
