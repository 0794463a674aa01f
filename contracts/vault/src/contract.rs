#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::{error::ContractError, interface::*, msg::*, state::*};
use cosmwasm_std::{
    coins, to_json_binary, wasm_execute, Addr, BankMsg, Binary, Deps, DepsMut, Env, Event,
    MessageInfo, Order, Reply, Response, StdError, StdResult, Storage, SubMsg, SubMsgResult,
    Uint128,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.buy_price > msg.sell_price {
        return Err(ContractError::InvalidPriceOrdering {
            buy: msg.buy_price,
            sell: msg.sell_price,
        });
    }
    let max_percentage = execute::validate_percentage(msg.max_percentage)?;
    let token_contract = msg
        .token_contract
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    ADMINS.save(
        deps.storage,
        &info.sender,
        &AdminData {
            joined_block: env.block.height,
        },
    )?;
    ADMIN_COUNT.save(deps.storage, &1)?;
    CONFIG.save(
        deps.storage,
        &Config {
            native_denom: msg.native_denom,
            token_contract,
            reserved_parameter: msg.reserved_parameter,
        },
    )?;
    PRICES.save(
        deps.storage,
        &Prices {
            buy: msg.buy_price,
            sell: msg.sell_price,
        },
    )?;
    MAX_PERCENTAGE.save(deps.storage, &max_percentage)?;
    MINTING_NUMBER.save(deps.storage, &0)?;

    let resp = Response::new()
        .add_event(Event::new("vault-instantiated").add_attribute("admin", info.sender));
    Ok(resp)
}

/// Every message except `Deposit` is admin-gated; the gate runs before dispatch.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;
    if !matches!(msg, Deposit {}) {
        ensure_admin(deps.storage, &info.sender)?;
    }
    match msg {
        AddAdmin { admin } => execute::add_admin(deps, env, info, admin),
        RemoveAdmin { admin } => execute::remove_admin(deps, info, admin),
        SetBuyPrice { price } => execute::set_buy_price(deps, info, price),
        SetSellPrice { price } => execute::set_sell_price(deps, info, price),
        SetMaxPercentage { percentage } => execute::set_max_percentage(deps, info, percentage),
        SetTokenContract { address } => execute::set_token_contract(deps, info, address),
        ProposeMint { amount } => execute::propose_mint(deps, info, amount),
        RequestWithdraw { amount } => execute::request_withdraw(deps, env, info, amount),
        Withdraw {} => execute::withdraw(deps, env, info),
        Burn { amount } => execute::burn(deps, env, info, amount),
        Deposit {} => execute::deposit(deps, info),
    }
}

pub fn ensure_admin(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if !ADMINS.has(storage, sender) {
        return Err(ContractError::Unauthorized());
    }
    Ok(())
}

mod execute {
    use super::*;

    pub fn validate_percentage(percentage: i64) -> Result<u64, ContractError> {
        match u64::try_from(percentage) {
            Ok(value) if value <= MAX_PERCENTAGE_LIMIT => Ok(value),
            _ => Err(ContractError::OutOfRange(percentage)),
        }
    }

    fn vault_balance(deps: Deps, env: &Env, denom: &str) -> StdResult<Uint128> {
        Ok(deps
            .querier
            .query_balance(env.contract.address.to_string(), denom)?
            .amount)
    }

    fn ensure_payable(
        deps: Deps,
        env: &Env,
        denom: &str,
        requested: Uint128,
    ) -> Result<(), ContractError> {
        let available = vault_balance(deps, env, denom)?;
        if available < requested {
            return Err(ContractError::InsufficientBalance {
                requested,
                available,
            });
        }
        Ok(())
    }

    /// Strips `admin` from every open mint proposal; proposals left without
    /// voters are deleted.
    fn drop_mint_votes(storage: &mut dyn Storage, admin: &Addr) -> StdResult<()> {
        let proposals = MINT_PROPOSALS
            .range(storage, None, None, Order::Ascending)
            .filter(|entry| {
                entry
                    .as_ref()
                    .map_or(true, |(_, proposal)| proposal.voters.contains(admin))
            })
            .collect::<StdResult<Vec<_>>>()?;

        for (amount, mut proposal) in proposals {
            proposal.voters.retain(|voter| voter != admin);
            if proposal.voters.is_empty() {
                MINT_PROPOSALS.remove(storage, amount);
            } else {
                MINT_PROPOSALS.save(storage, amount, &proposal)?;
            }
        }
        Ok(())
    }

    /// First other admin (in address order) with an unmatched request for
    /// exactly `amount`. A matched request is already paired and cannot back
    /// a second one.
    fn find_counterpart(
        storage: &dyn Storage,
        requester: &Addr,
        amount: Uint128,
    ) -> StdResult<Option<Addr>> {
        for entry in WITHDRAWALS.range(storage, None, None, Order::Ascending) {
            let (admin, request) = entry?;
            if &admin != requester && !request.matched && request.amount == amount {
                return Ok(Some(admin));
            }
        }
        Ok(None)
    }

    pub fn add_admin(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        admin: String,
    ) -> Result<Response, ContractError> {
        let admin_addr = deps.api.addr_validate(&admin)?;
        if ADMINS.has(deps.storage, &admin_addr) {
            return Ok(Response::new());
        }

        ADMINS.save(
            deps.storage,
            &admin_addr,
            &AdminData {
                joined_block: env.block.height,
            },
        )?;
        ADMIN_COUNT.update(deps.storage, |count| -> Result<u64, ContractError> {
            count.checked_add(1).ok_or(ContractError::Overflow())
        })?;

        let resp = Response::new().add_event(
            Event::new("admin-added")
                .add_attribute("by", info.sender)
                .add_attribute("admin", admin_addr),
        );
        Ok(resp)
    }

    pub fn remove_admin(
        deps: DepsMut,
        info: MessageInfo,
        admin: String,
    ) -> Result<Response, ContractError> {
        let admin_addr = deps.api.addr_validate(&admin)?;
        if !ADMINS.has(deps.storage, &admin_addr) {
            return Err(ContractError::AdminNotFound());
        }

        ADMIN_COUNT.update(deps.storage, |count| -> Result<u64, ContractError> {
            if count <= 1 {
                return Err(ContractError::LastAdmin());
            }
            Ok(count - 1)
        })?;
        ADMINS.remove(deps.storage, &admin_addr);
        WITHDRAWALS.remove(deps.storage, &admin_addr);
        drop_mint_votes(deps.storage, &admin_addr)?;

        let resp = Response::new().add_event(
            Event::new("admin-removed")
                .add_attribute("by", info.sender)
                .add_attribute("admin", admin_addr),
        );
        Ok(resp)
    }

    pub fn set_buy_price(
        deps: DepsMut,
        info: MessageInfo,
        price: Uint128,
    ) -> Result<Response, ContractError> {
        PRICES.update(deps.storage, |mut prices| -> Result<Prices, ContractError> {
            if price > prices.sell {
                return Err(ContractError::InvalidPriceOrdering {
                    buy: price,
                    sell: prices.sell,
                });
            }
            prices.buy = price;
            Ok(prices)
        })?;

        let resp = Response::new().add_event(
            Event::new("buy-price-set")
                .add_attribute("by", info.sender)
                .add_attribute("price", price.to_string()),
        );
        Ok(resp)
    }

    pub fn set_sell_price(
        deps: DepsMut,
        info: MessageInfo,
        price: Uint128,
    ) -> Result<Response, ContractError> {
        PRICES.update(deps.storage, |mut prices| -> Result<Prices, ContractError> {
            if price < prices.buy {
                return Err(ContractError::InvalidPriceOrdering {
                    buy: prices.buy,
                    sell: price,
                });
            }
            prices.sell = price;
            Ok(prices)
        })?;

        let resp = Response::new().add_event(
            Event::new("sell-price-set")
                .add_attribute("by", info.sender)
                .add_attribute("price", price.to_string()),
        );
        Ok(resp)
    }

    pub fn set_max_percentage(
        deps: DepsMut,
        info: MessageInfo,
        percentage: i64,
    ) -> Result<Response, ContractError> {
        let percentage = validate_percentage(percentage)?;
        MAX_PERCENTAGE.save(deps.storage, &percentage)?;

        let resp = Response::new().add_event(
            Event::new("max-percentage-set")
                .add_attribute("by", info.sender)
                .add_attribute("percentage", percentage.to_string()),
        );
        Ok(resp)
    }

    pub fn set_token_contract(
        deps: DepsMut,
        info: MessageInfo,
        address: String,
    ) -> Result<Response, ContractError> {
        let token_addr = deps.api.addr_validate(&address)?;
        CONFIG.update(deps.storage, |mut config| -> StdResult<Config> {
            config.token_contract = Some(token_addr.clone());
            Ok(config)
        })?;

        let resp = Response::new().add_event(
            Event::new("token-contract-set")
                .add_attribute("by", info.sender)
                .add_attribute("address", token_addr),
        );
        Ok(resp)
    }

    pub fn propose_mint(
        deps: DepsMut,
        info: MessageInfo,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        let key = amount.u128();
        let mut proposal = MINT_PROPOSALS
            .may_load(deps.storage, key)?
            .unwrap_or_default();
        proposal.add_voter(&info.sender);

        if !proposal.threshold_reached(MINT_THRESHOLD) {
            MINT_PROPOSALS.save(deps.storage, key, &proposal)?;
            let resp = Response::new().add_event(
                Event::new("mint-proposed")
                    .add_attribute("admin", info.sender)
                    .add_attribute("amount", amount.to_string()),
            );
            return Ok(resp);
        }

        let token = CONFIG
            .load(deps.storage)?
            .token_contract
            .ok_or(ContractError::TokenContractNotSet())?;
        MINT_PROPOSALS.remove(deps.storage, key);
        let minting_number =
            MINTING_NUMBER.update(deps.storage, |number| -> Result<u64, ContractError> {
                number.checked_add(1).ok_or(ContractError::Overflow())
            })?;

        let mint = SubMsg::reply_on_error(
            wasm_execute(
                token,
                &token_interface::ExecuteMsg::Mint { amount },
                vec![],
            )?,
            MINT_REPLY_ID,
        );
        let resp = Response::new()
            .add_submessage(mint)
            .set_data(to_json_binary(&MintingNumberResponse { minting_number })?)
            .add_event(
                Event::new("minted")
                    .add_attribute("by", info.sender)
                    .add_attribute("amount", amount.to_string())
                    .add_attribute("minting_number", minting_number.to_string()),
            );
        Ok(resp)
    }

    pub fn request_withdraw(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        if WITHDRAWALS.has(deps.storage, &info.sender) {
            return Err(ContractError::PendingRequestExists());
        }

        let denom = CONFIG.load(deps.storage)?.native_denom;
        let balance = vault_balance(deps.as_ref(), &env, &denom)?;
        let ceiling = balance.multiply_ratio(MAX_PERCENTAGE.load(deps.storage)?, 100u64);
        if amount > ceiling {
            return Err(ContractError::ExceedsPercentageLimit {
                requested: amount,
                ceiling,
            });
        }

        let counterpart = find_counterpart(deps.storage, &info.sender, amount)?;
        WITHDRAWALS.save(
            deps.storage,
            &info.sender,
            &WithdrawalRequest {
                amount,
                matched: counterpart.is_some(),
            },
        )?;

        let resp = Response::new().add_event(
            Event::new("withdraw-requested")
                .add_attribute("admin", &info.sender)
                .add_attribute("amount", amount.to_string()),
        );
        let Some(counterpart) = counterpart else {
            return Ok(resp);
        };

        WITHDRAWALS.update(
            deps.storage,
            &counterpart,
            |request| -> StdResult<WithdrawalRequest> {
                let mut request =
                    request.ok_or_else(|| StdError::not_found("WithdrawalRequest"))?;
                request.matched = true;
                Ok(request)
            },
        )?;
        Ok(resp.add_event(
            Event::new("withdraw-matched")
                .add_attribute("admin", info.sender)
                .add_attribute("counterpart", counterpart)
                .add_attribute("amount", amount.to_string()),
        ))
    }

    pub fn withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
        let request = match WITHDRAWALS.may_load(deps.storage, &info.sender)? {
            Some(request) if request.matched => request,
            _ => return Err(ContractError::NoApprovedRequest()),
        };
        let denom = CONFIG.load(deps.storage)?.native_denom;
        ensure_payable(deps.as_ref(), &env, &denom, request.amount)?;
        WITHDRAWALS.remove(deps.storage, &info.sender);

        let resp = Response::new().add_event(
            Event::new("withdraw")
                .add_attribute("admin", &info.sender)
                .add_attribute("amount", request.amount.to_string()),
        );
        if request.amount.is_zero() {
            return Ok(resp);
        }
        Ok(resp.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(request.amount.u128(), denom),
        }))
    }

    pub fn burn(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        let config = CONFIG.load(deps.storage)?;
        let token = config
            .token_contract
            .ok_or(ContractError::TokenContractNotSet())?;
        ensure_payable(deps.as_ref(), &env, &config.native_denom, amount)?;

        // The token-side burn is dispatched first; its failure reverts the payout.
        let burn = SubMsg::reply_on_error(
            wasm_execute(
                token,
                &token_interface::ExecuteMsg::Burn {
                    amount,
                    beneficiary: info.sender.to_string(),
                },
                vec![],
            )?,
            BURN_REPLY_ID,
        );
        let resp = Response::new().add_submessage(burn).add_event(
            Event::new("burn")
                .add_attribute("admin", &info.sender)
                .add_attribute("amount", amount.to_string()),
        );
        if amount.is_zero() {
            return Ok(resp);
        }
        Ok(resp.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(amount.u128(), config.native_denom),
        }))
    }

    pub fn deposit(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
        let denom = CONFIG.load(deps.storage)?.native_denom;
        let amount = cw_utils::must_pay(&info, &denom)?;

        let resp = Response::new().add_event(
            Event::new("deposit")
                .add_attribute("sender", info.sender)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsAdmin { address } => to_json_binary(&query::is_admin(deps, &address)?),
        QueryMsg::AdminInfo { admin } => to_json_binary(&query::get_admin_info(deps, &admin)?),
        QueryMsg::AdminCount {} => to_json_binary(&query::get_admin_count(deps)?),
        QueryMsg::BuyPrice {} => to_json_binary(&PriceResponse {
            price: PRICES.load(deps.storage)?.buy,
        }),
        QueryMsg::SellPrice {} => to_json_binary(&PriceResponse {
            price: PRICES.load(deps.storage)?.sell,
        }),
        QueryMsg::MaxPercentage {} => to_json_binary(&MaxPercentageResponse {
            percentage: MAX_PERCENTAGE.load(deps.storage)?,
        }),
        QueryMsg::WithdrawalCeiling {} => {
            to_json_binary(&query::get_withdrawal_ceiling(deps, env)?)
        }
        QueryMsg::Vote { amount } => to_json_binary(&query::get_vote(deps, amount)?),
        QueryMsg::MintingNumber {} => to_json_binary(&MintingNumberResponse {
            minting_number: MINTING_NUMBER.load(deps.storage)?,
        }),
        QueryMsg::WithdrawalRequest { admin } => {
            to_json_binary(&query::get_withdrawal_request(deps, &admin)?)
        }
        QueryMsg::Config {} => to_json_binary(&query::get_config(deps)?),
    }
}

mod query {
    use super::*;

    pub fn is_admin(deps: Deps, address: &str) -> StdResult<IsAdminResponse> {
        let addr = deps.api.addr_validate(address)?;
        Ok(IsAdminResponse {
            is_admin: ADMINS.has(deps.storage, &addr),
        })
    }

    pub fn get_admin_info(deps: Deps, admin: &str) -> StdResult<AdminInfoResponse> {
        let admin_addr = deps.api.addr_validate(admin)?;
        let admin_data = ADMINS.load(deps.storage, &admin_addr)?;
        Ok(AdminInfoResponse {
            joined_block: admin_data.joined_block,
        })
    }

    pub fn get_admin_count(deps: Deps) -> StdResult<AdminCountResponse> {
        Ok(AdminCountResponse {
            count: ADMIN_COUNT.load(deps.storage)?,
        })
    }

    pub fn get_withdrawal_ceiling(deps: Deps, env: Env) -> StdResult<WithdrawalCeilingResponse> {
        let denom = CONFIG.load(deps.storage)?.native_denom;
        let balance = deps
            .querier
            .query_balance(env.contract.address, denom)?
            .amount;
        let percentage = MAX_PERCENTAGE.load(deps.storage)?;
        Ok(WithdrawalCeilingResponse {
            balance,
            ceiling: balance.multiply_ratio(percentage, 100u64),
        })
    }

    pub fn get_vote(deps: Deps, amount: Uint128) -> StdResult<VoteResponse> {
        Ok(VoteResponse {
            pending: MINT_PROPOSALS.has(deps.storage, amount.u128()),
        })
    }

    pub fn get_withdrawal_request(deps: Deps, admin: &str) -> StdResult<WithdrawalRequestResponse> {
        let admin_addr = deps.api.addr_validate(admin)?;
        Ok(WithdrawalRequestResponse {
            request: WITHDRAWALS.may_load(deps.storage, &admin_addr)?,
        })
    }

    pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
        let config = CONFIG.load(deps.storage)?;
        Ok(ConfigResponse {
            native_denom: config.native_denom,
            token_contract: config.token_contract,
            reserved_parameter: config.reserved_parameter,
        })
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        MINT_REPLY_ID | BURN_REPLY_ID => match msg.result {
            SubMsgResult::Ok(_) => Ok(Response::new()),
            SubMsgResult::Err(err) => Err(ContractError::ExternalCallFailure(err)),
        },
        id => Err(ContractError::from(StdError::generic_err(format!(
            "Unknown reply id: {}",
            id
        )))),
    }
}
