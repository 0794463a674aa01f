#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::{error::ContractError, msg::*, state::*};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult,
    Storage, Uint128,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol,
            decimals: DECIMALS,
            total_supply: Uint128::zero(),
        },
    )?;
    OWNER.save(deps.storage, &info.sender)?;
    VAULT.save(deps.storage, &None)?;
    Ok(Response::new())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;
    match msg {
        SetVault { address } => execute::set_vault(deps, info, address),
        Mint { amount } => execute::mint(deps, info, amount),
        Burn {
            amount,
            beneficiary,
        } => execute::burn(deps, info, amount, beneficiary),
        Transfer { recipient, amount } => execute::transfer(deps, info, recipient, amount),
        Approve { spender, amount } => execute::approve(deps, info, spender, amount),
        TransferFrom {
            owner,
            recipient,
            amount,
        } => execute::transfer_from(deps, info, owner, recipient, amount),
    }
}

mod execute {
    use super::*;

    fn ensure_vault(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
        match VAULT.load(storage)? {
            Some(vault) if &vault == sender => Ok(()),
            Some(_) => Err(ContractError::Unauthorized()),
            None => Err(ContractError::VaultNotSet()),
        }
    }

    fn credit(
        storage: &mut dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        BALANCES.update(storage, account, |balance| -> Result<Uint128, ContractError> {
            balance
                .unwrap_or_default()
                .checked_add(amount)
                .map_err(|_| ContractError::Overflow())
        })?;
        Ok(())
    }

    fn debit(
        storage: &mut dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        BALANCES.update(storage, account, |balance| -> Result<Uint128, ContractError> {
            let available = balance.unwrap_or_default();
            available
                .checked_sub(amount)
                .map_err(|_| ContractError::InsufficientBalance {
                    requested: amount,
                    available,
                })
        })?;
        Ok(())
    }

    pub fn set_vault(
        deps: DepsMut,
        info: MessageInfo,
        address: String,
    ) -> Result<Response, ContractError> {
        if info.sender != OWNER.load(deps.storage)? {
            return Err(ContractError::Unauthorized());
        }
        let vault = deps.api.addr_validate(&address)?;
        VAULT.save(deps.storage, &Some(vault.clone()))?;

        let resp = Response::new().add_event(Event::new("vault-set").add_attribute("vault", vault));
        Ok(resp)
    }

    pub fn mint(
        deps: DepsMut,
        info: MessageInfo,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        ensure_vault(deps.storage, &info.sender)?;
        credit(deps.storage, &info.sender, amount)?;
        TOKEN_INFO.update(deps.storage, |mut token| -> Result<TokenInfo, ContractError> {
            token.total_supply = token
                .total_supply
                .checked_add(amount)
                .map_err(|_| ContractError::Overflow())?;
            Ok(token)
        })?;

        let resp = Response::new().add_event(
            Event::new("mint")
                .add_attribute("to", info.sender)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }

    /// Burns from the vault's own holdings; `beneficiary` is the account the
    /// vault paid out in exchange.
    pub fn burn(
        deps: DepsMut,
        info: MessageInfo,
        amount: Uint128,
        beneficiary: String,
    ) -> Result<Response, ContractError> {
        ensure_vault(deps.storage, &info.sender)?;
        let beneficiary = deps.api.addr_validate(&beneficiary)?;
        debit(deps.storage, &info.sender, amount)?;
        TOKEN_INFO.update(deps.storage, |mut token| -> Result<TokenInfo, ContractError> {
            // The debit above already bounds this by the vault's balance.
            token.total_supply = token
                .total_supply
                .checked_sub(amount)
                .map_err(|_| ContractError::Overflow())?;
            Ok(token)
        })?;

        let resp = Response::new().add_event(
            Event::new("burn")
                .add_attribute("from", info.sender)
                .add_attribute("beneficiary", beneficiary)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }

    pub fn transfer(
        deps: DepsMut,
        info: MessageInfo,
        recipient: String,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        let recipient = deps.api.addr_validate(&recipient)?;
        debit(deps.storage, &info.sender, amount)?;
        credit(deps.storage, &recipient, amount)?;

        let resp = Response::new().add_event(
            Event::new("transfer")
                .add_attribute("from", info.sender)
                .add_attribute("to", recipient)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }

    pub fn approve(
        deps: DepsMut,
        info: MessageInfo,
        spender: String,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        let spender = deps.api.addr_validate(&spender)?;
        ALLOWANCES.save(deps.storage, (&info.sender, &spender), &amount)?;

        let resp = Response::new().add_event(
            Event::new("approve")
                .add_attribute("owner", info.sender)
                .add_attribute("spender", spender)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }

    pub fn transfer_from(
        deps: DepsMut,
        info: MessageInfo,
        owner: String,
        recipient: String,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        let owner = deps.api.addr_validate(&owner)?;
        let recipient = deps.api.addr_validate(&recipient)?;
        ALLOWANCES.update(
            deps.storage,
            (&owner, &info.sender),
            |allowance| -> Result<Uint128, ContractError> {
                let available = allowance.unwrap_or_default();
                available
                    .checked_sub(amount)
                    .map_err(|_| ContractError::InsufficientAllowance {
                        requested: amount,
                        available,
                    })
            },
        )?;
        debit(deps.storage, &owner, amount)?;
        credit(deps.storage, &recipient, amount)?;

        let resp = Response::new().add_event(
            Event::new("transfer")
                .add_attribute("by", info.sender)
                .add_attribute("from", owner)
                .add_attribute("to", recipient)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;
    match msg {
        Name {} => to_json_binary(&NameResponse {
            name: TOKEN_INFO.load(deps.storage)?.name,
        }),
        Symbol {} => to_json_binary(&SymbolResponse {
            symbol: TOKEN_INFO.load(deps.storage)?.symbol,
        }),
        Decimals {} => to_json_binary(&DecimalsResponse {
            decimals: TOKEN_INFO.load(deps.storage)?.decimals,
        }),
        Owner {} => to_json_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?,
        }),
        Vault {} => to_json_binary(&VaultResponse {
            vault: VAULT.load(deps.storage)?,
        }),
        TotalSupply {} => to_json_binary(&TotalSupplyResponse {
            total_supply: TOKEN_INFO.load(deps.storage)?.total_supply,
        }),
        BalanceOf { address } => to_json_binary(&query::get_balance(deps, &address)?),
        Allowance { owner, spender } => {
            to_json_binary(&query::get_allowance(deps, &owner, &spender)?)
        }
    }
}

mod query {
    use super::*;

    pub fn get_balance(deps: Deps, address: &str) -> StdResult<BalanceResponse> {
        let addr = deps.api.addr_validate(address)?;
        Ok(BalanceResponse {
            balance: BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default(),
        })
    }

    pub fn get_allowance(deps: Deps, owner: &str, spender: &str) -> StdResult<AllowanceResponse> {
        let owner = deps.api.addr_validate(owner)?;
        let spender = deps.api.addr_validate(spender)?;
        Ok(AllowanceResponse {
            allowance: ALLOWANCES
                .may_load(deps.storage, (&owner, &spender))?
                .unwrap_or_default(),
        })
    }
}
