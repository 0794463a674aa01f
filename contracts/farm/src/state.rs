use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const TOKEN_CONTRACT: Item<Addr> = Item::new("token_contract");
