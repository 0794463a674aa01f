use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use serde::{Deserialize, Serialize};

/// Distinct admins that must propose the same amount before it is minted.
pub const MINT_THRESHOLD: usize = 2;

/// Upper bound for the share of the balance a single withdrawal may claim.
pub const MAX_PERCENTAGE_LIMIT: u64 = 50;

#[derive(Serialize, Deserialize)]
pub struct AdminData {
    pub joined_block: u64,
}

#[cw_serde]
pub struct Config {
    pub native_denom: String,
    pub token_contract: Option<Addr>,
    /// Accepted at instantiation and reported back; nothing reads it yet.
    pub reserved_parameter: Option<Uint128>,
}

#[cw_serde]
pub struct Prices {
    pub buy: Uint128,
    pub sell: Uint128,
}

#[cw_serde]
#[derive(Default)]
pub struct MintProposal {
    pub voters: Vec<Addr>,
}

impl MintProposal {
    /// Records `voter`; a repeated vote from the same admin is a no-op.
    pub fn add_voter(&mut self, voter: &Addr) {
        if !self.voters.contains(voter) {
            self.voters.push(voter.clone());
        }
    }

    pub fn threshold_reached(&self, threshold: usize) -> bool {
        self.voters.len() >= threshold
    }
}

#[cw_serde]
pub struct WithdrawalRequest {
    pub amount: Uint128,
    pub matched: bool,
}

pub const ADMINS: Map<&Addr, AdminData> = Map::new("admins");
pub const ADMIN_COUNT: Item<u64> = Item::new("admin_count");
pub const CONFIG: Item<Config> = Item::new("config");
pub const PRICES: Item<Prices> = Item::new("prices");
pub const MAX_PERCENTAGE: Item<u64> = Item::new("max_percentage");
pub const MINTING_NUMBER: Item<u64> = Item::new("minting_number");
pub const MINT_PROPOSALS: Map<u128, MintProposal> = Map::new("mint_proposals");
pub const WITHDRAWALS: Map<&Addr, WithdrawalRequest> = Map::new("withdrawals");
