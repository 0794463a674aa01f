use crate::state::WithdrawalRequest;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub native_denom: String,
    pub buy_price: Uint128,
    pub sell_price: Uint128,
    pub reserved_parameter: Option<Uint128>,
    pub max_percentage: i64,
    pub token_contract: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    AddAdmin { admin: String },
    RemoveAdmin { admin: String },
    SetBuyPrice { price: Uint128 },
    SetSellPrice { price: Uint128 },
    SetMaxPercentage { percentage: i64 },
    SetTokenContract { address: String },
    ProposeMint { amount: Uint128 },
    RequestWithdraw { amount: Uint128 },
    Withdraw {},
    Burn { amount: Uint128 },
    Deposit {},
}

#[cw_serde]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

#[cw_serde]
pub struct AdminInfoResponse {
    pub joined_block: u64,
}

#[cw_serde]
pub struct AdminCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct PriceResponse {
    pub price: Uint128,
}

#[cw_serde]
pub struct MaxPercentageResponse {
    pub percentage: u64,
}

#[cw_serde]
pub struct WithdrawalCeilingResponse {
    pub balance: Uint128,
    pub ceiling: Uint128,
}

#[cw_serde]
pub struct VoteResponse {
    pub pending: bool,
}

#[cw_serde]
pub struct MintingNumberResponse {
    pub minting_number: u64,
}

#[cw_serde]
pub struct WithdrawalRequestResponse {
    pub request: Option<WithdrawalRequest>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub native_denom: String,
    pub token_contract: Option<Addr>,
    pub reserved_parameter: Option<Uint128>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(IsAdminResponse)]
    IsAdmin { address: String },
    #[returns(AdminInfoResponse)]
    AdminInfo { admin: String },
    #[returns(AdminCountResponse)]
    AdminCount {},
    #[returns(PriceResponse)]
    BuyPrice {},
    #[returns(PriceResponse)]
    SellPrice {},
    #[returns(MaxPercentageResponse)]
    MaxPercentage {},
    #[returns(WithdrawalCeilingResponse)]
    WithdrawalCeiling {},
    #[returns(VoteResponse)]
    Vote { amount: Uint128 },
    #[returns(MintingNumberResponse)]
    MintingNumber {},
    #[returns(WithdrawalRequestResponse)]
    WithdrawalRequest { admin: String },
    #[returns(ConfigResponse)]
    Config {},
}

pub const MINT_REPLY_ID: u64 = 1;
pub const BURN_REPLY_ID: u64 = 2;
