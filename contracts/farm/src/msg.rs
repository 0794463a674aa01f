use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub token_contract: String,
}

#[cw_serde]
pub struct TokenContractResponse {
    pub token_contract: Addr,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenContractResponse)]
    TokenContract {},
}
