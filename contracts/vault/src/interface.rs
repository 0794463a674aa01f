pub mod token_interface {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::Uint128;

    #[cw_serde]
    pub enum ExecuteMsg {
        Mint {
            amount: Uint128,
        },
        Burn {
            amount: Uint128,
            beneficiary: String,
        },
    }
}
