use soroban_sdk::{contractevent, Address, Bytes};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    #[topic]
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmitTransaction {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u32,
    pub destination: Address,
    pub value: i128,
    pub data: Bytes,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApproveTransaction {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevokeApproval {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecuteTransaction {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u32,
}
