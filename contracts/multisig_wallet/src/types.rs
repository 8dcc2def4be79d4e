use soroban_sdk::{contracttype, Address, Bytes, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance
    Owners,
    Threshold,
    NativeToken,
    TransactionCount,
    // persistent
    Transaction(u32),
    Approval(u32, Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletConfig {
    pub owners: Vec<Address>,
    pub threshold: u32,
    pub native_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub index: u32,
    pub proposer: Address,
    pub destination: Address,
    pub value: i128,
    pub data: Bytes,
    pub executed: bool,
    pub approvals: u32,
}
