use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{DataKey, Transaction, WalletConfig};

// ~30 days at 5s ledgers; bumped back up once below ~29 days.
pub(crate) const LEDGER_BUMP: u32 = 518_400;
const LEDGER_THRESHOLD: u32 = LEDGER_BUMP - 17_280;

pub fn write_config(env: &Env, config: &WalletConfig) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owners, &config.owners);
    instance.set(&DataKey::Threshold, &config.threshold);
    instance.set(&DataKey::NativeToken, &config.native_token);
    instance.set(&DataKey::TransactionCount, &0u32);
}

// The constructor writes every instance key below, so reads never miss.

pub fn owners(env: &Env) -> Vec<Address> {
    env.storage().instance().get(&DataKey::Owners).unwrap()
}

pub fn threshold(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Threshold).unwrap()
}

pub fn native_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .unwrap()
}

pub fn transaction_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap()
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

/// Appends `tx` at the next index and returns that index.
pub fn push_transaction(env: &Env, mut tx: Transaction) -> u32 {
    let index = transaction_count(env);
    tx.index = index;
    write_transaction(env, &tx);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(index + 1));
    index
}

pub fn read_transaction(env: &Env, index: u32) -> Result<Transaction, WalletError> {
    let key = DataKey::Transaction(index);
    let tx: Transaction = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(WalletError::NotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
    Ok(tx)
}

pub fn write_transaction(env: &Env, tx: &Transaction) {
    let key = DataKey::Transaction(tx.index);
    env.storage().persistent().set(&key, tx);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn has_approval(env: &Env, index: u32, owner: &Address) -> bool {
    let key = DataKey::Approval(index, owner.clone());
    let persistent = env.storage().persistent();
    if !persistent.has(&key) {
        return false;
    }
    persistent.extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
    true
}

pub fn set_approval(env: &Env, index: u32, owner: &Address) {
    let key = DataKey::Approval(index, owner.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn remove_approval(env: &Env, index: u32, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Approval(index, owner.clone()));
}
