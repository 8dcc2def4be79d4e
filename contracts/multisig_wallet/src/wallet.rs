use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Bytes, Env, IntoVal, Symbol,
    Val, Vec,
};

use crate::errors::WalletError;
use crate::events::{
    ApproveTransaction, Deposit, ExecuteTransaction, RevokeApproval, SubmitTransaction,
};
use crate::storage;
use crate::types::{Transaction, WalletConfig};

/// Entry point invoked on the destination when a transaction carries call data.
const RECEIVE_FN: &str = "on_receive";

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Deploys the wallet with a fixed owner set. `native_token` is the token
    /// contract that transaction values are paid out of.
    pub fn __constructor(env: Env, owners: Vec<Address>, threshold: u32, native_token: Address) {
        if owners.is_empty() {
            panic_with_error!(&env, WalletError::EmptyOwners);
        }

        if threshold == 0 {
            panic_with_error!(&env, WalletError::InvalidThreshold);
        }

        if threshold > owners.len() {
            panic_with_error!(&env, WalletError::ThresholdExceedsOwners);
        }

        for i in 0..owners.len() {
            for j in (i + 1)..owners.len() {
                if owners.get_unchecked(i) == owners.get_unchecked(j) {
                    panic_with_error!(&env, WalletError::DuplicateOwner);
                }
            }
        }

        storage::write_config(
            &env,
            &WalletConfig {
                owners,
                threshold,
                native_token,
            },
        );
        storage::bump_instance(&env);
    }

    /// Moves `amount` of the native token from `from` into the wallet.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, WalletError> {
        from.require_auth();

        if amount <= 0 {
            return Err(WalletError::InvalidValue);
        }

        let token = token::Client::new(&env, &storage::native_token(&env));
        let wallet = env.current_contract_address();
        token.transfer(&from, &wallet, &amount);

        let balance = token.balance(&wallet);
        storage::bump_instance(&env);

        Deposit {
            from,
            amount,
            balance,
        }
        .publish(&env);

        Ok(balance)
    }

    /// Proposes a transaction and records the submitter's approval.
    /// Returns the index of the new transaction.
    pub fn submit(
        env: Env,
        caller: Address,
        destination: Address,
        value: i128,
        data: Bytes,
    ) -> Result<u32, WalletError> {
        Self::require_owner(&env, &caller)?;

        if value < 0 {
            return Err(WalletError::InvalidValue);
        }

        let index = storage::push_transaction(
            &env,
            Transaction {
                index: 0,
                proposer: caller.clone(),
                destination: destination.clone(),
                value,
                data: data.clone(),
                executed: false,
                approvals: 1,
            },
        );
        storage::set_approval(&env, index, &caller);
        storage::bump_instance(&env);

        log!(&env, "transaction submitted", index, value);
        SubmitTransaction {
            owner: caller,
            index,
            destination,
            value,
            data,
        }
        .publish(&env);

        Ok(index)
    }

    pub fn approve(env: Env, caller: Address, index: u32) -> Result<(), WalletError> {
        Self::require_owner(&env, &caller)?;

        let mut tx = Self::pending_transaction(&env, index)?;

        if storage::has_approval(&env, index, &caller) {
            return Err(WalletError::AlreadyApproved);
        }

        storage::set_approval(&env, index, &caller);
        tx.approvals += 1;
        storage::write_transaction(&env, &tx);
        storage::bump_instance(&env);

        log!(&env, "transaction approved", index, tx.approvals);
        ApproveTransaction {
            owner: caller,
            index,
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraws the caller's approval from a transaction that has not run yet.
    pub fn revoke(env: Env, caller: Address, index: u32) -> Result<(), WalletError> {
        Self::require_owner(&env, &caller)?;

        let mut tx = Self::pending_transaction(&env, index)?;

        if !storage::has_approval(&env, index, &caller) {
            return Err(WalletError::NotApproved);
        }

        storage::remove_approval(&env, index, &caller);
        tx.approvals -= 1;
        storage::write_transaction(&env, &tx);
        storage::bump_instance(&env);

        RevokeApproval {
            owner: caller,
            index,
        }
        .publish(&env);

        Ok(())
    }

    /// Runs an approved transaction. The transfer and the optional call happen
    /// before the executed flag is written; if either fails nothing is stored.
    pub fn execute(env: Env, caller: Address, index: u32) -> Result<(), WalletError> {
        Self::require_owner(&env, &caller)?;

        let mut tx = Self::pending_transaction(&env, index)?;

        if tx.approvals < storage::threshold(&env) {
            return Err(WalletError::InsufficientApprovals);
        }

        Self::dispatch(&env, &tx)?;

        tx.executed = true;
        storage::write_transaction(&env, &tx);
        storage::bump_instance(&env);

        log!(&env, "transaction executed", index);
        ExecuteTransaction {
            owner: caller,
            index,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_transaction(env: Env, index: u32) -> Result<Transaction, WalletError> {
        storage::read_transaction(&env, index)
    }

    pub fn transaction_count(env: Env) -> u32 {
        storage::transaction_count(&env)
    }

    pub fn is_approved(env: Env, index: u32, owner: Address) -> Result<bool, WalletError> {
        storage::read_transaction(&env, index)?;
        Ok(storage::has_approval(&env, index, &owner))
    }

    /// Owners that currently approve `index`, in owner-list order.
    pub fn approvals(env: Env, index: u32) -> Result<Vec<Address>, WalletError> {
        storage::read_transaction(&env, index)?;

        let mut approvers = Vec::new(&env);
        for owner in storage::owners(&env) {
            if storage::has_approval(&env, index, &owner) {
                approvers.push_back(owner);
            }
        }
        Ok(approvers)
    }

    pub fn owners(env: Env) -> Vec<Address> {
        storage::owners(&env)
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        storage::owners(&env).contains(&address)
    }

    pub fn threshold(env: Env) -> u32 {
        storage::threshold(&env)
    }

    pub fn native_token(env: Env) -> Address {
        storage::native_token(&env)
    }

    pub fn config(env: Env) -> WalletConfig {
        WalletConfig {
            owners: storage::owners(&env),
            threshold: storage::threshold(&env),
            native_token: storage::native_token(&env),
        }
    }

    /// Native token held by the wallet.
    pub fn balance(env: Env) -> i128 {
        token::Client::new(&env, &storage::native_token(&env))
            .balance(&env.current_contract_address())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), WalletError> {
        caller.require_auth();

        if !storage::owners(env).contains(caller) {
            return Err(WalletError::Unauthorized);
        }
        Ok(())
    }

    fn pending_transaction(env: &Env, index: u32) -> Result<Transaction, WalletError> {
        let tx = storage::read_transaction(env, index)?;
        if tx.executed {
            return Err(WalletError::AlreadyExecuted);
        }
        Ok(tx)
    }

    fn dispatch(env: &Env, tx: &Transaction) -> Result<(), WalletError> {
        let wallet = env.current_contract_address();

        if tx.value > 0 {
            let token = token::Client::new(env, &storage::native_token(env));
            if !matches!(
                token.try_transfer(&wallet, &tx.destination, &tx.value),
                Ok(Ok(()))
            ) {
                log!(env, "transfer failed", tx.index);
                return Err(WalletError::ExecutionFailed);
            }
        }

        if !tx.data.is_empty() {
            let args: Vec<Val> = (wallet, tx.value, tx.data.clone()).into_val(env);
            let result = env.try_invoke_contract::<(), WalletError>(
                &tx.destination,
                &Symbol::new(env, RECEIVE_FN),
                args,
            );
            if !matches!(result, Ok(Ok(()))) {
                log!(env, "call failed", tx.index);
                return Err(WalletError::ExecutionFailed);
            }
        }

        Ok(())
    }
}
