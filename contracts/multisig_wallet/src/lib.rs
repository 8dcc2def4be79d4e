#![no_std]

mod errors;
mod events;
mod storage;
mod types;
mod wallet;

pub use crate::errors::WalletError;
pub use crate::types::{Transaction, WalletConfig};
pub use crate::wallet::{MultisigWallet, MultisigWalletClient};
