use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    Unauthorized = 1,
    NotFound = 2,
    AlreadyExecuted = 3,
    AlreadyApproved = 4,
    InsufficientApprovals = 5,
    ExecutionFailed = 6,
    EmptyOwners = 7,
    DuplicateOwner = 8,
    InvalidThreshold = 9,
    ThresholdExceedsOwners = 10,
    InvalidValue = 11,
    NotApproved = 12,
}
