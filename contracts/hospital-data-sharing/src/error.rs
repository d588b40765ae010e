use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// `share_data` on a data id that already exists. Records are never
    /// overwritten; pick a new id.
    DuplicateRecord = 3,
    RecordNotFound = 4,
    AccessDenied = 5,
    /// Empty identifier, non-UTF-8 or oversized input.
    MalformedInput = 6,
}
