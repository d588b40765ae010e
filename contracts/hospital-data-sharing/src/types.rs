use soroban_sdk::{contracttype, String, Vec};

#[contracttype]
#[derive(Clone)]
pub struct ContractConfig {
    pub initialized: bool,
}

/// A shared record as persisted on the ledger. Immutable after creation:
/// there is no update or revoke path, and duplicate ids are rejected rather
/// than overwritten.
///
/// `hospital_a` is the owning hospital; `ipfs_hash` is an uninterpreted
/// content-addressed pointer to the off-ledger data. Field names follow the
/// wire format the hospital applications already parse.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharedRecord {
    pub data_id: String,
    pub hospital_a: String,
    pub ipfs_hash: String,
    pub description: String,
    pub timestamp: u64,
    pub allowed_hospitals: Vec<String>,
}

/// The response shape returned by both read operations. Same fields as
/// `SharedRecord`, but the sensitive ones are optional so a listing can null
/// them out for callers without access while keeping the shape stable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordView {
    pub data_id: String,
    pub hospital_a: String,
    pub ipfs_hash: Option<String>,
    pub description: Option<String>,
    pub timestamp: u64,
    pub allowed_hospitals: Vec<String>,
}
