#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Env, String, Vec};

mod access;
mod csv;
mod error;
mod events;
mod records;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::ContractError;
pub use types::{ContractConfig, RecordView, SharedRecord};

/// Ledger storage layout. Records live in persistent storage keyed by their
/// data id; `Index` keeps the ids in commit order so listings are stable.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Record(String),
    Index,
}

#[contract]
pub struct HospitalDataSharing;

#[contractimpl]
impl HospitalDataSharing {
    pub fn initialize(env: Env) -> Result<(), ContractError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&DataKey::Config, &ContractConfig { initialized: true });
        events::publish_initialized(&env);
        Ok(())
    }

    /// Share a content-addressed data pointer with a set of hospitals.
    /// `allowed_hospitals` is a comma-separated list of hospital identifiers;
    /// the owner can always read its own record regardless of the list.
    pub fn share_data(
        env: Env,
        data_id: String,
        hospital_a: String,
        ipfs_hash: String,
        description: String,
        allowed_hospitals: String,
    ) -> Result<(), ContractError> {
        records::share_data(&env, data_id, hospital_a, ipfs_hash, description, allowed_hospitals)
    }

    /// Check whether a hospital may read a record. Pure query.
    pub fn request_access(
        env: Env,
        data_id: String,
        requesting_hospital: String,
    ) -> Result<bool, ContractError> {
        records::request_access(&env, data_id, requesting_hospital)
    }

    /// Retrieve the full record, including the data pointer. Fails with
    /// `AccessDenied` for callers outside the owner and the allowed list.
    pub fn get_data(
        env: Env,
        data_id: String,
        requesting_hospital: String,
    ) -> Result<RecordView, ContractError> {
        records::get_data(&env, data_id, requesting_hospital)
    }

    /// List every record on the ledger in commit order, redacting the data
    /// pointer and description of records the caller may not read.
    pub fn get_all_data(
        env: Env,
        requesting_hospital: String,
    ) -> Result<Vec<RecordView>, ContractError> {
        records::get_all_data(&env, requesting_hospital)
    }

    pub fn record_count(env: Env) -> u32 {
        records::record_count(&env)
    }
}
