use soroban_sdk::{Env, String, Vec};

use crate::error::ContractError;
use crate::types::{RecordView, SharedRecord};
use crate::{access, csv, events, validation, DataKey};

pub fn share_data(
    env: &Env,
    data_id: String,
    hospital_a: String,
    ipfs_hash: String,
    description: String,
    allowed_hospitals: String,
) -> Result<(), ContractError> {
    ensure_initialized(env)?;
    validation::validate_identifier(&data_id)?;
    validation::validate_identifier(&hospital_a)?;
    validation::validate_opaque(&ipfs_hash)?;
    validation::validate_opaque(&description)?;
    let readers = csv::parse_hospital_list(env, &allowed_hospitals)?;

    let key = DataKey::Record(data_id.clone());
    if env.storage().persistent().has(&key) {
        return Err(ContractError::DuplicateRecord);
    }

    let record = SharedRecord {
        data_id: data_id.clone(),
        hospital_a: hospital_a.clone(),
        ipfs_hash,
        description,
        timestamp: now(env),
        allowed_hospitals: readers,
    };
    env.storage().persistent().set(&key, &record);

    let mut index: Vec<String> = env
        .storage()
        .persistent()
        .get(&DataKey::Index)
        .unwrap_or(Vec::new(env));
    index.push_back(data_id.clone());
    env.storage().persistent().set(&DataKey::Index, &index);

    events::publish_data_shared(env, &hospital_a, &data_id);
    Ok(())
}

pub fn request_access(
    env: &Env,
    data_id: String,
    requesting_hospital: String,
) -> Result<bool, ContractError> {
    ensure_initialized(env)?;
    validation::validate_identifier(&data_id)?;
    validation::validate_identifier(&requesting_hospital)?;

    let record = load_record(env, &data_id)?;
    let granted = access::is_authorized(&record, &requesting_hospital);
    events::publish_access_checked(env, &requesting_hospital, &data_id, granted);
    Ok(granted)
}

pub fn get_data(
    env: &Env,
    data_id: String,
    requesting_hospital: String,
) -> Result<RecordView, ContractError> {
    ensure_initialized(env)?;
    validation::validate_identifier(&data_id)?;
    validation::validate_identifier(&requesting_hospital)?;

    let record = load_record(env, &data_id)?;
    // Same predicate as request_access; the two must never drift apart.
    // No event on the denial path: the host discards events when the
    // invocation returns an error.
    if !access::is_authorized(&record, &requesting_hospital) {
        return Err(ContractError::AccessDenied);
    }

    events::publish_data_retrieved(env, &requesting_hospital, &data_id);
    Ok(access::full_view(&record))
}

pub fn get_all_data(
    env: &Env,
    requesting_hospital: String,
) -> Result<Vec<RecordView>, ContractError> {
    ensure_initialized(env)?;
    validation::validate_identifier(&requesting_hospital)?;

    let index: Vec<String> = env
        .storage()
        .persistent()
        .get(&DataKey::Index)
        .unwrap_or(Vec::new(env));

    // A listing never fails for lack of access; inaccessible records come
    // back with the data pointer and description nulled out.
    let mut results = Vec::new(env);
    for id in index.iter() {
        if let Some(record) = env
            .storage()
            .persistent()
            .get::<_, SharedRecord>(&DataKey::Record(id))
        {
            results.push_back(access::view_for(&record, &requesting_hospital));
        }
    }
    Ok(results)
}

pub fn record_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get::<_, Vec<String>>(&DataKey::Index)
        .map(|index| index.len())
        .unwrap_or(0)
}

fn load_record(env: &Env, data_id: &String) -> Result<SharedRecord, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(data_id.clone()))
        .ok_or(ContractError::RecordNotFound)
}

fn ensure_initialized(env: &Env) -> Result<(), ContractError> {
    if !env.storage().instance().has(&DataKey::Config) {
        return Err(ContractError::NotInitialized);
    }
    Ok(())
}

fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}
