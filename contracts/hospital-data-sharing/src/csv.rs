use soroban_sdk::{Env, String, Vec};

use crate::error::ContractError;
use crate::validation;

/// Upper bound on the comma-separated allowed-hospitals input, in bytes.
pub const MAX_CSV_LEN: u32 = 512;

/// Parse a comma-separated list of hospital identifiers into an ordered,
/// de-duplicated list. Tokens are trimmed of surrounding whitespace; empty
/// tokens are dropped; the first occurrence of a duplicate wins. An empty
/// input yields an empty list (only the owner can read the record).
pub fn parse_hospital_list(env: &Env, raw: &String) -> Result<Vec<String>, ContractError> {
    let len = raw.len();
    if len == 0 {
        return Ok(Vec::new(env));
    }
    if len > MAX_CSV_LEN {
        return Err(ContractError::MalformedInput);
    }

    let mut buf = [0u8; MAX_CSV_LEN as usize];
    raw.copy_into_slice(&mut buf[..len as usize]);
    let text =
        core::str::from_utf8(&buf[..len as usize]).map_err(|_| ContractError::MalformedInput)?;

    let mut hospitals = Vec::new(env);
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let hospital = String::from_str(env, token);
        validation::validate_identifier(&hospital)?;
        if !contains(&hospitals, &hospital) {
            hospitals.push_back(hospital);
        }
    }
    Ok(hospitals)
}

pub fn contains(list: &Vec<String>, item: &String) -> bool {
    for entry in list.iter() {
        if entry == *item {
            return true;
        }
    }
    false
}
