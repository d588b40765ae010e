use soroban_sdk::String;

use crate::error::ContractError;

const MAX_ID_LEN: u32 = 64;
const MAX_OPAQUE_LEN: u32 = 256;

/// Validate a hospital or record identifier: non-empty, at most MAX_ID_LEN
/// bytes, printable ASCII only. Identifiers are compared byte-for-byte, so
/// anything outside that range would be impossible to match reliably.
pub fn validate_identifier(id: &String) -> Result<(), ContractError> {
    let len = id.len();
    if len == 0 || len > MAX_ID_LEN {
        return Err(ContractError::MalformedInput);
    }

    let mut buf = [0u8; MAX_ID_LEN as usize];
    id.copy_into_slice(&mut buf[..len as usize]);
    for &b in &buf[..len as usize] {
        // printable ASCII, space ' ' through tilde '~'
        if !(32..=126).contains(&b) {
            return Err(ContractError::MalformedInput);
        }
    }
    Ok(())
}

/// Content hashes and descriptions are uninterpreted tokens; only their size
/// is bounded. Empty is allowed.
pub fn validate_opaque(value: &String) -> Result<(), ContractError> {
    if value.len() > MAX_OPAQUE_LEN {
        return Err(ContractError::MalformedInput);
    }
    Ok(())
}
