use soroban_sdk::String;

use crate::csv;
use crate::types::{RecordView, SharedRecord};

/// The single read-authorization predicate: the owner always reads its own
/// record, everyone else must be on the allowed list. Matching is
/// case-sensitive and exact.
pub fn is_authorized(record: &SharedRecord, hospital: &String) -> bool {
    *hospital == record.hospital_a || csv::contains(&record.allowed_hospitals, hospital)
}

pub fn full_view(record: &SharedRecord) -> RecordView {
    RecordView {
        data_id: record.data_id.clone(),
        hospital_a: record.hospital_a.clone(),
        ipfs_hash: Some(record.ipfs_hash.clone()),
        description: Some(record.description.clone()),
        timestamp: record.timestamp,
        allowed_hospitals: record.allowed_hospitals.clone(),
    }
}

/// Per-caller redaction at the response-assembly boundary. Record identity
/// and sharing metadata stay visible; the data pointer and description are
/// nulled for callers that fail the predicate.
pub fn view_for(record: &SharedRecord, hospital: &String) -> RecordView {
    if is_authorized(record, hospital) {
        return full_view(record);
    }
    RecordView {
        data_id: record.data_id.clone(),
        hospital_a: record.hospital_a.clone(),
        ipfs_hash: None,
        description: None,
        timestamp: record.timestamp,
        allowed_hospitals: record.allowed_hospitals.clone(),
    }
}
