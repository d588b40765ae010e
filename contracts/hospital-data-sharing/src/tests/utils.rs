extern crate std;

use soroban_sdk::{testutils::Ledger, Env, String, Vec};

use crate::{HospitalDataSharing, HospitalDataSharingClient, RecordView};

/// Test environment setup: a registered, initialized contract plus helpers
/// that convert from &str at the call boundary.
pub struct TestFixture {
    pub env: Env,
    pub client: HospitalDataSharingClient<'static>,
}

impl TestFixture {
    pub fn new() -> Self {
        let env = Env::default();
        let contract_id = env.register(HospitalDataSharing, ());
        let client = HospitalDataSharingClient::new(&env, &contract_id);
        client.initialize();
        TestFixture { env, client }
    }

    /// A contract that has been registered but not initialized.
    pub fn uninitialized() -> Self {
        let env = Env::default();
        let contract_id = env.register(HospitalDataSharing, ());
        let client = HospitalDataSharingClient::new(&env, &contract_id);
        TestFixture { env, client }
    }

    pub fn string(&self, s: &str) -> String {
        String::from_str(&self.env, s)
    }

    pub fn share(&self, data_id: &str, owner: &str, hash: &str, description: &str, allowed: &str) {
        self.client.share_data(
            &self.string(data_id),
            &self.string(owner),
            &self.string(hash),
            &self.string(description),
            &self.string(allowed),
        );
    }

    pub fn request_access(&self, data_id: &str, hospital: &str) -> bool {
        self.client
            .request_access(&self.string(data_id), &self.string(hospital))
    }

    pub fn get_data(&self, data_id: &str, hospital: &str) -> RecordView {
        self.client
            .get_data(&self.string(data_id), &self.string(hospital))
    }

    pub fn get_all(&self, hospital: &str) -> Vec<RecordView> {
        self.client.get_all_data(&self.string(hospital))
    }

    /// Fast forward the ledger clock by the given number of seconds.
    pub fn advance_time(&self, seconds: u64) {
        let current = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(current + seconds);
    }
}
