use soroban_sdk::{symbol_short, Env, String};

pub fn publish_initialized(env: &Env) {
    env.events()
        .publish((symbol_short!("init"),), env.ledger().timestamp());
}

pub fn publish_data_shared(env: &Env, hospital_a: &String, data_id: &String) {
    env.events()
        .publish((symbol_short!("share"), hospital_a.clone()), data_id.clone());
}

pub fn publish_access_checked(env: &Env, requester: &String, data_id: &String, granted: bool) {
    env.events().publish(
        (symbol_short!("reqaccess"), requester.clone()),
        (data_id.clone(), granted),
    );
}

pub fn publish_data_retrieved(env: &Env, requester: &String, data_id: &String) {
    env.events()
        .publish((symbol_short!("retrieve"), requester.clone()), data_id.clone());
}
