use soroban_sdk::{xdr::ToXdr, BytesN, Env};

use crate::events::{emit_params_registered, ParamsRegisteredEvent};
use crate::ledger::extend_persistent;
use crate::storage_types::*;

/// Content key of a parameter set: SHA-256 over the XDR of the ordered field tuple.
pub fn hash_params(e: &Env, params: &CampaignParams) -> BytesN<32> {
    let payload = (
        params.cap,
        params.price,
        params.start_height,
        params.end_height,
        params.beneficiary.clone(),
        params.admin.clone(),
    )
        .to_xdr(e);
    e.crypto().sha256(&payload).into()
}

/// Store `params` under its hash unless already present. First write wins.
pub fn register(e: &Env, params: &CampaignParams) -> BytesN<32> {
    let params_hash = hash_params(e, params);
    let key = PersistentKey::Params(params_hash.clone());

    if !e.storage().persistent().has(&key) {
        let stored = ParameterSet {
            cap: params.cap,
            price: params.price,
            start_height: params.start_height,
            end_height: params.end_height,
            beneficiary: params.beneficiary.clone(),
            admin: params.admin.clone(),
            status: CampaignStatus::Unset,
        };
        e.storage().persistent().set(&key, &stored);

        emit_params_registered(
            e,
            ParamsRegisteredEvent {
                params_hash: params_hash.clone(),
                cap: params.cap,
                beneficiary: params.beneficiary.clone(),
            },
        );
    }
    extend_persistent(e, &key);

    params_hash
}

pub fn load_params(e: &Env, params_hash: &BytesN<32>) -> Option<ParameterSet> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Params(params_hash.clone()))
}

pub fn store_params(e: &Env, params_hash: &BytesN<32>, params: &ParameterSet) {
    let key = PersistentKey::Params(params_hash.clone());
    e.storage().persistent().set(&key, params);
    extend_persistent(e, &key);
}
