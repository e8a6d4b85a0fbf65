use soroban_sdk::{Address, BytesN, Env};

use crate::storage_types::*;

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn read_currency(e: &Env) -> Result<Address, CrowdsaleError> {
    e.storage()
        .instance()
        .get(&DataKey::Currency)
        .ok_or(CrowdsaleError::NotInitialized)
}

pub fn load_organization(e: &Env, org: &Address) -> Option<Organization> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Organization(org.clone()))
}

pub fn store_organization(e: &Env, org: &Address, record: &Organization) {
    let key = PersistentKey::Organization(org.clone());
    e.storage().persistent().set(&key, record);
    extend_persistent(e, &key);
}

/// Snapshot of a contributor's balances; zero when nothing was ever recorded.
pub fn load_balance(e: &Env, params_hash: &BytesN<32>, contributor: &Address) -> LedgerBalance {
    e.storage()
        .persistent()
        .get(&PersistentKey::Balance(params_hash.clone(), contributor.clone()))
        .unwrap_or_default()
}

pub fn store_balance(
    e: &Env,
    params_hash: &BytesN<32>,
    contributor: &Address,
    balance: &LedgerBalance,
) {
    let key = PersistentKey::Balance(params_hash.clone(), contributor.clone());
    e.storage().persistent().set(&key, balance);
    extend_persistent(e, &key);
}
