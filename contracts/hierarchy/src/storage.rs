use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::types::{Account, Config, DataKey};

const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_THRESHOLD: u32 = INSTANCE_BUMP - DAY_IN_LEDGERS;
pub const ACCOUNT_BUMP: u32 = 90 * DAY_IN_LEDGERS;
pub const ACCOUNT_THRESHOLD: u32 = ACCOUNT_BUMP - DAY_IN_LEDGERS;

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn get_config(e: &Env) -> Result<Config, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn put_config(e: &Env, cfg: &Config) {
    e.storage().instance().set(&DataKey::Config, cfg);
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD, INSTANCE_BUMP);
}

pub fn get_account(e: &Env, id: &Address) -> Option<Account> {
    e.storage().persistent().get(&DataKey::Account(id.clone()))
}

pub fn has_account(e: &Env, id: &Address) -> bool {
    e.storage().persistent().has(&DataKey::Account(id.clone()))
}

pub fn put_account(e: &Env, id: &Address, account: &Account) {
    e.storage().persistent().set(&DataKey::Account(id.clone()), account);
    touch_account(e, id);
}

/// Extends an existing account entry's TTL. The entry must be present.
pub fn touch_account(e: &Env, id: &Address) {
    e.storage()
        .persistent()
        .extend_ttl(&DataKey::Account(id.clone()), ACCOUNT_THRESHOLD, ACCOUNT_BUMP);
}
