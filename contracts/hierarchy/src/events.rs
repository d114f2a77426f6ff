use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const ACCOUNT_ADDED: Symbol = symbol_short!("acct_add");
pub const ACCOUNT_REVOKED: Symbol = symbol_short!("acct_rev");
pub const CAPACITY_REACHED: Symbol = symbol_short!("cap_full");
pub const TREASURY_SET: Symbol = symbol_short!("cfg_trsy");
pub const FEE_SET: Symbol = symbol_short!("cfg_fee");
pub const MAX_COUNT_SET: Symbol = symbol_short!("cfg_max");
pub const ADMIN_SET: Symbol = symbol_short!("cfg_admn");

pub fn account_added(e: &Env, account: &Address, parent: &Option<Address>) {
    e.events()
        .publish((ACCOUNT_ADDED, account.clone()), parent.clone());
}

pub fn account_revoked(e: &Env, account: &Address, revoker: &Address) {
    e.events()
        .publish((ACCOUNT_REVOKED, account.clone()), revoker.clone());
}

/// The parent just filled its last slot.
pub fn capacity_reached(e: &Env, parent: &Address, max_count: u32) {
    e.events()
        .publish((CAPACITY_REACHED, parent.clone()), max_count);
}

pub fn treasury_set(e: &Env, treasury: &Address) {
    e.events().publish((TREASURY_SET,), treasury.clone());
}

pub fn fee_set(e: &Env, fee: u32) {
    e.events().publish((FEE_SET,), fee);
}

pub fn max_count_set(e: &Env, max_count: u32) {
    e.events().publish((MAX_COUNT_SET,), max_count);
}

pub fn admin_set(e: &Env, admin: &Address) {
    e.events().publish((ADMIN_SET,), admin.clone());
}
