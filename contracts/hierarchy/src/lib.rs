#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod error;
mod events;
mod payout;
mod storage;
mod types;

pub use error::{Error, ErrorClass};
pub use types::{Account, Config, Role, ACCOUNT_PRICE, FEE_DENOMINATOR};

#[contract]
pub struct HierarchyContract;

fn check_fee(fee: u32) -> Result<(), Error> {
    if fee > FEE_DENOMINATOR { return Err(Error::InvalidConfig); }
    Ok(())
}

fn check_max_count(max_count: u32) -> Result<(), Error> {
    if max_count <= 1 { return Err(Error::InvalidConfig); }
    Ok(())
}

/// The store's own address stands in for the absent identity.
fn is_sentinel(e: &Env, id: &Address) -> bool {
    *id == e.current_contract_address()
}

/// Loads the caller's record, rejecting unknown and revoked callers alike.
/// Acting accounts get their TTL extended even when nothing is written to them.
fn active_account(e: &Env, caller: &Address) -> Result<Account, Error> {
    match storage::get_account(e, caller) {
        Some(acct) if !acct.removed => {
            storage::touch_account(e, caller);
            Ok(acct)
        }
        _ => Err(Error::SenderRevoked),
    }
}

fn require_admin(e: &Env, caller: &Address) -> Result<Config, Error> {
    caller.require_auth();
    let cfg = storage::get_config(e)?;
    if *caller != cfg.admin { return Err(Error::NotOwner); }
    Ok(cfg)
}

fn slot_price(slot: u32) -> i128 {
    slot as i128 * ACCOUNT_PRICE
}

#[contractimpl]
impl HierarchyContract {
    /// One-time initializer. Seeds the root account.
    pub fn init(
        e: Env,
        admin: Address,
        root: Address,
        treasury: Address,
        token: Address,
        fee: u32,
        max_count: u32,
    ) -> Result<(), Error> {
        if is_sentinel(&e, &admin) { return Err(Error::InvalidConfig); }
        admin.require_auth();
        if storage::has_config(&e) { return Err(Error::AlreadyInitialized); }
        if is_sentinel(&e, &root) || is_sentinel(&e, &treasury) { return Err(Error::InvalidConfig); }
        check_fee(fee)?;
        check_max_count(max_count)?;

        let cfg = Config { admin, root: root.clone(), treasury, token, fee, max_count };
        storage::put_config(&e, &cfg);
        storage::bump_instance(&e);

        let account = Account {
            parent: None,
            children: Vec::new(&e),
            role: Role::AddAndRemove,
            removed: false,
        };
        storage::put_account(&e, &root, &account);
        events::account_added(&e, &root, &None);
        log!(&e, "hierarchy initialized", root, fee, max_count);
        Ok(())
    }

    /// Registers `new_account` under `caller`, charging `payment` for the slot.
    ///
    /// The payment is pulled from `caller` and forwarded in the same call: the
    /// fee share to the caller's parent, the rest to the treasury. Every state
    /// change is written before either transfer runs.
    pub fn register_child(
        e: Env,
        caller: Address,
        new_account: Address,
        role: Option<u32>,
        payment: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let cfg = storage::get_config(&e)?;

        let mut parent_acct = active_account(&e, &caller)?;
        if !parent_acct.role.can_add() { return Err(Error::NoAddPermission); }
        if is_sentinel(&e, &new_account) { return Err(Error::InvalidTarget); }
        if new_account == cfg.root { return Err(Error::CannotAddRoot); }
        if storage::has_account(&e, &new_account) { return Err(Error::AlreadyExists); }

        let role = match role {
            Some(bits) => Role::from_u32(bits).ok_or(Error::InvalidRole)?,
            None => parent_acct.role,
        };

        let slot = parent_acct.children.len() + 1;
        if slot > cfg.max_count { return Err(Error::CapacityExceeded); }
        if payment < slot_price(slot) { return Err(Error::InsufficientPayment); }

        // effects
        parent_acct.children.push_back(new_account.clone());
        storage::put_account(&e, &caller, &parent_acct);
        let child = Account {
            parent: Some(caller.clone()),
            children: Vec::new(&e),
            role,
            removed: false,
        };
        storage::put_account(&e, &new_account, &child);
        storage::bump_instance(&e);

        events::account_added(&e, &new_account, &child.parent);
        if slot == cfg.max_count {
            events::capacity_reached(&e, &caller, cfg.max_count);
        }
        log!(&e, "child registered", caller.clone(), new_account, slot);

        // interactions
        let grandparent = parent_acct.parent.clone();
        let eligible = match &grandparent {
            Some(gp) => match storage::get_account(&e, gp) {
                Some(a) => {
                    storage::touch_account(&e, gp);
                    !a.removed
                }
                None => false,
            },
            None => false,
        };
        let split = payout::split(payment, cfg.fee, eligible);
        if let Some(gp) = grandparent.filter(|_| split.parent > 0) {
            payout::pay(&e, &cfg.token, &caller, &gp, split.parent)?;
        }
        payout::pay(&e, &cfg.token, &caller, &cfg.treasury, split.treasury)?;
        Ok(())
    }

    /// Marks `target` as removed. Its links and children are left as they are.
    pub fn revoke_account(e: Env, caller: Address, target: Address) -> Result<(), Error> {
        caller.require_auth();
        let cfg = storage::get_config(&e)?;

        let acct = active_account(&e, &caller)?;
        if !acct.role.can_remove() { return Err(Error::NoRemovePermission); }
        if is_sentinel(&e, &target) { return Err(Error::InvalidTarget); }
        if target == cfg.root { return Err(Error::CannotRemoveRoot); }
        let mut victim = storage::get_account(&e, &target).ok_or(Error::NotFound)?;
        if victim.removed { return Err(Error::AlreadyRemoved); }

        victim.removed = true;
        storage::put_account(&e, &target, &victim);
        storage::bump_instance(&e);

        events::account_revoked(&e, &target, &caller);
        log!(&e, "account revoked", target, caller);
        Ok(())
    }

    // --- reads ---

    pub fn child_at(e: Env, account: Address, index: u32) -> Result<Address, Error> {
        storage::get_account(&e, &account)
            .and_then(|a| a.children.get(index))
            .ok_or(Error::IndexOutOfRange)
    }

    pub fn child_count(e: Env, account: Address) -> u32 {
        storage::get_account(&e, &account).map_or(0, |a| a.children.len())
    }

    pub fn children(e: Env, account: Address) -> Vec<Address> {
        storage::get_account(&e, &account).map_or(Vec::new(&e), |a| a.children)
    }

    pub fn parent_of(e: Env, account: Address) -> Option<Address> {
        storage::get_account(&e, &account).and_then(|a| a.parent)
    }

    /// Raw role value; 0 for identities that were never registered.
    pub fn role_of(e: Env, account: Address) -> u32 {
        storage::get_account(&e, &account).map_or(Role::None, |a| a.role).bits()
    }

    /// False only for revoked accounts. Unknown identities read as alive;
    /// use `exists` to tell them apart.
    pub fn is_alive(e: Env, account: Address) -> bool {
        storage::get_account(&e, &account).map_or(true, |a| !a.removed)
    }

    pub fn exists(e: Env, account: Address) -> bool {
        storage::has_account(&e, &account)
    }

    /// Minimum payment for `account`'s next registration.
    pub fn quote(e: Env, account: Address) -> Result<i128, Error> {
        let cfg = storage::get_config(&e)?;
        let slot = Self::child_count(e, account) + 1;
        if slot > cfg.max_count { return Err(Error::CapacityExceeded); }
        Ok(slot_price(slot))
    }

    pub fn root(e: Env) -> Result<Address, Error> {
        Ok(storage::get_config(&e)?.root)
    }

    pub fn config(e: Env) -> Result<Config, Error> {
        storage::get_config(&e)
    }

    // --- admin ---

    pub fn set_treasury(e: Env, caller: Address, treasury: Address) -> Result<(), Error> {
        let mut cfg = require_admin(&e, &caller)?;
        if is_sentinel(&e, &treasury) { return Err(Error::InvalidConfig); }
        cfg.treasury = treasury.clone();
        storage::put_config(&e, &cfg);
        storage::bump_instance(&e);
        events::treasury_set(&e, &treasury);
        log!(&e, "treasury updated", treasury);
        Ok(())
    }

    pub fn set_fee(e: Env, caller: Address, fee: u32) -> Result<(), Error> {
        let mut cfg = require_admin(&e, &caller)?;
        check_fee(fee)?;
        cfg.fee = fee;
        storage::put_config(&e, &cfg);
        storage::bump_instance(&e);
        events::fee_set(&e, fee);
        log!(&e, "fee updated", fee);
        Ok(())
    }

    pub fn set_max_count(e: Env, caller: Address, max_count: u32) -> Result<(), Error> {
        let mut cfg = require_admin(&e, &caller)?;
        check_max_count(max_count)?;
        cfg.max_count = max_count;
        storage::put_config(&e, &cfg);
        storage::bump_instance(&e);
        events::max_count_set(&e, max_count);
        log!(&e, "max count updated", max_count);
        Ok(())
    }

    pub fn transfer_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        let mut cfg = require_admin(&e, &caller)?;
        if is_sentinel(&e, &new_admin) { return Err(Error::InvalidConfig); }
        cfg.admin = new_admin.clone();
        storage::put_config(&e, &cfg);
        storage::bump_instance(&e);
        events::admin_set(&e, &new_admin);
        log!(&e, "admin transferred", new_admin);
        Ok(())
    }
}
