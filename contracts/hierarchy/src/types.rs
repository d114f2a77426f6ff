use soroban_sdk::{contracttype, Address, Vec};

/// Base price of one registration slot, in token base units (1.0 of a 7-decimal asset).
pub const ACCOUNT_PRICE: i128 = 10_000_000;

/// Fee numerators are expressed over this denominator.
pub const FEE_DENOMINATOR: u32 = 100;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    None = 0,
    AddOnly = 1,
    RemoveOnly = 2,
    AddAndRemove = 3,
}

impl Role {
    const ADD_BIT: u32 = 0b01;
    const REMOVE_BIT: u32 = 0b10;

    /// Parses a raw role value; anything outside 0..=3 is rejected.
    pub fn from_u32(bits: u32) -> Option<Role> {
        match bits {
            0 => Some(Role::None),
            1 => Some(Role::AddOnly),
            2 => Some(Role::RemoveOnly),
            3 => Some(Role::AddAndRemove),
            _ => None,
        }
    }

    pub fn bits(self) -> u32 {
        self as u32
    }

    pub fn can_add(self) -> bool {
        self.bits() & Self::ADD_BIT != 0
    }

    pub fn can_remove(self) -> bool {
        self.bits() & Self::REMOVE_BIT != 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Account {
    pub parent: Option<Address>, // None only for the root
    pub children: Vec<Address>,  // registration order, never shrinks
    pub role: Role,
    pub removed: bool,           // one-way
}

/// Admin-owned parameters, re-read on every call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub root: Address,
    pub treasury: Address,
    pub token: Address,
    pub fee: u32,
    pub max_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Account(Address),
}
