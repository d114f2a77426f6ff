use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // lifecycle / admin
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    NotOwner = 4,

    // caller rights
    SenderRevoked = 10,
    NoAddPermission = 11,
    NoRemovePermission = 12,

    // target state
    InvalidTarget = 20,
    CannotAddRoot = 21,
    CannotRemoveRoot = 22,
    AlreadyExists = 23,
    NotFound = 24,
    AlreadyRemoved = 25,
    InvalidRole = 26,

    CapacityExceeded = 30,

    InsufficientPayment = 40,
    PayoutFailed = 41,

    IndexOutOfRange = 50,
}

/// Coarse grouping of [`Error`] variants for callers that only care what kind of
/// rejection happened.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Config,
    Authorization,
    State,
    Capacity,
    Payment,
    Range,
}

impl Error {
    pub fn class(self) -> ErrorClass {
        match self {
            Error::AlreadyInitialized | Error::NotInitialized | Error::InvalidConfig => {
                ErrorClass::Config
            }
            Error::NotOwner
            | Error::SenderRevoked
            | Error::NoAddPermission
            | Error::NoRemovePermission => ErrorClass::Authorization,
            Error::InvalidTarget
            | Error::CannotAddRoot
            | Error::CannotRemoveRoot
            | Error::AlreadyExists
            | Error::NotFound
            | Error::AlreadyRemoved
            | Error::InvalidRole => ErrorClass::State,
            Error::CapacityExceeded => ErrorClass::Capacity,
            Error::InsufficientPayment | Error::PayoutFailed => ErrorClass::Payment,
            Error::IndexOutOfRange => ErrorClass::Range,
        }
    }
}
