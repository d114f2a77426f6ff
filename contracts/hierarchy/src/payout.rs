use soroban_sdk::{log, token, Address, Env};

use crate::error::Error;
use crate::types::FEE_DENOMINATOR;

/// How a registration payment is divided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Split {
    pub parent: i128,
    pub treasury: i128,
}

/// Splits `payment` into the parent's fee and the treasury's remainder.
///
/// The fee is `floor(payment * fee / FEE_DENOMINATOR)`, computed without the
/// intermediate product. When the parent is missing or revoked the whole payment
/// goes to the treasury. Both legs always add up to `payment`.
pub fn split(payment: i128, fee: u32, parent_eligible: bool) -> Split {
    let denom = FEE_DENOMINATOR as i128;
    let fee = fee as i128;
    let parent = if parent_eligible {
        (payment / denom) * fee + (payment % denom) * fee / denom
    } else {
        0
    };
    Split {
        parent,
        treasury: payment - parent,
    }
}

/// Moves `amount` of `asset` from `from` to `to`. Any failure inside the token
/// contract is reported as `PayoutFailed` so the caller's whole call unwinds.
pub fn pay(e: &Env, asset: &Address, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(e, asset);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(_)) => Ok(()),
        _ => {
            log!(e, "payout failed", to.clone(), amount);
            Err(Error::PayoutFailed)
        }
    }
}
