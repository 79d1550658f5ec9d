use lazy_static::*;

use crate::BigInt;

/// Base of one limb.
pub const RADIX: u32 = 1_000_000_000;

pub const RADIX_U64: u64 = RADIX as u64;

/// Decimal digits held by a full limb.
pub const DIGITS_PER_LIMB: usize = 9;

lazy_static! {
    pub static ref ONE: BigInt = BigInt::from(1_u32);
}
