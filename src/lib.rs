//! Dec Big Num \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers kept in sign-magnitude form over base `10^9` limbs,
//!   with truncating division and a remainder that follows the sign of the dividend.
//! - [`BigIntError`]: the errors raised by parsing and by division by zero.
//!
//! Enable the `serde` feature to (de)serialize [`BigInt`] as a decimal string.

mod big_int;
mod big_num_constants;
#[cfg(feature = "serde")]
mod big_num_serde;
mod error;

pub use big_int::{BigInt, Sign};
pub use big_num_constants::{DIGITS_PER_LIMB, RADIX};
pub use error::BigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
