//! # BigInt
//! Arbitrary-precision signed integers stored as sign and magnitude, the magnitude
//! being a little-endian vector of base `10^9` limbs.
//! # Example
//! ```
//! use dec_big_num::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```
//!

use std::fmt::{self, Display, Write};
use std::io::BufRead;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::str::FromStr;

use crate::big_num_constants::*;
use crate::error::BigIntError;

/// Sign of a [`BigInt`]. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Equality is plain field equality: every value is kept in canonical form,
/// so equal limb sequences mean equal magnitudes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    limbs: Vec<u32>,
}

// 规范化辅助函数
impl BigInt {
    /// Strips most-significant zero limbs, keeping at least one limb.
    fn trim(limbs: &mut Vec<u32>) {
        while limbs.len() > 1 && limbs.last() == Some(&0) {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
    }

    /// The only way scratch limbs become a public value.
    fn from_parts(sign: Sign, mut limbs: Vec<u32>) -> BigInt {
        BigInt::trim(&mut limbs);
        let sign = if limbs == [0] { Sign::Positive } else { sign };
        BigInt { sign, limbs }
    }
}

// 实现构造
impl BigInt {
    pub fn zero() -> BigInt {
        BigInt { sign: Sign::Positive, limbs: vec![0] }
    }

    fn from_magnitude(sign: Sign, mut val: u128) -> BigInt {
        let mut limbs = Vec::with_capacity(5);
        loop {
            limbs.push((val % RADIX as u128) as u32);
            val /= RADIX as u128;
            if val == 0 {
                break;
            }
        }
        BigInt::from_parts(sign, limbs)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Magnitude limbs, least significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_magnitude(Sign::Positive, val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Negative } else { Sign::Positive };
            BigInt::from_magnitude(sign, val.unsigned_abs() as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

// 实现转换
impl BigInt {
    fn magnitude_u64(&self) -> Option<u64> {
        self.limbs.iter().rev().try_fold(0_u64, |acc, &limb| {
            acc.checked_mul(RADIX_U64)?.checked_add(limb as u64)
        })
    }

    /// `None` if the value is negative or does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        self.magnitude_u64()
    }

    pub fn to_i64(&self) -> Option<i64> {
        let mag = self.magnitude_u64()?;
        match self.sign {
            Sign::Positive => i64::try_from(mag).ok(),
            Sign::Negative if mag <= i64::MIN.unsigned_abs() => Some((mag as i64).wrapping_neg()),
            Sign::Negative => None,
        }
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.limbs.len() * DIGITS_PER_LIMB);
        let mut iter = self.limbs.iter().rev();
        if let Some(most) = iter.next() {
            write!(digits, "{}", most)?;
        }
        for limb in iter {
            write!(digits, "{:0width$}", limb, width = DIGITS_PER_LIMB)?;
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl From<&BigInt> for String {
    fn from(val: &BigInt) -> Self {
        val.to_string()
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = BigIntError;

    /// Accepts an optional `+` or `-` followed by ASCII digits. The empty
    /// string is zero.
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        if val.is_empty() {
            return Ok(BigInt::zero());
        }

        let (sign, digits) = match val.as_bytes()[0] {
            b'-' => (Sign::Negative, &val[1..]),
            b'+' => (Sign::Positive, &val[1..]),
            _ => (Sign::Positive, val),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(len = val.len(), "rejected malformed decimal input");
            return Err(BigIntError::malformed(val));
        }

        // rchunks walks from the least significant end, which is limb order
        let limbs = digits
            .as_bytes()
            .rchunks(DIGITS_PER_LIMB)
            .map(|group| group.iter().fold(0_u32, |acc, &b| acc * 10 + (b - b'0') as u32))
            .collect();

        Ok(BigInt::from_parts(sign, limbs))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        val.parse()
    }
}

impl BigInt {
    /// Reads one whitespace-delimited token from `reader` and parses it.
    ///
    /// Leading whitespace is skipped and the delimiter after the token is left
    /// in the reader. Returns `Ok(None)` when the input ends before any token.
    pub fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<BigInt>, BigIntError> {
        let mut token: Vec<u8> = Vec::new();
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut finished = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        finished = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                consumed += 1;
            }
            reader.consume(consumed);
            if finished {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        match String::from_utf8(token) {
            Ok(text) => text.parse().map(Some),
            Err(err) => {
                tracing::debug!(len = err.as_bytes().len(), "rejected non utf-8 token");
                Err(BigIntError::malformed(&String::from_utf8_lossy(err.as_bytes())))
            }
        }
    }
}

// 实现大小比较
impl BigInt {
    /// Compares two canonical magnitudes.
    fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let ord = BigInt::compare_mag(&self.limbs, &other.limbs);
        match self.sign {
            Sign::Positive => ord,
            Sign::Negative => ord.reverse(),
        }
    }
}

macro_rules! impl_eq_native {
    ($($t: ty),*) => {
    $(
    impl PartialEq<$t> for BigInt {
        fn eq(&self, other: &$t) -> bool {
            *self == BigInt::from(*other)
        }
    }
    )*
    };
}
impl_eq_native!(i32, i64, u32, u64);

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        BigInt { sign: Sign::Positive, limbs: self.limbs.clone() }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, limbs } = self;
        BigInt::from_parts(-sign, limbs)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

/// Forwards the owned and mixed forms of a binary operator, and its compound
/// assignment, to the `&BigInt op &BigInt` impl.
macro_rules! forward_binop {
    ($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident) => {
        impl $Op for BigInt {
            type Output = BigInt;

            fn $op(self, rhs: BigInt) -> Self::Output {
                (&self).$op(&rhs)
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            fn $op(self, rhs: &BigInt) -> Self::Output {
                (&self).$op(rhs)
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: BigInt) -> Self::Output {
                self.$op(&rhs)
            }
        }

        impl $OpAssign for BigInt {
            fn $op_assign(&mut self, rhs: BigInt) {
                *self = (&*self).$op(&rhs);
            }
        }

        impl $OpAssign<&BigInt> for BigInt {
            fn $op_assign(&mut self, rhs: &BigInt) {
                *self = (&*self).$op(rhs);
            }
        }
    };
}

// 实现加减法
impl BigInt {
    /// `self + rhs` where `rhs` is taken with sign `rhs_sign`. Subtraction is
    /// addition of the flipped sign.
    fn add_signed(&self, rhs: &BigInt, rhs_sign: Sign) -> BigInt {
        if self.sign == rhs_sign {
            return BigInt::from_parts(self.sign, BigInt::add_mag(&self.limbs, &rhs.limbs));
        }

        match BigInt::compare_mag(&self.limbs, &rhs.limbs) {
            Ordering::Less => BigInt::from_parts(rhs_sign, BigInt::sub_mag(&rhs.limbs, &self.limbs)),
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::from_parts(self.sign, BigInt::sub_mag(&self.limbs, &rhs.limbs)),
        }
    }

    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry: u64 = 0;
        for (i, &limb) in long.iter().enumerate() {
            let sum = limb as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
            result.push((sum % RADIX_U64) as u32);
            carry = sum / RADIX_U64;
        }
        result.push(carry as u32);

        result
    }

    /// Requires `big >= little` as magnitudes.
    fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow: i64 = 0;
        for (i, &limb) in big.iter().enumerate() {
            let mut difference = limb as i64 - little.get(i).copied().unwrap_or(0) as i64 - borrow;
            if difference < 0 {
                difference += RADIX as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(difference as u32);
        }
        debug_assert_eq!(borrow, 0, "sub_mag called with big < little");

        result
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        self.add_signed(rhs, rhs.sign)
    }
}
forward_binop!(Add, add, AddAssign, add_assign);

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        self.add_signed(rhs, -rhs.sign)
    }
}
forward_binop!(Sub, sub, SubAssign, sub_assign);

// 实现自增自减
impl BigInt {
    /// `self += 1`, returning the updated value.
    pub fn inc(&mut self) -> &mut Self {
        *self += &*ONE;
        self
    }

    /// `self -= 1`, returning the updated value.
    pub fn dec(&mut self) -> &mut Self {
        *self -= &*ONE;
        self
    }

    /// `self += 1`, returning the value before the increment.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.inc();
        old
    }

    /// `self -= 1`, returning the value before the decrement.
    pub fn post_dec(&mut self) -> BigInt {
        let old = self.clone();
        self.dec();
        old
    }
}

// 实现乘法
impl BigInt {
    /// Schoolbook product of two magnitudes.
    fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        if y.len() == 1 {
            return BigInt::mul_by_limb(x, y[0]);
        }
        if x.len() == 1 {
            return BigInt::mul_by_limb(y, x[0]);
        }

        // Each slot is reduced as soon as it is touched, so a slot never
        // holds more than RADIX^2 + 2 * RADIX.
        let mut scratch = vec![0_u64; x.len() + y.len() + 1];
        for (i, &a) in x.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in y.iter().enumerate() {
                let slot = scratch[i + j] + a as u64 * b as u64;
                scratch[i + j] = slot % RADIX_U64;
                scratch[i + j + 1] += slot / RADIX_U64;
            }
        }

        let mut carry = 0;
        scratch
            .into_iter()
            .map(|slot| {
                let total = slot + carry;
                carry = total / RADIX_U64;
                (total % RADIX_U64) as u32
            })
            .collect()
    }

    fn mul_by_limb(x: &[u32], y: u32) -> Vec<u32> {
        let mut result = Vec::with_capacity(x.len() + 1);
        let mut carry: u64 = 0;
        for &limb in x {
            let product = limb as u64 * y as u64 + carry;
            result.push((product % RADIX_U64) as u32);
            carry = product / RADIX_U64;
        }
        result.push(carry as u32);

        result
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        let sign = if self.sign == rhs.sign { Sign::Positive } else { Sign::Negative };
        BigInt::from_parts(sign, BigInt::mul_mag(&self.limbs, &rhs.limbs))
    }
}
forward_binop!(Mul, mul, MulAssign, mul_assign);

impl BigInt {
    /// Square-and-multiply. `x.pow(0)` is one for every `x`, zero included.
    pub fn pow(&self, mut exp: u32) -> BigInt {
        let _scope = tracing::trace_span!("BigInt pow", limbs = self.limbs.len(), exp).entered();

        let mut result = ONE.clone();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }
}

// 实现除法与求余
impl BigInt {
    /// Truncating division and remainder in one pass.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `self == q * divisor + r` and `|r| < |divisor|`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }

        if BigInt::compare_mag(&self.limbs, &divisor.limbs) == Ordering::Less {
            return Ok((BigInt::zero(), self.clone()));
        }

        let _scope = tracing::trace_span!(
            "BigInt long division",
            dividend_limbs = self.limbs.len(),
            divisor_limbs = divisor.limbs.len(),
        )
        .entered();

        let (quotient, remainder) = BigInt::div_rem_mag(&self.limbs, &divisor.limbs);
        let quotient_sign = if self.sign == divisor.sign { Sign::Positive } else { Sign::Negative };

        Ok((
            BigInt::from_parts(quotient_sign, quotient),
            BigInt::from_parts(self.sign, remainder),
        ))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Long division one dividend limb at a time, most significant first.
    /// Each quotient limb is found by binary search over `[0, RADIX)`.
    /// `divisor` must be canonical and non-zero.
    fn div_rem_mag(dividend: &[u32], divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
        let mut quotient = vec![0_u32; dividend.len()];
        // shifting by one limb is a push_front
        let mut remainder: VecDeque<u32> = VecDeque::from(vec![0]);

        for (i, &limb) in dividend.iter().enumerate().rev() {
            remainder.push_front(limb);
            while remainder.len() > 1 && remainder.back() == Some(&0) {
                remainder.pop_back();
            }
            let current = remainder.make_contiguous();

            if BigInt::compare_mag(current, divisor) == Ordering::Less {
                continue;
            }

            // invariant: divisor * low <= current < divisor * high
            let mut low: u32 = 1;
            let mut high: u32 = RADIX;
            while high - low > 1 {
                let mid = low + (high - low) / 2;
                let mut product = BigInt::mul_by_limb(divisor, mid);
                BigInt::trim(&mut product);
                if BigInt::compare_mag(&product, current) == Ordering::Greater {
                    high = mid;
                } else {
                    low = mid;
                }
            }

            let mut product = BigInt::mul_by_limb(divisor, low);
            BigInt::trim(&mut product);
            let mut difference = BigInt::sub_mag(current, &product);
            BigInt::trim(&mut difference);
            remainder = VecDeque::from(difference);
            quotient[i] = low;
        }

        (quotient, Vec::from(remainder))
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero. Use [`BigInt::checked_div`] to get an error instead.
    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}
forward_binop!(Div, div, DivAssign, div_assign);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero. Use [`BigInt::checked_rem`] to get an error instead.
    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}
forward_binop!(Rem, rem, RemAssign, rem_assign);

// 实现累加累乘
impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, val| acc + val)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, val| acc + val)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, val| acc * val)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, val| acc * val)
    }
}

#[cfg(test)]
fn big(val: &str) -> BigInt {
    val.parse().unwrap()
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.limbs, vec![12]);
    assert_eq!(big_num.sign, Sign::Positive);

    let num: i16 = -100;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.limbs, vec![100]);
    assert_eq!(big_num.sign, Sign::Negative);

    let big_num = BigInt::from(1_234_567_890_u64);
    assert_eq!(big_num.limbs, vec![234_567_890, 1]);

    let big_num = BigInt::from(u64::MAX);
    assert_eq!(big_num.to_string(), "18446744073709551615");

    let big_num = BigInt::from(i64::MIN);
    assert_eq!(big_num.to_string(), "-9223372036854775808");
    assert_eq!(big_num.to_i64(), Some(i64::MIN));

    let big_num = BigInt::from(0_i64);
    assert_eq!(big_num, BigInt::zero());
    assert_eq!(big_num, BigInt::default());
}

#[test]
fn test_from_str() {
    assert_eq!(big("123456789012345678901234567890").to_string(), "123456789012345678901234567890");
    assert_eq!(big("123456789012345678901234567890").limbs, vec![234_567_890, 345_678_901, 456_789_012, 123]);
    assert_eq!(big("+42"), 42_i64);
    assert_eq!(big("-42"), -42_i64);
    assert_eq!(big("000000000000000000042"), 42_i64);
    assert_eq!(big("1000000000").limbs, vec![0, 1]);

    let zero = big("-0000");
    assert_eq!(zero.sign, Sign::Positive);
    assert_eq!(zero.limbs, vec![0]);
    assert_eq!(big(""), BigInt::zero());
}

#[test]
fn test_from_str_malformed() {
    for input in ["-", "+", "12a3", " 12", "12 ", "--1", "+-1", "1-", "１２"] {
        match input.parse::<BigInt>() {
            Err(BigIntError::MalformedInput { input: rejected }) => assert_eq!(rejected, input),
            other => panic!("{:?} parsed as {:?}", input, other),
        }
    }
    assert!(BigInt::try_from("0x10").is_err());
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::from(-1_000_000_001_i64).to_string(), "-1000000001");
    assert_eq!(big("1000000000000000000").to_string(), "1000000000000000000");
    assert_eq!(String::from(&big("-7")), "-7");
    assert_eq!(format!("{:>6}", big("-42")), "   -42");
    assert_eq!(format!("{:+}", big("42")), "+42");
    assert_eq!(format!("{:05}", big("-42")), "-0042");
}

#[test]
fn test_cmp() {
    assert!(big("12345") == big("12345"));
    assert!(big("12345") != big("54321"));
    assert!(big("12345") < big("12346"));
    assert!(big("-12346") < big("-12345"));
    assert!(big("-1") < big("0"));
    assert!(big("-10000000000") < big("-1"));
    assert!(big("10000000000") > big("999999999"));
    assert!(big("5") >= big("5"));
    assert!(big("5") <= big("5"));
    assert_eq!(big("-0"), big("0"));
}

#[test]
fn test_add() {
    assert_eq!(big("12345") + big("54321"), big("66666"));
    assert_eq!(big("0") + big("0"), big("0"));
    assert_eq!(big("999") + big("1"), big("1000"));
    assert_eq!(big("999999999") + big("1"), big("1000000000"));
    assert_eq!(big("-10") + big("5"), big("-5"));
    assert_eq!(big("100") + big("-100"), big("0"));
    assert_eq!((big("100") + big("-100")).sign, Sign::Positive);
    assert_eq!(
        big("12345678901234567890") + big("98765432109876543210"),
        big("111111111011111111100")
    );

    let mut a = big("999999999999999999");
    a += big("1");
    assert_eq!(a.to_string(), "1000000000000000000");
}

#[test]
fn test_sub() {
    assert_eq!(big("10") - big("5"), big("5"));
    assert_eq!(big("5") - big("10"), big("-5"));
    assert_eq!(big("0") - big("10"), big("-10"));
    assert_eq!(big("100") - big("100"), big("0"));
    assert_eq!(big("-10") - big("-5"), big("-5"));
    assert_eq!(big("-5") - big("-10"), big("5"));
    assert_eq!(big("-5") - big("10"), big("-15"));
    assert_eq!(big("1000000000") - big("1"), big("999999999"));
    assert_eq!(
        big("12345678901234567890") - big("98765432109876543210"),
        big("-86419753208641975320")
    );

    let diff = big("1000000000000000000") - big("999999999999999999");
    assert_eq!(diff.limbs, vec![1]);
}

#[test]
fn test_neg_abs() {
    assert_eq!(-big("5"), big("-5"));
    assert_eq!(-&big("-5"), big("5"));
    assert_eq!((-big("0")).sign, Sign::Positive);
    assert_eq!(big("-12345678901234567890").abs(), big("12345678901234567890"));
    assert_eq!(big("-3").signum(), -1);
    assert_eq!(big("0").signum(), 0);
    assert_eq!(big("3").signum(), 1);
}

#[test]
fn test_inc_dec() {
    let mut a = big("999999999");
    a.inc();
    assert_eq!(a, big("1000000000"));
    a.dec().dec();
    assert_eq!(a, big("999999998"));

    let mut b = big("-1");
    let old = b.post_inc();
    assert_eq!(old, big("-1"));
    assert_eq!(b, BigInt::zero());
    assert_eq!(b.sign, Sign::Positive);

    let old = b.post_dec();
    assert_eq!(old, BigInt::zero());
    assert_eq!(b, big("-1"));
}

#[test]
fn test_mul() {
    assert_eq!(big("10") * big("5"), big("50"));
    assert_eq!(big("0") * big("10"), big("0"));
    assert_eq!((big("-10") * big("0")).sign, Sign::Positive);
    assert_eq!(big("-10") * big("5"), big("-50"));
    assert_eq!(big("10") * big("-5"), big("-50"));
    assert_eq!(big("-10") * big("-5"), big("50"));
    assert_eq!(big("1234") * big("5678"), big("7006652"));
    assert_eq!(
        big("999999999999999999999999999") * big("999999999999999999999999999"),
        big("999999999999999999999999998000000000000000000000000001")
    );
    assert_eq!(
        big("123456789012345678901234567890") * big("-987654321098765432109876543210"),
        big("-121932631137021795226185032733622923332237463801111263526900")
    );
}

#[test]
fn test_mul_mag() {
    assert_eq!(BigInt::mul_by_limb(&[999_999_999], 999_999_999), vec![1, 999_999_998]);
    let product = BigInt::mul_mag(&[999_999_999, 999_999_999], &[999_999_999, 999_999_999]);
    assert_eq!(product, vec![1, 0, 999_999_998, 999_999_999, 0]);
}

#[test]
fn test_pow() {
    assert_eq!(big("0").pow(0), big("1"));
    assert_eq!(big("-7").pow(0), big("1"));
    assert_eq!(big("0").pow(5), big("0"));
    assert_eq!(big("2").pow(100), big("1267650600228229401496703205376"));
    assert_eq!(big("-3").pow(3), big("-27"));
    assert_eq!(big("10").pow(27), big("1000000000000000000000000000"));
}

#[test]
fn test_div() {
    assert_eq!(big("10") / big("5"), big("2"));
    assert_eq!(big("11") / big("5"), big("2"));
    assert_eq!(big("0") / big("10"), big("0"));
    assert_eq!(big("100") / big("-10"), big("-10"));
    assert_eq!(big("-100") / big("10"), big("-10"));
    assert_eq!(big("-100") / big("-10"), big("10"));
    assert_eq!(big("7006652") / big("1234"), big("5678"));
    assert_eq!(big("100") / big("3"), big("33"));
    assert_eq!((big("-1") / big("3")).sign, Sign::Positive);

    let a = big("10000000000000000000000000000000000");
    assert_eq!(a / big("1000"), big("10000000000000000000000000000000"));

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(a / b, c);
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("100") % big("3"), big("1"));
    assert_eq!(big("10000000000000000") % big("10"), BigInt::zero());
    assert_eq!(big("-7") % big("2"), big("-1"));
    assert_eq!(big("7") % big("-2"), big("1"));
    assert_eq!(big("-7") % big("-2"), big("-1"));
    assert_eq!(big("3") % big("7"), big("3"));

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    assert_eq!(a % b, big("393707270751296419349581795408095683999332705291"));
}

#[test]
fn test_div_rem_identity() {
    let values = ["0", "1", "-1", "999999999", "1000000000", "-123456789012345678901", "98765432109876543210987654321"];
    for a in values {
        for b in values.iter().filter(|b| **b != "0") {
            let (a, b) = (big(a), big(b));
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&q * &b + &r, a, "{} / {}", a, b);
            assert!(r.abs() < b.abs());
            assert!(r.is_zero() || r.sign == a.sign);
        }
    }
}

#[test]
fn test_div_by_zero() {
    assert!(matches!(big("5").checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero)));
    assert!(matches!(big("-5").checked_rem(&big("-0")), Err(BigIntError::DivisionByZero)));
    assert!(matches!(BigInt::zero().div_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero)));
    assert!(std::panic::catch_unwind(|| big("5") / BigInt::zero()).is_err());
    assert!(std::panic::catch_unwind(|| big("5") % BigInt::zero()).is_err());
}

#[test]
fn test_to_native() {
    assert_eq!(big("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(big("18446744073709551616").to_u64(), None);
    assert_eq!(big("-1").to_u64(), None);
    assert_eq!(big("9223372036854775807").to_i64(), Some(i64::MAX));
    assert_eq!(big("9223372036854775808").to_i64(), None);
    assert_eq!(big("-9223372036854775809").to_i64(), None);
}

#[test]
fn test_read_token() {
    let mut input = std::io::Cursor::new("  12345\n-678901234567890 +0\tjunk");
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(big("12345")));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(big("-678901234567890")));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(BigInt::zero()));
    assert!(matches!(BigInt::read_token(&mut input), Err(BigIntError::MalformedInput { .. })));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), None);

    let mut empty = std::io::Cursor::new(" \n ");
    assert_eq!(BigInt::read_token(&mut empty).unwrap(), None);

    let mut not_utf8 = std::io::Cursor::new(vec![b'1', 0xff, b' ']);
    assert!(matches!(BigInt::read_token(&mut not_utf8), Err(BigIntError::MalformedInput { .. })));
}

#[test]
fn test_read_token_io_error() {
    struct BrokenReader;

    impl std::io::Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe"))
        }
    }

    impl BufRead for BrokenReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    match BigInt::read_token(&mut BrokenReader) {
        Err(BigIntError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::Other),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn test_div_rem_mag() {
    // 10^27 / 7
    let (q, r) = BigInt::div_rem_mag(&[0, 0, 0, 1], &[7]);
    assert_eq!(q, vec![142_857_142, 857_142_857, 142_857_142, 0]);
    assert_eq!(r, vec![6]);

    // remainder drops to zero limbs in the middle of the dividend
    let (q, r) = BigInt::div_rem_mag(&[5, 0, 0, 1], &[0, 0, 1]);
    assert_eq!(q, vec![0, 1, 0, 0]);
    assert_eq!(r, vec![5]);
}

#[test]
fn test_sum_product() {
    let values = vec![big("999999999"), big("1"), big("-5")];
    assert_eq!(values.iter().sum::<BigInt>(), big("999999995"));
    assert_eq!(values.iter().product::<BigInt>(), big("-4999999995"));
    assert_eq!((1..=25_u32).map(BigInt::from).product::<BigInt>(), big("15511210043330985984000000"));
    assert_eq!(Vec::<BigInt>::new().into_iter().sum::<BigInt>(), BigInt::zero());
}
