//! Static constants.

use crate::int::BigInt;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref ZERO: BigInt = BigInt::new();
    pub static ref ONE: BigInt = BigInt::from_u8(1);
    pub static ref TEN: BigInt = BigInt::from_u8(10);
}
