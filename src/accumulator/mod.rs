/*!
The exact fixed-width accumulator at the heart of this crate.

A value here is a non-negative big integer of a *fixed* bit width,
implemented as a little-endian array of 64-bit limbs (see
[`number::WideUint`]). It is not a general-purpose bignum: its width is
chosen once, at compile time, to be exactly wide enough to hold the sum
of every possible shifted product of two binary64 significands (see
[`number::ACC_BITS`]), and it never grows or allocates. [`ops`] supplies
the handful of operations [`crate::dot`] needs: shifted addition with
sticky overflow, whole-accumulator merge, comparison, subtraction, and
the bit-extraction primitives the finalizer uses to read out a rounded
result.
*/

mod number;
mod ops;

pub(crate) use number::{WideUint, ACC_EMIN};
pub(crate) use ops::{add_shifted, add_wide, any_bit_below, compare, extract_bits, msb_index, sub};
