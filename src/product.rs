//! The exact product former: combines two decoded finite, non-zero
//! operands into the single 128-bit-significand, signed-exponent product
//! that feeds the accumulator.

use crate::ieee754::Finite;

/// An exact product `(-1)^negative * significand * 2^exponent` of two
/// finite binary64 significands.
///
/// `significand` never exceeds `(2^53 - 1)^2 < 2^106`, so it always fits
/// comfortably in a `u128`.
pub(crate) struct Product {
    pub negative: bool,
    pub significand: u128,
    pub exponent: i32,
}

/// Forms the exact product of two finite operands, or `None` if either
/// factor is zero (the product contributes nothing to the accumulator).
///
/// Both `x` and `y` must already be known non-NaN, non-infinite; the
/// caller (the exceptional-state tracker) is responsible for routing NaN
/// and infinite operands elsewhere before reaching this function.
pub(crate) fn form_product(x: Finite, y: Finite) -> Option<Product> {
    if x.is_zero() || y.is_zero() {
        return None;
    }

    let significand = x.significand as u128 * y.significand as u128;
    let exponent = x.exponent + y.exponent;
    let negative = x.negative != y.negative;

    Some(Product {
        negative,
        significand,
        exponent,
    })
}
