/*!
The top-level driver and the partial-state sharding hook.

[`dot`] is the crate's single public entry point for the common case: it
builds one [`PartialDot`], folds the whole input into it, and finalizes.
Callers who want to shard the input themselves (across threads, say)
can instead build one `PartialDot` per shard, [`PartialDot::merge`] them
in any order, and [`PartialDot::finish`] once; [`dot`] and any such
sharding are guaranteed to agree bit-for-bit (see the module tests and
`tests/dot.rs`).
*/

use crate::accumulator::{add_shifted, add_wide, WideUint};
use crate::exceptions::ExceptionFlags;
use crate::ieee754::{classify, Classified};
use crate::product::form_product;
use crate::round::finalize;

/// The accumulating state of one reproducible dot product: two
/// non-negative wide accumulators, a sticky overflow flag, and the
/// exceptional-value tracker.
///
/// A fresh `PartialDot` is the identity element of the additive monoid
/// this state forms: `Pos = Neg = 0`, no flags set.
#[derive(Clone, Debug)]
pub struct PartialDot {
    pos: WideUint,
    neg: WideUint,
    overflow: bool,
    flags: ExceptionFlags,
}

impl Default for PartialDot {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialDot {
    /// Builds an empty partial state.
    pub fn new() -> Self {
        Self {
            pos: WideUint::zero(),
            neg: WideUint::zero(),
            overflow: false,
            flags: ExceptionFlags::new(),
        }
    }

    /// Folds every pair `(x[i], y[i])` into this state, in index order.
    ///
    /// `x` and `y` must have the same length; they may alias or overlap
    /// freely, since each element is read at most once. The order in
    /// which pairs within this call are processed cannot affect the
    /// eventual result, and neither can calling this method
    /// several times on disjoint sub-slices in place of one call on the
    /// whole range.
    pub fn accumulate(&mut self, x: &[f64], y: &[f64]) {
        assert_eq!(
            x.len(),
            y.len(),
            "dot product operands must have the same length"
        );
        for (&xi, &yi) in x.iter().zip(y) {
            self.accumulate_pair(xi, yi);
        }
    }

    fn accumulate_pair(&mut self, x: f64, y: f64) {
        let cx = classify(x.to_bits());
        let cy = classify(y.to_bits());

        match (cx, cy) {
            (Classified::Nan, _) | (_, Classified::Nan) => self.flags.observe_nan(),
            (Classified::Infinity { negative: nx }, Classified::Infinity { negative: ny }) => {
                self.flags.observe_infinite(nx != ny);
            }
            (Classified::Infinity { negative: ninf }, Classified::Finite(f))
            | (Classified::Finite(f), Classified::Infinity { negative: ninf }) => {
                if f.is_zero() {
                    self.flags.observe_invalid_zero_times_infinity();
                } else {
                    self.flags.observe_infinite(ninf != f.negative);
                }
            }
            (Classified::Finite(fx), Classified::Finite(fy)) => {
                if let Some(product) = form_product(fx, fy) {
                    self.add_product(product);
                }
            }
        }
    }

    fn add_product(&mut self, product: crate::product::Product) {
        use crate::accumulator::ACC_EMIN;

        if product.exponent < ACC_EMIN {
            // Magnitude < 2^-2042, far below the smallest subnormal's
            // weight; it cannot affect any representable rounded result
            // and is safely dropped.
            return;
        }
        let shift = (product.exponent - ACC_EMIN) as u32;
        debug_assert!(shift <= 4090, "product exponent exceeds the documented Eprod range");

        let target = if product.negative {
            &mut self.neg
        } else {
            &mut self.pos
        };
        if add_shifted(target, product.significand, shift) {
            self.overflow = true;
        }
    }

    /// Combines `other` into `self`: accumulators add limb-wise (with the
    /// same sticky-overflow rule as a single shifted add), flags combine
    /// by logical OR. Merge is associative and commutative, so partial
    /// states from any sharding of the input may be combined in any
    /// order or tree shape.
    pub fn merge(&mut self, other: &PartialDot) {
        if add_wide(&mut self.pos, &other.pos) {
            self.overflow = true;
        }
        if add_wide(&mut self.neg, &other.neg) {
            self.overflow = true;
        }
        self.overflow |= other.overflow;
        self.flags.merge(&other.flags);
    }

    /// Resolves the exceptional-value precedence table and, failing
    /// that, runs the finalizer exactly once.
    pub fn finish(&self) -> f64 {
        self.flags
            .resolve(self.overflow, &self.pos, &self.neg)
            .unwrap_or_else(|| finalize(&self.pos, &self.neg))
    }
}

/// Computes a reproducible dot product `Σ x[i] * y[i]`.
///
/// The returned `f64`'s 64-bit pattern depends only on the multiset of
/// index-wise pairs `(x[i], y[i])`, not on the order in which they are
/// summed, the host's floating-point rounding mode, or any partitioning
/// a caller may have used to compute sub-sums (see [`PartialDot`] for
/// the hook that makes that guarantee meaningful). `n = 0` returns
/// `+0.0`.
///
/// # Panics
///
/// Panics if `x.len() != y.len()`.
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    let mut state = PartialDot::new();
    state.accumulate(x, y);
    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_positive_zero() {
        let r = dot(&[], &[]);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn exact_small_case() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_lengths_panic() {
        dot(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn nan_anywhere_yields_canonical_nan() {
        let r = dot(&[f64::NAN, 1.0], &[2.0, 3.0]);
        assert_eq!(r.to_bits(), 0x7FF8000000000001);
    }

    #[test]
    fn zero_times_infinity_yields_canonical_nan() {
        let r = dot(&[0.0], &[f64::INFINITY]);
        assert_eq!(r.to_bits(), 0x7FF8000000000001);
    }

    #[test]
    fn mixed_sign_infinities_yield_canonical_nan() {
        let r = dot(&[f64::INFINITY, f64::NEG_INFINITY], &[2.0, 2.0]);
        assert_eq!(r.to_bits(), 0x7FF8000000000001);
    }

    #[test]
    fn single_signed_infinity_passes_through() {
        assert_eq!(dot(&[f64::INFINITY], &[1.0]), f64::INFINITY);
        assert_eq!(dot(&[f64::NEG_INFINITY], &[1.0]), f64::NEG_INFINITY);
    }

    #[test]
    fn smallest_subnormal_accumulation_is_nonzero() {
        let tiny = f64::from_bits(1);
        let r = dot(&[tiny, tiny, tiny, tiny], &[1.0, 1.0, 1.0, 1.0]);
        assert_ne!(r, 0.0);
        assert_eq!(r, 4.0 * tiny);
    }

    #[test]
    fn order_independence_on_a_cancellation_heavy_input() {
        let x1 = [1e308, 1e-308, 3.0, 5.0, 1e-308];
        let y1 = [1e-308, 1e308, -3.0, 2.0, -1e-308];
        let r1 = dot(&x1, &y1);

        let x2 = [3.0, 1e-308, 5.0, 1e308, 1e-308];
        let y2 = [-3.0, -1e-308, 2.0, 1e-308, 1e308];
        let r2 = dot(&x2, &y2);

        assert_eq!(r1.to_bits(), r2.to_bits());
    }

    #[test]
    fn sharding_matches_the_unpartitioned_call() {
        let x = [1e308, 1e-308, 3.0, 5.0, 1e-308, -2.0, 7.5];
        let y = [1e-308, 1e308, -3.0, 2.0, -1e-308, 4.0, 0.5];

        let whole = dot(&x, &y);

        let mut a = PartialDot::new();
        a.accumulate(&x[..3], &y[..3]);
        let mut b = PartialDot::new();
        b.accumulate(&x[3..5], &y[3..5]);
        let mut c = PartialDot::new();
        c.accumulate(&x[5..], &y[5..]);

        a.merge(&b);
        a.merge(&c);

        assert_eq!(whole.to_bits(), a.finish().to_bits());
    }

    #[test]
    fn sign_symmetry_holds_except_for_zero() {
        let x = [1.5, -2.25, 3.0];
        let y = [4.0, 5.0, -6.0];
        let neg_x: Vec<f64> = x.iter().map(|v| -v).collect();
        let neg_y: Vec<f64> = y.iter().map(|v| -v).collect();

        let base = dot(&x, &y);
        assert_eq!(dot(&neg_x, &y).to_bits(), (-base).to_bits());
        assert_eq!(dot(&x, &neg_y).to_bits(), (-base).to_bits());

        let zero = dot(&[0.0], &[0.0]);
        assert!(zero.is_sign_positive());
    }
}
