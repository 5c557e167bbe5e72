//! The `WideUint` type: a fixed-width, non-negative, allocation-free
//! big integer, plus the constants that size it.

/// Bit width of each limb.
pub(crate) const LIMB_BITS: u32 = 64;

/// Number of limbs backing [`WideUint`].
///
/// The accumulator must cover every possible shifted product: a 106-bit
/// product (two 53-bit significands) shifted by up to `1942 - (-2148) =
/// 4090` bits, i.e. `4090 + 106 = 4196` as the index of the highest bit
/// that can ever be set, for a required width of `4197` bits. 66 limbs of
/// 64 bits gives `4224` bits, 27 more than required; the extra headroom
/// is folded into the overflow check in [`super::ops::add_shifted`] rather
/// than trimmed away, since a whole number of limbs is simpler to index.
pub(crate) const LIMBS: usize = 66;

/// Minimum bit width the accumulator is required to provide; see [`LIMBS`].
pub(crate) const ACC_BITS: usize = 4197;

const _: () = assert!(LIMBS * LIMB_BITS as usize >= ACC_BITS);

/// The power of two associated with bit 0 of every [`WideUint`] used as
/// a dot-product accumulator: bit `i` has weight `2^(ACC_EMIN + i)`.
///
/// Fixed at the smallest possible exponent of any product of two binary64
/// values: two subnormals each with exponent `-1074` multiply to exponent
/// `-2148`.
pub(crate) const ACC_EMIN: i32 = -2148;

/// A fixed-width, non-negative integer, little-endian in its limbs
/// (`limbs[0]` is least significant).
///
/// `WideUint` never allocates and never changes width; every operation on
/// it either stays within the fixed width or reports overflow rather than
/// silently losing high bits (see [`super::ops::add_shifted`] and
/// [`super::ops::add_wide`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct WideUint {
    limbs: [u64; LIMBS],
}

impl WideUint {
    /// The additive identity: every limb zero.
    pub(crate) fn zero() -> Self {
        Self { limbs: [0; LIMBS] }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    pub(crate) fn limbs(&self) -> &[u64; LIMBS] {
        &self.limbs
    }

    pub(crate) fn limbs_mut(&mut self) -> &mut [u64; LIMBS] {
        &mut self.limbs
    }
}
