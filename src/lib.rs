/*!
`repro-dot` computes a double-precision dot product, `Σ x[i] * y[i]`,
whose 64-bit result pattern is identical no matter what order the terms
are summed in, how the input is sharded across threads, or what the
host's floating-point rounding mode happens to be set to.

Ordinary `f64` summation is not associative, so a naively summed dot
product's last few bits depend on iteration order: the same
mathematical sum computed on one machine, or with one loop nesting,
can differ in its last bit from another. This crate avoids that by
accumulating every product *exactly*, in a fixed-width integer wide
enough to hold the sum of every possible term without ever rounding,
and rounding to the nearest binary64 (ties-to-even) exactly once, at
the very end.

# Usage

```
let x = [1.0, 2.0, 3.0];
let y = [4.0, 5.0, 6.0];
assert_eq!(repro_dot::dot(&x, &y), 32.0);
```

# Exceptional values

NaN and infinite operands are handled by a fixed precedence table
(see [`dot`]'s documentation and the crate's design notes) rather than
by the host FPU's usual (non-reproducible) propagation rules; in
particular, every NaN result is the single canonical bit pattern
`0x7FF8000000000001`, not whatever payload the inputs happened to carry.

# Sharding

The crate does not spawn threads or make any decision about how to
partition work; that policy belongs to the caller. What it does
guarantee is that [`PartialDot`], built and [`PartialDot::merge`]d over
any partition of the input, agrees bit-for-bit with calling [`dot`] on
the whole input at once.
*/

mod accumulator;
mod dot;
mod exceptions;
mod ieee754;
mod product;
mod round;

pub use crate::dot::{dot, PartialDot};
