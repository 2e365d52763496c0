//! Scalar key normalization: every supported scalar type maps to a `u64`
//! key with bit-level equality semantics.
//!
//! Conventions
//! - Distinct values produce distinct keys, equal values equal keys.
//! - Floats are bit-reinterpreted; every NaN collapses to one canonical
//!   pattern, while `-0.0` and `0.0` remain distinct values.
//! - `KEY_BITS` of 16 or less routes the type to the direct-indexing table.

use crate::distance::{DistanceError, RelabelStrategy};
use crate::relabel::{self, Relabeling};

/// A scalar sequence element that can be normalized to a `u64` key.
///
/// Implemented for the fixed-width integers, `usize`/`isize`, `f32`/`f64`,
/// `char`, and `bool`.
pub trait ScalarKey: Copy {
    /// Width of the normalized key in bits.
    const KEY_BITS: u32;

    /// Normalize to a 64-bit key.
    fn key_bits(self) -> u64;

    /// Relabel a sequence pair of this type to dense integers.
    ///
    /// `bool` overrides the default with a one-/two-label shortcut that
    /// checks value counts eagerly.
    fn relabel(
        s1: &[Self],
        s2: &[Self],
        strategy: RelabelStrategy,
    ) -> Result<Relabeling, DistanceError> {
        relabel::relabel_scalars(s1, s2, strategy)
    }
}

macro_rules! int_key {
    ($($t:ty => $bits:expr),* $(,)?) => {$(
        impl ScalarKey for $t {
            const KEY_BITS: u32 = $bits;
            #[inline]
            fn key_bits(self) -> u64 {
                self as u64
            }
        }
    )*};
}

int_key!(
    u8 => 8,
    i8 => 8,
    u16 => 16,
    i16 => 16,
    u32 => 32,
    i32 => 32,
    char => 32,
    u64 => 64,
    i64 => 64,
    usize => 64,
    isize => 64,
);

impl ScalarKey for f32 {
    const KEY_BITS: u32 = 32;
    #[inline]
    fn key_bits(self) -> u64 {
        let bits = if self.is_nan() {
            f32::NAN.to_bits()
        } else {
            self.to_bits()
        };
        bits as u64
    }
}

impl ScalarKey for f64 {
    const KEY_BITS: u32 = 64;
    #[inline]
    fn key_bits(self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl ScalarKey for bool {
    const KEY_BITS: u32 = 1;
    #[inline]
    fn key_bits(self) -> u64 {
        self as u64
    }

    fn relabel(
        s1: &[bool],
        s2: &[bool],
        _strategy: RelabelStrategy,
    ) -> Result<Relabeling, DistanceError> {
        relabel::relabel_bools(s1, s2)
    }
}
