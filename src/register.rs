use core::fmt::{Binary, Debug, LowerHex};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned integer treated as a bit vector.
///
/// Implemented for exactly [`u8`], [`u16`], [`u32`] and [`u64`]. The trait is
/// sealed, so signed, floating-point or wider types can't be used as
/// registers:
///
/// ```compile_fail
/// let _ = bitreg::set_bit(-1i32, 0);
/// ```
///
/// ```compile_fail
/// let _ = bitreg::count_set_bits(1u128);
/// ```
///
/// All operations of this crate are written once against this trait and get
/// monomorphized per width.
pub trait Register:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Binary
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Sub<Output = Self>
    + sealed::Sealed
{
    /// The width `N` of the register in bits.
    const BITS: u32;
    /// All bits unset.
    const ZERO: Self;
    /// Only bit 0 set.
    const ONE: Self;
    /// All `N` bits set.
    const MAX: Self;

    /// Returns the number of set bits.
    fn count_ones(self) -> u32;

    /// Returns the number of unset bits below the lowest set bit, or `BITS`
    /// if no bit is set.
    fn trailing_zeros(self) -> u32;

    /// Zero-extends the value to 64 bits.
    fn widen(self) -> u64;
}

macro_rules! impl_register {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Register for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline]
                fn widen(self) -> u64 {
                    u64::from(self)
                }
            }
        )+
    };
}

impl_register!(u8, u16, u32, u64);

/// Returns `length` one-bits starting at bit 0, saturating at the full width.
///
/// `1 << BITS` would overflow, so a full-width run is produced directly.
#[inline]
pub(crate) fn ones<R: Register>(length: u32) -> R {
    if length >= R::BITS {
        R::MAX
    } else {
        (R::ONE << length) - R::ONE
    }
}
