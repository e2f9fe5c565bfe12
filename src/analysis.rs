use crate::register::Register;

/// Counts the set bits of `reg`.
///
/// # Examples
/// ```
/// use bitreg::count_set_bits;
///
/// assert_eq!(count_set_bits(0x8000_0000_0000_000Fu64), 5);
/// assert_eq!(count_set_bits(0u8), 0);
/// ```
#[inline]
pub fn count_set_bits<R: Register>(reg: R) -> u32 {
    reg.count_ones()
}

/// Returns `true` if `reg` has an odd number of set bits.
///
/// # Examples
/// ```
/// use bitreg::parity;
///
/// assert!(parity(0b0111u8));
/// assert!(!parity(0b0110u8));
/// ```
#[inline]
pub fn parity<R: Register>(reg: R) -> bool {
    count_set_bits(reg) & 1 == 1
}

/// Computes the same result as [`parity`] by XOR-folding `reg` onto itself
/// instead of counting bits.
///
/// Each step folds the upper half of the remaining span onto the lower half,
/// so bit 0 ends up holding the XOR of all bits.
///
/// # Examples
/// ```
/// use bitreg::{parity, parity_xor_fold};
///
/// assert_eq!(parity_xor_fold(0xDEAD_BEEFu32), parity(0xDEAD_BEEFu32));
/// ```
pub fn parity_xor_fold<R: Register>(reg: R) -> bool {
    let mut folded = reg;
    let mut span = R::BITS / 2;
    while span > 0 {
        folded = folded ^ (folded >> span);
        span /= 2;
    }
    folded & R::ONE == R::ONE
}

/// Returns the index of the lowest set bit, or `None` if `reg` is zero.
///
/// # Examples
/// ```
/// use bitreg::first_set_bit;
///
/// assert_eq!(first_set_bit(0b1010_0000u8), Some(5));
/// assert_eq!(first_set_bit(0u32), None);
/// ```
#[inline]
pub fn first_set_bit<R: Register>(reg: R) -> Option<u32> {
    if reg == R::ZERO {
        None
    } else {
        Some(reg.trailing_zeros())
    }
}

/// Returns `true` if exactly one bit of `num` is set.
///
/// Zero is not a power of two.
///
/// # Examples
/// ```
/// use bitreg::is_power_of_two;
///
/// assert!(is_power_of_two(1024u16));
/// assert!(!is_power_of_two(0u16));
/// assert!(!is_power_of_two(3u16));
/// ```
#[inline]
pub fn is_power_of_two<R: Register>(num: R) -> bool {
    num != R::ZERO && num & (num - R::ONE) == R::ZERO
}
