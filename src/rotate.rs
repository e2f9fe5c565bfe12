use crate::register::Register;

/// Rotates all bits in direction of higher bit indices by `shift` positions.
/// Bits shifted out at the MSB are reinserted at the LSB.
///
/// `shift` is taken modulo `R::BITS`, so rotating by the full width (or any
/// multiple of it) returns `reg` unchanged.
///
/// # Examples
/// ```
/// use bitreg::rotate_left;
///
/// assert_eq!(rotate_left(0x8000_0000_0000_000Fu64, 4), 0xF8);
/// assert_eq!(rotate_left(0b1000_0001u8, 9), 0b0000_0011);
/// assert_eq!(rotate_left(0xABCDu16, 16), 0xABCD);
/// ```
pub fn rotate_left<R: Register>(reg: R, shift: u32) -> R {
    let s = shift % R::BITS;
    if s == 0 {
        return reg;
    }
    (reg << s) | (reg >> (R::BITS - s))
}

/// Rotates all bits in direction of lower bit indices by `shift` positions.
/// Bits shifted out at the LSB are reinserted at the MSB.
///
/// `shift` is taken modulo `R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::rotate_right;
///
/// assert_eq!(rotate_right(0xF8u64, 4), 0x8000_0000_0000_000F);
/// assert_eq!(rotate_right(0b0000_0011u8, 1), 0b1000_0001);
/// ```
pub fn rotate_right<R: Register>(reg: R, shift: u32) -> R {
    let s = shift % R::BITS;
    if s == 0 {
        return reg;
    }
    (reg >> s) | (reg << (R::BITS - s))
}
