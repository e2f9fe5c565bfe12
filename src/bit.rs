use crate::error::{Result, check_index};
use crate::mask::bit_mask;
use crate::register::Register;

/// Returns `reg` with bit `index` set.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] if `index >= R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::set_bit;
///
/// assert_eq!(set_bit(0x5500_00AAu32, 12), Ok(0x5500_10AA));
/// assert!(set_bit(0u8, 8).is_err());
/// ```
///
/// [`Error::IndexOutOfRange`]: crate::Error::IndexOutOfRange
#[inline]
pub fn set_bit<R: Register>(reg: R, index: u32) -> Result<R> {
    Ok(reg | bit_mask::<R>(index)?)
}

/// Returns `reg` with bit `index` unset.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] if `index >= R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::clear_bit;
///
/// assert_eq!(clear_bit(0x5500_10AAu32, 30), Ok(0x1500_10AA));
/// ```
///
/// [`Error::IndexOutOfRange`]: crate::Error::IndexOutOfRange
#[inline]
pub fn clear_bit<R: Register>(reg: R, index: u32) -> Result<R> {
    Ok(reg & !bit_mask::<R>(index)?)
}

/// Returns `reg` with bit `index` flipped.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] if `index >= R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::toggle_bit;
///
/// assert_eq!(toggle_bit(0b10u8, 1), Ok(0));
/// assert_eq!(toggle_bit(0u8, 1), Ok(0b10));
/// ```
///
/// [`Error::IndexOutOfRange`]: crate::Error::IndexOutOfRange
#[inline]
pub fn toggle_bit<R: Register>(reg: R, index: u32) -> Result<R> {
    Ok(reg ^ bit_mask::<R>(index)?)
}

/// Checks whether bit `index` of `reg` is set.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] if `index >= R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::is_bit_set;
///
/// assert_eq!(is_bit_set(0b100u16, 2), Ok(true));
/// assert_eq!(is_bit_set(0b100u16, 1), Ok(false));
/// ```
///
/// [`Error::IndexOutOfRange`]: crate::Error::IndexOutOfRange
#[inline]
pub fn is_bit_set<R: Register>(reg: R, index: u32) -> Result<bool> {
    check_index(index, R::BITS)?;
    Ok((reg >> index) & R::ONE != R::ZERO)
}
