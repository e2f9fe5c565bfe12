use crate::error::{Result, check_field, check_index};
use crate::register::{Register, ones};

/// Builds a mask with `length` contiguous set bits starting at `start_bit`
/// (counted from the LSB). All other bits are unset.
///
/// A full-width mask (`length == R::BITS`) is all ones. A zero-length mask is
/// all zeros, wherever it starts.
///
/// # Errors
/// Returns [`Error::FieldOutOfRange`] if `start_bit + length > R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::forward_mask;
///
/// assert_eq!(forward_mask::<u16>(5, 4), Ok(0b1_1111_0000));
/// assert_eq!(forward_mask::<u8>(8, 0), Ok(0xFF));
/// assert!(forward_mask::<u8>(4, 5).is_err());
/// ```
///
/// [`Error::FieldOutOfRange`]: crate::Error::FieldOutOfRange
pub fn forward_mask<R: Register>(length: u32, start_bit: u32) -> Result<R> {
    check_field(start_bit, length, R::BITS)?;
    if length == 0 {
        // start_bit may equal R::BITS here
        return Ok(R::ZERO);
    }
    Ok(ones::<R>(length) << start_bit)
}

/// Builds the complement of [`forward_mask`]: every bit is set except the
/// `length` bits starting at `start_bit`.
///
/// ANDing a register with this mask clears the field and leaves everything
/// else untouched.
///
/// # Errors
/// Returns [`Error::FieldOutOfRange`] if `start_bit + length > R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::inverse_mask;
///
/// assert_eq!(inverse_mask::<u8>(3, 5), Ok(0b0001_1111));
/// assert_eq!(inverse_mask::<u64>(1, 63), Ok(u64::MAX >> 1));
/// ```
///
/// [`Error::FieldOutOfRange`]: crate::Error::FieldOutOfRange
#[inline]
pub fn inverse_mask<R: Register>(length: u32, start_bit: u32) -> Result<R> {
    forward_mask::<R>(length, start_bit).map(|mask| !mask)
}

/// Builds a mask with only bit `index` set.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] if `index >= R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::bit_mask;
///
/// assert_eq!(bit_mask::<u32>(12), Ok(0x1000));
/// assert!(bit_mask::<u8>(8).is_err());
/// ```
///
/// [`Error::IndexOutOfRange`]: crate::Error::IndexOutOfRange
#[inline]
pub fn bit_mask<R: Register>(index: u32) -> Result<R> {
    check_index(index, R::BITS)?;
    Ok(R::ONE << index)
}
