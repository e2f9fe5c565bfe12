use crate::error::{Result, check_field};
use crate::mask::{forward_mask, inverse_mask};
use crate::register::{Register, ones};

/// Reads the `length` bits starting at `start_bit` and returns them
/// right-aligned, i.e. occupying bits `0..length` of the result.
///
/// # Errors
/// Returns [`Error::FieldOutOfRange`] if `start_bit + length > R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::read_field;
///
/// let reg: u16 = 0b1101_0110_1010_0001;
/// assert_eq!(read_field(reg, 4, 5), Ok(0b01010));
/// ```
///
/// [`Error::FieldOutOfRange`]: crate::Error::FieldOutOfRange
pub fn read_field<R: Register>(reg: R, start_bit: u32, length: u32) -> Result<R> {
    check_field(start_bit, length, R::BITS)?;
    if length == 0 {
        return Ok(R::ZERO);
    }
    Ok((reg >> start_bit) & ones::<R>(length))
}

/// Replaces the `length` bits starting at `start_bit` with the low `length`
/// bits of `new_value`.
///
/// Bits of `new_value` at or above `length` are discarded, not reported.
/// Every bit of `reg` outside the field is preserved.
///
/// # Errors
/// Returns [`Error::FieldOutOfRange`] if `start_bit + length > R::BITS`.
///
/// # Examples
/// ```
/// use bitreg::write_field;
///
/// let reg: u16 = 0b1101_0110_1010_0001;
/// assert_eq!(write_field(reg, 4, 5, 0b11111), Ok(0b1101_0111_1111_0001));
/// // only the low 2 bits of 0b111 fit
/// assert_eq!(write_field(0u8, 0, 2, 0b111), Ok(0b11));
/// ```
///
/// [`Error::FieldOutOfRange`]: crate::Error::FieldOutOfRange
pub fn write_field<R: Register>(reg: R, start_bit: u32, length: u32, new_value: R) -> Result<R> {
    let cleared = reg & inverse_mask::<R>(length, start_bit)?;
    if length == 0 {
        return Ok(cleared);
    }
    let truncated = new_value & ones::<R>(length);
    Ok(cleared | (truncated << start_bit))
}

/// A contiguous run of bits inside a register, described by its lowest bit
/// and its length.
///
/// A `Field` is not tied to a register width. It is checked against the width
/// of the register it's applied to, so the same descriptor may be valid for a
/// `u32` but not for a `u8`.
///
/// # Examples
/// ```
/// use bitreg::Field;
///
/// const MODE: Field = Field::new(4, 3);
///
/// let reg = MODE.write(0u32, 0b101).unwrap();
/// assert_eq!(reg, 0b101_0000);
/// assert_eq!(MODE.read(reg), Ok(0b101));
/// assert!(MODE.validate::<u8>().is_ok());
/// assert!(Field::new(6, 3).validate::<u8>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    start_bit: u32,
    length: u32,
}

impl Field {
    /// Describes the `length` bits starting at `start_bit`.
    pub const fn new(start_bit: u32, length: u32) -> Self {
        Self { start_bit, length }
    }

    /// Describes the single bit at `index`.
    pub const fn bit(index: u32) -> Self {
        Self::new(index, 1)
    }

    /// The lowest bit of the field.
    pub const fn start_bit(&self) -> u32 {
        self.start_bit
    }

    /// The number of bits in the field.
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// One past the highest bit of the field, or `None` if that overflows.
    pub const fn end(&self) -> Option<u32> {
        self.start_bit.checked_add(self.length)
    }

    /// Checks that the field fits into a register of type `R`.
    ///
    /// # Errors
    /// Returns [`Error::FieldOutOfRange`] if it doesn't.
    ///
    /// [`Error::FieldOutOfRange`]: crate::Error::FieldOutOfRange
    pub fn validate<R: Register>(&self) -> Result<()> {
        check_field(self.start_bit, self.length, R::BITS)
    }

    /// See [`forward_mask`].
    #[inline]
    pub fn mask<R: Register>(&self) -> Result<R> {
        forward_mask(self.length, self.start_bit)
    }

    /// See [`read_field`].
    #[inline]
    pub fn read<R: Register>(&self, reg: R) -> Result<R> {
        read_field(reg, self.start_bit, self.length)
    }

    /// See [`write_field`].
    #[inline]
    pub fn write<R: Register>(&self, reg: R, value: R) -> Result<R> {
        write_field(reg, self.start_bit, self.length, value)
    }
}
