use thiserror::Error;

/// The error type for operations whose arguments don't fit the register width.
///
/// Carries the offending arguments together with the width `N` of the
/// register they were checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum Error {
    /// A single-bit index was not in `0..N`.
    #[error("bit index {index} out of bounds for a {width}-bit register")]
    IndexOutOfRange {
        /// The requested bit index.
        index: u32,
        /// The register width.
        width: u32,
    },
    /// A field `start_bit..start_bit + length` did not lie within `0..=N`.
    #[error("field of {length} bits at bit {start_bit} out of bounds for a {width}-bit register")]
    FieldOutOfRange {
        /// The requested lowest bit of the field.
        start_bit: u32,
        /// The requested field length.
        length: u32,
        /// The register width.
        width: u32,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn check_index(index: u32, width: u32) -> Result<()> {
    if index < width {
        Ok(())
    } else {
        log::debug!("rejected bit index {index} for {width}-bit register");
        Err(Error::IndexOutOfRange { index, width })
    }
}

pub(crate) fn check_field(start_bit: u32, length: u32, width: u32) -> Result<()> {
    match start_bit.checked_add(length) {
        Some(end) if end <= width => Ok(()),
        _ => {
            log::debug!(
                "rejected field of {length} bits at bit {start_bit} for {width}-bit register"
            );
            Err(Error::FieldOutOfRange {
                start_bit,
                length,
                width,
            })
        }
    }
}
