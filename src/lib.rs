//! Width-generic bit manipulation primitives for fixed-width unsigned
//! integers.
//! `no_std`, no heap / `alloc`, no `unsafe`.
//!
//! Every operation is a pure function over a [`Register`] value, which is one
//! of [`u8`], [`u16`], [`u32`] or [`u64`]. The masking arithmetic is written
//! once and specialized per width at compile time.
//!
//! # Examples
//! ```
//! use bitreg::{count_set_bits, read_field, rotate_left, set_bit, write_field};
//!
//! let reg: u16 = 0b1101_0110_1010_0001;
//! assert_eq!(read_field(reg, 4, 5), Ok(0b01010));
//!
//! let reg = write_field(reg, 4, 5, 0b11111).unwrap();
//! assert_eq!(reg, 0b1101_0111_1111_0001);
//!
//! let reg = set_bit(reg, 1).unwrap();
//! assert_eq!(count_set_bits(reg), 12);
//! assert_eq!(rotate_left(reg, 16), reg);
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Masks: `forward_mask`, `inverse_mask`, `bit_mask`
//! - Bit fields: `read_field`, `write_field` and the [`Field`] descriptor
//! - Single bits: `set_bit`, `clear_bit`, `toggle_bit`, `is_bit_set`
//! - Rotation: `rotate_left`, `rotate_right`
//! - Analysis: `count_set_bits`, `parity`, `parity_xor_fold`,
//!   `first_set_bit`, `is_power_of_two`
//!
//! # Errors
//!
//! Bit indices and fields that don't fit the register width are rejected with
//! an [`Error`] naming the offending values instead of being wrapped or
//! clamped. Value bits that don't fit a field on write are silently dropped.
//! Rejections are reported through the [`log`] facade at `debug` level.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod bit;
mod error;
mod field;
mod mask;
mod register;
mod rotate;

pub use analysis::{count_set_bits, first_set_bit, is_power_of_two, parity, parity_xor_fold};
pub use bit::{clear_bit, is_bit_set, set_bit, toggle_bit};
pub use error::{Error, Result};
pub use field::{Field, read_field, write_field};
pub use mask::{bit_mask, forward_mask, inverse_mask};
pub use register::Register;
pub use rotate::{rotate_left, rotate_right};
