//! Walks through the operations of `bitreg` and logs every intermediate
//! register in binary. Run with `RUST_LOG=info cargo run --example walkthrough`.

use core::fmt::{self, Display, Formatter};

use bitreg::{
    Register, clear_bit, count_set_bits, first_set_bit, forward_mask, inverse_mask,
    is_bit_set, is_power_of_two, read_field, rotate_left, set_bit, toggle_bit, write_field,
};

/// Formats a register MSB first, with a space between bytes.
struct Grouped<R>(R);

impl<R: Register> Display for Grouped<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = self.0.widen();
        write!(f, "0b")?;
        for i in (0..R::BITS).rev() {
            write!(f, "{}", (value >> i) & 1)?;
            if i % 8 == 0 && i != 0 {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

fn show<R: Register>(label: &str, reg: R) {
    log::info!("{label} ({}): {}", reg.widen(), Grouped(reg));
}

fn main() -> bitreg::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("single bits (u32)");
    let reg: u32 = 0x5500_00AA;
    show("start", reg);
    let reg = set_bit(reg, 12)?;
    show("set bit 12", reg);
    let reg = clear_bit(reg, 30)?;
    show("clear bit 30", reg);
    let reg = toggle_bit(reg, 1)?;
    show("toggle bit 1", reg);
    log::info!("bit 12 set: {}", is_bit_set(reg, 12)?);

    log::info!("masks");
    show("forward_mask::<u16>(5, 4)", forward_mask::<u16>(5, 4)?);
    show("inverse_mask::<u8>(3, 5)", inverse_mask::<u8>(3, 5)?);
    show("inverse_mask::<u64>(1, 63)", inverse_mask::<u64>(1, 63)?);

    log::info!("fields (u16)");
    let field_reg: u16 = 0b1101_0110_1010_0001;
    show("start", field_reg);
    show("read bits 4..9", read_field(field_reg, 4, 5)?);
    show("write 0b11111 to bits 4..9", write_field(field_reg, 4, 5, 0b11111)?);

    log::info!("analysis (u64)");
    let large_reg: u64 = 0x8000_0000_0000_000F;
    show("start", large_reg);
    log::info!("set bits: {}", count_set_bits(large_reg));
    log::info!("1024 is a power of two: {}", is_power_of_two(1024u16));
    show("rotate left by 4", rotate_left(large_reg, 4));
    log::info!("first set bit of 0: {:?}", first_set_bit(0u32));

    if let Err(err) = set_bit(0u8, 8) {
        log::warn!("expected rejection: {err}");
    }
    Ok(())
}
