use bitreg::{Register, Result, count_set_bits, read_field, rotate_left, write_field};

fn swap_nibbles<R: Register>(reg: R) -> Result<R> {
    let low = read_field(reg, 0, 4)?;
    let high = read_field(reg, 4, 4)?;
    let reg = write_field(reg, 0, 4, high)?;
    write_field(reg, 4, 4, low)
}

fn balanced<R: Register>(reg: R) -> bool {
    count_set_bits(reg) * 2 == R::BITS && count_set_bits(rotate_left(reg, 3)) * 2 == R::BITS
}

fn main() {
    assert_eq!(swap_nibbles(0xA5u8).unwrap(), 0x5A);
    assert_eq!(swap_nibbles(0x12A5u16).unwrap(), 0x125A);
    assert_eq!(swap_nibbles(0x1234_00A5u32).unwrap(), 0x1234_005A);
    assert_eq!(swap_nibbles(0xA5u64).unwrap(), 0x5A);
    assert!(balanced(0xF0u8));
    assert!(balanced(0x00FF_00FFu32));
    assert!(!balanced(0u64));
}
