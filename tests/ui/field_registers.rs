use bitreg::{Error, Field};

const ENABLE: Field = Field::bit(0);
const PRESCALER: Field = Field::new(1, 3);
const RELOAD: Field = Field::new(8, 8);

fn main() {
    let mut ctrl = 0u16;
    ctrl = ENABLE.write(ctrl, 1).unwrap();
    ctrl = PRESCALER.write(ctrl, 0b101).unwrap();
    ctrl = RELOAD.write(ctrl, 0xC3).unwrap();
    assert_eq!(ctrl, 0xC30B);
    assert_eq!(PRESCALER.read(ctrl), Ok(0b101));

    match RELOAD.read(0u8) {
        Err(Error::FieldOutOfRange { start_bit, length, width }) => {
            assert_eq!((start_bit, length, width), (8, 8, 8));
        }
        other => panic!("unexpected {other:?}"),
    }
}
