//! Arithmetic with the VF flag returned as a value instead of written
//! into the register file. The caller decides where the flag lands.

/// Wrapping add. The flag is the carry out of bit 7.
pub fn add(a: u8, b: u8) -> (u8, bool) {
    let sum = a as u16 + b as u16;
    (sum as u8, sum > 0xFF)
}

/// Wrapping subtract. The flag is set when `a > b`, so an equal pair
/// clears it.
pub fn sub(a: u8, b: u8) -> (u8, bool) {
    (a.wrapping_sub(b), a > b)
}

/// Halve `a`. The flag is the bit that falls off.
pub fn shift_right(a: u8) -> (u8, bool) {
    (a / 2, a & 1 == 1)
}

/// Hundreds, tens and ones.
pub fn bcd(value: u8) -> [u8; 3] {
    [value / 100, (value / 10) % 10, value % 10]
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn add_carries_on_overflow() {
        assert_eq!(add(0xFF, 0x01), (0x00, true));
        assert_eq!(add(0x80, 0x7F), (0xFF, false));
    }

    #[test]
    fn sub_flag_requires_strictly_greater() {
        assert_eq!(sub(0x05, 0x03), (0x02, true));
        assert_eq!(sub(0x03, 0x03), (0x00, false));
        assert_eq!(sub(0x03, 0x05), (0xFE, false));
    }

    #[test]
    fn shift_right_reports_low_bit() {
        assert_eq!(shift_right(0x05), (0x02, true));
        assert_eq!(shift_right(0x04), (0x02, false));
    }

    #[test]
    fn bcd_splits_digits() {
        assert_eq!(bcd(171), [1, 7, 1]);
        assert_eq!(bcd(0), [0, 0, 0]);
        assert_eq!(bcd(255), [2, 5, 5]);
        assert_eq!(bcd(9), [0, 0, 9]);
    }

    proptest! {
        #[test]
        fn add_matches_nine_bit_sum(a in any::<u8>(), b in any::<u8>()) {
            let (value, carry) = add(a, b);
            let sum = a as u32 + b as u32;
            prop_assert_eq!(value as u32, sum % 256);
            prop_assert_eq!(carry, sum > 255);
        }

        #[test]
        fn sub_wraps(a in any::<u8>(), b in any::<u8>()) {
            let (value, flag) = sub(a, b);
            prop_assert_eq!(value as i32, (a as i32 - b as i32).rem_euclid(256));
            prop_assert_eq!(flag, a > b);
        }

        #[test]
        fn bcd_digits_recombine(value in any::<u8>()) {
            let [h, t, o] = bcd(value);
            prop_assert_eq!(h as u32 * 100 + t as u32 * 10 + o as u32, value as u32);
        }
    }
}
