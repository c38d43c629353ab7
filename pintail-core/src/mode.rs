//! Pin-mode integer encoding
//!
//! Scripts pass pin modes as a single integer: a base direction code in the
//! vendor's bit layout, optionally OR'd with [`PULL_FLAG`] to request an
//! internal bias. Bit 3 is outside every direction bit the vendor defines,
//! so the flag can be masked off losslessly before the code reaches the
//! direction-setter.
//!
//! `INPUT_PULLDOWN` shares the flag bit with `INPUT_PULLUP` and the mode
//! path only ever requests pull-up, so a pull-down request reaches the
//! driver as a pull-up. Kept as-is for compatibility with the existing
//! script API; see the pinning test in `shim`.

use pintail_hal::gpio::Direction;

/// Input-only direction (vendor bit 0)
pub const INPUT: i64 = 0b001;
/// Output-only direction (vendor bit 1)
pub const OUTPUT: i64 = 0b010;
/// Bidirectional (input | output)
pub const INPUT_OUTPUT: i64 = INPUT | OUTPUT;

/// Pull-bias request flag (bit 3, disjoint from all direction bits)
pub const PULL_FLAG: i64 = 1 << 3;

/// Input with internal pull-up
pub const INPUT_PULLUP: i64 = INPUT | PULL_FLAG;
/// Input with internal pull-down (same flag bit as `INPUT_PULLUP`)
pub const INPUT_PULLDOWN: i64 = INPUT | PULL_FLAG;

/// Strip the pull flag, leaving only what the direction-setter may see
pub fn direction_bits(mode: i64) -> i64 {
    mode & !PULL_FLAG
}

/// Whether the mode requests an internal bias
pub fn wants_pull(mode: i64) -> bool {
    mode & PULL_FLAG != 0
}

/// Decode the direction part of a mode integer
///
/// Returns `None` if the remaining bits are not a direction the driver
/// accepts.
pub fn direction(mode: i64) -> Option<Direction> {
    let bits = direction_bits(mode);
    u8::try_from(bits).ok().and_then(Direction::from_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mode_constant_values() {
        assert_eq!(INPUT, 1);
        assert_eq!(OUTPUT, 2);
        assert_eq!(INPUT_OUTPUT, 3);
        assert_eq!(PULL_FLAG, 8);
        assert_eq!(INPUT_PULLUP, 9);
        assert_eq!(INPUT_PULLDOWN, 9);
    }

    #[test]
    fn pull_flag_is_disjoint_from_direction_bits() {
        for mode in [INPUT, OUTPUT, INPUT_OUTPUT] {
            assert_eq!(mode & PULL_FLAG, 0);
            assert!(!wants_pull(mode));
        }
    }

    #[test]
    fn pullup_mode_decomposes() {
        assert!(wants_pull(INPUT_PULLUP));
        assert_eq!(direction_bits(INPUT_PULLUP), INPUT);
        assert_eq!(direction(INPUT_PULLUP), Some(Direction::Input));
    }

    #[test]
    fn plain_directions_decode() {
        assert_eq!(direction(INPUT), Some(Direction::Input));
        assert_eq!(direction(OUTPUT), Some(Direction::Output));
        assert_eq!(direction(INPUT_OUTPUT), Some(Direction::InputOutput));
    }

    #[test]
    fn garbage_modes_do_not_decode() {
        assert_eq!(direction(0b100), None);
        assert_eq!(direction(1 << 20), None);
        assert_eq!(direction(-1), None);
    }

    proptest! {
        #[test]
        fn direction_setter_never_sees_the_flag(mode in any::<i64>()) {
            prop_assert_eq!(direction_bits(mode) & PULL_FLAG, 0);
        }

        #[test]
        fn masking_the_flag_is_lossless(mode in any::<i64>()) {
            let rebuilt = direction_bits(mode)
                | if wants_pull(mode) { PULL_FLAG } else { 0 };
            prop_assert_eq!(rebuilt, mode);
        }
    }
}
