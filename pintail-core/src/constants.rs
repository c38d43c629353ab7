//! Script-visible constant table
//!
//! Names and values match the chip's own numbering so scripts written
//! against the vendor SDK documentation keep working. Pins 20, 24, and
//! 28-31 are reserved on ESP32-class parts and intentionally absent.

use crate::mode;

/// GPIO 0
pub const GPIO_NUM_0: i64 = 0;
/// GPIO 1
pub const GPIO_NUM_1: i64 = 1;
/// GPIO 2
pub const GPIO_NUM_2: i64 = 2;
/// GPIO 3
pub const GPIO_NUM_3: i64 = 3;
/// GPIO 4
pub const GPIO_NUM_4: i64 = 4;
/// GPIO 5
pub const GPIO_NUM_5: i64 = 5;
/// GPIO 6
pub const GPIO_NUM_6: i64 = 6;
/// GPIO 7
pub const GPIO_NUM_7: i64 = 7;
/// GPIO 8
pub const GPIO_NUM_8: i64 = 8;
/// GPIO 9
pub const GPIO_NUM_9: i64 = 9;
/// GPIO 10
pub const GPIO_NUM_10: i64 = 10;
/// GPIO 11
pub const GPIO_NUM_11: i64 = 11;
/// GPIO 12
pub const GPIO_NUM_12: i64 = 12;
/// GPIO 13
pub const GPIO_NUM_13: i64 = 13;
/// GPIO 14
pub const GPIO_NUM_14: i64 = 14;
/// GPIO 15
pub const GPIO_NUM_15: i64 = 15;
/// GPIO 16
pub const GPIO_NUM_16: i64 = 16;
/// GPIO 17
pub const GPIO_NUM_17: i64 = 17;
/// GPIO 18
pub const GPIO_NUM_18: i64 = 18;
/// GPIO 19
pub const GPIO_NUM_19: i64 = 19;
/// GPIO 21
pub const GPIO_NUM_21: i64 = 21;
/// GPIO 22
pub const GPIO_NUM_22: i64 = 22;
/// GPIO 23
pub const GPIO_NUM_23: i64 = 23;
/// GPIO 25
pub const GPIO_NUM_25: i64 = 25;
/// GPIO 26
pub const GPIO_NUM_26: i64 = 26;
/// GPIO 27
pub const GPIO_NUM_27: i64 = 27;
/// GPIO 32
pub const GPIO_NUM_32: i64 = 32;
/// GPIO 33
pub const GPIO_NUM_33: i64 = 33;
/// GPIO 34 (input only)
pub const GPIO_NUM_34: i64 = 34;
/// GPIO 35 (input only)
pub const GPIO_NUM_35: i64 = 35;
/// GPIO 36 (input only)
pub const GPIO_NUM_36: i64 = 36;
/// GPIO 37 (input only)
pub const GPIO_NUM_37: i64 = 37;
/// GPIO 38 (input only)
pub const GPIO_NUM_38: i64 = 38;
/// GPIO 39 (input only)
pub const GPIO_NUM_39: i64 = 39;
/// One past the highest GPIO number
pub const GPIO_NUM_MAX: i64 = 40;

/// DAC channel 0
pub const DAC_CHAN_0: i64 = 0;
/// DAC channel 1
pub const DAC_CHAN_1: i64 = 1;
/// Deprecated alias for [`DAC_CHAN_0`] (old SDK numbering)
pub const DAC_CHANNEL_1: i64 = 0;
/// Deprecated alias for [`DAC_CHAN_1`] (old SDK numbering)
pub const DAC_CHANNEL_2: i64 = 1;

/// ADC channel 0
pub const ADC_CHANNEL_0: i64 = 0;
/// ADC channel 1
pub const ADC_CHANNEL_1: i64 = 1;
/// ADC channel 2
pub const ADC_CHANNEL_2: i64 = 2;
/// ADC channel 3
pub const ADC_CHANNEL_3: i64 = 3;
/// ADC channel 4
pub const ADC_CHANNEL_4: i64 = 4;
/// ADC channel 5
pub const ADC_CHANNEL_5: i64 = 5;
/// ADC channel 6
pub const ADC_CHANNEL_6: i64 = 6;
/// ADC channel 7
pub const ADC_CHANNEL_7: i64 = 7;
/// ADC channel 8 (second unit only)
pub const ADC_CHANNEL_8: i64 = 8;
/// ADC channel 9 (second unit only)
pub const ADC_CHANNEL_9: i64 = 9;

/// Logic low
pub const LOW: i64 = 0;
/// Logic high
pub const HIGH: i64 = 1;

/// Every constant the bindings expose, as `(name, value)` pairs
///
/// Embedders iterate this to register the names with their interpreter.
pub const CONSTANTS: &[(&str, i64)] = &[
    ("GPIO_NUM_0", GPIO_NUM_0),
    ("GPIO_NUM_1", GPIO_NUM_1),
    ("GPIO_NUM_2", GPIO_NUM_2),
    ("GPIO_NUM_3", GPIO_NUM_3),
    ("GPIO_NUM_4", GPIO_NUM_4),
    ("GPIO_NUM_5", GPIO_NUM_5),
    ("GPIO_NUM_6", GPIO_NUM_6),
    ("GPIO_NUM_7", GPIO_NUM_7),
    ("GPIO_NUM_8", GPIO_NUM_8),
    ("GPIO_NUM_9", GPIO_NUM_9),
    ("GPIO_NUM_10", GPIO_NUM_10),
    ("GPIO_NUM_11", GPIO_NUM_11),
    ("GPIO_NUM_12", GPIO_NUM_12),
    ("GPIO_NUM_13", GPIO_NUM_13),
    ("GPIO_NUM_14", GPIO_NUM_14),
    ("GPIO_NUM_15", GPIO_NUM_15),
    ("GPIO_NUM_16", GPIO_NUM_16),
    ("GPIO_NUM_17", GPIO_NUM_17),
    ("GPIO_NUM_18", GPIO_NUM_18),
    ("GPIO_NUM_19", GPIO_NUM_19),
    ("GPIO_NUM_21", GPIO_NUM_21),
    ("GPIO_NUM_22", GPIO_NUM_22),
    ("GPIO_NUM_23", GPIO_NUM_23),
    ("GPIO_NUM_25", GPIO_NUM_25),
    ("GPIO_NUM_26", GPIO_NUM_26),
    ("GPIO_NUM_27", GPIO_NUM_27),
    ("GPIO_NUM_32", GPIO_NUM_32),
    ("GPIO_NUM_33", GPIO_NUM_33),
    ("GPIO_NUM_34", GPIO_NUM_34),
    ("GPIO_NUM_35", GPIO_NUM_35),
    ("GPIO_NUM_36", GPIO_NUM_36),
    ("GPIO_NUM_37", GPIO_NUM_37),
    ("GPIO_NUM_38", GPIO_NUM_38),
    ("GPIO_NUM_39", GPIO_NUM_39),
    ("GPIO_NUM_MAX", GPIO_NUM_MAX),
    ("DAC_CHAN_0", DAC_CHAN_0),
    ("DAC_CHAN_1", DAC_CHAN_1),
    ("DAC_CHANNEL_1", DAC_CHANNEL_1),
    ("DAC_CHANNEL_2", DAC_CHANNEL_2),
    ("ADC_CHANNEL_0", ADC_CHANNEL_0),
    ("ADC_CHANNEL_1", ADC_CHANNEL_1),
    ("ADC_CHANNEL_2", ADC_CHANNEL_2),
    ("ADC_CHANNEL_3", ADC_CHANNEL_3),
    ("ADC_CHANNEL_4", ADC_CHANNEL_4),
    ("ADC_CHANNEL_5", ADC_CHANNEL_5),
    ("ADC_CHANNEL_6", ADC_CHANNEL_6),
    ("ADC_CHANNEL_7", ADC_CHANNEL_7),
    ("ADC_CHANNEL_8", ADC_CHANNEL_8),
    ("ADC_CHANNEL_9", ADC_CHANNEL_9),
    ("LOW", LOW),
    ("HIGH", HIGH),
    ("INPUT", mode::INPUT),
    ("INPUT_OUTPUT", mode::INPUT_OUTPUT),
    ("OUTPUT", mode::OUTPUT),
    ("INPUT_PULLUP", mode::INPUT_PULLUP),
    ("INPUT_PULLDOWN", mode::INPUT_PULLDOWN),
];

/// Resolve a constant by name
pub fn lookup(name: &str) -> Option<i64> {
    CONSTANTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
}
