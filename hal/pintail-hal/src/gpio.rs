//! GPIO driver seam
//!
//! Mirrors the vendor driver surface the script bindings need: pad
//! selection, direction, pull bias, and level get/set. Direction codes use
//! the vendor's bit layout (input = bit 0, output = bit 1, open-drain =
//! bit 2) so mode integers coming from scripts translate without a lookup
//! table.

/// Pin direction, on the vendor's bit encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// Pad disabled (neither input nor output)
    Disable = 0b000,
    /// Input only
    Input = 0b001,
    /// Output only
    Output = 0b010,
    /// Input and output
    InputOutput = 0b011,
    /// Open-drain output
    OutputOpenDrain = 0b110,
    /// Open-drain input and output
    InputOutputOpenDrain = 0b111,
}

impl Direction {
    /// Get the direction as its raw vendor code
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a raw vendor direction code
    ///
    /// Returns `None` for bit patterns the vendor driver rejects
    /// (open-drain without output).
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b000 => Some(Direction::Disable),
            0b001 => Some(Direction::Input),
            0b010 => Some(Direction::Output),
            0b011 => Some(Direction::InputOutput),
            0b110 => Some(Direction::OutputOpenDrain),
            0b111 => Some(Direction::InputOutputOpenDrain),
            _ => None,
        }
    }

    /// Whether this direction drives the pad
    pub fn is_output(self) -> bool {
        self.bits() & 0b010 != 0
    }

    /// Whether this direction samples the pad
    pub fn is_input(self) -> bool {
        self.bits() & 0b001 != 0
    }
}

/// Pull resistor configuration, vendor numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pull {
    /// Internal pull-up only
    PullUp = 0,
    /// Internal pull-down only
    PullDown = 1,
    /// Both pull-up and pull-down
    PullUpDown = 2,
    /// No internal bias
    Floating = 3,
}

/// Errors from GPIO driver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin number is not a valid GPIO for the chip
    InvalidPin,
    /// Direction code is not one the driver accepts
    InvalidMode,
    /// Raw vendor status for anything else
    Driver(i32),
}

/// GPIO driver
///
/// Implementations wrap the chip SDK's GPIO driver. All operations are
/// synchronous and blocking; the caller serializes access.
pub trait GpioDriver {
    /// Route the pad to the GPIO matrix (as opposed to a peripheral-muxed
    /// function)
    fn select_gpio(&mut self, pin: u8) -> Result<(), GpioError>;

    /// Set the pin direction
    fn set_direction(&mut self, pin: u8, direction: Direction) -> Result<(), GpioError>;

    /// Configure the pin's pull resistors
    fn set_pull(&mut self, pin: u8, pull: Pull) -> Result<(), GpioError>;

    /// Drive the pin's output level
    fn set_level(&mut self, pin: u8, high: bool) -> Result<(), GpioError>;

    /// Sample the pin's input level
    fn level(&mut self, pin: u8) -> Result<bool, GpioError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_codes_round_trip() {
        for dir in [
            Direction::Disable,
            Direction::Input,
            Direction::Output,
            Direction::InputOutput,
            Direction::OutputOpenDrain,
            Direction::InputOutputOpenDrain,
        ] {
            assert_eq!(Direction::from_bits(dir.bits()), Some(dir));
        }
    }

    #[test]
    fn open_drain_without_output_is_rejected() {
        // Bit 2 (open-drain) alone or with input only is not a vendor mode
        assert_eq!(Direction::from_bits(0b100), None);
        assert_eq!(Direction::from_bits(0b101), None);
    }

    #[test]
    fn input_output_classification() {
        assert!(Direction::Input.is_input());
        assert!(!Direction::Input.is_output());
        assert!(Direction::Output.is_output());
        assert!(!Direction::Output.is_input());
        assert!(Direction::InputOutput.is_input());
        assert!(Direction::InputOutput.is_output());
    }
}
