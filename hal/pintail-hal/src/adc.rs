//! One-shot ADC driver seam
//!
//! The vendor ADC driver works in units: a unit is created, channels on it
//! are configured with a bit width and attenuation, conversions are read
//! one at a time, and the unit is deleted to free it. The trait mirrors
//! that lifecycle.

/// First ADC unit (channels 0-7 on ESP32-class chips)
pub const ADC_UNIT_1: u8 = 0;
/// Second ADC unit (hosts channels 8 and 9)
pub const ADC_UNIT_2: u8 = 1;

/// Conversion bit width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitWidth {
    /// 9-bit conversions
    Bits9,
    /// 10-bit conversions
    Bits10,
    /// 11-bit conversions
    Bits11,
    /// 12-bit conversions (chip default)
    Bits12,
}

impl BitWidth {
    /// Largest conversion code this width can produce
    pub fn max_code(self) -> u16 {
        match self {
            BitWidth::Bits9 => (1 << 9) - 1,
            BitWidth::Bits10 => (1 << 10) - 1,
            BitWidth::Bits11 => (1 << 11) - 1,
            BitWidth::Bits12 => (1 << 12) - 1,
        }
    }
}

/// Input attenuation, vendor register codes
///
/// Higher attenuation widens the measurable voltage range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Attenuation {
    /// 0 dB
    Db0 = 0b00,
    /// 2.5 dB
    Db2p5 = 0b01,
    /// 6 dB
    Db6 = 0b10,
    /// 11 dB, the maximum (full input range)
    Db11 = 0b11,
}

/// Per-channel conversion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannelConfig {
    /// Conversion width
    pub bitwidth: BitWidth,
    /// Input attenuation
    pub attenuation: Attenuation,
}

impl Default for AdcChannelConfig {
    fn default() -> Self {
        Self {
            bitwidth: BitWidth::Bits12,
            attenuation: Attenuation::Db11,
        }
    }
}

/// Errors from ADC driver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel number is not valid for the unit
    InvalidChannel,
    /// Unit already has a live handle
    UnitInUse,
    /// Conversion did not complete
    Timeout,
    /// Raw vendor status for anything else
    Driver(i32),
}

/// One-shot ADC driver
///
/// A unit handle represents exclusive ownership of one ADC unit. Handles
/// are affine: every handle from [`new_unit`] must eventually go back
/// through [`delete_unit`].
///
/// [`new_unit`]: AdcDriver::new_unit
/// [`delete_unit`]: AdcDriver::delete_unit
pub trait AdcDriver {
    /// Handle to an allocated ADC unit
    type Unit;

    /// Allocate a unit ([`ADC_UNIT_1`] or [`ADC_UNIT_2`])
    fn new_unit(&mut self, unit_id: u8) -> Result<Self::Unit, AdcError>;

    /// Configure a channel on the unit
    fn configure_channel(
        &mut self,
        unit: &mut Self::Unit,
        channel: u8,
        config: AdcChannelConfig,
    ) -> Result<(), AdcError>;

    /// Perform one conversion on a previously configured channel
    fn read(&mut self, unit: &mut Self::Unit, channel: u8) -> Result<u16, AdcError>;

    /// Release the unit
    fn delete_unit(&mut self, unit: Self::Unit) -> Result<(), AdcError>;
}
