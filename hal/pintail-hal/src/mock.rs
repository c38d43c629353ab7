//! Recording test doubles for the driver traits
//!
//! Each mock records every driver call in a bounded log, simulates enough
//! hardware state for round-trip assertions (pin levels, conversion
//! results), and tracks live handle counts so tests can prove that analog
//! handles never leak. A single queued failure can be injected to exercise
//! error paths.
//!
//! Only the first [`CALL_LOG_CAPACITY`] calls are kept; the mocks are meant
//! for short, focused tests.

use heapless::Vec;

use crate::adc::{AdcChannelConfig, AdcDriver, AdcError};
use crate::dac::{DacDriver, DacError};
use crate::gpio::{Direction, GpioDriver, GpioError, Pull};

/// Maximum recorded calls per mock
pub const CALL_LOG_CAPACITY: usize = 64;

/// Number of pad slots the GPIO mock simulates
pub const MOCK_PIN_COUNT: usize = 40;

/// A recorded GPIO driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioCall {
    /// `select_gpio(pin)`
    SelectGpio { pin: u8 },
    /// `set_direction(pin, direction)`
    SetDirection { pin: u8, direction: Direction },
    /// `set_pull(pin, pull)`
    SetPull { pin: u8, pull: Pull },
    /// `set_level(pin, high)`
    SetLevel { pin: u8, high: bool },
    /// `level(pin)`
    Level { pin: u8 },
}

/// Recording GPIO driver double
#[derive(Debug)]
pub struct MockGpio {
    /// Every call made against this mock, in order
    pub calls: Vec<GpioCall, CALL_LOG_CAPACITY>,
    levels: [bool; MOCK_PIN_COUNT],
    fail_in: Option<(usize, GpioError)>,
}

// `Default` is not derivable for arrays longer than 32 elements
impl Default for MockGpio {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            levels: [false; MOCK_PIN_COUNT],
            fail_in: None,
        }
    }
}

impl MockGpio {
    /// Create a mock with all pads low
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an error for the next driver call
    pub fn fail_next(&mut self, err: GpioError) {
        self.fail_in = Some((0, err));
    }

    /// Queue an error that fires after `calls` further successful calls
    pub fn fail_after(&mut self, calls: usize, err: GpioError) {
        self.fail_in = Some((calls, err));
    }

    /// Number of `set_pull` calls recorded
    pub fn pull_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, GpioCall::SetPull { .. }))
            .count()
    }

    fn check_pin(&mut self, pin: u8) -> Result<(), GpioError> {
        if let Some((remaining, err)) = self.fail_in.take() {
            if remaining == 0 {
                return Err(err);
            }
            self.fail_in = Some((remaining - 1, err));
        }
        if usize::from(pin) >= MOCK_PIN_COUNT {
            return Err(GpioError::InvalidPin);
        }
        Ok(())
    }

    fn record(&mut self, call: GpioCall) {
        // Log overflow just drops the tail
        let _ = self.calls.push(call);
    }
}

impl GpioDriver for MockGpio {
    fn select_gpio(&mut self, pin: u8) -> Result<(), GpioError> {
        self.check_pin(pin)?;
        self.record(GpioCall::SelectGpio { pin });
        Ok(())
    }

    fn set_direction(&mut self, pin: u8, direction: Direction) -> Result<(), GpioError> {
        self.check_pin(pin)?;
        self.record(GpioCall::SetDirection { pin, direction });
        Ok(())
    }

    fn set_pull(&mut self, pin: u8, pull: Pull) -> Result<(), GpioError> {
        self.check_pin(pin)?;
        self.record(GpioCall::SetPull { pin, pull });
        Ok(())
    }

    fn set_level(&mut self, pin: u8, high: bool) -> Result<(), GpioError> {
        self.check_pin(pin)?;
        self.record(GpioCall::SetLevel { pin, high });
        self.levels[usize::from(pin)] = high;
        Ok(())
    }

    fn level(&mut self, pin: u8) -> Result<bool, GpioError> {
        self.check_pin(pin)?;
        self.record(GpioCall::Level { pin });
        Ok(self.levels[usize::from(pin)])
    }
}

/// A recorded DAC driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DacCall {
    /// `new_channel(channel)`
    NewChannel { channel: u8 },
    /// `output(handle, value)`
    Output { channel: u8, value: u8 },
    /// `delete_channel(handle)`
    DeleteChannel { channel: u8 },
}

/// Handle handed out by [`MockDac`]
#[derive(Debug, PartialEq, Eq)]
pub struct MockDacHandle {
    channel: u8,
}

/// Recording one-shot DAC driver double
///
/// Simulates the two DAC channels of an ESP32-class chip.
#[derive(Debug, Default)]
pub struct MockDac {
    /// Every call made against this mock, in order
    pub calls: Vec<DacCall, CALL_LOG_CAPACITY>,
    /// Last value written, per channel
    pub last_output: [Option<u8>; 2],
    live_handles: usize,
    fail_in: Option<(usize, DacError)>,
}

impl MockDac {
    /// Create a mock with no live handles
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an error for the next driver call
    pub fn fail_next(&mut self, err: DacError) {
        self.fail_in = Some((0, err));
    }

    /// Queue an error that fires after `calls` further successful calls
    pub fn fail_after(&mut self, calls: usize, err: DacError) {
        self.fail_in = Some((calls, err));
    }

    /// Handles allocated and not yet deleted
    pub fn live_handles(&self) -> usize {
        self.live_handles
    }

    fn check(&mut self) -> Result<(), DacError> {
        if let Some((remaining, err)) = self.fail_in.take() {
            if remaining == 0 {
                return Err(err);
            }
            self.fail_in = Some((remaining - 1, err));
        }
        Ok(())
    }
}

impl DacDriver for MockDac {
    type Handle = MockDacHandle;

    fn new_channel(&mut self, channel: u8) -> Result<Self::Handle, DacError> {
        self.check()?;
        if channel > 1 {
            return Err(DacError::InvalidChannel);
        }
        let _ = self.calls.push(DacCall::NewChannel { channel });
        self.live_handles += 1;
        Ok(MockDacHandle { channel })
    }

    fn output(&mut self, handle: &mut Self::Handle, value: u8) -> Result<(), DacError> {
        self.check()?;
        let _ = self.calls.push(DacCall::Output {
            channel: handle.channel,
            value,
        });
        self.last_output[usize::from(handle.channel)] = Some(value);
        Ok(())
    }

    fn delete_channel(&mut self, handle: Self::Handle) -> Result<(), DacError> {
        self.check()?;
        let _ = self.calls.push(DacCall::DeleteChannel {
            channel: handle.channel,
        });
        self.live_handles -= 1;
        Ok(())
    }
}

/// A recorded ADC driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcCall {
    /// `new_unit(unit_id)`
    NewUnit { unit_id: u8 },
    /// `configure_channel(unit, channel, config)`
    ConfigureChannel {
        unit_id: u8,
        channel: u8,
        config: AdcChannelConfig,
    },
    /// `read(unit, channel)`
    Read { unit_id: u8, channel: u8 },
    /// `delete_unit(unit)`
    DeleteUnit { unit_id: u8 },
}

/// Unit handle handed out by [`MockAdc`]
#[derive(Debug, PartialEq, Eq)]
pub struct MockAdcUnit {
    unit_id: u8,
    /// Bitmask of configured channels
    configured: u16,
}

/// Recording one-shot ADC driver double
#[derive(Debug)]
pub struct MockAdc {
    /// Every call made against this mock, in order
    pub calls: Vec<AdcCall, CALL_LOG_CAPACITY>,
    /// Value the next conversions return (clamped to 12 bits)
    pub conversion: u16,
    live_units: usize,
    fail_in: Option<(usize, AdcError)>,
}

impl Default for MockAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdc {
    /// Create a mock returning mid-scale conversions
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            conversion: 2048,
            live_units: 0,
            fail_in: None,
        }
    }

    /// Queue an error for the next driver call
    pub fn fail_next(&mut self, err: AdcError) {
        self.fail_in = Some((0, err));
    }

    /// Queue an error that fires after `calls` further successful calls
    pub fn fail_after(&mut self, calls: usize, err: AdcError) {
        self.fail_in = Some((calls, err));
    }

    /// Units allocated and not yet deleted
    pub fn live_units(&self) -> usize {
        self.live_units
    }

    fn check(&mut self) -> Result<(), AdcError> {
        if let Some((remaining, err)) = self.fail_in.take() {
            if remaining == 0 {
                return Err(err);
            }
            self.fail_in = Some((remaining - 1, err));
        }
        Ok(())
    }
}

impl AdcDriver for MockAdc {
    type Unit = MockAdcUnit;

    fn new_unit(&mut self, unit_id: u8) -> Result<Self::Unit, AdcError> {
        self.check()?;
        if unit_id > 1 {
            // Matches the vendor's invalid-argument status
            return Err(AdcError::Driver(0x102));
        }
        let _ = self.calls.push(AdcCall::NewUnit { unit_id });
        self.live_units += 1;
        Ok(MockAdcUnit {
            unit_id,
            configured: 0,
        })
    }

    fn configure_channel(
        &mut self,
        unit: &mut Self::Unit,
        channel: u8,
        config: AdcChannelConfig,
    ) -> Result<(), AdcError> {
        self.check()?;
        if channel > 9 {
            return Err(AdcError::InvalidChannel);
        }
        let _ = self.calls.push(AdcCall::ConfigureChannel {
            unit_id: unit.unit_id,
            channel,
            config,
        });
        unit.configured |= 1 << channel;
        Ok(())
    }

    fn read(&mut self, unit: &mut Self::Unit, channel: u8) -> Result<u16, AdcError> {
        self.check()?;
        if channel > 9 || unit.configured & (1 << channel) == 0 {
            return Err(AdcError::InvalidChannel);
        }
        let _ = self.calls.push(AdcCall::Read {
            unit_id: unit.unit_id,
            channel,
        });
        Ok(self.conversion.min(crate::adc::BitWidth::Bits12.max_code()))
    }

    fn delete_unit(&mut self, unit: Self::Unit) -> Result<(), AdcError> {
        self.check()?;
        let _ = self.calls.push(AdcCall::DeleteUnit {
            unit_id: unit.unit_id,
        });
        self.live_units -= 1;
        Ok(())
    }
}
