//! Typed peripheral operations
//!
//! [`Peripherals`] owns the three driver handles and exposes the five
//! operations the script surface needs, with typed arguments and reported
//! errors. Driver faults come back as [`ShimError`]; whether a fault is
//! fatal is the embedder's decision, not this crate's.

use pintail_hal::adc::{AdcChannelConfig, AdcDriver, AdcError, ADC_UNIT_1};
use pintail_hal::dac::{DacDriver, DacError};
use pintail_hal::gpio::{GpioDriver, GpioError, Pull};

use crate::mode;

/// A driver fault from any of the three peripheral families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShimError {
    /// GPIO driver fault
    Gpio(GpioError),
    /// DAC driver fault
    Dac(DacError),
    /// ADC driver fault
    Adc(AdcError),
}

impl From<GpioError> for ShimError {
    fn from(err: GpioError) -> Self {
        ShimError::Gpio(err)
    }
}

impl From<DacError> for ShimError {
    fn from(err: DacError) -> Self {
        ShimError::Dac(err)
    }
}

impl From<AdcError> for ShimError {
    fn from(err: AdcError) -> Self {
        ShimError::Adc(err)
    }
}

/// The peripheral drivers behind the script surface
///
/// Owns one driver per family. All operations are synchronous and
/// blocking; the analog operations acquire their vendor handle inside the
/// call and release it before returning, on success and error paths alike.
pub struct Peripherals<G, D, A> {
    gpio: G,
    dac: D,
    adc: A,
}

impl<G, D, A> Peripherals<G, D, A>
where
    G: GpioDriver,
    D: DacDriver,
    A: AdcDriver,
{
    /// Bundle the three drivers
    pub fn new(gpio: G, dac: D, adc: A) -> Self {
        Self { gpio, dac, adc }
    }

    /// Direct access to the GPIO driver
    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    /// Direct access to the DAC driver
    pub fn dac_mut(&mut self) -> &mut D {
        &mut self.dac
    }

    /// Direct access to the ADC driver
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Take the drivers back
    pub fn into_parts(self) -> (G, D, A) {
        (self.gpio, self.dac, self.adc)
    }

    /// Configure a pin's direction and bias from a script mode integer
    ///
    /// Routes the pad to GPIO, strips the pull flag from `mode_code`, and
    /// hands the remaining bits to the direction-setter. If the flag was
    /// set, requests a pull-up — only ever a pull-up, regardless of which
    /// named pull constant the script used (see [`crate::mode`]).
    pub fn pin_mode(&mut self, pin: u8, mode_code: i64) -> Result<(), ShimError> {
        self.gpio.select_gpio(pin)?;

        let direction = mode::direction(mode_code).ok_or(GpioError::InvalidMode)?;
        self.gpio.set_direction(pin, direction)?;

        if mode::wants_pull(mode_code) {
            self.gpio.set_pull(pin, Pull::PullUp)?;
        }

        Ok(())
    }

    /// Drive a pin's level; any nonzero value is high
    pub fn digital_write(&mut self, pin: u8, level: i64) -> Result<(), ShimError> {
        self.gpio.set_level(pin, level != 0)?;
        Ok(())
    }

    /// Sample a pin's level as 0 or 1
    pub fn digital_read(&mut self, pin: u8) -> Result<i64, ShimError> {
        let high = self.gpio.level(pin)?;
        Ok(i64::from(high))
    }

    /// Write an output code to a DAC channel
    ///
    /// Acquires a one-shot channel handle, writes, and releases the handle
    /// before returning. The release runs even when the write fails, so no
    /// handle survives the call.
    pub fn analog_write(&mut self, channel: u8, value: u8) -> Result<(), ShimError> {
        let mut handle = self.dac.new_channel(channel)?;

        let wrote = self.dac.output(&mut handle, value);
        let released = self.dac.delete_channel(handle);

        wrote?;
        released?;
        Ok(())
    }

    /// Perform one conversion on an ADC channel
    ///
    /// Acquires unit 1, configures the channel for 12-bit conversions at
    /// maximum attenuation, reads once, and releases the unit before
    /// returning - including when configuration or the read fails.
    pub fn analog_read(&mut self, channel: u8) -> Result<u16, ShimError> {
        let mut unit = self.adc.new_unit(ADC_UNIT_1)?;

        let raw = match self
            .adc
            .configure_channel(&mut unit, channel, AdcChannelConfig::default())
        {
            Ok(()) => self.adc.read(&mut unit, channel),
            Err(err) => Err(err),
        };
        let released = self.adc.delete_unit(unit);

        let raw = raw?;
        released?;
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pintail_hal::adc::{Attenuation, BitWidth};
    use pintail_hal::gpio::Direction;
    use pintail_hal::mock::{AdcCall, DacCall, GpioCall, MockAdc, MockDac, MockGpio};

    fn peripherals() -> Peripherals<MockGpio, MockDac, MockAdc> {
        Peripherals::new(MockGpio::new(), MockDac::new(), MockAdc::new())
    }

    #[test]
    fn plain_directions_never_touch_the_pull_path() {
        for mode_code in [mode::INPUT, mode::OUTPUT, mode::INPUT_OUTPUT] {
            let mut p = peripherals();
            p.pin_mode(4, mode_code).unwrap();
            assert_eq!(p.gpio_mut().pull_calls(), 0, "mode {mode_code}");
        }
    }

    #[test]
    fn pin_mode_selects_pad_then_sets_direction() {
        let mut p = peripherals();
        p.pin_mode(18, mode::OUTPUT).unwrap();
        assert_eq!(
            p.gpio_mut().calls.as_slice(),
            &[
                GpioCall::SelectGpio { pin: 18 },
                GpioCall::SetDirection {
                    pin: 18,
                    direction: Direction::Output
                },
            ]
        );
    }

    #[test]
    fn pullup_strips_the_flag_and_pulls_up_once() {
        let mut p = peripherals();
        p.pin_mode(5, mode::INPUT_PULLUP).unwrap();
        // The direction-setter never observes the flag bit
        assert_eq!(
            p.gpio_mut().calls.as_slice(),
            &[
                GpioCall::SelectGpio { pin: 5 },
                GpioCall::SetDirection {
                    pin: 5,
                    direction: Direction::Input
                },
                GpioCall::SetPull {
                    pin: 5,
                    pull: Pull::PullUp
                },
            ]
        );
    }

    /// INPUT_PULLDOWN shares its flag bit with INPUT_PULLUP, so the driver
    /// receives a pull-up for either constant. This pins the inherited
    /// behavior; fixing it means giving pull-down its own bit first.
    #[test]
    fn input_pulldown_is_indistinguishable_from_pullup() {
        let mut with_pulldown = peripherals();
        with_pulldown.pin_mode(5, mode::INPUT_PULLDOWN).unwrap();

        let mut with_pullup = peripherals();
        with_pullup.pin_mode(5, mode::INPUT_PULLUP).unwrap();

        assert_eq!(
            with_pulldown.gpio_mut().calls.as_slice(),
            with_pullup.gpio_mut().calls.as_slice()
        );
        assert!(with_pulldown
            .gpio_mut()
            .calls
            .contains(&GpioCall::SetPull {
                pin: 5,
                pull: Pull::PullUp
            }));
    }

    #[test]
    fn garbage_mode_is_reported_not_applied() {
        let mut p = peripherals();
        let err = p.pin_mode(4, 0b100).unwrap_err();
        assert_eq!(err, ShimError::Gpio(GpioError::InvalidMode));
        // Pad select already happened, but nothing was configured
        assert_eq!(
            p.gpio_mut().calls.as_slice(),
            &[GpioCall::SelectGpio { pin: 4 }]
        );
    }

    #[test]
    fn digital_write_then_read_round_trips() {
        let mut p = peripherals();
        p.pin_mode(2, mode::OUTPUT).unwrap();

        p.digital_write(2, 1).unwrap();
        assert_eq!(p.digital_read(2), Ok(1));

        p.digital_write(2, 0).unwrap();
        assert_eq!(p.digital_read(2), Ok(0));
    }

    #[test]
    fn any_nonzero_level_drives_high() {
        let mut p = peripherals();
        p.digital_write(2, 255).unwrap();
        assert_eq!(p.digital_read(2), Ok(1));
        p.digital_write(2, -1).unwrap();
        assert_eq!(p.digital_read(2), Ok(1));
    }

    #[test]
    fn analog_write_releases_its_handle() {
        let mut p = peripherals();
        for _ in 0..3 {
            p.analog_write(0, 200).unwrap();
            assert_eq!(p.dac_mut().live_handles(), 0);
        }
        assert_eq!(p.dac_mut().last_output[0], Some(200));
        assert_eq!(
            &p.dac_mut().calls[..3],
            &[
                DacCall::NewChannel { channel: 0 },
                DacCall::Output {
                    channel: 0,
                    value: 200
                },
                DacCall::DeleteChannel { channel: 0 },
            ]
        );
    }

    #[test]
    fn analog_write_releases_even_when_the_write_fails() {
        let mut p = peripherals();
        // Let new_channel succeed, then fail the output call
        p.dac_mut().fail_after(1, DacError::Driver(-3));

        let err = p.analog_write(0, 10).unwrap_err();
        assert_eq!(err, ShimError::Dac(DacError::Driver(-3)));
        assert_eq!(p.dac_mut().live_handles(), 0);
        assert!(p
            .dac_mut()
            .calls
            .contains(&DacCall::DeleteChannel { channel: 0 }));
    }

    #[test]
    fn analog_read_is_twelve_bit_and_scoped() {
        let mut p = peripherals();
        p.adc_mut().conversion = 4095;

        let raw = p.analog_read(6).unwrap();
        assert!(raw <= 4095);
        assert_eq!(p.adc_mut().live_units(), 0);

        assert_eq!(
            p.adc_mut().calls.as_slice(),
            &[
                AdcCall::NewUnit { unit_id: ADC_UNIT_1 },
                AdcCall::ConfigureChannel {
                    unit_id: ADC_UNIT_1,
                    channel: 6,
                    config: AdcChannelConfig {
                        bitwidth: BitWidth::Bits12,
                        attenuation: Attenuation::Db11,
                    },
                },
                AdcCall::Read {
                    unit_id: ADC_UNIT_1,
                    channel: 6
                },
                AdcCall::DeleteUnit { unit_id: ADC_UNIT_1 },
            ]
        );
    }

    #[test]
    fn analog_read_releases_the_unit_when_configuration_fails() {
        let mut p = peripherals();
        // Channel 12 does not exist; configuration fails after acquisition
        let err = p.analog_read(12).unwrap_err();
        assert_eq!(err, ShimError::Adc(AdcError::InvalidChannel));
        assert_eq!(p.adc_mut().live_units(), 0);
        assert!(p
            .adc_mut()
            .calls
            .contains(&AdcCall::DeleteUnit { unit_id: ADC_UNIT_1 }));
    }

    #[test]
    fn driver_faults_are_reported_not_fatal() {
        let mut p = peripherals();
        p.gpio_mut().fail_next(GpioError::Driver(0x103));
        let err = p.digital_write(3, 1).unwrap_err();
        assert_eq!(err, ShimError::Gpio(GpioError::Driver(0x103)));
        // The shim stays usable afterwards
        assert_eq!(p.digital_write(3, 1), Ok(()));
    }
}
