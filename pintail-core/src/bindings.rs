//! Script-facing function dispatch
//!
//! The embedder registers the five function names from [`FUNCTIONS`] with
//! its interpreter and routes every invocation through [`Bindings::call`].
//!
//! Two error tiers, deliberately kept apart:
//!
//! - Argument type mismatch (non-integer where an integer is required)
//!   returns `Ok(Value::Nil)` and performs no driver call at all. Scripts
//!   have always relied on this benign no-op.
//! - Driver faults come back as `Err(CallError::Driver(..))`. Whether that
//!   kills the process is the embedder's call.

use pintail_hal::adc::{AdcDriver, AdcError};
use pintail_hal::dac::{DacDriver, DacError};
use pintail_hal::gpio::{GpioDriver, GpioError};

use crate::shim::{Peripherals, ShimError};
use crate::value::Value;

/// `pinMode(pin, mode)`
pub const FN_PIN_MODE: &str = "pinMode";
/// `digitalWrite(pin, level)`
pub const FN_DIGITAL_WRITE: &str = "digitalWrite";
/// `digitalRead(pin)`
pub const FN_DIGITAL_READ: &str = "digitalRead";
/// `analogWrite(channel, value)`
pub const FN_ANALOG_WRITE: &str = "analogWrite";
/// `analogRead(channel)`
pub const FN_ANALOG_READ: &str = "analogRead";

/// One entry of the callable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FnSpec {
    /// Script-visible function name
    pub name: &'static str,
    /// Required argument count
    pub arity: usize,
}

/// The callable surface, for mechanical registration with an interpreter
pub const FUNCTIONS: &[FnSpec] = &[
    FnSpec {
        name: FN_PIN_MODE,
        arity: 2,
    },
    FnSpec {
        name: FN_DIGITAL_WRITE,
        arity: 2,
    },
    FnSpec {
        name: FN_DIGITAL_READ,
        arity: 1,
    },
    FnSpec {
        name: FN_ANALOG_WRITE,
        arity: 2,
    },
    FnSpec {
        name: FN_ANALOG_READ,
        arity: 1,
    },
];

/// Errors reported by [`Bindings::call`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CallError {
    /// The name is not one of the five bound functions
    UnknownFunction,
    /// Wrong number of arguments for the function
    WrongArity {
        /// Arguments the function requires
        expected: usize,
        /// Arguments the call supplied
        got: usize,
    },
    /// A driver fault from the operation itself
    Driver(ShimError),
}

impl From<ShimError> for CallError {
    fn from(err: ShimError) -> Self {
        CallError::Driver(err)
    }
}

/// The script surface over a set of peripheral drivers
pub struct Bindings<G, D, A> {
    periph: Peripherals<G, D, A>,
}

impl<G, D, A> Bindings<G, D, A>
where
    G: GpioDriver,
    D: DacDriver,
    A: AdcDriver,
{
    /// Wrap a peripheral set
    pub fn new(periph: Peripherals<G, D, A>) -> Self {
        Self { periph }
    }

    /// The typed operations underneath
    pub fn peripherals_mut(&mut self) -> &mut Peripherals<G, D, A> {
        &mut self.periph
    }

    /// Unwrap back to the peripheral set
    pub fn into_inner(self) -> Peripherals<G, D, A> {
        self.periph
    }

    /// Dispatch one script invocation
    ///
    /// Arguments that fail the integer check make the whole call a no-op
    /// returning nil; no driver call happens. Out-of-range integers (a pin
    /// above 255, a DAC code above 255) are reported as driver errors
    /// rather than truncated.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value<'static>, CallError> {
        let spec = FUNCTIONS
            .iter()
            .find(|f| f.name == name)
            .ok_or(CallError::UnknownFunction)?;
        if args.len() != spec.arity {
            return Err(CallError::WrongArity {
                expected: spec.arity,
                got: args.len(),
            });
        }

        match name {
            FN_PIN_MODE => {
                let (Some(pin), Some(mode_code)) = (args[0].as_int(), args[1].as_int()) else {
                    return Ok(Value::Nil);
                };
                self.periph.pin_mode(pin_arg(pin)?, mode_code)?;
                Ok(Value::Unit)
            }
            FN_DIGITAL_WRITE => {
                let (Some(pin), Some(level)) = (args[0].as_int(), args[1].as_int()) else {
                    return Ok(Value::Nil);
                };
                self.periph.digital_write(pin_arg(pin)?, level)?;
                Ok(Value::Unit)
            }
            FN_DIGITAL_READ => {
                let Some(pin) = args[0].as_int() else {
                    return Ok(Value::Nil);
                };
                let level = self.periph.digital_read(pin_arg(pin)?)?;
                Ok(Value::Int(level))
            }
            FN_ANALOG_WRITE => {
                let (Some(channel), Some(value)) = (args[0].as_int(), args[1].as_int()) else {
                    return Ok(Value::Nil);
                };
                self.periph
                    .analog_write(dac_channel_arg(channel)?, dac_value_arg(value)?)?;
                Ok(Value::Unit)
            }
            FN_ANALOG_READ => {
                let Some(channel) = args[0].as_int() else {
                    return Ok(Value::Nil);
                };
                let raw = self.periph.analog_read(adc_channel_arg(channel)?)?;
                Ok(Value::Int(i64::from(raw)))
            }
            _ => Err(CallError::UnknownFunction),
        }
    }
}

fn pin_arg(pin: i64) -> Result<u8, ShimError> {
    u8::try_from(pin).map_err(|_| GpioError::InvalidPin.into())
}

fn dac_channel_arg(channel: i64) -> Result<u8, ShimError> {
    u8::try_from(channel).map_err(|_| DacError::InvalidChannel.into())
}

fn dac_value_arg(value: i64) -> Result<u8, ShimError> {
    u8::try_from(value).map_err(|_| DacError::InvalidValue.into())
}

fn adc_channel_arg(channel: i64) -> Result<u8, ShimError> {
    u8::try_from(channel).map_err(|_| AdcError::InvalidChannel.into())
}
