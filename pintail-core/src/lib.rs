//! Script-facing peripheral access for ESP32-class chips
//!
//! This crate is the marshalling layer between an embedded scripting
//! interpreter and the chip's GPIO/DAC/ADC drivers:
//!
//! - Boundary value type matching the interpreter's boxing ([`value`])
//! - The direction/pull-flag integer encoding of pin modes ([`mode`])
//! - The script-visible constant table ([`constants`])
//! - Typed peripheral operations over the driver traits ([`shim`])
//! - Name-and-arity dispatch for the five script functions ([`bindings`])
//!
//! Everything is synchronous and blocking; the interpreter calls in on its
//! own thread and the drivers serialize hardware access.

#![no_std]
#![deny(unsafe_code)]

pub mod bindings;
pub mod constants;
pub mod mode;
pub mod shim;
pub mod value;

pub use bindings::{Bindings, CallError, FnSpec, FUNCTIONS};
pub use shim::{Peripherals, ShimError};
pub use value::Value;
