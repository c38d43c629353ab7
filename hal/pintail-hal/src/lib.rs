//! Pintail Hardware Abstraction Layer
//!
//! This crate defines the driver traits the Pintail script bindings call
//! into. The vendor's GPIO, one-shot DAC, and one-shot ADC drivers are
//! implemented out of tree (against the chip SDK); this crate only fixes
//! the seam so the marshalling layer can be compiled and tested anywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Script interpreter (embedder)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pintail-core (marshalling + dispatch)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pintail-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ vendor SDK    │       │ mock drivers  │
//! │ drivers       │       │ (tests)       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::GpioDriver`] - pad select, direction, pull bias, level I/O
//! - [`dac::DacDriver`] - one-shot DAC channel lifecycle and output
//! - [`adc::AdcDriver`] - one-shot ADC unit lifecycle and conversion

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod dac;
pub mod gpio;

#[cfg(feature = "mock")]
pub mod mock;

// Re-export key traits at crate root for convenience
pub use adc::{AdcChannelConfig, AdcDriver, AdcError};
pub use dac::{DacDriver, DacError};
pub use gpio::{Direction, GpioDriver, GpioError, Pull};
